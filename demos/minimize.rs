//! Minimize a small multi-output truth table and print the SOP expressions.
//!
//! Run with: `cargo run --example minimize`

use qm_logic::{Sop, TruthTable};

fn main() -> Result<(), qm_logic::TableError> {
    // A full adder over inputs x0 (a), x1 (b), x2 (carry-in):
    // y0 is the sum bit, y1 the carry-out
    let table: TruthTable = "01101001\n00010111".parse()?;

    println!(
        "{} inputs, {} outputs",
        table.n_vars(),
        table.num_outputs()
    );

    for out in table.minimize()? {
        println!(
            "y{} = {}  ({} implicants)",
            out.index,
            Sop::from_cover(&out.cover),
            out.cover.len()
        );
        if let Some(stall) = out.stall {
            println!("  warning: {}", stall);
        }
    }

    Ok(())
}
