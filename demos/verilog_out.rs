//! Emit a Verilog module for a minimized truth table.
//!
//! Run with: `cargo run --example verilog_out`

use qm_logic::{verilog, TruthTable};
use std::io;

fn main() -> io::Result<()> {
    // 2-to-1 multiplexer: x2 selects between x0 and x1.
    // Minterm order 000..111; output is x0 when x2=0, x1 when x2=1.
    let table: TruthTable = "01010011".parse().map_err(io::Error::from)?;
    let results = table.minimize().map_err(io::Error::from)?;

    let mut stdout = io::stdout();
    verilog::write_verilog(&mut stdout, "mux21", table.n_vars(), &results)
}
