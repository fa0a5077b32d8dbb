//! Verilog writer for minimized SOP covers
//!
//! Emits a multi-output Verilog module with one `assign` per output: the
//! disjunction of the cover's product terms, or `1'b0`/`1'b1` for constant
//! functions. Inputs are named `x0..x{n-1}` and outputs `y0..y{m-1}`,
//! matching the expression renderer's literal names.

use std::io::{self, Write};

use crate::expression::Sop;
use crate::truth_table::OutputCover;

/// Write a Verilog module for a set of minimized outputs.
///
/// Output port names are taken from each result's `index`, so the port
/// list, declarations, and `assign` lines stay consistent even for a
/// subset or reordering of the driver's results. Passing the full result
/// of [`TruthTable::minimize`](crate::TruthTable::minimize) yields ports
/// `y0..y{m-1}` in order.
///
/// # Examples
///
/// ```
/// use qm_logic::{verilog, TruthTable};
///
/// let table: TruthTable = "0111".parse()?;
/// let results = table.minimize()?;
///
/// let mut buffer = Vec::new();
/// verilog::write_verilog(&mut buffer, "or_gate", table.n_vars(), &results)?;
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.contains("assign y0 = (x1) | (x0);"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_verilog<W: Write>(
    writer: &mut W,
    module_name: &str,
    n_vars: usize,
    outputs: &[OutputCover],
) -> io::Result<()> {
    write!(writer, "module {} (", module_name)?;
    for i in 0..n_vars {
        write!(writer, "x{}, ", i)?;
    }
    for (k, out) in outputs.iter().enumerate() {
        write!(writer, "y{}", out.index)?;
        if k + 1 < outputs.len() {
            write!(writer, ", ")?;
        }
    }
    writeln!(writer, ");")?;

    for i in 0..n_vars {
        writeln!(writer, "  input x{};", i)?;
    }
    for out in outputs {
        writeln!(writer, "  output y{};", out.index)?;
    }

    for out in outputs {
        write!(writer, "  assign y{} = ", out.index)?;
        match Sop::from_cover(&out.cover) {
            Sop::Constant(false) => write!(writer, "1'b0")?,
            Sop::Constant(true) => write!(writer, "1'b1")?,
            Sop::Terms(terms) => {
                for (k, term) in terms.iter().enumerate() {
                    if k > 0 {
                        write!(writer, " | ")?;
                    }
                    write!(writer, "({})", term)?;
                }
            }
        }
        writeln!(writer, ";")?;
    }

    writeln!(writer, "endmodule")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TruthTable;

    fn render(table_text: &str, module_name: &str) -> String {
        let table: TruthTable = table_text.parse().unwrap();
        let results = table.minimize().unwrap();
        let mut buffer = Vec::new();
        write_verilog(&mut buffer, module_name, table.n_vars(), &results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_or_gate_module() {
        let text = render("0111", "or_gate");
        assert_eq!(
            text,
            "module or_gate (x0, x1, y0);\n\
             \x20 input x0;\n\
             \x20 input x1;\n\
             \x20 output y0;\n\
             \x20 assign y0 = (x1) | (x0);\n\
             endmodule\n"
        );
    }

    #[test]
    fn test_constant_outputs() {
        let text = render("0000\n1111", "constants");
        assert!(text.contains("assign y0 = 1'b0;"));
        assert!(text.contains("assign y1 = 1'b1;"));
    }

    #[test]
    fn test_output_ports_follow_result_indices() {
        // Writing only the second output must declare and assign y1, not y0
        let table: TruthTable = "0001\n0110".parse().unwrap();
        let results = table.minimize().unwrap();
        let mut buffer = Vec::new();
        write_verilog(&mut buffer, "xor_only", table.n_vars(), &results[1..]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("module xor_only (x0, x1, y1);"));
        assert!(text.contains("  output y1;"));
        assert!(text.contains("assign y1 = "));
        assert!(!text.contains("y0"));
    }

    #[test]
    fn test_multi_output_port_list() {
        let text = render("0001\n0110", "pair");
        assert!(text.starts_with("module pair (x0, x1, y0, y1);"));
        assert!(text.contains("assign y0 = (x0 & x1);"));
        assert!(text.ends_with("endmodule\n"));
    }
}
