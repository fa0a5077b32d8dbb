//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes multi-output Boolean functions given as truth
//! tables: for each output it computes a minimal-ish sum-of-products cover
//! using the classic Quine-McCluskey prime-implicant search followed by a
//! greedy set-cover selection.
//!
//! ## Overview
//!
//! The minimizer is a pure function of (on-set, variable count): it holds no
//! global state, performs no IO, and is deterministic down to the bit level.
//! Per-output minimization is fully independent, so multi-output tables can
//! optionally be processed with one thread per output.
//!
//! The greedy cover step guarantees a valid cover whenever one exists but
//! not a minimum-cardinality one; exact minimum-literal SOP is out of scope.
//!
//! ## Minimizing a truth table
//!
//! Each line of a truth table is one output function: 2^nVars characters of
//! `0`/`1`, where position m gives the function value at minterm m and bit i
//! of m is the value of input `xi`.
//!
//! ```
//! use qm_logic::{Sop, TruthTable};
//!
//! // y0 = x0 XOR x1, y1 = x0 AND x1
//! let table: TruthTable = "0110\n0001".parse()?;
//! let results = table.minimize()?;
//!
//! assert_eq!(Sop::from_cover(&results[0].cover).to_string(), "(x0 & ~x1) | (~x0 & x1)");
//! assert_eq!(Sop::from_cover(&results[1].cover).to_string(), "x0 & x1");
//! # Ok::<(), qm_logic::TableError>(())
//! ```
//!
//! ## Working with covers directly
//!
//! ```
//! use qm_logic::Cover;
//!
//! // On-set {1, 3} over two variables: x1 is irrelevant, the cover is x0
//! let (cover, stall) = Cover::minimize(&[1, 3], 2);
//! assert!(stall.is_none());
//! assert_eq!(cover.len(), 1);
//! ```
//!
//! ## Performance characteristics
//!
//! The prime-implicant search is quadratic in the working-set size per level
//! and can blow up exponentially in the number of generated cubes. This is
//! inherent to exact Quine-McCluskey: on-sets with tens of thousands of
//! minterms may take multi-second to intractable runtimes. Callers needing a
//! bound use [`MinimizerConfig::max_vars`] (default 20) to refuse oversized
//! tables up front; finer time budgeting has to wrap whole-output
//! invocations, as a single output's search is not interruptible.

pub mod cover;
pub mod error;
pub mod expression;
pub mod truth_table;
pub mod verilog;

// Re-export high-level public API
pub use cover::{Cover, CoverStall, Implicant};
pub use error::TableError;
pub use expression::{Sop, Term};
pub use truth_table::{OutputCover, TruthTable};

/// Configuration for the minimization driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Refuse tables implying more input variables than this.
    ///
    /// The default of 20 keeps worst-case runtimes within reason; the
    /// implicant representation itself supports up to 32.
    pub max_vars: usize,
    /// Minimize each output on its own scoped thread
    pub parallel: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            max_vars: 20,
            parallel: false,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimizerConfig::new();
        assert_eq!(config.max_vars, 20);
        assert!(!config.parallel);
    }

    #[test]
    fn test_end_to_end_or() {
        let table: TruthTable = "0111".parse().unwrap();
        let results = table.minimize().unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].stall.is_none());
        assert_eq!(results[0].cover.covered_minterms(), vec![1, 2, 3]);
    }
}
