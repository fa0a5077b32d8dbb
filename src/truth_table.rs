//! Multi-output truth tables and the per-output minimization driver
//!
//! A [`TruthTable`] holds one bit-column per output function, all of the
//! same power-of-two length 2^nVars. Row m of a column is the function value
//! at minterm m, where bit i of m is the value of input i.
//!
//! Minimization runs the full pipeline (on-set extraction, prime-implicant
//! search, greedy cover selection) independently for each output. Outputs
//! share no mutable state, so the driver can also run them on one scoped
//! thread each; results come back in output-index order either way.

use std::io::BufRead;
use std::str::FromStr;
use std::thread;

use log::debug;

use crate::cover::{Cover, CoverStall};
use crate::error::TableError;
use crate::MinimizerConfig;

/// The minimization result for one output function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCover {
    /// Output index (position of the column in the truth table)
    pub index: usize,
    /// Selected cover; partial if `stall` is set
    pub cover: Cover,
    /// Stall report if greedy selection could not cover the full on-set.
    /// A stall is local to this output and never aborts sibling outputs.
    pub stall: Option<CoverStall>,
}

/// A multi-output truth table over a shared set of input variables.
///
/// # Examples
///
/// ```
/// use qm_logic::TruthTable;
///
/// // Two outputs over two inputs, minterm order 00, 01, 10, 11:
/// // y0 = x0 OR x1, y1 = x0 AND x1
/// let table: TruthTable = "0111\n0001".parse()?;
/// assert_eq!(table.n_vars(), 2);
/// assert_eq!(table.num_outputs(), 2);
///
/// let results = table.minimize()?;
/// assert_eq!(results[0].cover.len(), 2);
/// assert_eq!(results[1].cover.len(), 1);
/// # Ok::<(), qm_logic::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    n_vars: usize,
    columns: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Build a truth table from output bit-columns.
    ///
    /// Fails if no columns are given, the first column's length is not a
    /// power of two, or any later column's length differs from the first.
    pub fn new(columns: Vec<Vec<bool>>) -> Result<Self, TableError> {
        let Some(first) = columns.first() else {
            return Err(TableError::Empty);
        };
        let len = first.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(TableError::LengthNotPowerOfTwo { len });
        }
        for (line, column) in columns.iter().enumerate().skip(1) {
            if column.len() != len {
                return Err(TableError::LineLengthMismatch {
                    line,
                    len: column.len(),
                    expected: len,
                });
            }
        }
        Ok(TruthTable {
            n_vars: len.trailing_zeros() as usize,
            columns,
        })
    }

    /// Read a truth table from text: one line of `0`/`1` per output.
    ///
    /// Whitespace inside lines is discarded and blank lines are skipped,
    /// matching the `.truth` file convention.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TableError> {
        let mut columns = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            let mut column = Vec::with_capacity(cells.len());
            for (col_no, &c) in cells.iter().enumerate() {
                match c {
                    '0' => column.push(false),
                    '1' => column.push(true),
                    found => {
                        return Err(TableError::InvalidSymbol {
                            line: line_no,
                            column: col_no,
                            found,
                        })
                    }
                }
            }
            columns.push(column);
        }
        TruthTable::new(columns)
    }

    /// Number of input variables (table length is 2^nVars).
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Number of output functions.
    pub fn num_outputs(&self) -> usize {
        self.columns.len()
    }

    /// The bit-column of one output function.
    pub fn column(&self, output: usize) -> &[bool] {
        &self.columns[output]
    }

    /// Minterms where the given output evaluates to 1, in increasing order.
    pub fn on_set(&self, output: usize) -> Vec<u32> {
        self.columns[output]
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(|(m, _)| m as u32)
            .collect()
    }

    /// Minimize every output with the default configuration.
    pub fn minimize(&self) -> Result<Vec<OutputCover>, TableError> {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize every output.
    ///
    /// Fails up front if the table implies more input variables than
    /// `config.max_vars`; otherwise every output is processed and the
    /// results are returned in output-index order. A cover stall in one
    /// output is reported on its [`OutputCover`] and does not affect the
    /// others.
    pub fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Vec<OutputCover>, TableError> {
        if self.n_vars > config.max_vars {
            return Err(TableError::TooManyVariables {
                n_vars: self.n_vars,
                max: config.max_vars,
            });
        }

        if config.parallel {
            Ok(self.minimize_parallel())
        } else {
            Ok((0..self.num_outputs())
                .map(|j| self.minimize_output(j))
                .collect())
        }
    }

    /// One output's whole pipeline, an atomic non-interruptible unit of work.
    fn minimize_output(&self, index: usize) -> OutputCover {
        let on_set = self.on_set(index);
        debug!("output y{}: on-set size {}", index, on_set.len());
        let (cover, stall) = Cover::minimize(&on_set, self.n_vars);
        debug!("output y{}: {} implicants selected", index, cover.len());
        OutputCover {
            index,
            cover,
            stall,
        }
    }

    /// Each output on its own scoped thread; joining in spawn order keeps
    /// the result sequence in output-index order.
    fn minimize_parallel(&self) -> Vec<OutputCover> {
        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.num_outputs())
                .map(|j| scope.spawn(move || self.minimize_output(j)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("minimizer thread panicked"))
                .collect()
        })
    }
}

impl FromStr for TruthTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruthTable::from_reader(s.as_bytes())
    }
}
