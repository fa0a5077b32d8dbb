//! Error types for truth-table validation and parsing

use std::fmt;
use std::io;

/// Errors surfaced before any minimization begins.
///
/// Configuration and input defects are fatal to the whole run: the variable
/// count and table length are shared by every output column, so no
/// per-output recovery is meaningful. Cover stalls are *not* errors; they
/// are reported per output alongside the partial cover (see
/// [`CoverStall`](crate::CoverStall)).
#[derive(Debug)]
pub enum TableError {
    /// Truth-table length is not a power of two
    LengthNotPowerOfTwo {
        /// The offending column length
        len: usize,
    },
    /// The table implies more input variables than the configured ceiling
    TooManyVariables {
        /// Variable count derived from the column length
        n_vars: usize,
        /// Configured ceiling
        max: usize,
    },
    /// An output column's length differs from the first column's
    LineLengthMismatch {
        /// Zero-based index of the offending column
        line: usize,
        /// Its length
        len: usize,
        /// Length of the first column
        expected: usize,
    },
    /// A character other than '0' or '1' appeared in a truth-table line
    InvalidSymbol {
        /// Zero-based line index
        line: usize,
        /// Zero-based column index within the line
        column: usize,
        /// The character found
        found: char,
    },
    /// The table holds no output columns at all
    Empty,
    /// IO failure while reading a truth-table source
    Io(io::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::LengthNotPowerOfTwo { len } => {
                write!(f, "Truth-table length {} is not a power of two", len)
            }
            TableError::TooManyVariables { n_vars, max } => write!(
                f,
                "Table implies {} input variables, exceeding the configured maximum of {}",
                n_vars, max
            ),
            TableError::LineLengthMismatch {
                line,
                len,
                expected,
            } => write!(
                f,
                "Output column {} has length {} but the table length is {}",
                line, len, expected
            ),
            TableError::InvalidSymbol {
                line,
                column,
                found,
            } => write!(
                f,
                "Invalid symbol {:?} at line {}, column {}. Expected '0' or '1'.",
                found, line, column
            ),
            TableError::Empty => write!(f, "Truth table holds no output columns"),
            TableError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(err: io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_length_not_power_of_two_display() {
        let err = TableError::LengthNotPowerOfTwo { len: 6 };
        let msg = err.to_string();
        assert!(msg.contains("length 6"));
        assert!(msg.contains("power of two"));
    }

    #[test]
    fn test_too_many_variables_display() {
        let err = TableError::TooManyVariables { n_vars: 24, max: 20 };
        let msg = err.to_string();
        assert!(msg.contains("24 input variables"));
        assert!(msg.contains("maximum of 20"));
    }

    #[test]
    fn test_line_length_mismatch_display() {
        let err = TableError::LineLengthMismatch {
            line: 2,
            len: 7,
            expected: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("column 2"));
        assert!(msg.contains("length 7"));
        assert!(msg.contains("table length is 8"));
    }

    #[test]
    fn test_invalid_symbol_display() {
        let err = TableError::InvalidSymbol {
            line: 1,
            column: 3,
            found: 'x',
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("line 1"));
        assert!(msg.contains("column 3"));
    }

    #[test]
    fn test_io_error_conversion_roundtrip() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let table_err: TableError = io_err.into();
        assert!(table_err.source().is_some());

        let back: io::Error = table_err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_error_to_io_error() {
        let err = TableError::Empty;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
