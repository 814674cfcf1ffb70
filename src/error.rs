//! Error types for the K-map library
//!
//! This module provides the crate-wide error type. Equation parsing has its own
//! error type in [`crate::equation::EquationError`], which converts into
//! [`KmapError`] for callers that want a single error type.

use crate::equation::EquationError;
use std::fmt;
use std::io;

/// The main error type for the K-map library
///
/// Every variant describes input that the map cannot represent. Feedback such
/// as a wrong game answer is not an error and never shows up here.
#[derive(Debug)]
pub enum KmapError {
    /// A map was requested for a variable count other than 2 or 3
    InvalidVariableCount {
        /// The rejected variable count
        count: usize,
    },

    /// A cell vector had the wrong number of cells for its map
    ///
    /// Two-variable maps have 4 cells and three-variable maps have 8. When the
    /// variable count is inferred from the length, `expected` is `None`.
    CellCount {
        /// The expected number of cells, if the variable count was known
        expected: Option<usize>,
        /// The number of cells that was provided
        found: usize,
    },

    /// A cell held something other than 0 or 1
    InvalidCellValue {
        /// The offending value, as text
        value: String,
        /// The position of the offending cell
        position: usize,
    },

    /// A cell position or minterm index did not fit the map
    PositionOutOfRange {
        /// The rejected position
        position: usize,
        /// Number of cells on the map
        len: usize,
    },

    /// An equation could not be turned into a cell vector
    Equation(EquationError),

    /// IO error wrapper
    ///
    /// Wraps errors from the progress store.
    Io(io::Error),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::InvalidVariableCount { count } => write!(
                f,
                "Unsupported variable count {}. Only 2- and 3-variable maps are available.",
                count
            ),
            KmapError::CellCount {
                expected: Some(expected),
                found,
            } => write!(f, "Expected {} cells, found {}", expected, found),
            KmapError::CellCount {
                expected: None,
                found,
            } => write!(f, "Expected 4 or 8 cells, found {}", found),
            KmapError::InvalidCellValue { value, position } => write!(
                f,
                "Invalid cell value {:?} at position {}. Expected 0 or 1.",
                value, position
            ),
            KmapError::PositionOutOfRange { position, len } => write!(
                f,
                "Position {} is out of range for a map with {} cells",
                position, len
            ),
            KmapError::Equation(err) => write!(f, "{}", err),
            KmapError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Equation(err) => Some(err),
            KmapError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EquationError> for KmapError {
    fn from(err: EquationError) -> Self {
        KmapError::Equation(err)
    }
}

impl From<io::Error> for KmapError {
    fn from(err: io::Error) -> Self {
        KmapError::Io(err)
    }
}

// Conversion from KmapError to io::Error so `?` works in io::Result contexts
impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::Arc;

    #[test]
    fn test_invalid_variable_count_display() {
        let err = KmapError::InvalidVariableCount { count: 4 };
        let msg = err.to_string();
        assert!(msg.contains("Unsupported variable count 4"));
    }

    #[test]
    fn test_cell_count_display() {
        let err = KmapError::CellCount {
            expected: Some(8),
            found: 5,
        };
        assert_eq!(err.to_string(), "Expected 8 cells, found 5");

        let err = KmapError::CellCount {
            expected: None,
            found: 3,
        };
        assert!(err.to_string().contains("4 or 8"));
    }

    #[test]
    fn test_invalid_cell_value_display() {
        let err = KmapError::InvalidCellValue {
            value: "2".to_string(),
            position: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"2\""));
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn test_equation_error_conversion() {
        let eq_err = EquationError::NoTermsResolved {
            input: Arc::from("F = X"),
            skipped: vec![Arc::from("X")],
        };
        let err: KmapError = eq_err.into();
        assert!(matches!(err, KmapError::Equation(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_round_trip() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "progress file missing");
        let err: KmapError = io_err.into();
        assert!(err.to_string().contains("progress file missing"));

        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_other_errors_become_invalid_input() {
        let err = KmapError::PositionOutOfRange { position: 9, len: 8 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
