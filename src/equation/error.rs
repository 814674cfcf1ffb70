//! Error types for equation parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to equation parsing
///
/// Terms the parser does not recognise are skipped rather than reported one
/// by one. Only an equation in which nothing could be resolved is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    /// No term of the equation named a minterm of the active map
    NoTermsResolved {
        /// The original input string
        input: Arc<str>,
        /// The term texts that were skipped, whitespace removed
        skipped: Vec<Arc<str>>,
    },
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::NoTermsResolved { input, skipped } => {
                if skipped.is_empty() {
                    write!(f, "No terms found in equation {:?}", input)
                } else {
                    let skipped: Vec<&str> = skipped.iter().map(|s| s.as_ref()).collect();
                    write!(
                        f,
                        "No valid minterms in equation {:?} (skipped: {})",
                        input,
                        skipped.join(", ")
                    )
                }
            }
        }
    }
}

impl std::error::Error for EquationError {}

impl From<EquationError> for io::Error {
    fn from(err: EquationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
