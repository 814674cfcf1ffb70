//! Sum-of-minterms equation parsing
//!
//! Equations are written as `F = ` followed by full products joined by `+`,
//! e.g. `F = A'B'C + ABC'`. Every product names one minterm and sets its cell
//! to 1.
//!
//! The accepted grammar is deliberately small:
//!
//! - the first `F =` (any case, any spacing) is stripped and all whitespace
//!   is removed;
//! - the rest is split on `+`;
//! - a chunk resolves only when it is the full product of the map's variables
//!   in `A B C` order, each one optionally primed.
//!
//! Anything else (partial products, reordered literals, parentheses, other
//! letters) is skipped. An equation in which no chunk resolves is an
//! [`EquationError`].
//!
//! # Examples
//!
//! ```
//! use kmap_logic::{parse, VarCount};
//!
//! # fn main() -> Result<(), kmap_logic::EquationError> {
//! let cells = parse("F = A'B + AB'", VarCount::Two)?;
//! assert_eq!(cells.values(), vec![0, 1, 1, 0]);
//!
//! // Unrecognised terms are skipped
//! let cells = parse("F = A'B'C' + AB + AB'C", VarCount::Three)?;
//! assert_eq!(cells.minterms(), vec![0, 5]);
//!
//! assert!(parse("F = X + Y", VarCount::Two).is_err());
//! # Ok(())
//! # }
//! ```

mod error;
mod parser;


pub use error::EquationError;

use crate::kmap::{CellVector, VarCount};
use log::debug;
use parser::ProductReader;
use std::sync::Arc;

/// Result of parsing an equation: the cells and the terms that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEquation {
    cells: CellVector,
    resolved: usize,
    skipped: Vec<Arc<str>>,
}

impl ParsedEquation {
    /// The cell vector the equation describes
    pub fn cells(&self) -> &CellVector {
        &self.cells
    }

    /// Number of terms that resolved, repeats included
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    /// Term texts that were skipped, whitespace removed
    pub fn skipped(&self) -> &[Arc<str>] {
        &self.skipped
    }

    /// Take the cell vector
    pub fn into_cells(self) -> CellVector {
        self.cells
    }
}

/// Parse an equation into a cell vector
///
/// See the [module documentation](self) for the accepted grammar.
pub fn parse(text: &str, vars: VarCount) -> Result<CellVector, EquationError> {
    parse_equation(text, vars).map(ParsedEquation::into_cells)
}

/// Parse an equation, keeping track of the skipped terms
///
/// # Examples
///
/// ```
/// use kmap_logic::equation::parse_equation;
/// use kmap_logic::VarCount;
///
/// # fn main() -> Result<(), kmap_logic::EquationError> {
/// let parsed = parse_equation("F = A'B + B'A", VarCount::Two)?;
/// assert_eq!(parsed.cells().to_string(), "0100");
/// assert_eq!(parsed.skipped().len(), 1);
/// assert_eq!(&*parsed.skipped()[0], "B'A");
/// # Ok(())
/// # }
/// ```
pub fn parse_equation(text: &str, vars: VarCount) -> Result<ParsedEquation, EquationError> {
    let body: String = strip_prefix(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let reader = ProductReader::new(vars);

    let mut minterms = Vec::new();
    let mut skipped = Vec::new();

    for chunk in body.split('+') {
        match reader.minterm(chunk) {
            Some(minterm) => {
                debug!("parse: {} -> m{}", chunk, minterm);
                minterms.push(minterm);
            }
            None if chunk.is_empty() => {}
            None => {
                debug!("parse: skipping unrecognised term {:?}", chunk);
                skipped.push(Arc::from(chunk));
            }
        }
    }

    let resolved = minterms.len();
    if resolved == 0 {
        return Err(EquationError::NoTermsResolved {
            input: Arc::from(text),
            skipped,
        });
    }
    let cells = CellVector::from_fn(vars, |position| {
        minterms.contains(&vars.minterm_at(position))
    });
    Ok(ParsedEquation {
        cells,
        resolved,
        skipped,
    })
}

/// Remove the first `F =` (case-insensitive, any whitespace around `=`)
fn strip_prefix(text: &str) -> String {
    for (start, c) in text.char_indices() {
        if c != 'F' && c != 'f' {
            continue;
        }
        let rest = &text[start + 1..];
        let after_space = rest.trim_start();
        if let Some(after_eq) = after_space.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            return format!("{}{}", &text[..start], after_eq);
        }
    }
    text.to_string()
}
