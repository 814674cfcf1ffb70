//! Free-form editing of a map
//!
//! The [`Workbench`] holds one map outside the game: the player toggles cells
//! or submits an equation and reads the simplified result back. A rejected
//! equation leaves the map alone and is kept as the inline error.

use crate::equation::{parse, EquationError};
use crate::error::KmapError;
use crate::kmap::{CellVector, VarCount};
use crate::minimize::{simplify, Solution};
use log::debug;

/// Editable map with its last submitted equation
///
/// # Examples
///
/// ```
/// use kmap_logic::{VarCount, Workbench};
///
/// # fn main() -> Result<(), kmap_logic::KmapError> {
/// let mut bench = Workbench::new(VarCount::Two);
/// assert_eq!(bench.equation(), "F = A'B + AB'");
///
/// bench.submit("F = A'B' + A'B + AB'")?;
/// assert_eq!(bench.solution().expression().to_string(), "F = A' + B'");
///
/// assert!(bench.submit("F = nonsense").is_err());
/// assert_eq!(bench.cells().to_string(), "1110");
/// assert!(bench.error().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Workbench {
    vars: VarCount,
    cells: CellVector,
    equation: String,
    error: Option<EquationError>,
}

impl Workbench {
    /// A cleared map with the sample equation for the variable count
    ///
    /// The sample is only shown; the cells start at 0.
    pub fn new(vars: VarCount) -> Self {
        Workbench {
            vars,
            cells: CellVector::zeros(vars),
            equation: sample_equation(vars).to_string(),
            error: None,
        }
    }

    /// Variable count of the map
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Current cells
    pub fn cells(&self) -> &CellVector {
        &self.cells
    }

    /// Last accepted equation (or the sample)
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Error of the last rejected submission, cleared by the next success
    pub fn error(&self) -> Option<&EquationError> {
        self.error.as_ref()
    }

    /// Flip a cell and return its new value
    pub fn toggle(&mut self, position: usize) -> Result<bool, KmapError> {
        self.cells.toggle(position)
    }

    /// Replace the map with the cells of an equation
    ///
    /// On error the cells and the current equation are unchanged and the
    /// error is also kept for [`Workbench::error`].
    pub fn submit(&mut self, text: &str) -> Result<&CellVector, EquationError> {
        match parse(text, self.vars) {
            Ok(cells) => {
                debug!("workbench: {:?} -> {}", text, cells);
                self.cells = cells;
                self.equation = text.to_string();
                self.error = None;
                Ok(&self.cells)
            }
            Err(err) => {
                debug!("workbench: rejected {:?}", text);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Switch variable count, resetting the map and the sample equation
    pub fn set_var_count(&mut self, vars: VarCount) {
        *self = Workbench::new(vars);
    }

    /// Simplification of the current cells
    pub fn solution(&self) -> Solution {
        simplify(&self.cells)
    }
}

/// Sample equation shown on a fresh map
pub fn sample_equation(vars: VarCount) -> &'static str {
    match vars {
        VarCount::Two => "F = A'B + AB'",
        VarCount::Three => "F = A'B'C' + AB'C",
    }
}

/// Example equations offered for a variable count
///
/// Reduced forms such as `F = A + B` are shown for reference and do not
/// parse; only sums of full products fill the map.
pub fn example_equations(vars: VarCount) -> &'static [&'static str] {
    match vars {
        VarCount::Two => &[
            "F = A'B + AB'",
            "F = A + B",
            "F = A' + B'",
            "F = AB + A'B'",
            "F = A'B + AB' + AB",
        ],
        VarCount::Three => &[
            "F = A'B'C' + A'BC + ABC",
            "F = A'B' + BC' + AC",
            "F = A'B'C + AB'C' + ABC",
            "F = A'B' + B'C + AC'",
            "F = A'B'C' + A'BC' + ABC'",
        ],
    }
}
