//! The cell vector: the truth table as it sits on the map

use super::VarCount;
use crate::error::KmapError;
use std::fmt;
use std::str::FromStr;

/// Truth-table assignment of a two- or three-variable map
///
/// Cells are stored in display position order (see [`crate::kmap`]). Use
/// [`CellVector::from_minterms`] and [`CellVector::minterm`] to work with
/// canonical minterm numbers instead.
///
/// # Examples
///
/// ```
/// use kmap_logic::{CellVector, VarCount};
///
/// # fn main() -> Result<(), kmap_logic::KmapError> {
/// let mut cells = CellVector::zeros(VarCount::Two);
/// cells.toggle(1)?;
/// cells.toggle(2)?;
/// assert_eq!(cells.to_string(), "0110");
///
/// let parsed: CellVector = "0110".parse()?;
/// assert_eq!(parsed, cells);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CellVector {
    vars: VarCount,
    cells: Vec<bool>,
}

impl CellVector {
    /// A map with every cell set to 0
    pub fn zeros(vars: VarCount) -> Self {
        CellVector {
            vars,
            cells: vec![false; vars.cells()],
        }
    }

    /// A map with every cell set to 1
    pub fn ones(vars: VarCount) -> Self {
        CellVector {
            vars,
            cells: vec![true; vars.cells()],
        }
    }

    /// Build by evaluating `f` at every display position
    pub fn from_fn<F>(vars: VarCount, f: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        CellVector {
            vars,
            cells: (0..vars.cells()).map(f).collect(),
        }
    }

    /// Build from 0/1 values in display position order
    pub fn from_values(vars: VarCount, values: &[u8]) -> Result<Self, KmapError> {
        if values.len() != vars.cells() {
            return Err(KmapError::CellCount {
                expected: Some(vars.cells()),
                found: values.len(),
            });
        }
        let cells = values
            .iter()
            .enumerate()
            .map(|(position, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(KmapError::InvalidCellValue {
                    value: value.to_string(),
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CellVector { vars, cells })
    }

    /// Build a map whose 1-cells are the given display positions
    pub fn from_positions<I>(vars: VarCount, positions: I) -> Result<Self, KmapError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut cells = CellVector::zeros(vars);
        for position in positions {
            cells.set(position, true)?;
        }
        Ok(cells)
    }

    /// Build a map whose 1-cells are the given canonical minterms
    pub fn from_minterms<I>(vars: VarCount, minterms: I) -> Result<Self, KmapError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut cells = CellVector::zeros(vars);
        for minterm in minterms {
            if minterm >= vars.cells() {
                return Err(KmapError::PositionOutOfRange {
                    position: minterm,
                    len: vars.cells(),
                });
            }
            cells.cells[vars.position_of(minterm)] = true;
        }
        Ok(cells)
    }

    /// Variable count of the map
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Number of cells (4 or 8)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a map has at least four cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in display position order
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Cell values as 0/1 in display position order
    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }

    /// Value at a display position, `None` when out of range
    pub fn get(&self, position: usize) -> Option<bool> {
        self.cells.get(position).copied()
    }

    /// Value of a canonical minterm, `None` when out of range
    pub fn minterm(&self, minterm: usize) -> Option<bool> {
        if minterm >= self.len() {
            return None;
        }
        self.get(self.vars.position_of(minterm))
    }

    /// Set the cell at a display position
    pub fn set(&mut self, position: usize, value: bool) -> Result<(), KmapError> {
        let len = self.len();
        match self.cells.get_mut(position) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(KmapError::PositionOutOfRange { position, len }),
        }
    }

    /// Flip the cell at a display position and return its new value
    pub fn toggle(&mut self, position: usize) -> Result<bool, KmapError> {
        let value = !self.get(position).ok_or(KmapError::PositionOutOfRange {
            position,
            len: self.len(),
        })?;
        self.set(position, value)?;
        Ok(value)
    }

    /// Display positions holding 1, in ascending order
    pub fn ones_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(position, &set)| set.then_some(position))
    }

    /// Canonical minterms holding 1, in ascending order
    pub fn minterms(&self) -> Vec<usize> {
        let mut minterms: Vec<usize> = self
            .ones_positions()
            .map(|position| self.vars.minterm_at(position))
            .collect();
        minterms.sort_unstable();
        minterms
    }

    /// Number of 1-cells
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True when every cell is 1
    pub fn all_set(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    /// True when every cell is 0
    pub fn none_set(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }
}

impl fmt::Display for CellVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", u8::from(cell))?;
        }
        Ok(())
    }
}

impl fmt::Debug for CellVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellVector({}var: {})", self.vars.count(), self)
    }
}

/// Parse a bit string such as `"0110"` or `"1001 0110"`
///
/// Whitespace, `_` and `,` are ignored. The length (4 or 8) selects the
/// variable count.
impl FromStr for CellVector {
    type Err = KmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != ',')
            .collect();
        let vars = VarCount::from_cells(digits.len())?;
        let values = digits
            .iter()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(KmapError::InvalidCellValue {
                    value: other.to_string(),
                    position,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        CellVector::from_values(vars, &values)
    }
}
