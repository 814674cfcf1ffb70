//! Map geometry: variables, variable counts and the display layout
//!
//! Both supported maps have two rows, one per value of `A`. The columns run in
//! Gray-code order so that neighbouring columns differ in a single variable:
//!
//! ```text
//!   two variables            three variables
//!          B'   B                  B'C'  B'C   BC   BC'
//!   A'   [ 0    1 ]          A'  [ 0     1     2    3  ]
//!   A    [ 2    3 ]          A   [ 4     5     6    7  ]
//! ```
//!
//! The numbers above are *positions*: the order cells are stored in a
//! [`CellVector`]. The minterm at a position is the canonical index
//! (`A` is the most significant bit), so position 2 of the three-variable map
//! holds minterm 3 (`A'BC`).
//!
//! # Examples
//!
//! ```
//! use kmap_logic::VarCount;
//!
//! let vars = VarCount::Three;
//! assert_eq!(vars.cells(), 8);
//! assert_eq!(vars.minterm_at(2), 3);
//! assert_eq!(vars.position_of(3), 2);
//! ```

pub mod adjacency;
mod cells;
pub mod labels;

pub use cells::CellVector;

use crate::error::KmapError;
use std::fmt;

/// Gray-code column order for the three-variable map (`BC` = 00, 01, 11, 10)
const GRAY_COLUMNS: [usize; 4] = [0, 1, 3, 2];

/// Number of rows on every supported map
pub const ROWS: usize = 2;

/// A map variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Row variable, most significant minterm bit
    A,
    /// First column variable
    B,
    /// Second column variable (three-variable maps only)
    C,
}

impl Variable {
    /// All variables in significance order
    pub const ALL: [Variable; 3] = [Variable::A, Variable::B, Variable::C];

    /// Zero-based index of the variable (`A` = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The variable's letter
    pub fn name(self) -> char {
        match self {
            Variable::A => 'A',
            Variable::B => 'B',
            Variable::C => 'C',
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of variables of a map
///
/// Only two- and three-variable maps exist; [`VarCount::from_count`] rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarCount {
    /// Two variables (`A`, `B`), a 2x2 map
    Two,
    /// Three variables (`A`, `B`, `C`), a 2x4 map
    Three,
}

impl VarCount {
    /// Convert a plain count into a `VarCount`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::VarCount;
    ///
    /// assert_eq!(VarCount::from_count(3).unwrap(), VarCount::Three);
    /// assert!(VarCount::from_count(4).is_err());
    /// ```
    pub fn from_count(count: usize) -> Result<Self, KmapError> {
        match count {
            2 => Ok(VarCount::Two),
            3 => Ok(VarCount::Three),
            _ => Err(KmapError::InvalidVariableCount { count }),
        }
    }

    /// Infer the variable count from a number of cells (4 or 8)
    pub fn from_cells(len: usize) -> Result<Self, KmapError> {
        match len {
            4 => Ok(VarCount::Two),
            8 => Ok(VarCount::Three),
            _ => Err(KmapError::CellCount {
                expected: None,
                found: len,
            }),
        }
    }

    /// Number of variables
    pub const fn count(self) -> usize {
        match self {
            VarCount::Two => 2,
            VarCount::Three => 3,
        }
    }

    /// Number of cells on the map
    pub const fn cells(self) -> usize {
        1 << self.count()
    }

    /// Number of columns on the map
    pub const fn columns(self) -> usize {
        self.cells() / ROWS
    }

    /// The variables of this map in significance order
    pub fn variables(self) -> &'static [Variable] {
        &Variable::ALL[..self.count()]
    }

    /// Minterm bit that holds `var`
    pub(crate) fn bit(self, var: Variable) -> usize {
        self.count() - 1 - var.index()
    }

    /// Short mode key used for persisted progress (`2var` / `3var`)
    pub fn mode_key(self) -> &'static str {
        match self {
            VarCount::Two => "2var",
            VarCount::Three => "3var",
        }
    }

    /// Row and column of a display position
    pub fn row_col(self, position: usize) -> (usize, usize) {
        (position / self.columns(), position % self.columns())
    }

    /// Canonical minterm index stored at a display position
    pub fn minterm_at(self, position: usize) -> usize {
        let (row, col) = self.row_col(position);
        let col_bits = match self {
            VarCount::Two => col,
            VarCount::Three => GRAY_COLUMNS[col],
        };
        (row << (self.count() - 1)) | col_bits
    }

    /// Display position of a canonical minterm index
    pub fn position_of(self, minterm: usize) -> usize {
        let row = minterm >> (self.count() - 1);
        let col_bits = minterm & ((1 << (self.count() - 1)) - 1);
        let col = match self {
            VarCount::Two => col_bits,
            VarCount::Three => GRAY_COLUMNS
                .iter()
                .position(|&g| g == col_bits)
                .unwrap_or(col_bits),
        };
        row * self.columns() + col
    }
}

impl fmt::Display for VarCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl TryFrom<usize> for VarCount {
    type Error = KmapError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        VarCount::from_count(count)
    }
}
