//! Adjacency groups found on a map
//!
//! A [`Group`] is a power-of-two block of 1-cells that are pairwise connected
//! through single-variable changes: a single cell, a pair, a quad or the whole
//! map. [`find_groups`] discovers them; the minimiser turns them into terms.
//!
//! # Examples
//!
//! ```
//! use kmap_logic::{find_groups, CellVector, GroupKind, Orientation};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! // Outer columns of the 3-variable map: a quad through the wraparound
//! let cells: CellVector = "1001 1001".parse()?;
//! let groups = find_groups(&cells);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].kind(), GroupKind::Quad(Orientation::Wrap));
//! assert_eq!(groups[0].term().to_string(), "C'");
//! # Ok(())
//! # }
//! ```

mod finder;

#[cfg(test)]
mod tests;

pub use finder::find_groups;

use crate::kmap::adjacency;
use crate::kmap::VarCount;
use crate::minimize::Term;
use std::cmp::Reverse;
use std::fmt;

/// Geometry of a pair or quad on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells side by side in one row (a whole row for quads)
    Row,
    /// Cells stacked in one column
    Column,
    /// A 2x2 block of neighbouring columns
    Square,
    /// Cells joined through the left/right edge of the map
    Wrap,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Row => "row",
            Orientation::Column => "column",
            Orientation::Square => "square",
            Orientation::Wrap => "wrap",
        };
        write!(f, "{}", name)
    }
}

/// Size class of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// One cell
    Single,
    /// Two cells
    Pair(Orientation),
    /// Four cells (three-variable maps only; on a 2x2 map four cells is [`GroupKind::Full`])
    Quad(Orientation),
    /// Every cell of the map, the constant 1
    Full,
}

/// One adjacency group
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Group {
    kind: GroupKind,
    vars: VarCount,
    positions: Vec<usize>,
    term: Term,
}

impl Group {
    /// Build a group from a sub-cube of display positions
    ///
    /// `positions` must describe a valid sub-cube; the finder only produces
    /// such sets.
    pub(crate) fn from_positions(vars: VarCount, mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        let minterms: Vec<usize> = positions.iter().map(|&p| vars.minterm_at(p)).collect();
        let term = Term::spanning(vars, &minterms);
        let kind = classify(vars, &positions);
        Group {
            kind,
            vars,
            positions,
            term,
        }
    }

    /// The group spanning the whole map
    pub fn full(vars: VarCount) -> Self {
        Group::from_positions(vars, (0..vars.cells()).collect())
    }

    /// Size class and orientation
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Variable count of the map the group lives on
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Covered display positions, ascending
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Covered canonical minterms, in display position order
    pub fn minterms(&self) -> Vec<usize> {
        self.positions
            .iter()
            .map(|&p| self.vars.minterm_at(p))
            .collect()
    }

    /// Number of covered cells (1, 2, 4 or 8)
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Term of the variables that stay constant across the group
    pub fn term(&self) -> Term {
        self.term
    }

    /// True when the group covers a display position
    pub fn covers(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// True for the whole-map group
    pub fn is_full(&self) -> bool {
        self.kind == GroupKind::Full
    }

    /// Sort key for acceptance: larger groups first, then shape rank, then anchor
    ///
    /// Quads go top row, bottom row, left square, right square, middle
    /// square, wrap square.
    pub(crate) fn priority(&self) -> (Reverse<usize>, u8, usize) {
        // A wrap pair is scanned from its right-hand cell, after the in-row pairs
        let anchor = match self.kind {
            GroupKind::Pair(Orientation::Wrap) => self.positions.last(),
            _ => self.positions.first(),
        }
        .copied()
        .unwrap_or(0);
        let rank = match self.kind {
            GroupKind::Pair(Orientation::Column) => 1,
            GroupKind::Quad(Orientation::Square) if anchor == 1 => 2,
            GroupKind::Quad(Orientation::Square) => 1,
            GroupKind::Quad(Orientation::Wrap) => 3,
            _ => 0,
        };
        (Reverse(self.size()), rank, anchor)
    }

    /// Human-readable description, e.g. `Pair (wrap): A'C' (m0, m2)`
    pub fn description(&self) -> String {
        let minterms = self
            .minterms()
            .iter()
            .map(|m| format!("m{}", m))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GroupKind::Full => match self.vars {
                VarCount::Two => "Quad (all cells)".to_string(),
                VarCount::Three => "Octet (all cells)".to_string(),
            },
            GroupKind::Single => format!("Single: {} ({})", self.term, minterms),
            GroupKind::Pair(orientation) => {
                format!("Pair ({}): {} ({})", orientation, self.term, minterms)
            }
            GroupKind::Quad(orientation) => {
                format!("Quad ({}): {} ({})", orientation, self.term, minterms)
            }
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("kind", &self.kind)
            .field("positions", &self.positions)
            .field("term", &self.term)
            .finish()
    }
}

/// Classify a sorted sub-cube of positions by shape
fn classify(vars: VarCount, positions: &[usize]) -> GroupKind {
    if positions.len() == vars.cells() {
        return GroupKind::Full;
    }
    let same_row = positions
        .iter()
        .all(|&p| vars.row_col(p).0 == vars.row_col(positions[0]).0);
    match positions {
        [_] => GroupKind::Single,
        [a, b] if same_row && adjacency::wraps(vars, *a, *b) => GroupKind::Pair(Orientation::Wrap),
        [_, _] if same_row => GroupKind::Pair(Orientation::Row),
        [_, _] => GroupKind::Pair(Orientation::Column),
        _ if same_row => GroupKind::Quad(Orientation::Row),
        _ => {
            let mut columns: Vec<usize> = positions
                .iter()
                .map(|&p| vars.row_col(p).1)
                .collect();
            columns.sort_unstable();
            columns.dedup();
            let contiguous = columns.windows(2).all(|pair| pair[1] == pair[0] + 1);
            if contiguous {
                GroupKind::Quad(Orientation::Square)
            } else {
                GroupKind::Quad(Orientation::Wrap)
            }
        }
    }
}
