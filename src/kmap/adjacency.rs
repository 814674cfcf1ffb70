//! Adjacency model
//!
//! Two cells are adjacent when their minterms differ in exactly one variable.
//! Working on minterm bits rather than grid coordinates gives the wraparound
//! for free: on the three-variable map the first and last column of a row
//! (`B'C'` and `BC'`) are adjacent even though they sit at opposite edges.

use super::VarCount;

/// True when the minterms at two display positions differ in exactly one bit
///
/// Positions outside the map are never adjacent.
pub fn are_adjacent(vars: VarCount, a: usize, b: usize) -> bool {
    if a >= vars.cells() || b >= vars.cells() {
        return false;
    }
    (vars.minterm_at(a) ^ vars.minterm_at(b)).count_ones() == 1
}

/// Display positions adjacent to `position`, in ascending order
///
/// Every position has exactly one neighbour per variable.
///
/// # Examples
///
/// ```
/// use kmap_logic::adjacency::neighbours;
/// use kmap_logic::VarCount;
///
/// // Top-left cell of the 3-variable map: right, wraparound, below
/// assert_eq!(neighbours(VarCount::Three, 0), vec![1, 3, 4]);
/// ```
pub fn neighbours(vars: VarCount, position: usize) -> Vec<usize> {
    let minterm = vars.minterm_at(position);
    let mut result: Vec<usize> = (0..vars.count())
        .map(|bit| vars.position_of(minterm ^ (1 << bit)))
        .collect();
    result.sort_unstable();
    result
}

/// True when two positions are adjacent only through the map's wraparound
pub fn wraps(vars: VarCount, a: usize, b: usize) -> bool {
    if !are_adjacent(vars, a, b) {
        return false;
    }
    let (row_a, col_a) = vars.row_col(a);
    let (row_b, col_b) = vars.row_col(b);
    row_a == row_b && col_a.abs_diff(col_b) > 1
}

/// Full adjacency list, indexed by display position
pub fn adjacency_list(vars: VarCount) -> Vec<Vec<usize>> {
    (0..vars.cells())
        .map(|position| neighbours(vars, position))
        .collect()
}
