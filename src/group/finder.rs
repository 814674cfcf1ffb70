//! Group finder
//!
//! The finder is a fixed-priority heuristic, not a minimum-cover search:
//!
//! 1. an all-1 map is one full group and an all-0 map has no groups;
//! 2. every sub-cube smaller than the map is a candidate, enumerated from the
//!    minterm bits (so wraparound neighbours are found like any other);
//! 3. candidates are visited largest first. Quads go top row, bottom row,
//!    left square, right square, middle square, then the wrap square. Pairs
//!    go horizontally in row-major order, then vertically;
//! 4. a candidate is accepted when all of its cells are 1 and none of them is
//!    already covered by a larger accepted group;
//! 5. leftover 1-cells become single-cell groups.
//!
//! Rule 4 means a quad blocks every pair touching it, which can leave a
//! single where a pair reaching outside the quad would have been better.

use super::Group;
use crate::kmap::{CellVector, VarCount};
use log::{debug, trace};

/// Find the adjacency groups of a cell vector
///
/// Groups come back in acceptance order. No group covers a 0-cell and every
/// group has 1, 2, 4 or 8 cells.
///
/// # Examples
///
/// ```
/// use kmap_logic::{find_groups, CellVector, VarCount};
///
/// # fn main() -> Result<(), kmap_logic::KmapError> {
/// let cells = CellVector::from_values(VarCount::Two, &[1, 1, 1, 0])?;
/// let terms: Vec<String> = find_groups(&cells)
///     .iter()
///     .map(|g| g.term().to_string())
///     .collect();
/// assert_eq!(terms, vec!["A'", "B'"]);
/// # Ok(())
/// # }
/// ```
pub fn find_groups(cells: &CellVector) -> Vec<Group> {
    let vars = cells.vars();

    if cells.none_set() {
        debug!("find_groups({}): no 1-cells", cells);
        return Vec::new();
    }
    if cells.all_set() {
        debug!("find_groups({}): full map", cells);
        return vec![Group::full(vars)];
    }

    let values = cells.as_slice();
    // Size of the largest accepted group covering each position (0 = uncovered)
    let mut covered_by = vec![0usize; vars.cells()];
    let mut groups = Vec::new();

    for candidate in candidates(vars) {
        let size = candidate.size();
        let positions = candidate.positions();
        if !positions.iter().all(|&p| values[p]) {
            continue;
        }
        if positions.iter().any(|&p| covered_by[p] > size) {
            trace!("find_groups: skipping {:?}, covered by a larger group", positions);
            continue;
        }
        debug!("find_groups: accepting {}", candidate);
        for &p in positions {
            covered_by[p] = covered_by[p].max(size);
        }
        groups.push(candidate);
    }

    for position in cells.ones_positions() {
        if covered_by[position] == 0 {
            let single = Group::from_positions(vars, vec![position]);
            debug!("find_groups: accepting {}", single);
            groups.push(single);
        }
    }

    groups
}

/// All sub-cubes with more than one and fewer than all cells, in priority order
pub(crate) fn candidates(vars: VarCount) -> Vec<Group> {
    let n = vars.count();
    let all_bits = (1usize << n) - 1;
    let mut result = Vec::new();

    for free in 1..all_bits {
        for base in (0..vars.cells()).filter(|base| (base & free) == 0) {
            let positions = (0..vars.cells())
                .filter(|s| (s & !free) == 0)
                .map(|s| vars.position_of(base | s))
                .collect();
            result.push(Group::from_positions(vars, positions));
        }
    }

    result.sort_by_key(Group::priority);
    result
}
