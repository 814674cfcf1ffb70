//! The game level catalog
//!
//! Each level pairs an equation with the display positions it sets. The
//! catalog mixes plain sums of minterms, which the equation parser can read,
//! with reduced forms and complements that the player has to work out by hand.

use crate::kmap::{CellVector, VarCount};

/// One game level: an equation and the cells it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    equation: &'static str,
    cells: &'static [usize],
}

impl Level {
    /// Equation shown to the player
    pub fn equation(&self) -> &'static str {
        self.equation
    }

    /// Display positions set to 1 in the solution
    pub fn cells(&self) -> &'static [usize] {
        self.cells
    }

    /// The solution as a cell vector on a map of `vars` variables
    ///
    /// Positions outside the map are ignored.
    pub fn target(&self, vars: VarCount) -> CellVector {
        CellVector::from_fn(vars, |position| self.cells.contains(&position))
    }
}

/// The levels for a variable count, in play order
///
/// # Examples
///
/// ```
/// use kmap_logic::game::levels;
/// use kmap_logic::VarCount;
///
/// let first = &levels(VarCount::Three)[0];
/// assert_eq!(first.equation(), "F = A'B'C'");
/// assert_eq!(first.target(VarCount::Three).to_string(), "10000000");
/// ```
pub fn levels(vars: VarCount) -> &'static [Level] {
    match vars {
        VarCount::Two => &LEVELS_2VAR,
        VarCount::Three => &LEVELS_3VAR,
    }
}

const fn level(equation: &'static str, cells: &'static [usize]) -> Level {
    Level { equation, cells }
}

static LEVELS_2VAR: [Level; 59] = [
    level("F = A'B'", &[0]),
    level("F = A'B", &[1]),
    level("F = AB'", &[2]),
    level("F = AB", &[3]),
    level("F = A'B' + A'B", &[0, 1]),
    level("F = AB' + AB", &[2, 3]),
    level("F = A'B' + AB'", &[0, 2]),
    level("F = A'B + AB", &[1, 3]),
    level("F = A'B' + AB", &[0, 3]),
    level("F = A'B + AB'", &[1, 2]),
    level("F = A'B' + A'B + AB'", &[0, 1, 2]),
    level("F = A'B' + A'B + AB", &[0, 1, 3]),
    level("F = A'B' + AB' + AB", &[0, 2, 3]),
    level("F = A'B + AB' + AB", &[1, 2, 3]),
    level("F = A'B' + AB' + A'B", &[0, 1, 2]),
    level("F = AB' + AB + A'B'", &[0, 2, 3]),
    level("F = A'B' + AB' + AB", &[0, 2, 3]),
    level("F = A'B + AB' + AB", &[1, 2, 3]),
    level("F = A'B' + A'B + AB' + AB", &[0, 1, 2, 3]),
    level("F = A'B' + AB'", &[0, 2]),
    level("F = A'B + AB", &[1, 3]),
    level("F = AB' + AB", &[2, 3]),
    level("F = A'B' + AB", &[0, 3]),
    level("F = A'B + AB'", &[1, 2]),
    level("F = A'B' + A'B'", &[0]),
    level("F = AB' + AB'", &[2]),
    level("F = AB + AB", &[3]),
    level("F = A'B' + AB' + AB'", &[0, 2]),
    level("F = A'B + AB + AB", &[1, 3]),
    level("F = A'B' + A'B + AB' + AB", &[0, 1, 2, 3]),
    level("F = 1", &[0, 1, 2, 3]),
    level("F = 0", &[]),
    level("F = A'", &[0, 1]),
    level("F = A", &[2, 3]),
    level("F = B'", &[0, 2]),
    level("F = B", &[1, 3]),
    level("F = A' + B'", &[0, 1, 2]),
    level("F = A + B", &[1, 2, 3]),
    level("F = A' + B", &[0, 1, 3]),
    level("F = A + B'", &[0, 2, 3]),
    level("F = (A'B')'", &[1, 2, 3]),
    level("F = (AB)'", &[0, 1, 2]),
    level("F = (A'B)'", &[0, 2, 3]),
    level("F = (AB')'", &[0, 1, 3]),
    level("F = (A' + B')'", &[3]),
    level("F = (A + B)'", &[0]),
    level("F = (A' + B)'", &[2]),
    level("F = (A + B' + C')'", &[5]),
    level("F = AB + A'B'", &[0, 3]),
    level("F = AB' + A'B", &[1, 2]),
    level("F = AB + AB'", &[2, 3]),
    level("F = AB + A'B", &[1, 3]),
    level("F = AB' + A'B'", &[0, 2]),
    level("F = (A + B)(A' + B')", &[0, 1, 2, 3]),
    level("F = (A' + B')(A + B)", &[1, 2, 3]),
    level("F = (A'B + AB')'", &[0, 3]),
    level("F = (AB + A'B')'", &[1, 2]),
    level("F = (A'B'C' + AB'C')'", &[0, 5]),
    level("F = (A'B'C + AB'C' + ABC')'", &[0, 2, 3, 4, 5, 7]),
];

static LEVELS_3VAR: [Level; 67] = [
    level("F = A'B'C'", &[0]),
    level("F = A'B'C", &[1]),
    level("F = A'BC", &[2]),
    level("F = A'BC'", &[3]),
    level("F = AB'C'", &[4]),
    level("F = AB'C", &[5]),
    level("F = ABC", &[6]),
    level("F = ABC'", &[7]),
    level("F = A'B'C' + A'B'C", &[0, 1]),
    level("F = A'BC + A'BC'", &[2, 3]),
    level("F = AB'C' + AB'C", &[4, 5]),
    level("F = ABC + ABC'", &[6, 7]),
    level("F = A'B'C' + AB'C'", &[0, 4]),
    level("F = A'B'C + AB'C", &[1, 5]),
    level("F = A'BC + ABC", &[2, 6]),
    level("F = A'BC' + ABC'", &[3, 7]),
    level("F = A'B'C' + A'B'C + A'BC", &[0, 1, 2]),
    level("F = AB'C' + AB'C + ABC", &[4, 5, 6]),
    level("F = A'B'C' + AB'C' + ABC'", &[0, 4, 7]),
    level("F = A'B'C + AB'C + ABC", &[1, 5, 6]),
    level("F = A'BC + ABC + ABC'", &[2, 6, 7]),
    level("F = A'BC' + ABC' + AB'C'", &[3, 7, 4]),
    level("F = A'B'C' + A'B'C + AB'C' + AB'C", &[0, 1, 4, 5]),
    level("F = A'BC + A'BC' + ABC + ABC'", &[2, 3, 6, 7]),
    level("F = A'B'C' + A'BC' + AB'C' + ABC'", &[0, 3, 4, 7]),
    level("F = A'B'C + A'BC + AB'C + ABC", &[1, 2, 5, 6]),
    level("F = A'B'C' + A'B'C + A'BC + A'BC'", &[0, 1, 2, 3]),
    level("F = AB'C' + AB'C + ABC + ABC'", &[4, 5, 6, 7]),
    level("F = A'B'C' + AB'C' + AB'C + ABC'", &[0, 4, 5, 7]),
    level("F = A'B'C + AB'C + ABC + ABC'", &[1, 5, 6, 7]),
    level("F = A'BC + ABC + AB'C' + AB'C", &[2, 6, 4, 5]),
    level("F = A'BC' + ABC' + AB'C' + AB'C", &[3, 7, 4, 5]),
    level("F = A'B'C' + A'B'C + AB'C' + AB'C + ABC + ABC'", &[0, 1, 4, 5, 6, 7]),
    level(
        "F = A'B'C' + A'B'C + A'BC + A'BC' + AB'C' + AB'C + ABC + ABC'",
        &[0, 1, 2, 3, 4, 5, 6, 7],
    ),
    level("F = 1", &[0, 1, 2, 3, 4, 5, 6, 7]),
    level("F = 0", &[]),
    level("F = A'", &[0, 1, 2, 3]),
    level("F = A", &[4, 5, 6, 7]),
    level("F = B'", &[0, 1, 4, 5]),
    level("F = B", &[2, 3, 6, 7]),
    level("F = C'", &[0, 3, 4, 7]),
    level("F = C", &[1, 2, 5, 6]),
    level("F = A' + B'", &[0, 1, 2, 3, 4, 5]),
    level("F = A + B", &[2, 3, 4, 5, 6, 7]),
    level("F = A' + C'", &[0, 1, 2, 3, 4, 7]),
    level("F = A + C", &[1, 2, 3, 4, 5, 6]),
    level("F = B' + C'", &[0, 1, 3, 4, 5, 7]),
    level("F = B + C", &[1, 2, 3, 5, 6, 7]),
    level("F = A' + B + C'", &[0, 1, 2, 3, 4, 5, 7]),
    level("F = A + B' + C", &[1, 2, 3, 4, 5, 6, 7]),
    level("F = (A'B')'", &[1, 2, 3, 4, 5, 6, 7]),
    level("F = (ABC)'", &[0, 1, 2, 3, 4, 5, 7]),
    level("F = (A'B'C')'", &[1, 2, 3, 4, 5, 6, 7]),
    level("F = (A' + B' + C')'", &[6]),
    level("F = (A + B + C)'", &[0]),
    level("F = (A' + B + C)'", &[2]),
    level("F = (A + B' + C')'", &[5]),
    level("F = AB + BC' + AC", &[6, 7, 2, 3, 4, 5]),
    level("F = A'B + AB' + BC", &[1, 2, 5, 6]),
    level("F = AB + AC' + B'C", &[5, 6, 7, 1, 2]),
    level("F = A'B'C + AB'C' + ABC", &[1, 4, 6]),
    level("F = (A + B)(B' + C)", &[1, 2, 3, 4, 5, 6, 7]),
    level("F = (A' + C)(B + C')", &[0, 1, 2, 3, 4, 7]),
    level("F = (A'B + AC)'", &[0, 1, 3, 4, 5, 7]),
    level("F = (AB' + BC)'", &[0, 1, 3, 4, 7]),
    level("F = (A'B'C' + AB'C)'", &[0, 5]),
    level("F = (A'B'C + AB'C' + ABC)'", &[0, 2, 3, 4, 5, 7]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::parse_equation;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(levels(VarCount::Two).len(), 59);
        assert_eq!(levels(VarCount::Three).len(), 67);
    }

    #[test]
    fn test_target_ignores_positions_outside_the_map() {
        let target = |equation: &str| {
            levels(VarCount::Two)
                .iter()
                .find(|l| l.equation() == equation)
                .unwrap()
                .target(VarCount::Two)
                .to_string()
        };
        assert_eq!(target("F = (A + B' + C')'"), "0000");
        assert_eq!(target("F = (A'B'C' + AB'C')'"), "1000");
        assert_eq!(target("F = (A'B'C + AB'C' + ABC')'"), "1011");

        for vars in [VarCount::Two, VarCount::Three] {
            for level in levels(vars) {
                let target = level.target(vars);
                assert_eq!(target.len(), vars.cells());
                let inside = level.cells().iter().filter(|&&p| p < vars.cells()).count();
                assert_eq!(target.count_ones(), inside, "{}", level.equation());
            }
        }
    }

    #[test]
    fn test_fully_parseable_levels_match_their_targets() {
        let mut checked = 0;
        for vars in [VarCount::Two, VarCount::Three] {
            for level in levels(vars) {
                let Ok(parsed) = parse_equation(level.equation(), vars) else {
                    continue;
                };
                if !parsed.skipped().is_empty() {
                    continue;
                }
                assert_eq!(
                    parsed.cells(),
                    &level.target(vars),
                    "level {:?}",
                    level.equation()
                );
                checked += 1;
            }
        }
        assert!(checked > 50);
    }

    #[test]
    fn test_constant_levels() {
        let zero = levels(VarCount::Two)
            .iter()
            .find(|l| l.equation() == "F = 0")
            .unwrap();
        assert!(zero.target(VarCount::Two).none_set());

        let one = levels(VarCount::Three)
            .iter()
            .find(|l| l.equation() == "F = 1")
            .unwrap();
        assert!(one.target(VarCount::Three).all_set());
    }
}
