//! Minterm labels
//!
//! Every minterm has a fixed literal-conjunction label. Prime notation
//! (`A'B'C`) is what the equation parser reads and what expressions print;
//! overline notation (`A̅B̅C`) is the textbook style used on the map itself.

use super::{VarCount, Variable};

/// How a complemented literal is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `A'`
    #[default]
    Prime,
    /// `A̅` (combining overline)
    Overline,
}

/// Write one literal in the given notation
pub fn literal(var: Variable, positive: bool, notation: Notation) -> String {
    match (positive, notation) {
        (true, _) => var.name().to_string(),
        (false, Notation::Prime) => format!("{}'", var.name()),
        (false, Notation::Overline) => format!("{}\u{0305}", var.name()),
    }
}

/// Label of a canonical minterm, e.g. `A'B'C` for minterm 1 of three variables
///
/// # Examples
///
/// ```
/// use kmap_logic::labels::{minterm_label, Notation};
/// use kmap_logic::VarCount;
///
/// assert_eq!(minterm_label(VarCount::Three, 1, Notation::Prime), "A'B'C");
/// assert_eq!(minterm_label(VarCount::Two, 3, Notation::Prime), "AB");
/// ```
pub fn minterm_label(vars: VarCount, minterm: usize, notation: Notation) -> String {
    vars.variables()
        .iter()
        .map(|&var| literal(var, (minterm >> vars.bit(var)) & 1 == 1, notation))
        .collect()
}

/// Label of the cell at a display position
pub fn position_label(vars: VarCount, position: usize, notation: Notation) -> String {
    minterm_label(vars, vars.minterm_at(position), notation)
}

/// All minterm labels in canonical order
pub fn all_labels(vars: VarCount, notation: Notation) -> Vec<String> {
    (0..vars.cells())
        .map(|minterm| minterm_label(vars, minterm, notation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_variable_labels() {
        assert_eq!(
            all_labels(VarCount::Two, Notation::Prime),
            vec!["A'B'", "A'B", "AB'", "AB"]
        );
    }

    #[test]
    fn test_three_variable_labels() {
        let labels = all_labels(VarCount::Three, Notation::Prime);
        assert_eq!(labels[0], "A'B'C'");
        assert_eq!(labels[5], "AB'C");
        assert_eq!(labels[6], "ABC'");
    }

    #[test]
    fn test_position_label_follows_gray_order() {
        assert_eq!(position_label(VarCount::Three, 2, Notation::Prime), "A'BC");
        assert_eq!(position_label(VarCount::Three, 3, Notation::Prime), "A'BC'");
    }

    #[test]
    fn test_overline_notation() {
        assert_eq!(
            minterm_label(VarCount::Two, 0, Notation::Overline),
            "A\u{0305}B\u{0305}"
        );
        assert_eq!(literal(Variable::C, true, Notation::Overline), "C");
    }
}
