//! Product terms over the map variables

use crate::kmap::labels::{literal, Notation};
use crate::kmap::VarCount;
use std::fmt;

/// A product term
///
/// Each variable is `Some(true)` (literal `X`), `Some(false)` (literal `X'`)
/// or `None` (dropped). Only the first `vars.count()` entries are meaningful;
/// the rest stay `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    vars: VarCount,
    inputs: [Option<bool>; 3],
}

impl Term {
    /// The term with every variable dropped (constant 1)
    pub fn universe(vars: VarCount) -> Self {
        Term {
            vars,
            inputs: [None; 3],
        }
    }

    /// Build a term from explicit inputs
    ///
    /// Returns `None` when `inputs` does not have one entry per variable.
    pub fn from_inputs(vars: VarCount, inputs: &[Option<bool>]) -> Option<Self> {
        if inputs.len() != vars.count() {
            return None;
        }
        let mut term = Term::universe(vars);
        term.inputs[..inputs.len()].copy_from_slice(inputs);
        Some(term)
    }

    /// The full product for one canonical minterm
    pub fn minterm(vars: VarCount, minterm: usize) -> Self {
        let mut term = Term::universe(vars);
        for &var in vars.variables() {
            term.inputs[var.index()] = Some((minterm >> vars.bit(var)) & 1 == 1);
        }
        term
    }

    /// Smallest term covering all the given minterms
    ///
    /// A variable is kept iff every minterm agrees on it. For a sub-cube this
    /// covers exactly the given minterms.
    pub fn spanning(vars: VarCount, minterms: &[usize]) -> Self {
        let mut term = Term::universe(vars);
        let Some(&first) = minterms.first() else {
            return term;
        };
        for &var in vars.variables() {
            let bit = vars.bit(var);
            let value = (first >> bit) & 1;
            if minterms.iter().all(|&m| (m >> bit) & 1 == value) {
                term.inputs[var.index()] = Some(value == 1);
            }
        }
        term
    }

    /// Variable count of the term
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Per-variable inputs (`Some(true)`, `Some(false)` or `None`)
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs[..self.vars.count()]
    }

    /// Number of literals kept in the term
    pub fn literal_count(&self) -> usize {
        self.inputs().iter().filter(|i| i.is_some()).count()
    }

    /// True when every variable is dropped
    pub fn is_universe(&self) -> bool {
        self.literal_count() == 0
    }

    /// True when the term is 1 for the given canonical minterm
    pub fn covers(&self, minterm: usize) -> bool {
        self.vars.variables().iter().all(|&var| {
            self.inputs[var.index()]
                .map_or(true, |value| ((minterm >> self.vars.bit(var)) & 1 == 1) == value)
        })
    }

    /// Position of the single variable in which two terms differ
    ///
    /// Returns `None` when they agree everywhere or differ in more than one
    /// variable. A kept literal against a dropped one counts as a difference.
    pub fn single_difference(&self, other: &Term) -> Option<usize> {
        let mut differing = self
            .inputs()
            .iter()
            .zip(other.inputs())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);
        match (differing.next(), differing.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }

    /// Merge two terms that differ in exactly one variable, dropping it
    ///
    /// `AB'C' + AB'C` becomes `AB'`. Also absorbs: `AB' + AB'C` becomes `AB'`.
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.vars != other.vars {
            return None;
        }
        let position = self.single_difference(other)?;
        let mut merged = *self;
        merged.inputs[position] = None;
        Some(merged)
    }

    /// Render in the given notation; the universe renders as `1`
    pub fn render(&self, notation: Notation) -> String {
        if self.is_universe() {
            return "1".to_string();
        }
        self.vars
            .variables()
            .iter()
            .filter_map(|&var| {
                self.inputs[var.index()].map(|value| literal(var, value, notation))
            })
            .collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Notation::Prime))
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm_term() {
        let term = Term::minterm(VarCount::Three, 5);
        assert_eq!(term.inputs(), &[Some(true), Some(false), Some(true)]);
        assert_eq!(term.to_string(), "AB'C");
        assert!(term.covers(5));
        assert!(!term.covers(4));
    }

    #[test]
    fn test_spanning_drops_varying_variables() {
        // m0, m1 on two variables: A' constant, B varies
        let term = Term::spanning(VarCount::Two, &[0, 1]);
        assert_eq!(term.to_string(), "A'");

        // Outer columns of the 3-variable map: C' constant
        let term = Term::spanning(VarCount::Three, &[0, 2, 4, 6]);
        assert_eq!(term.to_string(), "C'");
        assert_eq!(term.literal_count(), 1);
    }

    #[test]
    fn test_spanning_everything_is_universe() {
        let term = Term::spanning(VarCount::Two, &[0, 1, 2, 3]);
        assert!(term.is_universe());
        assert_eq!(term.to_string(), "1");
        assert!((0..4).all(|m| term.covers(m)));
    }

    #[test]
    fn test_merge_one_difference() {
        let a = Term::minterm(VarCount::Three, 4); // AB'C'
        let b = Term::minterm(VarCount::Three, 5); // AB'C
        assert_eq!(a.merge(&b).unwrap().to_string(), "AB'");
    }

    #[test]
    fn test_merge_absorbs_general_term() {
        let general =
            Term::from_inputs(VarCount::Three, &[Some(true), Some(false), None]).unwrap();
        let specific = Term::minterm(VarCount::Three, 5);
        assert_eq!(specific.merge(&general).unwrap(), general);
    }

    #[test]
    fn test_merge_rejects_two_differences() {
        let a = Term::minterm(VarCount::Three, 0);
        let b = Term::minterm(VarCount::Three, 3);
        assert!(a.merge(&b).is_none());
        assert!(a.merge(&a).is_none());
    }

    #[test]
    fn test_from_inputs_checks_length() {
        assert!(Term::from_inputs(VarCount::Two, &[Some(true)]).is_none());
        let term = Term::from_inputs(VarCount::Two, &[None, Some(false)]).unwrap();
        assert_eq!(term.to_string(), "B'");
    }

    #[test]
    fn test_overline_render() {
        let term = Term::minterm(VarCount::Two, 1);
        assert_eq!(term.render(Notation::Overline), "A\u{0305}B");
    }
}
