//! Minimisation of group covers into sum-of-products expressions
//!
//! The minimiser takes the groups produced by [`crate::find_groups`] and turns
//! them into an [`Expression`]:
//!
//! 1. no groups is `F = 0`; a full-map group is `F = 1`;
//! 2. groups whose cells are all covered by other groups are dropped, starting
//!    from the last one;
//! 3. each surviving group contributes its term;
//! 4. on three-variable maps the terms are deduplicated and a single greedy
//!    pass merges pairs of terms that differ in one variable.
//!
//! This is a heuristic. The result is always a sound cover of the 1-cells but
//! not necessarily a minimum one.
//!
//! # Examples
//!
//! ```
//! use kmap_logic::{simplify, CellVector};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let cells: CellVector = "1110".parse()?;
//! let solution = simplify(&cells);
//!
//! assert_eq!(solution.expression().to_string(), "F = A' + B'");
//! assert_eq!(solution.groups().len(), 2);
//! # Ok(())
//! # }
//! ```

mod term;


pub use term::Term;

use crate::config::MinimizeConfig;
use crate::group::{find_groups, Group};
use crate::kmap::labels::Notation;
use crate::kmap::{CellVector, VarCount};
use log::debug;
use std::fmt;

/// A sum-of-products expression over the map variables
///
/// An expression with no terms is the constant 0. A term with every variable
/// dropped makes the whole expression the constant 1.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    vars: VarCount,
    terms: Vec<Term>,
}

impl Expression {
    /// Build an expression, collapsing to `F = 1` when any term is the universe
    pub fn new(vars: VarCount, terms: Vec<Term>) -> Self {
        if terms.iter().any(Term::is_universe) {
            return Expression::one(vars);
        }
        Expression { vars, terms }
    }

    /// The constant 0
    pub fn zero(vars: VarCount) -> Self {
        Expression {
            vars,
            terms: Vec::new(),
        }
    }

    /// The constant 1
    pub fn one(vars: VarCount) -> Self {
        Expression {
            vars,
            terms: vec![Term::universe(vars)],
        }
    }

    /// Variable count of the expression
    pub fn vars(&self) -> VarCount {
        self.vars
    }

    /// Terms in output order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// True for `F = 0`
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// True for `F = 1`
    pub fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [term] if term.is_universe())
    }

    /// Value of the expression for a canonical minterm
    pub fn evaluate(&self, minterm: usize) -> bool {
        self.terms.iter().any(|term| term.covers(minterm))
    }

    /// Expand the expression back into a cell vector
    ///
    /// A cell is 1 iff at least one term covers its minterm.
    pub fn to_cells(&self) -> CellVector {
        CellVector::from_fn(self.vars, |position| {
            self.evaluate(self.vars.minterm_at(position))
        })
    }

    /// Right-hand side in the given notation (`0`, `1` or `t1 + t2 + ...`)
    pub fn render(&self, notation: Notation) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(|term| term.render(notation))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Formats as `F = <sum of products>`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F = {}", self.render(Notation::Prime))
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expression({})", self)
    }
}

/// Result of minimising a map: the expression and the groups behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    expression: Expression,
    groups: Vec<Group>,
}

impl Solution {
    /// The minimised expression
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The groups that survived minimisation, in acceptance order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// One human-readable line per surviving group
    pub fn descriptions(&self) -> Vec<String> {
        self.groups.iter().map(Group::description).collect()
    }

    /// Split into expression and groups
    pub fn into_parts(self) -> (Expression, Vec<Group>) {
        (self.expression, self.groups)
    }
}

/// Find the groups of a cell vector and minimise them
pub fn simplify(cells: &CellVector) -> Solution {
    minimize(find_groups(cells), cells.vars())
}

/// Minimise a list of groups with the default configuration
pub fn minimize(groups: Vec<Group>, vars: VarCount) -> Solution {
    minimize_with_config(groups, vars, &MinimizeConfig::default())
}

/// Minimise a list of groups
///
/// `groups` is expected in finder order; the order carries through to the
/// expression.
pub fn minimize_with_config(
    groups: Vec<Group>,
    vars: VarCount,
    config: &MinimizeConfig,
) -> Solution {
    if groups.is_empty() {
        return Solution {
            expression: Expression::zero(vars),
            groups,
        };
    }
    if let Some(full) = groups.iter().find(|g| g.is_full()) {
        return Solution {
            expression: Expression::one(vars),
            groups: vec![full.clone()],
        };
    }

    let groups = if config.remove_redundant {
        remove_redundant(groups)
    } else {
        groups
    };

    let mut terms: Vec<Term> = groups.iter().map(Group::term).collect();
    if vars == VarCount::Three {
        terms = dedup_terms(terms);
        if config.merge_terms {
            terms = merge_adjacent_terms(&terms);
        }
    }

    let expression = Expression::new(vars, terms);
    debug!("minimize: {} from {} groups", expression, groups.len());
    Solution { expression, groups }
}

/// Drop groups whose every cell is covered by another kept group
fn remove_redundant(mut groups: Vec<Group>) -> Vec<Group> {
    let mut index = groups.len();
    while index > 0 {
        index -= 1;
        let redundant = groups[index].positions().iter().all(|&position| {
            groups
                .iter()
                .enumerate()
                .any(|(other, group)| other != index && group.covers(position))
        });
        if redundant {
            let removed = groups.remove(index);
            debug!("minimize: dropping redundant {}", removed);
        }
    }
    groups
}

/// Remove repeated terms, keeping the first occurrence
fn dedup_terms(terms: Vec<Term>) -> Vec<Term> {
    let mut unique: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        if !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique
}

/// One greedy pass merging terms that differ in a single variable
///
/// Each term pairs with the first later unused term it can merge with; both
/// are consumed. Terms without a partner pass through unchanged.
pub(crate) fn merge_adjacent_terms(terms: &[Term]) -> Vec<Term> {
    let mut used = vec![false; terms.len()];
    let mut merged = Vec::with_capacity(terms.len());

    for i in 0..terms.len() {
        if used[i] {
            continue;
        }
        let partner = (i + 1..terms.len())
            .filter(|&j| !used[j])
            .find_map(|j| terms[i].merge(&terms[j]).map(|term| (j, term)));
        match partner {
            Some((j, term)) => {
                debug!("minimize: merging {} and {} into {}", terms[i], terms[j], term);
                used[i] = true;
                used[j] = true;
                merged.push(term);
            }
            None => merged.push(terms[i]),
        }
    }
    merged
}
