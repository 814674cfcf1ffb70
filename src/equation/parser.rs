//! Product-term parsing support

use crate::kmap::{VarCount, Variable};

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/equation/product.rs"));
}

/// Parses single product terms into canonical minterms
pub(crate) struct ProductReader {
    parser: parser_impl::ProductParser,
    vars: VarCount,
}

impl ProductReader {
    pub(crate) fn new(vars: VarCount) -> Self {
        ProductReader {
            parser: parser_impl::ProductParser::new(),
            vars,
        }
    }

    /// Minterm named by `chunk`, if it is a full product in `A B C` order
    ///
    /// `A'B` is minterm 1 on a two-variable map but is skipped on a
    /// three-variable map, as is any reordering such as `BA'`.
    pub(crate) fn minterm(&self, chunk: &str) -> Option<usize> {
        let literals = self.parser.parse(chunk).ok()?;
        canonical_minterm(self.vars, &literals)
    }
}

fn canonical_minterm(vars: VarCount, literals: &[(Variable, bool)]) -> Option<usize> {
    if literals.len() != vars.count() {
        return None;
    }
    let mut minterm = 0;
    for (&(var, positive), &expected) in literals.iter().zip(vars.variables()) {
        if var != expected {
            return None;
        }
        minterm = (minterm << 1) | usize::from(positive);
    }
    Some(minterm)
}
