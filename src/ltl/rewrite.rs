//! Rewritings defining the derived operators.
//!
//! `Or`, `Implies`, `Eventually`, and `Always` carry no evaluation logic of
//! their own: each is defined by a rewriting into other operators, and
//! evaluating a derived node means building that rewriting fresh and
//! evaluating it on the same word.

use crate::ltl::formula::Formula;

impl Formula {
    /// Returns the defining rewrite of a derived operator, or `None` for a
    /// core operator.
    ///
    /// With children `a` and `b`:
    /// - `Or(a, b)` rewrites to `Not(And(Not(a), Not(b)))`,
    /// - `Implies(a, b)` rewrites to `Or(Not(a), b)`,
    /// - `Eventually(a)` rewrites to `Until(True, a)`,
    /// - `Always(a)` rewrites to `Not(Eventually(Not(a)))`.
    ///
    /// Expansions are single-level: `Implies` rewrites to `Or`, which rewrites
    /// again when evaluated. The rewrite is pure and structurally invariant
    /// across calls; children are cloned into the fresh tree.
    pub fn expand(&self) -> Option<Formula> {
        match self {
            Formula::Or(lhs, rhs) => Some(Formula::not(Formula::and(
                Formula::not((**lhs).clone()),
                Formula::not((**rhs).clone()),
            ))),
            Formula::Implies(lhs, rhs) => Some(Formula::or(
                Formula::not((**lhs).clone()),
                (**rhs).clone(),
            )),
            Formula::Eventually(sub) => {
                Some(Formula::until(Formula::True, (**sub).clone()))
            }
            Formula::Always(sub) => Some(Formula::not(Formula::eventually(Formula::not(
                (**sub).clone(),
            )))),
            _ => None,
        }
    }

    /// Whether this node is a derived operator, one that [`Formula::expand`]
    /// rewrites.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            Formula::Or(_, _)
                | Formula::Implies(_, _)
                | Formula::Eventually(_)
                | Formula::Always(_)
        )
    }
}
