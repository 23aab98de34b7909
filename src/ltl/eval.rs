//! Evaluation of formulas against finite words.
//!
//! Every node evaluates recursively over suffix slices of the word; derived
//! operators evaluate through the rewritings in [`crate::ltl::rewrite`]. The
//! only failure mode is testing a proposition against an empty word, surfaced
//! as [`EvalError`]. Evaluation never panics, holds no shared state, and is
//! referentially transparent.

use crate::ltl::formula::Formula;
use crate::word::Word;

use std::fmt::Display;

/// Error type for formula evaluation.
///
/// Raised when an atomic proposition is tested against an empty word, either
/// directly or through a `Next` chain that consumed the whole word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Proposition symbol whose test ran past the end of the word.
    pub proposition: char,
}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot test proposition '{}' against an empty word",
            self.proposition
        )
    }
}

impl std::error::Error for EvalError {}

impl Formula {
    /// Evaluates the formula against a word, returning its boolean verdict.
    ///
    /// Identical `(formula, word)` pairs always yield identical results.
    ///
    /// # Example
    ///
    /// ```
    /// use fltl::ltl::formula::Formula;
    /// use fltl::word::Word;
    ///
    /// let formula = Formula::until(Formula::prop('a'), Formula::prop('b'));
    /// assert_eq!(formula.evaluate(&Word::from("aab")), Ok(true));
    /// assert_eq!(formula.evaluate(&Word::from("aac")), Ok(false));
    /// ```
    pub fn evaluate(&self, word: &Word) -> Result<bool, EvalError> {
        self.eval_suffix(word.symbols())
    }

    fn eval_suffix(&self, word: &[char]) -> Result<bool, EvalError> {
        match self {
            Formula::True => Ok(true),
            Formula::Prop(x) => match word.first() {
                Some(head) => Ok(head == x),
                None => Err(EvalError { proposition: *x }),
            },
            Formula::And(lhs, rhs) => {
                // Short-circuits: rhs is never evaluated when lhs is false.
                if !lhs.eval_suffix(word)? {
                    return Ok(false);
                }
                rhs.eval_suffix(word)
            }
            Formula::Not(sub) => Ok(!sub.eval_suffix(word)?),
            Formula::Next(sub) => sub.eval_suffix(word.get(1..).unwrap_or(&[])),
            Formula::Until(lhs, rhs) => {
                // Finite-trace scan: rhs first at each suffix, fail fast on
                // lhs, false once the word is exhausted. The empty word has
                // no suffix positions, so neither child is evaluated.
                for i in 0..word.len() {
                    let suffix = &word[i..];
                    if rhs.eval_suffix(suffix)? {
                        return Ok(true);
                    }
                    if !lhs.eval_suffix(suffix)? {
                        return Ok(false);
                    }
                }
                Ok(false)
            }
            // Derived operators evaluate through their defining rewrite.
            Formula::Or(_, _)
            | Formula::Implies(_, _)
            | Formula::Eventually(_)
            | Formula::Always(_) => match self.expand() {
                Some(core) => core.eval_suffix(word),
                None => unreachable!("derived operator without an expansion"),
            },
        }
    }
}
