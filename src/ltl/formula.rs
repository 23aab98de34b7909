//! Formula tree definition for LTL over finite words.
//!
//! [`Formula`] models the full operator set: the six core operators (`True`,
//! `Prop`, `And`, `Not`, `Next`, `Until`) evaluated directly, and the four
//! derived operators (`Or`, `Implies`, `Eventually`, `Always`) whose
//! semantics are given by rewriting in [`crate::ltl::rewrite`].

use crate::ltl::registry::{Op, OpKind};

use std::fmt::Display;

/// An LTL formula over finite words.
///
/// Each variant is one concrete operator; children are ordered and owned, so
/// trees are acyclic and immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// Boolean constant, true on every word including the empty one.
    True,
    /// Atomic proposition: the word starts with the given symbol.
    Prop(char),
    /// Conjunction `lhs ∧ rhs`, short-circuiting left to right.
    And(Box<Formula>, Box<Formula>),
    /// Negation `¬f`.
    Not(Box<Formula>),
    /// Next: the child holds on the word with its first symbol removed.
    Next(Box<Formula>),
    /// Until `lhs U rhs` with finite-trace semantics.
    Until(Box<Formula>, Box<Formula>),
    /// Disjunction, derived: `¬(¬lhs ∧ ¬rhs)`.
    Or(Box<Formula>, Box<Formula>),
    /// Implication, derived: `(¬lhs) v rhs`.
    Implies(Box<Formula>, Box<Formula>),
    /// Eventually, derived: `True U f`.
    Eventually(Box<Formula>),
    /// Always, derived: `¬F(¬f)`.
    Always(Box<Formula>),
}

impl Formula {
    /// Atomic proposition on a single symbol.
    pub fn prop(symbol: char) -> Self {
        Formula::Prop(symbol)
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn not(sub: Formula) -> Self {
        Formula::Not(Box::new(sub))
    }

    pub fn next(sub: Formula) -> Self {
        Formula::Next(Box::new(sub))
    }

    pub fn until(lhs: Formula, rhs: Formula) -> Self {
        Formula::Until(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Formula, rhs: Formula) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Formula, rhs: Formula) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn eventually(sub: Formula) -> Self {
        Formula::Eventually(Box::new(sub))
    }

    pub fn always(sub: Formula) -> Self {
        Formula::Always(Box::new(sub))
    }

    /// The operator tag of this node.
    pub fn op(&self) -> Op {
        match self {
            Formula::True => Op::True,
            Formula::Prop(_) => Op::Prop,
            Formula::And(_, _) => Op::And,
            Formula::Not(_) => Op::Not,
            Formula::Next(_) => Op::Next,
            Formula::Until(_, _) => Op::Until,
            Formula::Or(_, _) => Op::Or,
            Formula::Implies(_, _) => Op::Implies,
            Formula::Eventually(_) => Op::Eventually,
            Formula::Always(_) => Op::Always,
        }
    }

    /// One-character symbol of this node's operator in the textual encoding.
    pub fn symbol(&self) -> char {
        self.op().symbol()
    }

    /// Structural shape of this node's operator.
    pub fn kind(&self) -> OpKind {
        self.op().kind()
    }

    /// Re-emits the parseable prefix encoding of the formula.
    ///
    /// Operators are separated by single spaces; a proposition is its operator
    /// symbol immediately followed by its payload (`Pa`). Parsing the output
    /// reproduces the tree exactly.
    pub fn to_prefix_string(&self) -> String {
        match self {
            Formula::True => self.symbol().to_string(),
            Formula::Prop(x) => format!("{}{}", self.symbol(), x),
            Formula::Not(sub)
            | Formula::Next(sub)
            | Formula::Eventually(sub)
            | Formula::Always(sub) => format!("{} {}", self.symbol(), sub.to_prefix_string()),
            Formula::And(lhs, rhs)
            | Formula::Until(lhs, rhs)
            | Formula::Or(lhs, rhs)
            | Formula::Implies(lhs, rhs) => format!(
                "{} {} {}",
                self.symbol(),
                lhs.to_prefix_string(),
                rhs.to_prefix_string()
            ),
        }
    }

    /// Recursively generate a tree-like string representation of the formula.
    pub fn to_tree_string(&self, indent: usize) -> String {
        let padding = " ".repeat(indent);
        match self {
            Formula::True => format!("{padding}True"),
            Formula::Prop(x) => format!("{padding}Prop {x}"),
            Formula::And(lhs, rhs) => format!(
                "{}And\n{}\n{}",
                padding,
                lhs.to_tree_string(indent + 2),
                rhs.to_tree_string(indent + 2)
            ),
            Formula::Not(sub) => {
                format!("{}Not\n{}", padding, sub.to_tree_string(indent + 2))
            }
            Formula::Next(sub) => {
                format!("{}Next\n{}", padding, sub.to_tree_string(indent + 2))
            }
            Formula::Until(lhs, rhs) => format!(
                "{}Until\n{}\n{}",
                padding,
                lhs.to_tree_string(indent + 2),
                rhs.to_tree_string(indent + 2)
            ),
            Formula::Or(lhs, rhs) => format!(
                "{}Or\n{}\n{}",
                padding,
                lhs.to_tree_string(indent + 2),
                rhs.to_tree_string(indent + 2)
            ),
            Formula::Implies(lhs, rhs) => format!(
                "{}Implies\n{}\n{}",
                padding,
                lhs.to_tree_string(indent + 2),
                rhs.to_tree_string(indent + 2)
            ),
            Formula::Eventually(sub) => {
                format!("{}Eventually\n{}", padding, sub.to_tree_string(indent + 2))
            }
            Formula::Always(sub) => {
                format!("{}Always\n{}", padding, sub.to_tree_string(indent + 2))
            }
        }
    }
}

/// Renders formulas using compact mathematical notation.
impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Formula::True => "True".to_string(),
                Formula::Prop(x) => x.to_string(),
                Formula::And(lhs, rhs) => format!("({lhs}) ∧ ({rhs})"),
                Formula::Not(sub) => format!("¬({sub})"),
                Formula::Next(sub) => format!("X({sub})"),
                Formula::Until(lhs, rhs) => format!("({lhs}) U ({rhs})"),
                Formula::Or(lhs, rhs) => format!("({lhs}) v ({rhs})"),
                Formula::Implies(lhs, rhs) => format!("({lhs}) → ({rhs})"),
                Formula::Eventually(sub) => format!("F({sub})"),
                Formula::Always(sub) => format!("G({sub})"),
            }
        )
    }
}
