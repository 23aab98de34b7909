//! # FLTL - Linear Temporal Logic over finite words
//!
//! `fltl` represents LTL formulas over finite words and evaluates them into
//! boolean verdicts.
//!
//! It includes:
//! - a formula tree built from six core operators and four derived operators,
//! - arity-matched constructors for building trees programmatically,
//! - a recursive-descent parser for the compact prefix-notation encoding, and
//! - finite-trace evaluation semantics attached to every node.
//!
//! ## Simple usage
//!
//! ```
//! use fltl::ltl::parse_ltl;
//! use fltl::word::Word;
//!
//! // "a holds until b is seen"
//! let formula = parse_ltl("U Pa Pb").unwrap();
//!
//! assert_eq!(formula.evaluate(&Word::from("aab")), Ok(true));
//! assert_eq!(formula.evaluate(&Word::from("aac")), Ok(false));
//! ```
//!
//! Formulas can equally be built without the parser:
//!
//! ```
//! use fltl::ltl::formula::Formula;
//! use fltl::word::Word;
//!
//! let formula = Formula::always(Formula::implies(
//!     Formula::prop('r'),
//!     Formula::eventually(Formula::prop('g')),
//! ));
//!
//! assert_eq!(formula.evaluate(&Word::from("rg")), Ok(true));
//! ```

pub mod ltl;
pub mod word;
