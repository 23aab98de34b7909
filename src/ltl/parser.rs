//! Runtime parser for the prefix-notation formula encoding.
//!
//! The encoding is fully prefix: every operator is one character and its
//! arity is fixed by its shape, so there are no precedence rules to resolve.
//!
//! # Syntax
//!
//! ## Core operators
//! - `T` - Boolean constant true
//! - `P<c>` - Atomic proposition on the symbol `<c>`
//! - `A <lhs> <rhs>` - Conjunction
//! - `N <sub>` - Negation
//! - `X <sub>` - Next
//! - `U <lhs> <rhs>` - Until
//!
//! ## Derived operators
//! - `O <lhs> <rhs>` - Disjunction
//! - `I <lhs> <rhs>` - Implication
//! - `F <sub>` - Eventually
//! - `G <sub>` - Always
//!
//! Whitespace between tokens is skipped. Parentheses isolate one complete
//! sub-formula (e.g. `N U(P1)(N P2)`); they are a grouping aid only and never
//! change arity or precedence.
//!
//! # Example
//!
//! ```
//! use fltl::ltl::parser::parse_ltl;
//!
//! let formula = parse_ltl("N U (P1) (N P2)").unwrap();
//! let nested = parse_ltl("G I Pr F Pg").unwrap();
//! ```

use crate::ltl::formula::Formula;
use crate::ltl::registry::{Op, OpKind};

/// Error type for formula parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Human-readable error message.
    pub message: String,
    /// Position in the input string where the error occurred.
    pub position: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse error at position {}: {}",
            self.position, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse a formula from its prefix encoding.
///
/// The whole input must encode a single formula; trailing non-whitespace
/// characters are rejected. Use [`parse_partial`] to consume one formula off
/// the front of a longer input.
///
/// # Example
///
/// ```
/// use fltl::ltl::parser::parse_ltl;
///
/// let formula = parse_ltl("U Pa Pb").unwrap();
/// let grouped = parse_ltl("A (Pa) (X Pb)").unwrap();
/// ```
pub fn parse_ltl(input: &str) -> Result<Formula, ParseError> {
    let mut parser = Parser::new(input);
    let result = parser.parse_formula()?;
    parser.skip_whitespace();
    if parser.pos < parser.input.len() {
        return Err(ParseError {
            message: format!(
                "Unexpected trailing characters: '{}'",
                &parser.input[parser.pos..]
            ),
            position: parser.pos,
        });
    }
    Ok(result)
}

/// Parse one complete formula and return the unconsumed remainder.
///
/// # Example
///
/// ```
/// use fltl::ltl::parser::parse_partial;
///
/// let (formula, rest) = parse_partial("X Pa Pb").unwrap();
/// assert_eq!(formula.to_prefix_string(), "X Pa");
/// assert_eq!(rest, " Pb");
/// ```
pub fn parse_partial(input: &str) -> Result<(Formula, &str), ParseError> {
    let mut parser = Parser::new(input);
    let result = parser.parse_formula()?;
    Ok((result, parser.remaining()))
}

/// Internal parser state.
struct Parser<'a> {
    /// Full input expression being parsed.
    input: &'a str,
    /// Current byte offset into `input`.
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser at position `0`.
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Advances past ASCII/Unicode whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Returns the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the unparsed suffix.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consumes the character returned by `peek`.
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Parses one formula starting at the current position.
    fn parse_formula(&mut self) -> Result<Formula, ParseError> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(ParseError {
                message: "Unexpected end of input, expected a formula".to_string(),
                position: self.pos,
            }),
            Some('(') => self.parse_group(),
            Some(symbol) => self.parse_operator(symbol),
        }
    }

    /// Parses a parenthesized group holding exactly one complete formula.
    fn parse_group(&mut self) -> Result<Formula, ParseError> {
        let close = self.find_matching_paren()?;
        let content_start = self.pos + 1;
        let content = &self.input[content_start..close];

        // The enclosed substring is parsed in isolation; error positions are
        // shifted back into the full input.
        let mut inner = Parser::new(content);
        let formula = inner.parse_formula().map_err(|e| ParseError {
            message: e.message,
            position: content_start + e.position,
        })?;
        inner.skip_whitespace();
        if inner.pos < content.len() {
            return Err(ParseError {
                message: format!(
                    "Unexpected tokens after formula inside group: '{}'",
                    &content[inner.pos..]
                ),
                position: content_start + inner.pos,
            });
        }

        self.pos = close + 1;
        Ok(formula)
    }

    /// Scans forward from the current `(` to its matching `)`.
    ///
    /// Returns the byte offset of the closing parenthesis in `input`.
    fn find_matching_paren(&self) -> Result<usize, ParseError> {
        let mut level = 0usize;
        for (offset, c) in self.input[self.pos..].char_indices() {
            match c {
                '(' => level += 1,
                ')' => {
                    level -= 1;
                    if level == 0 {
                        return Ok(self.pos + offset);
                    }
                }
                _ => {}
            }
        }
        Err(ParseError {
            message: format!(
                "Could not find a matching ')' for the group starting at '{}'",
                self.remaining()
            ),
            position: self.pos,
        })
    }

    /// Parses an operator and its operands according to the operator's shape.
    fn parse_operator(&mut self, symbol: char) -> Result<Formula, ParseError> {
        let op = Op::from_symbol(symbol).ok_or_else(|| ParseError {
            message: format!("Operator '{symbol}' is not known"),
            position: self.pos,
        })?;
        self.bump(symbol);

        match op.kind() {
            OpKind::Terminal => Ok(op.build_terminal()),
            OpKind::Consumer => {
                self.skip_whitespace();
                let payload = self.peek().ok_or_else(|| ParseError {
                    message: format!("Operator '{symbol}' is missing its proposition symbol"),
                    position: self.pos,
                })?;
                self.bump(payload);
                Ok(op.build_consumer(payload))
            }
            OpKind::Unary => {
                let sub = self.parse_formula()?;
                Ok(op.build_unary(sub))
            }
            OpKind::Binary => {
                let lhs = self.parse_formula()?;
                let rhs = self.parse_formula()?;
                Ok(op.build_binary(lhs, rhs))
            }
        }
    }
}
