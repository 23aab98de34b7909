//! Integration tests for the prefix-notation parser.
//!
//! Verifies that parsing the emitted prefix encoding of a formula reproduces
//! the tree exactly, and that malformed inputs surface the documented errors.

mod fixtures;

use fixtures::formulas::*;
use fltl::ltl::formula::Formula;
use fltl::ltl::{parse_ltl, parse_partial};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ---
// Prefix-encoding round trips
// ---

#[rstest]
fn fixture_formulas_round_trip(
    until_ab: &Formula,
    eventually_b: &Formula,
    always_a: &Formula,
    request_grant: &Formula,
) {
    for formula in [until_ab, eventually_b, always_a, request_grant] {
        let encoded = formula.to_prefix_string();
        let parsed = parse_ltl(&encoded)
            .unwrap_or_else(|e| panic!("failed to parse '{encoded}': {e}"));
        assert_eq!(&parsed, formula, "round trip failed for '{encoded}'");
    }
}

#[test]
fn expanded_formulas_round_trip() {
    let or = Formula::or(Formula::prop('a'), Formula::prop('b'));
    let expanded = or.expand().unwrap();
    let parsed = parse_ltl(&expanded.to_prefix_string()).unwrap();
    assert_eq!(parsed, expanded);
}

#[test]
fn groups_do_not_change_the_tree() {
    let bare = parse_ltl("N U Pa N Pb").unwrap();
    let grouped = parse_ltl("N U(Pa)(N Pb)").unwrap();
    let spaced = parse_ltl(" N ( U ( P a ) ( N ( P b ) ) ) ").unwrap();
    assert_eq!(bare, grouped);
    assert_eq!(bare, spaced);
}

// ---
// Partial parsing
// ---

#[test]
fn partial_parse_stops_after_one_formula() {
    let (formula, rest) = parse_partial("U Pa Pb G Pa").unwrap();
    assert_eq!(formula, Formula::until(Formula::prop('a'), Formula::prop('b')));

    let (second, rest) = parse_partial(rest).unwrap();
    assert_eq!(second, Formula::always(Formula::prop('a')));
    assert_eq!(rest, "");
}

// ---
// Failure conditions
// ---

#[rstest]
#[case::unknown_operator("Q", "not known")]
#[case::unknown_lowercase("p a", "not known")]
#[case::missing_payload("A Pa P", "missing its proposition symbol")]
#[case::missing_operand("A P a", "Unexpected end of input")]
#[case::missing_unary_child("G", "Unexpected end of input")]
#[case::empty_input("", "Unexpected end of input")]
#[case::unmatched_paren("(A Pa Pb", "matching ')'")]
#[case::group_with_leftover("(Pa Pb)", "inside group")]
#[case::trailing_top_level("Pa Pb", "trailing")]
fn malformed_inputs_are_rejected(#[case] text: &str, #[case] expected_message: &str) {
    let result = parse_ltl(text);
    assert!(result.is_err(), "expected '{text}' to fail");
    let error = result.unwrap_err();
    assert!(
        error.message.contains(expected_message),
        "error for '{text}' was '{}', expected it to mention '{expected_message}'",
        error.message
    );
}
