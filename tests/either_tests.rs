//! Unit tests for Either.
//!
//! Covers:
//! - Symmetric construction (ok/right, error/left)
//! - Success-side mapping and chaining with short-circuit
//! - Failure-side mapping
//! - Unwrap family and Result conversions

use monadix::control::Either;
use monadix::error::{UnwrapErrorsOnSuccessError, UnwrapOnErrorError};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum ParseError {
    Empty,
    NotANumber(String),
}

fn parse(input: &str) -> Either<ParseError, i32> {
    if input.is_empty() {
        return Either::error(ParseError::Empty);
    }
    input
        .parse::<i32>()
        .map_err(|_| ParseError::NotANumber(input.to_string()))
        .into()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn ok_is_right() {
    let either: Either<ParseError, i32> = Either::ok(1);
    assert!(either.is_ok());
    assert!(either.is_right());
    assert_eq!(either, Either::Right(1));
}

#[rstest]
fn error_is_left() {
    let either: Either<ParseError, i32> = Either::error(ParseError::Empty);
    assert!(either.is_err());
    assert!(either.is_left());
    assert_eq!(either, Either::Left(ParseError::Empty));
}

// =============================================================================
// Mapping Tests
// =============================================================================

#[rstest]
#[case("21", Either::ok(42))]
#[case("", Either::error(ParseError::Empty))]
#[case("x", Either::error(ParseError::NotANumber("x".to_string())))]
fn map_transforms_success_only(#[case] input: &str, #[case] expected: Either<ParseError, i32>) {
    assert_eq!(parse(input).map(|n| n * 2), expected);
}

#[rstest]
fn map_err_transforms_failure_only() {
    let describe = |error: ParseError| format!("{error:?}");
    assert_eq!(parse("").map_err(describe), Either::error("Empty".to_string()));
    assert_eq!(parse("3").map_err(describe), Either::ok(3));
    assert_eq!(parse("").map_left(describe), Either::error("Empty".to_string()));
}

#[rstest]
fn bimap_applies_matching_side() {
    let success: Either<i32, i32> = Either::ok(2);
    let failure: Either<i32, i32> = Either::error(2);
    assert_eq!(success.bimap(|e| e - 1, |v| v + 1), Either::ok(3));
    assert_eq!(failure.bimap(|e| e - 1, |v| v + 1), Either::error(1));
}

// =============================================================================
// Chaining Tests
// =============================================================================

#[rstest]
fn flat_map_chains_successes() {
    let result = parse("4").flat_map(|n| parse(&(n * 10).to_string()));
    assert_eq!(result, Either::ok(40));
}

#[rstest]
fn flat_map_stops_at_first_failure() {
    let mut calls = 0;
    let result = parse("").flat_map(|n| {
        calls += 1;
        parse(&n.to_string())
    });
    assert_eq!(result, Either::error(ParseError::Empty));
    assert_eq!(calls, 0);
}

#[rstest]
fn bind_and_and_then_are_aliases() {
    let step = |n: i32| -> Either<ParseError, i32> { Either::ok(n + 1) };
    assert_eq!(parse("1").bind(step), parse("1").flat_map(step));
    assert_eq!(parse("1").and_then(step), parse("1").flat_map(step));
}

#[rstest]
fn ap_applies_wrapped_function() {
    let function: Either<ParseError, fn(i32) -> i32> = Either::ok(|x| x * 3);
    assert_eq!(parse("2").ap(function), Either::ok(6));
}

#[rstest]
fn ap_prefers_left_operand_failure() {
    let function: Either<ParseError, fn(i32) -> i32> = Either::error(ParseError::Empty);
    assert_eq!(
        parse("x").ap(function),
        Either::error(ParseError::NotANumber("x".to_string()))
    );
}

// =============================================================================
// Unwrap Tests
// =============================================================================

#[rstest]
fn unwrap_success() {
    assert_eq!(parse("9").unwrap(), 9);
}

#[rstest]
#[should_panic(expected = "called unwrap on an error value: Empty")]
fn unwrap_failure_panics_with_error() {
    let _ = parse("").unwrap();
}

#[rstest]
fn try_unwrap_failure_carries_error() {
    assert_eq!(
        parse("").try_unwrap(),
        Err(UnwrapOnErrorError::new(ParseError::Empty))
    );
}

#[rstest]
fn try_unwrap_err_on_success() {
    assert_eq!(parse("1").try_unwrap_err(), Err(UnwrapErrorsOnSuccessError));
    assert_eq!(parse("").unwrap_err(), ParseError::Empty);
}

#[rstest]
fn unwrap_or_variants() {
    assert_eq!(parse("").unwrap_or(-1), -1);
    assert_eq!(parse("5").unwrap_or(-1), 5);
    let fallback = parse("abc").unwrap_or_else(|error| match error {
        ParseError::Empty => 0,
        ParseError::NotANumber(text) => i32::try_from(text.len()).unwrap_or(i32::MAX),
    });
    assert_eq!(fallback, 3);
}

// =============================================================================
// Fold, Swap and Conversion Tests
// =============================================================================

#[rstest]
fn fold_calls_exactly_one_branch() {
    let mut left_calls = 0;
    let mut right_calls = 0;
    let value = parse("8").fold(
        |_| {
            left_calls += 1;
            0
        },
        |n| {
            right_calls += 1;
            n
        },
    );
    assert_eq!(value, 8);
    assert_eq!((left_calls, right_calls), (0, 1));
}

#[rstest]
fn swap_exchanges_sides() {
    assert_eq!(parse("1").swap(), Either::Left(1));
    assert_eq!(parse("").swap(), Either::Right(ParseError::Empty));
}

#[rstest]
fn result_roundtrip() {
    let result: Result<i32, ParseError> = parse("12").into();
    assert_eq!(result, Ok(12));
    let either: Either<ParseError, i32> = result.into();
    assert_eq!(either.into_result(), Ok(12));
    assert_eq!(parse("").into_left(), Some(ParseError::Empty));
    assert_eq!(parse("1").into_right(), Some(1));
}

#[rstest]
fn display_names_side() {
    let success: Either<String, i32> = Either::ok(42);
    let failure: Either<String, i32> = Either::error("boom".to_string());
    assert_eq!(success.to_string(), "Right(42)");
    assert_eq!(failure.to_string(), "Left(boom)");
}
