//! Unit tests for Validation and ErrorList.
//!
//! Covers:
//! - Construction and the non-empty error invariant
//! - Error accumulation through ap, zip, map2 and collect
//! - Short-circuit through flat_map
//! - fold, to_result and to_either

use monadix::control::{Either, ErrorList, Validation};
use monadix::error::{EmptyErrorsError, UnwrapErrorsOnSuccessError};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    name: String,
    age: u32,
}

fn validate_name(name: &str) -> Validation<String, String> {
    if name.trim().is_empty() {
        Validation::invalid("name must not be blank".to_string())
    } else {
        Validation::valid(name.to_string())
    }
}

fn validate_age(age: i64) -> Validation<String, u32> {
    match u32::try_from(age) {
        Ok(age) if age >= 18 => Validation::valid(age),
        Ok(_) => Validation::invalid("age must be at least 18".to_string()),
        Err(_) => Validation::invalid("age must not be negative".to_string()),
    }
}

fn validate_user(name: &str, age: i64) -> Validation<String, User> {
    validate_name(name).map2(validate_age(age), |name, age| User { name, age })
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn valid_holds_value() {
    let validation: Validation<String, i32> = Validation::valid(42);
    assert!(validation.is_valid());
    assert!(!validation.is_invalid());
    assert_eq!(validation.errors(), None);
    assert_eq!(validation.unwrap(), 42);
}

#[rstest]
fn invalid_scalar_becomes_single_error() {
    let validation: Validation<&str, i32> = Validation::invalid("bad");
    assert!(validation.is_invalid());
    assert_eq!(validation.unwrap_errors().into_vec(), vec!["bad"]);
}

#[rstest]
fn invalid_many_keeps_order() {
    let validation = Validation::<&str, i32>::invalid_many(["a", "b", "c"]).unwrap();
    assert_eq!(validation.unwrap_errors().as_slice(), &["a", "b", "c"]);
}

#[rstest]
fn invalid_many_rejects_empty() {
    let empty: Vec<&str> = Vec::new();
    assert_eq!(Validation::<&str, i32>::invalid_many(empty), Err(EmptyErrorsError));
}

#[rstest]
fn error_list_rejects_empty_vec() {
    assert_eq!(ErrorList::<String>::try_from_vec(Vec::new()), Err(EmptyErrorsError));
    assert_eq!(ErrorList::try_from(vec![1]).map(|list| list.len()), Ok(1));
}

// =============================================================================
// Accumulation Tests
// =============================================================================

#[rstest]
fn both_invalid_concatenate_left_first() {
    let left: Validation<&str, i32> = Validation::invalid_many(["l1", "l2"]).unwrap();
    let right: Validation<&str, fn(i32) -> i32> = Validation::invalid("r1");
    assert_eq!(left.ap(right).unwrap_errors().into_vec(), vec!["l1", "l2", "r1"]);
}

#[rstest]
fn valid_ap_invalid_keeps_only_invalid_errors() {
    let value: Validation<&str, i32> = Validation::valid(1);
    let function: Validation<&str, fn(i32) -> i32> = Validation::invalid("function");
    assert_eq!(value.ap(function).unwrap_errors().into_vec(), vec!["function"]);
}

#[rstest]
fn invalid_ap_valid_keeps_only_invalid_errors() {
    let value: Validation<&str, i32> = Validation::invalid("value");
    let function: Validation<&str, fn(i32) -> i32> = Validation::valid(|x| x + 1);
    assert_eq!(value.ap(function).unwrap_errors().into_vec(), vec!["value"]);
}

#[rstest]
fn map2_builds_value_when_all_valid() {
    assert_eq!(
        validate_user("Ada", 36),
        Validation::valid(User {
            name: "Ada".to_string(),
            age: 36
        })
    );
}

#[rstest]
#[case("", 36, vec!["name must not be blank"])]
#[case("Ada", 12, vec!["age must be at least 18"])]
#[case(" ", -1, vec!["name must not be blank", "age must not be negative"])]
fn map2_accumulates_every_failure(
    #[case] name: &str,
    #[case] age: i64,
    #[case] expected: Vec<&str>,
) {
    let errors = validate_user(name, age).unwrap_errors().into_vec();
    assert_eq!(errors, expected);
}

#[rstest]
fn zip_accumulates_three_way() {
    let result = validate_name("")
        .zip(validate_age(3))
        .zip(Validation::<String, bool>::invalid("terms not accepted".to_string()));
    assert_eq!(result.unwrap_errors().len(), 3);
}

#[rstest]
fn collect_accumulates_all_errors() {
    let ages = [20, -4, 30, 5];
    let collected: Validation<String, Vec<u32>> = ages.into_iter().map(validate_age).collect();
    assert_eq!(
        collected.unwrap_errors().into_vec(),
        vec![
            "age must not be negative".to_string(),
            "age must be at least 18".to_string()
        ]
    );
}

// =============================================================================
// Short-circuit Tests
// =============================================================================

#[rstest]
fn flat_map_propagates_invalid_unchanged() {
    let mut called = false;
    let result = validate_name("").flat_map(|name| {
        called = true;
        validate_age(i64::try_from(name.len()).unwrap_or_default())
    });
    assert_eq!(result.unwrap_errors().into_vec(), vec!["name must not be blank".to_string()]);
    assert!(!called);
}

#[rstest]
fn flat_map_runs_dependent_check() {
    let result = validate_name("Bob").and_then(|name| validate_age(i64::try_from(name.len()).unwrap_or_default()));
    assert_eq!(
        result.unwrap_errors().into_vec(),
        vec!["age must be at least 18".to_string()]
    );
}

// =============================================================================
// Mapping, Fold and Conversion Tests
// =============================================================================

#[rstest]
fn map_errors_applies_to_each_error() {
    let validation = Validation::<&str, i32>::invalid_many(["a", "bc"]).unwrap();
    let mapped = validation.map_errors(|error| error.to_uppercase());
    assert_eq!(mapped.unwrap_errors().into_vec(), vec!["A".to_string(), "BC".to_string()]);
}

#[rstest]
fn fold_invalid_branch_receives_all_errors() {
    let validation = Validation::<&str, i32>::invalid_many(["a", "b"]).unwrap();
    let summary = validation.fold(|errors| errors.iter().copied().collect::<String>(), |v| v.to_string());
    assert_eq!(summary, "ab");
}

#[rstest]
fn to_result_is_lossy() {
    let validation = Validation::<&str, i32>::invalid_many(["first", "second"]).unwrap();
    assert_eq!(validation.clone().to_result(), Err("first"));
    assert_eq!(validation.to_either(), Either::error("first"));
    assert_eq!(Validation::<&str, i32>::valid(1).to_result(), Ok(1));
}

#[rstest]
fn unwrap_errors_on_valid_is_misuse() {
    assert_eq!(
        Validation::<&str, i32>::valid(1).try_unwrap_errors(),
        Err(UnwrapErrorsOnSuccessError)
    );
}

#[rstest]
#[should_panic(expected = "called unwrap_errors on a success value")]
fn unwrap_errors_on_valid_panics() {
    let _ = Validation::<&str, i32>::valid(1).unwrap_errors();
}

#[rstest]
#[should_panic(expected = "called unwrap on an error value")]
fn unwrap_on_invalid_panics() {
    let _ = validate_name("").unwrap();
}

#[rstest]
fn display_formats() {
    let validation = Validation::<&str, i32>::invalid_many(["a", "b"]).unwrap();
    assert_eq!(validation.to_string(), "Invalid([a, b])");
    assert_eq!(Validation::<&str, i32>::valid(3).to_string(), "Valid(3)");
}
