#![cfg(all(feature = "serde", feature = "facade", feature = "ops"))]

//! Integration tests for serde support in radiance.

use radiance::facade::List;
use radiance::list;
use radiance::ops::{BinaryOperator, BinaryOutcome};
use radiance::persistent::{Pair, pair};
use rstest::rstest;

// =============================================================================
// Pair
// =============================================================================

#[rstest]
fn pair_serializes_as_sequence() {
    let numbers = pair::from_vec(vec![1, 2, 3]);
    assert_eq!(serde_json::to_string(&numbers).unwrap(), "[1,2,3]");
}

#[rstest]
fn pair_json_roundtrip() {
    let words = pair::from_vec(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&words).unwrap();
    let restored: Pair<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, words);
}

#[rstest]
fn empty_pair_roundtrip() {
    let restored: Pair<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn pair_rejects_non_sequence() {
    assert!(serde_json::from_str::<Pair<i32>>("{\"a\": 1}").is_err());
}

// =============================================================================
// List
// =============================================================================

#[rstest]
fn list_json_roundtrip() {
    let nested = list![list![1], list![], list![2, 3]];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1],[],[2,3]]");

    let restored: List<List<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}

// =============================================================================
// Operators
// =============================================================================

#[rstest]
fn operator_roundtrip() {
    let json = serde_json::to_string(&BinaryOperator::GreaterThan).unwrap();
    let restored: BinaryOperator = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, BinaryOperator::GreaterThan);
}

#[rstest]
fn outcome_roundtrip() {
    let outcome = BinaryOutcome::Number(2.5);
    let json = serde_json::to_string(&outcome).unwrap();
    let restored: BinaryOutcome<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, outcome);
}
