//! Integration tests for the eager `Pair` algebra.

#![cfg(feature = "persistent")]

use std::rc::Rc;

use radiance::persistent::{Pair, pair};
use rstest::rstest;

fn numbers(elements: &[i32]) -> Pair<i32> {
    pair::from_array(elements)
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[rstest]
fn concat_appends_in_order() {
    let joined = pair::concat(&numbers(&[1, 2, 3]), &numbers(&[4, 5, 6]));
    assert_eq!(pair::to_vec(&joined), vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn map_increments_each_element() {
    let incremented = pair::map(|x: &i32| x + 1, &numbers(&[1, 2, 3]));
    assert_eq!(pair::to_vec(&incremented), vec![2, 3, 4]);
}

#[rstest]
fn foldl_sums() {
    assert_eq!(pair::foldl(|a, b| a + b, 0, &numbers(&[1, 2, 3, 4])), 10);
}

#[rstest]
fn zip_truncates_to_shorter() {
    let zipped = pair::zip(&numbers(&[1, 2, 3]), &pair::from_vec(vec!['a', 'b']));
    assert_eq!(pair::to_vec(&zipped), vec![(1, 'a'), (2, 'b')]);
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
#[case(&[], &[])]
#[case(&[1], &[1])]
#[case(&[1, 2, 3], &[3, 2, 1])]
fn reverse_cases(#[case] input: &[i32], #[case] expected: &[i32]) {
    assert_eq!(pair::to_vec(&pair::reverse(&numbers(input))), expected.to_vec());
}

#[rstest]
fn foldr_is_right_associative() {
    let rendered = pair::foldr(
        |x: &i32, acc: String| format!("({x} {acc})"),
        "z".to_string(),
        &numbers(&[1, 2, 3]),
    );
    assert_eq!(rendered, "(1 (2 (3 z)))");
}

#[rstest]
fn filter_keeps_matching_in_order() {
    let odds = pair::filter(|x: &i32| x % 2 == 1, &numbers(&[1, 2, 3, 4, 5]));
    assert_eq!(pair::to_vec(&odds), vec![1, 3, 5]);
}

#[rstest]
fn take_while_stops_at_first_failure() {
    let prefix = pair::take_while(|x: &i32| *x < 3, &numbers(&[1, 2, 3, 1]));
    assert_eq!(pair::to_vec(&prefix), vec![1, 2]);
}

#[rstest]
fn chain_flattens() {
    let expanded = pair::chain(&numbers(&[1, 2]), |x: &i32| numbers(&[*x, *x * 10]));
    assert_eq!(pair::to_vec(&expanded), vec![1, 10, 2, 20]);
}

#[rstest]
fn join_flattens_nested_lists() {
    let nested = pair::from_vec(vec![numbers(&[1]), Pair::Empty, numbers(&[2, 3])]);
    assert_eq!(pair::to_vec(&pair::join(&nested)), vec![1, 2, 3]);
}

#[rstest]
fn mconcat_concatenates_all() {
    let joined = pair::mconcat(&[numbers(&[1]), numbers(&[2, 3]), numbers(&[])]);
    assert_eq!(pair::to_vec(&joined), vec![1, 2, 3]);
}

#[rstest]
#[case(0, &[])]
#[case(2, &[1, 2])]
#[case(10, &[1, 2, 3])]
fn take_bounds(#[case] count: usize, #[case] expected: &[i32]) {
    assert_eq!(pair::to_vec(&pair::take(count, &numbers(&[1, 2, 3]))), expected.to_vec());
}

#[rstest]
fn uncons_splits() {
    let list = numbers(&[1, 2]);
    let (head, tail) = pair::uncons(&list).unwrap();
    assert_eq!(*head, 1);
    assert_eq!(pair::to_vec(&tail), vec![2]);
    assert!(pair::uncons(&Pair::<i32>::Empty).is_none());
}

#[rstest]
fn display_renders_cons_cells() {
    assert_eq!(numbers(&[1, 2]).to_string(), "cons(1, cons(2, empty))");
    assert_eq!(Pair::<i32>::Empty.to_string(), "empty");
}

// =============================================================================
// Structural Sharing
// =============================================================================

#[rstest]
fn concat_shares_second_list() {
    let first = numbers(&[1, 2]);
    let second = numbers(&[3, 4]);
    let joined = pair::concat(&first, &second);

    let suffix = joined.tail().and_then(Pair::tail).unwrap();
    match (suffix, &second) {
        (Pair::Cons(left), Pair::Cons(right)) => assert!(Rc::ptr_eq(left, right)),
        _ => panic!("expected shared cells"),
    }
}

#[rstest]
fn for_each_returns_same_cells() {
    let list = numbers(&[1, 2, 3]);
    let mut seen = Vec::new();
    let returned = pair::for_each(|x: &i32| seen.push(*x), &list);

    assert_eq!(seen, vec![1, 2, 3]);
    match (&returned, &list) {
        (Pair::Cons(left), Pair::Cons(right)) => assert!(Rc::ptr_eq(left, right)),
        _ => panic!("expected shared cells"),
    }
}

#[rstest]
fn operations_do_not_modify_input() {
    let list = numbers(&[3, 1, 2]);
    let _ = pair::reverse(&list);
    let _ = pair::map(|x: &i32| x * 2, &list);
    let _ = pair::concat(&list, &list);

    assert_eq!(pair::to_vec(&list), vec![3, 1, 2]);
}

// =============================================================================
// Large Lists
// =============================================================================

#[rstest]
fn million_element_list_folds_and_drops() {
    let list: Pair<u64> = (0..1_000_000).collect();
    assert_eq!(pair::length(&list), 1_000_000);
    assert_eq!(pair::foldl(|acc, x| acc + x, 0, &list), 499_999_500_000);

    let reversed = pair::reverse(&list);
    assert_eq!(reversed.head(), Some(&999_999));
    drop(list);
    drop(reversed);
}
