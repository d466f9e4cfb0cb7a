//! Unit tests for `Trampoline`.
//!
//! Tests cover:
//! - Basic construction (done, suspend)
//! - Mutual recursion
//! - Stack safety with deep recursion
//! - map and flat_map

#![cfg(feature = "control")]

use radiance::control::Trampoline;
use rstest::rstest;

fn is_even(n: u64) -> Trampoline<'static, bool> {
    if n == 0 {
        Trampoline::done(true)
    } else {
        Trampoline::suspend(move || is_odd(n - 1))
    }
}

fn is_odd(n: u64) -> Trampoline<'static, bool> {
    if n == 0 {
        Trampoline::done(false)
    } else {
        Trampoline::suspend(move || is_even(n - 1))
    }
}

fn factorial(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
    if n <= 1 {
        Trampoline::done(accumulator)
    } else {
        Trampoline::suspend(move || factorial(n - 1, accumulator * n))
    }
}

// =============================================================================
// Basic Construction
// =============================================================================

#[rstest]
fn done_returns_value() {
    let trampoline = Trampoline::done(42);
    assert!(trampoline.is_done());
    assert_eq!(trampoline.run(), 42);
}

#[rstest]
fn suspend_defers_work() {
    let trampoline = Trampoline::suspend(|| Trampoline::done("later"));
    assert!(!trampoline.is_done());
    assert_eq!(trampoline.run(), "later");
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(5, 120)]
#[case(20, 2_432_902_008_176_640_000)]
fn factorial_cases(#[case] n: u64, #[case] expected: u64) {
    assert_eq!(factorial(n, 1).run(), expected);
}

// =============================================================================
// Stack Safety
// =============================================================================

#[rstest]
fn mutual_recursion_a_million_deep() {
    assert!(is_even(1_000_000).run());
    assert!(is_odd(1_000_001).run());
}

#[rstest]
fn borrowed_state_survives_deep_recursion() {
    fn count<'a>(remaining: u32, total: &'a mut u64) -> Trampoline<'a, ()> {
        if remaining == 0 {
            return Trampoline::done(());
        }
        *total += u64::from(remaining);
        Trampoline::suspend(move || count(remaining - 1, total))
    }

    let mut total = 0;
    count(1_000_000, &mut total).run();
    assert_eq!(total, 500_000_500_000);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn map_transforms_result() {
    let doubled = factorial(4, 1).map(|value| value * 2);
    assert_eq!(doubled.run(), 48);
}

#[rstest]
fn flat_map_sequences_computations() {
    let combined = factorial(3, 1).flat_map(|six| factorial(2, six));
    assert_eq!(combined.run(), 12);
}

#[rstest]
fn flat_map_chain_of_suspensions() {
    let chained = (0..1000).fold(Trampoline::done(0_u64), |trampoline, step| {
        trampoline.flat_map(move |value| Trampoline::suspend(move || Trampoline::done(value + step)))
    });
    assert_eq!(chained.run(), 499_500);
}

#[rstest]
fn debug_renders_variant() {
    assert_eq!(format!("{:?}", Trampoline::done(1)), "Done(1)");
    let suspended: Trampoline<'_, i32> = Trampoline::suspend(|| Trampoline::done(1));
    assert_eq!(format!("{suspended:?}"), "Suspend(\"<thunk>\")");
}
