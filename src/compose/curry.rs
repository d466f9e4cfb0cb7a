//! Arity-polymorphic partial application.
//!
//! [`curry`] turns a plain function of arity `n` (1 to 5) into a
//! [`Curried`] record. The record can then be applied with any grouping of
//! arguments, as long as the groups add up to `n`:
//!
//! - fully tupled: `f.apply((a, b, c))`
//! - fully curried: `f.apply((a,)).apply((b,)).apply((c,))`
//! - grouped: `f.apply((a, b)).apply((c,))`
//!
//! Every application returns a fresh value. A partial application never
//! mutates the record it was made from, so the same partial application can
//! be reused any number of times.
//!
//! # Design
//!
//! A `Curried<F, Signature, Bound>` carries three pieces of information:
//!
//! - the function itself, shared through `Rc`
//! - a phantom `fn(A1, ..., An) -> R` signature that fixes the arity at
//!   construction time
//! - a tuple of the arguments bound so far
//!
//! The [`Apply`] implementations are generated for every combination of
//! arity, bound prefix, and supplied group. Whether an application yields
//! another `Curried` or the final result is therefore decided at compile
//! time, and supplying too many arguments of the wrong type is a type error
//! rather than a runtime failure.
//!
//! When more arguments are supplied than the function needs, the function is
//! called with the first `n` and its result is applied to the remaining one
//! or two arguments. This lets curried functions that return curried
//! functions be driven in a single call.
//!
//! # Limits
//!
//! - [`curry`] accepts functions of arity 1 to 5. Arity 0 and arity 6 or more
//!   do not implement [`Arity`], so `curry` rejects them at compile time.
//! - At most two surplus arguments are forwarded to the result. A call that
//!   supplies three or more arguments beyond the arity has no [`Apply`]
//!   implementation and does not compile.
//!
//! # Examples
//!
//! ```rust
//! use radiance::compose::{Apply, curry};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! let curried_add = curry(add);
//! assert_eq!(curried_add.apply((2,)).apply((19,)), 21);
//! assert_eq!(curried_add.apply((2, 19)), 21);
//!
//! let volume = curry(|width: i32, height: i32, depth: i32| width * height * depth);
//! assert_eq!(volume.apply((2, 3, 4)), 24);
//! assert_eq!(volume.apply((2,)).apply((3,)).apply((4,)), 24);
//! assert_eq!(volume.apply((2, 3)).apply((4,)), 24);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// Invocation of a callable with a tuple of arguments.
///
/// `Arguments` is always a tuple. The empty tuple is accepted by every
/// [`Curried`] record and returns the record unchanged.
pub trait Apply<Arguments> {
    /// The result of the application: either a further [`Curried`] record
    /// or the value produced by the underlying function.
    type Output;

    /// Applies the callable to `arguments`.
    fn apply(&self, arguments: Arguments) -> Self::Output;
}

/// Marker trait recording the declared arity of a function.
///
/// `Signature` is a function pointer type such as `fn(i32, i32) -> i32`.
/// Each function implements `Arity` for exactly one signature, which is how
/// [`curry`] infers the arity from the function's parameter list.
pub trait Arity<Signature> {
    /// Number of parameters the function expects.
    const ARITY: usize;
}

/// Tuples usable as the bound-argument buffer of a [`Curried`] record.
pub trait ArgumentList {
    /// Number of arguments in the tuple.
    const LENGTH: usize;
}

/// An immutable partial-application record.
///
/// See the [module documentation](self) for an overview.
pub struct Curried<F, Signature, Bound = ()> {
    function: Rc<F>,
    bound: Bound,
    signature: PhantomData<Signature>,
}

/// Converts a function into a [`Curried`] record with no bound arguments.
///
/// The arity is taken from the function's signature. Closures must annotate
/// their parameter types so that the signature is known.
///
/// # Examples
///
/// ```rust
/// use radiance::compose::{Apply, curry};
///
/// let greet = curry(|greeting: &str, name: &str| format!("{greeting}, {name}!"));
/// let hello = greet.apply(("Hello",));
///
/// assert_eq!(hello.apply(("Alice",)), "Hello, Alice!");
/// assert_eq!(hello.apply(("Bob",)), "Hello, Bob!");
/// ```
#[inline]
pub fn curry<F, Signature>(function: F) -> Curried<F, Signature>
where
    F: Arity<Signature>,
{
    Curried::new(function)
}

impl<F, Signature> Curried<F, Signature>
where
    F: Arity<Signature>,
{
    /// Creates a record with no bound arguments.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: Rc::new(function),
            bound: (),
            signature: PhantomData,
        }
    }
}

impl<F, Signature, Bound> Curried<F, Signature, Bound>
where
    F: Arity<Signature>,
    Bound: ArgumentList,
{
    /// Returns the declared arity of the underlying function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radiance::compose::{Apply, curry};
    ///
    /// let clamp = curry(|low: i32, high: i32, value: i32| value.max(low).min(high));
    /// assert_eq!(clamp.arity(), 3);
    /// assert_eq!(clamp.apply((0,)).arity(), 3);
    /// ```
    #[inline]
    pub const fn arity(&self) -> usize {
        F::ARITY
    }

    /// Returns how many arguments have been bound so far.
    #[inline]
    pub const fn bound_count(&self) -> usize {
        Bound::LENGTH
    }

    /// Returns how many arguments are still needed before the function runs.
    #[inline]
    pub const fn remaining(&self) -> usize {
        F::ARITY - Bound::LENGTH
    }
}

impl<F, Signature, Bound: Clone> Clone for Curried<F, Signature, Bound> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            bound: self.bound.clone(),
            signature: PhantomData,
        }
    }
}

impl<F, Signature, Bound> fmt::Debug for Curried<F, Signature, Bound>
where
    F: Arity<Signature>,
    Bound: ArgumentList,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &F::ARITY)
            .field("bound", &Bound::LENGTH)
            .finish_non_exhaustive()
    }
}

// Supplying no arguments is a no-op that re-wraps the same record.
impl<F, Signature, Bound: Clone> Apply<()> for Curried<F, Signature, Bound> {
    type Output = Self;

    #[inline]
    fn apply(&self, _arguments: ()) -> Self::Output {
        self.clone()
    }
}

// =============================================================================
// Generated Implementations
// =============================================================================

macro_rules! impl_argument_list {
    ($length:expr; $($element:ident),*) => {
        impl<$($element),*> ArgumentList for ($($element,)*) {
            const LENGTH: usize = $length;
        }
    };
}

impl_argument_list!(0;);
impl_argument_list!(1; A1);
impl_argument_list!(2; A1, A2);
impl_argument_list!(3; A1, A2, A3);
impl_argument_list!(4; A1, A2, A3, A4);
impl_argument_list!(5; A1, A2, A3, A4, A5);

macro_rules! impl_arity {
    ($length:expr; $($parameter:ident),+) => {
        impl<Function, $($parameter,)+ Return> Arity<fn($($parameter),+) -> Return> for Function
        where
            Function: Fn($($parameter),+) -> Return,
        {
            const ARITY: usize = $length;
        }
    };
}

impl_arity!(1; A1);
impl_arity!(2; A1, A2);
impl_arity!(3; A1, A2, A3);
impl_arity!(4; A1, A2, A3, A4);
impl_arity!(5; A1, A2, A3, A4, A5);

// Walks every split of the parameter list into
// `[bound] [supplied] [pending]` and emits one `Apply` impl per split.
// Parameter idents double as binding names inside the generated bodies.
macro_rules! impl_apply {
    ([$($all:ident)+]) => {
        impl_apply!(@bound [$($all)+] [] [$($all)+]);
    };

    (@bound [$($all:ident)+] [$($bound:ident)*] [$first:ident $($rest:ident)*]) => {
        impl_apply!(@supply [$($all)+] [$($bound)*] [$first] [$($rest)*]);
        impl_apply!(@bound [$($all)+] [$($bound)* $first] [$($rest)*]);
    };
    (@bound [$($all:ident)+] [$($bound:ident)*] []) => {};

    // Partial: arguments are still pending after this group.
    (@supply [$($all:ident)+] [$($bound:ident)*] [$($supplied:ident)+] [$next:ident $($rest:ident)*]) => {
        impl<Function, $($all,)+ Return> Apply<($($supplied,)+)>
            for Curried<Function, fn($($all),+) -> Return, ($($bound,)*)>
        where
            Function: Fn($($all),+) -> Return,
            $($bound: Clone,)*
        {
            type Output = Curried<Function, fn($($all),+) -> Return, ($($bound,)* $($supplied,)+)>;

            #[allow(non_snake_case)]
            #[inline]
            fn apply(&self, arguments: ($($supplied,)+)) -> Self::Output {
                let ($($bound,)*) = self.bound.clone();
                let ($($supplied,)+) = arguments;
                Curried {
                    function: Rc::clone(&self.function),
                    bound: ($($bound,)* $($supplied,)+),
                    signature: PhantomData,
                }
            }
        }

        impl_apply!(@supply [$($all)+] [$($bound)*] [$($supplied)+ $next] [$($rest)*]);
    };

    // Saturating: this group completes the argument list.
    (@supply [$($all:ident)+] [$($bound:ident)*] [$($supplied:ident)+] []) => {
        impl<Function, $($all,)+ Return> Apply<($($supplied,)+)>
            for Curried<Function, fn($($all),+) -> Return, ($($bound,)*)>
        where
            Function: Fn($($all),+) -> Return,
            $($bound: Clone,)*
        {
            type Output = Return;

            #[allow(non_snake_case)]
            #[inline]
            fn apply(&self, arguments: ($($supplied,)+)) -> Self::Output {
                let ($($bound,)*) = self.bound.clone();
                let ($($supplied,)+) = arguments;
                (self.function)($($bound,)* $($supplied),+)
            }
        }

        impl<Function, $($all,)+ Return, Surplus1> Apply<($($supplied,)+ Surplus1,)>
            for Curried<Function, fn($($all),+) -> Return, ($($bound,)*)>
        where
            Function: Fn($($all),+) -> Return,
            Return: Apply<(Surplus1,)>,
            $($bound: Clone,)*
        {
            type Output = <Return as Apply<(Surplus1,)>>::Output;

            #[allow(non_snake_case)]
            #[inline]
            fn apply(&self, arguments: ($($supplied,)+ Surplus1,)) -> Self::Output {
                let ($($bound,)*) = self.bound.clone();
                let ($($supplied,)+ surplus1,) = arguments;
                (self.function)($($bound,)* $($supplied),+).apply((surplus1,))
            }
        }

        impl<Function, $($all,)+ Return, Surplus1, Surplus2> Apply<($($supplied,)+ Surplus1, Surplus2)>
            for Curried<Function, fn($($all),+) -> Return, ($($bound,)*)>
        where
            Function: Fn($($all),+) -> Return,
            Return: Apply<(Surplus1, Surplus2)>,
            $($bound: Clone,)*
        {
            type Output = <Return as Apply<(Surplus1, Surplus2)>>::Output;

            #[allow(non_snake_case)]
            #[inline]
            fn apply(&self, arguments: ($($supplied,)+ Surplus1, Surplus2)) -> Self::Output {
                let ($($bound,)*) = self.bound.clone();
                let ($($supplied,)+ surplus1, surplus2) = arguments;
                (self.function)($($bound,)* $($supplied),+).apply((surplus1, surplus2))
            }
        }
    };
}

impl_apply!([A1]);
impl_apply!([A1 A2]);
impl_apply!([A1 A2 A3]);
impl_apply!([A1 A2 A3 A4]);
impl_apply!([A1 A2 A3 A4 A5]);

static_assertions::assert_not_impl_any!(Curried<fn(i32) -> i32, fn(i32) -> i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    #[rstest]
    fn test_curry_binary_step_by_step() {
        let curried = curry(add);
        assert_eq!(curried.apply((2,)).apply((19,)), 21);
    }

    #[rstest]
    fn test_curry_binary_tupled() {
        let curried = curry(add);
        assert_eq!(curried.apply((2, 19)), 21);
    }

    #[rstest]
    fn test_curry_ternary_groupings_agree() {
        let curried = curry(add_three);
        let tupled = curried.apply((1, 2, 3));
        let stepped = curried.apply((1,)).apply((2,)).apply((3,));
        let grouped_left = curried.apply((1, 2)).apply((3,));
        let grouped_right = curried.apply((1,)).apply((2, 3));

        assert_eq!(tupled, 6);
        assert_eq!(stepped, 6);
        assert_eq!(grouped_left, 6);
        assert_eq!(grouped_right, 6);
    }

    #[rstest]
    fn test_empty_application_returns_same_record() {
        let curried = curry(add_three);
        let partial = curried.apply((10,));
        let rewrapped = partial.apply(());

        assert_eq!(rewrapped.bound_count(), 1);
        assert_eq!(rewrapped.apply((20, 30)), 60);
    }

    #[rstest]
    fn test_partial_application_is_reusable() {
        let add_five = curry(add).apply((5,));
        for value in 0..10 {
            assert_eq!(add_five.apply((value,)), 5 + value);
        }
    }

    #[rstest]
    fn test_arity_and_bound_count() {
        let curried = curry(add_three);
        assert_eq!(curried.arity(), 3);
        assert_eq!(curried.bound_count(), 0);
        assert_eq!(curried.remaining(), 3);

        let partial = curried.apply((1, 2));
        assert_eq!(partial.arity(), 3);
        assert_eq!(partial.bound_count(), 2);
        assert_eq!(partial.remaining(), 1);
    }

    #[rstest]
    fn test_function_runs_only_when_saturated() {
        let calls = Cell::new(0);
        let counting = curry(|first: i32, second: i32| {
            calls.set(calls.get() + 1);
            first * second
        });

        let partial = counting.apply((6,));
        assert_eq!(calls.get(), 0);

        assert_eq!(partial.apply((7,)), 42);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_surplus_arguments_are_forwarded() {
        let outer = curry(|first: i32, second: i32| {
            curry(move |third: i32| first + second + third)
        });
        assert_eq!(outer.apply((1, 2, 3)), 6);
    }

    #[rstest]
    fn test_two_surplus_arguments_are_forwarded() {
        let outer = curry(|first: i32| curry(move |second: i32, third: i32| first * second - third));
        assert_eq!(outer.apply((4, 5, 6)), 14);
    }

    #[rstest]
    fn test_non_copy_arguments_are_cloned_per_application() {
        let join = curry(|left: String, right: String| format!("{left}{right}"));
        let hello = join.apply(("Hello, ".to_string(),));

        assert_eq!(hello.apply(("World".to_string(),)), "Hello, World");
        assert_eq!(hello.apply(("Rust".to_string(),)), "Hello, Rust");
    }

    #[rstest]
    fn test_arity_five() {
        let sum = curry(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
        assert_eq!(sum.arity(), 5);
        assert_eq!(sum.apply((1, 2)).apply((3,)).apply((4, 5)), 15);
        assert_eq!(sum.apply((1, 2, 3, 4, 5)), 15);
    }

    #[rstest]
    fn test_debug_shows_arity_and_bound() {
        let partial = curry(add_three).apply((1,));
        let debug = format!("{partial:?}");
        assert!(debug.contains("arity: 3"));
        assert!(debug.contains("bound: 1"));
    }
}
