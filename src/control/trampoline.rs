//! Stack-safe recursion via trampolining.
//!
//! A [`Trampoline`] represents a recursive computation as data. Each
//! recursive step returns a suspended thunk instead of calling itself, and
//! [`Trampoline::run`] evaluates the thunks in a loop. Deep recursion over
//! long streams therefore runs in constant native stack space.
//!
//! The lifetime parameter lets suspended steps borrow from their
//! environment, so a fold over a stream can use a closure that captures
//! local state by reference.
//!
//! # Examples
//!
//! ```rust
//! use radiance::control::Trampoline;
//!
//! fn sum_to(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
//!     if n == 0 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(1_000_000, 0).run(), 500_000_500_000);
//! ```
//!
//! Borrowing from the caller:
//!
//! ```rust
//! use radiance::control::Trampoline;
//!
//! fn count_down<'a>(n: u32, seen: &'a mut Vec<u32>) -> Trampoline<'a, usize> {
//!     if n == 0 {
//!         Trampoline::done(seen.len())
//!     } else {
//!         seen.push(n);
//!         Trampoline::suspend(move || count_down(n - 1, seen))
//!     }
//! }
//!
//! let mut seen = Vec::new();
//! assert_eq!(count_down(3, &mut seen).run(), 3);
//! assert_eq!(seen, vec![3, 2, 1]);
//! ```

use std::fmt;

trait Continuation<'a, A> {
    fn step(self: Box<Self>) -> Trampoline<'a, A>;
}

#[doc(hidden)]
pub struct ContinuationBox<'a, A>(Box<dyn Continuation<'a, A> + 'a>);

impl<'a, A> ContinuationBox<'a, A> {
    fn new<C: Continuation<'a, A> + 'a>(continuation: C) -> Self {
        Self(Box::new(continuation))
    }

    fn step(self) -> Trampoline<'a, A> {
        self.0.step()
    }
}

/// A computation that is either finished or has a next step to run.
pub enum Trampoline<'a, A> {
    /// The computation is finished.
    Done(A),
    /// The next step, to be run by the driving loop.
    Suspend(Box<dyn FnOnce() -> Trampoline<'a, A> + 'a>),
    #[doc(hidden)]
    FlatMapInternal(ContinuationBox<'a, A>),
}

impl<'a, A> Trampoline<'a, A> {
    /// Creates a finished computation.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a computation whose next step is `thunk`.
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Returns whether the computation is already finished.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Runs the computation to completion in a loop.
    pub fn run(self) -> A {
        let mut current = self;
        let mut bounces: usize = 0;

        loop {
            match current {
                Self::Done(value) => {
                    tracing::trace!(bounces, "trampoline finished");
                    return value;
                }
                Self::Suspend(thunk) => current = thunk(),
                Self::FlatMapInternal(continuation) => current = continuation.step(),
            }
            bounces += 1;
        }
    }

    /// Transforms the final value.
    pub fn map<B, F>(self, function: F) -> Trampoline<'a, B>
    where
        F: FnOnce(A) -> B + 'a,
        A: 'a,
        B: 'a,
    {
        self.flat_map(move |value| Trampoline::done(function(value)))
    }

    /// Sequences another trampolined computation after this one.
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<'a, B>
    where
        F: FnOnce(A) -> Trampoline<'a, B> + 'a,
        A: 'a,
        B: 'a,
    {
        Trampoline::FlatMapInternal(ContinuationBox::new(FlatMapContinuation {
            trampoline: self,
            function,
        }))
    }
}

struct FlatMapContinuation<'a, A, F> {
    trampoline: Trampoline<'a, A>,
    function: F,
}

impl<'a, A: 'a, B: 'a, F> Continuation<'a, B> for FlatMapContinuation<'a, A, F>
where
    F: FnOnce(A) -> Trampoline<'a, B> + 'a,
{
    fn step(self: Box<Self>) -> Trampoline<'a, B> {
        let Self {
            trampoline,
            function,
        } = *self;
        match trampoline {
            Trampoline::Done(value) => function(value),
            Trampoline::Suspend(thunk) => Trampoline::suspend(move || thunk().flat_map(function)),
            // (m >>= f) >>= g == m >>= (\x -> f x >>= g)
            Trampoline::FlatMapInternal(inner) => inner.step().flat_map(function),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Trampoline<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
            Self::FlatMapInternal(_) => formatter
                .debug_tuple("FlatMapInternal")
                .field(&"<continuation>")
                .finish(),
        }
    }
}
