//! Memoized deferred values.
//!
//! `Lazy<T, F>` holds a computation that runs the first time the value is
//! demanded. The result is cached, so every later access observes the same
//! value without re-running the computation. Stream cells use it for their
//! tails.
//!
//! # Examples
//!
//! ```rust
//! use radiance::control::Lazy;
//! use std::cell::Cell;
//!
//! let evaluations = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     evaluations.set(evaluations.get() + 1);
//!     42
//! });
//!
//! assert_eq!(evaluations.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(evaluations.get(), 1);
//! ```

use std::cell::{OnceCell, RefCell};
use std::fmt;

use crate::error::RadianceError;

/// A lazily evaluated value with memoization.
///
/// The initializer runs at most once, on the first call to
/// [`force`](Lazy::force) or [`try_force`](Lazy::try_force). The cached value
/// lives in a `OnceCell`, so references to it stay valid for as long as the
/// `Lazy` itself.
///
/// This type is not thread-safe.
pub struct Lazy<T, F = fn() -> T> {
    value: OnceCell<T>,
    initializer: RefCell<Option<F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a deferred value. `initializer` does not run until forced.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            value: OnceCell::new(),
            initializer: RefCell::new(Some(initializer)),
        }
    }

    /// Evaluates the value if necessary and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panics (the value is then poisoned), or if
    /// the value was already poisoned by an earlier panic. Use
    /// [`try_force`](Lazy::try_force) to observe poisoning as an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radiance::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "computed".to_string());
    /// assert_eq!(lazy.force().as_str(), "computed");
    /// ```
    pub fn force(&self) -> &T {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Evaluates the value if necessary and returns a reference to it, or
    /// [`RadianceError::PoisonedThunk`] if a previous evaluation panicked.
    ///
    /// # Errors
    ///
    /// Returns [`RadianceError::PoisonedThunk`] when the initializer has
    /// panicked before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radiance::control::Lazy;
    /// use radiance::error::RadianceError;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let lazy: Lazy<i32, _> = Lazy::new(|| panic!("boom"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    ///
    /// assert_eq!(lazy.try_force().err(), Some(RadianceError::PoisonedThunk));
    /// ```
    pub fn try_force(&self) -> Result<&T, RadianceError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        // Taking the initializer out first leaves the value poisoned if it
        // panics. The borrow ends before the initializer runs, since it may
        // inspect other lazy values.
        let initializer = self
            .initializer
            .borrow_mut()
            .take()
            .ok_or(RadianceError::PoisonedThunk)?;
        let value = initializer();
        tracing::trace!("deferred value evaluated");

        Ok(self.value.get_or_init(|| value))
    }

    /// Consumes the lazy value, evaluating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`RadianceError::PoisonedThunk`] when the initializer has
    /// panicked before.
    pub fn into_inner(self) -> Result<T, RadianceError> {
        let Self { value, initializer } = self;
        match (value.into_inner(), initializer.into_inner()) {
            (Some(value), _) => Ok(value),
            (None, Some(initializer)) => Ok(initializer()),
            (None, None) => Err(RadianceError::PoisonedThunk),
        }
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates a value that is already evaluated.
    ///
    /// ```rust
    /// use radiance::control::Lazy;
    ///
    /// let lazy = Lazy::evaluated(7);
    /// assert!(lazy.is_evaluated());
    /// ```
    #[inline]
    pub fn evaluated(value: T) -> Self {
        Self::new_with_value(value)
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates a value that is already evaluated, for any initializer type.
    ///
    /// Stream cells built from eager data use this so that their tail type
    /// matches cells built from generators.
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            value: OnceCell::from(value),
            initializer: RefCell::new(None),
        }
    }

    /// Returns the cached value without triggering evaluation.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns whether the value has been evaluated.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether the initializer panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none() && self.initializer.borrow().is_none()
    }

    /// Takes the cached value out, if any, leaving the lazy value poisoned.
    ///
    /// Used when tearing down long stream chains iteratively.
    pub(crate) fn take_evaluated(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None if self.is_poisoned() => formatter.write_str("Lazy(<poisoned>)"),
            None => formatter.write_str("Lazy(<deferred>)"),
        }
    }
}
