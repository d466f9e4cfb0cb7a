//! Control structures for deferred and stack-safe evaluation.
//!
//! - [`Lazy`]: Memoized deferred values, used for stream tails
//! - [`Trampoline`]: Stack-safe recursion, used by stream consumers
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use radiance::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_evaluated());
//! assert_eq!(*lazy.force(), 42);
//! assert!(lazy.is_evaluated());
//! ```
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use radiance::control::Trampoline;
//!
//! fn factorial(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
//!     if n <= 1 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::suspend(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(factorial(10, 1).run(), 3_628_800);
//! ```

mod lazy;
mod trampoline;

pub use lazy::Lazy;
pub use trampoline::Trampoline;
