//! # radiance
//!
//! Persistent cons lists, lazy streams, and an arity-polymorphic curry engine.
//!
//! ## Overview
//!
//! - **Curry Engine**: [`curry`](compose::curry) turns a function of arity 1
//!   through 5 into an immutable record that accepts its arguments in any
//!   grouping
//! - **Control Structures**: memoized [`Lazy`](control::Lazy) values and a
//!   [`Trampoline`](control::Trampoline) for stack-safe iteration
//! - **Persistent Lists**: the eager [`Pair`](persistent::Pair) and the lazy
//!   [`LazyPair`](persistent::LazyPair), with free-function algebras
//! - **Facades**: chainable [`List`](facade::List) and
//!   [`Stream`](facade::Stream) wrappers with method, pointwise and curried
//!   call styles
//! - **Operators**: [`binary_op`](fn@ops::binary_op),
//!   [`concat`](fn@ops::concat) and [`fold_left`](fn@ops::fold_left)
//!
//! ## Feature Flags
//!
//! - `compose`: The curry engine
//! - `control`: Lazy values and trampolines
//! - `persistent`: `Pair` and `LazyPair` (requires `control`)
//! - `facade`: `List`, `Stream` and the `list!` macro (requires `compose`
//!   and `persistent`)
//! - `ops`: Operator and vector wrappers (requires `compose`)
//! - `serde`: Serialization for `Pair`, `List` and `BinaryOperator`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use radiance::prelude::*;
//!
//! let squares = Stream::range_from(1)
//!     .map(|x: &i64| x * x)
//!     .filter(|x: &i64| x % 2 == 1)
//!     .take(3);
//! assert_eq!(squares.to_vec(), vec![1, 9, 25]);
//!
//! let add = curry(|x: i64, y: i64| x + y);
//! assert_eq!(list![1, 2].map(|x: &i64| add.apply((*x, 10))), list![11, 12]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use radiance::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::RadianceError;

    #[cfg(feature = "compose")]
    pub use crate::compose::{Apply, Arity, Curried, curry, identity};

    #[cfg(feature = "control")]
    pub use crate::control::{Lazy, Trampoline};

    #[cfg(feature = "persistent")]
    pub use crate::persistent::{LazyPair, Pair};

    #[cfg(feature = "facade")]
    pub use crate::facade::{List, Stream};

    #[cfg(feature = "facade")]
    pub use crate::list;

    #[cfg(feature = "ops")]
    pub use crate::ops::{BinaryOperator, BinaryOutcome};
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "facade")]
pub mod facade;

#[cfg(feature = "ops")]
pub mod ops;
