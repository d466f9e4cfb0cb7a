//! Function currying.
//!
//! This module provides [`curry`], which converts a function of fixed arity
//! into an immutable partial-application record that accepts its arguments
//! in any grouping.
//!
//! # Overview
//!
//! - [`curry`]: Convert a function of arity 1 through 5 into a [`Curried`] record
//! - [`Apply`]: Invoke a curried record (or anything else) with a tuple of arguments
//! - [`Arity`]: Compile-time arity of a function signature
//! - [`identity`]: The identity function
//!
//! # Examples
//!
//! ```
//! use radiance::compose::{Apply, curry};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried_add = curry(add);
//! let add_five = curried_add.apply((5,));
//! assert_eq!(add_five.apply((3,)), 8);
//! assert_eq!(curried_add.apply((5, 3)), 8);
//! ```
//!
//! # Mathematical Background
//!
//! Currying converts a function that takes multiple arguments into a chain
//! of functions that each take a single argument:
//!
//! ```text
//! curry(f: (A, B, C) -> D) = A -> B -> C -> D
//! ```
//!
//! A [`Curried`] record generalizes this to arbitrary argument groups, so
//! `f(a, b, c)`, `f(a)(b)(c)`, `f(a, b)(c)` and `f(a)(b, c)` all denote the
//! same computation.

mod curry;
mod utils;

pub use curry::{ArgumentList, Apply, Arity, Curried, curry};
pub use utils::identity;
