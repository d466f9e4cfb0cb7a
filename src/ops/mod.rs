//! Thin wrappers over operators and vectors, each with a curried form.
//!
//! - [`BinaryOperator`] and [`binary_op`](fn@binary_op): dispatch over
//!   `+ - / * = > <`
//! - [`concat`](fn@concat): join two vectors
//! - [`fold_left`](fn@fold_left): left fold over a slice
//!
//! Each function has a same-named module whose `curried()` returns it as a
//! [`Curried`](crate::compose::Curried) record.
//!
//! # Examples
//!
//! ```rust
//! use radiance::compose::Apply;
//! use radiance::ops::{BinaryOperator, BinaryOutcome, binary_op};
//!
//! let below_five = binary_op::curried().apply((BinaryOperator::LessThan, 5));
//! assert_eq!(below_five.apply((3,)), BinaryOutcome::Boolean(true));
//! ```

mod array;
mod binary;

pub use array::{concat, fold_left};
pub use binary::{BinaryOperator, BinaryOutcome, binary_op};
