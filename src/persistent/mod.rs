//! Persistent (immutable) cons-cell structures.
//!
//! This module provides the two list representations every higher-level
//! operation is built on:
//!
//! - [`Pair`]: an eager singly-linked list of shared cons cells
//! - [`LazyPair`]: a stream whose tails are memoized deferred computations
//!
//! Their algebras live in the [`pair`] and [`lazy_pair`] modules as free
//! functions, with the function argument first.
//!
//! # Structural Sharing
//!
//! Cells are reference counted. Prepending, taking the tail, and
//! concatenating onto an existing list all reuse cells instead of copying
//! them, and no operation ever mutates a cell after construction.
//!
//! # Examples
//!
//! ## `Pair`
//!
//! ```rust
//! use radiance::persistent::pair;
//!
//! let list = pair::prepend(1, pair::prepend(2, pair::empty()));
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(pair::to_vec(&pair::reverse(&list)), vec![2, 1]);
//! ```
//!
//! ## `LazyPair`
//!
//! ```rust
//! use radiance::persistent::{lazy_pair, pair};
//!
//! let odds = lazy_pair::filter(|x: &i64| x % 2 == 1, &lazy_pair::range_from(0));
//! assert_eq!(pair::to_vec(&lazy_pair::take(3, &odds)), vec![1, 3, 5]);
//! ```

pub mod lazy_pair;
pub mod pair;

pub use lazy_pair::LazyPair;
pub use pair::Pair;
