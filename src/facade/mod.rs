//! Chainable list and stream facades.
//!
//! - [`List`]: an eager list with method-call, pointwise, and curried
//!   interfaces, built with the [`list!`](crate::list) macro
//! - [`Stream`]: a lazy, possibly infinite, sequence with the same three
//!   interfaces
//!
//! The [`list`] and [`stream`] modules hold the pointwise free functions and
//! their `curried` counterparts.
//!
//! # Examples
//!
//! ```rust
//! use radiance::list;
//!
//! let doubled = list![1, 2, 3].map(|x: &i32| x * 2);
//! assert_eq!(doubled.to_string(), "cons(2, cons(4, cons(6, empty)))");
//!
//! let evens = doubled.to_stream().filter(|x: &i32| x % 4 == 0).to_list();
//! assert_eq!(evens.to_vec(), vec![4]);
//! ```

pub mod list;
pub mod stream;

pub use list::List;
pub use stream::Stream;
