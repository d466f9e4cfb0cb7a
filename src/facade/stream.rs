//! The chainable stream facade.
//!
//! [`Stream`] wraps a [`LazyPair`]. Structural operations stay lazy, so they
//! can be chained on infinite streams; [`Stream::take`] turns the first few
//! elements into an eager [`List`].
//!
//! ```rust
//! use radiance::compose::Apply;
//! use radiance::facade::{Stream, stream};
//!
//! let negative_evens = Stream::range_from(1)
//!     .map(|x: &i64| -x)
//!     .filter(|x: &i64| x % 2 == 0)
//!     .take(3);
//! assert_eq!(negative_evens.to_vec(), vec![-2, -4, -6]);
//!
//! let first_two = stream::curried::take().apply((2,));
//! assert_eq!(first_two.apply((Stream::range(100, 200),)).to_vec(), vec![100, 101]);
//! ```

use std::fmt;

use crate::persistent::LazyPair;
use crate::persistent::lazy_pair;

use super::list::List;

/// A lazily evaluated, possibly infinite, sequence.
pub struct Stream<T> {
    pair: LazyPair<T>,
}

impl<T> Stream<T> {
    /// Creates an empty stream.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pair: LazyPair::Empty,
        }
    }

    /// Wraps an existing [`LazyPair`].
    #[inline]
    pub const fn from_lazy_pair(pair: LazyPair<T>) -> Self {
        Self { pair }
    }

    /// Creates a fully evaluated stream from a vector.
    #[inline]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_lazy_pair(lazy_pair::from_vec(elements))
    }

    /// Returns the wrapped [`LazyPair`].
    #[inline]
    pub const fn pair_context(&self) -> &LazyPair<T> {
        &self.pair
    }

    /// Returns whether the stream is empty. Computes a pending first cell but
    /// never forces a tail.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pair.is_empty()
    }

    /// Returns the first element. Computes a pending first cell but never
    /// forces a tail.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.pair.head()
    }

    /// Returns the stream after its first element, forcing one tail.
    pub fn tail(&self) -> Option<Self> {
        self.pair.tail().map(Self::from_lazy_pair)
    }

    /// Left fold. The stream must be finite.
    pub fn foldl<B, F>(&self, function: F, initial: B) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        lazy_pair::foldl(function, initial, &self.pair)
    }

    /// Right fold. The stream must be finite.
    pub fn foldr<B, F>(&self, function: F, initial: B) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        lazy_pair::foldr(function, initial, &self.pair)
    }

    /// Calls `function` on every element and returns the stream unchanged.
    /// The stream must be finite.
    pub fn for_each<F>(&self, function: F) -> Self
    where
        F: FnMut(&T),
    {
        Self::from_lazy_pair(lazy_pair::for_each(function, &self.pair))
    }

    /// Emits every element as a `tracing` event on the `radiance::print`
    /// target. The stream must be finite.
    pub fn print(&self) -> Self
    where
        T: fmt::Debug,
    {
        self.for_each(|element| tracing::info!(target: "radiance::print", element = ?element))
    }

    /// Number of elements. The stream must be finite.
    pub fn len(&self) -> usize {
        lazy_pair::length(&self.pair)
    }
}

impl<T: 'static> Stream<T> {
    /// Lazily applies `function` to every element.
    pub fn map<U, F>(&self, function: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        Stream::from_lazy_pair(lazy_pair::map(function, &self.pair))
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Converts a list into a stream without copying it up front.
    pub fn from_list(list: &List<T>) -> Self {
        Self::from_lazy_pair(lazy_pair::from_pair(list.pair_context()))
    }

    /// The infinite stream `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::from_lazy_pair(lazy_pair::iterate(seed, step))
    }

    /// The infinite stream repeating `value`.
    pub fn repeat(value: T) -> Self {
        Self::from_lazy_pair(lazy_pair::repeat(value))
    }

    /// Lazily keeps the elements satisfying `predicate`.
    ///
    /// Returns without inspecting the source. The search for the first match
    /// runs when the result is first inspected.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_lazy_pair(lazy_pair::filter(predicate, &self.pair))
    }

    /// Lazily keeps the longest prefix satisfying `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_lazy_pair(lazy_pair::take_while(predicate, &self.pair))
    }

    /// The first `count` elements as an eager list.
    pub fn take(&self, count: usize) -> List<T> {
        List::from_pair(lazy_pair::take(count, &self.pair))
    }

    /// Lazily pairs elements by position.
    pub fn zip<U: Clone + 'static>(&self, other: &Stream<U>) -> Stream<(T, U)> {
        Stream::from_lazy_pair(lazy_pair::zip(&self.pair, &other.pair))
    }

    /// Lazily appends `other` after this stream.
    pub fn concat(&self, other: &Self) -> Self {
        Self::from_lazy_pair(lazy_pair::concat(&self.pair, &other.pair))
    }

    /// Lazily maps each element to a stream and flattens the results.
    ///
    /// Returns without inspecting the source, like [`filter`](Self::filter).
    pub fn chain<U, F>(&self, function: F) -> Stream<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> Stream<U> + 'static,
    {
        Stream::from_lazy_pair(lazy_pair::chain(&self.pair, move |element| {
            function(element).pair
        }))
    }

    /// The element at `index`, forcing only the cells before it.
    pub fn nth(&self, index: usize) -> Option<T> {
        lazy_pair::nth(index, &self.pair)
    }

    /// Collects the elements into a vector. The stream must be finite.
    pub fn to_vec(&self) -> Vec<T> {
        lazy_pair::to_vec(&self.pair)
    }

    /// Collects the elements into a list. The stream must be finite.
    pub fn to_list(&self) -> List<T> {
        List::from_pair(lazy_pair::to_pair(&self.pair))
    }

    /// Reverses a finite stream.
    pub fn reverse(&self) -> Self {
        Self::from_lazy_pair(lazy_pair::reverse(&self.pair))
    }
}

impl Stream<i64> {
    /// The integers from `start` towards `end`, excluding `end`. Counts down
    /// when `start > end`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::from_lazy_pair(lazy_pair::range(start, end))
    }

    /// The ascending integers starting at `start`, ending after `i64::MAX`.
    pub fn range_from(start: i64) -> Self {
        Self::from_lazy_pair(lazy_pair::range_from(start))
    }
}

// =============================================================================
// Pointwise Functions
// =============================================================================

/// Pointwise form of [`Stream::map`].
pub fn map<T, U, F>(function: F, stream: &Stream<T>) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> U + 'static,
{
    stream.map(function)
}

/// Pointwise form of [`Stream::filter`].
pub fn filter<T, P>(predicate: P, stream: &Stream<T>) -> Stream<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    stream.filter(predicate)
}

/// Pointwise form of [`Stream::take_while`].
pub fn take_while<T, P>(predicate: P, stream: &Stream<T>) -> Stream<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    stream.take_while(predicate)
}

/// Pointwise form of [`Stream::take`].
pub fn take<T: Clone + 'static>(count: usize, stream: &Stream<T>) -> List<T> {
    stream.take(count)
}

/// Pointwise form of [`Stream::zip`].
pub fn zip<T, U>(first: &Stream<T>, second: &Stream<U>) -> Stream<(T, U)>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    first.zip(second)
}

/// Pointwise form of [`Stream::concat`].
pub fn concat<T: Clone + 'static>(first: &Stream<T>, second: &Stream<T>) -> Stream<T> {
    first.concat(second)
}

/// Pointwise form of [`Stream::chain`].
pub fn chain<T, U, F>(stream: &Stream<T>, function: F) -> Stream<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: Fn(&T) -> Stream<U> + 'static,
{
    stream.chain(function)
}

/// Pointwise form of [`Stream::foldl`].
pub fn foldl<T, B, F>(function: F, initial: B, stream: &Stream<T>) -> B
where
    F: FnMut(B, &T) -> B,
{
    stream.foldl(function, initial)
}

/// Pointwise form of [`Stream::foldr`].
pub fn foldr<T, B, F>(function: F, initial: B, stream: &Stream<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    stream.foldr(function, initial)
}

/// Pointwise form of [`Stream::for_each`].
pub fn for_each<T, F>(function: F, stream: &Stream<T>) -> Stream<T>
where
    F: FnMut(&T),
{
    stream.for_each(function)
}

/// Pointwise form of [`Stream::print`].
pub fn print<T: fmt::Debug>(stream: &Stream<T>) -> Stream<T> {
    stream.print()
}

/// Pointwise form of [`Stream::to_vec`].
pub fn to_vec<T: Clone + 'static>(stream: &Stream<T>) -> Vec<T> {
    stream.to_vec()
}

/// Pointwise form of [`Stream::to_list`].
pub fn to_list<T: Clone + 'static>(stream: &Stream<T>) -> List<T> {
    stream.to_list()
}

/// Pointwise form of [`Stream::from_list`].
pub fn from_list<T: Clone + 'static>(list: &List<T>) -> Stream<T> {
    Stream::from_list(list)
}

/// Pointwise form of [`Stream::pair_context`].
pub const fn pair_context<T>(stream: &Stream<T>) -> &LazyPair<T> {
    stream.pair_context()
}

/// Point-free forms of the stream operations.
///
/// ```rust
/// use radiance::compose::Apply;
/// use radiance::facade::{Stream, stream::curried};
///
/// let evens = curried::filter().apply((|x: &i64| x % 2 == 0,));
/// let first_three = curried::take().apply((3,));
///
/// let result = first_three.apply((evens.apply((Stream::range_from(1),)),));
/// assert_eq!(result.to_vec(), vec![2, 4, 6]);
/// ```
pub mod curried {
    use crate::compose::{Curried, curry};
    use crate::facade::List;

    use super::Stream;

    type Binary<A, B, R> = Curried<fn(A, B) -> R, fn(A, B) -> R>;
    type Ternary<A, B, C, R> = Curried<fn(A, B, C) -> R, fn(A, B, C) -> R>;

    /// Curried [`map`](super::map).
    pub fn map<T, U, F>() -> Binary<F, Stream<T>, Stream<U>>
    where
        T: 'static,
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let pointwise: fn(F, Stream<T>) -> Stream<U> =
            |function, stream| super::map(function, &stream);
        curry(pointwise)
    }

    /// Curried [`filter`](super::filter).
    pub fn filter<T, P>() -> Binary<P, Stream<T>, Stream<T>>
    where
        T: Clone + 'static,
        P: Fn(&T) -> bool + 'static,
    {
        let pointwise: fn(P, Stream<T>) -> Stream<T> =
            |predicate, stream| super::filter(predicate, &stream);
        curry(pointwise)
    }

    /// Curried [`take_while`](super::take_while).
    pub fn take_while<T, P>() -> Binary<P, Stream<T>, Stream<T>>
    where
        T: Clone + 'static,
        P: Fn(&T) -> bool + 'static,
    {
        let pointwise: fn(P, Stream<T>) -> Stream<T> =
            |predicate, stream| super::take_while(predicate, &stream);
        curry(pointwise)
    }

    /// Curried [`take`](super::take).
    pub fn take<T: Clone + 'static>() -> Binary<usize, Stream<T>, List<T>> {
        let pointwise: fn(usize, Stream<T>) -> List<T> = |count, stream| super::take(count, &stream);
        curry(pointwise)
    }

    /// Curried [`zip`](super::zip).
    pub fn zip<T, U>() -> Binary<Stream<T>, Stream<U>, Stream<(T, U)>>
    where
        T: Clone + 'static,
        U: Clone + 'static,
    {
        let pointwise: fn(Stream<T>, Stream<U>) -> Stream<(T, U)> =
            |first, second| super::zip(&first, &second);
        curry(pointwise)
    }

    /// Curried [`concat`](super::concat).
    pub fn concat<T: Clone + 'static>() -> Binary<Stream<T>, Stream<T>, Stream<T>> {
        let pointwise: fn(Stream<T>, Stream<T>) -> Stream<T> =
            |first, second| super::concat(&first, &second);
        curry(pointwise)
    }

    /// Curried [`chain`](super::chain).
    pub fn chain<T, U, F>() -> Binary<Stream<T>, F, Stream<U>>
    where
        T: Clone + 'static,
        U: Clone + 'static,
        F: Fn(&T) -> Stream<U> + 'static,
    {
        let pointwise: fn(Stream<T>, F) -> Stream<U> =
            |stream, function| super::chain(&stream, function);
        curry(pointwise)
    }

    /// Curried [`foldl`](super::foldl).
    pub fn foldl<T, B, F>() -> Ternary<F, B, Stream<T>, B>
    where
        F: FnMut(B, &T) -> B,
    {
        let pointwise: fn(F, B, Stream<T>) -> B =
            |function, initial, stream| super::foldl(function, initial, &stream);
        curry(pointwise)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pair: self.pair.clone(),
        }
    }
}

impl<T> Default for Stream<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LazyPair<T>> for Stream<T> {
    fn from(pair: LazyPair<T>) -> Self {
        Self::from_lazy_pair(pair)
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = lazy_pair::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pair.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Stream").field(&self.pair).finish()
    }
}
