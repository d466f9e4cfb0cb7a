//! The chainable list facade.
//!
//! [`List`] wraps an eager [`Pair`] and exposes its algebra in three
//! interchangeable call styles:
//!
//! ```rust
//! use radiance::compose::Apply;
//! use radiance::facade::list;
//! use radiance::list;
//!
//! let numbers = list![1, 2, 3, 4];
//!
//! // Method call
//! let by_method = numbers.map(|x: &i32| x + 5);
//!
//! // Pointwise call
//! let by_function = list::map(|x: &i32| x + 5, &numbers);
//!
//! // Curried call
//! let by_curry = list::curried::map()
//!     .apply((|x: &i32| x + 5,))
//!     .apply((numbers.clone(),));
//!
//! assert_eq!(by_method.to_vec(), vec![6, 7, 8, 9]);
//! assert_eq!(by_method, by_function);
//! assert_eq!(by_method, by_curry);
//! ```
//!
//! All three route to the same functions in [`crate::persistent::pair`], so
//! their behavior, edge cases included, is identical.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::persistent::pair::{self, Pair};

use super::stream::Stream;

/// An immutable list with a chainable interface.
///
/// Structural operations return a new `List`; terminal operations return a
/// plain value. Cloning is O(1).
///
/// # Construction
///
/// ```rust
/// use radiance::facade::List;
/// use radiance::list;
///
/// let empty: List<i32> = list![];
/// let single = list![5];
/// let positional = list![1, 2, 3];
/// let from_array = list![@array vec![1, 2, 3]];
///
/// assert!(empty.is_empty());
/// assert_eq!(single.to_vec(), vec![5]);
/// assert_eq!(positional, from_array);
/// assert_eq!(positional, List::from(vec![1, 2, 3]));
/// ```
pub struct List<T> {
    pair: Pair<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { pair: Pair::Empty }
    }

    /// Wraps an existing [`Pair`].
    #[inline]
    pub const fn from_pair(pair: Pair<T>) -> Self {
        Self { pair }
    }

    /// Creates a list from a vector, keeping its order.
    #[inline]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_pair(pair::from_vec(elements))
    }

    /// Creates a one-element list. The element is never unwrapped, even if
    /// it is itself a collection.
    #[inline]
    pub fn of(element: T) -> Self {
        Self::from_pair(pair::prepend(element, Pair::Empty))
    }

    /// Returns the wrapped [`Pair`].
    #[inline]
    pub const fn pair_context(&self) -> &Pair<T> {
        &self.pair
    }

    /// Unwraps the underlying [`Pair`].
    #[inline]
    pub fn into_pair(self) -> Pair<T> {
        self.pair
    }

    /// Returns the number of elements. O(n).
    #[inline]
    pub fn len(&self) -> usize {
        pair::length(&self.pair)
    }

    /// Returns whether the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pair.is_empty()
    }

    /// Returns the first element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        pair::head(&self.pair)
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub const fn iter(&self) -> pair::Iter<'_, T> {
        self.pair.iter()
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        List::from_pair(pair::map(function, &self.pair))
    }

    /// Left fold.
    ///
    /// ```rust
    /// use radiance::list;
    ///
    /// let sum = list![1, 2, 3].foldl(|acc, x| acc + x, 0);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn foldl<B, F>(&self, function: F, initial: B) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        pair::foldl(function, initial, &self.pair)
    }

    /// Right fold.
    pub fn foldr<B, F>(&self, function: F, initial: B) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        pair::foldr(function, initial, &self.pair)
    }

    /// Calls `function` on every element, in order, and returns the list
    /// unchanged.
    pub fn for_each<F>(&self, function: F) -> Self
    where
        F: FnMut(&T),
    {
        Self::from_pair(pair::for_each(function, &self.pair))
    }

    /// Emits every element as a `tracing` event on the `radiance::print`
    /// target and returns the list unchanged.
    pub fn print(&self) -> Self
    where
        T: fmt::Debug,
    {
        self.for_each(|element| tracing::info!(target: "radiance::print", element = ?element))
    }
}

impl<T: Clone> List<T> {
    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_pair(pair::filter(predicate, &self.pair))
    }

    /// Collects the elements into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        pair::to_vec(&self.pair)
    }

    /// Converts the list into a lazy [`Stream`].
    pub fn to_stream(&self) -> Stream<T>
    where
        T: 'static,
    {
        Stream::from_list(self)
    }

    /// Appends `other` after this list. The cells of `other` are shared.
    pub fn concat(&self, other: &Self) -> Self {
        Self::from_pair(pair::concat(&self.pair, &other.pair))
    }

    /// Appends every list in `lists` after this one.
    ///
    /// ```rust
    /// use radiance::list;
    ///
    /// let joined = list![1].mconcat(&[list![2, 3], list![], list![4]]);
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn mconcat(&self, lists: &[Self]) -> Self {
        self.concat(&mconcat(lists))
    }

    /// Keeps the longest prefix satisfying `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_pair(pair::take_while(predicate, &self.pair))
    }

    /// Pairs elements by position, truncating to the shorter list.
    pub fn zip<U: Clone>(&self, other: &List<U>) -> List<(T, U)> {
        List::from_pair(pair::zip(&self.pair, &other.pair))
    }

    /// Reverses the list.
    pub fn reverse(&self) -> Self {
        Self::from_pair(pair::reverse(&self.pair))
    }

    /// Maps each element to a list and concatenates the results.
    ///
    /// ```rust
    /// use radiance::list;
    ///
    /// let expanded = list![1, 2].chain(|x: &i32| list![*x, *x * 100]);
    /// assert_eq!(expanded.to_vec(), vec![1, 100, 2, 200]);
    /// ```
    pub fn chain<U, F>(&self, mut function: F) -> List<U>
    where
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        List::from_pair(pair::chain(&self.pair, |element| {
            function(element).into_pair()
        }))
    }

    /// The first `count` elements.
    pub fn take(&self, count: usize) -> Self {
        Self::from_pair(pair::take(count, &self.pair))
    }
}

impl<T: Clone> List<List<T>> {
    /// Flattens a list of lists by folding `concat` from the right.
    pub fn join(&self) -> List<T> {
        List::from_pair(pair::foldr(
            |list: &List<T>, joined| pair::concat(&list.pair, &joined),
            Pair::Empty,
            &self.pair,
        ))
    }
}

// =============================================================================
// Pointwise Functions
// =============================================================================

/// Pointwise form of [`List::map`].
pub fn map<T, U, F>(function: F, list: &List<T>) -> List<U>
where
    F: FnMut(&T) -> U,
{
    list.map(function)
}

/// Pointwise form of [`List::filter`].
pub fn filter<T, P>(predicate: P, list: &List<T>) -> List<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    list.filter(predicate)
}

/// Pointwise form of [`List::for_each`].
pub fn for_each<T, F>(function: F, list: &List<T>) -> List<T>
where
    F: FnMut(&T),
{
    list.for_each(function)
}

/// Pointwise form of [`List::print`].
pub fn print<T: fmt::Debug>(list: &List<T>) -> List<T> {
    list.print()
}

/// Pointwise form of [`List::foldl`].
pub fn foldl<T, B, F>(function: F, initial: B, list: &List<T>) -> B
where
    F: FnMut(B, &T) -> B,
{
    list.foldl(function, initial)
}

/// Pointwise form of [`List::foldr`].
pub fn foldr<T, B, F>(function: F, initial: B, list: &List<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    list.foldr(function, initial)
}

/// Pointwise form of [`List::to_vec`].
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.to_vec()
}

/// Pointwise form of [`List::to_stream`].
pub fn to_stream<T: Clone + 'static>(list: &List<T>) -> Stream<T> {
    list.to_stream()
}

/// Pointwise form of [`List::concat`].
pub fn concat<T: Clone>(first: &List<T>, second: &List<T>) -> List<T> {
    first.concat(second)
}

/// Concatenates a sequence of lists, right-associatively, starting from the
/// empty list.
pub fn mconcat<T: Clone>(lists: &[List<T>]) -> List<T> {
    List::from_pair(
        lists
            .iter()
            .rev()
            .fold(Pair::Empty, |joined, list| pair::concat(&list.pair, &joined)),
    )
}

/// Pointwise form of [`List::take_while`].
pub fn take_while<T, P>(predicate: P, list: &List<T>) -> List<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    list.take_while(predicate)
}

/// Pointwise form of [`List::zip`].
pub fn zip<T: Clone, U: Clone>(first: &List<T>, second: &List<U>) -> List<(T, U)> {
    first.zip(second)
}

/// Pointwise form of [`List::reverse`].
pub fn reverse<T: Clone>(list: &List<T>) -> List<T> {
    list.reverse()
}

/// Pointwise form of [`List::join`].
pub fn join<T: Clone>(lists: &List<List<T>>) -> List<T> {
    lists.join()
}

/// Pointwise form of [`List::chain`].
pub fn chain<T, U, F>(list: &List<T>, function: F) -> List<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T) -> List<U>,
{
    list.chain(function)
}

/// Pointwise form of [`List::pair_context`].
pub const fn pair_context<T>(list: &List<T>) -> &Pair<T> {
    list.pair_context()
}

/// Point-free forms of the list operations.
///
/// Each function returns a [`Curried`](crate::compose::Curried) record over
/// the corresponding pointwise function, taking its arguments by value.
///
/// ```rust
/// use radiance::compose::Apply;
/// use radiance::facade::list::curried;
/// use radiance::list;
///
/// let keep_large = curried::filter().apply((|x: &i32| *x > 2,));
/// assert_eq!(keep_large.apply((list![1, 3, 5],)).to_vec(), vec![3, 5]);
/// assert_eq!(keep_large.apply((list![4, 0],)).to_vec(), vec![4]);
///
/// let sum = curried::foldl().apply((|acc: i32, x: &i32| acc + x, 0));
/// assert_eq!(sum.apply((list![1, 2, 3],)), 6);
/// ```
pub mod curried {
    use crate::compose::{Curried, curry};

    use super::List;

    type Unary<A, R> = Curried<fn(A) -> R, fn(A) -> R>;
    type Binary<A, B, R> = Curried<fn(A, B) -> R, fn(A, B) -> R>;
    type Ternary<A, B, C, R> = Curried<fn(A, B, C) -> R, fn(A, B, C) -> R>;

    /// Curried [`map`](super::map).
    pub fn map<T, U, F>() -> Binary<F, List<T>, List<U>>
    where
        F: FnMut(&T) -> U,
    {
        let pointwise: fn(F, List<T>) -> List<U> = |function, list| super::map(function, &list);
        curry(pointwise)
    }

    /// Curried [`filter`](super::filter).
    pub fn filter<T, P>() -> Binary<P, List<T>, List<T>>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let pointwise: fn(P, List<T>) -> List<T> = |predicate, list| super::filter(predicate, &list);
        curry(pointwise)
    }

    /// Curried [`for_each`](super::for_each).
    pub fn for_each<T, F>() -> Binary<F, List<T>, List<T>>
    where
        F: FnMut(&T),
    {
        let pointwise: fn(F, List<T>) -> List<T> = |function, list| super::for_each(function, &list);
        curry(pointwise)
    }

    /// Curried [`foldl`](super::foldl).
    pub fn foldl<T, B, F>() -> Ternary<F, B, List<T>, B>
    where
        F: FnMut(B, &T) -> B,
    {
        let pointwise: fn(F, B, List<T>) -> B =
            |function, initial, list| super::foldl(function, initial, &list);
        curry(pointwise)
    }

    /// Curried [`foldr`](super::foldr).
    pub fn foldr<T, B, F>() -> Ternary<F, B, List<T>, B>
    where
        F: FnMut(&T, B) -> B,
    {
        let pointwise: fn(F, B, List<T>) -> B =
            |function, initial, list| super::foldr(function, initial, &list);
        curry(pointwise)
    }

    /// Curried [`concat`](super::concat).
    pub fn concat<T: Clone>() -> Binary<List<T>, List<T>, List<T>> {
        let pointwise: fn(List<T>, List<T>) -> List<T> =
            |first, second| super::concat(&first, &second);
        curry(pointwise)
    }

    /// Curried [`take_while`](super::take_while).
    pub fn take_while<T, P>() -> Binary<P, List<T>, List<T>>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let pointwise: fn(P, List<T>) -> List<T> =
            |predicate, list| super::take_while(predicate, &list);
        curry(pointwise)
    }

    /// Curried [`zip`](super::zip).
    pub fn zip<T: Clone, U: Clone>() -> Binary<List<T>, List<U>, List<(T, U)>> {
        let pointwise: fn(List<T>, List<U>) -> List<(T, U)> =
            |first, second| super::zip(&first, &second);
        curry(pointwise)
    }

    /// Curried [`chain`](super::chain).
    pub fn chain<T, U, F>() -> Binary<List<T>, F, List<U>>
    where
        T: Clone,
        U: Clone,
        F: FnMut(&T) -> List<U>,
    {
        let pointwise: fn(List<T>, F) -> List<U> = |list, function| super::chain(&list, function);
        curry(pointwise)
    }

    /// Curried [`reverse`](super::reverse).
    pub fn reverse<T: Clone>() -> Unary<List<T>, List<T>> {
        let pointwise: fn(List<T>) -> List<T> = |list| super::reverse(&list);
        curry(pointwise)
    }

    /// Curried [`join`](super::join).
    pub fn join<T: Clone>() -> Unary<List<List<T>>, List<T>> {
        let pointwise: fn(List<List<T>>) -> List<T> = |lists| super::join(&lists);
        curry(pointwise)
    }

    /// Curried [`mconcat`](super::mconcat).
    pub fn mconcat<T: Clone>() -> Unary<Vec<List<T>>, List<T>> {
        let pointwise: fn(Vec<List<T>>) -> List<T> = |lists| super::mconcat(&lists);
        curry(pointwise)
    }
}

/// Builds a [`List`].
///
/// - `list![]` is the empty list.
/// - `list![[x, y, ...]]` and `list![[x; n]]` unwrap a single array literal
///   into its elements.
/// - `list![x]` is a one-element list for any other single argument.
/// - `list![x, y, ...]` lists the arguments in order.
/// - `list![@array v]` unwraps a vector, array, or slice expression.
///
/// ```rust
/// use radiance::list;
///
/// let literal = list![[1, 2, 3]];
/// assert_eq!(literal.len(), 3);
///
/// let nested = list![vec![1, 2]];
/// assert_eq!(nested.len(), 1);
///
/// let flat = list![@array vec![1, 2]];
/// assert_eq!(flat.len(), 2);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::facade::List::new()
    };
    (@array $elements:expr) => {
        $crate::facade::List::from_vec(::std::vec::Vec::from($elements))
    };
    ([$($element:expr),* $(,)?] $(,)?) => {
        $crate::facade::List::from_vec(::std::vec![$($element),*])
    };
    ([$element:expr; $count:expr] $(,)?) => {
        $crate::facade::List::from_vec(::std::vec![$element; $count])
    };
    ($element:expr $(,)?) => {
        $crate::facade::List::of($element)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::facade::List::from_vec(::std::vec![$($element),+])
    };
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pair: self.pair.clone(),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_pair(pair::from_array(elements))
    }
}

impl<T> From<Pair<T>> for List<T> {
    fn from(pair: Pair<T>) -> Self {
        Self::from_pair(pair)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_pair(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = pair::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pair.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = pair::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pair == other.pair
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("List").field(&self.pair).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pair, formatter)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.pair, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Pair<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Apply;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn test_macro_forms() {
        let empty: List<i32> = list![];
        assert!(empty.is_empty());
        assert_eq!(list![7].to_vec(), vec![7]);
        assert_eq!(list![1, 2, 3].to_vec(), vec![1, 2, 3]);
        assert_eq!(list![@array [4, 5]].to_vec(), vec![4, 5]);
    }

    #[rstest]
    fn test_single_collection_argument_is_not_unwrapped() {
        let nested = list![vec![1, 2, 3]];
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.head(), Some(&vec![1, 2, 3]));
    }

    #[rstest]
    fn test_display_matches_cons_rendering() {
        assert_eq!(list![1, 2, 3, 4].to_string(), "cons(1, cons(2, cons(3, cons(4, empty))))");
        assert_eq!(List::<i32>::new().to_string(), "empty");
    }

    #[rstest]
    fn test_map_call_styles_agree() {
        let numbers = list![1, 2, 3, 4];
        let expected = vec![6, 7, 8, 9];

        assert_eq!(numbers.map(|x: &i32| x + 5).to_vec(), expected);
        assert_eq!(map(|x: &i32| x + 5, &numbers).to_vec(), expected);
        assert_eq!(
            curried::map()
                .apply((|x: &i32| x + 5,))
                .apply((numbers.clone(),))
                .to_vec(),
            expected
        );
        assert_eq!(
            curried::map().apply((|x: &i32| x + 5, numbers)).to_vec(),
            expected
        );
    }

    #[rstest]
    fn test_zip_call_styles_agree() {
        let left = list![1, 2, 3, 4];
        let right = list![5, 6, 7, 8];
        let expected = vec![(1, 5), (2, 6), (3, 7), (4, 8)];

        assert_eq!(left.zip(&right).to_vec(), expected);
        assert_eq!(zip(&left, &right).to_vec(), expected);
        assert_eq!(
            curried::zip().apply((left,)).apply((right,)).to_vec(),
            expected
        );
    }

    #[rstest]
    fn test_mconcat_and_join() {
        let lists = [list![1, 2], List::new(), list![3]];
        assert_eq!(mconcat(&lists).to_vec(), vec![1, 2, 3]);
        assert_eq!(list![0].mconcat(&lists).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(
            curried::mconcat().apply((lists.to_vec(),)).to_vec(),
            vec![1, 2, 3]
        );

        let nested = list![list![1], list![2, 3], List::new()];
        assert_eq!(nested.join().to_vec(), vec![1, 2, 3]);
        assert_eq!(join(&nested), nested.join());
    }

    #[rstest]
    fn test_for_each_returns_same_list() {
        let numbers = list![3, 1, 2];
        let seen = RefCell::new(Vec::new());
        let returned = numbers.for_each(|x: &i32| seen.borrow_mut().push(*x));
        assert_eq!(seen.into_inner(), vec![3, 1, 2]);
        assert_eq!(returned, numbers);
    }

    #[rstest]
    fn test_structural_operations() {
        let numbers = list![1, 2, 3, 4, 5];
        assert_eq!(numbers.filter(|x: &i32| x % 2 == 1).to_vec(), vec![1, 3, 5]);
        assert_eq!(numbers.take_while(|x: &i32| *x < 3).to_vec(), vec![1, 2]);
        assert_eq!(numbers.reverse().to_vec(), vec![5, 4, 3, 2, 1]);
        assert_eq!(numbers.take(2).to_vec(), vec![1, 2]);
        assert_eq!(numbers.concat(&list![6]).len(), 6);
        assert_eq!(numbers.foldr(|x, acc: Vec<i32>| [vec![*x], acc].concat(), Vec::new()), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_conversions() {
        let from_slice = List::from(&[1, 2][..]);
        let from_pair = List::from(pair::from_vec(vec![1, 2]));
        let collected: List<i32> = (1..=2).collect();
        assert_eq!(from_slice, from_pair);
        assert_eq!(from_pair, collected);
        assert_eq!(collected.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", list![1, 2]), "List([1, 2])");
    }
}
