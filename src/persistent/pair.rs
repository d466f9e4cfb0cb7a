//! Eager cons-cell lists.
//!
//! A [`Pair`] is either [`Pair::Empty`] or a [`Pair::Cons`] cell holding a
//! head element and the rest of the list. Cells are shared through `Rc`, so
//! prepending is O(1) and never copies the tail.
//!
//! The algebra over pairs is exposed as free functions taking the function
//! argument first, so that they compose with [`curry`](crate::compose::curry)
//! and read like their mathematical definitions:
//!
//! ```rust
//! use radiance::persistent::pair;
//!
//! let numbers = pair::from_vec(vec![1, 2, 3, 4]);
//! let evens = pair::filter(|x: &i32| x % 2 == 0, &numbers);
//! let doubled = pair::map(|x: &i32| x * 2, &evens);
//!
//! assert_eq!(pair::to_vec(&doubled), vec![4, 8]);
//! assert_eq!(pair::foldl(|sum, x| sum + x, 0, &numbers), 10);
//! assert_eq!(numbers.to_string(), "cons(1, cons(2, cons(3, cons(4, empty))))");
//! ```
//!
//! Every operation walks the list with a loop rather than native recursion,
//! and dropping a list releases its cells iteratively, so lists with millions
//! of elements are handled in constant stack space.
//!
//! # Structural Sharing
//!
//! ```text
//! p1:                1 -> 2 -> nil
//! p2:                          3 -> 4 -> nil
//! concat(p1, p2):    1'-> 2'-> [3 -> 4 -> nil]   // shares p2
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

/// A cons cell.
pub struct Node<T> {
    head: T,
    tail: Pair<T>,
}

/// An immutable singly-linked list built from cons cells.
///
/// Cloning a `Pair` is O(1): it shares every cell with the original.
pub enum Pair<T> {
    /// The empty list.
    Empty,
    /// A head element followed by the rest of the list.
    Cons(Rc<Node<T>>),
}

impl<T> Pair<T> {
    /// Returns whether this is the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Cons(node) => Some(&node.head),
        }
    }

    /// Returns the list without its first element, sharing its cells.
    #[inline]
    pub fn tail(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::Cons(node) => Some(&node.tail),
        }
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }

    /// Returns the number of elements. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Clone for Pair<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(node) => Self::Cons(Rc::clone(node)),
        }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.tail);
        while let Pair::Cons(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut unique) => std::mem::take(&mut unique.tail),
                Err(_) => break,
            };
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Returns the empty list.
#[inline]
pub const fn empty<T>() -> Pair<T> {
    Pair::Empty
}

/// Prepends `head` to `tail`. O(1); `tail` is shared, not copied.
#[inline]
pub fn prepend<T>(head: T, tail: Pair<T>) -> Pair<T> {
    Pair::Cons(Rc::new(Node { head, tail }))
}

/// Builds a list holding the elements of `elements` in order.
pub fn from_vec<T>(mut elements: Vec<T>) -> Pair<T> {
    let mut result = Pair::Empty;
    while let Some(element) = elements.pop() {
        result = prepend(element, result);
    }
    result
}

/// Builds a list from a slice, cloning each element.
pub fn from_array<T: Clone>(elements: &[T]) -> Pair<T> {
    elements
        .iter()
        .rev()
        .fold(Pair::Empty, |tail, element| prepend(element.clone(), tail))
}

/// Collects the elements into a vector, in order.
pub fn to_vec<T: Clone>(pair: &Pair<T>) -> Vec<T> {
    pair.iter().cloned().collect()
}

// =============================================================================
// Algebra
// =============================================================================

/// Applies `function` to every element. Length and order are preserved.
pub fn map<T, U, F>(function: F, pair: &Pair<T>) -> Pair<U>
where
    F: FnMut(&T) -> U,
{
    from_vec(pair.iter().map(function).collect())
}

/// Keeps the elements satisfying `predicate`, in order.
pub fn filter<T, P>(mut predicate: P, pair: &Pair<T>) -> Pair<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    from_vec(
        pair.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect(),
    )
}

/// Left fold: `foldl(f, z, [a, b, c]) = f(f(f(z, a), b), c)`.
pub fn foldl<T, B, F>(function: F, initial: B, pair: &Pair<T>) -> B
where
    F: FnMut(B, &T) -> B,
{
    pair.iter().fold(initial, function)
}

/// Right fold: `foldr(f, z, [a, b, c]) = f(a, f(b, f(c, z)))`.
///
/// Element references are buffered first and combined from the tail end.
pub fn foldr<T, B, F>(mut function: F, initial: B, pair: &Pair<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    let elements: Vec<&T> = pair.iter().collect();
    elements
        .into_iter()
        .rev()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Appends `second` to `first`. The cells of `second` are shared.
pub fn concat<T: Clone>(first: &Pair<T>, second: &Pair<T>) -> Pair<T> {
    if first.is_empty() {
        return second.clone();
    }
    let mut elements: Vec<&T> = first.iter().collect();
    let mut result = second.clone();
    while let Some(element) = elements.pop() {
        result = prepend(element.clone(), result);
    }
    result
}

/// Reverses the list with a single left fold over `prepend`.
pub fn reverse<T: Clone>(pair: &Pair<T>) -> Pair<T> {
    foldl(
        |reversed, element: &T| prepend(element.clone(), reversed),
        Pair::Empty,
        pair,
    )
}

/// Pairs elements by position, stopping at the end of the shorter list.
pub fn zip<T, U>(first: &Pair<T>, second: &Pair<U>) -> Pair<(T, U)>
where
    T: Clone,
    U: Clone,
{
    from_vec(
        first
            .iter()
            .zip(second.iter())
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect(),
    )
}

/// The longest prefix whose elements all satisfy `predicate`.
pub fn take_while<T, P>(mut predicate: P, pair: &Pair<T>) -> Pair<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    from_vec(
        pair.iter()
            .take_while(|element| predicate(element))
            .cloned()
            .collect(),
    )
}

/// Monadic bind: maps `function` over the list and flattens the results.
///
/// Equivalent to `join(&map(function, pair))`.
pub fn chain<T, U, F>(pair: &Pair<T>, function: F) -> Pair<U>
where
    U: Clone,
    F: FnMut(&T) -> Pair<U>,
{
    join(&map(function, pair))
}

/// Calls `function` on every element in order and returns the same list.
pub fn for_each<T, F>(mut function: F, pair: &Pair<T>) -> Pair<T>
where
    F: FnMut(&T),
{
    for element in pair {
        function(element);
    }
    pair.clone()
}

/// Flattens a list of lists with a right fold of [`concat`].
pub fn join<T: Clone>(lists: &Pair<Pair<T>>) -> Pair<T> {
    foldr(|list, joined| concat(list, &joined), Pair::Empty, lists)
}

/// Concatenates a sequence of lists, right-associatively.
pub fn mconcat<T: Clone>(lists: &[Pair<T>]) -> Pair<T> {
    lists
        .iter()
        .rev()
        .fold(Pair::Empty, |joined, list| concat(list, &joined))
}

// =============================================================================
// Inspection
// =============================================================================

/// Number of elements.
#[inline]
pub fn length<T>(pair: &Pair<T>) -> usize {
    pair.len()
}

/// The first element, if any.
#[inline]
pub fn head<T>(pair: &Pair<T>) -> Option<&T> {
    pair.head()
}

/// The list after the first element, if any.
#[inline]
pub fn tail<T>(pair: &Pair<T>) -> Option<Pair<T>> {
    pair.tail().cloned()
}

/// Splits the list into its head and tail.
pub fn uncons<T>(pair: &Pair<T>) -> Option<(&T, Pair<T>)> {
    match pair {
        Pair::Empty => None,
        Pair::Cons(node) => Some((&node.head, node.tail.clone())),
    }
}

/// The first `count` elements as a new list.
pub fn take<T: Clone>(count: usize, pair: &Pair<T>) -> Pair<T> {
    from_vec(pair.iter().take(count).cloned().collect())
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`Pair`].
pub struct Iter<'a, T> {
    current: &'a Pair<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Pair::Empty => None,
            Pair::Cons(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

/// An owning iterator over the elements of a [`Pair`].
pub struct IntoIter<T> {
    pair: Pair<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match &self.pair {
            Pair::Empty => return None,
            Pair::Cons(node) => (node.head.clone(), node.tail.clone()),
        };
        self.pair = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Pair<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> FromIterator<T> for Pair<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for Pair<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { pair: self }
    }
}

impl<'a, T> IntoIterator for &'a Pair<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Pair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Pair<T> {}

impl<T: Hash> Hash for Pair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length = 0usize;
        for element in self {
            element.hash(state);
            length += 1;
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Pair<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0usize;
        for element in self {
            write!(formatter, "cons({element}, ")?;
            depth += 1;
        }
        formatter.write_str("empty")?;
        for _ in 0..depth {
            formatter.write_str(")")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Pair<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PairVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PairVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PairVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Pair<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Pair<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PairVisitor::new())
    }
}

static_assertions::assert_not_impl_any!(Pair<i32>: Send, Sync);
