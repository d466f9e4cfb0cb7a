//! Lazy cons-cell streams.
//!
//! A [`LazyPair`] has the same shape as a [`Pair`], but the tail of each cell
//! is a memoized [`Lazy`] computation. Tails are evaluated the first time they
//! are inspected and cached afterwards, so streams may be infinite and
//! re-traversal is free.
//!
//! Operations fall into four groups:
//!
//! - **Generators** such as [`range`], [`range_from`], [`iterate`] and
//!   [`repeat`] build cells on demand.
//! - **Lazy combinators** ([`map`], [`filter`], [`take_while`], [`zip`],
//!   [`concat`], [`chain`], [`join`]) return a new stream without forcing
//!   any source tail. [`filter`] and [`join`] return a [`LazyPair::Deferred`]
//!   stream, so their search for the first element runs only when the result
//!   is first inspected. Producing a result cell forces the source cells up
//!   to the one that supplies it.
//! - **Trampolined consumers** ([`take`], [`foldl`], [`for_each`],
//!   [`length`], [`nth`], [`to_vec`], [`to_pair`]) walk the stream through
//!   a [`Trampoline`], so they run in constant native stack space.
//! - **Bounded-only consumers** ([`foldr`], [`reverse`]) force the whole
//!   stream and must only be used on finite streams.
//!
//! # Examples
//!
//! ```rust
//! use radiance::persistent::{lazy_pair, pair};
//!
//! let naturals = lazy_pair::range_from(1);
//! let even_squares = lazy_pair::map(
//!     |x: &i64| x * x,
//!     &lazy_pair::filter(|x: &i64| x % 2 == 0, &naturals),
//! );
//!
//! let first_three = lazy_pair::take(3, &even_squares);
//! assert_eq!(pair::to_vec(&first_three), vec![4, 16, 36]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::{Lazy, Trampoline};

use super::pair::{self, Pair};

type Thunk<T> = Box<dyn FnOnce() -> LazyPair<T>>;

/// A stream cell whose tail is evaluated on demand.
pub struct LazyNode<T> {
    head: T,
    tail: Lazy<LazyPair<T>, Thunk<T>>,
}

impl<T> LazyNode<T> {
    /// Forces the tail and resolves its first cell.
    fn forced_tail(&self) -> LazyPair<T> {
        self.tail.force().resolve().clone()
    }
}

/// A possibly infinite stream built from lazily linked cons cells.
///
/// Cloning a `LazyPair` is O(1) and shares every cell, including the
/// memoized tails.
pub enum LazyPair<T> {
    /// The empty stream.
    Empty,
    /// A head element followed by a deferred tail.
    Cons(Rc<LazyNode<T>>),
    /// A stream whose first cell is computed when first inspected.
    Deferred(Rc<Lazy<LazyPair<T>, Thunk<T>>>),
}

impl<T> LazyPair<T> {
    /// Computes a deferred first cell if necessary and returns the stream as
    /// `Empty` or `Cons`.
    pub fn resolve(&self) -> &Self {
        let mut current = self;
        while let Self::Deferred(deferred) = current {
            current = deferred.force();
        }
        current
    }

    /// The resolved stream, if that needs no evaluation.
    fn settled(&self) -> Option<&Self> {
        let mut current = self;
        while let Self::Deferred(deferred) = current {
            current = deferred.get()?;
        }
        Some(current)
    }

    /// Returns whether the first cell is still waiting to be computed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.settled().is_none()
    }

    /// Returns whether this is the empty stream. Computes a deferred first
    /// cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.resolve(), Self::Empty)
    }

    /// Returns a reference to the first element. Computes a deferred first
    /// cell but never forces a tail.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        match self.resolve() {
            Self::Cons(node) => Some(&node.head),
            _ => None,
        }
    }

    /// Forces and returns the tail of the first cell.
    pub fn tail(&self) -> Option<Self> {
        match self.resolve() {
            Self::Cons(node) => Some(node.forced_tail()),
            _ => None,
        }
    }

    /// Splits the stream into its head and forced tail.
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match self.resolve() {
            Self::Cons(node) => Some((&node.head, node.forced_tail())),
            _ => None,
        }
    }

    /// Returns whether the tail of the first cell has been forced.
    ///
    /// The empty stream has no tail and reports `false`, as does a stream
    /// whose first cell is still pending.
    #[inline]
    pub fn is_tail_evaluated(&self) -> bool {
        match self.settled() {
            Some(Self::Cons(node)) => node.tail.is_evaluated(),
            _ => false,
        }
    }
}

impl<T> Clone for LazyPair<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(node) => Self::Cons(Rc::clone(node)),
            Self::Deferred(deferred) => Self::Deferred(Rc::clone(deferred)),
        }
    }
}

impl<T> Default for LazyPair<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Drop for LazyNode<T> {
    fn drop(&mut self) {
        let mut next = self.tail.take_evaluated();
        loop {
            next = match next {
                Some(LazyPair::Cons(node)) => Rc::try_unwrap(node)
                    .ok()
                    .and_then(|mut unique| unique.tail.take_evaluated()),
                Some(LazyPair::Deferred(deferred)) => Rc::try_unwrap(deferred)
                    .ok()
                    .and_then(|mut unique| unique.take_evaluated()),
                _ => break,
            };
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Returns the empty stream.
#[inline]
pub const fn empty<T>() -> LazyPair<T> {
    LazyPair::Empty
}

/// A stream whose first cell is computed by `thunk` when first inspected.
///
/// ```rust
/// use radiance::persistent::lazy_pair;
///
/// let stream = lazy_pair::defer(|| lazy_pair::range(0, 3));
/// assert!(stream.is_pending());
/// assert_eq!(stream.head(), Some(&0));
/// assert!(!stream.is_pending());
/// ```
pub fn defer<T, F>(thunk: F) -> LazyPair<T>
where
    F: FnOnce() -> LazyPair<T> + 'static,
{
    let thunk: Thunk<T> = Box::new(thunk);
    LazyPair::Deferred(Rc::new(Lazy::new(thunk)))
}

/// Builds a cell whose tail is computed by `tail` when first inspected.
pub fn prepend<T, F>(head: T, tail: F) -> LazyPair<T>
where
    F: FnOnce() -> LazyPair<T> + 'static,
{
    let tail: Thunk<T> = Box::new(tail);
    LazyPair::Cons(Rc::new(LazyNode {
        head,
        tail: Lazy::new(tail),
    }))
}

/// Builds a cell whose tail is already evaluated.
pub fn prepend_value<T>(head: T, tail: LazyPair<T>) -> LazyPair<T> {
    LazyPair::Cons(Rc::new(LazyNode {
        head,
        tail: Lazy::new_with_value(tail),
    }))
}

/// Converts an eager list into a stream, one cell at a time.
pub fn from_pair<T: Clone + 'static>(source: &Pair<T>) -> LazyPair<T> {
    match pair::uncons(source) {
        None => LazyPair::Empty,
        Some((head, tail)) => prepend(head.clone(), move || from_pair(&tail)),
    }
}

/// Builds a fully evaluated stream from a vector.
pub fn from_vec<T>(mut elements: Vec<T>) -> LazyPair<T> {
    let mut result = LazyPair::Empty;
    while let Some(element) = elements.pop() {
        result = prepend_value(element, result);
    }
    result
}

/// The integers from `start` up to (or down to) `end`, excluding `end`.
///
/// The range counts downward when `start > end`.
///
/// ```rust
/// use radiance::persistent::lazy_pair;
///
/// assert_eq!(lazy_pair::to_vec(&lazy_pair::range(1, 4)), vec![1, 2, 3]);
/// assert_eq!(lazy_pair::to_vec(&lazy_pair::range(3, 0)), vec![3, 2, 1]);
/// assert!(lazy_pair::range(5, 5).is_empty());
/// ```
pub fn range(start: i64, end: i64) -> LazyPair<i64> {
    if start == end {
        return LazyPair::Empty;
    }
    let step = if start < end { 1 } else { -1 };
    prepend(start, move || range(start + step, end))
}

/// The ascending integers starting at `start`.
///
/// The stream is unbounded in practice but ends after `i64::MAX`.
///
/// ```rust
/// use radiance::persistent::lazy_pair;
///
/// assert_eq!(lazy_pair::to_vec(&lazy_pair::range_from(i64::MAX)), vec![i64::MAX]);
/// ```
pub fn range_from(start: i64) -> LazyPair<i64> {
    match start.checked_add(1) {
        Some(next) => prepend(start, move || range_from(next)),
        None => prepend_value(start, LazyPair::Empty),
    }
}

/// The infinite stream `seed, step(seed), step(step(seed)), ...`.
pub fn iterate<T, F>(seed: T, step: F) -> LazyPair<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    iterate_shared(seed, Rc::new(step))
}

fn iterate_shared<T, F>(seed: T, step: Rc<F>) -> LazyPair<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    let current = seed.clone();
    prepend(seed, move || {
        let next = step(&current);
        iterate_shared(next, step)
    })
}

/// The infinite stream repeating `value`.
pub fn repeat<T: Clone + 'static>(value: T) -> LazyPair<T> {
    prepend(value.clone(), move || repeat(value))
}

// =============================================================================
// Lazy Combinators
// =============================================================================

/// Lazily applies `function` to every element.
///
/// `function` runs on a cell's head when that cell is produced. Mapping a
/// pending stream yields a pending stream.
pub fn map<T, U, F>(function: F, stream: &LazyPair<T>) -> LazyPair<U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> U + 'static,
{
    let function = Rc::new(function);
    if stream.is_pending() {
        let source = stream.clone();
        return defer(move || map_shared(function, &source));
    }
    map_shared(function, stream)
}

fn map_shared<T, U, F>(function: Rc<F>, stream: &LazyPair<T>) -> LazyPair<U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> U + 'static,
{
    match stream.resolve() {
        LazyPair::Cons(node) => {
            let head = function(&node.head);
            let source = Rc::clone(node);
            prepend(head, move || map_shared(function, &source.forced_tail()))
        }
        _ => LazyPair::Empty,
    }
}

/// Lazily keeps the elements satisfying `predicate`.
///
/// Returns immediately with a pending stream. The search for the first match
/// runs when the result is first inspected, and the search for each later
/// match runs when the previous cell's tail is forced. Searches go through a
/// [`Trampoline`], so a long run of rejected elements does not grow the
/// stack. Inspecting a filtered infinite stream with no further matches never
/// returns.
pub fn filter<T, P>(predicate: P, stream: &LazyPair<T>) -> LazyPair<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    let source = stream.clone();
    defer(move || filter_shared(predicate, source))
}

fn filter_shared<T, P>(predicate: Rc<P>, stream: LazyPair<T>) -> LazyPair<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    match seek(&*predicate, stream).run() {
        LazyPair::Cons(node) => {
            let head = node.head.clone();
            prepend(head, move || filter_shared(predicate, node.forced_tail()))
        }
        _ => LazyPair::Empty,
    }
}

fn seek<'a, T, P>(predicate: &'a P, stream: LazyPair<T>) -> Trampoline<'a, LazyPair<T>>
where
    T: 'a,
    P: Fn(&T) -> bool,
{
    let rest = match stream.resolve() {
        LazyPair::Cons(node) if !predicate(&node.head) => node.forced_tail(),
        resolved => return Trampoline::done(resolved.clone()),
    };
    Trampoline::suspend(move || seek(predicate, rest))
}

/// Lazily keeps the longest prefix satisfying `predicate`.
pub fn take_while<T, P>(predicate: P, stream: &LazyPair<T>) -> LazyPair<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    if stream.is_pending() {
        let source = stream.clone();
        return defer(move || take_while_shared(predicate, &source));
    }
    take_while_shared(predicate, stream)
}

fn take_while_shared<T, P>(predicate: Rc<P>, stream: &LazyPair<T>) -> LazyPair<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    match stream.resolve() {
        LazyPair::Cons(node) if predicate(&node.head) => {
            let source = Rc::clone(node);
            prepend(node.head.clone(), move || {
                take_while_shared(predicate, &source.forced_tail())
            })
        }
        _ => LazyPair::Empty,
    }
}

/// Lazily pairs elements by position, ending with the shorter stream.
pub fn zip<T, U>(first: &LazyPair<T>, second: &LazyPair<U>) -> LazyPair<(T, U)>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    if first.is_pending() || second.is_pending() {
        let (first, second) = (first.clone(), second.clone());
        return defer(move || zip_cells(&first, &second));
    }
    zip_cells(first, second)
}

fn zip_cells<T, U>(first: &LazyPair<T>, second: &LazyPair<U>) -> LazyPair<(T, U)>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    match (first.resolve(), second.resolve()) {
        (LazyPair::Cons(left), LazyPair::Cons(right)) => {
            let head = (left.head.clone(), right.head.clone());
            let (left, right) = (Rc::clone(left), Rc::clone(right));
            prepend(head, move || {
                zip_cells(&left.forced_tail(), &right.forced_tail())
            })
        }
        _ => LazyPair::Empty,
    }
}

/// Lazily appends `second` after `first`. `second` is not inspected until
/// `first` is exhausted.
pub fn concat<T: Clone + 'static>(first: &LazyPair<T>, second: &LazyPair<T>) -> LazyPair<T> {
    if first.is_pending() {
        let (first, second) = (first.clone(), second.clone());
        return defer(move || concat_cells(&first, &second));
    }
    concat_cells(first, second)
}

fn concat_cells<T: Clone + 'static>(first: &LazyPair<T>, second: &LazyPair<T>) -> LazyPair<T> {
    match first.resolve() {
        LazyPair::Cons(node) => {
            let source = Rc::clone(node);
            let second = second.clone();
            prepend(node.head.clone(), move || {
                concat_cells(&source.forced_tail(), &second)
            })
        }
        _ => second.clone(),
    }
}

/// Lazily flattens a stream of streams.
///
/// Returns immediately with a pending stream, like [`filter`]. Runs of empty
/// inner streams are skipped through a [`Trampoline`] when a cell is needed,
/// and the outer stream is forced only once the current inner stream is
/// exhausted.
pub fn join<T: Clone + 'static>(streams: &LazyPair<LazyPair<T>>) -> LazyPair<T> {
    let streams = streams.clone();
    defer(move || match streams.resolve() {
        LazyPair::Cons(outer) => join_from(outer.head.clone(), Rc::clone(outer)),
        _ => LazyPair::Empty,
    })
}

/// The next inner cell to emit, with the outer cell whose head it belongs to.
type Cursor<T> = Option<(Rc<LazyNode<T>>, Rc<LazyNode<LazyPair<T>>>)>;

fn join_from<T: Clone + 'static>(current: LazyPair<T>, outer: Rc<LazyNode<LazyPair<T>>>) -> LazyPair<T> {
    match next_non_empty(current, outer).run() {
        Some((node, outer)) => {
            let head = node.head.clone();
            prepend(head, move || join_from(node.forced_tail(), outer))
        }
        None => LazyPair::Empty,
    }
}

fn next_non_empty<'a, T: 'a>(
    current: LazyPair<T>,
    outer: Rc<LazyNode<LazyPair<T>>>,
) -> Trampoline<'a, Cursor<T>> {
    if let LazyPair::Cons(node) = current.resolve() {
        return Trampoline::done(Some((Rc::clone(node), outer)));
    }
    match outer.forced_tail() {
        LazyPair::Cons(next) => {
            let inner = next.head.clone();
            Trampoline::suspend(move || next_non_empty(inner, next))
        }
        _ => Trampoline::done(None),
    }
}

/// Lazily maps each element to a stream and flattens the results.
///
/// Returns immediately with a pending stream, like [`join`].
pub fn chain<T, U, F>(stream: &LazyPair<T>, function: F) -> LazyPair<U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(&T) -> LazyPair<U> + 'static,
{
    join(&map(function, stream))
}

// =============================================================================
// Trampolined Consumers
// =============================================================================

fn foldl_step<'a, T, B, F>(function: &'a mut F, accumulator: B, stream: LazyPair<T>) -> Trampoline<'a, B>
where
    T: 'a,
    B: 'a,
    F: FnMut(B, &T) -> B,
{
    match stream.resolve() {
        LazyPair::Cons(node) => {
            let accumulator = function(accumulator, &node.head);
            let rest = node.forced_tail();
            Trampoline::suspend(move || foldl_step(function, accumulator, rest))
        }
        _ => Trampoline::done(accumulator),
    }
}

/// Left fold over the whole stream. The stream must be finite.
pub fn foldl<T, B, F>(mut function: F, initial: B, stream: &LazyPair<T>) -> B
where
    F: FnMut(B, &T) -> B,
{
    foldl_step(&mut function, initial, stream.clone()).run()
}

fn take_step<'a, T>(remaining: usize, mut taken: Vec<T>, stream: LazyPair<T>) -> Trampoline<'a, Vec<T>>
where
    T: Clone + 'a,
{
    if remaining == 0 {
        return Trampoline::done(taken);
    }
    match stream.resolve() {
        LazyPair::Cons(node) => {
            taken.push(node.head.clone());
            if remaining == 1 {
                return Trampoline::done(taken);
            }
            let rest = node.forced_tail();
            Trampoline::suspend(move || take_step(remaining - 1, taken, rest))
        }
        _ => Trampoline::done(taken),
    }
}

/// The first `count` elements as an eager list.
///
/// Forces exactly the cells it returns, which makes it the way to stop
/// consuming an infinite stream.
pub fn take<T: Clone>(count: usize, stream: &LazyPair<T>) -> Pair<T> {
    pair::from_vec(take_step(count, Vec::new(), stream.clone()).run())
}

/// Calls `function` on every element in order and returns the same stream.
/// The stream must be finite.
pub fn for_each<T, F>(mut function: F, stream: &LazyPair<T>) -> LazyPair<T>
where
    F: FnMut(&T),
{
    foldl(|(), element| function(element), (), stream);
    stream.clone()
}

/// Number of elements. The stream must be finite.
pub fn length<T>(stream: &LazyPair<T>) -> usize {
    foldl(|count, _| count + 1, 0, stream)
}

fn nth_step<'a, T: 'a>(index: usize, stream: LazyPair<T>) -> Trampoline<'a, LazyPair<T>> {
    match stream.resolve() {
        LazyPair::Cons(node) if index > 0 => {
            let rest = node.forced_tail();
            Trampoline::suspend(move || nth_step(index - 1, rest))
        }
        resolved => Trampoline::done(resolved.clone()),
    }
}

/// The element at `index`, forcing only the cells before it.
pub fn nth<T: Clone>(index: usize, stream: &LazyPair<T>) -> Option<T> {
    nth_step(index, stream.clone()).run().head().cloned()
}

/// Collects the elements into a vector. The stream must be finite.
pub fn to_vec<T: Clone>(stream: &LazyPair<T>) -> Vec<T> {
    foldl(
        |mut elements, element: &T| {
            elements.push(element.clone());
            elements
        },
        Vec::new(),
        stream,
    )
}

/// Collects the elements into an eager list. The stream must be finite.
pub fn to_pair<T: Clone>(stream: &LazyPair<T>) -> Pair<T> {
    pair::from_vec(to_vec(stream))
}

// =============================================================================
// Bounded-only Consumers
// =============================================================================

/// Right fold. Forces the whole stream into a buffer, then combines from the
/// tail end. The stream must be finite.
pub fn foldr<T, B, F>(mut function: F, initial: B, stream: &LazyPair<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    let mut cells = Vec::new();
    let mut current = stream.resolve().clone();
    while let LazyPair::Cons(node) = current {
        current = node.forced_tail();
        cells.push(node);
    }
    cells
        .iter()
        .rev()
        .fold(initial, |accumulator, node| function(&node.head, accumulator))
}

/// Reverses a finite stream into a fully evaluated one.
pub fn reverse<T: Clone>(stream: &LazyPair<T>) -> LazyPair<T> {
    foldl(
        |reversed, element: &T| prepend_value(element.clone(), reversed),
        LazyPair::Empty,
        stream,
    )
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over a stream. Each call to `next` forces at most one
/// tail. A pending first cell is computed by the first call.
pub struct IntoIter<T> {
    pending: LazyPair<T>,
    previous: Option<Rc<LazyNode<T>>>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.previous.take() {
            self.pending = previous.forced_tail();
        }
        let pending = std::mem::take(&mut self.pending);
        match pending.resolve() {
            LazyPair::Cons(node) => {
                self.previous = Some(Rc::clone(node));
                Some(node.head.clone())
            }
            _ => None,
        }
    }
}

impl<T: Clone> IntoIterator for LazyPair<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            pending: self,
            previous: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyPair<T> {
    // Only the evaluated prefix is shown. Anything unevaluated renders as `..`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self;
        loop {
            match current.settled() {
                Some(LazyPair::Cons(node)) => {
                    list.entry(&node.head);
                    match node.tail.get() {
                        Some(tail) => current = tail,
                        None => {
                            list.entry(&format_args!(".."));
                            return list.finish();
                        }
                    }
                }
                Some(_) => return list.finish(),
                None => {
                    list.entry(&format_args!(".."));
                    return list.finish();
                }
            }
        }
    }
}

static_assertions::assert_not_impl_any!(LazyPair<i32>: Send, Sync);
