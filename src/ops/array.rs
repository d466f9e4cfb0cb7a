//! Vector concatenation and left folds.

/// Joins two vectors into a new one, `first` followed by `second`.
///
/// ```rust
/// use radiance::ops::concat;
///
/// assert_eq!(concat(vec![1, 2], vec![3]), vec![1, 2, 3]);
/// ```
pub fn concat<T>(first: Vec<T>, second: Vec<T>) -> Vec<T> {
    let mut joined = first;
    joined.extend(second);
    joined
}

/// Left fold over a slice.
///
/// Runs as a loop, so the slice length is bounded only by memory.
///
/// ```rust
/// use radiance::ops::fold_left;
///
/// let digits = fold_left(|acc: String, x: &u8| format!("{acc}{x}"), String::new(), &[1, 2, 3]);
/// assert_eq!(digits, "123");
/// ```
pub fn fold_left<T, B, F>(mut function: F, initial: B, elements: &[T]) -> B
where
    F: FnMut(B, &T) -> B,
{
    let mut accumulator = initial;
    for element in elements {
        accumulator = function(accumulator, element);
    }
    accumulator
}

/// Curried form of [`concat`](fn@concat).
pub mod concat {
    use crate::compose::{Curried, curry};

    type Signature<T> = fn(Vec<T>, Vec<T>) -> Vec<T>;

    /// Returns `concat` as a [`Curried`] record of arity 2.
    ///
    /// ```rust
    /// use radiance::compose::Apply;
    /// use radiance::ops::concat;
    ///
    /// let prefixed = concat::curried().apply((vec![0],));
    /// assert_eq!(prefixed.apply((vec![1, 2],)), vec![0, 1, 2]);
    /// ```
    pub fn curried<T: Clone>() -> Curried<Signature<T>, Signature<T>> {
        curry(super::concat::<T> as Signature<T>)
    }
}

/// Curried form of [`fold_left`](fn@fold_left).
pub mod fold_left {
    use crate::compose::{Curried, curry};

    type Signature<F, B, T> = fn(F, B, Vec<T>) -> B;

    /// Returns `fold_left` as a [`Curried`] record of arity 3 whose last
    /// argument is an owned vector.
    ///
    /// ```rust
    /// use radiance::compose::Apply;
    /// use radiance::ops::fold_left;
    ///
    /// let sum = fold_left::curried().apply((|acc: i32, x: &i32| acc + x, 0));
    /// assert_eq!(sum.apply((vec![1, 2, 3],)), 6);
    /// ```
    pub fn curried<F, B, T>() -> Curried<Signature<F, B, T>, Signature<F, B, T>>
    where
        F: FnMut(B, &T) -> B,
    {
        let pointwise: Signature<F, B, T> =
            |function, initial, elements| super::fold_left(function, initial, &elements);
        curry(pointwise)
    }
}
