//! Small combinators used alongside curried functions.

/// Returns the value unchanged.
///
/// Mapping `identity` over a list yields an equal list, which makes it the
/// neutral element for [`map`](crate::persistent::pair::map).
///
/// ```
/// use radiance::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("radiance"), "radiance");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Apply, curry};
    use rstest::rstest;

    #[rstest]
    fn test_identity_returns_argument() {
        assert_eq!(identity(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn test_identity_curries() {
        let curried = curry(identity::<i32>);
        assert_eq!(curried.arity(), 1);
        assert_eq!(curried.apply((7,)), 7);
    }
}
