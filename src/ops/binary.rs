//! Arithmetic and comparison dispatch over a closed operator set.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::error::RadianceError;

/// One of the seven supported binary operators.
///
/// # Examples
///
/// ```rust
/// use radiance::ops::BinaryOperator;
///
/// let operator: BinaryOperator = "<".parse().unwrap();
/// assert_eq!(operator, BinaryOperator::LessThan);
/// assert_eq!(operator.symbol(), '<');
/// assert!("%".parse::<BinaryOperator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// `=`
    Equal,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
}

impl BinaryOperator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Divide,
        Self::Multiply,
        Self::Equal,
        Self::GreaterThan,
        Self::LessThan,
    ];

    /// Returns the symbol this operator is parsed from.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Divide => '/',
            Self::Multiply => '*',
            Self::Equal => '=',
            Self::GreaterThan => '>',
            Self::LessThan => '<',
        }
    }

    /// Returns `true` for the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Equal | Self::GreaterThan | Self::LessThan)
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.symbol())
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = RadianceError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or_else(|| {
            tracing::debug!(%symbol, "rejected operator symbol");
            RadianceError::UnsupportedOperator(symbol.to_string())
        })
    }
}

impl FromStr for BinaryOperator {
    type Err = RadianceError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        let mut characters = symbol.chars();
        match (characters.next(), characters.next()) {
            (Some(single), None) => Self::try_from(single),
            _ => {
                tracing::debug!(symbol, "rejected operator symbol");
                Err(RadianceError::UnsupportedOperator(symbol.to_string()))
            }
        }
    }
}

/// The result of [`binary_op`]: a number for arithmetic, a boolean for
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOutcome<N> {
    /// Result of `+`, `-`, `*` or `/`.
    Number(N),
    /// Result of `=`, `>` or `<`.
    Boolean(bool),
}

impl<N> BinaryOutcome<N> {
    /// Returns the number, if this is an arithmetic result.
    pub fn number(self) -> Option<N> {
        match self {
            Self::Number(number) => Some(number),
            Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean, if this is a comparison result.
    pub const fn boolean(&self) -> Option<bool> {
        match self {
            Self::Number(_) => None,
            Self::Boolean(value) => Some(*value),
        }
    }
}

/// Computes `x <operator> y`.
///
/// The operand supplied second is the left-hand side, so partially applying
/// the operator and `y` yields a section such as `|x| x < y`.
///
/// Integer division by zero panics, as `/` does.
///
/// # Examples
///
/// ```rust
/// use radiance::ops::{BinaryOperator, BinaryOutcome, binary_op};
///
/// assert_eq!(binary_op(BinaryOperator::Subtract, 2, 10), BinaryOutcome::Number(8));
/// assert_eq!(binary_op(BinaryOperator::LessThan, 5, 3), BinaryOutcome::Boolean(true));
/// ```
pub fn binary_op<N>(operator: BinaryOperator, y: N, x: N) -> BinaryOutcome<N>
where
    N: Add<Output = N> + Sub<Output = N> + Mul<Output = N> + Div<Output = N> + PartialOrd,
{
    match operator {
        BinaryOperator::Add => BinaryOutcome::Number(x + y),
        BinaryOperator::Subtract => BinaryOutcome::Number(x - y),
        BinaryOperator::Divide => BinaryOutcome::Number(x / y),
        BinaryOperator::Multiply => BinaryOutcome::Number(x * y),
        BinaryOperator::Equal => BinaryOutcome::Boolean(x == y),
        BinaryOperator::GreaterThan => BinaryOutcome::Boolean(x > y),
        BinaryOperator::LessThan => BinaryOutcome::Boolean(x < y),
    }
}

/// Curried form of [`binary_op`](fn@binary_op).
pub mod binary_op {
    use std::ops::{Add, Div, Mul, Sub};

    use super::{BinaryOperator, BinaryOutcome};
    use crate::compose::{Curried, curry};

    type Signature<N> = fn(BinaryOperator, N, N) -> BinaryOutcome<N>;

    /// Returns `binary_op` as a [`Curried`] record of arity 3.
    ///
    /// ```rust
    /// use radiance::compose::Apply;
    /// use radiance::ops::{BinaryOperator, BinaryOutcome, binary_op};
    ///
    /// let add = binary_op::curried().apply((BinaryOperator::Add,));
    /// assert_eq!(add.apply((2,)).apply((19,)), BinaryOutcome::Number(21));
    /// ```
    pub fn curried<N>() -> Curried<Signature<N>, Signature<N>>
    where
        N: Clone + Add<Output = N> + Sub<Output = N> + Mul<Output = N> + Div<Output = N> + PartialOrd,
    {
        curry(super::binary_op::<N> as Signature<N>)
    }
}
