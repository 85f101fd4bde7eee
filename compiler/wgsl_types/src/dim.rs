//! Vector and matrix dimensions.

use std::fmt;

/// A vector size or matrix column/row count.
///
/// Only 2, 3 and 4 are representable, so a `Dim` never needs re-checking
/// after construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Dim(u8);

impl Dim {
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    /// Every valid dimension, ascending.
    pub const ALL: [Self; 3] = [Self::TWO, Self::THREE, Self::FOUR];

    /// Create a dimension, or `None` if `n` is not 2, 3 or 4.
    #[inline]
    pub const fn new(n: u32) -> Option<Self> {
        match n {
            2 => Some(Self::TWO),
            3 => Some(Self::THREE),
            4 => Some(Self::FOUR),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Error for a dimension outside {2, 3, 4}.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidDim(pub u32);

impl fmt::Display for InvalidDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dimension {}: expected 2, 3 or 4", self.0)
    }
}

impl std::error::Error for InvalidDim {}

impl TryFrom<u8> for Dim {
    type Error = InvalidDim;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(n)).ok_or(InvalidDim(u32::from(n)))
    }
}

impl TryFrom<u32> for Dim {
    type Error = InvalidDim;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidDim(n))
    }
}

impl From<Dim> for u8 {
    fn from(dim: Dim) -> Self {
        dim.0
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_three_four_are_valid() {
        assert_eq!(Dim::new(2), Some(Dim::TWO));
        assert_eq!(Dim::new(4).map(Dim::get), Some(4));
        assert_eq!(Dim::new(1), None);
        assert_eq!(Dim::new(5), None);
        assert_eq!(Dim::new(0), None);
    }

    #[test]
    fn try_from_reports_value() {
        assert_eq!(Dim::try_from(7u8), Err(InvalidDim(7)));
        assert_eq!(Dim::try_from(3u32), Ok(Dim::THREE));
        assert_eq!(
            InvalidDim(9).to_string(),
            "invalid dimension 9: expected 2, 3 or 4"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_encodes_as_u8_and_validates() {
        let bytes = bincode::serialize(&Dim::THREE).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(bytes, bincode::serialize(&3u8).unwrap_or_else(|e| panic!("{e}")));
        assert_eq!(bincode::deserialize::<Dim>(&bytes).ok(), Some(Dim::THREE));

        let five = bincode::serialize(&5u8).unwrap_or_else(|e| panic!("{e}"));
        assert!(bincode::deserialize::<Dim>(&five).is_err());
    }
}
