//! Classical bits carried by the superdense coding protocol

use crate::error::QuantumError;
use std::fmt;
use std::str::FromStr;

/// A single classical bit
///
/// Provides type safety for protocol input and measurement outcomes so raw
/// integers other than 0 and 1 cannot leak into the encoding dispatch.
///
/// # Example
/// ```
/// use densecode_core::Bit;
///
/// let bit: Bit = "1".parse().unwrap();
/// assert_eq!(bit, Bit::One);
/// assert_eq!(bit.as_u8(), 1);
/// assert!("2".parse::<Bit>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    /// Classical 0
    #[default]
    Zero,
    /// Classical 1
    One,
}

impl Bit {
    /// Get the bit as an integer (0 or 1)
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    /// Whether this bit is set
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = QuantumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(QuantumError::invalid_bit(other.to_string())),
        }
    }
}

impl FromStr for Bit {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Bit::Zero),
            "1" => Ok(Bit::One),
            _ => Err(QuantumError::invalid_bit(s)),
        }
    }
}

/// A pair of classical bits, ordered (first, second)
///
/// The pair doubles as a label for the two-qubit computational basis:
/// `first` is the first qubit's value and `second` the second qubit's.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitPair {
    /// First bit (first qubit of the pair)
    pub first: Bit,
    /// Second bit (second qubit of the pair)
    pub second: Bit,
}

impl BitPair {
    /// All four pairs in basis order: 00, 01, 10, 11
    pub const ALL: [BitPair; 4] = [
        BitPair::new(Bit::Zero, Bit::Zero),
        BitPair::new(Bit::Zero, Bit::One),
        BitPair::new(Bit::One, Bit::Zero),
        BitPair::new(Bit::One, Bit::One),
    ];

    /// Create a new bit pair
    #[inline]
    pub const fn new(first: Bit, second: Bit) -> Self {
        Self { first, second }
    }

    /// Index of the matching basis state (|00> = 0 ... |11> = 3)
    #[inline]
    pub const fn index(self) -> usize {
        ((self.first.as_u8() as usize) << 1) | self.second.as_u8() as usize
    }

    /// Build the pair labelling basis state `index`
    pub fn from_index(index: usize) -> crate::Result<Self> {
        BitPair::ALL
            .get(index)
            .copied()
            .ok_or(QuantumError::InvalidBasisIndex(index))
    }

    /// The pair as a tuple of integers
    #[inline]
    pub const fn as_tuple(self) -> (u8, u8) {
        (self.first.as_u8(), self.second.as_u8())
    }
}

impl fmt::Display for BitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl From<(Bit, Bit)> for BitPair {
    #[inline]
    fn from((first, second): (Bit, Bit)) -> Self {
        Self::new(first, second)
    }
}

impl From<BitPair> for (u8, u8) {
    #[inline]
    fn from(pair: BitPair) -> Self {
        pair.as_tuple()
    }
}

impl TryFrom<(u8, u8)> for BitPair {
    type Error = QuantumError;

    fn try_from((first, second): (u8, u8)) -> Result<Self, Self::Error> {
        Ok(Self::new(Bit::try_from(first)?, Bit::try_from(second)?))
    }
}

impl FromStr for BitPair {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                let parse = |c: char| match c {
                    '0' => Ok(Bit::Zero),
                    '1' => Ok(Bit::One),
                    _ => Err(QuantumError::invalid_bit_pair(s)),
                };
                Ok(Self::new(parse(a)?, parse(b)?))
            },
            _ => Err(QuantumError::invalid_bit_pair(s)),
        }
    }
}
