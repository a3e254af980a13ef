//! Radix-16 digits of a node identifier.
//!
//! A digit stores its four significant bits in either half of a byte; the
//! other half is always zero. Comparisons only ever look at the canonical
//! value, never at the stored byte.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const HIGH_MASK: u8 = 0xF0;
const LOW_MASK: u8 = 0x0F;

/// One radix-16 digit of a [`NodeId`](crate::domain::NodeId).
#[derive(Debug, Clone, Copy)]
pub struct NodeIdDigit(u8);

impl NodeIdDigit {
    /// Keep the upper four bits of `byte`.
    #[inline]
    pub const fn from_high_nibble(byte: u8) -> Self {
        Self(byte & HIGH_MASK)
    }

    /// Keep the lower four bits of `byte`.
    #[inline]
    pub const fn from_low_nibble(byte: u8) -> Self {
        Self(byte & LOW_MASK)
    }

    /// Digit with canonical value `value`, or `None` if `value > 15`.
    pub const fn from_value(value: u8) -> Option<Self> {
        if value > LOW_MASK {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Wrap a raw container byte.
    ///
    /// Returns `None` when both halves are occupied, since such a byte
    /// holds two digits rather than one.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw & HIGH_MASK != 0 && raw & LOW_MASK != 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Canonical value in `0..=15`.
    ///
    /// The upper half if it is nonzero, otherwise the lower half.
    #[inline]
    pub const fn value(&self) -> u8 {
        let high = self.0 >> 4;
        if high != 0 {
            high
        } else {
            self.0 & LOW_MASK
        }
    }

    /// Stored container byte, with the digit in whichever half it came from.
    #[cfg(test)]
    pub(crate) const fn raw(&self) -> u8 {
        self.0
    }
}

impl PartialEq for NodeIdDigit {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for NodeIdDigit {}

impl Hash for NodeIdDigit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for NodeIdDigit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeIdDigit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for NodeIdDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.value())
    }
}

/// Split a byte into its high and low digits.
///
/// The two stored bytes always add up to `byte`.
#[inline]
pub fn split_byte(byte: u8) -> (NodeIdDigit, NodeIdDigit) {
    (
        NodeIdDigit::from_high_nibble(byte),
        NodeIdDigit::from_low_nibble(byte),
    )
}

/// Compare two digits by canonical value.
#[inline]
pub fn digits_equal(a: NodeIdDigit, b: NodeIdDigit) -> bool {
    a.value() == b.value()
}
