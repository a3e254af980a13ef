//! Core Domain Entities for the identifier space
//!
//! A [`NodeId`] is a point on a ring of size `16^L`, where `L` is its digit
//! count. Nodes and keys share the same space.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use tracing::debug;

use crate::domain::services;
use crate::domain::{split_byte, IdSpaceConfig, NodeIdDigit, NodeIdError, MIN_NODE_ID_BYTES};

/// Ordered, fixed-length sequence of radix-16 digits.
///
/// Built once from a byte buffer (usually a hash digest) and never mutated.
/// Equality, hashing and ordering use canonical digit values, so two
/// identifiers with the same digits are equal no matter which half of a
/// byte each digit was stored in.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    digits: Vec<NodeIdDigit>,
}

impl NodeId {
    /// Build an identifier from raw bytes using the default 16-byte minimum.
    ///
    /// Each byte yields two digits, high half first.
    ///
    /// # Errors
    ///
    /// `InvalidLength` if `bytes` is shorter than [`MIN_NODE_ID_BYTES`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NodeIdError> {
        Self::from_bytes_with_min(bytes, MIN_NODE_ID_BYTES)
    }

    /// Build an identifier from raw bytes under an overlay-wide config.
    pub fn from_bytes_with_config(
        bytes: &[u8],
        config: &IdSpaceConfig,
    ) -> Result<Self, NodeIdError> {
        Self::from_bytes_with_min(bytes, config.min_bytes)
    }

    fn from_bytes_with_min(bytes: &[u8], min_bytes: usize) -> Result<Self, NodeIdError> {
        if bytes.len() < min_bytes {
            debug!(
                len = bytes.len(),
                min = min_bytes,
                "Rejected node id source material"
            );
            return Err(NodeIdError::InvalidLength {
                expected: min_bytes,
                actual: bytes.len(),
            });
        }

        let digits = bytes
            .iter()
            .flat_map(|&b| {
                let (high, low) = split_byte(b);
                [high, low]
            })
            .collect();

        Ok(Self { digits })
    }

    /// Assemble an identifier from digits directly.
    ///
    /// # Errors
    ///
    /// `InvalidLength` if fewer than `2 * MIN_NODE_ID_BYTES` digits are given.
    pub fn from_digits(digits: Vec<NodeIdDigit>) -> Result<Self, NodeIdError> {
        let min_digits = MIN_NODE_ID_BYTES * 2;
        if digits.len() < min_digits {
            debug!(len = digits.len(), min = min_digits, "Rejected node id digits");
            return Err(NodeIdError::InvalidLength {
                expected: min_digits,
                actual: digits.len(),
            });
        }
        Ok(Self { digits })
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True only for identifiers with no digits, which construction never yields.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[NodeIdDigit] {
        &self.digits
    }

    pub fn digit(&self, index: usize) -> Option<NodeIdDigit> {
        self.digits.get(index).copied()
    }

    /// Unsigned integer value, most significant digit first.
    pub fn to_biguint(&self) -> BigUint {
        self.digits.iter().fold(BigUint::default(), |acc, d| {
            (acc << 4u32) + BigUint::from(d.value())
        })
    }

    /// Size of the ring this identifier lives on: `16^len`.
    pub fn ring_size(&self) -> BigUint {
        BigUint::from(1u8) << (4 * self.digits.len())
    }

    /// Re-pack digit pairs into bytes.
    ///
    /// An odd trailing digit lands in the high half of the last byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.digits
            .chunks(2)
            .map(|pair| {
                let high = pair[0].value() << 4;
                let low = pair.get(1).map_or(0, NodeIdDigit::value);
                high | low
            })
            .collect()
    }

    /// Number of leading digits shared with `other`.
    pub fn common_prefix_len(&self, other: &NodeId) -> usize {
        services::common_prefix_len(self, other)
    }

    /// Circular distance to `other`.
    ///
    /// # Errors
    ///
    /// `InvalidLength` if the identifiers have different lengths.
    pub fn diff(&self, other: &NodeId) -> Result<BigUint, NodeIdError> {
        services::diff(self, other)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({self})")
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    /// Parse a hex string, one digit per character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, c)| {
                c.to_digit(16)
                    .and_then(|v| NodeIdDigit::from_value(v as u8))
                    .ok_or(NodeIdError::InvalidDigit { position, found: c })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_digits(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_with_insufficient_bytes() {
        let result = NodeId::from_bytes(b"123456789012345");
        assert_eq!(
            result,
            Err(NodeIdError::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_from_bytes_with_sufficient_bytes() {
        let id = NodeId::from_bytes(b"1234567890123456").unwrap();
        assert_eq!(id.len(), 32);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_from_bytes_accepts_longer_buffers() {
        let id = NodeId::from_bytes(&[0x5A; 40]).unwrap();
        assert_eq!(id.len(), 80);
    }

    #[test]
    fn test_from_bytes_splits_high_then_low() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x9E;
        let id = NodeId::from_bytes(&bytes).unwrap();

        assert_eq!(id.digit(0).map(|d| d.value()), Some(0x9));
        assert_eq!(id.digit(1).map(|d| d.value()), Some(0xE));
        assert_eq!(id.digit(32), None);
    }

    #[test]
    fn test_from_bytes_with_config_uses_configured_minimum() {
        let config = IdSpaceConfig::new(32).unwrap();

        assert!(matches!(
            NodeId::from_bytes_with_config(&[0u8; 16], &config),
            Err(NodeIdError::InvalidLength {
                expected: 32,
                actual: 16
            })
        ));
        assert_eq!(
            NodeId::from_bytes_with_config(&[0u8; 32], &config)
                .unwrap()
                .len(),
            64
        );
    }

    #[test]
    fn test_from_digits_enforces_minimum() {
        let short = vec![NodeIdDigit::from_low_nibble(1); 31];
        assert!(NodeId::from_digits(short).is_err());

        let ok = vec![NodeIdDigit::from_low_nibble(1); 32];
        assert_eq!(NodeId::from_digits(ok).unwrap().len(), 32);
    }

    #[test]
    fn test_to_biguint_and_ring_size() {
        let mut bytes = [0u8; 16];
        bytes[14] = 0x01;
        bytes[15] = 0x02;
        let id = NodeId::from_bytes(&bytes).unwrap();

        assert_eq!(id.to_biguint(), BigUint::from(0x0102u32));
        assert_eq!(id.ring_size(), BigUint::from(1u8) << 128u32);
    }

    #[test]
    fn test_to_bytes_inverts_from_bytes() {
        let bytes: Vec<u8> = (0u8..16).map(|b| b.wrapping_mul(37)).collect();
        let id = NodeId::from_bytes(&bytes).unwrap();
        assert_eq!(id.to_bytes(), bytes);
    }

    #[test]
    fn test_to_bytes_packs_odd_trailing_digit_high() {
        let id: NodeId = "0123456789abcdef0123456789abcdef7".parse().unwrap();
        let bytes = id.to_bytes();
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[16], 0x70);
    }

    #[test]
    fn test_display_and_parse_hex() {
        let id = NodeId::from_bytes(&[0xAB; 16]).unwrap();
        let text = id.to_string();

        assert_eq!(text, "ab".repeat(16));
        assert_eq!(text.parse::<NodeId>().unwrap(), id);
        assert_eq!("AB".repeat(16).parse::<NodeId>().unwrap(), id);
        assert_eq!(format!("{id:?}"), format!("NodeId({text})"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let mut text = "0".repeat(32);
        text.replace_range(5..6, "g");
        assert_eq!(
            text.parse::<NodeId>(),
            Err(NodeIdError::InvalidDigit {
                position: 5,
                found: 'g'
            })
        );
        assert!(matches!(
            "abc".parse::<NodeId>(),
            Err(NodeIdError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_ordering_is_numeric_for_equal_lengths() {
        let low = NodeId::from_bytes(&[0x0F; 16]).unwrap();
        let high = NodeId::from_bytes(&[0xF0; 16]).unwrap();
        assert!(low < high);
        assert!(low.to_biguint() < high.to_biguint());
    }
}
