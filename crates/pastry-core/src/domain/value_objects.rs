//! Value Objects for the identifier space

use crate::domain::NodeIdError;
use serde::{Deserialize, Serialize};

/// Minimum number of source bytes for a node identifier.
///
/// 16 bytes give 32 digits and a ring of size 2^128.
pub const MIN_NODE_ID_BYTES: usize = 16;

/// Overlay-wide identifier-space configuration.
///
/// Every participant in one overlay must use the same value, otherwise
/// prefix and distance comparisons across nodes are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSpaceConfig {
    /// Shortest byte buffer accepted when building an identifier.
    pub min_bytes: usize,
}

impl Default for IdSpaceConfig {
    fn default() -> Self {
        Self {
            min_bytes: MIN_NODE_ID_BYTES,
        }
    }
}

impl IdSpaceConfig {
    /// Create a config with validation.
    pub fn new(min_bytes: usize) -> Result<Self, NodeIdError> {
        let config = Self { min_bytes };
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would admit empty identifiers.
    pub fn validate(&self) -> Result<(), NodeIdError> {
        if self.min_bytes == 0 {
            return Err(NodeIdError::InvalidConfig(
                "min_bytes cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Shortest digit sequence accepted (two digits per byte).
    pub fn min_digits(&self) -> usize {
        self.min_bytes * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_128_bit() {
        let config = IdSpaceConfig::default();
        assert_eq!(config.min_bytes, 16);
        assert_eq!(config.min_digits(), 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_min_bytes_rejected() {
        assert!(matches!(
            IdSpaceConfig::new(0),
            Err(NodeIdError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_256_bit_config() {
        let config = IdSpaceConfig::new(32).unwrap();
        assert_eq!(config.min_digits(), 64);
    }
}
