//! Service Layer - Wires the identifier algebra to the hashing and config ports.

use tracing::debug;

use crate::domain::{IdSpaceConfig, NodeId, NodeIdError};
use crate::ports::{ConfigProvider, IdentifierHasher};

/// Builds identifiers for one overlay instance.
///
/// Holds the overlay-wide [`IdSpaceConfig`] so every identifier it produces
/// lives on the same ring.
#[derive(Debug, Clone)]
pub struct IdentityService<H: IdentifierHasher> {
    hasher: H,
    config: IdSpaceConfig,
}

impl<H: IdentifierHasher> IdentityService<H> {
    /// Create a service with a validated config.
    pub fn new(hasher: H, config: IdSpaceConfig) -> Result<Self, NodeIdError> {
        config.validate()?;
        Ok(Self { hasher, config })
    }

    /// Create a service using a config provider.
    pub fn from_provider<C: ConfigProvider>(hasher: H, provider: &C) -> Result<Self, NodeIdError> {
        Self::new(hasher, provider.id_space_config())
    }

    pub fn config(&self) -> &IdSpaceConfig {
        &self.config
    }

    /// Hash identity material (an address, a key name) into an identifier.
    pub fn derive(&self, material: &[u8]) -> Result<NodeId, NodeIdError> {
        let digest = self.hasher.digest(material);
        debug!(digest_len = digest.len(), "Derived node id digest");
        self.from_bytes(&digest)
    }

    /// Build an identifier from raw bytes under the configured minimum.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<NodeId, NodeIdError> {
        NodeId::from_bytes_with_config(bytes, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticConfigProvider;

    /// Repeats the first byte of the material `len` times.
    struct FillHasher {
        len: usize,
    }

    impl IdentifierHasher for FillHasher {
        fn digest(&self, material: &[u8]) -> Vec<u8> {
            vec![material.first().copied().unwrap_or(0); self.len]
        }
    }

    #[test]
    fn test_derive_builds_configured_width() {
        let service = IdentityService::new(FillHasher { len: 16 }, IdSpaceConfig::default()).unwrap();
        let id = service.derive(b"\x7fnode").unwrap();

        assert_eq!(id.len(), 32);
        assert_eq!(id.to_string(), "7f".repeat(16));
    }

    #[test]
    fn test_derive_rejects_short_digest() {
        let config = IdSpaceConfig::new(32).unwrap();
        let service = IdentityService::new(FillHasher { len: 16 }, config).unwrap();

        assert_eq!(
            service.derive(b"node"),
            Err(NodeIdError::InvalidLength {
                expected: 32,
                actual: 16
            })
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = IdentityService::new(FillHasher { len: 16 }, IdSpaceConfig { min_bytes: 0 });
        assert!(matches!(result, Err(NodeIdError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_provider() {
        let provider = StaticConfigProvider::new();
        let service = IdentityService::from_provider(FillHasher { len: 16 }, &provider).unwrap();
        assert_eq!(service.config().min_bytes, 16);
        assert!(service.from_bytes(&[1u8; 15]).is_err());
    }
}
