//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host application to
//! implement, or to pick from the bundled adapters.

use crate::domain::IdSpaceConfig;

/// Turns identity material (a network address, a public key, a key name)
/// into the raw bytes an identifier is built from.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one hasher can be shared by all
/// overlay components.
pub trait IdentifierHasher: Send + Sync {
    /// Digest `material` into identifier source bytes.
    fn digest(&self, material: &[u8]) -> Vec<u8>;
}

/// Abstract interface for identifier-space configuration.
pub trait ConfigProvider: Send + Sync {
    /// Get the overlay-wide identifier-space config.
    fn id_space_config(&self) -> IdSpaceConfig;
}
