//! # Pastry Identifier Space
//!
//! Identifier-space algebra for a Pastry-family structured overlay. Every
//! node and every routable key is a point on a cyclic space of size `16^L`;
//! routing decisions are made purely from relations between those points.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Pure identifier logic (digits, prefix matching, ring distance)
//! - **Ports Layer:** Trait definitions for hashing and configuration
//! - **Service Layer:** Wires domain to ports
//! - **Adapters Layer:** Concrete implementations (feature-gated)
//!
//! Routing tables call [`common_prefix_len`] to pick a row and
//! [`best_next_hop`] to forward; leaf sets rank members with [`diff`].
//!
//! ## Example
//!
//! ```rust
//! use pastry_core::{BigUint, NodeId};
//!
//! let zero = NodeId::from_bytes(&[0u8; 16]).unwrap();
//! let max = NodeId::from_bytes(&[255u8; 16]).unwrap();
//!
//! // The ring wraps: all-zero and all-ones are neighbours.
//! assert_eq!(zero.diff(&max).unwrap(), BigUint::from(1u8));
//! assert_eq!(zero.common_prefix_len(&max), 0);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

/// Adapters for hashing and configuration.
pub mod adapters;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

// Domain entities
pub use domain::{
    digits_equal, split_byte, IdSpaceConfig, NodeId, NodeIdDigit, NodeIdError, MIN_NODE_ID_BYTES,
};

// Domain services
pub use domain::{
    best_next_hop, common_prefix_len, diff, find_k_closest, is_closer, next_digit, sort_by_distance,
};

// Port traits
pub use ports::{ConfigProvider, IdentifierHasher};

// Service
pub use service::IdentityService;

// Arbitrary-precision result type of `diff`
pub use num_bigint::BigUint;

// =============================================================================
// ADAPTER RE-EXPORTS (Feature-Gated)
// =============================================================================

pub use adapters::StaticConfigProvider;

#[cfg(feature = "toml-config")]
pub use adapters::{ConfigError, TomlConfigProvider};

#[cfg(feature = "sha2")]
pub use adapters::Sha256Hasher;
