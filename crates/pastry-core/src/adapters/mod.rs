//! Adapters Layer - Concrete implementations of the ports
//!
//! - `config` - Static and TOML configuration providers
//! - `hashing` - SHA-256 identifier hasher (requires `sha2`)

pub mod config;

#[cfg(feature = "sha2")]
pub mod hashing;

pub use config::StaticConfigProvider;

#[cfg(feature = "toml-config")]
pub use config::{ConfigError, TomlConfigProvider};

#[cfg(feature = "sha2")]
pub use hashing::Sha256Hasher;
