//! Ports Layer - Trait definitions for external dependencies
//!
//! Driven ports (outbound SPI) that the host application implements.

pub mod outbound;

pub use outbound::{ConfigProvider, IdentifierHasher};
