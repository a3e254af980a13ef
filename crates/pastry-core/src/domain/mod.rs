//! Domain Layer - Pure identifier algebra with no I/O
//!
//! This module contains:
//! - Radix-16 digits and the byte splitter
//! - Node identifiers on the `16^L` ring
//! - Prefix matching (routing-table row/column selection)
//! - Circular distance (leaf-set proximity ranking)
//! - Identifier-space configuration

pub mod digit;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use digit::*;
pub use entities::*;
pub use errors::*;
pub use services::*;
pub use value_objects::*;
