//! Identifier Hasher Adapters

use sha2::{Digest, Sha256};

use crate::domain::IdSpaceConfig;
use crate::ports::IdentifierHasher;

/// SHA-256 based identifier hasher.
///
/// The 32-byte digest is truncated to `min_bytes` of the configured id
/// space, so a 128-bit overlay gets the first 16 bytes. Configs asking for
/// more than 32 bytes get the full digest, which identifier construction
/// then rejects as too short.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    output_len: usize,
}

impl Sha256Hasher {
    /// Full digest length.
    pub const DIGEST_LEN: usize = 32;

    /// Hasher producing as many bytes as `config` needs.
    pub fn new(config: &IdSpaceConfig) -> Self {
        Self {
            output_len: config.min_bytes.min(Self::DIGEST_LEN),
        }
    }

    /// Length of every digest this hasher returns.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new(&IdSpaceConfig::default())
    }
}

impl IdentifierHasher for Sha256Hasher {
    fn digest(&self, material: &[u8]) -> Vec<u8> {
        let mut digest = Sha256::digest(material).to_vec();
        digest.truncate(self.output_len);
        digest
    }
}
