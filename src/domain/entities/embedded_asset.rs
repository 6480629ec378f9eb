//! EmbeddedAsset entity - the payload read for one entry

use crate::domain::value_objects::ContentHash;

/// Verbatim source text bound to its constant name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedAsset {
    constant: String,
    payload: String,
    hash: ContentHash,
}

impl EmbeddedAsset {
    /// Wrap a payload; the hash is computed over the exact bytes
    pub fn new(constant: impl Into<String>, payload: impl Into<String>) -> Self {
        let payload = payload.into();
        let hash = ContentHash::from_bytes(payload.as_bytes());
        Self {
            constant: constant.into(),
            payload,
            hash,
        }
    }

    pub fn constant(&self) -> &str {
        &self.constant
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }
}
