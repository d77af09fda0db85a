//! Branded block identifiers.
//!
//! Block ids are opaque strings. Generated ids are UUID v7 (time-ordered,
//! so insertion order survives lexicographic sorts in external stores); the
//! two structural anchors use fixed ids that persist for the lifetime of a
//! working session.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed id of the System container anchor.
pub const SYSTEM_BLOCK_ID: &str = "system-node-root";

/// Fixed id of the Trigger anchor (root of the history chain).
pub const TRIGGER_BLOCK_ID: &str = "trigger-node-root";

/// Opaque, stable identifier for a block.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh unique id (UUID v7).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The System container anchor id.
    #[must_use]
    pub fn system() -> Self {
        Self(SYSTEM_BLOCK_ID.to_owned())
    }

    /// The Trigger anchor id.
    #[must_use]
    pub fn trigger() -> Self {
        Self(TRIGGER_BLOCK_ID.to_owned())
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = BlockId::generate();
        let b = BlockId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn anchor_ids_are_fixed() {
        assert_eq!(BlockId::system().as_str(), "system-node-root");
        assert_eq!(BlockId::trigger().as_str(), "trigger-node-root");
        assert_eq!(BlockId::system(), BlockId::from(SYSTEM_BLOCK_ID));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = BlockId::from("node_7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"node_7\"");
        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn displays_inner_value() {
        assert_eq!(BlockId::from("abc").to_string(), "abc");
    }
}
