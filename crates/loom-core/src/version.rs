//! Saved prompt version records consumed by the version differ.
//!
//! The storage layer that produces these records is an external
//! collaborator; this module only fixes the wire shape. Deserialization is
//! lenient: absent text fields become empty strings and absent lists become
//! empty lists, so diffing never fails on a sparse record.

use serde::{Deserialize, Serialize};

/// A tagged rule line attached to a version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Stable rule id; the differ matches rules across versions by id.
    pub id: String,
    /// Rule text.
    pub text: String,
}

impl Rule {
    /// Convenience constructor.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One saved version of a prompt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptVersion {
    /// Version ordinal.
    pub version: u32,
    /// Assembled transcript text.
    #[serde(default)]
    pub content: String,
    /// System instructions text.
    #[serde(default)]
    pub system_instructions: String,
    /// Ordered rule list.
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Order-insensitive label set.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sampling temperature (compared by inequality, not diffed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling parameter (compared by inequality, not diffed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Opaque evaluation scalar (compared by inequality, not diffed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<String>,
    /// ISO 8601 creation time, stamped by [`PromptVersion::new`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PromptVersion {
    /// Create an empty version record stamped with the current time.
    #[must_use]
    pub fn new(version: u32) -> Self {
        Self {
            version,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            ..Self::default()
        }
    }
}
