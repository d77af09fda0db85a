//! # loom-diff
//!
//! Diffing for prompt review.
//!
//! - **Line differ**: [`lines::diff_lines`] — classic LCS alignment over
//!   newline-split text, emitting `{value, added?, removed?}` entries in
//!   document order; [`lines::render`] formats them as `+`/`-`/` ` rows
//! - **Version differ**: [`version::diff_versions`] — layers map/set
//!   comparison over the line differ to compare two saved
//!   [`loom_core::version::PromptVersion`] records field by field
//!
//! Both are pure: fresh output structures, no input mutation, safe to
//! recompute on every comparison request.
//!
//! ## Crate Position
//!
//! Depends on: loom-core. Depended on by: the `loom` binary.

#![deny(unsafe_code)]

pub mod lines;
pub mod version;

// Re-export main public API
pub use lines::{DiffLine, diff_lines, render};
pub use version::{ChangeStatus, RuleDiff, SettingsDiff, TagDiff, VersionDiff, diff_versions};
