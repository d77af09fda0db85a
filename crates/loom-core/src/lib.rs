//! # loom-core
//!
//! Foundation types for the Loom prompt engine.
//!
//! This crate provides the shared vocabulary that the other Loom crates
//! depend on:
//!
//! - **Branded IDs**: [`ids::BlockId`] newtype, plus the fixed anchor ids
//! - **Blocks**: [`block::Block`], the 19-variant [`block::BlockKind`] tag,
//!   and [`block::BlockPatch`] merge-patches
//! - **Catalog**: [`catalog::KindProfile`] behavior table keyed by kind
//! - **Graph**: [`graph::SequenceEdge`] and the [`graph::GraphDocument`]
//!   wire format
//! - **Versions**: [`version::PromptVersion`] saved-prompt records
//! - **Errors**: [`errors::LoomError`] hierarchy via `thiserror`
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `loom-graph`, `loom-diff`, and the
//! `loom` binary.

#![deny(unsafe_code)]

pub mod block;
pub mod catalog;
pub mod errors;
pub mod graph;
pub mod ids;
pub mod version;
