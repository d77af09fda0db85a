//! # loom-graph
//!
//! The Loom assembly engine: turns a block/edge graph into a flat
//! transcript.
//!
//! - **Sequencer**: [`sequence::sequence`] walks sequencing edges from the
//!   Trigger anchor into an ordered history list
//! - **Pruner**: [`prune::prune`] elides history between the trigger and an
//!   Implementation Plan marker (context-window reset)
//! - **Assembler**: [`assemble::assemble`] renders system content, tool and
//!   agent definitions, and the pruned history into one string
//! - **Workbench**: [`workbench::Workbench`] mutable working-session state
//!   driven by the external editing surface (merge-patch, auto-pairing,
//!   locked anchors)
//!
//! Sequencing is not commutative with pruning: the assembler always runs
//! the sequencer first, then the pruner, then concatenates.
//!
//! ## Crate Position
//!
//! Depends on: loom-core. Depended on by: the `loom` binary.

#![deny(unsafe_code)]

pub mod assemble;
pub mod prune;
pub mod sequence;
pub mod workbench;

// Re-export main public API
pub use assemble::assemble;
pub use prune::prune;
pub use sequence::sequence;
pub use workbench::Workbench;
