//! Error types for workbench mutations.
//!
//! The pure engine functions (sequence, prune, assemble, diff) are total
//! and never fail; errors arise only from the mutable workbench surface.

use thiserror::Error;

use crate::ids::BlockId;

/// Errors returned by workbench operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoomError {
    /// The referenced block does not exist.
    #[error("unknown block: {id}")]
    UnknownBlock {
        /// Id that failed to resolve.
        id: BlockId,
    },

    /// The block is a locked anchor and refuses the operation.
    #[error("block {id} is locked")]
    LockedBlock {
        /// Id of the locked anchor.
        id: BlockId,
    },

    /// Definition blocks cannot join the sequencing chain.
    #[error("definition block {id} cannot be chained")]
    DefinitionNotChainable {
        /// Id of the definition block.
        id: BlockId,
    },
}

/// Result alias for workbench operations.
pub type Result<T> = std::result::Result<T, LoomError>;
