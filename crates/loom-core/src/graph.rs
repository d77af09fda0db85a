//! Sequencing edges and the saved graph document format.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockKind};
use crate::ids::BlockId;

/// A directed sequencing relation: `source`'s transcript entry precedes
/// `target`'s.
///
/// Well-formed graphs give each block at most one outgoing edge. When
/// duplicates exist, the sequencer keeps the last-registered edge per
/// source (documented last-write-wins ambiguity).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceEdge {
    /// Edge id, stable for the edge's lifetime.
    pub id: String,
    /// Preceding block.
    pub source: BlockId,
    /// Following block.
    pub target: BlockId,
}

impl SequenceEdge {
    /// Create an edge with the conventional `e-{source}-{target}` id.
    #[must_use]
    pub fn link(source: BlockId, target: BlockId) -> Self {
        Self {
            id: format!("e-{source}-{target}"),
            source,
            target,
        }
    }
}

/// The block/edge collections exchanged with external surfaces.
///
/// This is the JSON shape the editing surface persists and the CLI reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    /// All blocks in the session, including anchors and definitions.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// All sequencing edges.
    #[serde(default)]
    pub edges: Vec<SequenceEdge>,
}

impl GraphDocument {
    /// The initial two-anchor state of a fresh working session.
    ///
    /// Exactly one System container and one Trigger, both locked, joined by
    /// the decorative system→trigger edge.
    #[must_use]
    pub fn seeded() -> Self {
        let system_profile = BlockKind::SystemContainer.profile();
        let trigger_profile = BlockKind::TriggerAgent.profile();
        let system = Block::with_id(
            BlockId::system(),
            BlockKind::SystemContainer,
            system_profile.display_name,
            system_profile.default_content,
        )
        .locked();
        let trigger = Block::with_id(
            BlockId::trigger(),
            BlockKind::TriggerAgent,
            trigger_profile.display_name,
            trigger_profile.default_content,
        )
        .locked();

        Self {
            blocks: vec![system, trigger],
            edges: vec![SequenceEdge {
                id: "e-sys-trig".to_owned(),
                source: BlockId::system(),
                target: BlockId::trigger(),
            }],
        }
    }

    /// Find a block by id.
    #[must_use]
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == *id)
    }
}
