//! Chain sequencing: reconstruct the linear history order from edges.
//!
//! The editing surface stores blocks in insertion order and at arbitrary
//! canvas positions; neither carries meaning. The only ordering source is
//! the sequencing edges, walked from the Trigger anchor.

use std::collections::HashMap;

use tracing::warn;

use loom_core::block::Block;
use loom_core::graph::SequenceEdge;
use loom_core::ids::BlockId;

/// Reconstruct the ordered history chain from the full block and edge sets.
///
/// Filters out the System container and every definition (blocks parented
/// to the container), then walks `source → target` edges starting at the
/// Trigger anchor. The Trigger itself is the first element of the result —
/// the same root rule the assembler uses when rendering history rows.
///
/// Termination is guaranteed: the walk stops on a missing next id, on a
/// next id that is not a known history block (dangling edges from deleted
/// nodes), and — defensively — after `blocks.len()` entries, which only a
/// malformed cycle can reach. A detected cycle logs a warning and returns
/// the truncated sequence rather than erroring.
///
/// When a source has several outgoing edges, the last-registered edge wins
/// (documented ambiguity; well-formed graphs never have two).
///
/// Pure function of its inputs; output blocks are fresh clones.
#[must_use]
pub fn sequence(blocks: &[Block], edges: &[SequenceEdge]) -> Vec<Block> {
    if blocks.is_empty() {
        return Vec::new();
    }

    let system = BlockId::system();
    let history: HashMap<&BlockId, &Block> = blocks
        .iter()
        .filter(|b| b.id != system && b.parent.as_ref() != Some(&system))
        .map(|b| (&b.id, b))
        .collect();

    let mut next: HashMap<&BlockId, &BlockId> = HashMap::new();
    for edge in edges {
        // Last-registered edge per source wins.
        let _ = next.insert(&edge.source, &edge.target);
    }

    let trigger = BlockId::trigger();
    let mut ordered = Vec::new();
    let mut current = Some(&trigger);

    while let Some(id) = current {
        let Some(block) = history.get(id) else {
            break;
        };
        if ordered.len() >= blocks.len() {
            warn!(block = %id, "cycle detected in sequencing edges, truncating chain");
            break;
        }
        ordered.push((*block).clone());
        current = next.get(id).copied();
    }

    ordered
}
