//! Transcript assembly: system content, definitions, pruned history.
//!
//! The assembled string is the exact value offered for copy and for
//! save-as-prompt — no trimming, no escaping, no truncation. Identical
//! inputs always produce the identical string, so callers may memoize on a
//! structural hash of blocks + edges.

use std::fmt::Write;

use loom_core::block::Block;
use loom_core::graph::SequenceEdge;
use loom_core::ids::BlockId;

use crate::prune::prune;
use crate::sequence::sequence;

/// Section header introducing the definition bullets.
const DEFINITIONS_HEADER: &str = "\n\n### Available Tools & Agents:\n";

/// Section header introducing the history rows.
const HISTORY_HEADER: &str = "\n\n### Conversation History:\n";

/// Render the full block graph into one flat transcript string.
///
/// Layout:
///
/// 1. The System container's raw content (empty when the container is
///    missing — degraded, not fatal).
/// 2. If any definitions exist, [`DEFINITIONS_HEADER`] followed by one
///    bullet per definition (`- **name**: description`), with an indented
///    `Usage:` line when the definition's content is non-empty. A missing
///    or empty description renders as `No description`.
/// 3. The sequenced-then-pruned history: if non-empty,
///    [`HISTORY_HEADER`] followed by each block's raw content, one row per
///    block. The Trigger's own content row is included — the same root
///    rule the sequencer applies.
#[must_use]
pub fn assemble(blocks: &[Block], edges: &[SequenceEdge]) -> String {
    let system_id = BlockId::system();
    let mut prompt = blocks
        .iter()
        .find(|b| b.id == system_id)
        .map(|b| b.content.clone())
        .unwrap_or_default();

    let definitions: Vec<&Block> = blocks.iter().filter(|b| b.is_definition()).collect();
    if !definitions.is_empty() {
        prompt.push_str(DEFINITIONS_HEADER);
        for def in definitions {
            let description = match def.description.as_deref() {
                Some(d) if !d.is_empty() => d,
                _ => "No description",
            };
            let _ = write!(prompt, "\n- **{}**: {description}", def.name);
            if !def.content.is_empty() {
                let _ = write!(prompt, "\n  Usage: {}", def.content);
            }
        }
    }

    let history = prune(sequence(blocks, edges));
    if !history.is_empty() {
        prompt.push_str(HISTORY_HEADER);
        for block in &history {
            prompt.push('\n');
            prompt.push_str(&block.content);
        }
    }

    prompt
}
