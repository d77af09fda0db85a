//! Mutable working-session state driven by the external editing surface.
//!
//! [`Workbench`] owns the block and edge collections for one authoring
//! session: it seeds the two anchors, applies merge-patches, appends blocks
//! at the chain tail with companion auto-pairing, refuses anchor deletion,
//! and exports the document the surface persists. All reads go through the
//! pure engine functions; the workbench itself never reorders or rewrites
//! block content.

use tracing::debug;

use loom_core::block::{Block, BlockKind, BlockPatch};
use loom_core::errors::{LoomError, Result};
use loom_core::graph::{GraphDocument, SequenceEdge};
use loom_core::ids::BlockId;

use crate::assemble::assemble;
use crate::prune::prune;
use crate::sequence::sequence;

// =============================================================================
// Workbench
// =============================================================================

/// One authoring session's blocks and edges.
#[derive(Clone, Debug)]
pub struct Workbench {
    blocks: Vec<Block>,
    edges: Vec<SequenceEdge>,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    /// Create a session seeded with the two locked anchors.
    #[must_use]
    pub fn new() -> Self {
        Self::from_document(GraphDocument::seeded())
    }

    /// Adopt an externally stored document.
    #[must_use]
    pub fn from_document(document: GraphDocument) -> Self {
        Self {
            blocks: document.blocks,
            edges: document.edges,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// All blocks, anchors and definitions included.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All sequencing edges.
    #[must_use]
    pub fn edges(&self) -> &[SequenceEdge] {
        &self.edges
    }

    /// Find a block by id.
    #[must_use]
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == *id)
    }

    /// Export the session as a storable document.
    #[must_use]
    pub fn document(&self) -> GraphDocument {
        GraphDocument {
            blocks: self.blocks.clone(),
            edges: self.edges.clone(),
        }
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Merge a partial update into a block.
    ///
    /// The engine applies whatever patch it is handed; rename protection
    /// for locked anchors is the editing surface's concern.
    pub fn patch(&mut self, id: &BlockId, patch: BlockPatch) -> Result<()> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id == *id)
            .ok_or_else(|| LoomError::UnknownBlock { id: id.clone() })?;
        block.apply(patch);
        Ok(())
    }

    /// Create a block of `kind` with its catalog defaults.
    ///
    /// Definition kinds are parented to the System container. History kinds
    /// are appended at the chain tail with a new sequencing edge, and when
    /// the catalog pairs the kind with a companion (tool call → tool
    /// result, implementation plan → auto approve), the companion is
    /// appended immediately after so the pair stays adjacent in the
    /// sequence. Anchor kinds are never duplicated; the existing anchor's
    /// id is returned.
    ///
    /// Returns the id of the primary new block.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let profile = kind.profile();

        if kind == BlockKind::SystemContainer {
            return BlockId::system();
        }
        if kind == BlockKind::TriggerAgent {
            return BlockId::trigger();
        }

        if kind.is_definition() {
            let block = Block::new(kind, profile.display_name, profile.default_content)
                .with_parent(BlockId::system());
            let id = block.id.clone();
            self.blocks.push(block);
            return id;
        }

        let tail = self.chain_tail();
        let block = Block::new(kind, profile.display_name, profile.default_content);
        let id = block.id.clone();
        self.blocks.push(block);
        if let Some(tail) = tail {
            self.edges.push(SequenceEdge::link(tail, id.clone()));
        }

        if let Some(companion_kind) = kind.companion() {
            let companion_profile = companion_kind.profile();
            let companion = Block::new(
                companion_kind,
                companion_profile.display_name,
                companion_profile.default_content,
            );
            self.edges
                .push(SequenceEdge::link(id.clone(), companion.id.clone()));
            self.blocks.push(companion);
        }

        id
    }

    /// Remove a block and every edge touching it.
    ///
    /// Locked anchors refuse deletion. Edges into the removed block become
    /// nothing; a chain severed this way simply ends early until the
    /// surface reconnects it.
    pub fn remove_block(&mut self, id: &BlockId) -> Result<Block> {
        let index = self
            .blocks
            .iter()
            .position(|b| b.id == *id)
            .ok_or_else(|| LoomError::UnknownBlock { id: id.clone() })?;
        if self.blocks[index].is_locked {
            debug!(block = %id, "refusing to remove locked anchor");
            return Err(LoomError::LockedBlock { id: id.clone() });
        }

        self.edges
            .retain(|e| e.source != *id && e.target != *id);
        Ok(self.blocks.remove(index))
    }

    /// Add a sequencing edge between two existing blocks.
    ///
    /// Definition blocks never join the chain. A source that already has an
    /// outgoing edge keeps both at the collection level; the sequencer
    /// resolves the duplicate last-write-wins.
    pub fn connect(&mut self, source: &BlockId, target: &BlockId) -> Result<()> {
        let source_block = self
            .block(source)
            .ok_or_else(|| LoomError::UnknownBlock { id: source.clone() })?;
        if source_block.is_definition() {
            return Err(LoomError::DefinitionNotChainable {
                id: source.clone(),
            });
        }
        if self.block(target).is_none() {
            return Err(LoomError::UnknownBlock { id: target.clone() });
        }
        self.edges
            .push(SequenceEdge::link(source.clone(), target.clone()));
        Ok(())
    }

    /// Remove an edge by id. Returns whether anything was removed.
    pub fn disconnect(&mut self, edge_id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        self.edges.len() != before
    }

    /// Restore the seeded two-anchor state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ── Derived views ───────────────────────────────────────────────────

    /// Last reachable block of the chain, walking from the Trigger.
    ///
    /// Falls back to the most recently added block when the Trigger is
    /// missing (a degraded state the seeding normally prevents).
    #[must_use]
    pub fn chain_tail(&self) -> Option<BlockId> {
        sequence(&self.blocks, &self.edges)
            .last()
            .map(|b| b.id.clone())
            .or_else(|| self.blocks.last().map(|b| b.id.clone()))
    }

    /// The sequenced and pruned conversation history.
    #[must_use]
    pub fn history(&self) -> Vec<Block> {
        prune(sequence(&self.blocks, &self.edges))
    }

    /// Render the session into the final transcript string.
    #[must_use]
    pub fn assemble(&self) -> String {
        assemble(&self.blocks, &self.edges)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn anchor_count(bench: &Workbench, kind: BlockKind) -> usize {
        bench.blocks().iter().filter(|b| b.kind == kind).count()
    }

    // -- seeding --

    #[test]
    fn new_session_has_exactly_the_two_anchors() {
        let bench = Workbench::new();
        assert_eq!(bench.blocks().len(), 2);
        assert_eq!(anchor_count(&bench, BlockKind::SystemContainer), 1);
        assert_eq!(anchor_count(&bench, BlockKind::TriggerAgent), 1);
    }

    #[test]
    fn adding_an_anchor_kind_returns_the_existing_anchor() {
        let mut bench = Workbench::new();
        assert_eq!(bench.add_block(BlockKind::TriggerAgent), BlockId::trigger());
        assert_eq!(
            bench.add_block(BlockKind::SystemContainer),
            BlockId::system()
        );
        assert_eq!(bench.blocks().len(), 2);
    }

    // -- definitions --

    #[test]
    fn definitions_are_parented_to_the_system_container() {
        let mut bench = Workbench::new();
        let id = bench.add_block(BlockKind::ToolDef);
        let def = bench.block(&id).unwrap();
        assert_eq!(def.parent, Some(BlockId::system()));
        assert_eq!(def.name, "Tool Definition");
        assert_eq!(def.content, "Name: \nDescription: ");
        // Definitions never gain sequencing edges.
        assert!(bench.edges().iter().all(|e| e.source != id && e.target != id));
    }

    #[test]
    fn definitions_stay_out_of_history() {
        let mut bench = Workbench::new();
        let _ = bench.add_block(BlockKind::MCPDef);
        let history = bench.history();
        assert!(history.iter().all(|b| b.kind != BlockKind::MCPDef));
    }

    // -- chain appends --

    #[test]
    fn history_blocks_append_at_the_chain_tail() {
        let mut bench = Workbench::new();
        let first = bench.add_block(BlockKind::UserMessage);
        let second = bench.add_block(BlockKind::AgentResponse);

        let ids: Vec<BlockId> = bench.history().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec![BlockId::trigger(), first, second]);
    }

    #[test]
    fn tool_call_auto_pairs_with_a_result() {
        let mut bench = Workbench::new();
        let call = bench.add_block(BlockKind::ToolCall);

        let history = bench.history();
        let call_pos = history.iter().position(|b| b.id == call).unwrap();
        assert_eq!(history[call_pos + 1].kind, BlockKind::ToolResult);
        assert_eq!(history[call_pos + 1].content, "Result: ...");
    }

    #[test]
    fn implementation_plan_auto_pairs_with_auto_approve() {
        let mut bench = Workbench::new();
        let _ = bench.add_block(BlockKind::ImplementationPlan);

        let kinds: Vec<BlockKind> = bench.history().iter().map(|b| b.kind).collect();
        let plan = kinds
            .iter()
            .position(|k| *k == BlockKind::ImplementationPlan)
            .unwrap();
        assert_eq!(kinds[plan + 1], BlockKind::AutoApprove);
    }

    #[test]
    fn appends_continue_after_a_companion() {
        let mut bench = Workbench::new();
        let _ = bench.add_block(BlockKind::ToolCall);
        let next = bench.add_block(BlockKind::AgentResponse);
        // The new block lands after the auto-added ToolResult.
        let history = bench.history();
        assert_eq!(history.last().unwrap().id, next);
        assert_eq!(history[history.len() - 2].kind, BlockKind::ToolResult);
    }

    #[test]
    fn chain_tail_of_fresh_session_is_the_trigger() {
        let bench = Workbench::new();
        assert_eq!(bench.chain_tail(), Some(BlockId::trigger()));
    }

    // -- patching --

    #[test]
    fn patch_merges_into_existing_block() {
        let mut bench = Workbench::new();
        let id = bench.add_block(BlockKind::UserMessage);
        bench
            .patch(&id, BlockPatch::content("User: hello"))
            .unwrap();

        let block = bench.block(&id).unwrap();
        assert_eq!(block.content, "User: hello");
        assert_eq!(block.name, "User Message");
    }

    #[test]
    fn patch_unknown_block_errors() {
        let mut bench = Workbench::new();
        let missing = BlockId::from("nope");
        assert_matches!(
            bench.patch(&missing, BlockPatch::name("x")),
            Err(LoomError::UnknownBlock { .. })
        );
    }

    // -- removal --

    #[test]
    fn remove_block_drops_its_edges() {
        let mut bench = Workbench::new();
        let first = bench.add_block(BlockKind::UserMessage);
        let second = bench.add_block(BlockKind::AgentResponse);

        let removed = bench.remove_block(&first).unwrap();
        assert_eq!(removed.id, first);
        assert!(bench
            .edges()
            .iter()
            .all(|e| e.source != first && e.target != first));
        // Chain is severed: the second block is unreachable until
        // reconnected.
        assert!(bench.history().iter().all(|b| b.id != second));
    }

    #[test]
    fn anchors_refuse_deletion() {
        let mut bench = Workbench::new();
        assert_matches!(
            bench.remove_block(&BlockId::trigger()),
            Err(LoomError::LockedBlock { .. })
        );
        assert_matches!(
            bench.remove_block(&BlockId::system()),
            Err(LoomError::LockedBlock { .. })
        );
        assert_eq!(bench.blocks().len(), 2);
    }

    #[test]
    fn remove_unknown_block_errors() {
        let mut bench = Workbench::new();
        assert_matches!(
            bench.remove_block(&BlockId::from("ghost")),
            Err(LoomError::UnknownBlock { .. })
        );
    }

    // -- connecting --

    #[test]
    fn reconnect_after_removal_restores_the_chain() {
        let mut bench = Workbench::new();
        let first = bench.add_block(BlockKind::UserMessage);
        let second = bench.add_block(BlockKind::AgentResponse);
        let _ = bench.remove_block(&first).unwrap();

        bench.connect(&BlockId::trigger(), &second).unwrap();
        let ids: Vec<BlockId> = bench.history().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec![BlockId::trigger(), second]);
    }

    #[test]
    fn definitions_cannot_be_chain_sources() {
        let mut bench = Workbench::new();
        let def = bench.add_block(BlockKind::ToolDef);
        let msg = bench.add_block(BlockKind::UserMessage);
        assert_matches!(
            bench.connect(&def, &msg),
            Err(LoomError::DefinitionNotChainable { .. })
        );
    }

    #[test]
    fn connect_requires_both_endpoints() {
        let mut bench = Workbench::new();
        let ghost = BlockId::from("ghost");
        assert_matches!(
            bench.connect(&ghost, &BlockId::trigger()),
            Err(LoomError::UnknownBlock { .. })
        );
        assert_matches!(
            bench.connect(&BlockId::trigger(), &ghost),
            Err(LoomError::UnknownBlock { .. })
        );
    }

    #[test]
    fn disconnect_removes_by_edge_id() {
        let mut bench = Workbench::new();
        let id = bench.add_block(BlockKind::UserMessage);
        let edge_id = bench
            .edges()
            .iter()
            .find(|e| e.target == id)
            .unwrap()
            .id
            .clone();

        assert!(bench.disconnect(&edge_id));
        assert!(!bench.disconnect(&edge_id));
        assert!(bench.history().iter().all(|b| b.id != id));
    }

    // -- reset / export --

    #[test]
    fn reset_restores_the_seeded_state() {
        let mut bench = Workbench::new();
        let _ = bench.add_block(BlockKind::ToolDef);
        let _ = bench.add_block(BlockKind::UserMessage);
        bench.reset();

        assert_eq!(bench.blocks().len(), 2);
        assert_eq!(bench.edges().len(), 1);
    }

    #[test]
    fn document_round_trips_through_a_new_session() {
        let mut bench = Workbench::new();
        let _ = bench.add_block(BlockKind::ToolCall);
        let doc = bench.document();

        let adopted = Workbench::from_document(doc);
        assert_eq!(adopted.assemble(), bench.assemble());
    }
}
