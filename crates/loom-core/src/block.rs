//! The [`Block`] struct and its [`BlockKind`] type tag.
//!
//! A block is one unit of prompt content: a type tag, a display name, and a
//! free-form text payload. Definition blocks additionally carry a
//! description and a containment parent (the System container). The two
//! anchors (System container, Trigger) are locked against deletion.

use serde::{Deserialize, Serialize};

use crate::ids::BlockId;

/// Closed enumeration of block types.
///
/// Serialized as the PascalCase variant name, matching the storage format
/// of saved graph documents. Behavior (category, pairing rule, defaults) is
/// dispatched through the catalog table, not per-variant methods — see
/// [`crate::catalog`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Root container for system instructions and definitions.
    SystemContainer,
    /// Conversation-initiating marker (the user's live input slot).
    TriggerAgent,
    /// Tool definition.
    ToolDef,
    /// Sub-agent persona definition.
    SubAgentDef,
    /// Model Context Protocol server definition.
    MCPDef,
    /// Memory tool definition.
    MemoryTool,
    /// File-system / bash capability definition.
    FileSystemBashDef,
    /// Injected user message.
    UserMessage,
    /// Plain agent reasoning or response text.
    AgentResponse,
    /// Simulated tool invocation.
    ToolCall,
    /// Simulated tool output.
    ToolResult,
    /// Simulated MCP server invocation.
    MCPCall,
    /// Simulated MCP server output.
    MCPResult,
    /// Simulated file-system / bash invocation.
    FileSystemBashCall,
    /// Simulated file-system / bash output.
    FileSystemBashResult,
    /// Hand-off to a sub-agent.
    SubAgentCall,
    /// Sub-agent hand-off response.
    SubAgentResponse,
    /// Context-reset marker: prunes history between the trigger and itself.
    ImplementationPlan,
    /// Auto-approval marker paired with an implementation plan.
    AutoApprove,
}

impl BlockKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::SystemContainer,
        Self::TriggerAgent,
        Self::ToolDef,
        Self::SubAgentDef,
        Self::MCPDef,
        Self::MemoryTool,
        Self::FileSystemBashDef,
        Self::UserMessage,
        Self::AgentResponse,
        Self::ToolCall,
        Self::ToolResult,
        Self::MCPCall,
        Self::MCPResult,
        Self::FileSystemBashCall,
        Self::FileSystemBashResult,
        Self::SubAgentCall,
        Self::SubAgentResponse,
        Self::ImplementationPlan,
        Self::AutoApprove,
    ];
}

/// A unit of prompt content in the authoring graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Stable, unique id assigned at creation.
    pub id: BlockId,
    /// Type tag.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Display label.
    pub name: String,
    /// Free-form text payload, rendered verbatim into the transcript.
    pub content: String,
    /// Description, used only by definition-category blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// True for the two structural anchors; locked blocks refuse deletion.
    #[serde(default)]
    pub is_locked: bool,
    /// Containment parent (the System container) — never a sequencing
    /// relation. Set only on definition blocks.
    #[serde(rename = "parentNode", skip_serializing_if = "Option::is_none")]
    pub parent: Option<BlockId>,
}

impl Block {
    /// Create a block with a freshly generated id.
    #[must_use]
    pub fn new(kind: BlockKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(BlockId::generate(), kind, name, content)
    }

    /// Create a block with a caller-supplied id (anchors, tests, imports).
    #[must_use]
    pub fn with_id(
        id: BlockId,
        kind: BlockKind,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            content: content.into(),
            description: None,
            is_locked: false,
            parent: None,
        }
    }

    /// Set the containment parent (builder-style).
    #[must_use]
    pub fn with_parent(mut self, parent: BlockId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Mark the block as locked (builder-style).
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Whether this block lives inside the System container.
    #[must_use]
    pub fn is_definition(&self) -> bool {
        self.parent.as_ref().is_some_and(|p| *p == BlockId::system())
    }

    /// Merge a partial update into this block.
    ///
    /// Present patch fields overwrite; absent fields are untouched. A patch
    /// cannot clear `description` back to `None` — callers set an empty
    /// string instead, mirroring the editing surface.
    pub fn apply(&mut self, patch: BlockPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// A partial update merged into a block by [`Block::apply`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    /// New display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New text payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BlockPatch {
    /// Patch only the name.
    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch only the content.
    #[must_use]
    pub fn content(value: impl Into<String>) -> Self {
        Self {
            content: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch only the description.
    #[must_use]
    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }
}
