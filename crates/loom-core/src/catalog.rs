//! Behavior catalog keyed by [`BlockKind`].
//!
//! Per-kind behavior (category, display defaults, pairing rule, which
//! fields the editing surface exposes) lives in one static table rather
//! than methods scattered across variants. The table is the single source
//! of truth for the block library shown by the editing surface and for the
//! auto-pairing the workbench performs.

use serde::{Deserialize, Serialize};

use crate::block::BlockKind;

/// Which part of the canvas a kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindCategory {
    /// Fixed structural block, created once at initialization, undeletable.
    Anchor,
    /// Lives inside the System container; excluded from the history chain.
    Definition,
    /// Participates in the sequenced conversation history.
    History,
}

/// Static behavior profile for one block kind.
#[derive(Debug)]
pub struct KindProfile {
    /// The kind this profile describes.
    pub kind: BlockKind,
    /// Structural category.
    pub category: KindCategory,
    /// Default display name for new blocks.
    pub display_name: &'static str,
    /// One-line summary shown in the block library.
    pub summary: &'static str,
    /// Default text payload for new blocks.
    pub default_content: &'static str,
    /// Kind that must immediately follow this one in the chain, if any.
    pub companion: Option<BlockKind>,
    /// Whether the editing surface exposes a description field.
    pub has_description: bool,
}

/// One profile per kind, in [`BlockKind::ALL`] order.
static PROFILES: [KindProfile; 19] = [
    KindProfile {
        kind: BlockKind::SystemContainer,
        category: KindCategory::Anchor,
        display_name: "System Prompt",
        summary: "Root container for system instructions and definitions.",
        default_content:
            "You are a helpful AI assistant with access to the following tools and agents.",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::TriggerAgent,
        category: KindCategory::Anchor,
        display_name: "Trigger Agent (User Input)",
        summary: "Conversation-initiating user input slot.",
        default_content: "User: {{user_query}}",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::ToolDef,
        category: KindCategory::Definition,
        display_name: "Tool Definition",
        summary: "Define a tool the agent can use.",
        default_content: "Name: \nDescription: ",
        companion: None,
        has_description: true,
    },
    KindProfile {
        kind: BlockKind::SubAgentDef,
        category: KindCategory::Definition,
        display_name: "Sub-Agent Definition",
        summary: "Define a specialized sub-agent persona.",
        default_content: "Name: \nPersona: ",
        companion: None,
        has_description: true,
    },
    KindProfile {
        kind: BlockKind::MCPDef,
        category: KindCategory::Definition,
        display_name: "MCP Server",
        summary: "Connect a Model Context Protocol server.",
        default_content: "Server Name: \nURI: ",
        companion: None,
        has_description: true,
    },
    KindProfile {
        kind: BlockKind::MemoryTool,
        category: KindCategory::Definition,
        display_name: "Memory Manager",
        summary: "Give the agent persistent memory.",
        default_content: "Store: \nRecall: ",
        companion: None,
        has_description: true,
    },
    KindProfile {
        kind: BlockKind::FileSystemBashDef,
        category: KindCategory::Definition,
        display_name: "File System & Bash",
        summary: "Grant file-system and shell access.",
        default_content: "Root: \nShell: ",
        companion: None,
        has_description: true,
    },
    KindProfile {
        kind: BlockKind::UserMessage,
        category: KindCategory::History,
        display_name: "User Message",
        summary: "Inject a user message into history.",
        default_content: "User: ",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::AgentResponse,
        category: KindCategory::History,
        display_name: "Agent Response",
        summary: "Plain text reasoning or response.",
        default_content: "Agent: ",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::ToolCall,
        category: KindCategory::History,
        display_name: "Tool Call",
        summary: "Simulate the agent calling a tool.",
        default_content: "Call: {{tool_name}}(params)",
        companion: Some(BlockKind::ToolResult),
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::ToolResult,
        category: KindCategory::History,
        display_name: "Tool Result",
        summary: "Simulated output of a tool call.",
        default_content: "Result: ...",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::MCPCall,
        category: KindCategory::History,
        display_name: "MCP Call",
        summary: "Simulate a call to an MCP server.",
        default_content: "MCP Call: {{server_name}}/{{tool_name}}",
        companion: Some(BlockKind::MCPResult),
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::MCPResult,
        category: KindCategory::History,
        display_name: "MCP Result",
        summary: "Simulated output of an MCP call.",
        default_content: "Result: ...",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::FileSystemBashCall,
        category: KindCategory::History,
        display_name: "File System / Bash Call",
        summary: "Simulate a shell or file-system action.",
        default_content: "Exec: {{command}}",
        companion: Some(BlockKind::FileSystemBashResult),
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::FileSystemBashResult,
        category: KindCategory::History,
        display_name: "File System / Bash Result",
        summary: "Simulated output of a shell action.",
        default_content: "Result: ...",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::SubAgentCall,
        category: KindCategory::History,
        display_name: "Sub-Agent Call",
        summary: "Hand off control to a sub-agent.",
        default_content: "Handoff -> {{agent_name}}",
        companion: Some(BlockKind::SubAgentResponse),
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::SubAgentResponse,
        category: KindCategory::History,
        display_name: "Sub-Agent Response",
        summary: "Response returned by a sub-agent.",
        default_content: "Response: ...",
        companion: None,
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::ImplementationPlan,
        category: KindCategory::History,
        display_name: "Implementation Plan",
        summary: "Prunes context and resets focus.",
        default_content: "Tool Call: create_implementation_plan()",
        companion: Some(BlockKind::AutoApprove),
        has_description: false,
    },
    KindProfile {
        kind: BlockKind::AutoApprove,
        category: KindCategory::History,
        display_name: "Auto Approve",
        summary: "System flag to auto-approve next step.",
        default_content: "<system_note>User Auto-Approved</system_note>",
        companion: None,
        has_description: false,
    },
];

impl BlockKind {
    /// Look up this kind's static behavior profile.
    #[must_use]
    pub fn profile(self) -> &'static KindProfile {
        &PROFILES[self as usize]
    }

    /// Structural category of this kind.
    #[must_use]
    pub fn category(self) -> KindCategory {
        self.profile().category
    }

    /// Kind that must immediately follow this one in the chain, if any.
    #[must_use]
    pub fn companion(self) -> Option<BlockKind> {
        self.profile().companion
    }

    /// Whether blocks of this kind live inside the System container.
    #[must_use]
    pub fn is_definition(self) -> bool {
        self.category() == KindCategory::Definition
    }
}

/// Iterate every kind profile, in declaration order.
pub fn catalog() -> impl Iterator<Item = &'static KindProfile> {
    PROFILES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_aligned_with_kind_order() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.profile().kind, kind, "misaligned profile for {kind:?}");
        }
    }

    #[test]
    fn exactly_two_anchors() {
        let anchors: Vec<_> = catalog()
            .filter(|p| p.category == KindCategory::Anchor)
            .map(|p| p.kind)
            .collect();
        assert_eq!(
            anchors,
            vec![BlockKind::SystemContainer, BlockKind::TriggerAgent]
        );
    }

    #[test]
    fn definitions_expose_description() {
        for profile in catalog() {
            assert_eq!(
                profile.has_description,
                profile.category == KindCategory::Definition,
                "{:?}",
                profile.kind
            );
        }
    }

    #[test]
    fn companions_pair_calls_with_results() {
        assert_eq!(
            BlockKind::ToolCall.companion(),
            Some(BlockKind::ToolResult)
        );
        assert_eq!(BlockKind::MCPCall.companion(), Some(BlockKind::MCPResult));
        assert_eq!(
            BlockKind::FileSystemBashCall.companion(),
            Some(BlockKind::FileSystemBashResult)
        );
        assert_eq!(
            BlockKind::SubAgentCall.companion(),
            Some(BlockKind::SubAgentResponse)
        );
        assert_eq!(
            BlockKind::ImplementationPlan.companion(),
            Some(BlockKind::AutoApprove)
        );
    }

    #[test]
    fn companions_are_history_kinds() {
        for profile in catalog() {
            if let Some(companion) = profile.companion {
                assert_eq!(companion.category(), KindCategory::History);
                assert!(companion.companion().is_none(), "companion chains");
            }
        }
    }

    #[test]
    fn anchors_and_results_have_no_companion() {
        assert!(BlockKind::TriggerAgent.companion().is_none());
        assert!(BlockKind::ToolResult.companion().is_none());
        assert!(BlockKind::AutoApprove.companion().is_none());
    }
}
