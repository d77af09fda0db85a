//! Context pruning around the Implementation Plan marker.
//!
//! An Implementation Plan block signals that the agent's working context
//! resets: everything between the conversation trigger and the plan is
//! irrelevant to replay. The portion already visible before the trigger is
//! kept, as is the plan itself and everything after it.

use loom_core::block::{Block, BlockKind};

/// Elide the history between the trigger and the first Implementation Plan.
///
/// Locates the first [`BlockKind::ImplementationPlan`] in the sequence and
/// the last [`BlockKind::TriggerAgent`]. When the trigger occurs strictly
/// before the plan, the result keeps every block up to and including the
/// trigger, drops everything strictly between trigger and plan, and keeps
/// the plan through the end. In every other case — no plan, no trigger, or
/// the plan at or before the trigger — the sequence is returned unchanged.
///
/// Only one pass is performed; with several plan blocks, only the first is
/// a cut point.
#[must_use]
pub fn prune(sequence: Vec<Block>) -> Vec<Block> {
    let Some(plan) = sequence
        .iter()
        .position(|b| b.kind == BlockKind::ImplementationPlan)
    else {
        return sequence;
    };
    let Some(trigger) = sequence
        .iter()
        .rposition(|b| b.kind == BlockKind::TriggerAgent)
    else {
        return sequence;
    };
    if plan <= trigger {
        return sequence;
    }

    sequence
        .into_iter()
        .enumerate()
        .filter_map(|(i, block)| (i <= trigger || i >= plan).then_some(block))
        .collect()
}
