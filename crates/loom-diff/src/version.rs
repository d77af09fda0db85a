//! Structured comparison of two saved prompt versions.
//!
//! Layers set/map comparison over the line differ: text fields get a line
//! diff, rule lists are matched by stable rule id, tags are compared as
//! sets, and the opaque sampling scalars are compared by simple
//! inequality.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use loom_core::version::PromptVersion;

use crate::lines::{DiffLine, diff_lines};

/// How a rule changed between two versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Present only in the newer version.
    Added,
    /// Present only in the older version.
    Removed,
    /// Present in both with identical text.
    Common,
}

/// One rule entry in a version comparison.
///
/// A rule whose text changed produces two entries with synthesized ids
/// (`{id}-removed`, `{id}-added`) so both remain individually addressable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDiff {
    /// Rule id, possibly suffixed for modified rules.
    pub id: String,
    /// Rule text on the relevant side.
    pub text: String,
    /// Change classification.
    pub status: ChangeStatus,
}

/// Tag membership changes between two versions.
///
/// Tags common to both versions are implied and appear in neither list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDiff {
    /// Tags in the newer version only, in that version's order.
    pub added: Vec<String>,
    /// Tags in the older version only, in that version's order.
    pub removed: Vec<String>,
}

/// Inequality flags for the opaque sampling scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDiff {
    /// Temperature differs between the versions.
    pub temperature_changed: bool,
    /// Top-p differs between the versions.
    pub top_p_changed: bool,
    /// Evaluation differs between the versions.
    pub evaluation_changed: bool,
}

/// Full comparison of two saved versions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    /// Line diff of the assembled transcript content.
    pub content: Vec<DiffLine>,
    /// Line diff of the system instructions.
    pub instructions: Vec<DiffLine>,
    /// Per-rule changes, in first-seen id order (older version's ids, then
    /// ids new in the newer version). Consumers should rely on per-id
    /// correctness, not cross-id ordering.
    pub rules: Vec<RuleDiff>,
    /// Tag membership changes.
    pub tags: TagDiff,
    /// Scalar inequality flags.
    pub settings: SettingsDiff,
}

/// Compare two saved prompt versions field by field.
///
/// Pure: neither input is mutated and every call allocates fresh output.
#[must_use]
#[allow(clippy::float_cmp)] // scalars are opaque config values compared by inequality
pub fn diff_versions(a: &PromptVersion, b: &PromptVersion) -> VersionDiff {
    let content = diff_lines(&a.content, &b.content);
    let instructions = diff_lines(&a.system_instructions, &b.system_instructions);

    let rules_a: IndexMap<&str, &str> = a
        .rules
        .iter()
        .map(|r| (r.id.as_str(), r.text.as_str()))
        .collect();
    let rules_b: IndexMap<&str, &str> = b
        .rules
        .iter()
        .map(|r| (r.id.as_str(), r.text.as_str()))
        .collect();

    let mut ids: IndexSet<&str> = rules_a.keys().copied().collect();
    ids.extend(rules_b.keys().copied());

    let mut rules = Vec::with_capacity(ids.len());
    for id in ids {
        match (rules_a.get(id).copied(), rules_b.get(id).copied()) {
            (Some(text), None) => rules.push(RuleDiff {
                id: id.to_owned(),
                text: text.to_owned(),
                status: ChangeStatus::Removed,
            }),
            (None, Some(text)) => rules.push(RuleDiff {
                id: id.to_owned(),
                text: text.to_owned(),
                status: ChangeStatus::Added,
            }),
            (Some(old), Some(new)) if old == new => rules.push(RuleDiff {
                id: id.to_owned(),
                text: old.to_owned(),
                status: ChangeStatus::Common,
            }),
            (Some(old), Some(new)) => {
                rules.push(RuleDiff {
                    id: format!("{id}-removed"),
                    text: old.to_owned(),
                    status: ChangeStatus::Removed,
                });
                rules.push(RuleDiff {
                    id: format!("{id}-added"),
                    text: new.to_owned(),
                    status: ChangeStatus::Added,
                });
            }
            (None, None) => {}
        }
    }

    let tags_a: IndexSet<&str> = a.tags.iter().map(String::as_str).collect();
    let tags_b: IndexSet<&str> = b.tags.iter().map(String::as_str).collect();
    let tags = TagDiff {
        added: b
            .tags
            .iter()
            .filter(|t| !tags_a.contains(t.as_str()))
            .cloned()
            .collect(),
        removed: a
            .tags
            .iter()
            .filter(|t| !tags_b.contains(t.as_str()))
            .cloned()
            .collect(),
    };

    let settings = SettingsDiff {
        temperature_changed: a.temperature != b.temperature,
        top_p_changed: a.top_p != b.top_p,
        evaluation_changed: a.evaluation != b.evaluation,
    };

    VersionDiff {
        content,
        instructions,
        rules,
        tags,
        settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::version::Rule;

    fn version(content: &str, instructions: &str) -> PromptVersion {
        PromptVersion {
            version: 1,
            content: content.into(),
            system_instructions: instructions.into(),
            ..PromptVersion::default()
        }
    }

    #[test]
    fn text_fields_use_the_line_differ() {
        let a = version("a\nb\nc", "Be brief.");
        let b = version("a\nx\nc", "Be brief.");
        let diff = diff_versions(&a, &b);

        assert_eq!(diff.content.len(), 4);
        assert!(diff.content.iter().any(|l| l.removed && l.value == "b"));
        assert!(diff.content.iter().any(|l| l.added && l.value == "x"));
        assert!(diff.instructions.iter().all(|l| !l.added && !l.removed));
    }

    #[test]
    fn modified_rule_emits_paired_entries() {
        let mut a = version("", "");
        a.rules = vec![Rule::new("r1", "no swearing")];
        let mut b = version("", "");
        b.rules = vec![
            Rule::new("r1", "no profanity"),
            Rule::new("r2", "be concise"),
        ];

        let diff = diff_versions(&a, &b);
        assert_eq!(diff.rules.len(), 3);
        assert!(diff.rules.contains(&RuleDiff {
            id: "r1-removed".into(),
            text: "no swearing".into(),
            status: ChangeStatus::Removed,
        }));
        assert!(diff.rules.contains(&RuleDiff {
            id: "r1-added".into(),
            text: "no profanity".into(),
            status: ChangeStatus::Added,
        }));
        assert!(diff.rules.contains(&RuleDiff {
            id: "r2".into(),
            text: "be concise".into(),
            status: ChangeStatus::Added,
        }));
    }

    #[test]
    fn unchanged_rule_is_common() {
        let mut a = version("", "");
        a.rules = vec![Rule::new("r1", "be kind")];
        let mut b = version("", "");
        b.rules = vec![Rule::new("r1", "be kind")];

        let diff = diff_versions(&a, &b);
        assert_eq!(
            diff.rules,
            vec![RuleDiff {
                id: "r1".into(),
                text: "be kind".into(),
                status: ChangeStatus::Common,
            }]
        );
    }

    #[test]
    fn dropped_rule_is_removed() {
        let mut a = version("", "");
        a.rules = vec![Rule::new("r1", "be kind"), Rule::new("r2", "cite sources")];
        let mut b = version("", "");
        b.rules = vec![Rule::new("r1", "be kind")];

        let diff = diff_versions(&a, &b);
        assert!(diff.rules.contains(&RuleDiff {
            id: "r2".into(),
            text: "cite sources".into(),
            status: ChangeStatus::Removed,
        }));
    }

    #[test]
    fn tag_sets_report_membership_changes() {
        let mut a = version("", "");
        a.tags = vec!["draft".into(), "v1".into()];
        let mut b = version("", "");
        b.tags = vec!["v1".into(), "reviewed".into()];

        let diff = diff_versions(&a, &b);
        assert_eq!(diff.tags.added, vec!["reviewed".to_owned()]);
        assert_eq!(diff.tags.removed, vec!["draft".to_owned()]);
    }

    #[test]
    fn common_tags_are_implied() {
        let mut a = version("", "");
        a.tags = vec!["v1".into()];
        let mut b = version("", "");
        b.tags = vec!["v1".into()];

        let diff = diff_versions(&a, &b);
        assert!(diff.tags.added.is_empty());
        assert!(diff.tags.removed.is_empty());
    }

    #[test]
    fn scalar_settings_compared_by_inequality() {
        let mut a = version("", "");
        a.temperature = Some(0.7);
        a.evaluation = Some("pass".into());
        let mut b = version("", "");
        b.temperature = Some(0.9);
        b.evaluation = Some("pass".into());

        let diff = diff_versions(&a, &b);
        assert!(diff.settings.temperature_changed);
        assert!(!diff.settings.top_p_changed);
        assert!(!diff.settings.evaluation_changed);
    }

    #[test]
    fn absent_scalar_differs_from_present() {
        let a = version("", "");
        let mut b = version("", "");
        b.top_p = Some(0.95);

        let diff = diff_versions(&a, &b);
        assert!(diff.settings.top_p_changed);
    }

    #[test]
    fn identical_versions_produce_a_quiet_diff() {
        let mut a = version("line", "sys");
        a.rules = vec![Rule::new("r1", "be kind")];
        a.tags = vec!["v1".into()];
        let b = a.clone();

        let diff = diff_versions(&a, &b);
        assert!(diff.content.iter().all(|l| !l.added && !l.removed));
        assert!(diff.rules.iter().all(|r| r.status == ChangeStatus::Common));
        assert_eq!(diff.tags, TagDiff::default());
        assert_eq!(diff.settings, SettingsDiff::default());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let mut a = version("a", "s");
        a.rules = vec![Rule::new("r1", "t")];
        let b = version("b", "s");
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = diff_versions(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
