//! Line-aligned LCS diff.
//!
//! Computes the classic O(n·m) dynamic-programming alignment between two
//! text blobs split on `'\n'`. Adequate for prompt-sized documents (low
//! thousands of lines); a caller needing large-document scalability should
//! substitute a patience/Myers diff.

use serde::{Deserialize, Serialize};

/// One aligned line of a diff.
///
/// At most one of `added`/`removed` is set; an unmarked entry is common to
/// both sides. Serialization skips unset flags, so the JSON shape is
/// `{value, added?, removed?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// The line text, without its terminating newline.
    pub value: String,
    /// Present only in the right-hand (newer) input.
    #[serde(default, skip_serializing_if = "is_false")]
    pub added: bool,
    /// Present only in the left-hand (older) input.
    #[serde(default, skip_serializing_if = "is_false")]
    pub removed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
fn is_false(flag: &bool) -> bool {
    !*flag
}

impl DiffLine {
    /// A line common to both inputs.
    #[must_use]
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: false,
        }
    }

    /// A line present only in the right-hand input.
    #[must_use]
    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: true,
            removed: false,
        }
    }

    /// A line present only in the left-hand input.
    #[must_use]
    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: true,
        }
    }
}

/// Diff two text blobs line by line.
///
/// Inputs are split on `'\n'`, so an empty input contributes a single
/// empty-string line (standard split semantics) — `diff_lines("", "")`
/// yields one unmarked empty entry, not an empty list.
///
/// The alignment table holds the LCS length of each prefix pair; the
/// backtrack from the far corner prefers emitting an added entry when
/// `table[i][j-1] >= table[i-1][j]`. That tie-break is load-bearing:
/// changing it reorders replacement runs and shifts which side of an
/// ambiguous alignment gets marked.
#[must_use]
pub fn diff_lines(a: &str, b: &str) -> Vec<DiffLine> {
    let lines_a: Vec<&str> = a.split('\n').collect();
    let lines_b: Vec<&str> = b.split('\n').collect();
    let n = lines_a.len();
    let m = lines_b.len();

    let mut table = vec![vec![0u32; m + 1]; n + 1];
    for (i, line_a) in lines_a.iter().enumerate() {
        for (j, line_b) in lines_b.iter().enumerate() {
            table[i + 1][j + 1] = if line_a == line_b {
                table[i][j] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    // Entries come out back-to-front during the backtrack.
    let mut diff = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && lines_a[i - 1] == lines_b[j - 1] {
            diff.push(DiffLine::unchanged(lines_a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            diff.push(DiffLine::added(lines_b[j - 1]));
            j -= 1;
        } else {
            diff.push(DiffLine::removed(lines_a[i - 1]));
            i -= 1;
        }
    }
    diff.reverse();
    diff
}

/// Render a diff as `+`/`-`/` ` prefixed rows, one line per entry.
#[must_use]
pub fn render(diff: &[DiffLine]) -> String {
    let mut out = String::new();
    for line in diff {
        let prefix = if line.added {
            '+'
        } else if line.removed {
            '-'
        } else {
            ' '
        };
        out.push(prefix);
        out.push_str(&line.value);
        out.push('\n');
    }
    out
}
