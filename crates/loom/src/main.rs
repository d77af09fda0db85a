//! # loom
//!
//! Command-line front end for the Loom prompt engine: assemble a saved
//! block graph into a transcript, emit a seeded starter document, or
//! compare two saved prompt versions.

#![deny(unsafe_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use loom_core::graph::GraphDocument;
use loom_core::version::PromptVersion;
use loom_diff::{VersionDiff, diff_versions, render};
use loom_graph::assemble;

/// Loom prompt engine CLI.
#[derive(Parser, Debug)]
#[command(name = "loom", about = "Assemble and compare block-built prompts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a graph document into a flat transcript.
    Assemble {
        /// Path to the graph document JSON.
        graph: PathBuf,
    },
    /// Emit the seeded two-anchor starter document.
    Seed {
        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compare two saved prompt version records.
    Diff {
        /// Older version JSON.
        a: PathBuf,
        /// Newer version JSON.
        b: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assemble { graph } => {
            let doc = read_graph(&graph)?;
            println!("{}", assemble(&doc.blocks, &doc.edges));
        }
        Command::Seed { out } => {
            let json = serde_json::to_string_pretty(&GraphDocument::seeded())
                .context("Failed to serialize seeded document")?;
            match out {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Command::Diff { a, b } => {
            let older = read_version(&a)?;
            let newer = read_version(&b)?;
            print!("{}", render_report(&diff_versions(&older, &newer)));
        }
    }
    Ok(())
}

fn read_graph(path: &Path) -> Result<GraphDocument> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Invalid graph document: {}", path.display()))
}

fn read_version(path: &Path) -> Result<PromptVersion> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Invalid version record: {}", path.display()))
}

/// Format a version comparison as a sectioned text report.
fn render_report(diff: &VersionDiff) -> String {
    let mut report = String::new();

    report.push_str("## Content\n");
    report.push_str(&render(&diff.content));

    report.push_str("\n## System Instructions\n");
    report.push_str(&render(&diff.instructions));

    report.push_str("\n## Rules\n");
    if diff.rules.is_empty() {
        report.push_str("No rules in either version.\n");
    }
    for rule in &diff.rules {
        let prefix = match rule.status {
            loom_diff::ChangeStatus::Added => '+',
            loom_diff::ChangeStatus::Removed => '-',
            loom_diff::ChangeStatus::Common => ' ',
        };
        let _ = writeln!(report, "{prefix}{}", rule.text);
    }

    report.push_str("\n## Tags\n");
    for tag in &diff.tags.added {
        let _ = writeln!(report, "+{tag}");
    }
    for tag in &diff.tags.removed {
        let _ = writeln!(report, "-{tag}");
    }

    report.push_str("\n## Settings\n");
    for (label, changed) in [
        ("temperature", diff.settings.temperature_changed),
        ("topP", diff.settings.top_p_changed),
        ("evaluation", diff.settings.evaluation_changed),
    ] {
        let marker = if changed { "changed" } else { "unchanged" };
        let _ = writeln!(report, "{label}: {marker}");
    }

    report
}
