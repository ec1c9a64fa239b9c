//! Backfill of cached agenda documents
//!
//! Regenerates the stored document for every agenda file in a directory.
//! Run after any change to the dialect so stored documents match the
//! current grammar.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::dialect;
use crate::storage::{is_agenda_file, AgendaFile, Config, DocumentStore, WriteOutcome};

#[derive(Debug, Default, Serialize)]
struct BackfillReport {
    created: Vec<String>,
    updated: Vec<String>,
    unchanged: usize,
    skipped: Vec<String>,
    failed: Vec<String>,
    dry_run: bool,
}

/// Collects agenda files in a directory, sorted by path
fn agenda_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if is_agenda_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

enum BackfillOutcome {
    Written(WriteOutcome),
    /// Agenda has no entries yet; there is nothing to cache
    Skipped,
}

fn backfill_one(store: &DocumentStore, path: &Path, dry_run: bool) -> Result<BackfillOutcome> {
    let (meta, entries) = AgendaFile::load(path)?.into_entries();
    if entries.is_empty() {
        return Ok(BackfillOutcome::Skipped);
    }

    let document = dialect::generate(&meta, &entries);
    let outcome = if dry_run {
        store.plan(path, &document)?
    } else {
        store.write(path, &document)?
    };
    Ok(BackfillOutcome::Written(outcome))
}

pub fn run(output: &Output, config: &Config, dir: &Path, dry_run: bool) -> Result<()> {
    let store = DocumentStore::new(config.local.backfill.output_extension.as_str());
    let files = agenda_files(dir)?;
    output.verbose_ctx("backfill", &format!("Found {} agenda files", files.len()));

    let mut report = BackfillReport {
        dry_run,
        ..Default::default()
    };

    // Document path -> agenda file that owns it
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();

    for path in &files {
        let name = path.display().to_string();

        let document = store.document_path(path);
        if let Some(owner) = owners.get(&document) {
            output.error(&format!(
                "{}: document {} is already generated from {}",
                name,
                document.display(),
                owner.display()
            ));
            report.failed.push(name);
            continue;
        }
        owners.insert(document, path);

        match backfill_one(&store, path, dry_run) {
            Ok(BackfillOutcome::Written(WriteOutcome::Created)) => report.created.push(name),
            Ok(BackfillOutcome::Written(WriteOutcome::Updated)) => report.updated.push(name),
            Ok(BackfillOutcome::Written(WriteOutcome::Unchanged)) => report.unchanged += 1,
            Ok(BackfillOutcome::Skipped) => {
                output.verbose_ctx("backfill", &format!("Skipping {}: no agenda entries", name));
                report.skipped.push(name);
            }
            Err(e) => {
                output.error(&format!("{}: {:#}", name, e));
                report.failed.push(name);
            }
        }
    }

    if output.is_json() {
        output.data(&report);
    } else {
        let verb = if dry_run { "Would write" } else { "Wrote" };
        for name in report.created.iter().chain(&report.updated) {
            println!("{} {}", verb, store.document_path(Path::new(name)).display());
        }
        output.success(&format!(
            "Backfill complete: {} created, {} updated, {} unchanged, {} skipped, {} failed",
            report.created.len(),
            report.updated.len(),
            report.unchanged,
            report.skipped.len(),
            report.failed.len()
        ));
    }

    if !report.failed.is_empty() {
        anyhow::bail!("{} agenda file(s) failed to backfill", report.failed.len());
    }

    Ok(())
}
