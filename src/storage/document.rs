//! Cached document storage
//!
//! Each agenda file gets a generated dialect document written next to it
//! (`sacrament.yaml` → `sacrament.md`). Writes are atomic (temp file +
//! rename) and skipped when the cached copy is already current.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Result of writing one cached document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Store for generated documents alongside their agenda files
pub struct DocumentStore {
    extension: String,
}

impl DocumentStore {
    /// Creates a store writing documents with the given extension
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Returns the cached document path for an agenda file
    pub fn document_path(&self, agenda_path: &Path) -> PathBuf {
        agenda_path.with_extension(&self.extension)
    }

    /// Reads the cached document, if one exists
    pub fn read(&self, agenda_path: &Path) -> Result<Option<String>> {
        let path = self.document_path(agenda_path);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Ok(Some(content))
    }

    /// Reports what [`DocumentStore::write`] would do, without writing
    pub fn plan(&self, agenda_path: &Path, content: &str) -> Result<WriteOutcome> {
        Ok(match self.read(agenda_path)? {
            None => WriteOutcome::Created,
            Some(existing) if existing == content => WriteOutcome::Unchanged,
            Some(_) => WriteOutcome::Updated,
        })
    }

    /// Writes the cached document atomically
    pub fn write(&self, agenda_path: &Path, content: &str) -> Result<WriteOutcome> {
        let outcome = self.plan(agenda_path, content)?;
        if outcome == WriteOutcome::Unchanged {
            return Ok(outcome);
        }

        let path = self.document_path(agenda_path);
        let temp_path = path.with_extension(format!("{}.tmp", self.extension));

        // Write to temp file first
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        // Atomic rename
        fs::rename(&temp_path, &path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(outcome)
    }
}
