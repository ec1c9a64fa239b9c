//! Agenda input files
//!
//! An agenda file holds one meeting: its metadata plus its entries. Entries
//! may be written in the neutral shape, as builder canvas items, or as
//! stored agenda rows; all three are merged into one entry list on load.
//!
//! ```yaml
//! meeting:
//!   title: Sacrament Meeting
//!   date: 2024-03-03
//!   time: "10:00"
//!   presiding: Bishop Young
//! entries:
//!   - id: e1
//!     order_index: 0
//!     kind: hymn
//!     title: Opening Hymn
//!     hymn_number: 301
//!     hymn_title: Love One Another
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AgendaEntry, BuilderItem, MeetingMeta, StoredRow};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read agenda file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported agenda file extension: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse agenda file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// File formats accepted for agenda input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detects the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            _ => None,
        }
    }
}

/// One meeting's agenda as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaFile {
    pub meeting: MeetingMeta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<AgendaEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub builder_items: Vec<BuilderItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stored_rows: Vec<StoredRow>,
}

impl AgendaFile {
    /// Reads and parses an agenda file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let format = InputFormat::from_path(path)
            .ok_or_else(|| InputError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, format).map_err(|message| InputError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses agenda content in the given format
    pub fn parse(content: &str, format: InputFormat) -> Result<Self, String> {
        match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Returns every entry in the neutral model
    ///
    /// Order across the three sources is settled later by `order_index`.
    pub fn into_entries(self) -> (MeetingMeta, Vec<AgendaEntry>) {
        let mut entries = self.entries;
        entries.extend(self.builder_items.into_iter().map(AgendaEntry::from));
        entries.extend(self.stored_rows.into_iter().map(AgendaEntry::from));
        (self.meeting, entries)
    }
}

/// Returns true if the path looks like an agenda input file
pub fn is_agenda_file(path: &Path) -> bool {
    path.is_file() && InputFormat::from_path(path).is_some()
}
