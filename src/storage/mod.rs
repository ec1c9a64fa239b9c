//! # Storage Layer
//!
//! File boundaries for the agenda tool. The grouping and document engine
//! does no I/O; everything that touches disk lives here.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Agenda input | JSON or YAML | any `*.json` / `*.yaml` / `*.yml` |
//! | Cached document | Agenda dialect | next to its input, `*.md` by default |
//! | Config | TOML | `agenda.toml`, `~/.config/agenda/config.toml` |
//!
//! ## Key Types
//!
//! - [`AgendaFile`] - One meeting's metadata and entries
//! - [`DocumentStore`] - Atomic writes of generated documents
//! - [`Config`] - Local and global configuration

mod config;
mod document;
mod input;

pub use config::{
    BackfillConfig, Config, ConfigError, GlobalConfig, LocalConfig, OutputFormat, RenderConfig,
    LOCAL_CONFIG_FILE,
};
pub use document::{DocumentStore, WriteOutcome};
pub use input::{is_agenda_file, AgendaFile, InputError, InputFormat};
