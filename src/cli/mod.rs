//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `group` | Grouped agenda view with rolled-up total minutes |
//! | `generate` | Agenda file → agenda document |
//! | `render` | Agenda document → render blocks or HTML |
//! | `backfill` | Regenerate cached documents for a directory |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output, including library
//! diagnostics. `AGENDA_LOG` overrides the log filter:
//! ```bash
//! AGENDA_LOG=agenda_doc=debug agenda render meeting.md
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod agenda;
mod backfill;

pub use app::{run, Cli, Commands, LOG_ENV};
pub use output::{Output, OutputFormat};
