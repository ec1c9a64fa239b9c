//! # Agenda Dialect
//!
//! The document format produced for every meeting: Markdown plus one
//! extension, a two-column roles grid.
//!
//! ```text
//! # Sacrament Meeting
//! Sunday, March 3, 2024 at 10:00 AM
//!
//! ---
//!
//! :::roles-grid
//!
//! :::roles-column
//! **Presiding:** Bishop Young
//!
//! :::
//!
//! :::roles-column
//! **Chorister:** Sister Hall
//!
//! :::
//!
//! :::end-grid
//!
//! *Opening Hymn:* #301 — Love One Another
//! ```
//!
//! Documents are cached in storage, so the marker lines below must stay
//! stable; changing them means regenerating every stored document.
//!
//! ## Key Functions
//!
//! - [`generate`] - meeting metadata + entries → dialect text
//! - [`parse`] - dialect text → [`RenderBlock`]s
//! - [`render_html`] - dialect text → styled HTML

mod generate;
mod parse;
mod render;
mod style;

pub use generate::generate;
pub use parse::{parse, RenderBlock};
pub use render::{render_block, render_html, render_markdown};
pub use style::StyleTable;

pub const GRID_OPEN: &str = ":::roles-grid";
pub const GRID_CLOSE: &str = ":::end-grid";
pub const COLUMN_OPEN: &str = ":::roles-column";
pub const COLUMN_CLOSE: &str = ":::";
