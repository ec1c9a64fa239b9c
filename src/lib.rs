//! Agenda documents - grouping and document generation for meeting agendas
//!
//! The engine takes an ordered list of agenda entries, collapses runs of
//! same-kind container entries into labeled groups, writes the agenda as a
//! Markdown dialect with a two-column roles grid, and parses that dialect
//! back into render blocks. All of it is pure and synchronous; file and
//! CLI concerns live in [`storage`] and [`cli`].

pub mod domain;
pub mod dialect;
pub mod storage;
pub mod cli;

pub use dialect::{generate, parse, render_html, RenderBlock, StyleTable};
pub use domain::{flatten, group, total_minutes, AgendaEntry, GroupedEntry, MeetingMeta};
