//! Agenda CLI commands: group, generate, render

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::dialect::{self, RenderBlock};
use crate::domain::{self, AgendaEntry, GroupedEntry, MeetingMeta};
use crate::storage::{AgendaFile, Config};

fn load_agenda(output: &Output, file: &Path) -> Result<(MeetingMeta, Vec<AgendaEntry>)> {
    let agenda = AgendaFile::load(file)?;
    let (meta, entries) = agenda.into_entries();
    output.verbose_ctx(
        "load",
        &format!("Loaded '{}' with {} entries", meta.title, entries.len()),
    );
    Ok((meta, entries))
}

/// Shows the grouped agenda view
pub fn group(output: &Output, file: &Path) -> Result<()> {
    let (meta, entries) = load_agenda(output, file)?;
    let grouped = domain::group(entries);
    let total = domain::total_minutes(&grouped);

    if output.is_json() {
        output.data(&serde_json::json!({
            "meeting": meta.title,
            "nodes": grouped,
            "ids": domain::grouped_ids(&grouped),
            "total_minutes": total,
        }));
        return Ok(());
    }

    println!("{}", meta.title);
    println!("{:<20} {:<16} {:>7}  TITLE", "ID", "TYPE", "MINUTES");
    println!("{}", "-".repeat(70));

    for node in &grouped {
        match node {
            GroupedEntry::Single(entry) => {
                let minutes = entry
                    .duration_minutes
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:<16} {:>7}  {}",
                    entry.id,
                    entry.kind.as_str(),
                    minutes,
                    entry.title
                );
            }
            GroupedEntry::Group(group) => {
                let kind = format!("group ({})", group.members.len());
                println!(
                    "{:<20} {:<16} {:>7}  {}",
                    group.synthetic_id, kind, group.timebox_minutes, group.label
                );
                for member in &group.members {
                    println!("{:<20} {:<16} {:>7}  - {}", "", "", "", member.title);
                }
            }
        }
    }

    println!();
    println!("Total: {} minutes", total);
    Ok(())
}

/// Generates the agenda document
pub fn generate(output: &Output, file: &Path, out: Option<&Path>) -> Result<()> {
    let (meta, entries) = load_agenda(output, file)?;
    let document = dialect::generate(&meta, &entries);

    if let Some(path) = out {
        fs::write(path, &document)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        if output.is_json() {
            output.data(&serde_json::json!({
                "written": path.display().to_string(),
                "bytes": document.len(),
            }));
        } else {
            output.success(&format!("Wrote {}", path.display()));
        }
    } else if output.is_json() {
        output.data(&serde_json::json!({ "document": document }));
    } else {
        output.document(&document);
    }

    Ok(())
}

/// Parses an agenda document and shows its blocks (or HTML)
pub fn render(output: &Output, config: &Config, file: &Path, html: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read document: {}", file.display()))?;

    if html {
        let mut rendered = dialect::render_html(&text, config.styles());
        if config.local.render.wrap_document {
            rendered = format!("<div class=\"agenda-document\">\n{}</div>\n", rendered);
        }

        if output.is_json() {
            output.data(&serde_json::json!({ "html": rendered }));
        } else {
            output.document(&rendered);
        }
        return Ok(());
    }

    let blocks = dialect::parse(&text);
    output.verbose_ctx("render", &format!("Parsed {} blocks", blocks.len()));

    if output.is_json() {
        output.data(&blocks);
        return Ok(());
    }

    for (i, block) in blocks.iter().enumerate() {
        match block {
            RenderBlock::Grid { columns } => {
                println!("[{}] roles grid ({} columns)", i + 1, columns.len());
                for (c, column) in columns.iter().enumerate() {
                    println!("    column {}:", c + 1);
                    for line in column.lines() {
                        println!("      {}", line);
                    }
                }
            }
            RenderBlock::Standard { markdown } => {
                let lines = markdown.lines().filter(|l| !l.trim().is_empty()).count();
                println!("[{}] markdown ({} lines)", i + 1, lines);
            }
        }
    }

    Ok(())
}
