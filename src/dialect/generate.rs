//! Agenda document generation
//!
//! Serializes meeting metadata and agenda entries into the agenda dialect.
//! Every missing optional value has a placeholder (`TBD`, `*No items*`) or
//! is left out, so generation never fails.

use tracing::debug;

use super::{COLUMN_CLOSE, COLUMN_OPEN, GRID_CLOSE, GRID_OPEN};
use crate::domain::{non_blank, AgendaEntry, ChildItem, EntryKind, MeetingMeta, StructuralKind};

const PLACEHOLDER: &str = "TBD";
const EMPTY_CONTAINER: &str = "*No items*";
const DEFAULT_SPEAKER_TITLE: &str = "Speaker";

/// Generates the dialect document for a meeting
pub fn generate(meta: &MeetingMeta, entries: &[AgendaEntry]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", meta.title));
    lines.push(meta.schedule_line());
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    push_roles(&mut lines, meta);

    let mut sorted: Vec<&AgendaEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.order_index);

    for entry in &sorted {
        push_entry(&mut lines, entry);
    }

    let document = format!("{}\n", lines.join("\n").trim());
    debug!(
        entries = sorted.len(),
        roles = meta.has_roles(),
        bytes = document.len(),
        "generated agenda document"
    );
    document
}

/// Writes the roles grid, or nothing when every role is blank
fn push_roles(lines: &mut Vec<String>, meta: &MeetingMeta) {
    if !meta.has_roles() {
        return;
    }

    lines.push(GRID_OPEN.to_string());
    lines.push(String::new());

    for column in [meta.left_roles(), meta.right_roles()] {
        lines.push(COLUMN_OPEN.to_string());
        for (label, name) in column {
            lines.push(format!("**{}:** {}", label, name));
            lines.push(String::new());
        }
        lines.push(COLUMN_CLOSE.to_string());
        lines.push(String::new());
    }

    lines.push(GRID_CLOSE.to_string());
    lines.push(String::new());
}

fn push_entry(lines: &mut Vec<String>, entry: &AgendaEntry) {
    match entry.kind {
        EntryKind::Container(kind) => {
            lines.push(format!("## {}", kind.label()));
            lines.push(String::new());

            if entry.child_items.is_empty() {
                lines.push(EMPTY_CONTAINER.to_string());
            } else {
                lines.extend(entry.child_items.iter().map(child_bullet));
            }
            lines.push(String::new());
        }

        EntryKind::Structural(StructuralKind::SectionHeader) => {
            lines.push(format!("## {}", entry.title));
        }

        EntryKind::Structural(StructuralKind::Divider) => {
            lines.push("---".to_string());
        }

        EntryKind::Hymn => {
            let hymn = entry
                .hymn_number
                .filter(|n| *n > 0)
                .zip(non_blank(entry.hymn_title.as_deref()));
            match hymn {
                Some((number, title)) => {
                    lines.push(format!("*{}:* #{} — {}", entry.title, number, title))
                }
                None => lines.push(format!("*{}:* {}", entry.title, PLACEHOLDER)),
            }
        }

        EntryKind::Participant => {
            let name = non_blank(entry.participant_name.as_deref()).unwrap_or(PLACEHOLDER);
            lines.push(format!("*{}:* {}", entry.title, name));
        }

        EntryKind::Speaker => {
            let name = non_blank(entry.speaker_name()).unwrap_or(PLACEHOLDER);
            lines.push(format!("*Speaker:* {}", name));

            if !entry.title.is_empty() && entry.title != DEFAULT_SPEAKER_TITLE {
                lines.push(format!("  Topic: {}", entry.title));
            }
        }

        EntryKind::Procedural => {
            lines.push(format!("*{}*", entry.title));
            if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(description.to_string());
            }
        }
    }

    lines.push(String::new());
}

/// `- **title** — description *(high priority)*`
fn child_bullet(child: &ChildItem) -> String {
    let mut bullet = format!("- **{}**", child.title);

    if let Some(description) = child.description.as_deref().filter(|d| !d.is_empty()) {
        bullet.push_str(&format!(" — {}", description));
    }
    if let Some(priority) = child.priority.filter(|p| p.is_notable()) {
        bullet.push_str(&format!(" *({} priority)*", priority));
    }

    bullet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_time, ChildItem, ContainerKind, Priority};
    use chrono::NaiveDate;

    fn meta() -> MeetingMeta {
        MeetingMeta::new(
            "Sacrament Meeting",
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            parse_time("10:00").unwrap(),
        )
    }

    fn lines_of(doc: &str) -> Vec<&str> {
        doc.lines().collect()
    }

    #[test]
    fn header_without_roles() {
        let doc = generate(&meta(), &[]);

        assert_eq!(
            doc,
            "# Sacrament Meeting\nSunday, March 3, 2024 at 10:00 AM\n\n---\n"
        );
        assert!(!doc.contains(GRID_OPEN));
    }

    #[test]
    fn blank_roles_emit_no_grid() {
        let mut m = meta();
        m.presiding = Some("  ".to_string());
        m.pianist_organist = Some(String::new());

        assert!(!generate(&m, &[]).contains(GRID_OPEN));
    }

    #[test]
    fn only_chorister_keeps_empty_left_column() {
        let mut m = meta();
        m.chorister = Some("Sister Hall".to_string());

        let doc = generate(&m, &[]);
        let expected = "\
:::roles-grid

:::roles-column
:::

:::roles-column
**Chorister:** Sister Hall

:::

:::end-grid
";
        assert!(doc.ends_with(expected), "unexpected document:\n{}", doc);
    }

    #[test]
    fn full_roles_grid() {
        let mut m = meta();
        m.presiding = Some("Bishop Young".to_string());
        m.conducting = Some(" Brother Diaz ".to_string());
        m.chorister = Some("Sister Hall".to_string());
        m.pianist_organist = Some("Sister Ng".to_string());

        let doc = generate(&m, &[]);
        let lines = lines_of(&doc);
        assert!(lines.contains(&"**Presiding:** Bishop Young"));
        assert!(lines.contains(&"**Conducting:** Brother Diaz"));
        assert!(lines.contains(&"**Pianist/Organist:** Sister Ng"));
        assert_eq!(lines.iter().filter(|l| **l == COLUMN_OPEN).count(), 2);
    }

    #[test]
    fn hymn_lines() {
        let with_hymn = AgendaEntry::new("h1", 0, EntryKind::Hymn, "Opening Hymn")
            .with_hymn(301, "Love One Another");
        let without = AgendaEntry::new("h2", 1, EntryKind::Hymn, "Opening Hymn");

        let doc = generate(&meta(), &[with_hymn, without]);
        let lines = lines_of(&doc);
        assert!(lines.contains(&"*Opening Hymn:* #301 — Love One Another"));
        assert!(lines.contains(&"*Opening Hymn:* TBD"));
    }

    #[test]
    fn hymn_number_zero_is_a_placeholder() {
        let entry = AgendaEntry::new("h1", 0, EntryKind::Hymn, "Closing Hymn")
            .with_hymn(0, "Abide with Me");

        let doc = generate(&meta(), &[entry]);
        assert!(lines_of(&doc).contains(&"*Closing Hymn:* TBD"));
        assert!(!doc.contains("#0"));
    }

    #[test]
    fn business_container_bullets() {
        let entry = AgendaEntry::new(
            "b1",
            0,
            EntryKind::Container(ContainerKind::Business),
            "Business",
        )
        .with_child(ChildItem::new("Approve minutes"))
        .with_child(ChildItem::new("Budget review").with_priority(Priority::High));

        let doc = generate(&meta(), &[entry]);
        assert!(doc.contains(
            "## Ward Business\n\n- **Approve minutes**\n- **Budget review** *(high priority)*\n"
        ));
    }

    #[test]
    fn child_description_and_normal_priority() {
        let child = ChildItem::new("Youth camp")
            .with_description("Sign-ups close Friday")
            .with_priority(Priority::Normal);

        assert_eq!(child_bullet(&child), "- **Youth camp** — Sign-ups close Friday");
    }

    #[test]
    fn empty_container() {
        let entry = AgendaEntry::new(
            "a1",
            0,
            EntryKind::Container(ContainerKind::Announcement),
            "Announcements",
        );

        let doc = generate(&meta(), &[entry]);
        assert!(doc.ends_with("## Announcements\n\n*No items*\n"));
    }

    #[test]
    fn speaker_with_and_without_topic() {
        let named = AgendaEntry::new("s1", 0, EntryKind::Speaker, "Faith in Trials")
            .with_participant("Sister Lee");
        let unnamed = AgendaEntry::new("s2", 1, EntryKind::Speaker, "Speaker");

        let doc = generate(&meta(), &[named, unnamed]);
        assert!(doc.contains("*Speaker:* Sister Lee\n  Topic: Faith in Trials\n"));
        assert!(doc.ends_with("*Speaker:* TBD\n"));
    }

    #[test]
    fn participant_placeholder() {
        let entry = AgendaEntry::new("p1", 0, EntryKind::Participant, "Opening Prayer");
        assert!(generate(&meta(), &[entry]).ends_with("*Opening Prayer:* TBD\n"));
    }

    #[test]
    fn structural_and_procedural() {
        let entries = vec![
            AgendaEntry::new("x1", 0, EntryKind::Structural(StructuralKind::SectionHeader), "Program"),
            AgendaEntry::new("x2", 1, EntryKind::Structural(StructuralKind::Divider), "ignored"),
            AgendaEntry::new("x3", 2, EntryKind::Procedural, "Sacrament")
                .with_description("Administered by the priests"),
        ];

        let doc = generate(&meta(), &entries);
        assert!(doc.ends_with(
            "## Program\n\n---\n\n*Sacrament*\nAdministered by the priests\n"
        ));
        assert!(!doc.contains("ignored"));
    }

    #[test]
    fn entries_sorted_and_durations_not_rendered() {
        let entries = vec![
            AgendaEntry::new("b", 2, EntryKind::Procedural, "Second").with_duration(45),
            AgendaEntry::new("a", 1, EntryKind::Procedural, "First").with_duration(30),
        ];

        let doc = generate(&meta(), &entries);
        let first = doc.find("*First*").unwrap();
        let second = doc.find("*Second*").unwrap();
        assert!(first < second);
        assert!(!doc.contains("45"));
    }
}
