//! Record adapters
//!
//! Agenda entries arrive in two concrete shapes: items from the agenda
//! builder canvas, and rows read back from the agenda table. Both map into
//! [`AgendaEntry`] here so the grouping and document code only ever sees
//! one model.

use serde::{Deserialize, Deserializer, Serialize};

use super::entry::{AgendaEntry, ChildItem, ContainerKind, EntryKind, StructuralKind};

/// An item placed on the agenda builder canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderItem {
    pub id: String,
    /// Builder category (`procedural`, `speaker`, `structural`, ...)
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub order_index: i64,
    pub structural_type: Option<StructuralKind>,
    pub is_hymn: bool,
    pub hymn_number: Option<u32>,
    pub hymn_title: Option<String>,
    pub speaker_name: Option<String>,
    pub is_container: bool,
    pub container_type: Option<ContainerKind>,
    pub child_items: Vec<ChildItem>,
    pub participant_name: Option<String>,
    pub requires_participant: bool,
}

impl BuilderItem {
    fn kind(&self) -> EntryKind {
        if let (true, Some(kind)) = (self.is_container, self.container_type) {
            return EntryKind::Container(kind);
        }
        if self.category == "structural" {
            return match self.structural_type {
                Some(kind) => EntryKind::Structural(kind),
                None => EntryKind::Procedural,
            };
        }
        if self.is_hymn {
            EntryKind::Hymn
        } else if self.requires_participant {
            EntryKind::Participant
        } else if self.category == "speaker" {
            EntryKind::Speaker
        } else {
            EntryKind::Procedural
        }
    }
}

impl From<BuilderItem> for AgendaEntry {
    fn from(item: BuilderItem) -> Self {
        let kind = item.kind();
        let participant_name = match kind {
            EntryKind::Speaker => item.speaker_name,
            _ => item.participant_name,
        };

        AgendaEntry {
            id: item.id,
            order_index: item.order_index,
            kind,
            title: item.title,
            description: item.description,
            duration_minutes: item.duration_minutes,
            hymn_number: item.hymn_number,
            hymn_title: item.hymn_title,
            participant_name,
            child_items: item.child_items,
        }
    }
}

/// Hymn joined onto a stored agenda row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredHymn {
    pub title: String,
    pub hymn_number: u32,
}

/// A persisted agenda row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredRow {
    pub id: String,
    pub order_index: i64,
    /// Free-form type column; unknown values are procedural
    pub item_type: String,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    /// One-to-one joins arrive as an object, one-to-many as a list
    #[serde(deserialize_with = "deserialize_joined_hymn")]
    pub hymn: Option<StoredHymn>,
    pub participant_name: Option<String>,
    pub child_items: Option<Vec<ChildItem>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JoinedHymn {
    One(StoredHymn),
    Many(Vec<StoredHymn>),
}

fn deserialize_joined_hymn<'de, D>(deserializer: D) -> Result<Option<StoredHymn>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<JoinedHymn>::deserialize(deserializer)? {
        Some(JoinedHymn::One(hymn)) => Some(hymn),
        Some(JoinedHymn::Many(hymns)) => hymns.into_iter().next(),
        None => None,
    })
}

/// Stored types whose participant name is printed after the title
const PARTICIPANT_TYPES: [&str; 2] = ["prayer", "speaker"];

/// Title that marks a stored structural row as a divider
const DIVIDER_TITLE: &str = "Divider";

impl From<StoredRow> for BuilderItem {
    fn from(row: StoredRow) -> Self {
        let item_type = row.item_type.as_str();
        let container_type = item_type.parse::<ContainerKind>().ok();
        let structural_type = (item_type == "structural").then(|| {
            if row.title == DIVIDER_TITLE {
                StructuralKind::Divider
            } else {
                StructuralKind::SectionHeader
            }
        });
        let (hymn_number, hymn_title) = match row.hymn {
            Some(hymn) => (Some(hymn.hymn_number), Some(hymn.title)),
            None => (None, None),
        };

        BuilderItem {
            is_hymn: item_type == "hymn",
            requires_participant: PARTICIPANT_TYPES.contains(&item_type),
            is_container: container_type.is_some(),
            container_type,
            structural_type,
            category: row.item_type,
            id: row.id,
            title: row.title,
            description: row.description,
            duration_minutes: row.duration_minutes,
            order_index: row.order_index,
            hymn_number,
            hymn_title,
            speaker_name: row.participant_name.clone(),
            participant_name: row.participant_name,
            child_items: row.child_items.unwrap_or_default(),
        }
    }
}

impl From<StoredRow> for AgendaEntry {
    fn from(row: StoredRow) -> Self {
        BuilderItem::from(row).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::Priority;

    #[test]
    fn builder_container_wins_over_category() {
        let item = BuilderItem {
            id: "c1".into(),
            category: "business".into(),
            is_container: true,
            container_type: Some(ContainerKind::Business),
            child_items: vec![ChildItem::new("Budget review").with_priority(Priority::High)],
            ..Default::default()
        };

        let entry = AgendaEntry::from(item);
        assert_eq!(entry.kind, EntryKind::Container(ContainerKind::Business));
        assert_eq!(entry.child_items.len(), 1);
    }

    #[test]
    fn builder_speaker_name_moves_to_participant_slot() {
        let item = BuilderItem {
            id: "s1".into(),
            category: "speaker".into(),
            title: "Gratitude".into(),
            speaker_name: Some("Brother Park".into()),
            ..Default::default()
        };

        let entry = AgendaEntry::from(item);
        assert_eq!(entry.kind, EntryKind::Speaker);
        assert_eq!(entry.speaker_name(), Some("Brother Park"));
    }

    #[test]
    fn builder_hymn_precedes_participant() {
        let item = BuilderItem {
            id: "h1".into(),
            category: "procedural".into(),
            is_hymn: true,
            requires_participant: true,
            ..Default::default()
        };

        assert_eq!(AgendaEntry::from(item).kind, EntryKind::Hymn);
    }

    #[test]
    fn builder_structural_without_type_is_procedural() {
        let item = BuilderItem {
            id: "x".into(),
            category: "structural".into(),
            ..Default::default()
        };

        assert_eq!(AgendaEntry::from(item).kind, EntryKind::Procedural);
    }

    #[test]
    fn stored_row_joins_hymn() {
        let row = StoredRow {
            id: "r1".into(),
            item_type: "hymn".into(),
            title: "Sacrament Hymn".into(),
            hymn: Some(StoredHymn {
                title: "I Stand All Amazed".into(),
                hymn_number: 193,
            }),
            ..Default::default()
        };

        let entry = AgendaEntry::from(row);
        assert_eq!(entry.kind, EntryKind::Hymn);
        assert_eq!(entry.hymn_number, Some(193));
        assert_eq!(entry.hymn_title.as_deref(), Some("I Stand All Amazed"));
    }

    #[test]
    fn stored_row_unknown_type_is_procedural() {
        let row: StoredRow =
            serde_json::from_str(r#"{"id": "r2", "item_type": "testimony", "title": "Testimonies"}"#)
                .unwrap();

        let entry = AgendaEntry::from(row);
        assert_eq!(entry.kind, EntryKind::Procedural);
        assert!(entry.child_items.is_empty());
    }

    #[test]
    fn stored_prayer_keeps_participant() {
        let row = StoredRow {
            id: "p1".into(),
            item_type: "prayer".into(),
            title: "Invocation".into(),
            participant_name: Some("Brother Cho".into()),
            ..Default::default()
        };

        let entry = AgendaEntry::from(row);
        assert_eq!(entry.kind, EntryKind::Participant);
        assert_eq!(entry.participant_name.as_deref(), Some("Brother Cho"));
    }

    #[test]
    fn stored_structural_uses_title() {
        let divider = StoredRow {
            id: "x1".into(),
            item_type: "structural".into(),
            title: "Divider".into(),
            ..Default::default()
        };
        let header = StoredRow {
            id: "x2".into(),
            item_type: "structural".into(),
            title: "Ward Business".into(),
            ..Default::default()
        };

        assert_eq!(
            AgendaEntry::from(divider).kind,
            EntryKind::Structural(StructuralKind::Divider)
        );
        assert_eq!(
            AgendaEntry::from(header).kind,
            EntryKind::Structural(StructuralKind::SectionHeader)
        );
    }

    #[test]
    fn stored_container_keeps_children() {
        let row: StoredRow = serde_json::from_str(
            r#"{"id": "d1", "item_type": "discussion", "title": "Youth camp",
                "child_items": [{"title": "Dates"}]}"#,
        )
        .unwrap();

        let entry = AgendaEntry::from(row);
        assert_eq!(entry.kind, EntryKind::Container(ContainerKind::Discussion));
        assert_eq!(entry.child_items.len(), 1);
    }

    #[test]
    fn stored_hymn_accepts_joined_list() {
        let row: StoredRow = serde_json::from_str(
            r#"{"id": "r1", "item_type": "hymn", "title": "Closing Hymn",
                "hymn": [{"title": "Abide with Me", "hymn_number": 166}]}"#,
        )
        .unwrap();
        assert_eq!(row.hymn.as_ref().map(|h| h.hymn_number), Some(166));

        let empty: StoredRow =
            serde_json::from_str(r#"{"id": "r2", "item_type": "hymn", "hymn": []}"#).unwrap();
        assert_eq!(empty.hymn, None);

        let null: StoredRow =
            serde_json::from_str(r#"{"id": "r3", "item_type": "hymn", "hymn": null}"#).unwrap();
        assert_eq!(null.hymn, None);
    }
}
