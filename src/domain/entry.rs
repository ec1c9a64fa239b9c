//! Agenda entry domain model
//!
//! An agenda entry is one line-item of a meeting agenda: a hymn, a prayer,
//! a speaker, a container of business items, a section header, and so on.
//! Entries are plain in-memory records; the engine never persists them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three container kinds that are eligible for adjacency grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Discussion,
    Business,
    Announcement,
}

impl ContainerKind {
    /// Returns the section label used for groups and container headers
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Discussion => "Discussions",
            ContainerKind::Business => "Ward Business",
            ContainerKind::Announcement => "Announcements",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Discussion => "discussion",
            ContainerKind::Business => "business",
            ContainerKind::Announcement => "announcement",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discussion" => Ok(ContainerKind::Discussion),
            "business" => Ok(ContainerKind::Business),
            "announcement" => Ok(ContainerKind::Announcement),
            _ => Err(format!("Unknown container kind: {}", s)),
        }
    }
}

/// Layout-only entries that carry no participant or content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    SectionHeader,
    Divider,
}

impl StructuralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralKind::SectionHeader => "section_header",
            StructuralKind::Divider => "divider",
        }
    }
}

impl FromStr for StructuralKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "section_header" => Ok(StructuralKind::SectionHeader),
            "divider" => Ok(StructuralKind::Divider),
            _ => Err(format!("Unknown structural kind: {}", s)),
        }
    }
}

/// Kind of an agenda entry
///
/// Serialized as a flat string (`"hymn"`, `"business"`, `"divider"`, ...).
/// Any unrecognized string deserializes to [`EntryKind::Procedural`], so
/// unknown kinds are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Hymn,
    /// Prayer or other single-name item
    Participant,
    Speaker,
    Container(ContainerKind),
    Structural(StructuralKind),
    #[default]
    Procedural,
}

impl EntryKind {
    /// Returns the container kind if this entry can be grouped
    pub fn groupable(&self) -> Option<ContainerKind> {
        match self {
            EntryKind::Container(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Hymn => "hymn",
            EntryKind::Participant => "participant",
            EntryKind::Speaker => "speaker",
            EntryKind::Container(kind) => kind.as_str(),
            EntryKind::Structural(kind) => kind.as_str(),
            EntryKind::Procedural => "procedural",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for EntryKind {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "hymn" => EntryKind::Hymn,
            "participant" => EntryKind::Participant,
            "speaker" => EntryKind::Speaker,
            other => {
                if let Ok(kind) = other.parse::<ContainerKind>() {
                    EntryKind::Container(kind)
                } else if let Ok(kind) = other.parse::<StructuralKind>() {
                    EntryKind::Structural(kind)
                } else {
                    EntryKind::Procedural
                }
            }
        }
    }
}

impl From<String> for EntryKind {
    fn from(value: String) -> Self {
        EntryKind::from(value.as_str())
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Priority of a container child item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }

    /// Normal priority is never annotated in documents
    pub fn is_notable(&self) -> bool {
        !matches!(self, Priority::Normal)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An item listed inside a discussion/business/announcement container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildItem {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ChildItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// One entry of a meeting agenda
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    /// Opaque stable identifier
    pub id: String,

    /// Document order; ties keep their original relative order
    #[serde(default)]
    pub order_index: i64,

    #[serde(default)]
    pub kind: EntryKind,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hymn_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hymn_title: Option<String>,

    /// Participant for prayers; also the speaker's name for speaker entries
    #[serde(default, alias = "speaker_name", skip_serializing_if = "Option::is_none")]
    pub participant_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_items: Vec<ChildItem>,
}

impl AgendaEntry {
    /// Creates an entry with only the required fields set
    pub fn new(
        id: impl Into<String>,
        order_index: i64,
        kind: EntryKind,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            order_index,
            kind,
            title: title.into(),
            description: None,
            duration_minutes: None,
            hymn_number: None,
            hymn_title: None,
            participant_name: None,
            child_items: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_hymn(mut self, number: u32, title: impl Into<String>) -> Self {
        self.hymn_number = Some(number);
        self.hymn_title = Some(title.into());
        self
    }

    pub fn with_participant(mut self, name: impl Into<String>) -> Self {
        self.participant_name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: ChildItem) -> Self {
        self.child_items.push(child);
        self
    }

    /// Returns the speaker's name (stored in the participant slot)
    pub fn speaker_name(&self) -> Option<&str> {
        self.participant_name.as_deref()
    }
}

/// Returns the trimmed value if it has any visible content
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_from_known_strings() {
        assert_eq!(EntryKind::from("hymn"), EntryKind::Hymn);
        assert_eq!(EntryKind::from("Speaker"), EntryKind::Speaker);
        assert_eq!(
            EntryKind::from("business"),
            EntryKind::Container(ContainerKind::Business)
        );
        assert_eq!(
            EntryKind::from("section_header"),
            EntryKind::Structural(StructuralKind::SectionHeader)
        );
    }

    #[test]
    fn unknown_kind_falls_back_to_procedural() {
        assert_eq!(EntryKind::from("sacrament"), EntryKind::Procedural);
        assert_eq!(EntryKind::from(""), EntryKind::Procedural);
    }

    #[test]
    fn entry_kind_serializes_as_flat_string() {
        let json = serde_json::to_string(&EntryKind::Container(ContainerKind::Announcement)).unwrap();
        assert_eq!(json, "\"announcement\"");

        let kind: EntryKind = serde_json::from_str("\"divider\"").unwrap();
        assert_eq!(kind, EntryKind::Structural(StructuralKind::Divider));
    }

    #[test]
    fn container_labels() {
        assert_eq!(ContainerKind::Discussion.label(), "Discussions");
        assert_eq!(ContainerKind::Business.label(), "Ward Business");
        assert_eq!(ContainerKind::Announcement.label(), "Announcements");
    }

    #[test]
    fn only_containers_are_groupable() {
        assert_eq!(
            EntryKind::Container(ContainerKind::Discussion).groupable(),
            Some(ContainerKind::Discussion)
        );
        assert_eq!(EntryKind::Hymn.groupable(), None);
        assert_eq!(EntryKind::Structural(StructuralKind::Divider).groupable(), None);
    }

    #[test]
    fn deserialize_entry_with_speaker_alias() {
        let json = r#"{"id": "e1", "order_index": 3, "kind": "speaker", "title": "Faith", "speaker_name": "Sister Lee"}"#;
        let entry: AgendaEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind, EntryKind::Speaker);
        assert_eq!(entry.speaker_name(), Some("Sister Lee"));
        assert!(entry.child_items.is_empty());
    }

    #[test]
    fn priority_notability() {
        assert!(Priority::High.is_notable());
        assert!(Priority::Low.is_notable());
        assert!(!Priority::Normal.is_notable());
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  Bishop Young ")), Some("Bishop Young"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
