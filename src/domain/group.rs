//! Adjacency grouping for agenda entries
//!
//! Runs of two or more adjacent entries of the same container kind
//! (discussion, business, announcement) collapse into one labeled group.
//! A run of one stays a single entry, and runs separated by any other
//! entry are never merged.
//!
//! A group's time-box is its first member's duration, not the sum of its
//! members. Total meeting time is computed from that time-box.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::{AgendaEntry, ContainerKind};

/// Time-box used when a group's first member has no duration
pub const DEFAULT_TIMEBOX_MINUTES: u32 = 5;

/// A bundle of adjacent same-kind container entries (always ≥2 members)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGroup {
    pub group_kind: ContainerKind,
    pub label: String,
    pub timebox_minutes: u32,
    pub members: Vec<AgendaEntry>,
    /// Drag-and-drop identity, derived from the first member's id
    pub synthetic_id: String,
    pub order_index: i64,
}

impl EntryGroup {
    fn from_run(kind: ContainerKind, members: Vec<AgendaEntry>) -> Self {
        let first = &members[0];
        let timebox_minutes = match first.duration_minutes {
            Some(minutes) if minutes > 0 => minutes,
            _ => DEFAULT_TIMEBOX_MINUTES,
        };

        Self {
            group_kind: kind,
            label: kind.label().to_string(),
            timebox_minutes,
            synthetic_id: format!("group-{}", first.id),
            order_index: first.order_index,
            members,
        }
    }
}

/// A node of the grouped agenda view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupedEntry {
    Single(AgendaEntry),
    Group(EntryGroup),
}

impl GroupedEntry {
    /// Returns the node's drag-and-drop id
    pub fn id(&self) -> &str {
        match self {
            GroupedEntry::Single(entry) => &entry.id,
            GroupedEntry::Group(group) => &group.synthetic_id,
        }
    }

    pub fn order_index(&self) -> i64 {
        match self {
            GroupedEntry::Single(entry) => entry.order_index,
            GroupedEntry::Group(group) => group.order_index,
        }
    }

    /// Minutes this node contributes to the meeting total
    pub fn minutes(&self) -> u32 {
        match self {
            GroupedEntry::Single(entry) => entry.duration_minutes.unwrap_or(0),
            GroupedEntry::Group(group) => group.timebox_minutes,
        }
    }

    /// Returns the entries this node stands for, in order
    pub fn members(&self) -> &[AgendaEntry] {
        match self {
            GroupedEntry::Single(entry) => std::slice::from_ref(entry),
            GroupedEntry::Group(group) => &group.members,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, GroupedEntry::Group(_))
    }
}

/// Running state of the single left-to-right grouping pass
#[derive(Default)]
struct RunBuilder {
    run: Vec<AgendaEntry>,
    kind: Option<ContainerKind>,
    output: Vec<GroupedEntry>,
}

impl RunBuilder {
    fn push_groupable(&mut self, kind: ContainerKind, entry: AgendaEntry) {
        if self.kind != Some(kind) {
            self.flush();
            self.kind = Some(kind);
        }
        self.run.push(entry);
    }

    fn push_single(&mut self, entry: AgendaEntry) {
        self.flush();
        self.output.push(GroupedEntry::Single(entry));
    }

    fn flush(&mut self) {
        let run = std::mem::take(&mut self.run);
        let kind = self.kind.take();

        match (run.len(), kind) {
            (0, _) | (_, None) => {}
            (1, _) => {
                if let Some(entry) = run.into_iter().next() {
                    self.output.push(GroupedEntry::Single(entry));
                }
            }
            (_, Some(kind)) => {
                self.output
                    .push(GroupedEntry::Group(EntryGroup::from_run(kind, run)));
            }
        }
    }

    fn finish(mut self) -> Vec<GroupedEntry> {
        self.flush();
        self.output
    }
}

/// Groups adjacent same-kind container entries
///
/// Input is stably sorted by `order_index` first.
pub fn group(entries: impl IntoIterator<Item = AgendaEntry>) -> Vec<GroupedEntry> {
    let mut sorted: Vec<AgendaEntry> = entries.into_iter().collect();
    sorted.sort_by_key(|e| e.order_index);

    let input_len = sorted.len();
    let mut builder = RunBuilder::default();

    for entry in sorted {
        match entry.kind.groupable() {
            Some(kind) => builder.push_groupable(kind, entry),
            None => builder.push_single(entry),
        }
    }

    let grouped = builder.finish();
    debug!(
        entries = input_len,
        nodes = grouped.len(),
        groups = grouped.iter().filter(|g| g.is_group()).count(),
        "grouped agenda"
    );
    grouped
}

/// Sums group time-boxes and single-entry durations
pub fn total_minutes(grouped: &[GroupedEntry]) -> u32 {
    grouped.iter().map(GroupedEntry::minutes).sum()
}

/// Groups the entries, then sums the result
pub fn total_minutes_with_grouping(entries: impl IntoIterator<Item = AgendaEntry>) -> u32 {
    total_minutes(&group(entries))
}

/// Expands groups back into their member sequence
pub fn flatten(grouped: impl IntoIterator<Item = GroupedEntry>) -> Vec<AgendaEntry> {
    let mut result = Vec::new();
    for node in grouped {
        match node {
            GroupedEntry::Single(entry) => result.push(entry),
            GroupedEntry::Group(group) => result.extend(group.members),
        }
    }
    result
}

/// Returns the drag-and-drop id of every node
pub fn grouped_ids(grouped: &[GroupedEntry]) -> Vec<String> {
    grouped.iter().map(|g| g.id().to_string()).collect()
}
