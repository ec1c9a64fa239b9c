//! Domain models for agenda documents
//!
//! Contains the agenda model and the grouping logic without any I/O concerns.

mod entry;
mod meeting;
mod group;
mod record;

pub use entry::{AgendaEntry, ChildItem, ContainerKind, EntryKind, Priority, StructuralKind};
pub(crate) use entry::non_blank;
pub use meeting::{parse_time, MeetingError, MeetingMeta};
pub use group::{
    flatten, group, grouped_ids, total_minutes, total_minutes_with_grouping, EntryGroup,
    GroupedEntry, DEFAULT_TIMEBOX_MINUTES,
};
pub use record::{BuilderItem, StoredHymn, StoredRow};
