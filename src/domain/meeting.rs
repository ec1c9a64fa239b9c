//! Meeting metadata
//!
//! The header information printed above the agenda: title, date and time,
//! and the four meeting roles shown in the roles grid.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::entry::non_blank;

#[derive(Debug, Error, PartialEq)]
pub enum MeetingError {
    #[error("Invalid meeting time: expected 'HH:mm', got '{0}'")]
    InvalidTime(String),
}

/// Parses a 24-hour `HH:mm` time
pub fn parse_time(value: &str) -> Result<NaiveTime, MeetingError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| MeetingError::InvalidTime(value.to_string()))
}

fn serialize_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(serde::de::Error::custom)
}

/// Metadata for one meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMeta {
    pub title: String,

    pub date: NaiveDate,

    /// Start time, written as `HH:mm` in input files
    #[serde(serialize_with = "serialize_time", deserialize_with = "deserialize_time")]
    pub time: NaiveTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presiding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conducting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chorister: Option<String>,

    #[serde(default, alias = "organist", skip_serializing_if = "Option::is_none")]
    pub pianist_organist: Option<String>,
}

impl MeetingMeta {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            unit_name: None,
            presiding: None,
            conducting: None,
            chorister: None,
            pianist_organist: None,
        }
    }

    /// Returns `Weekday, Month d, yyyy at h:mm AM`
    pub fn schedule_line(&self) -> String {
        format!(
            "{} at {}",
            self.date.format("%A, %B %-d, %Y"),
            self.time.format("%-I:%M %p")
        )
    }

    /// Left grid column roles, blank values removed
    pub fn left_roles(&self) -> Vec<(&'static str, &str)> {
        collect_roles([
            ("Presiding", self.presiding.as_deref()),
            ("Conducting", self.conducting.as_deref()),
        ])
    }

    /// Right grid column roles, blank values removed
    pub fn right_roles(&self) -> Vec<(&'static str, &str)> {
        collect_roles([
            ("Chorister", self.chorister.as_deref()),
            ("Pianist/Organist", self.pianist_organist.as_deref()),
        ])
    }

    /// Returns true if any of the four roles has a visible value
    pub fn has_roles(&self) -> bool {
        !self.left_roles().is_empty() || !self.right_roles().is_empty()
    }
}

fn collect_roles<'a>(
    roles: [(&'static str, Option<&'a str>); 2],
) -> Vec<(&'static str, &'a str)> {
    roles
        .into_iter()
        .filter_map(|(label, value)| non_blank(value).map(|v| (label, v)))
        .collect()
}
