// ── Wire records served by the data facade ──
//
// These mirror the backend JSON (camelCase field names). Records are
// immutable once fetched; stores replace whole lists on refetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Publications ─────────────────────────────────────────────────────

/// An editorial publication shown on the home feed and publication list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<Tag>,
    pub author: Author,
    /// Display string, e.g. `"20 Jan 2022"`.
    pub published_date: String,
    /// Display string, e.g. `"3mins"`.
    pub read_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub label: String,
    /// Background color.
    pub color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

// ── Shifts ───────────────────────────────────────────────────────────

/// A scheduled shift on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub title: String,
    /// Raw start time (`HH:MM`).
    pub start_time: String,
    /// Raw end time (`HH:MM`).
    pub end_time: String,
    pub time_display: String,
    pub date: NaiveDate,
    pub assignee: TeamMember,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ShiftService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<ShiftRoom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<ShiftNote>>,
}

impl Shift {
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Team members, or an empty slice when the shift has no team.
    pub fn team_members(&self) -> &[TeamMember] {
        self.team.as_deref().unwrap_or_default()
    }

    pub fn note_list(&self) -> &[ShiftNote] {
        self.notes.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftService {
    pub name: String,
    pub time: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRoom {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
    #[serde(default)]
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftNote {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    /// Relative display string, e.g. `"2 min geleden"`.
    pub time_ago: String,
}

// ── Rooms & users ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: String,
}
