//! Core data types for tickets-lib.
//!
//! Field names follow the persisted JSON layout (`TicketID`, `Description`,
//! `DateCreated`, ...) so existing `tickets.json` files load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status forced onto every ticket that passes validation.
pub const STATUS_NEW: &str = "New";

/// Timestamps are written as RFC 3339. On read, zone-less values such as
/// `2024-01-01T10:00:00` or `0001-01-01T00:00:00` are taken as UTC. `null`
/// stays `None` so it is written back as `null`.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// A unit of work tracked by the system.
///
/// Every field is optional so a stored `null` survives a load/save cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Caller-supplied identifier. Unique by convention only.
    #[serde(rename = "TicketID", default)]
    pub ticket_id: Option<String>,

    /// Required, non-blank once validated.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    /// Open label, e.g. "Open", "Closed". Overwritten with "New" on write.
    #[serde(rename = "Status", default)]
    pub status: Option<String>,

    /// Open label, e.g. "High", "Low".
    #[serde(rename = "Priority", default)]
    pub priority: Option<String>,

    #[serde(rename = "DateCreated", default, with = "timestamp")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(rename = "LastUpdated", default, with = "timestamp")]
    pub last_updated: Option<DateTime<Utc>>,

    // Relations (references are never checked)
    #[serde(rename = "CreatedByUserId", default)]
    pub created_by_user_id: Option<String>,

    #[serde(rename = "AssignedToUserId", default)]
    pub assigned_to_user_id: Option<String>,

    #[serde(rename = "Comments", default)]
    pub comments: Option<Vec<Comment>>,
}

impl Ticket {
    #[must_use]
    pub fn new(ticket_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            ticket_id: Some(ticket_id.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// The ID, or `""` when absent.
    #[must_use]
    pub fn id(&self) -> &str {
        self.ticket_id.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn priority(&self) -> &str {
        self.priority.as_deref().unwrap_or_default()
    }

    /// True when the stored ID equals `id`. An absent ID never matches.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.ticket_id.as_deref() == Some(id)
    }

    /// True when the description is absent, empty or whitespace only.
    #[must_use]
    pub fn has_blank_description(&self) -> bool {
        self.description
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
    }

    /// Set both `DateCreated` and `LastUpdated`.
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.date_created = Some(now);
        self.last_updated = Some(now);
    }

    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.as_ref().map_or(0, Vec::len)
    }
}

/// A note attached to a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    #[serde(rename = "CommentID", default)]
    pub comment_id: Option<String>,

    /// Back-reference to the owning ticket.
    #[serde(rename = "TicketID", default)]
    pub ticket_id: Option<String>,

    #[serde(rename = "UserID", default)]
    pub user_id: Option<String>,

    #[serde(rename = "CommentText", default)]
    pub comment_text: Option<String>,

    #[serde(rename = "DateCreated", default, with = "timestamp")]
    pub date_created: Option<DateTime<Utc>>,
}

/// An actor referenced by tickets and comments. Not persisted on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "UserID", default)]
    pub user_id: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Email", default)]
    pub email: Option<String>,

    #[serde(rename = "Role", default)]
    pub role: Option<String>,
}
