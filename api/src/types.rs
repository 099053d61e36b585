//! Wire types for the events backend.
//!
//! Field names follow the backend's JSON exactly (`_id`, `categoryName`,
//! `Events`, `registeredStudents`, ...); serde renames keep the Rust side
//! idiomatic. The catalog is read-only on this side: it is replaced
//! wholesale on every refresh and never patched locally.

use serde::{Deserialize, Serialize};

/// A category of events, e.g. "Tech" or "Cultural".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    #[serde(rename = "categoryName")]
    pub category_name: String,

    /// Events in this category, in backend order
    #[serde(rename = "Events", default)]
    pub events: Vec<Event>,
}

/// A single registrable event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Event title
    pub title: String,

    /// Image reference (URL)
    #[serde(default)]
    pub image: String,

    /// Maximum number of participants
    #[serde(rename = "participantLimit")]
    pub participant_limit: u32,

    /// Viewer identifiers of registered participants.
    ///
    /// Membership here is the single source of truth for "is this viewer
    /// registered"; it is never counted, only tested.
    #[serde(rename = "registeredStudents", default)]
    pub registered_students: Vec<String>,

    /// Free-text terms and conditions, delimited by sentence punctuation
    #[serde(rename = "termsandconditions", default)]
    pub terms_and_conditions: String,

    /// Descriptive details
    pub details: EventDetails,
}

/// Descriptive details of an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Venue name
    #[serde(default)]
    pub venue: String,

    /// Event date, as supplied by the backend
    #[serde(default)]
    pub date: String,

    /// Start time, display format
    #[serde(rename = "startTime", default)]
    pub start_time: String,

    /// End time, display format
    #[serde(rename = "endTime", default)]
    pub end_time: String,
}

impl Event {
    /// Whether `viewer_id` is registered for this event.
    #[must_use]
    pub fn is_registered(&self, viewer_id: &str) -> bool {
        self.registered_students.iter().any(|id| id == viewer_id)
    }

    /// Number of spots currently taken.
    #[must_use]
    pub fn spots_taken(&self) -> usize {
        self.registered_students.len()
    }

    /// Whether the event is at or over its participant limit.
    ///
    /// Advisory only: the server is authoritative for capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_taken() >= self.participant_limit as usize
    }

    /// Fill ratio in `0.0..=1.0` for the participant meter.
    ///
    /// A zero limit yields `0.0` rather than dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // participant counts are tiny
    pub fn fill_ratio(&self) -> f32 {
        if self.participant_limit == 0 {
            return 0.0;
        }
        (self.spots_taken() as f32 / self.participant_limit as f32).min(1.0)
    }

    /// Terms split into clauses on sentence-ending punctuation, trimmed,
    /// with empty fragments dropped. This is how the terms popup renders
    /// them as a bullet list.
    #[must_use]
    pub fn terms_clauses(&self) -> Vec<&str> {
        self.terms_and_conditions
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .collect()
    }
}
