//! State types for the event registration store.

use chrono::{DateTime, Utc};
use samyak_api::{Event, EventCategory};
use uuid::Uuid;

use crate::filter;

/// The event a viewer picked, together with the category it lives under.
///
/// The category id is not part of [`Event`] itself but the backend routes
/// mutations by `(category, event)`, so the pair travels together from the
/// moment of selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Category the event belongs to.
    pub category_id: String,
    /// Snapshot of the selected event, used to render the terms popup.
    pub event: Event,
}

/// Which mutation an in-flight submission is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Registering the viewer for the event.
    Register,
    /// Removing the viewer from the event.
    Unregister,
}

/// The registration session state machine.
///
/// At most one registration flow is active at a time. `Selecting` is the
/// terms popup being open; `Submitting` is a request in flight. There is no
/// dedicated failure state: a rejected registration falls back to
/// `Selecting` with an inline error, and a rejected unregistration falls
/// back to `Idle` with [`RegistrationState::last_error`] set.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// No flow is active.
    #[default]
    Idle,
    /// The terms popup is open for a selected event.
    Selecting {
        /// The event being registered for.
        selection: Selection,
        /// Whether the viewer has ticked the terms checkbox.
        accepted_terms: bool,
        /// Inline error shown in the popup, if any.
        form_error: Option<String>,
    },
    /// A register or unregister request is in flight.
    Submitting {
        /// The event the request targets.
        selection: Selection,
        /// Whether this is a registration or an unregistration.
        kind: MutationKind,
    },
}

impl Session {
    /// Whether a new flow may start.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the terms popup should be rendered.
    ///
    /// The popup stays visible while a registration submission is in
    /// flight so the viewer sees where the pending request came from.
    #[must_use]
    pub const fn popup_open(&self) -> bool {
        matches!(
            self,
            Self::Selecting { .. }
                | Self::Submitting {
                    kind: MutationKind::Register,
                    ..
                }
        )
    }
}

/// A transient success banner.
///
/// Only one notification exists at a time; raising a new one replaces the
/// current one. Dismissal is always explicit.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Stable identity for the banner, so the view layer can key on it.
    pub id: Uuid,
    /// The text shown to the viewer.
    pub message: String,
    /// When the banner was raised.
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    /// Raises a fresh notification with a new identity.
    #[must_use]
    pub fn new(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            raised_at,
        }
    }
}

/// Presentation chrome that is independent of the registration session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// The event whose detail panel is expanded, if any. Expanding one
    /// event collapses whichever was open before.
    pub expanded_event: Option<String>,
    /// Whether the mobile navigation menu is open.
    pub menu_open: bool,
    /// Whether the profile dropdown is open.
    pub profile_open: bool,
}

impl ViewState {
    /// Expands the given event's details, or collapses them if they are
    /// already the expanded ones.
    pub fn toggle_details(&mut self, event_id: &str) {
        if self.expanded_event.as_deref() == Some(event_id) {
            self.expanded_event = None;
        } else {
            self.expanded_event = Some(event_id.to_string());
        }
    }
}

/// Root state for the events page.
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    /// The catalog as last fetched from the backend.
    pub catalog: Vec<EventCategory>,
    /// Banner shown when the catalog could not be loaded. A stale catalog
    /// from a previous successful fetch is kept alongside it.
    pub catalog_error: Option<String>,
    /// The viewer's current search text, kept verbatim.
    pub query: String,
    /// The registration session state machine.
    pub session: Session,
    /// The current success banner, if any.
    pub notification: Option<Notification>,
    /// Inline error from the most recent failed unregistration.
    pub last_error: Option<String>,
    /// Page chrome.
    pub view: ViewState,
}

impl RegistrationState {
    /// The catalog narrowed by the current search query.
    ///
    /// This is derived on demand rather than stored, so the full catalog
    /// survives any sequence of query edits.
    #[must_use]
    pub fn visible_catalog(&self) -> Vec<EventCategory> {
        filter::filter_catalog(&self.catalog, &self.query)
    }

    /// Looks up an event by category and event id in the full catalog.
    #[must_use]
    pub fn find_event(&self, category_id: &str, event_id: &str) -> Option<&Event> {
        self.catalog
            .iter()
            .find(|category| category.id == category_id)?
            .events
            .iter()
            .find(|event| event.id == event_id)
    }
}
