//! Actions for the events page.

use samyak_api::EventCategory;

/// Every input the events page reacts to.
///
/// Viewer interactions and backend outcomes flow through the same
/// channel; the reducer is the only place that interprets them.
#[derive(Debug, Clone)]
pub enum RegistrationAction {
    /// Fetch the event catalog from the backend.
    LoadCatalog,
    /// The catalog fetch succeeded.
    CatalogLoaded(Vec<EventCategory>),
    /// The catalog fetch failed.
    CatalogLoadFailed {
        /// Banner text to show.
        message: String,
    },

    /// The viewer edited the search box.
    QueryChanged(String),

    /// The viewer hit Register on an event card.
    RegisterClicked {
        /// Category the card belongs to.
        category_id: String,
        /// The event on the card.
        event_id: String,
    },
    /// The viewer ticked or unticked the terms checkbox.
    TermsToggled(bool),
    /// The viewer confirmed the terms popup.
    SubmitRegistration,
    /// The backend committed the registration.
    RegistrationAccepted,
    /// The backend refused the registration.
    RegistrationRejected {
        /// Server-provided reason, or a generic fallback.
        message: String,
    },
    /// The viewer dismissed the terms popup.
    PopupClosed,

    /// The viewer hit Unregister on an event card.
    UnregisterClicked {
        /// Category the card belongs to.
        category_id: String,
        /// The event on the card.
        event_id: String,
    },
    /// The backend committed the unregistration.
    UnregistrationAccepted,
    /// The backend refused the unregistration.
    UnregistrationRejected {
        /// Server-provided reason, or a generic fallback.
        message: String,
    },

    /// The viewer dismissed the success banner.
    NotificationDismissed,

    /// The viewer expanded or collapsed an event's detail panel.
    EventDetailsToggled {
        /// The event whose panel was clicked.
        event_id: String,
    },
    /// The viewer toggled the navigation menu.
    MenuToggled,
    /// The viewer toggled the profile dropdown.
    ProfileToggled,
}
