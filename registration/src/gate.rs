//! Per-event capacity gate.

use samyak_api::Event;

/// What the action button on an event card should do for a given viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// The viewer may register.
    Register,
    /// The viewer is already registered and may unregister.
    Unregister,
    /// The event has reached its participant limit.
    Full,
}

/// Decides the gate for one event.
///
/// Membership wins over capacity: a viewer who is already registered is
/// always offered `Unregister`, even if the event is at (or past) its
/// limit, so they can free their spot. An anonymous viewer is never
/// considered a member.
#[must_use]
pub fn action(event: &Event, viewer_id: Option<&str>) -> GateAction {
    if viewer_id.is_some_and(|id| event.is_registered(id)) {
        GateAction::Unregister
    } else if event.is_full() {
        GateAction::Full
    } else {
        GateAction::Register
    }
}
