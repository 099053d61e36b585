//! Error taxonomy for the registration domain.

use thiserror::Error;

/// Everything that can go wrong while driving a registration flow.
///
/// The display form of each variant is exactly the text surfaced to the
/// viewer, so reducers can stringify these directly into state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The event catalog could not be fetched from the backend.
    #[error("{0}")]
    Fetch(String),

    /// A local precondition failed before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// No auth token is available; the viewer must sign in first.
    #[error("authentication required")]
    AuthRequired,

    /// The backend refused a registration or unregistration.
    #[error("{0}")]
    ServerRejection(String),
}
