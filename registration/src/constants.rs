//! User-facing copy shown by the registration flows.
//!
//! These strings are part of the product surface and are asserted on by
//! tests, so they live in one place rather than inline at each call site.

/// Shown after a registration round-trip succeeds.
pub const REGISTER_SUCCESS: &str = "You have successfully registered for the event!";

/// Shown after an unregistration round-trip succeeds.
pub const UNREGISTER_SUCCESS: &str = "Successfully unregistered from the event!";

/// Inline popup error when the viewer submits without accepting the terms.
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions to register.";

/// Catalog fetch failure banner.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load events. Please try again later.";

/// Fallback when the backend rejects a registration without a message body.
pub const REGISTER_FAILED: &str = "Failed to register.";

/// Fallback when the backend rejects an unregistration without a message body.
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
