//! # Samyak API
//!
//! Typed `reqwest` client for the Samyak events backend.
//!
//! The backend exposes three endpoints consumed by the registration flow:
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/api/events` | none |
//! | POST | `/api/events/{categoryId}/events/{eventId}/register` | Bearer |
//! | DELETE | `/api/events/{categoryId}/events/{eventId}/unregister` | Bearer |
//!
//! Wire types in [`types`] carry the backend's exact field names via serde
//! renames. Mutation rejections (non-2xx) surface the backend's JSON
//! `{message}` body when present; callers apply their own generic fallback
//! when it is absent.

pub mod client;
pub mod error;
pub mod types;

pub use client::EventsClient;
pub use error::ApiError;
pub use types::{Event, EventCategory, EventDetails};
