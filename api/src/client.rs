//! Events backend client implementation

use crate::{error::ApiError, types::EventCategory};
use reqwest::{Client, Response};
use serde::Deserialize;

/// Error body shape returned by mutation endpoints on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the Samyak events backend.
#[derive(Clone)]
pub struct EventsClient {
    client: Client,
    base_url: String,
}

impl EventsClient {
    /// Create a new client against the given base URL.
    ///
    /// A trailing slash on `base_url` is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the full event catalog.
    ///
    /// Single attempt, no retry: the caller decides whether a failure is
    /// surfaced or retried via a fresh user action.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] on network failure,
    /// [`ApiError::Rejected`] on a non-2xx status, and
    /// [`ApiError::ParseFailed`] if the body is not a catalog.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_catalog(&self) -> Result<Vec<EventCategory>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<Vec<EventCategory>>()
            .await
            .map_err(|e| ApiError::ParseFailed(e.to_string()))
    }

    /// Register the authenticated viewer for an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] on network failure and
    /// [`ApiError::Rejected`] (carrying the backend's `message` when
    /// present) on a non-2xx status.
    #[tracing::instrument(skip(self, token))]
    pub async fn register(
        &self,
        category_id: &str,
        event_id: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!(
                "{}/api/events/{category_id}/events/{event_id}/register",
                self.base_url
            ))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Unregister the authenticated viewer from an event.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`EventsClient::register`].
    #[tracing::instrument(skip(self, token))]
    pub async fn unregister(
        &self,
        category_id: &str,
        event_id: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!(
                "{}/api/events/{category_id}/events/{event_id}/unregister",
                self.base_url
            ))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    /// Build a [`ApiError::Rejected`] from a non-2xx response, extracting
    /// the `message` field when the body is the backend's JSON error shape.
    async fn rejection(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message),
            Err(_) => None,
        };

        tracing::debug!(status, ?message, "Backend rejected request");
        ApiError::Rejected { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = EventsClient::new("http://localhost:4000/");
        assert_eq!(client.base_url, "http://localhost:4000");
    }
}
