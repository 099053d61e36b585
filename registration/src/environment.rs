//! Dependencies injected into the registration reducer.
//!
//! Reducers never touch the network or browser-style storage directly;
//! everything side-effectful lives behind these traits so tests can swap
//! in scripted implementations.

use std::sync::Arc;

use futures::future::BoxFuture;
use samyak_api::{ApiError, EventCategory, EventsClient};
use samyak_core::environment::Clock;

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// The events backend, as seen by the reducer.
pub trait EventsApi: Send + Sync {
    /// Fetches the full event catalog.
    fn fetch_catalog(&self) -> BoxFuture<'static, ApiResult<Vec<EventCategory>>>;

    /// Registers the authenticated viewer for an event.
    fn register(
        &self,
        category_id: String,
        event_id: String,
        token: String,
    ) -> BoxFuture<'static, ApiResult<()>>;

    /// Removes the authenticated viewer from an event.
    fn unregister(
        &self,
        category_id: String,
        event_id: String,
        token: String,
    ) -> BoxFuture<'static, ApiResult<()>>;
}

impl EventsApi for EventsClient {
    fn fetch_catalog(&self) -> BoxFuture<'static, ApiResult<Vec<EventCategory>>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_catalog().await })
    }

    fn register(
        &self,
        category_id: String,
        event_id: String,
        token: String,
    ) -> BoxFuture<'static, ApiResult<()>> {
        let client = self.clone();
        Box::pin(async move { client.register(&category_id, &event_id, &token).await })
    }

    fn unregister(
        &self,
        category_id: String,
        event_id: String,
        token: String,
    ) -> BoxFuture<'static, ApiResult<()>> {
        let client = self.clone();
        Box::pin(async move { client.unregister(&category_id, &event_id, &token).await })
    }
}

/// Access to the viewer's locally stored credentials.
///
/// Credentials are written by the sign-in flow, which is outside this
/// crate; here they are read-only.
pub trait SessionContext: Send + Sync {
    /// The stored bearer token, if the viewer is signed in.
    fn auth_token(&self) -> Option<String>;

    /// The stored viewer id, used for membership checks.
    fn viewer_id(&self) -> Option<String>;
}

/// A fixed credential snapshot, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<String>,
    viewer: Option<String>,
}

impl StaticSession {
    /// A signed-in session.
    #[must_use]
    pub fn signed_in(token: impl Into<String>, viewer: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            viewer: Some(viewer.into()),
        }
    }

    /// An anonymous session with no stored credentials.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a session from optionally-present credentials.
    #[must_use]
    pub fn from_parts(token: Option<String>, viewer: Option<String>) -> Self {
        Self { token, viewer }
    }
}

impl SessionContext for StaticSession {
    fn auth_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn viewer_id(&self) -> Option<String> {
        self.viewer.clone()
    }
}

/// Redirects an unauthenticated viewer to the sign-in page.
pub trait Navigator: Send + Sync {
    /// Sends the viewer to the login route.
    fn to_login(&self);
}

/// A [`Navigator`] that only records the redirect in the log, for
/// headless runs without a real router.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn to_login(&self) {
        tracing::info!("Redirecting viewer to login");
    }
}

/// Everything the registration reducer needs from the outside world.
#[derive(Clone)]
pub struct RegistrationEnvironment {
    /// The events backend.
    pub api: Arc<dyn EventsApi>,
    /// The viewer's stored credentials.
    pub session: Arc<dyn SessionContext>,
    /// Login redirection.
    pub navigator: Arc<dyn Navigator>,
    /// Time source for notification timestamps.
    pub clock: Arc<dyn Clock>,
}

impl RegistrationEnvironment {
    /// Wires up an environment from its parts.
    #[must_use]
    pub fn new(
        api: Arc<dyn EventsApi>,
        session: Arc<dyn SessionContext>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            clock,
        }
    }
}
