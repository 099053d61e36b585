//! Scripted environment implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use samyak_api::{ApiError, EventCategory};

use crate::environment::{ApiResult, EventsApi, Navigator};

/// An [`EventsApi`] that replays scripted responses and counts calls.
///
/// Each queue is consumed front-to-back; when a queue runs dry the mock
/// answers with a success (an empty catalog for fetches).
#[derive(Default)]
pub struct MockEventsApi {
    catalog_responses: Mutex<VecDeque<ApiResult<Vec<EventCategory>>>>,
    register_responses: Mutex<VecDeque<ApiResult<()>>>,
    unregister_responses: Mutex<VecDeque<ApiResult<()>>>,
    catalog_calls: AtomicUsize,
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
}

impl MockEventsApi {
    /// An unscripted mock that answers every call with a success.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a catalog fetch response.
    #[must_use]
    pub fn with_catalog(self, response: ApiResult<Vec<EventCategory>>) -> Self {
        lock(&self.catalog_responses).push_back(response);
        self
    }

    /// Queues a register response.
    #[must_use]
    pub fn with_register(self, response: ApiResult<()>) -> Self {
        lock(&self.register_responses).push_back(response);
        self
    }

    /// Queues an unregister response.
    #[must_use]
    pub fn with_unregister(self, response: ApiResult<()>) -> Self {
        lock(&self.unregister_responses).push_back(response);
        self
    }

    /// How many catalog fetches have been issued.
    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    /// How many register calls have been issued.
    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    /// How many unregister calls have been issued.
    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }
}

impl EventsApi for MockEventsApi {
    fn fetch_catalog(&self) -> BoxFuture<'static, ApiResult<Vec<EventCategory>>> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        let response = lock(&self.catalog_responses)
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { response })
    }

    fn register(
        &self,
        _category_id: String,
        _event_id: String,
        _token: String,
    ) -> BoxFuture<'static, ApiResult<()>> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        let response = lock(&self.register_responses).pop_front().unwrap_or(Ok(()));
        Box::pin(async move { response })
    }

    fn unregister(
        &self,
        _category_id: String,
        _event_id: String,
        _token: String,
    ) -> BoxFuture<'static, ApiResult<()>> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        let response = lock(&self.unregister_responses)
            .pop_front()
            .unwrap_or(Ok(()));
        Box::pin(async move { response })
    }
}

/// A rejection with the given status and server message, for scripting.
#[must_use]
pub fn rejection(status: u16, message: &str) -> ApiError {
    ApiError::Rejected {
        status,
        message: Some(message.to_string()),
    }
}

/// A [`Navigator`] that counts login redirects instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    /// A navigator with no recorded redirects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the viewer was sent to login.
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
