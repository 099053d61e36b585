//! # Samyak Runtime
//!
//! The `Store` runtime that coordinates reducer execution and effect
//! handling for the registration client.
//!
//! ## Core components
//!
//! - **Store**: owns state, runs the reducer, executes effects
//! - **Effect execution**: `Effect::Future` runs in a spawned task; any
//!   action it produces is broadcast to observers and fed back in
//! - **`EffectHandle`**: lets callers (mostly tests) wait for all effects
//!   spawned by one `send` to finish
//!
//! The registration flow deliberately has no retry machinery: every retry
//! is a fresh explicit user action, so a failed effect simply surfaces a
//! failure action and stops.
//!
//! ## Example
//!
//! ```ignore
//! let store = Store::new(initial_state, reducer, environment);
//! let handle = store.send(Action::LoadCatalog).await?;
//! handle.wait().await;
//! let count = store.state(|s| s.catalog.len()).await;
//! ```

use samyak_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for a matching action in `send_and_wait_for`
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed, typically because the store is
        /// shutting down
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion.
///
/// Returned by [`Store::send`]. Awaiting it guarantees every effect spawned
/// by that action (including the feedback sends they trigger directly) has
/// finished.
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };
        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Wait for all tracked effects to complete.
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all tracked effects to complete, up to `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires first.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: completion tracking shared between a handle and its effects.
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

impl Clone for EffectTracking {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
            notifier: self.notifier.clone(),
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop.
///
/// Ensures the counter is updated even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The Store — runtime coordinator for a reducer.
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. The reducer (business logic)
/// 3. The environment (injected dependencies)
/// 4. Effect execution, with actions fed back into the reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Broadcast of every action produced by effects.
    ///
    /// Observers use this for request-response patterns: send a command,
    /// then wait for the terminal result action.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        let (action_broadcast, _) = broadcast::channel(16);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Create a store with a custom action broadcast capacity.
    ///
    /// Default capacity is 16; increase it if observers frequently lag.
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store.
    ///
    /// 1. Acquires the write lock on state
    /// 2. Runs the reducer
    /// 3. Spawns the returned effects
    ///
    /// Returns after *starting* effect execution; await the returned
    /// [`EffectHandle`] to wait for completion.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is shutting down");
            return Err(StoreError::ShutdownInProgress);
        }

        let (handle, tracking) = EffectHandle::new();

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        tracing::trace!(count = effects.len(), "Executing effects");
        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }

        Ok(handle)
    }

    /// Send an action and wait for a matching result action.
    ///
    /// Designed for request-response flows: subscribe to the action
    /// broadcast *before* sending (avoiding a race), send the action, then
    /// return the first effect-produced action matching `predicate`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`] if no matching action arrives in time
    /// - [`StoreError::ChannelClosed`] if the broadcast channel closes
    /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut rx = self.action_broadcast.subscribe();

        self.send(action).await?;

        tokio::time::timeout(timeout, async {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {},
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Action broadcast lagged while waiting");
                    },
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    },
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    /// Subscribe to all actions produced by effects.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Read current state via a closure.
    ///
    /// The closure keeps the read lock short:
    ///
    /// ```ignore
    /// let category_count = store.state(|s| s.catalog.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Initiate graceful shutdown.
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for
    /// pending effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects are still running
    /// when `timeout` expires.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");
        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(50);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("All effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "Shutdown timed out");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Execute one effect with completion tracking.
    ///
    /// Reducer panics propagate (fail fast); effect task panics are
    /// contained by the spawned task, and [`DecrementGuard`] keeps the
    /// counter consistent either way.
    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {
                tracing::trace!("Effect::None (no-op)");
            },
            Effect::Future(fut) => {
                tracking.increment();
                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let store = self.clone();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking);
                    let _pending_guard = pending_guard;

                    if let Some(action) = fut.await {
                        tracing::trace!("Effect produced an action, feeding back");
                        let _ = store.action_broadcast.send(action.clone());
                        let _ = store.send(action).await;
                    }
                });
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samyak_core::effect::{Effect, Effects};
    use samyak_core::smallvec;

    #[derive(Clone, Debug, Default)]
    struct CounterState {
        count: i64,
        loads: usize,
    }

    #[derive(Clone, Debug)]
    enum CounterAction {
        Increment,
        LoadAndIncrement,
        Loaded(i64),
    }

    #[derive(Clone)]
    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut CounterState,
            action: CounterAction,
            (): &(),
        ) -> Effects<CounterAction> {
            match action {
                CounterAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::None]
                },
                CounterAction::LoadAndIncrement => {
                    smallvec![Effect::future(async { Some(CounterAction::Loaded(5)) })]
                },
                CounterAction::Loaded(n) => {
                    state.count += n;
                    state.loads += 1;
                    smallvec![Effect::None]
                },
            }
        }
    }

    #[tokio::test]
    async fn send_applies_reducer_synchronously() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let _ = store.send(CounterAction::Increment).await;
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn future_effect_feeds_action_back() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let mut handle = store.send(CounterAction::LoadAndIncrement).await.unwrap();
        handle.wait().await;

        // The feedback send happens inside the effect task; waiting on the
        // handle covers the future itself, so poll briefly for the count.
        for _ in 0..50 {
            if store.state(|s| s.loads).await == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(store.state(|s| s.count).await, 5);
    }

    #[tokio::test]
    async fn send_and_wait_for_returns_terminal_action() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let result = store
            .send_and_wait_for(
                CounterAction::LoadAndIncrement,
                |a| matches!(a, CounterAction::Loaded(_)),
                Duration::from_secs(1),
            )
            .await;
        assert!(matches!(result, Ok(CounterAction::Loaded(5))));
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.shutdown(Duration::from_secs(1)).await.unwrap();

        let result = store.send(CounterAction::Increment).await;
        assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
    }
}
