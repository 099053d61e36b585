//! The registration reducer: all state transitions for the events page.

use std::sync::Arc;

use samyak_core::effect::{Effect, Effects};
use samyak_core::reducer::Reducer;
use samyak_core::smallvec;

use crate::actions::RegistrationAction;
use crate::constants::{
    CATALOG_LOAD_FAILED, REGISTER_FAILED, REGISTER_SUCCESS, TERMS_NOT_ACCEPTED, UNREGISTER_FAILED,
    UNREGISTER_SUCCESS,
};
use crate::environment::RegistrationEnvironment;
use crate::error::RegistrationError;
use crate::gate::{self, GateAction};
use crate::types::{MutationKind, Notification, RegistrationState, Selection, Session};

/// Reducer for the events page.
///
/// Pure with respect to state: every side effect is returned as an
/// [`Effect`] value, and network outcomes come back in as actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            RegistrationAction::LoadCatalog => {
                smallvec![Self::load_catalog(env)]
            }

            RegistrationAction::CatalogLoaded(catalog) => {
                state.catalog = catalog;
                state.catalog_error = None;
                Self::no_effects()
            }

            RegistrationAction::CatalogLoadFailed { message } => {
                // Keep whatever catalog we already had; the banner and the
                // stale listing can coexist.
                state.catalog_error = Some(message);
                Self::no_effects()
            }

            RegistrationAction::QueryChanged(query) => {
                state.query = query;
                Self::no_effects()
            }

            RegistrationAction::RegisterClicked {
                category_id,
                event_id,
            } => Self::begin_selection(state, env, &category_id, &event_id),

            RegistrationAction::TermsToggled(accepted) => {
                if let Session::Selecting {
                    accepted_terms,
                    form_error,
                    ..
                } = &mut state.session
                {
                    *accepted_terms = accepted;
                    if accepted {
                        *form_error = None;
                    }
                }
                Self::no_effects()
            }

            RegistrationAction::SubmitRegistration => Self::submit_registration(state, env),

            RegistrationAction::RegistrationAccepted => {
                if !matches!(
                    state.session,
                    Session::Submitting {
                        kind: MutationKind::Register,
                        ..
                    }
                ) {
                    return Self::no_effects();
                }
                state.session = Session::Idle;
                state.last_error = None;
                state.notification = Some(Notification::new(REGISTER_SUCCESS, env.clock.now()));
                // Exactly one refetch, so membership and counts reflect
                // the committed change.
                smallvec![Self::load_catalog(env)]
            }

            RegistrationAction::RegistrationRejected { message } => {
                let Session::Submitting {
                    selection,
                    kind: MutationKind::Register,
                } = &state.session
                else {
                    return Self::no_effects();
                };
                // Back to the popup with the acceptance intact; the viewer
                // fixes nothing by re-ticking a box the server ignored.
                state.session = Session::Selecting {
                    selection: selection.clone(),
                    accepted_terms: true,
                    form_error: Some(RegistrationError::ServerRejection(message).to_string()),
                };
                Self::no_effects()
            }

            RegistrationAction::PopupClosed => {
                if matches!(state.session, Session::Selecting { .. }) {
                    state.session = Session::Idle;
                }
                Self::no_effects()
            }

            RegistrationAction::UnregisterClicked {
                category_id,
                event_id,
            } => Self::begin_unregistration(state, env, &category_id, &event_id),

            RegistrationAction::UnregistrationAccepted => {
                if !matches!(
                    state.session,
                    Session::Submitting {
                        kind: MutationKind::Unregister,
                        ..
                    }
                ) {
                    return Self::no_effects();
                }
                state.session = Session::Idle;
                state.last_error = None;
                state.notification = Some(Notification::new(UNREGISTER_SUCCESS, env.clock.now()));
                smallvec![Self::load_catalog(env)]
            }

            RegistrationAction::UnregistrationRejected { message } => {
                if !matches!(
                    state.session,
                    Session::Submitting {
                        kind: MutationKind::Unregister,
                        ..
                    }
                ) {
                    return Self::no_effects();
                }
                // No popup to return to; surface the failure inline.
                state.session = Session::Idle;
                state.last_error =
                    Some(RegistrationError::ServerRejection(message).to_string());
                Self::no_effects()
            }

            RegistrationAction::NotificationDismissed => {
                state.notification = None;
                Self::no_effects()
            }

            RegistrationAction::EventDetailsToggled { event_id } => {
                state.view.toggle_details(&event_id);
                Self::no_effects()
            }

            RegistrationAction::MenuToggled => {
                state.view.menu_open = !state.view.menu_open;
                Self::no_effects()
            }

            RegistrationAction::ProfileToggled => {
                state.view.profile_open = !state.view.profile_open;
                Self::no_effects()
            }
        }
    }
}

impl RegistrationReducer {
    /// Effect that fetches the catalog and feeds the outcome back in.
    fn load_catalog(env: &RegistrationEnvironment) -> Effect<RegistrationAction> {
        let api = Arc::clone(&env.api);
        Effect::future(async move {
            match api.fetch_catalog().await {
                Ok(catalog) => Some(RegistrationAction::CatalogLoaded(catalog)),
                Err(error) => {
                    tracing::warn!(%error, "Catalog fetch failed");
                    Some(RegistrationAction::CatalogLoadFailed {
                        message: RegistrationError::Fetch(CATALOG_LOAD_FAILED.to_string())
                            .to_string(),
                    })
                }
            }
        })
    }

    /// Effect that sends the viewer to login without touching state.
    fn redirect_to_login(env: &RegistrationEnvironment) -> Effect<RegistrationAction> {
        let navigator = Arc::clone(&env.navigator);
        Effect::future(async move {
            navigator.to_login();
            None
        })
    }

    /// Opens the terms popup for an event, if the gate allows registering.
    fn begin_selection(
        state: &mut RegistrationState,
        env: &RegistrationEnvironment,
        category_id: &str,
        event_id: &str,
    ) -> Effects<RegistrationAction> {
        if !state.session.is_idle() {
            return Self::no_effects();
        }
        let viewer = env.session.viewer_id();
        let Some(event) = state.find_event(category_id, event_id).cloned() else {
            tracing::debug!(category_id, event_id, "Register click on unknown event");
            return Self::no_effects();
        };
        if gate::action(&event, viewer.as_deref()) != GateAction::Register {
            return Self::no_effects();
        }
        state.session = Session::Selecting {
            selection: Selection {
                category_id: category_id.to_string(),
                event,
            },
            accepted_terms: false,
            form_error: None,
        };
        Self::no_effects()
    }

    /// Validates the popup and, if everything holds, fires the register
    /// request. Validation failures never reach the network.
    fn submit_registration(
        state: &mut RegistrationState,
        env: &RegistrationEnvironment,
    ) -> Effects<RegistrationAction> {
        let Session::Selecting {
            selection,
            accepted_terms,
            form_error,
        } = &mut state.session
        else {
            return Self::no_effects();
        };

        let token = match Self::submission_check(env, *accepted_terms) {
            Ok(token) => token,
            Err(RegistrationError::AuthRequired) => {
                return smallvec![Self::redirect_to_login(env)];
            }
            Err(error) => {
                *form_error = Some(error.to_string());
                return Self::no_effects();
            }
        };

        *form_error = None;
        let selection = selection.clone();
        state.session = Session::Submitting {
            selection: selection.clone(),
            kind: MutationKind::Register,
        };

        let api = Arc::clone(&env.api);
        smallvec![Effect::future(async move {
            match api
                .register(selection.category_id, selection.event.id, token)
                .await
            {
                Ok(()) => Some(RegistrationAction::RegistrationAccepted),
                Err(error) => {
                    tracing::warn!(%error, "Registration rejected");
                    Some(RegistrationAction::RegistrationRejected {
                        message: error
                            .server_message()
                            .map_or_else(|| REGISTER_FAILED.to_string(), ToString::to_string),
                    })
                }
            }
        })]
    }

    /// Terms first, then credentials, matching the order the popup
    /// surfaces problems in.
    fn submission_check(
        env: &RegistrationEnvironment,
        accepted_terms: bool,
    ) -> Result<String, RegistrationError> {
        if !accepted_terms {
            return Err(RegistrationError::Validation(
                TERMS_NOT_ACCEPTED.to_string(),
            ));
        }
        env.session
            .auth_token()
            .ok_or(RegistrationError::AuthRequired)
    }

    /// Fires the unregister request straight away; there is no popup or
    /// terms step on the way out of an event.
    fn begin_unregistration(
        state: &mut RegistrationState,
        env: &RegistrationEnvironment,
        category_id: &str,
        event_id: &str,
    ) -> Effects<RegistrationAction> {
        if !state.session.is_idle() {
            return Self::no_effects();
        }
        let Some(token) = env.session.auth_token() else {
            return smallvec![Self::redirect_to_login(env)];
        };
        let viewer = env.session.viewer_id();
        let Some(event) = state.find_event(category_id, event_id).cloned() else {
            tracing::debug!(category_id, event_id, "Unregister click on unknown event");
            return Self::no_effects();
        };
        if gate::action(&event, viewer.as_deref()) != GateAction::Unregister {
            return Self::no_effects();
        }
        let selection = Selection {
            category_id: category_id.to_string(),
            event,
        };
        state.session = Session::Submitting {
            selection: selection.clone(),
            kind: MutationKind::Unregister,
        };

        let api = Arc::clone(&env.api);
        smallvec![Effect::future(async move {
            match api
                .unregister(selection.category_id, selection.event.id, token)
                .await
            {
                Ok(()) => Some(RegistrationAction::UnregistrationAccepted),
                Err(error) => {
                    tracing::warn!(%error, "Unregistration rejected");
                    Some(RegistrationAction::UnregistrationRejected {
                        message: error
                            .server_message()
                            .map_or_else(|| UNREGISTER_FAILED.to_string(), ToString::to_string),
                    })
                }
            }
        })]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use samyak_api::{Event, EventCategory, EventDetails};
    use samyak_core::environment::Clock;
    use samyak_testing::ReducerTest;
    use samyak_testing::assertions::{assert_no_effects, assert_single_future_effect};
    use samyak_testing::mocks::FixedClock;

    use crate::environment::StaticSession;
    use crate::mocks::{MockEventsApi, RecordingNavigator};

    use super::*;

    fn event(id: &str, limit: u32, registered: &[&str]) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            image: String::new(),
            participant_limit: limit,
            registered_students: registered.iter().map(ToString::to_string).collect(),
            terms_and_conditions: "Carry your college ID. Report 30 minutes early.".to_string(),
            details: EventDetails::default(),
        }
    }

    fn catalog() -> Vec<EventCategory> {
        vec![EventCategory {
            id: "c1".to_string(),
            category_name: "Technical".to_string(),
            events: vec![
                event("e1", 3, &[]),
                event("e2", 2, &["u1", "u2"]),
                event("e3", 5, &["u1"]),
            ],
        }]
    }

    fn loaded_state() -> RegistrationState {
        RegistrationState {
            catalog: catalog(),
            ..RegistrationState::default()
        }
    }

    fn signed_in_env() -> RegistrationEnvironment {
        RegistrationEnvironment::new(
            Arc::new(MockEventsApi::new()),
            Arc::new(StaticSession::signed_in("token-1", "u1")),
            Arc::new(RecordingNavigator::new()),
            Arc::new(FixedClock::epoch()),
        )
    }

    fn selecting(accepted: bool) -> Session {
        Session::Selecting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e1", 3, &[]),
            },
            accepted_terms: accepted,
            form_error: None,
        }
    }

    #[test]
    fn register_click_opens_terms_popup() {
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(loaded_state())
            .when_action(RegistrationAction::RegisterClicked {
                category_id: "c1".to_string(),
                event_id: "e1".to_string(),
            })
            .then_state(|state| {
                let Session::Selecting {
                    selection,
                    accepted_terms,
                    form_error,
                } = &state.session
                else {
                    panic!("expected terms popup, got {:?}", state.session);
                };
                assert_eq!(selection.event.id, "e1");
                assert!(!accepted_terms);
                assert!(form_error.is_none());
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn register_click_on_full_event_is_ignored() {
        // e2 is at its limit and u3 is not registered for it.
        let env = RegistrationEnvironment::new(
            Arc::new(MockEventsApi::new()),
            Arc::new(StaticSession::signed_in("token-1", "u3")),
            Arc::new(RecordingNavigator::new()),
            Arc::new(FixedClock::epoch()),
        );
        ReducerTest::new(RegistrationReducer)
            .with_env(env)
            .given_state(loaded_state())
            .when_action(RegistrationAction::RegisterClicked {
                category_id: "c1".to_string(),
                event_id: "e2".to_string(),
            })
            .then_state(|state| assert!(state.session.is_idle()))
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn register_click_by_member_is_ignored() {
        // u1 is already registered for e3; the card offers Unregister.
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(loaded_state())
            .when_action(RegistrationAction::RegisterClicked {
                category_id: "c1".to_string(),
                event_id: "e3".to_string(),
            })
            .then_state(|state| assert!(state.session.is_idle()))
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn submit_without_terms_fails_locally() {
        let mut state = loaded_state();
        state.session = selecting(false);
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::SubmitRegistration)
            .then_state(|state| {
                let Session::Selecting { form_error, .. } = &state.session else {
                    panic!("popup should stay open");
                };
                assert_eq!(form_error.as_deref(), Some(TERMS_NOT_ACCEPTED));
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn submit_without_token_redirects_without_submitting() {
        let navigator = Arc::new(RecordingNavigator::new());
        let api = Arc::new(MockEventsApi::new());
        let env = RegistrationEnvironment::new(
            Arc::clone(&api) as Arc<dyn crate::environment::EventsApi>,
            Arc::new(StaticSession::anonymous()),
            Arc::clone(&navigator) as Arc<dyn crate::environment::Navigator>,
            Arc::new(FixedClock::epoch()),
        );
        let mut state = loaded_state();
        state.session = selecting(true);
        ReducerTest::new(RegistrationReducer)
            .with_env(env)
            .given_state(state)
            .when_action(RegistrationAction::SubmitRegistration)
            .then_state(|state| {
                // The popup is left as-is; the redirect is the only outcome.
                assert!(matches!(state.session, Session::Selecting { .. }));
            })
            .then_effects(assert_single_future_effect)
            .run();
        assert_eq!(api.register_calls(), 0);
    }

    #[test]
    fn submit_with_terms_enters_submitting() {
        let mut state = loaded_state();
        state.session = selecting(true);
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::SubmitRegistration)
            .then_state(|state| {
                assert!(matches!(
                    state.session,
                    Session::Submitting {
                        kind: MutationKind::Register,
                        ..
                    }
                ));
            })
            .then_effects(assert_single_future_effect)
            .run();
    }

    #[test]
    fn rejection_reopens_popup_with_terms_still_accepted() {
        let mut state = loaded_state();
        state.session = Session::Submitting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e1", 3, &[]),
            },
            kind: MutationKind::Register,
        };
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::RegistrationRejected {
                message: "Event full".to_string(),
            })
            .then_state(|state| {
                let Session::Selecting {
                    accepted_terms,
                    form_error,
                    ..
                } = &state.session
                else {
                    panic!("expected popup, got {:?}", state.session);
                };
                assert!(accepted_terms);
                assert_eq!(form_error.as_deref(), Some("Event full"));
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn acceptance_raises_notification_and_reloads_once() {
        let mut state = loaded_state();
        state.session = Session::Submitting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e1", 3, &[]),
            },
            kind: MutationKind::Register,
        };
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::RegistrationAccepted)
            .then_state(|state| {
                assert!(state.session.is_idle());
                let notification = state.notification.as_ref().expect("notification raised");
                assert_eq!(notification.message, REGISTER_SUCCESS);
            })
            .then_effects(assert_single_future_effect)
            .run();
    }

    #[test]
    fn new_notification_replaces_the_previous_one() {
        let mut state = loaded_state();
        state.notification = Some(Notification::new("old banner", FixedClock::epoch().now()));
        state.session = Session::Submitting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e3", 5, &["u1"]),
            },
            kind: MutationKind::Unregister,
        };
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::UnregistrationAccepted)
            .then_state(|state| {
                let notification = state.notification.as_ref().expect("notification raised");
                assert_eq!(notification.message, UNREGISTER_SUCCESS);
            })
            .run();
    }

    #[test]
    fn dismissing_notification_clears_it() {
        let mut state = loaded_state();
        state.notification = Some(Notification::new("old banner", FixedClock::epoch().now()));
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::NotificationDismissed)
            .then_state(|state| assert!(state.notification.is_none()))
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn closing_popup_discards_acceptance_and_error() {
        let mut state = loaded_state();
        state.session = Session::Selecting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e1", 3, &[]),
            },
            accepted_terms: true,
            form_error: Some("Event full".to_string()),
        };
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::PopupClosed)
            .then_state(|state| assert!(state.session.is_idle()))
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn unregister_click_fires_request_without_popup() {
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(loaded_state())
            .when_action(RegistrationAction::UnregisterClicked {
                category_id: "c1".to_string(),
                event_id: "e3".to_string(),
            })
            .then_state(|state| {
                assert!(matches!(
                    state.session,
                    Session::Submitting {
                        kind: MutationKind::Unregister,
                        ..
                    }
                ));
                assert!(!state.session.popup_open());
            })
            .then_effects(assert_single_future_effect)
            .run();
    }

    #[test]
    fn unregistration_rejection_surfaces_inline_error() {
        let mut state = loaded_state();
        state.session = Session::Submitting {
            selection: Selection {
                category_id: "c1".to_string(),
                event: event("e3", 5, &["u1"]),
            },
            kind: MutationKind::Unregister,
        };
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::UnregistrationRejected {
                message: UNREGISTER_FAILED.to_string(),
            })
            .then_state(|state| {
                assert!(state.session.is_idle());
                assert_eq!(state.last_error.as_deref(), Some(UNREGISTER_FAILED));
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn catalog_failure_keeps_stale_listing() {
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(loaded_state())
            .when_action(RegistrationAction::CatalogLoadFailed {
                message: CATALOG_LOAD_FAILED.to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.catalog_error.as_deref(), Some(CATALOG_LOAD_FAILED));
                assert!(!state.catalog.is_empty());
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn query_changes_narrow_the_visible_catalog_only() {
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(loaded_state())
            .when_action(RegistrationAction::QueryChanged("event e2".to_string()))
            .then_state(|state| {
                assert_eq!(state.catalog.len(), 1);
                assert_eq!(state.catalog[0].events.len(), 3);
                let visible = state.visible_catalog();
                assert_eq!(visible.len(), 1);
                assert_eq!(visible[0].events.len(), 1);
                assert_eq!(visible[0].events[0].id, "e2");
            })
            .run();
    }

    #[test]
    fn second_click_during_active_session_is_ignored() {
        let mut state = loaded_state();
        state.session = selecting(false);
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(state)
            .when_action(RegistrationAction::UnregisterClicked {
                category_id: "c1".to_string(),
                event_id: "e3".to_string(),
            })
            .then_state(|state| {
                assert!(matches!(state.session, Session::Selecting { .. }));
            })
            .then_effects(assert_no_effects)
            .run();
    }

    #[test]
    fn chrome_toggles_flip_independently() {
        ReducerTest::new(RegistrationReducer)
            .with_env(signed_in_env())
            .given_state(RegistrationState::default())
            .when_action(RegistrationAction::MenuToggled)
            .then_state(|state| {
                assert!(state.view.menu_open);
                assert!(!state.view.profile_open);
            })
            .run();
    }
}
