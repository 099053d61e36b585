//! # Samyak Registration
//!
//! Client-side core for the Samyak fest event registration site: the
//! catalog listing, search filtering, the registration session state
//! machine, the per-event capacity gate, and success/error surfacing.
//!
//! State lives in a [`Store`](samyak_runtime::Store) driven by
//! [`RegistrationReducer`]; backend calls and login redirects are
//! effects resolved through [`RegistrationEnvironment`].
//!
//! ```ignore
//! let store = RegistrationStore::new(
//!     RegistrationState::default(),
//!     RegistrationReducer,
//!     environment,
//! );
//! store.send(RegistrationAction::LoadCatalog).await?;
//! ```

pub mod actions;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod filter;
pub mod gate;
pub mod mocks;
pub mod reducer;
pub mod types;

pub use actions::RegistrationAction;
pub use config::Config;
pub use environment::{
    EventsApi, LoggingNavigator, Navigator, RegistrationEnvironment, SessionContext, StaticSession,
};
pub use error::RegistrationError;
pub use filter::filter_catalog;
pub use gate::{GateAction, action as gate_action};
pub use reducer::RegistrationReducer;
pub use types::{
    MutationKind, Notification, RegistrationState, Selection, Session, ViewState,
};

/// Store type for the events page.
pub type RegistrationStore = samyak_runtime::Store<
    types::RegistrationState,
    actions::RegistrationAction,
    environment::RegistrationEnvironment,
    reducer::RegistrationReducer,
>;
