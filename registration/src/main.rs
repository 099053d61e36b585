//! Headless driver for the registration client.
//!
//! Loads the catalog from the configured backend and prints a summary of
//! what the events page would render. Useful for smoke-testing a backend
//! without the browser front-end.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use samyak_api::EventsClient;
use samyak_core::environment::SystemClock;
use samyak_registration::{
    Config, LoggingNavigator, RegistrationAction, RegistrationEnvironment, RegistrationReducer,
    RegistrationState, RegistrationStore, StaticSession, gate_action,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .init();

    tracing::info!(api_url = %config.api_url, "Starting registration client");

    let session = StaticSession::from_parts(config.auth_token.clone(), config.viewer_id.clone());
    let environment = RegistrationEnvironment::new(
        Arc::new(EventsClient::new(&config.api_url)),
        Arc::new(session),
        Arc::new(LoggingNavigator),
        Arc::new(SystemClock),
    );
    let store = RegistrationStore::new(RegistrationState::default(), RegistrationReducer, environment);

    let outcome = store
        .send_and_wait_for(
            RegistrationAction::LoadCatalog,
            |action| {
                matches!(
                    action,
                    RegistrationAction::CatalogLoaded(_)
                        | RegistrationAction::CatalogLoadFailed { .. }
                )
            },
            Duration::from_secs(10),
        )
        .await?;

    // The broadcast carries the catalog itself; reading it from the action
    // avoids racing the feedback send that writes store state.
    match outcome {
        RegistrationAction::CatalogLoaded(catalog) => {
            let viewer = config.viewer_id.clone();
            for category in &catalog {
                println!("{} ({} events)", category.category_name, category.events.len());
                for event in &category.events {
                    println!(
                        "  {:<30} {:>3}/{:<3} {:?}",
                        event.title,
                        event.spots_taken(),
                        event.participant_limit,
                        gate_action(event, viewer.as_deref()),
                    );
                }
            }
        }
        RegistrationAction::CatalogLoadFailed { message } => {
            eprintln!("{message}");
        }
        _ => {}
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
