//! Advent calendar Lambda - serves the calendar, single days and static assets.

use std::sync::Arc;

use advent::{Config, SystemClock};
use lambda_http::{run, service_fn, Error};
use tracing::error;
use tracing_subscriber::EnvFilter;
use web::{handler, AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Config::from_env()
        .and_then(|config| AppState::from_config(&config, Box::new(SystemClock)))
        .map_err(|e| {
            error!("Failed to start: {}", e);
            e
        })?;
    let state = Arc::new(state);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
