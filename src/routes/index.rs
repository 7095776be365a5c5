//! Prediction form page for the machine-condition service.
//!
//! Serves the single interactive page: a sidebar of five bounded numeric
//! controls pre-filled with their declared defaults, the predict action
//! button, and the static model information panel. No inference runs here;
//! the form posts to `/predict` (see `predict.rs`).

use axum::{response::Html, routing::get, Router};

use crate::SensorReadings;

use super::page;

// ---

/// Handle `GET /`.
///
/// Renders the form with every control at its declared default value and no
/// result panel. Deliberately does not touch the loaded artifacts.
async fn index() -> Html<String> {
    // ---
    Html(page::render(&SensorReadings::defaults(), None))
}

/// Create a subrouter containing the form page route.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router, regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
