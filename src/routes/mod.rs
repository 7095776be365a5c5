use std::sync::Arc;

use axum::Router;

use crate::Artifacts;

mod health;
mod index;
mod page;
mod predict;

// ---

pub fn router(artifacts: Arc<Artifacts>) -> Router {
    // ---
    Router::new()
        .merge(index::router())
        .merge(predict::router())
        .merge(health::router())
        .with_state(artifacts)
}
