use std::sync::Arc;

use axum::{
    extract::State, http::StatusCode, response::Html, response::IntoResponse, routing::post, Form,
    Router,
};
use tracing::{debug, error, info};

use crate::{Artifacts, RawSensorInput};

use super::page;

// ---

pub fn router() -> Router<Arc<Artifacts>> {
    // ---
    Router::new().route("/predict", post(handler))
}

async fn handler(
    State(artifacts): State<Arc<Artifacts>>,
    Form(input): Form<RawSensorInput>,
) -> impl IntoResponse {
    // ---
    info!("POST /predict - Running inference");

    // Step 1: Clamp raw form values into the fixed-order record
    debug!("POST /predict - Raw input: {:?}", input);

    let readings = input.to_clamped();

    // Step 2: transform + predict against the cached artifact pair
    let verdict = match artifacts.classify(&readings) {
        Ok(verdict) => verdict,
        Err(e) => {
            error!("Inference failed: {:#}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Inference failed").into_response();
        }
    };

    info!("Inference complete: {:?}", verdict);

    // Step 3: Re-render the page with the clamped values and the verdict panel
    (StatusCode::OK, Html(page::render(&readings, Some(verdict)))).into_response()
}
