//! `GET /greeting/{first_name}/{last_name}`.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::GreetingConfig;
use crate::diagnostics::{Diagnosed, OperatorDebug};
use crate::http::request::request_id;
use crate::http::response::failure;
use crate::http::server::AppState;
use crate::pipeline::{GreetingPipeline, GreetingResult, NamePair, PipelineError};

pub async fn greeting(
    State(state): State<AppState>,
    Path((first_name, last_name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let request_id = request_id(&headers);

    tracing::debug!(
        request_id = %request_id,
        first_name = %first_name,
        last_name = %last_name,
        "Greeting request"
    );

    let settings = state.greeting.clone();
    let pair = NamePair::new(first_name, last_name);
    let outcome = tokio::task::spawn_blocking(move || run_pipeline(&settings, pair)).await;

    match outcome {
        Ok(Ok(greeting)) => {
            tracing::info!(request_id = %request_id, greeting = %greeting, "Greeted");
            (StatusCode::OK, greeting.into_string()).into_response()
        }
        Ok(Err(err)) => {
            tracing::warn!(
                request_id = %request_id,
                error = %err,
                trace = %err.render(),
                "Greeting pipeline failed"
            );
            failure(&err, &request_id)
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Greeting worker failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Greeting worker failed").into_response()
        }
    }
}

/// Runs on a blocking-pool thread; debug mode is scoped to that thread.
fn run_pipeline(
    settings: &GreetingConfig,
    pair: NamePair,
) -> Result<GreetingResult, Diagnosed<PipelineError>> {
    let pipeline = GreetingPipeline::new(settings.checkpoints);
    if settings.operator_debug {
        let _debug = OperatorDebug::enable();
        pipeline.greet(pair)
    } else {
        pipeline.greet(pair)
    }
}
