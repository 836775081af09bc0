//! Axum route handlers for the assist API. One generic handler serves every use case.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assist::pipeline::{run, UseCase};
use crate::errors::AppError;
use crate::state::AppState;

/// Envelope around a use case result. `result` is passed through untouched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponse<T> {
    pub request_id: Uuid,
    pub use_case: &'static str,
    pub generated_at: DateTime<Utc>,
    pub result: T,
}

/// POST /api/v1/assist/{generate-description,suggest-keywords,optimize-tone}
///
/// The body is taken as raw JSON so that absent, null, non-string and blank
/// fields all reach the input validator and come back as a 400 naming the field.
/// Failures are logged here, once, with their kind and request id.
pub async fn handle_assist<U: UseCase>(
    State(state): State<AppState>,
    Json(candidate): Json<Value>,
) -> Result<Json<AssistResponse<U::Output>>, AppError> {
    let request_id = Uuid::new_v4();
    let use_case = U::CONFIG.name;
    info!("{use_case}: request {request_id} received");

    let result = run::<U>(state.llm.as_ref(), &candidate).await.map_err(|e| {
        warn!(kind = e.kind(), "{use_case}: request {request_id} failed: {e}");
        e
    })?;

    info!("{use_case}: request {request_id} completed");
    Ok(Json(AssistResponse {
        request_id,
        use_case,
        generated_at: Utc::now(),
        result,
    }))
}
