use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use shared::{
    content, sanitizers, schema, ContactAck, Project, RecordedSubmission, Service,
    ValidationResult,
};

use crate::{error::ApiError, state::AppState};

/// Query params for GET /api/portfolio
#[derive(Debug, serde::Deserialize)]
pub struct PortfolioQuery {
    pub featured: Option<bool>,
}

/// Accept one contact-form submission.
///
/// The pipeline is strictly linear: parse, validate, sanitize, record,
/// acknowledge. The client validates locally with the same schema, but
/// that is a round-trip optimization, not a trust boundary — the record
/// is always re-validated here.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    // Malformed bodies are a request-level fault, not a validation
    // failure: the caller gets the generic server-error outcome.
    let Json(body) = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(error = %err.body_text(), "failed to parse contact request body");
            return ApiError::internal().into_response();
        }
    };

    let submission = match schema::validate_value(&body) {
        ValidationResult::Valid(submission) => submission,
        ValidationResult::Invalid(details) => {
            tracing::debug!(failing_fields = details.len(), "contact submission rejected");
            return ApiError::validation(details).into_response();
        }
    };

    let record = RecordedSubmission {
        received_at: chrono::Utc::now(),
        submission: sanitizers::sanitize(&submission),
    };

    if let Err(err) = state.recorder.record(&record).await {
        tracing::error!(error = %err, "failed to record contact submission");
        return ApiError::internal().into_response();
    }

    (StatusCode::OK, Json(ContactAck::new())).into_response()
}

/// List the consultancy's service offerings
pub async fn list_services() -> Json<Vec<Service>> {
    Json(content::services())
}

/// List portfolio projects; ?featured=true narrows to featured work
pub async fn list_portfolio(Query(params): Query<PortfolioQuery>) -> Json<Vec<Project>> {
    let mut projects = content::projects();
    if params.featured == Some(true) {
        projects.retain(|project| project.featured);
    }
    Json(projects)
}

/// List the published project-type labels offered by the contact form
pub async fn list_project_types() -> Json<Value> {
    Json(json!(content::PROJECT_TYPES))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": now,
            "uptime_secs": uptime
        })),
    )
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}
