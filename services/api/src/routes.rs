use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use credit_risk::error::AppError;
use credit_risk::scoring::{
    assessment_router, ApplicantBatchImporter, BatchAssessmentEntry, CreditAssessmentService,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) applicants_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) total: usize,
    pub(crate) assessed: usize,
    pub(crate) rejected: usize,
    pub(crate) entries: Vec<BatchAssessmentEntry>,
}

pub(crate) fn with_assessment_routes(service: Arc<CreditAssessmentService>) -> axum::Router {
    assessment_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/credit/batch", axum::routing::post(batch_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn batch_endpoint(
    Extension(service): Extension<Arc<CreditAssessmentService>>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let reader = Cursor::new(payload.applicants_csv.into_bytes());
    let applicants = ApplicantBatchImporter::from_reader(reader)?;
    let entries = service.assess_batch(&applicants);
    let assessed = entries
        .iter()
        .filter(|entry| entry.assessment.is_some())
        .count();

    Ok(Json(BatchResponse {
        total: entries.len(),
        assessed,
        rejected: entries.len() - assessed,
        entries,
    }))
}
