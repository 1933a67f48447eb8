use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ApplicantProfile;
use super::scenario::ScenarioChange;
use super::service::{AssessmentError, CreditAssessmentService};

/// Scenario request body: the score to project from plus the proposed changes.
/// Supplying both loan fields adds a rate outlook to the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    pub current_score: u16,
    #[serde(flatten)]
    pub change: ScenarioChange,
    pub loan_amount: Option<f64>,
    pub loan_tenure_months: Option<u32>,
}

/// Router builder exposing the assessment and scenario endpoints.
pub fn assessment_router(service: Arc<CreditAssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/credit/assessments", post(assess_handler))
        .route("/api/v1/credit/scenarios", post(scenario_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response {
    match service.assess(&profile) {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(err) => rejection(err),
    }
}

pub(crate) async fn scenario_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    axum::Json(request): axum::Json<ScenarioRequest>,
) -> Response {
    let projected = match (request.loan_amount, request.loan_tenure_months) {
        (Some(amount), Some(months)) => {
            service.project_for_loan(request.current_score, &request.change, amount, months)
        }
        _ => service.project(request.current_score, &request.change),
    };

    match projected {
        Ok(projection) => (StatusCode::OK, axum::Json(projection)).into_response(),
        Err(err) => rejection(err),
    }
}

fn rejection(err: AssessmentError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
