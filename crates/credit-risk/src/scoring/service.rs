use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::batch::BatchApplicant;
use super::domain::ApplicantProfile;
use super::engine::{self, ScoreComponent, ScoreResult};
use super::insights::CreditInsights;
use super::intake::{IntakeGuard, IntakePolicy, IntakeViolation};
use super::loan_metrics::LoanMetrics;
use super::scenario::{self, ScenarioChange, ScenarioResult};

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_reference(assessed_at: DateTime<Utc>) -> String {
    let sequence = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("CR-{}-{sequence:04}", assessed_at.format("%H%M"))
}

/// Full assessment handed to the CLI and HTTP layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditAssessment {
    pub reference: String,
    pub assessed_at: DateTime<Utc>,
    pub result: ScoreResult,
    pub components: Vec<ScoreComponent>,
    pub loan_metrics: LoanMetrics,
    pub insights: CreditInsights,
}

/// Per-row outcome of a batch run. Exactly one of `assessment` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchAssessmentEntry {
    pub row: usize,
    pub applicant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<CreditAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Service composing intake validation, the scoring engine, and the advisory read-outs.
#[derive(Debug, Clone, Default)]
pub struct CreditAssessmentService {
    guard: IntakeGuard,
}

impl CreditAssessmentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self {
            guard: IntakeGuard::with_policy(policy),
        }
    }

    pub fn policy(&self) -> &IntakePolicy {
        self.guard.policy()
    }

    /// Validate and score a profile, stamping the assessment with the current time.
    pub fn assess(&self, profile: &ApplicantProfile) -> Result<CreditAssessment, AssessmentError> {
        self.assess_at(profile, Utc::now())
    }

    pub fn assess_at(
        &self,
        profile: &ApplicantProfile,
        assessed_at: DateTime<Utc>,
    ) -> Result<CreditAssessment, AssessmentError> {
        if let Err(violation) = self.guard.check_profile(profile) {
            warn!(%violation, "applicant profile rejected");
            return Err(violation.into());
        }

        let breakdown = engine::evaluate(profile);
        let loan_metrics = LoanMetrics::from_profile(profile);
        let insights = CreditInsights::from_assessment(profile, &breakdown.result, &loan_metrics);
        let reference = next_reference(assessed_at);

        for component in &breakdown.components {
            debug!(
                %reference,
                factor = component.factor.label(),
                points = component.points,
                notes = %component.notes,
                "score component"
            );
        }
        info!(
            %reference,
            credit_score = breakdown.result.credit_score,
            rating = breakdown.result.rating.label(),
            raw_total = breakdown.raw_total,
            "credit assessment completed"
        );

        Ok(CreditAssessment {
            reference,
            assessed_at,
            result: breakdown.result,
            components: breakdown.components,
            loan_metrics,
            insights,
        })
    }

    /// Validate a scenario request and project the potential score.
    pub fn project(
        &self,
        current_score: u16,
        change: &ScenarioChange,
    ) -> Result<ScenarioResult, AssessmentError> {
        if let Err(violation) = self.guard.check_scenario(current_score, change) {
            warn!(%violation, "scenario request rejected");
            return Err(violation.into());
        }

        let projection = scenario::project(current_score, change);
        info!(
            current_score,
            potential_score = projection.potential_score,
            total_improvement = projection.impact.total_improvement,
            "scenario projected"
        );
        Ok(projection)
    }

    /// Project a scenario and price the gain against the applicant's loan.
    pub fn project_for_loan(
        &self,
        current_score: u16,
        change: &ScenarioChange,
        loan_amount: f64,
        loan_tenure_months: u32,
    ) -> Result<ScenarioResult, AssessmentError> {
        if let Err(violation) = self.guard.check_loan_terms(loan_amount, loan_tenure_months) {
            warn!(%violation, "scenario loan terms rejected");
            return Err(violation.into());
        }

        let projection = self
            .project(current_score, change)?
            .with_loan_terms(loan_amount, loan_tenure_months);
        if let Some(outlook) = &projection.rate_outlook {
            debug!(
                rate_reduction_pct = outlook.rate_reduction_pct,
                estimated_savings = outlook.estimated_savings,
                "rate outlook priced"
            );
        }
        Ok(projection)
    }

    /// Score every row independently; a rejected row does not stop the batch.
    pub fn assess_batch(&self, applicants: &[BatchApplicant]) -> Vec<BatchAssessmentEntry> {
        let assessed_at = Utc::now();
        applicants
            .iter()
            .enumerate()
            .map(|(index, applicant)| {
                let (assessment, error) = match self.assess_at(&applicant.profile, assessed_at) {
                    Ok(assessment) => (Some(assessment), None),
                    Err(err) => (None, Some(err.to_string())),
                };
                BatchAssessmentEntry {
                    row: index + 1,
                    applicant_id: applicant.applicant_id.clone(),
                    assessment,
                    error,
                }
            })
            .collect()
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}
