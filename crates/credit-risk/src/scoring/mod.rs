//! Credit scoring engine and the layers around it.
//!
//! [`engine`] and [`scenario`] are pure functions over their inputs. Validation, timestamps,
//! logging, and batch I/O live in [`intake`], [`service`], and [`batch`].

pub mod batch;
pub mod domain;
pub mod engine;
pub mod insights;
pub mod intake;
pub mod loan_metrics;
pub mod router;
pub mod scenario;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{ApplicantBatchImporter, BatchApplicant, BatchImportError};
pub use domain::{ApplicantProfile, LoanPurpose, LoanType, ResidenceType, ScoreFactor};
pub use engine::{
    default_probability, evaluate, score, CreditRating, RiskLevel, ScoreBreakdown,
    ScoreComponent, ScoreResult,
};
pub use insights::{AdvisorGuidance, ClientTier, CreditInsights, FactorStrengths, StrengthDimension};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use loan_metrics::LoanMetrics;
pub use router::{assessment_router, ScenarioRequest};
pub use scenario::{
    project, rate_outlook, RateOutlook, ScenarioChange, ScenarioImpact, ScenarioResult,
};
pub use service::{AssessmentError, BatchAssessmentEntry, CreditAssessment, CreditAssessmentService};
