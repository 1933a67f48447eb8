use super::common::*;
use crate::scoring::batch::BatchApplicant;
use crate::scoring::engine::CreditRating;
use crate::scoring::insights::ClientTier;
use crate::scoring::scenario::ScenarioChange;
use crate::scoring::service::{AssessmentError, CreditAssessmentService};
use crate::scoring::intake::IntakeViolation;

#[test]
fn assessment_combines_score_metrics_and_insights() {
    let service = CreditAssessmentService::new();

    let assessment = service
        .assess_at(&reference_profile(), assessed_at())
        .expect("profile accepted");

    assert_eq!(assessment.result.credit_score, 715);
    assert_eq!(assessment.result.rating, CreditRating::Good);
    assert_eq!(assessment.components.len(), 10);
    assert_eq!(assessment.insights.tier, ClientTier::Standard);
    assert!(assessment.loan_metrics.monthly_emi > 0.0);
    assert_eq!(assessment.assessed_at, assessed_at());
    assert!(assessment.reference.starts_with("CR-1430-"));
}

#[test]
fn references_are_unique_per_assessment() {
    let service = CreditAssessmentService::new();

    let first = service
        .assess_at(&reference_profile(), assessed_at())
        .expect("first accepted");
    let second = service
        .assess_at(&reference_profile(), assessed_at())
        .expect("second accepted");

    assert_ne!(first.reference, second.reference);
    assert_eq!(first.result, second.result);
}

#[test]
fn out_of_range_profiles_are_rejected_before_scoring() {
    let service = CreditAssessmentService::new();
    let mut profile = reference_profile();
    profile.age = 140;

    let err = service.assess(&profile).expect_err("age rejected");

    assert!(matches!(
        err,
        AssessmentError::Intake(IntakeViolation::AgeOutOfRange { age: 140, .. })
    ));
    assert!(err.to_string().contains("age 140"));
}

#[test]
fn projection_runs_through_intake_guard() {
    let service = CreditAssessmentService::new();
    let change = ScenarioChange {
        income_increase_pct: 10.0,
        utilization_current: 35.0,
        utilization_target: 20.0,
        loan_adjustment: 0.0,
    };

    let projection = service.project(715, &change).expect("scenario accepted");
    assert!(approx_eq(projection.impact.total_improvement, 26.0));
    assert!(approx_eq(projection.potential_score, 741.0));

    let err = service
        .project(900, &change)
        .expect_err("score out of range");
    assert!(matches!(
        err,
        AssessmentError::Intake(IntakeViolation::ScoreOutOfRange { score: 900 })
    ));
}

#[test]
fn batch_keeps_going_after_rejected_rows() {
    let service = CreditAssessmentService::new();
    let mut invalid = reference_profile();
    invalid.credit_utilization_ratio = 150.0;
    let applicants = vec![
        BatchApplicant {
            applicant_id: Some("A-1".to_string()),
            profile: reference_profile(),
        },
        BatchApplicant {
            applicant_id: Some("A-2".to_string()),
            profile: invalid,
        },
        BatchApplicant {
            applicant_id: None,
            profile: boundary_profile(),
        },
    ];

    let entries = service.assess_batch(&applicants);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].row, 1);
    assert!(entries[0].assessment.is_some());
    assert!(entries[1].assessment.is_none());
    assert!(entries[1]
        .error
        .as_deref()
        .is_some_and(|message| message.contains("credit_utilization_ratio")));
    let third = entries[2].assessment.as_ref().expect("third scored");
    assert_eq!(third.result.credit_score, 750);
    assert!(entries[2].applicant_id.is_none());
}

#[test]
fn loan_priced_projection_adds_rate_outlook() {
    let service = CreditAssessmentService::new();
    let change = ScenarioChange {
        income_increase_pct: 10.0,
        utilization_current: 35.0,
        utilization_target: 20.0,
        loan_adjustment: 0.0,
    };

    let projection = service
        .project_for_loan(715, &change, 5_000_000.0, 36)
        .expect("scenario accepted");

    // 26 point gain: 1.3% off the rate, 5_000_000 x 1.3% x 3 years
    let outlook = projection.rate_outlook.expect("gain priced");
    assert!(approx_eq(outlook.rate_reduction_pct, 1.3));
    assert!((outlook.estimated_savings - 195_000.0).abs() < 1e-6);

    let err = service
        .project_for_loan(715, &change, -1.0, 36)
        .expect_err("negative loan rejected");
    assert!(matches!(
        err,
        AssessmentError::Intake(IntakeViolation::NegativeAmount {
            field: "loan_amount",
            ..
        })
    ));
}
