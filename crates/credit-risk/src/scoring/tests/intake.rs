use super::common::*;
use crate::scoring::intake::{IntakeGuard, IntakePolicy, IntakeViolation};
use crate::scoring::scenario::ScenarioChange;

#[test]
fn accepts_form_defaults() {
    let guard = IntakeGuard::default();

    assert!(guard.check_profile(&reference_profile()).is_ok());
    assert!(guard.check_profile(&distressed_profile()).is_ok());
}

#[test]
fn rejects_age_outside_policy() {
    let guard = IntakeGuard::default();
    let mut profile = reference_profile();
    profile.age = 17;

    let err = guard.check_profile(&profile).expect_err("minor rejected");

    assert_eq!(
        err,
        IntakeViolation::AgeOutOfRange {
            age: 17,
            min: 18,
            max: 100
        }
    );
}

#[test]
fn rejects_negative_income_and_zero_tenure() {
    let guard = IntakeGuard::default();

    let mut profile = reference_profile();
    profile.annual_income = -1.0;
    assert!(matches!(
        guard.check_profile(&profile),
        Err(IntakeViolation::NegativeAmount {
            field: "annual_income",
            ..
        })
    ));

    let mut profile = reference_profile();
    profile.loan_tenure_months = 0;
    assert!(matches!(
        guard.check_profile(&profile),
        Err(IntakeViolation::TenureOutOfRange { months: 0, .. })
    ));
}

#[test]
fn rejects_percentages_over_one_hundred_and_nan() {
    let guard = IntakeGuard::default();

    let mut profile = reference_profile();
    profile.credit_utilization_ratio = 120.0;
    assert!(matches!(
        guard.check_profile(&profile),
        Err(IntakeViolation::PercentageOutOfRange {
            field: "credit_utilization_ratio",
            ..
        })
    ));

    let mut profile = reference_profile();
    profile.delinquency_ratio = f64::NAN;
    assert_eq!(
        guard.check_profile(&profile),
        Err(IntakeViolation::NonFinite {
            field: "delinquency_ratio"
        })
    );
}

#[test]
fn custom_policy_tightens_days_past_due() {
    let guard = IntakeGuard::with_policy(IntakePolicy {
        max_days_past_due: 90.0,
        ..IntakePolicy::default()
    });
    let mut profile = reference_profile();
    profile.avg_days_past_due = 91.0;

    assert!(matches!(
        guard.check_profile(&profile),
        Err(IntakeViolation::DaysPastDueOutOfRange { .. })
    ));
}

#[test]
fn scenario_checks_score_and_levers() {
    let guard = IntakeGuard::default();

    assert!(guard.check_scenario(715, &ScenarioChange::default()).is_ok());
    assert_eq!(
        guard.check_scenario(200, &ScenarioChange::default()),
        Err(IntakeViolation::ScoreOutOfRange { score: 200 })
    );

    let negative_income = ScenarioChange {
        income_increase_pct: -5.0,
        ..ScenarioChange::default()
    };
    assert!(matches!(
        guard.check_scenario(715, &negative_income),
        Err(IntakeViolation::NegativeAmount {
            field: "income_increase_pct",
            ..
        })
    ));

    let penalty = ScenarioChange {
        loan_adjustment: -45.0,
        ..ScenarioChange::default()
    };
    assert!(guard.check_scenario(715, &penalty).is_ok());
}

#[test]
fn loan_terms_reuse_tenure_policy() {
    let guard = IntakeGuard::with_policy(IntakePolicy {
        max_tenure_months: 120,
        ..IntakePolicy::default()
    });

    assert!(guard.check_loan_terms(250_000.0, 120).is_ok());
    assert_eq!(
        guard.check_loan_terms(250_000.0, 121),
        Err(IntakeViolation::TenureOutOfRange {
            months: 121,
            max: 120
        })
    );
    assert_eq!(
        guard.check_loan_terms(f64::INFINITY, 12),
        Err(IntakeViolation::NonFinite {
            field: "loan_amount"
        })
    );
}
