use chrono::{DateTime, TimeZone, Utc};

use crate::scoring::domain::{ApplicantProfile, LoanPurpose, LoanType, ResidenceType};

/// Intake form defaults: scores 715 (Good) under the rule table.
pub(super) fn reference_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 35,
        annual_income: 1_200_000.0,
        loan_amount: 5_000_000.0,
        loan_tenure_months: 36,
        avg_days_past_due: 5.0,
        delinquency_ratio: 10.0,
        credit_utilization_ratio: 35.0,
        num_open_accounts: 2,
        residence_type: ResidenceType::Owned,
        loan_purpose: LoanPurpose::Home,
        loan_type: LoanType::Unsecured,
    }
}

/// Lands exactly on the Excellent boundary (750).
pub(super) fn boundary_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 40,
        annual_income: 1_200_000.0,
        loan_amount: 300_000.0,
        loan_tenure_months: 60,
        avg_days_past_due: 10.0,
        delinquency_ratio: 8.0,
        credit_utilization_ratio: 35.0,
        num_open_accounts: 2,
        residence_type: ResidenceType::Owned,
        loan_purpose: LoanPurpose::Home,
        loan_type: LoanType::Unsecured,
    }
}

/// Every factor in its worst bracket.
pub(super) fn distressed_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 20,
        annual_income: 100_000.0,
        loan_amount: 1_000_000.0,
        loan_tenure_months: 12,
        avg_days_past_due: 120.0,
        delinquency_ratio: 50.0,
        credit_utilization_ratio: 95.0,
        num_open_accounts: 14,
        residence_type: ResidenceType::WithFamily,
        loan_purpose: LoanPurpose::Other,
        loan_type: LoanType::Unsecured,
    }
}

pub(super) fn assessed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
