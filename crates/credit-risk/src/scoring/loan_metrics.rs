use serde::{Deserialize, Serialize};

use super::domain::ApplicantProfile;

/// Affordability figures shown next to the score. They do not feed the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    pub loan_to_income_pct: f64,
    /// Principal spread evenly over the tenure; no interest is modelled.
    pub monthly_emi: f64,
    pub debt_to_income_pct: f64,
}

impl LoanMetrics {
    pub fn from_profile(profile: &ApplicantProfile) -> Self {
        let monthly_emi = if profile.loan_tenure_months > 0 {
            profile.loan_amount / f64::from(profile.loan_tenure_months)
        } else {
            0.0
        };

        let debt_to_income_pct = if profile.annual_income > 0.0 {
            monthly_emi * 12.0 / profile.annual_income * 100.0
        } else {
            0.0
        };

        Self {
            loan_to_income_pct: profile.loan_to_income_pct(),
            monthly_emi,
            debt_to_income_pct,
        }
    }
}
