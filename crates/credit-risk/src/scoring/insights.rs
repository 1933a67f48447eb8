//! Advisory read-outs layered on top of a finished score.

use serde::{Deserialize, Serialize};

use super::domain::ApplicantProfile;
use super::engine::ScoreResult;
use super::loan_metrics::LoanMetrics;

const STRENGTH_FLOOR: f64 = 10.0;
const STRENGTH_CEILING: f64 = 90.0;
const INCOME_REFERENCE: f64 = 5_000_000.0;

/// Service tier offered to the applicant, keyed off the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientTier {
    Elite,
    Standard,
    Developing,
}

impl ClientTier {
    pub fn from_score(score: u16) -> Self {
        if score >= 750 {
            Self::Elite
        } else if score >= 650 {
            Self::Standard
        } else {
            Self::Developing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientTier::Elite => "Tier 1 - Elite",
            ClientTier::Standard => "Tier 2 - Standard",
            ClientTier::Developing => "Tier 3 - Developing",
        }
    }

    pub fn service_level(&self) -> &'static str {
        match self {
            ClientTier::Elite => "Fast-track processing with a dedicated relationship manager",
            ClientTier::Standard => "Standard processing with enhanced income verification",
            ClientTier::Developing => "Guided credit-building program with gradual access",
        }
    }

    pub fn guidance(&self) -> AdvisorGuidance {
        match self {
            ClientTier::Elite => AdvisorGuidance {
                interest_band: "7-9% p.a.",
                actions: vec![
                    "Waive processing fees".to_string(),
                    "Offer up to 90% of property value".to_string(),
                ],
                recommendation: "Present the premium package and expedite approval",
            },
            ClientTier::Standard => AdvisorGuidance {
                interest_band: "10-12% p.a.",
                actions: vec![
                    "Request additional income documentation".to_string(),
                    "Suggest a co-applicant scoring 700 or higher".to_string(),
                    "Schedule a quarterly credit review".to_string(),
                ],
                recommendation: "Standard package with a six-month review clause",
            },
            ClientTier::Developing => AdvisorGuidance {
                interest_band: "secured products only",
                actions: vec![
                    "Reduce credit utilization below 30%".to_string(),
                    "Clear outstanding delinquent accounts".to_string(),
                    "Consider a guarantor".to_string(),
                ],
                recommendation: "Enroll in a twelve-month credit rebuilding plan",
            },
        }
    }
}

/// Advisor talking points for a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorGuidance {
    pub interest_band: &'static str,
    pub actions: Vec<String>,
    pub recommendation: &'static str,
}

/// Profile dimensions rated on a 10-100 strength scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthDimension {
    Utilization,
    PaymentHistory,
    LoanToIncome,
    Age,
    Income,
}

impl StrengthDimension {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthDimension::Utilization => "Credit utilization",
            StrengthDimension::PaymentHistory => "Payment history",
            StrengthDimension::LoanToIncome => "Loan-to-income",
            StrengthDimension::Age => "Age factor",
            StrengthDimension::Income => "Income level",
        }
    }

    fn key_insight(&self) -> &'static str {
        match self {
            StrengthDimension::Utilization => {
                "Credit utilization is the main lever; bringing it under 30% unlocks better terms"
            }
            StrengthDimension::PaymentHistory => {
                "Payment history needs attention; a run of on-time payments will lift the score"
            }
            _ => "Profile is balanced; keep up financial discipline while tuning the weaker areas",
        }
    }
}

/// Strength gauges per dimension. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorStrengths {
    pub utilization: f64,
    pub payment_history: f64,
    pub loan_to_income: f64,
    pub age: f64,
    pub income: f64,
}

impl FactorStrengths {
    pub fn from_profile(profile: &ApplicantProfile, metrics: &LoanMetrics) -> Self {
        let age = f64::from(profile.age);
        let age_strength = if profile.age < 65 {
            (age * 1.5).min(STRENGTH_CEILING)
        } else {
            100.0 - (age - 65.0) * 2.0
        };
        let income_strength =
            (profile.annual_income / INCOME_REFERENCE * 100.0).min(STRENGTH_CEILING);

        Self {
            utilization: floor(100.0 - profile.credit_utilization_ratio * 0.8),
            payment_history: floor(100.0 - profile.delinquency_ratio * 1.2),
            loan_to_income: floor(
                100.0 - (metrics.loan_to_income_pct * 0.8).min(STRENGTH_CEILING),
            ),
            age: floor(age_strength),
            income: floor(income_strength),
        }
    }

    pub fn entries(&self) -> [(StrengthDimension, f64); 5] {
        [
            (StrengthDimension::Utilization, self.utilization),
            (StrengthDimension::PaymentHistory, self.payment_history),
            (StrengthDimension::LoanToIncome, self.loan_to_income),
            (StrengthDimension::Age, self.age),
            (StrengthDimension::Income, self.income),
        ]
    }

    /// Lowest gauge; ties go to the dimension listed first in [`Self::entries`].
    pub fn weakest(&self) -> StrengthDimension {
        let mut weakest = (StrengthDimension::Utilization, self.utilization);
        for (dimension, value) in self.entries().into_iter().skip(1) {
            if value < weakest.1 {
                weakest = (dimension, value);
            }
        }
        weakest.0
    }
}

fn floor(value: f64) -> f64 {
    if value.is_nan() {
        STRENGTH_FLOOR
    } else {
        value.max(STRENGTH_FLOOR)
    }
}

/// Everything the results page shows besides the raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditInsights {
    pub tier: ClientTier,
    pub tier_label: &'static str,
    pub service_level: &'static str,
    pub guidance: AdvisorGuidance,
    pub strengths: FactorStrengths,
    pub weakest_dimension: StrengthDimension,
    pub key_insight: &'static str,
}

impl CreditInsights {
    pub fn from_assessment(
        profile: &ApplicantProfile,
        result: &ScoreResult,
        metrics: &LoanMetrics,
    ) -> Self {
        let tier = ClientTier::from_score(result.credit_score);
        let strengths = FactorStrengths::from_profile(profile, metrics);
        let weakest_dimension = strengths.weakest();

        Self {
            tier,
            tier_label: tier.label(),
            service_level: tier.service_level(),
            guidance: tier.guidance(),
            strengths,
            weakest_dimension,
            key_insight: weakest_dimension.key_insight(),
        }
    }
}
