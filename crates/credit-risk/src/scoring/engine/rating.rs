use serde::{Deserialize, Serialize};

use super::MAX_SCORE;

const PROBABILITY_SPAN: f64 = 550.0;
const PROBABILITY_WEIGHT: f64 = 0.8;
const MIN_PROBABILITY: f64 = 0.01;
const MAX_PROBABILITY: f64 = 0.99;
const MODERATE_RISK_ABOVE: f64 = 0.10;
const HIGH_RISK_ABOVE: f64 = 0.25;

/// Categorical band derived from the clamped credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreditRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditRating {
    /// Lower bounds are inclusive: 750 is Excellent, 650 Good, 550 Fair.
    pub fn from_score(score: u16) -> Self {
        match score {
            s if s >= 750 => Self::Excellent,
            s if s >= 650 => Self::Good,
            s if s >= 550 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreditRating::Poor => "Poor",
            CreditRating::Fair => "Fair",
            CreditRating::Good => "Good",
            CreditRating::Excellent => "Excellent",
        }
    }
}

/// Linear default estimate re-derived from the score, bounded to [0.01, 0.99].
pub fn default_probability(score: u16) -> f64 {
    let distance = f64::from(MAX_SCORE) - f64::from(score);
    (distance / PROBABILITY_SPAN * PROBABILITY_WEIGHT).clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

/// Risk indicator read off the default probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Both cut-offs are exclusive: exactly 0.10 is still Low, exactly 0.25 still Moderate.
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p > HIGH_RISK_ABOVE => Self::High,
            p if p > MODERATE_RISK_ABOVE => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }
}
