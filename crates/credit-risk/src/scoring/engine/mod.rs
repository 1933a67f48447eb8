mod rating;
mod rules;

pub use rating::{default_probability, CreditRating, RiskLevel};

use super::domain::{ApplicantProfile, ScoreFactor};
use serde::{Deserialize, Serialize};

/// Starting point before any factor adjustment is applied.
pub const BASE_SCORE: i32 = 650;
pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 850;

/// Score the profile against the fixed rule table.
pub fn score(profile: &ApplicantProfile) -> ScoreResult {
    evaluate(profile).result
}

/// Score the profile and keep the per-factor contributions for audit trails.
pub fn evaluate(profile: &ApplicantProfile) -> ScoreBreakdown {
    let components = rules::score_profile(profile);
    let adjustment_total: i32 = components
        .iter()
        .map(|component| i32::from(component.points))
        .sum();
    let raw_total = BASE_SCORE + adjustment_total;

    ScoreBreakdown {
        result: ScoreResult::from_raw_total(raw_total),
        base_score: BASE_SCORE,
        raw_total,
        components,
    }
}

/// Clamp a raw point total into the published score range.
pub fn clamp_score(raw_total: i32) -> u16 {
    let clamped = raw_total.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE));
    u16::try_from(clamped).unwrap_or(MIN_SCORE)
}

/// Discrete contribution of one factor to the final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i16,
    pub notes: String,
}

/// Engine output: the clamped score plus everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub credit_score: u16,
    pub default_probability: f64,
    pub rating: CreditRating,
    pub risk_level: RiskLevel,
}

impl ScoreResult {
    fn from_raw_total(raw_total: i32) -> Self {
        let credit_score = clamp_score(raw_total);
        let default_probability = default_probability(credit_score);
        Self {
            credit_score,
            default_probability,
            rating: CreditRating::from_score(credit_score),
            risk_level: RiskLevel::from_probability(default_probability),
        }
    }
}

/// Score result together with the rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub result: ScoreResult,
    pub base_score: i32,
    /// Base plus adjustments before clamping.
    pub raw_total: i32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}
