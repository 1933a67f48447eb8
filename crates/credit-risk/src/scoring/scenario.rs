use serde::{Deserialize, Serialize};

use super::engine::{CreditRating, MAX_SCORE, MIN_SCORE};

const INCOME_WEIGHT: f64 = 0.8;
const INCOME_CAP: f64 = 40.0;
const UTILIZATION_WEIGHT: f64 = 1.2;
const UTILIZATION_CAP: f64 = 60.0;
const LOAN_PENALTY_FLOOR: f64 = -30.0;
const RATE_REDUCTION_PER_POINT: f64 = 0.05;
const RATE_REDUCTION_CAP: f64 = 2.5;

/// Hypothetical changes to an applicant's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioChange {
    pub income_increase_pct: f64,
    pub utilization_current: f64,
    pub utilization_target: f64,
    pub loan_adjustment: f64,
}

impl Default for ScenarioChange {
    fn default() -> Self {
        Self {
            income_increase_pct: 0.0,
            utilization_current: 30.0,
            utilization_target: 30.0,
            loan_adjustment: 0.0,
        }
    }
}

/// Point contributions of each scenario lever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioImpact {
    pub income_impact: f64,
    pub utilization_impact: f64,
    /// Always within [-30, 0].
    pub loan_impact: f64,
    pub total_improvement: f64,
}

/// Before/after comparison produced by [`project`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub current_score: u16,
    pub potential_score: f64,
    pub potential_rating: CreditRating,
    pub impact: ScenarioImpact,
    /// Present only when loan terms were supplied and the projection gains points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_outlook: Option<RateOutlook>,
}

impl ScenarioResult {
    /// Points gained after clamping; can be negative when only penalties apply.
    pub fn score_gain(&self) -> f64 {
        self.potential_score - f64::from(self.current_score)
    }

    /// Attach rate and savings talking points for the applicant's loan.
    pub fn with_loan_terms(mut self, loan_amount: f64, loan_tenure_months: u32) -> Self {
        self.rate_outlook = rate_outlook(self.score_gain(), loan_amount, loan_tenure_months);
        self
    }
}

/// Indicative pricing benefit of a score improvement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateOutlook {
    /// Percentage points off the interest rate, at most 2.5.
    pub rate_reduction_pct: f64,
    /// Simple interest saved over the tenure at the reduced rate.
    pub estimated_savings: f64,
}

/// Returns `None` unless the score gain is positive.
pub fn rate_outlook(
    score_gain: f64,
    loan_amount: f64,
    loan_tenure_months: u32,
) -> Option<RateOutlook> {
    let score_gain = finite_or_zero(score_gain);
    if score_gain <= 0.0 {
        return None;
    }

    let rate_reduction_pct = (score_gain * RATE_REDUCTION_PER_POINT).min(RATE_REDUCTION_CAP);
    let principal = finite_or_zero(loan_amount).max(0.0);
    let estimated_savings =
        principal * rate_reduction_pct / 100.0 * f64::from(loan_tenure_months) / 12.0;

    Some(RateOutlook {
        rate_reduction_pct,
        estimated_savings,
    })
}

/// Estimate the score reachable from `current_score` if `change` were carried out.
///
/// Only utilization reductions count, and loan adjustments can only cost points: a positive
/// adjustment is discarded rather than credited.
pub fn project(current_score: u16, change: &ScenarioChange) -> ScenarioResult {
    let income_impact = (finite_or_zero(change.income_increase_pct) * INCOME_WEIGHT).min(INCOME_CAP);

    let utilization_delta = (finite_or_zero(change.utilization_current)
        - finite_or_zero(change.utilization_target))
    .max(0.0);
    let utilization_impact = (utilization_delta * UTILIZATION_WEIGHT).min(UTILIZATION_CAP);

    let loan_impact = finite_or_zero(change.loan_adjustment).clamp(LOAN_PENALTY_FLOOR, 0.0);

    let total_improvement = income_impact + utilization_impact + loan_impact;
    let potential_score = (f64::from(current_score) + total_improvement)
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));

    ScenarioResult {
        current_score,
        potential_score,
        potential_rating: CreditRating::from_score(potential_score as u16),
        impact: ScenarioImpact {
            income_impact,
            utilization_impact,
            loan_impact,
            total_improvement,
        },
        rate_outlook: None,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
