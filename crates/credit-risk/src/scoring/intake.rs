use super::domain::ApplicantProfile;
use super::engine::{MAX_SCORE, MIN_SCORE};
use super::scenario::ScenarioChange;

/// Validation errors raised before a request reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("age {age} outside accepted range {min}-{max}")]
    AgeOutOfRange { age: i32, min: i32, max: i32 },
    #[error("{field} must not be negative (found {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("loan tenure of {months} months outside accepted range 1-{max}")]
    TenureOutOfRange { months: u32, max: u32 },
    #[error("{field} must be a percentage between 0 and 100 (found {value})")]
    PercentageOutOfRange { field: &'static str, value: f64 },
    #[error("average days past due {days} exceeds {max}")]
    DaysPastDueOutOfRange { days: f64, max: f64 },
    #[error("current score {score} outside 300-850")]
    ScoreOutOfRange { score: u16 },
}

/// Accepted input ranges, matching the limits of the advisor intake form.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakePolicy {
    pub min_age: i32,
    pub max_age: i32,
    pub max_tenure_months: u32,
    pub max_days_past_due: f64,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 100,
            max_tenure_months: 360,
            max_days_past_due: 365.0,
        }
    }
}

/// Guard applying an [`IntakePolicy`] to profiles and scenario requests.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn check_profile(&self, profile: &ApplicantProfile) -> Result<(), IntakeViolation> {
        let policy = &self.policy;

        if profile.age < policy.min_age || profile.age > policy.max_age {
            return Err(IntakeViolation::AgeOutOfRange {
                age: profile.age,
                min: policy.min_age,
                max: policy.max_age,
            });
        }

        non_negative("annual_income", profile.annual_income)?;
        non_negative("loan_amount", profile.loan_amount)?;

        self.check_tenure(profile.loan_tenure_months)?;

        percentage("credit_utilization_ratio", profile.credit_utilization_ratio)?;
        percentage("delinquency_ratio", profile.delinquency_ratio)?;

        non_negative("avg_days_past_due", profile.avg_days_past_due)?;
        if profile.avg_days_past_due > policy.max_days_past_due {
            return Err(IntakeViolation::DaysPastDueOutOfRange {
                days: profile.avg_days_past_due,
                max: policy.max_days_past_due,
            });
        }

        Ok(())
    }

    pub fn check_scenario(
        &self,
        current_score: u16,
        change: &ScenarioChange,
    ) -> Result<(), IntakeViolation> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&current_score) {
            return Err(IntakeViolation::ScoreOutOfRange {
                score: current_score,
            });
        }

        non_negative("income_increase_pct", change.income_increase_pct)?;
        percentage("utilization_current", change.utilization_current)?;
        percentage("utilization_target", change.utilization_target)?;
        finite("loan_adjustment", change.loan_adjustment)?;

        Ok(())
    }

    /// Loan terms used to price a scenario's rate outlook.
    pub fn check_loan_terms(
        &self,
        loan_amount: f64,
        loan_tenure_months: u32,
    ) -> Result<(), IntakeViolation> {
        non_negative("loan_amount", loan_amount)?;
        self.check_tenure(loan_tenure_months)
    }

    fn check_tenure(&self, months: u32) -> Result<(), IntakeViolation> {
        let max = self.policy.max_tenure_months;
        if months == 0 || months > max {
            return Err(IntakeViolation::TenureOutOfRange { months, max });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IntakeViolation::NonFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(IntakeViolation::NegativeAmount { field, value });
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(IntakeViolation::PercentageOutOfRange { field, value });
    }
    Ok(())
}
