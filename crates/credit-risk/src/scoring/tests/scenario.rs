use super::common::approx_eq;
use crate::scoring::engine::CreditRating;
use crate::scoring::scenario::{project, rate_outlook, ScenarioChange};

fn change(income: f64, current: f64, target: f64, loan: f64) -> ScenarioChange {
    ScenarioChange {
        income_increase_pct: income,
        utilization_current: current,
        utilization_target: target,
        loan_adjustment: loan,
    }
}

#[test]
fn neutral_change_leaves_score_untouched() {
    let projection = project(715, &change(0.0, 40.0, 40.0, 0.0));

    assert!(approx_eq(projection.potential_score, 715.0));
    assert!(approx_eq(projection.impact.total_improvement, 0.0));
    assert_eq!(projection.current_score, 715);
    assert_eq!(projection.potential_rating, CreditRating::Good);
}

#[test]
fn positive_loan_adjustment_is_discarded() {
    let boosted = project(700, &change(0.0, 30.0, 30.0, 50.0));
    let neutral = project(700, &change(0.0, 30.0, 30.0, 0.0));

    assert!(approx_eq(boosted.impact.loan_impact, 0.0));
    assert!(approx_eq(boosted.impact.loan_impact, neutral.impact.loan_impact));
    assert!(approx_eq(boosted.potential_score, neutral.potential_score));
}

#[test]
fn impacts_follow_weights() {
    let projection = project(650, &change(25.0, 50.0, 20.0, -10.0));

    assert!(approx_eq(projection.impact.income_impact, 20.0));
    assert!(approx_eq(projection.impact.utilization_impact, 36.0));
    assert!(approx_eq(projection.impact.loan_impact, -10.0));
    assert!(approx_eq(projection.impact.total_improvement, 46.0));
    assert!(approx_eq(projection.potential_score, 696.0));
}

#[test]
fn impacts_are_capped() {
    let projection = project(600, &change(100.0, 100.0, 0.0, -100.0));

    assert!(approx_eq(projection.impact.income_impact, 40.0));
    assert!(approx_eq(projection.impact.utilization_impact, 60.0));
    assert!(approx_eq(projection.impact.loan_impact, -30.0));
    assert!(approx_eq(projection.impact.total_improvement, 70.0));
    assert!(approx_eq(projection.potential_score, 670.0));
}

#[test]
fn utilization_increase_is_not_penalized() {
    let projection = project(700, &change(0.0, 20.0, 60.0, 0.0));

    assert!(approx_eq(projection.impact.utilization_impact, 0.0));
    assert!(approx_eq(projection.potential_score, 700.0));
}

#[test]
fn potential_score_is_capped_at_850() {
    let projection = project(820, &change(50.0, 80.0, 10.0, 0.0));

    assert!(approx_eq(projection.potential_score, 850.0));
    assert!(approx_eq(projection.impact.total_improvement, 100.0));
    assert_eq!(projection.potential_rating, CreditRating::Excellent);
}

#[test]
fn potential_score_is_floored_at_300() {
    let projection = project(310, &change(0.0, 30.0, 30.0, -30.0));

    assert!(approx_eq(projection.potential_score, 300.0));
    assert!(approx_eq(projection.impact.total_improvement, -30.0));
    assert_eq!(projection.potential_rating, CreditRating::Poor);
}

#[test]
fn non_finite_levers_count_as_zero() {
    let projection = project(700, &change(f64::NAN, f64::INFINITY, 10.0, f64::NEG_INFINITY));

    assert!(approx_eq(projection.impact.income_impact, 0.0));
    assert!(approx_eq(projection.impact.utilization_impact, 0.0));
    assert!(approx_eq(projection.impact.loan_impact, 0.0));
    assert!(approx_eq(projection.potential_score, 700.0));
}

#[test]
fn default_change_is_neutral() {
    let projection = project(640, &ScenarioChange::default());

    assert!(approx_eq(projection.impact.total_improvement, 0.0));
    assert_eq!(projection.potential_rating, CreditRating::Fair);
}

#[test]
fn rate_outlook_scales_with_gain() {
    let outlook = rate_outlook(20.0, 1_000_000.0, 36).expect("positive gain priced");

    assert!(approx_eq(outlook.rate_reduction_pct, 1.0));
    // 1_000_000 x 1.0% x 36 / 12
    assert!(approx_eq(outlook.estimated_savings, 30_000.0));
}

#[test]
fn rate_reduction_is_capped() {
    let outlook = rate_outlook(60.0, 500_000.0, 24).expect("positive gain priced");

    assert!(approx_eq(outlook.rate_reduction_pct, 2.5));
    assert!(approx_eq(outlook.estimated_savings, 25_000.0));
}

#[test]
fn no_outlook_without_gain() {
    assert!(rate_outlook(0.0, 1_000_000.0, 36).is_none());
    assert!(rate_outlook(-12.0, 1_000_000.0, 36).is_none());
    assert!(rate_outlook(f64::NAN, 1_000_000.0, 36).is_none());
}

#[test]
fn loan_terms_price_the_clamped_gain() {
    // +20 income impact from 840 stops at the 850 cap, so only 10 points count
    let projection = project(840, &change(25.0, 30.0, 30.0, 0.0)).with_loan_terms(200_000.0, 12);

    assert!(approx_eq(projection.score_gain(), 10.0));
    let outlook = projection.rate_outlook.expect("gain priced");
    assert!(approx_eq(outlook.rate_reduction_pct, 0.5));
    assert!(approx_eq(outlook.estimated_savings, 1_000.0));

    let penalty_only = project(700, &change(0.0, 30.0, 30.0, -20.0)).with_loan_terms(200_000.0, 12);
    assert!(penalty_only.rate_outlook.is_none());
}

#[test]
fn plain_projection_has_no_outlook() {
    assert!(project(700, &change(25.0, 50.0, 20.0, 0.0)).rate_outlook.is_none());
}
