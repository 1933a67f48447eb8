use super::super::domain::{ApplicantProfile, LoanPurpose, LoanType, ResidenceType, ScoreFactor};
use super::ScoreComponent;

/// Apply every factor rule once, in table order. Within a factor the first matching
/// threshold wins, so a profile never collects two brackets of the same factor.
pub(crate) fn score_profile(profile: &ApplicantProfile) -> Vec<ScoreComponent> {
    vec![
        age_component(profile.age),
        income_component(profile.annual_income),
        loan_to_income_component(profile.loan_to_income_pct()),
        utilization_component(profile.credit_utilization_ratio),
        delinquency_component(profile.delinquency_ratio),
        days_past_due_component(profile.avg_days_past_due),
        open_accounts_component(profile.num_open_accounts),
        residence_component(profile.residence_type),
        purpose_component(profile.loan_purpose),
        loan_type_component(profile.loan_type),
    ]
}

fn component(factor: ScoreFactor, points: i16, notes: String) -> ScoreComponent {
    ScoreComponent {
        factor,
        points,
        notes,
    }
}

fn age_component(age: i32) -> ScoreComponent {
    let (points, band) = match age {
        a if a < 25 => (-20, "under 25"),
        25..=35 => (30, "25-35"),
        36..=50 => (40, "36-50"),
        _ => (25, "over 50"),
    };
    component(ScoreFactor::Age, points, format!("age {age} in {band} band"))
}

fn income_component(income: f64) -> ScoreComponent {
    let points = if income > 2_000_000.0 {
        50
    } else if income > 1_000_000.0 {
        30
    } else if income > 500_000.0 {
        15
    } else {
        5
    };
    component(
        ScoreFactor::Income,
        points,
        format!("annual income {income:.0}"),
    )
}

fn loan_to_income_component(ratio: f64) -> ScoreComponent {
    let points = if ratio > 50.0 {
        -40
    } else if ratio > 30.0 {
        -20
    } else if ratio > 20.0 {
        -10
    } else if ratio < 10.0 {
        10
    } else {
        0
    };
    component(
        ScoreFactor::LoanToIncome,
        points,
        format!("loan-to-income {ratio:.1}%"),
    )
}

fn utilization_component(utilization: f64) -> ScoreComponent {
    let points = if utilization > 80.0 {
        -40
    } else if utilization > 60.0 {
        -30
    } else if utilization > 40.0 {
        -15
    } else if utilization < 20.0 {
        15
    } else if utilization < 30.0 {
        10
    } else {
        0
    };
    component(
        ScoreFactor::CreditUtilization,
        points,
        format!("credit utilization {utilization:.1}%"),
    )
}

fn delinquency_component(ratio: f64) -> ScoreComponent {
    let points = if ratio > 30.0 {
        -40
    } else if ratio > 20.0 {
        -25
    } else if ratio > 10.0 {
        -15
    } else if ratio > 5.0 {
        -5
    } else {
        0
    };
    component(
        ScoreFactor::DelinquencyRatio,
        points,
        format!("{ratio:.1}% of accounts delinquent"),
    )
}

fn days_past_due_component(days: f64) -> ScoreComponent {
    let points = if days > 90.0 {
        -40
    } else if days > 60.0 {
        -30
    } else if days > 30.0 {
        -15
    } else if days > 7.0 {
        -5
    } else {
        0
    };
    component(
        ScoreFactor::DaysPastDue,
        points,
        format!("average {days:.1} days past due"),
    )
}

fn open_accounts_component(count: u32) -> ScoreComponent {
    let points = match count {
        0 => 0,
        1..=5 => 5,
        6..=10 => -5,
        _ => -10,
    };
    component(
        ScoreFactor::OpenAccounts,
        points,
        format!("{count} open account(s)"),
    )
}

fn residence_component(residence: ResidenceType) -> ScoreComponent {
    let points = match residence {
        ResidenceType::Owned => 30,
        ResidenceType::Mortgage => 15,
        ResidenceType::Rented => 5,
        ResidenceType::WithFamily | ResidenceType::Other => 0,
    };
    component(
        ScoreFactor::ResidenceType,
        points,
        format!("residence {}", residence.label()),
    )
}

fn purpose_component(purpose: LoanPurpose) -> ScoreComponent {
    let points = match purpose {
        LoanPurpose::Home => 25,
        LoanPurpose::Education => 20,
        LoanPurpose::Personal => 10,
        LoanPurpose::Other => 0,
    };
    component(
        ScoreFactor::LoanPurpose,
        points,
        format!("{} loan", purpose.label().to_lowercase()),
    )
}

fn loan_type_component(loan_type: LoanType) -> ScoreComponent {
    let points = match loan_type {
        LoanType::Secured => 15,
        LoanType::Unsecured => -10,
        LoanType::Other => 0,
    };
    component(
        ScoreFactor::LoanType,
        points,
        format!("{} facility", loan_type.label().to_lowercase()),
    )
}
