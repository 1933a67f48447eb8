use crate::infra::{parse_loan_purpose, parse_loan_type, parse_percentage, parse_residence};
use clap::Args;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::scoring::{
    ApplicantBatchImporter, ApplicantProfile, CreditAssessment, CreditAssessmentService,
    LoanPurpose, LoanType, ResidenceType, ScenarioChange, ScenarioResult,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant age in years (18-100)
    #[arg(long)]
    pub(crate) age: i32,
    /// Gross annual income
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan tenure in months
    #[arg(long, default_value_t = 36)]
    pub(crate) loan_tenure_months: u32,
    /// Average days past due on delinquent payments
    #[arg(long, default_value_t = 0.0)]
    pub(crate) avg_days_past_due: f64,
    /// Percentage of accounts with late payments
    #[arg(long, default_value = "0", value_parser = parse_percentage)]
    pub(crate) delinquency_ratio: f64,
    /// Percentage of available credit in use
    #[arg(long, default_value = "0", value_parser = parse_percentage)]
    pub(crate) credit_utilization_ratio: f64,
    /// Number of open credit accounts
    #[arg(long, default_value_t = 0)]
    pub(crate) num_open_accounts: u32,
    /// Owned, Mortgage, Rented, or With Family
    #[arg(long, default_value = "Rented", value_parser = parse_residence)]
    pub(crate) residence_type: ResidenceType,
    /// Home, Education, Personal, or Other
    #[arg(long, default_value = "Personal", value_parser = parse_loan_purpose)]
    pub(crate) loan_purpose: LoanPurpose,
    /// Secured or Unsecured
    #[arg(long, default_value = "Unsecured", value_parser = parse_loan_type)]
    pub(crate) loan_type: LoanType,
    /// Print the assessment as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            age: self.age,
            annual_income: self.annual_income,
            loan_amount: self.loan_amount,
            loan_tenure_months: self.loan_tenure_months,
            avg_days_past_due: self.avg_days_past_due,
            delinquency_ratio: self.delinquency_ratio,
            credit_utilization_ratio: self.credit_utilization_ratio,
            num_open_accounts: self.num_open_accounts,
            residence_type: self.residence_type,
            loan_purpose: self.loan_purpose,
            loan_type: self.loan_type,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScenarioArgs {
    /// Score to project from (300-850)
    #[arg(long)]
    pub(crate) current_score: u16,
    /// Expected income growth in percent
    #[arg(long, default_value_t = 0.0)]
    pub(crate) income_increase_pct: f64,
    /// Current credit utilization in percent
    #[arg(long, default_value = "30", value_parser = parse_percentage)]
    pub(crate) utilization_current: f64,
    /// Target credit utilization in percent
    #[arg(long, default_value = "30", value_parser = parse_percentage)]
    pub(crate) utilization_target: f64,
    /// Loan adjustment points; only penalties down to -30 apply
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub(crate) loan_adjustment: f64,
    /// Loan principal used to estimate rate savings
    #[arg(long, requires = "loan_tenure_months")]
    pub(crate) loan_amount: Option<f64>,
    /// Loan tenure in months used to estimate rate savings
    #[arg(long, requires = "loan_amount")]
    pub(crate) loan_tenure_months: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one applicant per row
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the results as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the scenario planning portion of the demo.
    #[arg(long)]
    pub(crate) skip_scenario: bool,
}

fn configured_service() -> Result<CreditAssessmentService, AppError> {
    let config = AppConfig::load()?;
    Ok(CreditAssessmentService::with_policy(config.intake))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let assessment = service.assess(&args.profile())?;

    if args.json {
        print_json(&assessment);
    } else {
        render_assessment(&assessment);
    }

    Ok(())
}

pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let change = ScenarioChange {
        income_increase_pct: args.income_increase_pct,
        utilization_current: args.utilization_current,
        utilization_target: args.utilization_target,
        loan_adjustment: args.loan_adjustment,
    };

    let projection = match (args.loan_amount, args.loan_tenure_months) {
        (Some(amount), Some(months)) => {
            service.project_for_loan(args.current_score, &change, amount, months)?
        }
        _ => service.project(args.current_score, &change)?,
    };
    render_scenario(&projection);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let applicants = ApplicantBatchImporter::from_path(&args.input)?;
    let service = configured_service()?;
    let entries = service.assess_batch(&applicants);

    if args.json {
        print_json(&entries);
        return Ok(());
    }

    println!(
        "Batch assessment: {} applicant(s) from {}",
        entries.len(),
        args.input.display()
    );
    for entry in &entries {
        let label = entry
            .applicant_id
            .clone()
            .unwrap_or_else(|| format!("row {}", entry.row));
        match (&entry.assessment, &entry.error) {
            (Some(assessment), _) => println!(
                "- {}: {} ({}) | default risk {:.1}% ({}) | {}",
                label,
                assessment.result.credit_score,
                assessment.result.rating.label(),
                assessment.result.default_probability * 100.0,
                assessment.result.risk_level.label(),
                assessment.insights.tier_label
            ),
            (None, Some(error)) => println!("- {}: rejected ({})", label, error),
            (None, None) => println!("- {}: no result", label),
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = configured_service()?;
    let profile = demo_profile();

    println!("Credit risk demo (intake form defaults)");
    let assessment = service.assess(&profile)?;
    render_assessment(&assessment);

    if args.skip_scenario {
        return Ok(());
    }

    let change = ScenarioChange {
        income_increase_pct: 15.0,
        utilization_current: profile.credit_utilization_ratio,
        utilization_target: profile.credit_utilization_ratio.min(25.0),
        loan_adjustment: 0.0,
    };
    let projection = service.project_for_loan(
        assessment.result.credit_score,
        &change,
        profile.loan_amount,
        profile.loan_tenure_months,
    )?;
    println!();
    render_scenario(&projection);

    Ok(())
}

fn demo_profile() -> ApplicantProfile {
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

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}

pub(crate) fn render_assessment(assessment: &CreditAssessment) {
    let result = &assessment.result;
    let insights = &assessment.insights;
    let metrics = &assessment.loan_metrics;

    println!(
        "Assessment {} ({})",
        assessment.reference,
        assessment.assessed_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "Credit score: {} ({}) | default probability {:.1}% ({})",
        result.credit_score,
        result.rating.label(),
        result.default_probability * 100.0,
        result.risk_level.label()
    );
    println!("Client tier: {} - {}", insights.tier_label, insights.service_level);

    println!("\nScore components");
    for component in &assessment.components {
        println!(
            "- {}: {:+} ({})",
            component.factor.label(),
            component.points,
            component.notes
        );
    }

    println!("\nLoan metrics");
    println!("- Monthly EMI: {:.0}", metrics.monthly_emi);
    println!("- Loan-to-income: {:.1}%", metrics.loan_to_income_pct);
    println!("- Debt-to-income: {:.1}%", metrics.debt_to_income_pct);

    println!("\nFactor strengths");
    for (dimension, value) in insights.strengths.entries() {
        println!("- {}: {:.0}/100", dimension.label(), value);
    }
    println!("Key insight: {}", insights.key_insight);

    println!("\nAdvisor notes ({})", insights.guidance.interest_band);
    for action in &insights.guidance.actions {
        println!("- {}", action);
    }
    println!("Recommendation: {}", insights.guidance.recommendation);
}

pub(crate) fn render_scenario(projection: &ScenarioResult) {
    let impact = &projection.impact;

    println!("Scenario projection");
    println!(
        "Current score {} -> potential {:.0} ({})",
        projection.current_score,
        projection.potential_score,
        projection.potential_rating.label()
    );
    println!("- Income impact: {:+.0} pts", impact.income_impact);
    println!("- Utilization impact: {:+.0} pts", impact.utilization_impact);
    println!("- Loan terms impact: {:+.0} pts", impact.loan_impact);
    println!("Total improvement: {:+.0} pts", impact.total_improvement);

    match &projection.rate_outlook {
        Some(outlook) => {
            println!(
                "Could reduce the interest rate by up to {:.1}%",
                outlook.rate_reduction_pct
            );
            println!(
                "Estimated interest saved over the term: {:.0}",
                outlook.estimated_savings
            );
        }
        None if projection.score_gain() <= 0.0 => {
            println!("Limited immediate upside; focus on utilization and steady income growth.")
        }
        None => {}
    }
}
