//! End-to-end scenarios through the public scoring facade: CSV intake, assessment, and
//! scenario projection, without reaching into private modules.

use chrono::{TimeZone, Utc};
use credit_risk::scoring::{
    project, score, ApplicantBatchImporter, ApplicantProfile, CreditAssessmentService,
    CreditRating, LoanPurpose, LoanType, ResidenceType, ScenarioChange,
};

const BATCH: &str = "\
applicant_id,age,annual_income,loan_amount,loan_tenure_months,avg_days_past_due,delinquency_ratio,credit_utilization_ratio,num_open_accounts,residence_type,loan_purpose,loan_type
A-100,35,1200000,5000000,36,5,10,35,2,Owned,Home,Unsecured
A-101,40,1200000,300000,60,10,8,35,2,Owned,Home,Unsecured
A-102,16,400000,50000,12,0,0,10,1,Rented,Personal,Secured
A-103,29,0,250000,24,0,0,15,0,With Family,Vacation,Secured
";

fn profile(age: i32, utilization: f64) -> ApplicantProfile {
    ApplicantProfile {
        age,
        annual_income: 800_000.0,
        loan_amount: 120_000.0,
        loan_tenure_months: 48,
        avg_days_past_due: 0.0,
        delinquency_ratio: 0.0,
        credit_utilization_ratio: utilization,
        num_open_accounts: 3,
        residence_type: ResidenceType::Mortgage,
        loan_purpose: LoanPurpose::Education,
        loan_type: LoanType::Secured,
    }
}

#[test]
fn batch_csv_is_scored_row_by_row() {
    let applicants = ApplicantBatchImporter::from_reader(BATCH.as_bytes()).expect("batch parses");
    assert_eq!(applicants.len(), 4);

    let service = CreditAssessmentService::new();
    let entries = service.assess_batch(&applicants);

    let scores: Vec<Option<u16>> = entries
        .iter()
        .map(|entry| {
            entry
                .assessment
                .as_ref()
                .map(|assessment| assessment.result.credit_score)
        })
        .collect();
    // A-103: 650 + 30 + 5 + 10 + 15 + 0 + 0 + 0 + 0 + 0 + 15
    assert_eq!(scores, vec![Some(715), Some(750), None, Some(725)]);
    assert_eq!(entries[2].applicant_id.as_deref(), Some("A-102"));
    assert!(entries[2]
        .error
        .as_deref()
        .is_some_and(|message| message.contains("age 16")));
}

#[test]
fn assessment_serializes_for_http_clients() {
    let service = CreditAssessmentService::new();
    let assessed_at = Utc
        .with_ymd_and_hms(2025, 10, 1, 9, 5, 0)
        .single()
        .expect("valid timestamp");

    let assessment = service
        .assess_at(&profile(30, 15.0), assessed_at)
        .expect("profile accepted");
    let json = serde_json::to_value(&assessment).expect("assessment serializes");

    // 650 + 30 + 15 + 0 + 15 + 0 + 0 + 5 + 15 + 20 + 15
    assert_eq!(json["result"]["credit_score"], 765);
    assert_eq!(json["result"]["rating"], "Excellent");
    assert_eq!(json["insights"]["tier"], "elite");
    assert!(json["reference"]
        .as_str()
        .is_some_and(|reference| reference.starts_with("CR-0905-")));
}

#[test]
fn projection_builds_on_engine_output() {
    let current = score(&profile(30, 45.0));
    // utilization 45 costs 15 points instead of gaining 15
    assert_eq!(current.credit_score, 735);
    assert_eq!(current.rating, CreditRating::Good);

    let projection = project(
        current.credit_score,
        &ScenarioChange {
            income_increase_pct: 0.0,
            utilization_current: 45.0,
            utilization_target: 15.0,
            loan_adjustment: 0.0,
        },
    );

    assert!((projection.impact.utilization_impact - 36.0).abs() < 1e-9);
    assert_eq!(projection.potential_rating, CreditRating::Excellent);
}
