use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

use super::domain::{ApplicantProfile, LoanPurpose, LoanType, ResidenceType};

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read applicant batch: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One applicant row from a batch export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchApplicant {
    pub applicant_id: Option<String>,
    pub profile: ApplicantProfile,
}

/// Reads applicant profiles from CSV exports with snake_case headers.
pub struct ApplicantBatchImporter;

impl ApplicantBatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchApplicant>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchApplicant>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut applicants = Vec::new();

        for record in csv_reader.deserialize::<ApplicantRow>() {
            applicants.push(record?.into_applicant());
        }

        Ok(applicants)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    applicant_id: Option<String>,
    age: i32,
    annual_income: f64,
    loan_amount: f64,
    loan_tenure_months: u32,
    #[serde(default)]
    avg_days_past_due: f64,
    #[serde(default)]
    delinquency_ratio: f64,
    #[serde(default)]
    credit_utilization_ratio: f64,
    #[serde(default)]
    num_open_accounts: u32,
    #[serde(default)]
    residence_type: String,
    #[serde(default)]
    loan_purpose: String,
    #[serde(default)]
    loan_type: String,
}

impl ApplicantRow {
    fn into_applicant(self) -> BatchApplicant {
        BatchApplicant {
            applicant_id: self.applicant_id,
            profile: ApplicantProfile {
                age: self.age,
                annual_income: self.annual_income,
                loan_amount: self.loan_amount,
                loan_tenure_months: self.loan_tenure_months,
                avg_days_past_due: self.avg_days_past_due,
                delinquency_ratio: self.delinquency_ratio,
                credit_utilization_ratio: self.credit_utilization_ratio,
                num_open_accounts: self.num_open_accounts,
                residence_type: ResidenceType::parse(&self.residence_type),
                loan_purpose: LoanPurpose::parse(&self.loan_purpose),
                loan_type: LoanType::parse(&self.loan_type),
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
