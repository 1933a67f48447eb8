use serde::{Deserialize, Serialize};

/// Applicant attributes supplied by the caller for a single scoring request.
///
/// Range checks (age 18-100, percentages 0-100, non-negative amounts) belong to the intake
/// layer. The engine accepts any value and degrades to the neutral bracket instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: i32,
    pub annual_income: f64,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub avg_days_past_due: f64,
    pub delinquency_ratio: f64,
    pub credit_utilization_ratio: f64,
    pub num_open_accounts: u32,
    pub residence_type: ResidenceType,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
}

impl ApplicantProfile {
    /// Loan amount as a percentage of annual income, or zero when income is not positive.
    pub fn loan_to_income_pct(&self) -> f64 {
        if self.annual_income > 0.0 {
            self.loan_amount / self.annual_income * 100.0
        } else {
            0.0
        }
    }
}

/// Current living arrangement of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ResidenceType {
    Owned,
    Mortgage,
    Rented,
    #[serde(rename = "With Family")]
    WithFamily,
    Other,
}

impl ResidenceType {
    pub fn label(&self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Mortgage => "Mortgage",
            ResidenceType::Rented => "Rented",
            ResidenceType::WithFamily => "With Family",
            ResidenceType::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "owned" => Self::Owned,
            "mortgage" => Self::Mortgage,
            "rented" => Self::Rented,
            "withfamily" => Self::WithFamily,
            _ => Self::Other,
        }
    }
}

impl From<String> for ResidenceType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Declared use of the loan proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LoanPurpose {
    Home,
    Education,
    Personal,
    Other,
}

impl LoanPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            LoanPurpose::Home => "Home",
            LoanPurpose::Education => "Education",
            LoanPurpose::Personal => "Personal",
            LoanPurpose::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "home" => Self::Home,
            "education" => Self::Education,
            "personal" => Self::Personal,
            _ => Self::Other,
        }
    }
}

impl From<String> for LoanPurpose {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Collateral backing of the requested loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LoanType {
    Secured,
    Unsecured,
    Other,
}

impl LoanType {
    pub fn label(&self) -> &'static str {
        match self {
            LoanType::Secured => "Secured",
            LoanType::Unsecured => "Unsecured",
            LoanType::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "secured" => Self::Secured,
            "unsecured" => Self::Unsecured,
            _ => Self::Other,
        }
    }
}

impl From<String> for LoanType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Lowercases and drops separators so "With Family", "with_family" and "WithFamily" match.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Factors contributing an additive adjustment to the credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    Income,
    LoanToIncome,
    CreditUtilization,
    DelinquencyRatio,
    DaysPastDue,
    OpenAccounts,
    ResidenceType,
    LoanPurpose,
    LoanType,
}

impl ScoreFactor {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreFactor::Age => "Age",
            ScoreFactor::Income => "Annual income",
            ScoreFactor::LoanToIncome => "Loan-to-income",
            ScoreFactor::CreditUtilization => "Credit utilization",
            ScoreFactor::DelinquencyRatio => "Delinquency ratio",
            ScoreFactor::DaysPastDue => "Days past due",
            ScoreFactor::OpenAccounts => "Open accounts",
            ScoreFactor::ResidenceType => "Residence type",
            ScoreFactor::LoanPurpose => "Loan purpose",
            ScoreFactor::LoanType => "Loan type",
        }
    }
}
