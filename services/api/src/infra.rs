use credit_risk::scoring::{LoanPurpose, LoanType, ResidenceType};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

// Unknown values are accepted and score as "Other", matching the HTTP intake.
pub(crate) fn parse_residence(raw: &str) -> Result<ResidenceType, String> {
    Ok(ResidenceType::parse(raw))
}

pub(crate) fn parse_loan_purpose(raw: &str) -> Result<LoanPurpose, String> {
    Ok(LoanPurpose::parse(raw))
}

pub(crate) fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    Ok(LoanType::parse(raw))
}

pub(crate) fn parse_percentage(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a percentage ({err})"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("'{raw}' must be between 0 and 100"))
    }
}
