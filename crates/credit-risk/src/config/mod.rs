//! Environment-driven settings for the scoring service.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Intake limits default to [`IntakePolicy::default`] and can be
//! tightened per deployment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::scoring::IntakePolicy;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage the service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unrecognized stages fall back to development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub intake: IntakePolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APP_ENV")
            .map(|raw| AppEnvironment::parse(&raw))
            .unwrap_or(AppEnvironment::Development);

        let server = ServerConfig {
            host: env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env_or("APP_PORT", DEFAULT_PORT).map_err(|err| match err {
                ConfigError::InvalidNumber { value, .. } => ConfigError::InvalidPort { value },
                other => other,
            })?,
        };

        let telemetry = TelemetryConfig {
            log_level: env::var("APP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
            intake: load_intake_policy()?,
        })
    }
}

fn load_intake_policy() -> Result<IntakePolicy, ConfigError> {
    let defaults = IntakePolicy::default();
    let policy = IntakePolicy {
        min_age: env_or("CREDIT_MIN_AGE", defaults.min_age)?,
        max_age: env_or("CREDIT_MAX_AGE", defaults.max_age)?,
        max_tenure_months: env_or("CREDIT_MAX_TENURE_MONTHS", defaults.max_tenure_months)?,
        max_days_past_due: env_or("CREDIT_MAX_DAYS_PAST_DUE", defaults.max_days_past_due)?,
    };

    if policy.min_age > policy.max_age {
        return Err(ConfigError::InvalidAgeRange {
            min: policy.min_age,
            max: policy.max_age,
        });
    }

    Ok(policy)
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// HTTP binding; `localhost` is accepted alongside literal addresses.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid port number (found '{value}')")]
    InvalidPort { value: String },
    #[error("APP_HOST '{host}' must be localhost or an IPv4/IPv6 address")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} must be numeric (found '{value}')")]
    InvalidNumber { var: &'static str, value: String },
    #[error("minimum applicant age {min} exceeds maximum {max}")]
    InvalidAgeRange { min: i32, max: i32 },
}
