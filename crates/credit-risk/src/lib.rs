//! Rule-based credit risk scoring.
//!
//! The [`scoring`] module holds the pure scoring engine and scenario projector together with
//! the intake, insight, and service layers that wrap them for the CLI and HTTP surfaces.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
