//! Readiness report

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub fn check() -> HealthReport {
    HealthReport {
        status: "ok",
        message: "Server is awake",
        timestamp: Utc::now(),
    }
}
