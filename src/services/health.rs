use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_RUNNING: &str = "Server is running";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// ISO-8601 в UTC с миллисекундами: 2024-05-01T12:00:00.000Z
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_RUNNING.to_string(),
            timestamp: time.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
