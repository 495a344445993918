use chrono::{DateTime, Utc};
use folio_core_health_contracts::HealthStatus;
use folio_models::Environment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub environment: Environment,
    pub email_configured: bool,
}

impl From<HealthStatus> for ApiHealthStatus {
    fn from(value: HealthStatus) -> Self {
        Self {
            status: "OK",
            timestamp: value.timestamp,
            environment: value.environment,
            email_configured: value.email_configured,
        }
    }
}
