use crate::services::{DatabaseProbe, DatabaseStatus};
use serde::Serialize;

/// Wire shape of `GET /test`. Status fields carry human-readable symbolic
/// markers rather than structured codes; the endpoint never fails.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsResponse {
    pub fn render(probe: &DatabaseProbe, status: DatabaseStatus) -> Self {
        let (database, connection_status, collections) = match status {
            DatabaseStatus::Unavailable => {
                ("❌ Not Available".to_string(), "Not Connected", Vec::new())
            }
            DatabaseStatus::AvailableNotInitialized => (
                "⚠️ Available but not initialized".to_string(),
                "Not Connected",
                Vec::new(),
            ),
            DatabaseStatus::Connected { collections } => (
                "✅ Connected & Working".to_string(),
                "Connected",
                collections,
            ),
            DatabaseStatus::ConnectedWithError(detail) => (
                format!("⚠️ Connected but Error: {}", detail),
                "Connected",
                Vec::new(),
            ),
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: presence_marker(probe.url_configured()),
            database_name: presence_marker(probe.name_configured()),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}

fn presence_marker(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}
