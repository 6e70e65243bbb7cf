use mongodb::options::ClientOptions;
use mongodb::Client as MongoClient;
use std::env;
use std::time::Duration;

const COLLECTION_LIMIT: usize = 10;
const ERROR_DETAIL_LIMIT: usize = 50;
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Outcome of the best-effort database capability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// No database is configured at all.
    Unavailable,
    /// A connection string exists but no database is selected.
    AvailableNotInitialized,
    Connected { collections: Vec<String> },
    ConnectedWithError(String),
}

/// Reads the optional database configuration and probes it without ever
/// failing. Environment is consulted at construction time, once per request.
pub struct DatabaseProbe {
    url: Option<String>,
    name: Option<String>,
}

impl DatabaseProbe {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok(),
            name: env::var("DATABASE_NAME").ok(),
        }
    }

    pub fn url_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_configured(&self) -> bool {
        self.name.is_some()
    }

    pub async fn check(&self) -> DatabaseStatus {
        let Some(url) = &self.url else {
            return DatabaseStatus::Unavailable;
        };
        let Some(name) = &self.name else {
            return DatabaseStatus::AvailableNotInitialized;
        };

        match list_collections(url, name).await {
            Ok(collections) => DatabaseStatus::Connected {
                collections: collections.into_iter().take(COLLECTION_LIMIT).collect(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Database probe failed");
                DatabaseStatus::ConnectedWithError(truncate_chars(
                    &err.to_string(),
                    ERROR_DETAIL_LIMIT,
                ))
            }
        }
    }
}

async fn list_collections(url: &str, name: &str) -> Result<Vec<String>, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;
    // The probe must stay bounded even when the server is unreachable.
    options.server_selection_timeout = Some(PROBE_TIMEOUT);
    options.connect_timeout = Some(PROBE_TIMEOUT);

    let client = MongoClient::with_options(options)?;
    client.database(name).list_collection_names(None).await
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_chars("short", 50), "short");
        let long = "e".repeat(80);
        assert_eq!(truncate_chars(&long, 50).chars().count(), 50);
        // Multi-byte input must not be split mid-character.
        let accented = "é".repeat(60);
        assert_eq!(truncate_chars(&accented, 50).chars().count(), 50);
    }

    #[tokio::test]
    async fn test_no_url_is_unavailable() {
        let probe = DatabaseProbe {
            url: None,
            name: Some("portfolio".to_string()),
        };
        assert_eq!(probe.check().await, DatabaseStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_url_without_name_is_not_initialized() {
        let probe = DatabaseProbe {
            url: Some("mongodb://localhost:27017".to_string()),
            name: None,
        };
        assert_eq!(probe.check().await, DatabaseStatus::AvailableNotInitialized);
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_error_not_panic() {
        let probe = DatabaseProbe {
            url: Some("mongodb://127.0.0.1:1".to_string()),
            name: Some("portfolio".to_string()),
        };
        match probe.check().await {
            DatabaseStatus::ConnectedWithError(detail) => {
                assert!(detail.chars().count() <= ERROR_DETAIL_LIMIT);
            }
            other => panic!("expected ConnectedWithError, got {:?}", other),
        }
    }
}
