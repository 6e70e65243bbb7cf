use portfolio_service::config::PortfolioConfig;
use portfolio_service::startup::Application;
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    content_dir: PathBuf,
}

impl TestApp {
    /// Spawn with no content files on disk.
    #[allow(dead_code)]
    pub async fn spawn() -> Self {
        Self::spawn_with(None, None).await
    }

    /// Spawn with the given JSON values written as profile.json / diary.json
    /// under a per-test content directory.
    pub async fn spawn_with(
        profile: Option<serde_json::Value>,
        diary: Option<serde_json::Value>,
    ) -> Self {
        let content_dir = PathBuf::from(format!("target/test-content-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&content_dir)
            .await
            .expect("Failed to create test content directory");

        if let Some(profile) = profile {
            tokio::fs::write(content_dir.join("profile.json"), profile.to_string())
                .await
                .expect("Failed to write test profile.json");
        }
        if let Some(diary) = diary {
            tokio::fs::write(content_dir.join("diary.json"), diary.to_string())
                .await
                .expect("Failed to write test diary.json");
        }

        let mut config = PortfolioConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.content.profile_path = content_dir.join("profile.json");
        config.content.diary_path = content_dir.join("diary.json");

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            content_dir,
        }
    }

    /// Overwrite profile.json with raw bytes, bypassing JSON encoding.
    #[allow(dead_code)]
    pub async fn write_raw_profile(&self, contents: &str) {
        tokio::fs::write(self.content_dir.join("profile.json"), contents)
            .await
            .expect("Failed to overwrite profile.json");
    }

    /// Overwrite diary.json with raw bytes, bypassing JSON encoding.
    #[allow(dead_code)]
    pub async fn write_raw_diary(&self, contents: &str) {
        tokio::fs::write(self.content_dir.join("diary.json"), contents)
            .await
            .expect("Failed to overwrite diary.json");
    }

    pub async fn cleanup(&self) {
        tokio::fs::remove_dir_all(&self.content_dir).await.ok();
    }
}
