use crate::models::{DiaryDocument, DiaryItem, Profile};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed reader for the profile and diary JSON files.
///
/// Every call re-reads from disk, so edits to the files are visible on the
/// next request without a restart.
#[derive(Clone)]
pub struct ContentStore {
    profile_path: PathBuf,
    diary_path: PathBuf,
}

impl ContentStore {
    pub fn new(profile_path: impl Into<PathBuf>, diary_path: impl Into<PathBuf>) -> Self {
        Self {
            profile_path: profile_path.into(),
            diary_path: diary_path.into(),
        }
    }

    pub async fn load_profile(&self) -> Result<Profile, AppError> {
        read_json(&self.profile_path).await
    }

    /// Full diary in file order. A missing file is "not yet created", not an
    /// error, and yields an empty list.
    pub async fn load_diary(&self) -> Result<Vec<DiaryItem>, AppError> {
        match read_json::<DiaryDocument>(&self.diary_path).await {
            Ok(document) => Ok(document.into_items()),
            Err(AppError::NotFound(_)) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// First diary item whose `id` matches. Linear scan; the diary is small.
    pub async fn find_diary_item(&self, item_id: &str) -> Result<DiaryItem, AppError> {
        self.load_diary()
            .await?
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Diary item not found")))
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "{} not found. Add it to the backend content directory.",
                path.display()
            )));
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "Failed to read content file");
            return Err(AppError::from(err));
        }
    };

    serde_json::from_slice(&bytes).map_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "Failed to parse content file");
        AppError::InternalError(anyhow::anyhow!(
            "Failed to parse {}: {}",
            path.display(),
            err
        ))
    })
}
