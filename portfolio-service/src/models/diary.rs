use serde::{Deserialize, Serialize};

/// One journal entry. `date` is an ISO date string; it is opaque to the
/// service and returned as written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryItem {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The two on-disk shapes the diary file is allowed to take: a bare array,
/// or an object wrapping the array under an `items` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DiaryDocument {
    Wrapped { items: Vec<DiaryItem> },
    Items(Vec<DiaryItem>),
}

impl DiaryDocument {
    /// Unwrap either shape into the canonical ordered sequence.
    pub fn into_items(self) -> Vec<DiaryItem> {
        match self {
            DiaryDocument::Wrapped { items } => items,
            DiaryDocument::Items(items) => items,
        }
    }
}
