use crate::models::DiaryItem;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

pub async fn list_diary(State(state): State<AppState>) -> Result<Json<Vec<DiaryItem>>, AppError> {
    let items = state.content.load_diary().await?;
    Ok(Json(items))
}

pub async fn get_diary_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<DiaryItem>, AppError> {
    let item = state.content.find_diary_item(&item_id).await?;
    Ok(Json(item))
}
