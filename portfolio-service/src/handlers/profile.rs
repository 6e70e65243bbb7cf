use crate::models::Profile;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let profile = state.content.load_profile().await?;
    Ok(Json(profile))
}
