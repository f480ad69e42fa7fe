use axum::extract::{Path, State};
use rbac_admin_core::domain::{
    common::entities::app_errors::CoreError, mapping::FormatType, user::ports::UserService,
};
use serde_json::Value;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Edit-form payload: base fields plus `roleIds` and `openId`.
pub async fn get_user_form(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Value>, ApiError> {
    let form = state
        .service
        .get_user(user_id, FormatType::Form)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(format!("User '{}' not found", user_id)),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(form))
}
