use axum::extract::{Path, Query, State};
use rbac_admin_core::domain::{
    common::entities::app_errors::CoreError, mapping::FormatType, user::ports::UserService,
};
use serde_json::Value;
use uuid::Uuid;

use super::list_users::FormatQuery;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub async fn get_user(
    Path(user_id): Path<Uuid>,
    Query(format): Query<FormatQuery>,
    State(state): State<AppState>,
) -> Result<Response<Value>, ApiError> {
    let format = format.resolve(FormatType::Detail)?;

    let user = state
        .service
        .get_user(user_id, format)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(format!("User '{}' not found", user_id)),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(user))
}
