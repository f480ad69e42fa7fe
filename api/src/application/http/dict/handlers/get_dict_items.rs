use axum::extract::{Path, State};
use rbac_admin_core::domain::dict::ports::DictService;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetDictItemsResponse {
    pub data: Vec<Value>,
}

pub async fn get_dict_items(
    Path(dict_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetDictItemsResponse>, ApiError> {
    let items = state
        .service
        .get_dict_items(dict_code)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDictItemsResponse { data: items }))
}
