use axum::extract::State;
use rbac_admin_core::domain::{common::value_objects::Paginated, dict::ports::DictService};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::http::{
    query_extractor::ListQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DictTypeListResponse {
    pub data: Vec<Value>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl From<Paginated<Value>> for DictTypeListResponse {
    fn from(page: Paginated<Value>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

pub async fn list_dict_types(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<DictTypeListResponse>, ApiError> {
    let dict_types = state
        .service
        .list_dict_types(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DictTypeListResponse::from(dict_types)))
}
