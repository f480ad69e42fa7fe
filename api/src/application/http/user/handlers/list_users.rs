use axum::extract::{Query, State};
use rbac_admin_core::domain::{
    common::value_objects::Paginated, mapping::FormatType, user::ports::UserService,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::http::{
    query_extractor::ListQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

impl FormatQuery {
    /// Resolves the requested view, falling back to `default`.
    pub fn resolve(&self, default: FormatType) -> Result<FormatType, ApiError> {
        match self.format.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(name) => name
                .parse::<FormatType>()
                .map_err(|_| ApiError::BadRequest(format!("Unknown format '{}'", name))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    pub data: Vec<Value>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl From<Paginated<Value>> for UserListResponse {
    fn from(page: Paginated<Value>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

pub async fn list_users(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
    Query(format): Query<FormatQuery>,
) -> Result<Response<UserListResponse>, ApiError> {
    let format = format.resolve(FormatType::ListItem)?;

    let users = state
        .service
        .list_users(query, format)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserListResponse::from(users)))
}
