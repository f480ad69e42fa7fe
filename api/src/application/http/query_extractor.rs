use axum::{extract::FromRequestParts, http::request::Parts};
use rbac_admin_core::domain::query::ListQuery;

use super::query_params::parse_list_query;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Extractor for list endpoints: filters, sort and pagination in one go.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListQueryExtractor(query): ListQueryExtractor,
/// ) -> Result<Response<Value>, ApiError> {
///     // query.filter, query.sort, query.pagination
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        Ok(ListQueryExtractor(parse_list_query(&pairs)))
    }
}
