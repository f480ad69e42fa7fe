use std::future::Future;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::Paginated,
    },
    mapping::strategies::FormatType,
    query::value_objects::ListQuery,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Filtered, ordered page of users with roles, permissions and dept loaded.
    fn list_users(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<User>, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn list_users(
        &self,
        query: ListQuery,
        format: FormatType,
    ) -> impl Future<Output = Result<Paginated<Value>, CoreError>> + Send;

    fn get_user(
        &self,
        id: Uuid,
        format: FormatType,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
