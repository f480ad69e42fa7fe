use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, value_objects::Paginated},
    dict::ports::DictRepository,
    mapping::strategies::FormatType,
    query::value_objects::ListQuery,
    user::ports::{UserRepository, UserService},
};

impl<U, D> UserService for Service<U, D>
where
    U: UserRepository,
    D: DictRepository,
{
    #[instrument(skip(self, query))]
    async fn list_users(
        &self,
        query: ListQuery,
        format: FormatType,
    ) -> Result<Paginated<Value>, CoreError> {
        let users = self.user_repository.list_users(query).await?;
        let rendered = users.try_map(|user| self.user_mapper.convert(&user, format))?;
        Ok(rendered)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: Uuid, format: FormatType) -> Result<Value, CoreError> {
        let user = self
            .user_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(self.user_mapper.convert(&user, format)?)
    }
}
