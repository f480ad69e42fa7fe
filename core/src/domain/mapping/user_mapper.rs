use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::{
    errors::MappingError,
    extractors::user_base_fields,
    strategies::{FormatStrategy, FormatType, default_strategies},
};
use crate::domain::user::entities::User;

/// Converts [`User`] entities into the response shapes named by [`FormatType`].
pub struct UserFieldMapper {
    strategies: HashMap<FormatType, Box<dyn FormatStrategy>>,
}

impl Default for UserFieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFieldMapper {
    pub fn new() -> Self {
        Self::with_strategies(default_strategies())
    }

    /// Later strategies replace earlier ones for the same format.
    pub fn with_strategies(strategies: impl IntoIterator<Item = Box<dyn FormatStrategy>>) -> Self {
        Self {
            strategies: strategies
                .into_iter()
                .map(|strategy| (strategy.format_type(), strategy))
                .collect(),
        }
    }

    pub fn convert(&self, user: &User, format: FormatType) -> Result<Value, MappingError> {
        let strategy = self
            .strategies
            .get(&format)
            .ok_or_else(|| MappingError::UnknownFormat(format.to_string()))?;

        let result = strategy.transform(user_base_fields(user), user)?;
        debug!(user_id = %user.id, %format, "converted user");
        Ok(Value::Object(result))
    }

    pub fn convert_named(&self, user: &User, format: &str) -> Result<Value, MappingError> {
        self.convert(user, format.parse()?)
    }

    pub fn to_user_me_response(&self, user: &User) -> Result<Value, MappingError> {
        self.convert(user, FormatType::MeResponse)
    }

    pub fn to_user_profile(&self, user: &User) -> Result<Value, MappingError> {
        self.convert(user, FormatType::Profile)
    }

    pub fn to_user_list_item(&self, user: &User) -> Result<Value, MappingError> {
        self.convert(user, FormatType::ListItem)
    }

    pub fn to_user_detail(&self, user: &User) -> Result<Value, MappingError> {
        self.convert(user, FormatType::Detail)
    }

    pub fn to_user_form(&self, user: &User) -> Result<Value, MappingError> {
        self.convert(user, FormatType::Form)
    }

    pub fn to_users_list(&self, users: &[User]) -> Result<Vec<Value>, MappingError> {
        users.iter().map(|user| self.to_user_list_item(user)).collect()
    }
}
