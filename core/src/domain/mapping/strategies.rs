use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{errors::MappingError, extractors, field_mapper::FieldMapper};
use crate::domain::user::entities::User;

/// Mappings applied to the base fields of every user view.
pub const USER_FIELD_MAPPINGS: &[(&str, &str)] = &[
    ("id", "id"),
    ("create_time", "createTime"),
    ("update_time", "updateTime"),
    ("last_login", "lastLogin"),
    ("dept_id", "deptId"),
    ("dept_name", "deptName"),
    ("status", "status"),
    ("role_ids", "roleIds"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    MeResponse,
    Profile,
    ListItem,
    Detail,
    Form,
}

impl FormatType {
    pub const ALL: [FormatType; 5] = [
        FormatType::MeResponse,
        FormatType::Profile,
        FormatType::ListItem,
        FormatType::Detail,
        FormatType::Form,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::MeResponse => "me_response",
            FormatType::Profile => "profile",
            FormatType::ListItem => "list_item",
            FormatType::Detail => "detail",
            FormatType::Form => "form",
        }
    }
}

impl FromStr for FormatType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatType::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| MappingError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders one response shape from the base fields of a user.
pub trait FormatStrategy: Send + Sync {
    fn format_type(&self) -> FormatType;

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError>;
}

/// Base field mapping shared by the strategies: keys go to camelCase and
/// `avatar` / `deptId` are always present.
#[derive(Debug, Clone)]
pub struct BaseMapping {
    mapper: FieldMapper,
}

impl Default for BaseMapping {
    fn default() -> Self {
        Self::new(FieldMapper::with_mappings(USER_FIELD_MAPPINGS.iter().copied()))
    }
}

impl BaseMapping {
    pub fn new(mapper: FieldMapper) -> Self {
        Self { mapper }
    }

    pub fn apply(&self, base_fields: Map<String, Value>) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.mapper.map_to_frontend(base_fields)?;
        result.entry("avatar").or_insert(Value::Null);
        result.entry("deptId").or_insert(Value::Null);
        Ok(result)
    }
}

/// Current user payload: `id` published as `userId`, plus role codes and permissions.
#[derive(Debug, Clone)]
pub struct MeResponseStrategy {
    base: BaseMapping,
}

impl Default for MeResponseStrategy {
    fn default() -> Self {
        let mapper = FieldMapper::with_mappings(
            USER_FIELD_MAPPINGS
                .iter()
                .copied()
                .chain([("id", "userId")]),
        );
        Self {
            base: BaseMapping::new(mapper),
        }
    }
}

impl FormatStrategy for MeResponseStrategy {
    fn format_type(&self) -> FormatType {
        FormatType::MeResponse
    }

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.base.apply(base_fields)?;
        result.insert("roles".to_string(), extractors::role_codes(user));
        result.insert("perms".to_string(), extractors::permission_codes(user));
        Ok(result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileStrategy {
    base: BaseMapping,
}

impl FormatStrategy for ProfileStrategy {
    fn format_type(&self) -> FormatType {
        FormatType::Profile
    }

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.base.apply(base_fields)?;
        result.extend(extractors::dept_fields(user));
        Ok(result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListItemStrategy {
    base: BaseMapping,
}

impl FormatStrategy for ListItemStrategy {
    fn format_type(&self) -> FormatType {
        FormatType::ListItem
    }

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.base.apply(base_fields)?;
        result.extend(extractors::dept_fields(user));
        Ok(result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailStrategy {
    base: BaseMapping,
}

impl FormatStrategy for DetailStrategy {
    fn format_type(&self) -> FormatType {
        FormatType::Detail
    }

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.base.apply(base_fields)?;
        result.insert("roles".to_string(), extractors::role_codes(user));
        result.insert("perms".to_string(), extractors::permission_codes(user));
        Ok(result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormStrategy {
    base: BaseMapping,
}

impl FormatStrategy for FormStrategy {
    fn format_type(&self) -> FormatType {
        FormatType::Form
    }

    fn transform(
        &self,
        base_fields: Map<String, Value>,
        user: &User,
    ) -> Result<Map<String, Value>, MappingError> {
        let mut result = self.base.apply(base_fields)?;
        result.insert("roleIds".to_string(), extractors::role_ids(user));
        result.insert(
            "openId".to_string(),
            user.openid.clone().map(Value::String).unwrap_or(Value::Null),
        );
        Ok(result)
    }
}

/// One strategy per [`FormatType`].
pub fn default_strategies() -> Vec<Box<dyn FormatStrategy>> {
    vec![
        Box::new(MeResponseStrategy::default()),
        Box::new(ProfileStrategy::default()),
        Box::new(ListItemStrategy::default()),
        Box::new(DetailStrategy::default()),
        Box::new(FormStrategy::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_parse() {
        for format in FormatType::ALL {
            assert_eq!(format.as_str().parse::<FormatType>(), Ok(format));
        }
        assert_eq!(
            "summary".parse::<FormatType>(),
            Err(MappingError::UnknownFormat("summary".to_string()))
        );
    }

    #[test]
    fn test_every_format_has_a_strategy() {
        let strategies = default_strategies();
        for format in FormatType::ALL {
            assert!(strategies.iter().any(|s| s.format_type() == format), "{format}");
        }
    }

    #[test]
    fn test_base_mapping_fills_required_keys() {
        let mut base = Map::new();
        base.insert("username".to_string(), Value::from("alice"));
        let result = BaseMapping::default().apply(base).expect("maps");
        assert_eq!(result.get("avatar"), Some(&Value::Null));
        assert_eq!(result.get("deptId"), Some(&Value::Null));
        assert_eq!(result.get("username"), Some(&Value::from("alice")));
    }
}
