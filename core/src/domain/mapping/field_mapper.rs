use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    case::{to_camel_case, to_snake_case},
    errors::MappingError,
};

pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Mappings every mapper starts from. Custom mappings override them.
pub const COMMON_MAPPINGS: &[(&str, &str)] = &[
    ("id", "id"),
    ("created_time", "createTime"),
    ("updated_time", "updateTime"),
    ("is_deleted", "isDeleted"),
    ("role_id", "roleId"),
    ("role_name", "roleName"),
    ("role_code", "roleCode"),
    ("is_system", "isSystem"),
];

/// Converts keys between backend `snake_case` and frontend `camelCase`.
///
/// Keys found in the explicit table are mapped through it; any other key goes
/// through the case conversion fallback. The table is kept one-to-one: when a
/// frontend name is claimed again, the earlier backend key loses its entry.
#[derive(Debug, Clone)]
pub struct FieldMapper {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
    max_depth: usize,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        let mut mapper = Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        };
        mapper.batch_register_mappings(COMMON_MAPPINGS.iter().copied());
        mapper
    }

    pub fn with_mappings<B, F, I>(custom: I) -> Self
    where
        B: Into<String>,
        F: Into<String>,
        I: IntoIterator<Item = (B, F)>,
    {
        let mut mapper = Self::new();
        mapper.batch_register_mappings(custom);
        mapper
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn register_mapping(&mut self, backend_key: impl Into<String>, frontend_key: impl Into<String>) {
        let backend_key = backend_key.into();
        let frontend_key = frontend_key.into();

        if let Some(previous_frontend) = self.forward.get(&backend_key)
            && self.reverse.get(previous_frontend) == Some(&backend_key)
        {
            self.reverse.remove(previous_frontend);
        }
        if let Some(previous_backend) = self.reverse.get(&frontend_key)
            && previous_backend != &backend_key
        {
            self.forward.remove(previous_backend);
        }

        self.forward.insert(backend_key.clone(), frontend_key.clone());
        self.reverse.insert(frontend_key, backend_key);
    }

    pub fn batch_register_mappings<B, F, I>(&mut self, mappings: I)
    where
        B: Into<String>,
        F: Into<String>,
        I: IntoIterator<Item = (B, F)>,
    {
        for (backend_key, frontend_key) in mappings {
            self.register_mapping(backend_key, frontend_key);
        }
    }

    pub fn frontend_key(&self, backend_key: &str) -> String {
        self.forward
            .get(backend_key)
            .cloned()
            .unwrap_or_else(|| to_camel_case(backend_key, false))
    }

    pub fn backend_key(&self, frontend_key: &str) -> String {
        self.reverse
            .get(frontend_key)
            .cloned()
            .unwrap_or_else(|| to_snake_case(frontend_key))
    }

    /// Rewrites every object key, recursing through objects and arrays.
    pub fn backend_to_frontend(&self, data: &Value) -> Result<Value, MappingError> {
        self.convert_keys(data, &|key: &str| self.frontend_key(key), 0)
    }

    pub fn frontend_to_backend(&self, data: &Value) -> Result<Value, MappingError> {
        self.convert_keys(data, &|key: &str| self.backend_key(key), 0)
    }

    /// Serializes `data` (datetimes become ISO-8601 strings) and maps it to
    /// frontend keys.
    pub fn to_frontend<T: Serialize>(&self, data: &T) -> Result<Value, MappingError> {
        let value = serde_json::to_value(data)?;
        self.backend_to_frontend(&value)
    }

    pub fn map_to_frontend(&self, data: Map<String, Value>) -> Result<Map<String, Value>, MappingError> {
        match self.backend_to_frontend(&Value::Object(data))? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    fn convert_keys(
        &self,
        data: &Value,
        convert: &dyn Fn(&str) -> String,
        depth: usize,
    ) -> Result<Value, MappingError> {
        if depth > self.max_depth {
            return Err(MappingError::RecursionLimit {
                max_depth: self.max_depth,
            });
        }

        match data {
            Value::Object(map) => {
                let mut converted = Map::with_capacity(map.len());
                for (key, value) in map {
                    converted.insert(convert(key), self.convert_keys(value, convert, depth + 1)?);
                }
                Ok(Value::Object(converted))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.convert_keys(item, convert, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            leaf => Ok(leaf.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_explicit_table_round_trips() {
        let mapper = FieldMapper::with_mappings([
            ("create_time", "createTime"),
            ("update_time", "updateTime"),
            ("dept_id", "deptId"),
            ("id", "userId"),
        ]);

        let backend_keys = COMMON_MAPPINGS
            .iter()
            .map(|(backend, _)| *backend)
            .chain(["create_time", "update_time", "dept_id"]);

        for backend in backend_keys {
            let mut row = Map::new();
            row.insert(backend.to_string(), json!("v"));
            let original = Value::Object(row);

            let there = mapper.backend_to_frontend(&original).expect("maps");
            let back = mapper.frontend_to_backend(&there).expect("maps");
            assert_eq!(back, original, "{backend}");
        }
    }

    #[test]
    fn test_reclaimed_frontend_name_evicts_old_backend_key() {
        let mut mapper = FieldMapper::new();
        assert_eq!(mapper.frontend_key("created_time"), "createTime");

        mapper.register_mapping("create_time", "createTime");
        assert_eq!(mapper.backend_key("createTime"), "create_time");
        assert_eq!(mapper.frontend_key("created_time"), "createdTime");
    }

    #[test]
    fn test_remapped_backend_key_drops_stale_reverse_entry() {
        let mut mapper = FieldMapper::new();
        mapper.register_mapping("id", "userId");
        assert_eq!(mapper.frontend_key("id"), "userId");
        assert_eq!(mapper.backend_key("userId"), "id");
        assert_eq!(mapper.backend_key("id"), "id");
        assert_eq!(mapper.reverse.get("id"), None);
    }

    #[test]
    fn test_fallback_conversion_recurses() {
        let mapper = FieldMapper::new();
        let data = json!({
            "dept_info": {"parent_id": "p", "tree_path": "0,1"},
            "role_list": [{"role_code": "ADMIN", "data_scope": 1}],
            "status": 1,
        });
        let frontend = mapper.backend_to_frontend(&data).expect("maps");
        assert_eq!(
            frontend,
            json!({
                "deptInfo": {"parentId": "p", "treePath": "0,1"},
                "roleList": [{"roleCode": "ADMIN", "dataScope": 1}],
                "status": 1,
            })
        );
        assert_eq!(mapper.frontend_to_backend(&frontend).expect("maps"), data);
    }

    #[test]
    fn test_datetimes_serialize_as_iso_strings() {
        #[derive(Serialize)]
        struct Row {
            dept_id: &'static str,
            create_time: NaiveDateTime,
        }

        let mapper = FieldMapper::with_mappings([("create_time", "createTime"), ("dept_id", "deptId")]);
        let row = Row {
            dept_id: "abc-123",
            create_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
        };

        assert_eq!(
            mapper.to_frontend(&row).expect("maps"),
            json!({"deptId": "abc-123", "createTime": "2024-01-01T00:00:00"})
        );
    }

    #[test]
    fn test_depth_limit() {
        let mapper = FieldMapper::new().with_max_depth(2);
        assert!(mapper.backend_to_frontend(&json!({"a": {"b": 1}})).is_ok());
        assert_eq!(
            mapper.backend_to_frontend(&json!({"a": {"b": {"c": 1}}})),
            Err(MappingError::RecursionLimit { max_depth: 2 })
        );
    }

    #[test]
    fn test_leaves_pass_through() {
        let mapper = FieldMapper::new();
        assert_eq!(mapper.backend_to_frontend(&json!("x")).expect("maps"), json!("x"));
        assert_eq!(mapper.backend_to_frontend(&json!([1, 2])).expect("maps"), json!([1, 2]));
    }
}
