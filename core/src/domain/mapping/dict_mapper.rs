use serde::Serialize;
use serde_json::{Map, Value, json};

use super::{errors::MappingError, field_mapper::FieldMapper};
use crate::domain::dict::entities::{DictItem, DictType};

pub const DICT_FIELD_MAPPINGS: &[(&str, &str)] = &[
    ("id", "dictId"),
    ("dict_code", "dictCode"),
    ("create_time", "createTime"),
    ("update_time", "updateTime"),
    ("tag_type", "tagType"),
];

/// Frontend views of dictionary types and items. Null fields are omitted.
#[derive(Debug, Clone)]
pub struct DictFieldMapper {
    mapper: FieldMapper,
}

impl Default for DictFieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl DictFieldMapper {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper::with_mappings(DICT_FIELD_MAPPINGS.iter().copied()),
        }
    }

    pub fn to_dict_type_frontend(&self, dict_type: &DictType) -> Result<Value, MappingError> {
        self.to_frontend_without_nulls(dict_type)
    }

    pub fn to_dict_types_list(&self, dict_types: &[DictType]) -> Result<Vec<Value>, MappingError> {
        dict_types
            .iter()
            .map(|dict_type| self.to_dict_type_frontend(dict_type))
            .collect()
    }

    pub fn to_dict_item_frontend(&self, dict_item: &DictItem) -> Result<Value, MappingError> {
        self.to_frontend_without_nulls(dict_item)
    }

    pub fn to_dict_items_list(&self, dict_items: &[DictItem]) -> Result<Vec<Value>, MappingError> {
        dict_items
            .iter()
            .map(|dict_item| self.to_dict_item_frontend(dict_item))
            .collect()
    }

    /// `{value, label, tagType}` entries for select boxes.
    pub fn to_dict_item_options(&self, dict_items: &[DictItem]) -> Vec<Value> {
        dict_items
            .iter()
            .map(|item| {
                strip_nulls(json!({
                    "value": item.value,
                    "label": item.label,
                    "tagType": item.tag_type,
                }))
            })
            .collect()
    }

    fn to_frontend_without_nulls<T: Serialize>(&self, data: &T) -> Result<Value, MappingError> {
        self.mapper.to_frontend(data).map(strip_nulls)
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect::<Map<_, _>>(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn item(value: &str, label: &str, tag_type: Option<&str>) -> DictItem {
        DictItem {
            id: Uuid::new_v4(),
            dict_code: Some("gender".to_string()),
            value: Some(value.to_string()),
            label: Some(label.to_string()),
            tag_type: tag_type.map(str::to_string),
            status: 1,
            sort: 1,
            remark: None,
            create_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid date"),
            update_time: None,
        }
    }

    #[test]
    fn test_dict_type_view() {
        let dict_type = DictType {
            id: Uuid::new_v4(),
            dict_code: Some("gender".to_string()),
            name: Some("Gender".to_string()),
            status: 1,
            remark: None,
            create_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid date"),
            update_time: None,
        };

        let view = DictFieldMapper::new()
            .to_dict_type_frontend(&dict_type)
            .expect("maps");
        assert_eq!(
            view,
            json!({
                "dictId": dict_type.id.to_string(),
                "dictCode": "gender",
                "name": "Gender",
                "status": 1,
                "createTime": "2024-03-01T09:00:00",
            })
        );
    }

    #[test]
    fn test_dict_item_view_uses_tag_type() {
        let view = DictFieldMapper::new()
            .to_dict_item_frontend(&item("1", "Male", Some("primary")))
            .expect("maps");
        assert_eq!(view["tagType"], json!("primary"));
        assert_eq!(view["dictCode"], json!("gender"));
        assert!(view.get("remark").is_none());
        assert!(view.get("updateTime").is_none());
    }

    #[test]
    fn test_options_drop_missing_tag_type() {
        let options = DictFieldMapper::new()
            .to_dict_item_options(&[item("1", "Male", Some("primary")), item("2", "Female", None)]);
        assert_eq!(
            options,
            vec![
                json!({"value": "1", "label": "Male", "tagType": "primary"}),
                json!({"value": "2", "label": "Female"}),
            ]
        );
    }
}
