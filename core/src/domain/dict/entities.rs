use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dictionary type such as `gender` or `notice_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictType {
    pub id: Uuid,
    pub dict_code: Option<String>,
    pub name: Option<String>,
    pub status: i16,
    pub remark: Option<String>,
    pub create_time: NaiveDateTime,
    pub update_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictItem {
    pub id: Uuid,
    pub dict_code: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
    pub tag_type: Option<String>,
    pub status: i16,
    pub sort: i32,
    pub remark: Option<String>,
    pub create_time: NaiveDateTime,
    pub update_time: Option<NaiveDateTime>,
}
