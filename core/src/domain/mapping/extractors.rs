use chrono::NaiveDateTime;
use serde_json::{Map, Value, json};

use crate::domain::user::entities::User;

pub fn iso_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Fields shared by every user view, with backend keys. `None` values are
/// left out; ids are rendered as strings.
pub fn user_base_fields(user: &User) -> Map<String, Value> {
    let fields = [
        ("id", Some(json!(user.id.to_string()))),
        ("username", Some(json!(user.username))),
        ("nickname", Some(json!(user.display_name()))),
        ("avatar", user.avatar.as_ref().map(|avatar| json!(avatar))),
        ("gender", user.gender.map(|gender| json!(gender))),
        ("mobile", user.mobile.as_ref().map(|mobile| json!(mobile))),
        ("email", user.email.as_ref().map(|email| json!(email))),
        ("status", Some(json!(user.status))),
        ("dept_id", user.dept_id.map(|id| json!(id.to_string()))),
        ("create_time", Some(json!(iso_datetime(&user.create_time)))),
    ];

    fields
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
        .collect()
}

pub fn role_codes(user: &User) -> Value {
    json!(user.role_codes())
}

pub fn role_ids(user: &User) -> Value {
    Value::Array(
        user.role_ids()
            .into_iter()
            .map(|id| Value::String(id.to_string()))
            .collect(),
    )
}

pub fn permission_codes(user: &User) -> Value {
    json!(user.permission_codes())
}

/// Department name and id from the loaded dept, plus the joined role names.
pub fn dept_fields(user: &User) -> Map<String, Value> {
    let mut fields = Map::new();

    if let Some(dept) = &user.dept {
        fields.insert("deptName".to_string(), json!(dept.name));
        fields.insert("deptId".to_string(), json!(dept.id.to_string()));
    }

    if user.roles.as_ref().is_some_and(|roles| !roles.is_empty()) {
        fields.insert("roleNames".to_string(), json!(user.role_names().join(", ")));
    }

    fields
}
