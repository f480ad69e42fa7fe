use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: Option<String>,
    pub module: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub sort: i16,
    pub status: i16,
    pub data_scope: Option<i16>,
    pub create_time: NaiveDateTime,
    /// `None` until the permissions relation has been loaded.
    pub permissions: Option<Vec<Permission>>,
}

impl Role {
    pub fn permission_codes(&self) -> impl Iterator<Item = &str> {
        self.permissions
            .iter()
            .flatten()
            .map(|permission| permission.code.as_str())
    }
}
