use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{dept::entities::Dept, role::entities::Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub gender: Option<i16>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub status: i16,
    pub dept_id: Option<Uuid>,
    pub openid: Option<String>,
    pub create_time: NaiveDateTime,
    pub update_time: Option<NaiveDateTime>,
    /// Loaded department, `None` when not loaded or unassigned.
    pub dept: Option<Dept>,
    /// Loaded roles, `None` when the relation was not loaded.
    pub roles: Option<Vec<Role>>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|nickname| !nickname.is_empty())
            .unwrap_or(&self.username)
    }

    pub fn roles(&self) -> &[Role] {
        self.roles.as_deref().unwrap_or_default()
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles().iter().map(|role| role.name.as_str()).collect()
    }

    pub fn role_codes(&self) -> Vec<&str> {
        self.roles().iter().map(|role| role.code.as_str()).collect()
    }

    pub fn role_ids(&self) -> Vec<Uuid> {
        self.roles().iter().map(|role| role.id).collect()
    }

    /// Union of the permission codes of every role, sorted and de-duplicated.
    pub fn permission_codes(&self) -> Vec<&str> {
        self.roles()
            .iter()
            .flat_map(|role| role.permission_codes())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::role::entities::Permission;

    fn permission(code: &str) -> Permission {
        Permission {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: code.to_string(),
            category: None,
            module: None,
            is_active: true,
        }
    }

    fn role(code: &str, perms: &[&str]) -> Role {
        Role {
            id: Uuid::new_v4(),
            name: code.to_uppercase(),
            code: code.to_string(),
            sort: 0,
            status: 1,
            data_scope: None,
            create_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            permissions: Some(perms.iter().map(|code| permission(code)).collect()),
        }
    }

    fn user(roles: Option<Vec<Role>>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            nickname: None,
            avatar: None,
            gender: None,
            mobile: None,
            email: None,
            status: 1,
            dept_id: None,
            openid: None,
            create_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            update_time: None,
            dept: None,
            roles,
        }
    }

    #[test]
    fn test_permission_codes_are_deduplicated() {
        let user = user(Some(vec![
            role("admin", &["user:read", "user:write"]),
            role("auditor", &["user:read", "log:read"]),
        ]));

        let perms = user.permission_codes();
        assert_eq!(perms, vec!["log:read", "user:read", "user:write"]);
    }

    #[test]
    fn test_unloaded_roles_read_as_empty() {
        let user = user(None);
        assert!(user.role_codes().is_empty());
        assert!(user.permission_codes().is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = user(None);
        assert_eq!(user.display_name(), "alice");
        user.nickname = Some("Ally".to_string());
        assert_eq!(user.display_name(), "Ally");
    }
}
