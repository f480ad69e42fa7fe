use crate::{
    domain::role::entities::{Permission, Role},
    entity::{sys_permission, sys_role},
};

impl From<sys_role::Model> for Role {
    fn from(model: sys_role::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            sort: model.sort,
            status: model.status,
            data_scope: model.data_scope,
            create_time: model.create_time,
            permissions: None,
        }
    }
}

impl From<sys_permission::Model> for Permission {
    fn from(model: sys_permission::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            category: model.category,
            module: model.module,
            is_active: model.is_active,
        }
    }
}
