use crate::{domain::dept::entities::Dept, entity::sys_dept};

impl From<sys_dept::Model> for Dept {
    fn from(model: sys_dept::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            parent_id: model.parent_id,
            tree_path: model.tree_path,
            sort: model.sort,
            status: model.status,
        }
    }
}
