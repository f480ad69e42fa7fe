use crate::{domain::user::entities::User, entity::sys_user};

impl From<&sys_user::Model> for User {
    fn from(model: &sys_user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            nickname: model.nickname.clone(),
            avatar: model.avatar.clone(),
            gender: model.gender,
            mobile: model.mobile.clone(),
            email: model.email.clone(),
            status: model.status,
            dept_id: model.dept_id,
            openid: model.openid.clone(),
            create_time: model.create_time,
            update_time: model.update_time,
            dept: None,
            roles: None,
        }
    }
}

impl From<sys_user::Model> for User {
    fn from(model: sys_user::Model) -> Self {
        Self::from(&model)
    }
}
