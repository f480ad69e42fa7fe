use std::collections::{HashMap, HashSet};

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use tracing::error;
use uuid::Uuid;

use super::query::user_query_builder;
use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::Paginated},
        dept::entities::Dept,
        query::value_objects::ListQuery,
        role::entities::{Permission, Role},
        user::{entities::User, ports::UserRepository},
    },
    entity::{
        sys_dept, sys_permission, sys_role, sys_role_permission,
        sys_user::{self, Column, Entity},
        sys_user_role,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn base_query() -> Select<Entity> {
        Entity::find().filter(Column::IsDeleted.eq(0))
    }

    /// Loads roles (with permissions) and departments for a page of users in
    /// four batched queries.
    async fn load_relations(&self, models: Vec<sys_user::Model>) -> Result<Vec<User>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<Uuid> = models.iter().map(|model| model.id).collect();
        let links = sys_user_role::Entity::find()
            .filter(sys_user_role::Column::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load user roles: {}", e);
                CoreError::InternalServerError
            })?;

        let role_ids: HashSet<Uuid> = links.iter().map(|link| link.role_id).collect();
        let roles = self.load_roles(role_ids).await?;

        let dept_ids: HashSet<Uuid> = models.iter().filter_map(|model| model.dept_id).collect();
        let depts = self.load_depts(dept_ids).await?;

        let mut roles_by_user: HashMap<Uuid, Vec<Role>> = HashMap::new();
        for link in links {
            if let Some(role) = roles.get(&link.role_id) {
                roles_by_user.entry(link.user_id).or_default().push(role.clone());
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let mut user = User::from(&model);
                let mut roles = roles_by_user.remove(&model.id).unwrap_or_default();
                roles.sort_by(|a, b| a.sort.cmp(&b.sort).then_with(|| a.code.cmp(&b.code)));
                user.roles = Some(roles);
                user.dept = model.dept_id.and_then(|id| depts.get(&id).cloned());
                user
            })
            .collect())
    }

    async fn load_roles(&self, role_ids: HashSet<Uuid>) -> Result<HashMap<Uuid, Role>, CoreError> {
        if role_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let role_models = sys_role::Entity::find()
            .filter(sys_role::Column::Id.is_in(role_ids.iter().copied()))
            .filter(sys_role::Column::IsDeleted.eq(0))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load roles: {}", e);
                CoreError::InternalServerError
            })?;

        let grants = sys_role_permission::Entity::find()
            .filter(sys_role_permission::Column::RoleId.is_in(role_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load role permissions: {}", e);
                CoreError::InternalServerError
            })?;

        let permission_ids: HashSet<Uuid> = grants.iter().map(|grant| grant.permission_id).collect();
        let permissions: HashMap<Uuid, Permission> = if permission_ids.is_empty() {
            HashMap::new()
        } else {
            sys_permission::Entity::find()
                .filter(sys_permission::Column::Id.is_in(permission_ids))
                .filter(sys_permission::Column::IsActive.eq(true))
                .order_by_asc(sys_permission::Column::Code)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load permissions: {}", e);
                    CoreError::InternalServerError
                })?
                .into_iter()
                .map(|model| (model.id, Permission::from(model)))
                .collect()
        };

        let mut permissions_by_role: HashMap<Uuid, Vec<Permission>> = HashMap::new();
        for grant in grants {
            if let Some(permission) = permissions.get(&grant.permission_id) {
                permissions_by_role
                    .entry(grant.role_id)
                    .or_default()
                    .push(permission.clone());
            }
        }

        Ok(role_models
            .into_iter()
            .map(|model| {
                let id = model.id;
                let mut role = Role::from(model);
                role.permissions = Some(permissions_by_role.remove(&id).unwrap_or_default());
                (id, role)
            })
            .collect())
    }

    async fn load_depts(&self, dept_ids: HashSet<Uuid>) -> Result<HashMap<Uuid, Dept>, CoreError> {
        if dept_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let depts = sys_dept::Entity::find()
            .filter(sys_dept::Column::Id.is_in(dept_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load departments: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(depts
            .into_iter()
            .map(|model| (model.id, Dept::from(model)))
            .collect())
    }
}

impl UserRepository for PostgresUserRepository {
    async fn list_users(&self, query: ListQuery) -> Result<Paginated<User>, CoreError> {
        let ListQuery {
            filter,
            sort,
            pagination,
        } = query;

        let builder = user_query_builder()
            .filter_params(filter)
            .sort(sort.field.as_deref(), sort.direction)
            .paginate(pagination.offset, pagination.limit);

        let total = builder
            .build(Self::base_query())
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count users: {}", e);
                CoreError::InternalServerError
            })?;

        let models = builder
            .build_paginated(Self::base_query())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list users: {}", e);
                CoreError::InternalServerError
            })?;

        let items = self.load_relations(models).await?;

        Ok(Paginated {
            items,
            offset: pagination.offset,
            limit: pagination.limit,
            total,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let model = Self::base_query()
            .filter(Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![model]).await?.into_iter().next())
    }
}
