use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::error;

use super::query::dict_type_query_builder;
use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::Paginated},
        dict::{
            entities::{DictItem, DictType},
            ports::DictRepository,
        },
        query::value_objects::ListQuery,
    },
    entity::{sys_dict, sys_dict_item},
};

#[derive(Debug, Clone)]
pub struct PostgresDictRepository {
    pub db: DatabaseConnection,
}

impl PostgresDictRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DictRepository for PostgresDictRepository {
    async fn list_dict_types(&self, query: ListQuery) -> Result<Paginated<DictType>, CoreError> {
        let builder = dict_type_query_builder()
            .filter_params(query.filter)
            .sort(query.sort.field.as_deref(), query.sort.direction)
            .paginate(query.pagination.offset, query.pagination.limit);

        let base = sys_dict::Entity::find().filter(sys_dict::Column::IsDeleted.eq(0));

        let total = builder.build(base.clone()).count(&self.db).await.map_err(|e| {
            error!("Failed to count dict types: {}", e);
            CoreError::InternalServerError
        })?;

        let items = builder
            .build_paginated(base)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list dict types: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(DictType::from)
            .collect();

        Ok(Paginated {
            items,
            offset: query.pagination.offset,
            limit: query.pagination.limit,
            total,
        })
    }

    async fn list_items_by_code(&self, dict_code: String) -> Result<Vec<DictItem>, CoreError> {
        let items = sys_dict_item::Entity::find()
            .filter(sys_dict_item::Column::DictCode.eq(dict_code))
            .filter(sys_dict_item::Column::Status.eq(1))
            .order_by_asc(sys_dict_item::Column::Sort)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list dict items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.into_iter().map(DictItem::from).collect())
    }
}
