use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::Paginated},
    dict::entities::{DictItem, DictType},
    query::value_objects::ListQuery,
};

#[cfg_attr(test, mockall::automock)]
pub trait DictRepository: Send + Sync {
    fn list_dict_types(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<DictType>, CoreError>> + Send;

    /// Enabled items of one dictionary, ordered by `sort`.
    fn list_items_by_code(
        &self,
        dict_code: String,
    ) -> impl Future<Output = Result<Vec<DictItem>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DictService: Send + Sync {
    fn list_dict_types(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Paginated<Value>, CoreError>> + Send;

    fn get_dict_items(
        &self,
        dict_code: String,
    ) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;

    fn get_dict_options(
        &self,
        dict_code: String,
    ) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;
}
