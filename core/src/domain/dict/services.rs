use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, value_objects::Paginated},
    dict::ports::{DictRepository, DictService},
    query::value_objects::ListQuery,
    user::ports::UserRepository,
};

fn normalize_dict_code(raw: String) -> Result<String, CoreError> {
    let code = raw.trim();
    if code.is_empty() {
        debug!("rejecting blank dict code");
        return Err(CoreError::InvalidQuery("dict code must not be empty".to_string()));
    }
    Ok(code.to_string())
}

impl<U, D> DictService for Service<U, D>
where
    U: UserRepository,
    D: DictRepository,
{
    #[instrument(skip(self, query))]
    async fn list_dict_types(&self, query: ListQuery) -> Result<Paginated<Value>, CoreError> {
        let dict_types = self.dict_repository.list_dict_types(query).await?;
        Ok(dict_types.try_map(|dict_type| self.dict_mapper.to_dict_type_frontend(&dict_type))?)
    }

    #[instrument(skip(self))]
    async fn get_dict_items(&self, dict_code: String) -> Result<Vec<Value>, CoreError> {
        let items = self
            .dict_repository
            .list_items_by_code(normalize_dict_code(dict_code)?)
            .await?;
        Ok(self.dict_mapper.to_dict_items_list(&items)?)
    }

    #[instrument(skip(self))]
    async fn get_dict_options(&self, dict_code: String) -> Result<Vec<Value>, CoreError> {
        let items = self
            .dict_repository
            .list_items_by_code(normalize_dict_code(dict_code)?)
            .await?;
        Ok(self.dict_mapper.to_dict_item_options(&items))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        dict::{entities::DictItem, ports::MockDictRepository},
        user::ports::MockUserRepository,
    };

    fn item(value: &str, label: &str) -> DictItem {
        DictItem {
            id: Uuid::new_v4(),
            dict_code: Some("status".to_string()),
            value: Some(value.to_string()),
            label: Some(label.to_string()),
            tag_type: None,
            status: 1,
            sort: 0,
            remark: None,
            create_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            update_time: None,
        }
    }

    #[tokio::test]
    async fn test_options_are_built_from_items() {
        let mut dicts = MockDictRepository::new();
        dicts
            .expect_list_items_by_code()
            .with(eq("status".to_string()))
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![item("1", "Enabled"), item("0", "Disabled")]) }));

        let service = Service::new(MockUserRepository::new(), dicts);
        let options = service
            .get_dict_options("status".to_string())
            .await
            .expect("options");

        assert_eq!(
            options,
            vec![
                json!({"value": "1", "label": "Enabled"}),
                json!({"value": "0", "label": "Disabled"}),
            ]
        );
    }

    #[tokio::test]
    async fn test_dict_code_is_trimmed() {
        let mut dicts = MockDictRepository::new();
        dicts
            .expect_list_items_by_code()
            .with(eq("status".to_string()))
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![item("1", "Enabled")]) }));

        let service = Service::new(MockUserRepository::new(), dicts);
        let items = service
            .get_dict_items(" status ".to_string())
            .await
            .expect("items");
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_dict_code_is_rejected() {
        let mut dicts = MockDictRepository::new();
        dicts.expect_list_items_by_code().times(0);

        let service = Service::new(MockUserRepository::new(), dicts);
        let result = service.get_dict_options("   ".to_string()).await;
        assert!(matches!(result, Err(CoreError::InvalidQuery(_))));
    }
}
