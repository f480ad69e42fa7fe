use crate::{
    domain::query::{FieldConfig, FilterStrategy, PaginatedQueryBuilder, SortDirective},
    entity::sys_dict::{Column, Entity},
};

pub fn dict_type_query_builder() -> PaginatedQueryBuilder<Entity> {
    PaginatedQueryBuilder::new()
        .auto_register_field_strategies(&[
            FieldConfig::new("dict_code").like().sortable(),
            FieldConfig::new("name").like().sortable(),
            FieldConfig::new("status").sortable(),
        ])
        .register_strategy(
            "keywords",
            FilterStrategy::MultiFieldKeyword(vec![Column::DictCode, Column::Name]),
        )
        .allow_sort("create_time")
        .order_by(SortDirective::desc(Column::CreateTime))
}
