use crate::{
    domain::query::{FieldConfig, FilterStrategy, PaginatedQueryBuilder, SortDirective},
    entity::sys_user::{Column, Entity},
};

/// Filters accepted by the user list. Built fresh for every request.
pub fn user_query_builder() -> PaginatedQueryBuilder<Entity> {
    PaginatedQueryBuilder::new()
        .auto_register_field_strategies(&[
            FieldConfig::new("username").like().sortable(),
            FieldConfig::new("nickname").like().sortable(),
            FieldConfig::new("email").like(),
            FieldConfig::new("mobile").like(),
            FieldConfig::new("status").range().sortable(),
            FieldConfig::new("gender").range().sortable(),
            FieldConfig::new("dept_id").in_list(),
        ])
        .register_strategy(
            "keywords",
            FilterStrategy::MultiFieldKeyword(vec![Column::Username, Column::Nickname, Column::Mobile]),
        )
        .register_strategy("create_time_range", FilterStrategy::DateTimeRange(Column::CreateTime))
        .register_strategy("status__in", FilterStrategy::In(Column::Status))
        .register_strategy("dept_id__in", FilterStrategy::In(Column::DeptId))
        .allow_sort("create_time")
        .order_by(SortDirective::desc(Column::CreateTime))
}
