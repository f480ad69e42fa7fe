pub mod builder;
pub mod key;
pub mod strategy;
pub mod value;
pub mod value_objects;

pub use builder::{FieldConfig, PaginatedQueryBuilder, QueryBuilder, SortDirective};
pub use key::{FilterKey, FilterOperator};
pub use strategy::FilterStrategy;
pub use value::FilterValue;
pub use value_objects::{FilterCondition, FilterParams, ListQuery, SortDirection, SortParams};
