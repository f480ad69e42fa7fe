pub mod case;
pub mod dict_mapper;
pub mod errors;
pub mod extractors;
pub mod field_mapper;
pub mod strategies;
pub mod user_mapper;

pub use dict_mapper::DictFieldMapper;
pub use errors::MappingError;
pub use field_mapper::FieldMapper;
pub use strategies::{FormatStrategy, FormatType};
pub use user_mapper::UserFieldMapper;
