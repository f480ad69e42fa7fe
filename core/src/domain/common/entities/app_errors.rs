use thiserror::Error;

use crate::domain::mapping::errors::MappingError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}
