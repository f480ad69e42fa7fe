use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Unknown format type: {0}")]
    UnknownFormat(String),

    #[error("Maximum recursion depth ({max_depth}) exceeded")]
    RecursionLimit { max_depth: usize },

    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for MappingError {
    fn from(e: serde_json::Error) -> Self {
        MappingError::Serialize(e.to_string())
    }
}
