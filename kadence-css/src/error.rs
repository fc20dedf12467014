use thiserror::Error;

pub type BlockResult<T> = Result<T, BlockError>;

#[derive(Error, Debug, Clone)]
pub enum BlockError {
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for BlockError {
    fn from(err: serde_json::Error) -> Self {
        BlockError::DeserializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for BlockError {
    fn from(err: serde_yaml::Error) -> Self {
        BlockError::YamlError(err.to_string())
    }
}

impl From<std::io::Error> for BlockError {
    fn from(err: std::io::Error) -> Self {
        BlockError::Io(err.to_string())
    }
}
