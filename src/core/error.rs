use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FnProxyError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl FnProxyError {
    /// The underlying message, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            FnProxyError::ConfigParsingError(msg)
            | FnProxyError::IoError(msg)
            | FnProxyError::DatabaseError(msg)
            | FnProxyError::DecodeError(msg) => msg,
        }
    }
}

impl From<std::io::Error> for FnProxyError {
    fn from(err: std::io::Error) -> Self {
        FnProxyError::IoError(err.to_string())
    }
}

impl From<sqlx::Error> for FnProxyError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => FnProxyError::DatabaseError(db.message().to_string()),
            other => FnProxyError::DatabaseError(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for FnProxyError {
    fn from(err: config::ConfigError) -> Self {
        FnProxyError::ConfigParsingError(err.to_string())
    }
}
