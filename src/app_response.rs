use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::error::{DraftError, StorageError};

/// JSON envelope returned by every exported function.
///
/// `Ok` carries a JSON document (or a plain message); every other variant
/// carries a human-readable reason.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppResponse {
    DatabaseError(String),
    SerializationError(String),
    NotFound(String),
    ValidationError(String),
    BadRequest(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl From<StorageError> for AppResponse {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(e) => AppResponse::from(e),
            StorageError::Closed => {
                AppResponse::BadRequest("Database has been closed".to_string())
            }
            other => AppResponse::DatabaseError(other.to_string()),
        }
    }
}

impl From<SerdeError> for AppResponse {
    fn from(err: SerdeError) -> Self {
        AppResponse::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<DraftError> for AppResponse {
    fn from(err: DraftError) -> Self {
        AppResponse::ValidationError(err.to_string())
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AppResponse::Ok(_))
    }
}
