use thiserror::Error;

use crate::editor::EditorError;
use crate::repository::errors::RepositoryError;
use crate::storage::StorageError;

pub mod public;
pub mod session;

/// Result alias shared by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to callers of the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A shop, menu, collection or dish could not be found.
    #[error("not found: {0}")]
    NotFound(String),
    /// The operation needs an active shop and none is selected.
    #[error("no shop selected")]
    NoShopSelected,
    /// User input was rejected at the boundary.
    #[error("invalid form: {0}")]
    Form(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<EditorError> for ServiceError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::NotFound { .. } => ServiceError::NotFound(err.to_string()),
            EditorError::DuplicateId(_) => ServiceError::Form(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_errors_map_onto_service_errors() {
        let missing = ServiceError::from(EditorError::NotFound {
            kind: "item",
            id: "item_1".to_string(),
        });
        assert!(matches!(missing, ServiceError::NotFound(message) if message.contains("item_1")));

        let duplicate = ServiceError::from(EditorError::DuplicateId("item_1".to_string()));
        assert!(matches!(duplicate, ServiceError::Form(_)));
    }
}
