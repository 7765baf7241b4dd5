//! Pure functions for mapping repository and service errors to HTTP status codes.

use crate::board::BoardError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed` and `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// ```
/// use todoboard_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Clipboard",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`BoardError`] to an HTTP status code.
///
/// Every domain failure answers 400, including not-found and forbidden.
/// Storage failures fall through to [`repository_error_to_status_code`].
pub fn board_error_to_status_code(error: &BoardError) -> u16 {
    match error {
        BoardError::Storage(inner) => repository_error_to_status_code(inner),
        _ => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ValidationError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "Clipboard",
            id: "1".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Item",
            id: "Milk".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_and_serialization_map_to_500() {
        let query = RepositoryError::QueryFailed("syntax error".to_string());
        let serialization = RepositoryError::Serialization("bad row".to_string());
        assert_eq!(repository_error_to_status_code(&query), 500);
        assert_eq!(repository_error_to_status_code(&serialization), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("unknown owner key".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_domain_errors_collapse_to_400() {
        let errors = [
            BoardError::Validation(ValidationError::EmptyName),
            BoardError::ClipboardNotFound(1),
            BoardError::Forbidden(1),
            BoardError::ClipboardNotFoundOrForbidden(1),
            BoardError::ItemNotFoundOrForbidden(1),
        ];
        for error in &errors {
            assert_eq!(board_error_to_status_code(error), 400, "{error}");
        }
    }

    #[test]
    fn test_storage_errors_keep_repository_mapping() {
        let error = BoardError::Storage(RepositoryError::ConnectionFailed("down".to_string()));
        assert_eq!(board_error_to_status_code(&error), 503);
    }
}
