//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` to `RepositoryError`. The UNIQUE constraints
//! on clipboard and item names surface as `AlreadyExists` carrying the
//! offending name, which the services turn into validation errors.

use rusqlite::ffi;
use todoboard_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// - UNIQUE / PRIMARY KEY violations → `AlreadyExists`
/// - FOREIGN KEY and CHECK violations → `InvalidData`
/// - `QueryReturnedNoRows` → `NotFound`
/// - cannot open, busy or locked → `ConnectionFailed`
/// - anything else → `QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: Option<&str>,
) -> RepositoryError {
    let id = || id.unwrap_or("unknown").to_string();

    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => match sqlite_err.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                RepositoryError::AlreadyExists {
                    entity_type,
                    id: id(),
                }
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            )),
            ffi::SQLITE_CONSTRAINT_CHECK => {
                RepositoryError::InvalidData(format!("Check constraint violation for {entity_type}"))
            }
            _ => match sqlite_err.code {
                rusqlite::ErrorCode::CannotOpen
                | rusqlite::ErrorCode::DatabaseBusy
                | rusqlite::ErrorCode::DatabaseLocked => {
                    RepositoryError::ConnectionFailed(err.to_string())
                }
                _ => RepositoryError::QueryFailed(err.to_string()),
            },
        },
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id(),
        },
        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

fn map_error(err: tokio_rusqlite::Error, entity_type: &'static str, id: Option<&str>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_error(err, entity_type, None)
}

/// Maps a tokio_rusqlite error with a known ID (or name) to a RepositoryError.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    map_error(err, entity_type, Some(&id))
}
