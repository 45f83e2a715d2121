//! Conversions from external infrastructure errors into domain errors.

use playerlog_domain::Error;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub Error);

impl From<InfraError> for Error {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<Error> for InfraError {
    fn from(value: Error) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDomainError {
    fn into_domain(self) -> Error;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → Error */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for SqlError {
    fn into_domain(self) -> Error {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => Error::Database("database is busy".into()),
                    (ErrorCode::DatabaseLocked, _) => Error::Database("database is locked".into()),
                    (ErrorCode::ConstraintViolation, 2067) => {
                        Error::Database("unique constraint violation".into())
                    }
                    _ => Error::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => Error::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                Error::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                Error::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => Error::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                Error::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                Error::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => Error::Database("invalid SQL query".into()),
            other => Error::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → Error */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for r2d2::Error {
    fn into_domain(self) -> Error {
        Error::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → Error */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for HttpError {
    fn into_domain(self) -> Error {
        if self.is_timeout() {
            Error::Network(format!("request timed out: {self}"))
        } else if self.is_connect() {
            Error::Network(format!("connection failed: {self}"))
        } else if self.is_decode() {
            Error::Internal(format!("failed to decode response body: {self}"))
        } else {
            Error::Network(self.to_string())
        }
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / std::io::Error → Error */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(Error::Session(format!("invalid session document: {value}")))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(Error::Session(format!("session storage I/O failed: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_maps_to_not_found() {
        let err: InfraError = SqlError::QueryReturnedNoRows.into();
        assert!(matches!(Error::from(err), Error::NotFound(_)));
    }

    #[test]
    fn invalid_query_maps_to_database() {
        let err: InfraError = SqlError::InvalidQuery.into();
        assert!(matches!(Error::from(err), Error::Database(_)));
    }

    #[test]
    fn io_error_maps_to_session() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InfraError = io.into();
        assert!(matches!(Error::from(err), Error::Session(_)));
    }
}
