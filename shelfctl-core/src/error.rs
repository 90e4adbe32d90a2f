/// Structured error types for the shelfctl libraries.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (shelfctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database round-trip failed (connection, statement, transaction, scan)
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// A lookup matched no rows
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::not_found("book", "Harry Potter");
        assert_eq!(err.to_string(), "not found: book 'Harry Potter'");

        let err = CatalogError::config("DATABASE_URL not set");
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: CatalogError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, CatalogError::Database { .. }));
    }
}
