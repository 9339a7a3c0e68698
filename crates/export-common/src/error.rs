//! Error types for the export core.

use thiserror::Error;

/// Result type alias using ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised by the resource cache, the level classifier and the
/// parameter name parser.
///
/// Every variant carries the name of the operation that failed and the
/// offending value. None of them are retried; they abort the enclosing query.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Bad input or setup that the query cannot proceed with.
    #[error("{operation}: {message} (value: '{value}')")]
    Configuration {
        operation: &'static str,
        value: String,
        message: String,
    },

    /// A required field of a compound identifier is absent.
    #[error("{operation}: missing field '{field}' in '{value}'")]
    MissingField {
        operation: &'static str,
        field: &'static str,
        value: String,
    },

    /// Invariant violation inside the export core.
    #[error("{operation}: internal error: {message} (value: '{value}')")]
    Internal {
        operation: &'static str,
        value: String,
        message: String,
    },
}

impl ExportError {
    /// Create a Configuration error.
    pub fn configuration(
        operation: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            operation,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a MissingField error.
    pub fn missing_field(
        operation: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::MissingField {
            operation,
            field,
            value: value.into(),
        }
    }

    /// Create an Internal error.
    pub fn internal(
        operation: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Internal {
            operation,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Name of the operation that raised the error.
    pub fn operation(&self) -> &'static str {
        match self {
            ExportError::Configuration { operation, .. }
            | ExportError::MissingField { operation, .. }
            | ExportError::Internal { operation, .. } => operation,
        }
    }

    /// The offending value carried by the error.
    pub fn value(&self) -> &str {
        match self {
            ExportError::Configuration { value, .. }
            | ExportError::MissingField { value, .. }
            | ExportError::Internal { value, .. } => value,
        }
    }

    /// Missing fields are a configuration problem of the request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExportError::Configuration { .. } | ExportError::MissingField { .. }
        )
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ExportError::Internal { .. })
    }
}
