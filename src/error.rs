use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    ColumnNotFound(String),
    TypeMismatch { expected: String, actual: String },
    InvalidArgument(String),
    Internal(String),
}

impl Error {
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Error::ColumnNotFound(name.into())
    }

    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ColumnNotFound(name) => write!(f, "Column not found: {}", name),
            Error::TypeMismatch { expected, actual } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, actual)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_display_column_not_found() {
        let err = Error::column_not_found("ts");
        assert_eq!(err.to_string(), "Column not found: ts");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_display_type_mismatch() {
        let err = Error::type_mismatch("INT64", "STRING");
        assert_eq!(err.to_string(), "Type mismatch: expected INT64, got STRING");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_display_invalid_argument() {
        let err = Error::invalid_argument("row index 5 out of bounds");
        assert_eq!(err.to_string(), "Invalid argument: row index 5 out of bounds");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_display_internal() {
        let err = Error::internal("gather index out of bounds");
        assert_eq!(err.to_string(), "Internal error: gather index out of bounds");
    }
}
