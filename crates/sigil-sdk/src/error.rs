//! Error types for sigil extensions

/// Result type for extension calls
pub type NativeResult<T> = Result<T, NativeError>;

/// Extension error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum NativeError {
    /// Type mismatch during conversion or receiver access
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Invalid argument
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// Extension-defined failure
    #[error("{0}")]
    Failure(String),
}

impl NativeError {
    /// Build a `TypeMismatch` from the expected type name and the offending value's type
    pub fn type_mismatch(expected: &str, got: &str) -> Self {
        NativeError::TypeMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

impl From<String> for NativeError {
    fn from(s: String) -> Self {
        NativeError::Failure(s)
    }
}

impl From<&str> for NativeError {
    fn from(s: &str) -> Self {
        NativeError::Failure(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = NativeError::type_mismatch("array", "int");
        assert_eq!(err.to_string(), "Type mismatch: expected array, got int");

        let err = NativeError::ArgumentError("needs one argument".to_string());
        assert_eq!(err.to_string(), "Argument error: needs one argument");
    }

    #[test]
    fn test_from_str() {
        let err: NativeError = "boom".into();
        assert!(matches!(err, NativeError::Failure(ref s) if s == "boom"));
        assert_eq!(err.to_string(), "boom");
    }
}
