//! Engine error types

use sigil_sdk::NativeError;

/// Engine execution errors
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No class with the given ID or name is registered
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// No slot for the given key anywhere on the receiver's prototype chain
    #[error("Unknown method {method} on {class}")]
    UnknownMethod {
        /// Receiver class name
        class: String,
        /// The key that failed to resolve (method name or symbol)
        method: String,
    },

    /// Extension function failure, propagated unchanged
    #[error(transparent)]
    Native(#[from] NativeError),
}

/// Engine execution result
pub type EngineResult<T> = Result<T, EngineError>;
