use fundus_auth::AuthError;
use fundus_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the clinic service facade.
///
/// Expected outcomes (username taken, failed login, empty query results)
/// are ordinary return values on the service methods; these variants cover
/// the conditions that actually abort an operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The opaque image classifier failed to produce a result.
    #[error("Classifier failure: {message}")]
    Classifier { message: String },
}

impl ServiceError {
    /// Creates a new `Classifier` error.
    #[must_use]
    pub fn classifier(message: impl Into<String>) -> Self {
        Self::Classifier {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServiceError::classifier("model output empty");
        assert_eq!(err.to_string(), "Classifier failure: model output empty");

        let err: ServiceError = StorageError::connection_error("db down").into();
        assert_eq!(err.to_string(), "Connection error: db down");
    }
}
