use fundus_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by credential operations.
///
/// A failed login is NOT an error; `verify` and `login` report it through
/// their return value so the caller cannot distinguish unknown usernames
/// from wrong passwords.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with a username that is already taken.
    #[error("Username already taken: {username}")]
    UsernameTaken { username: String },

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {message}")]
    Hash { message: String },

    /// Underlying storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Creates a new `UsernameTaken` error.
    #[must_use]
    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    /// Returns `true` if this is a username conflict.
    #[must_use]
    pub fn is_username_taken(&self) -> bool {
        matches!(self, Self::UsernameTaken { .. })
    }
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::Hash {
            message: err.to_string(),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::username_taken("drA");
        assert_eq!(err.to_string(), "Username already taken: drA");
        assert!(err.is_username_taken());
    }

    #[test]
    fn test_storage_error_passthrough() {
        let err: AuthError = StorageError::connection_error("db down").into();
        assert_eq!(err.to_string(), "Connection error: db down");
        assert!(!err.is_username_taken());
    }
}
