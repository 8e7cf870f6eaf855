//! Authentication service for the statistics endpoint.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

/// Validates HTTP Basic credentials against the configured admin account.
///
/// The expected password is stored only as a SHA-256 digest; incoming
/// passwords are digested before comparison so equal-length hex strings are
/// compared rather than raw secrets.
pub struct AuthService {
    username: String,
    password_digest: String,
}

impl AuthService {
    /// Creates a service for the given credentials.
    ///
    /// The plaintext password is digested immediately and not retained.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_digest: Self::digest(password),
        }
    }

    fn digest(input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }

    /// Checks a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when either part does not match.
    /// The error carries no hint about which part was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AppError> {
        let username_ok = username == self.username;
        let password_ok = Self::digest(password) == self.password_digest;

        if username_ok && password_ok {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new("admin", "s3cret");
        assert!(service.authenticate("admin", "s3cret").is_ok());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let service = AuthService::new("admin", "s3cret");
        let result = service.authenticate("admin", "wrong");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authenticate_wrong_username() {
        let service = AuthService::new("admin", "s3cret");
        let result = service.authenticate("root", "s3cret");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_password_is_not_retained_in_plaintext() {
        let service = AuthService::new("admin", "s3cret");
        assert_ne!(service.password_digest, "s3cret");
        assert_eq!(service.password_digest.len(), 64);
    }
}
