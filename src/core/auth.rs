//! Credential submission logic.
//!
//! Validates form input client-side, posts credentials to the auth
//! endpoints, and maps the response into session transitions for the
//! caller. Transport failures of any class collapse into one generic,
//! user-facing message per endpoint; there are no retries.

use crate::config::{LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use crate::core::error::{AuthError, FetchError};
use crate::models::{AuthResponse, CredentialPayload};
use crate::utils::post_json;

/// Which auth endpoint a submission targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKind {
    Login,
    Register,
}

impl CredentialKind {
    /// Endpoint URL for this submission kind.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_ENDPOINT,
            Self::Register => REGISTER_ENDPOINT,
        }
    }

    /// Generic message shown for any transport-level failure.
    ///
    /// Deliberately does not distinguish timeout, DNS, status, or parse
    /// failures; the user can always retry the same action.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Register => "Signup failed. Please try again.",
        }
    }
}

/// Validate login form input before any network call.
pub fn validate_login(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

/// Validate signup form input before any network call.
///
/// The mismatch check runs first so its message is what the user sees
/// even when other fields are also wrong.
pub fn validate_signup(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), AuthError> {
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    validate_login(username, password)
}

/// POST credentials to the endpoint for `kind`.
///
/// Suspends until the server responds or the fetch timeout fires. The
/// caller inspects `AuthResponse::success` to decide between switching to
/// the main view and surfacing the server message.
pub async fn submit(
    kind: CredentialKind,
    username: String,
    password: String,
) -> Result<AuthResponse, FetchError> {
    let payload = CredentialPayload { username, password };
    post_json::<_, AuthResponse>(kind.endpoint(), &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(CredentialKind::Login.endpoint(), "/login");
        assert_eq!(CredentialKind::Register.endpoint(), "/register");
    }

    #[test]
    fn test_login_validation() {
        assert_eq!(validate_login("ada", "pw"), Ok(()));
        assert_eq!(
            validate_login("", "pw"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            validate_login("ada", ""),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn test_signup_mismatch_rejected() {
        assert_eq!(
            validate_signup("ada", "pw1", "pw2"),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn test_signup_mismatch_reported_before_missing_fields() {
        // An empty username must not mask the mismatch message.
        assert_eq!(
            validate_signup("", "pw1", "pw2"),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn test_signup_valid() {
        assert_eq!(validate_signup("ada", "pw", "pw"), Ok(()));
    }
}
