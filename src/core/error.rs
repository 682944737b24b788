//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`AuthError`] - Client-side credential validation failures
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use std::fmt;

/// Client-side credential validation errors.
///
/// These surface synchronously in the auth panel before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signup password and confirmation differ.
    PasswordMismatch,
    /// Username or password left empty.
    MissingCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PasswordMismatch => write!(f, "Passwords do not match!"),
            Self::MissingCredentials => write!(f, "Username and password required"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::PasswordMismatch.to_string(),
            "Passwords do not match!"
        );
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Username and password required"
        );
    }
}
