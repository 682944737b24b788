//! Authentication panel mode and wire types.

use serde::{Deserialize, Serialize};

/// Which of the two auth forms is visible.
///
/// Purely presentational; independent of [`super::Section`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// JSON request body for `/login` and `/register`.
#[derive(Clone, Debug, Serialize)]
pub struct CredentialPayload {
    pub username: String,
    pub password: String,
}

/// JSON response shape shared by both auth endpoints.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_message() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success": false, "message": "bad credentials"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn test_response_message_optional() {
        let resp: AuthResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_payload_serialization() {
        let payload = CredentialPayload {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"username":"ada","password":"hunter2"}"#);
    }
}
