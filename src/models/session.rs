//! Session state for the auth-view / main-view split.

/// Authentication session state.
///
/// Drives the top-level view: `SignedOut` and `Submitting` render the auth
/// panel, `SignedIn` renders the main application. There is no token or
/// server-side session behind this; it lives for the page only.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    SignedOut,
    /// A login or registration request is in flight.
    Submitting,
    SignedIn {
        username: String,
    },
}

impl SessionState {
    /// Check if the user is signed in.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn { .. })
    }

    /// Check if a credential request is currently awaited.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SessionState::Submitting)
    }

    /// Username for display in the header; empty when not signed in.
    pub fn display_name(&self) -> &str {
        match self {
            SessionState::SignedIn { username } => username,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_state() {
        let state = SessionState::SignedOut;
        assert!(!state.is_signed_in());
        assert!(!state.is_submitting());
        assert_eq!(state.display_name(), "");
    }

    #[test]
    fn test_submitting_state() {
        let state = SessionState::Submitting;
        assert!(!state.is_signed_in());
        assert!(state.is_submitting());
        assert_eq!(state.display_name(), "");
    }

    #[test]
    fn test_signed_in_state() {
        let state = SessionState::SignedIn {
            username: "ada".to_string(),
        };
        assert!(state.is_signed_in());
        assert!(!state.is_submitting());
        assert_eq!(state.display_name(), "ada");
    }
}
