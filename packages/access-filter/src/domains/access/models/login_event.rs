use serde::Deserialize;

use crate::domains::access::errors::HookError;

/// Login event passed in by the host after primary authentication
///
/// Only `user.email` is read. Every level is optional: a missing `user`, a
/// missing `email` and `"email": null` all mean "no email".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginEvent {
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// The authenticated user as the host describes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginEvent {
    /// Event for a user with the given email
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            user: Some(LoginUser {
                email: Some(email.into()),
            }),
        }
    }

    /// Decode the host's event record. Unknown fields are ignored.
    pub fn from_json(payload: &str) -> Result<Self, HookError> {
        serde_json::from_str(payload).map_err(HookError::InvalidEvent)
    }

    /// The raw email, exactly as the host sent it
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_from_full_event() {
        let event = LoginEvent::from_json(
            r#"{
                "user": {
                    "user_id": "google-oauth2|123",
                    "email": "UserA@Example.com",
                    "email_verified": true
                },
                "connection": { "strategy": "google-oauth2" }
            }"#,
        )
        .unwrap();

        // Not normalized here; that happens during evaluation
        assert_eq!(event.email(), Some("UserA@Example.com"));
    }

    #[test]
    fn test_missing_user() {
        let event = LoginEvent::from_json(r#"{"transaction": {}}"#).unwrap();
        assert_eq!(event.user, None);
        assert_eq!(event.email(), None);
    }

    #[test]
    fn test_missing_and_null_email() {
        let missing = LoginEvent::from_json(r#"{"user": {}}"#).unwrap();
        assert_eq!(missing.email(), None);

        let null = LoginEvent::from_json(r#"{"user": {"email": null}}"#).unwrap();
        assert_eq!(null.email(), None);

        let null_user = LoginEvent::from_json(r#"{"user": null}"#).unwrap();
        assert_eq!(null_user.email(), None);
    }

    #[test]
    fn test_whitespace_preserved() {
        let event = LoginEvent::from_json(r#"{"user": {"email": " a@example.com "}}"#).unwrap();
        assert_eq!(event.email(), Some(" a@example.com "));
    }

    #[test]
    fn test_malformed_payload_is_error() {
        assert!(matches!(
            LoginEvent::from_json("not json"),
            Err(HookError::InvalidEvent(_))
        ));
        assert!(matches!(
            LoginEvent::from_json(r#"{"user": {"email": 42}}"#),
            Err(HookError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_with_email() {
        let event = LoginEvent::with_email("a@example.com");
        assert_eq!(event.email(), Some("a@example.com"));
        assert_eq!(LoginEvent::default().email(), None);
    }
}
