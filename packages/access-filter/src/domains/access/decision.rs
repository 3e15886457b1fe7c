use std::fmt;

use super::api::AccessApi;

/// Denial reason when the login carries no email
pub const DENY_EMAIL_REQUIRED: &str = "Email address required";

/// Denial reason when the email matches neither allowlist
pub const DENY_NOT_AUTHORIZED: &str =
    "Access denied. Your email is not authorized to access this site.";

/// Outcome of evaluating one login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Login continues
    Allow,

    /// Login is rejected with a message shown to the user
    Deny(String),
}

impl Decision {
    pub(crate) fn email_required() -> Self {
        Decision::Deny(DENY_EMAIL_REQUIRED.to_string())
    }

    pub(crate) fn not_authorized() -> Self {
        Decision::Deny(DENY_NOT_AUTHORIZED.to_string())
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Denial reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(reason),
        }
    }

    /// Invoke exactly one operation on the sink
    pub fn apply<A: AccessApi + ?Sized>(&self, access: &mut A) {
        match self {
            Decision::Allow => access.allow(),
            Decision::Deny(reason) => access.deny(reason),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Deny(reason) => write!(f, "deny: {}", reason),
        }
    }
}
