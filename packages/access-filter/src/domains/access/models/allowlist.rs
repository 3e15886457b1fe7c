//! Allowlist matching
//!
//! All membership tests are exact string comparisons. Only the incoming email
//! is lowercased; configured entries are compared as stored, so an entry with
//! uppercase letters can never match (see `AccessConfig::lint`).

/// Lowercase the login email. Absent becomes empty; whitespace is kept.
pub fn normalize_email(email: Option<&str>) -> String {
    email.unwrap_or_default().to_lowercase()
}

/// Everything after the first `@`, or `None` when there is no `@` or nothing follows it
///
/// Further `@` characters stay in the returned domain.
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .split_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}

/// Check if the email is one of the individually allowed addresses
pub fn is_allowed_email<S: AsRef<str>>(email: &str, allowed_emails: &[S]) -> bool {
    allowed_emails.iter().any(|allowed| allowed.as_ref() == email)
}

/// Check if the domain is one of the allowed domains (no suffix or wildcard matching)
pub fn is_allowed_domain<S: AsRef<str>>(domain: &str, allowed_domains: &[S]) -> bool {
    allowed_domains
        .iter()
        .any(|allowed| allowed.as_ref() == domain)
}
