//! Evaluate action

use crate::config::AccessConfig;
use crate::domains::access::decision::Decision;
use crate::domains::access::models::{
    email_domain, is_allowed_domain, is_allowed_email, normalize_email,
};

/// Decide whether a login with this email may continue.
///
/// Checks run in a fixed order because the order picks the denial reason:
/// 1. empty email → "Email address required"
/// 2. address in `allowed_emails` → allow
/// 3. domain (after the first `@`) in `allowed_domains` → allow
/// 4. otherwise → "Access denied. Your email is not authorized to access this site."
pub fn evaluate<D, E>(email: Option<&str>, allowed_domains: &[D], allowed_emails: &[E]) -> Decision
where
    D: AsRef<str>,
    E: AsRef<str>,
{
    let email = normalize_email(email);

    if email.is_empty() {
        return Decision::email_required();
    }

    if is_allowed_email(&email, allowed_emails) {
        return Decision::Allow;
    }

    match email_domain(&email) {
        Some(domain) if is_allowed_domain(domain, allowed_domains) => Decision::Allow,
        _ => Decision::not_authorized(),
    }
}

/// Allowlist filter bound to one configuration
///
/// Holds no mutable state; one filter can serve concurrent logins by reference.
#[derive(Debug, Clone)]
pub struct AccessFilter {
    config: AccessConfig,
}

impl AccessFilter {
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn evaluate(&self, email: Option<&str>) -> Decision {
        evaluate(
            email,
            &self.config.allowed_domains,
            &self.config.allowed_emails,
        )
    }
}

impl From<AccessConfig> for AccessFilter {
    fn from(config: AccessConfig) -> Self {
        Self::new(config)
    }
}
