//! Post-login hook action

use tracing::debug;

use crate::common::email_fingerprint;
use crate::config::AccessConfig;
use crate::domains::access::actions::evaluate::{evaluate, AccessFilter};
use crate::domains::access::api::{AccessApi, PostLoginApi};
use crate::domains::access::decision::Decision;
use crate::domains::access::models::{normalize_email, LoginEvent};

/// Hook entry point called by the host after primary authentication.
///
/// Calls exactly one of `api.access.allow()` or `api.access.deny(reason)`.
/// The decision is also returned so the host can record it.
pub fn on_execute_post_login<A: AccessApi>(
    config: &AccessConfig,
    event: &LoginEvent,
    api: &mut PostLoginApi<A>,
) -> Decision {
    let decision = evaluate(
        event.email(),
        &config.allowed_domains,
        &config.allowed_emails,
    );

    debug!(
        email_fingerprint = %email_fingerprint(&normalize_email(event.email())),
        allowed = decision.is_allowed(),
        reason = decision.reason().unwrap_or(""),
        "Post-login access decision"
    );

    decision.apply(&mut api.access);
    decision
}

impl AccessFilter {
    pub fn on_execute_post_login<A: AccessApi>(
        &self,
        event: &LoginEvent,
        api: &mut PostLoginApi<A>,
    ) -> Decision {
        on_execute_post_login(self.config(), event, api)
    }
}
