// Access Filter - post-login allowlist hook
//
// The identity platform authenticates the user, then hands this crate the
// login event and a decision capability. The hook admits the login when the
// user's email (or its domain) is allowlisted, and denies it otherwise.
//
// Decisions live in domains/access; configuration in config.rs.

pub mod common;
pub mod config;
pub mod domains;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{AccessConfig, ConfigList, ConfigWarning, WarningKind};
pub use domains::access::{
    evaluate, on_execute_post_login, AccessApi, AccessFilter, Decision, HookError, LoginEvent,
    LoginUser, PostLoginApi, DENY_EMAIL_REQUIRED, DENY_NOT_AUTHORIZED,
};
