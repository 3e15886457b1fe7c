//! Access domain - decides whether an authenticated login may continue
//!
//! Architecture:
//!   host login pipeline → on_execute_post_login(event, api) → evaluate() → api.access.allow()/deny()
//!
//! Responsibilities:
//! - Email normalization and allowlist membership (models/allowlist.rs)
//! - The pure allow/deny decision (actions/evaluate.rs)
//! - Applying that decision to the host's capability exactly once (actions/post_login.rs)

pub mod actions;
pub mod api;
pub mod decision;
pub mod errors;
pub mod models;

pub use actions::{evaluate, on_execute_post_login, AccessFilter};
pub use api::{AccessApi, PostLoginApi};
pub use decision::{Decision, DENY_EMAIL_REQUIRED, DENY_NOT_AUTHORIZED};
pub use errors::HookError;
pub use models::{LoginEvent, LoginUser};
