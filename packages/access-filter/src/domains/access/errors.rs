use thiserror::Error;

/// Errors at the boundary with the host platform
///
/// A denied login is not an error; it goes through `AccessApi::deny`.
/// These only cover payloads the hook cannot read at all.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Invalid login event: {0}")]
    InvalidEvent(serde_json::Error),

    #[error("Invalid access configuration: {0}")]
    InvalidConfig(serde_json::Error),
}
