//! Test support for hosts and for this crate's own tests.
//!
//! Enabled with the `testing` feature.

use crate::domains::access::api::AccessApi;

/// One call made on the decision capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessCall {
    Allow,
    Deny(String),
}

/// Decision sink that records every call instead of acting on it
#[derive(Debug, Clone, Default)]
pub struct RecordingAccess {
    calls: Vec<AccessCall>,
}

impl RecordingAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[AccessCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<AccessCall> {
        self.calls
    }

    pub fn last(&self) -> Option<&AccessCall> {
        self.calls.last()
    }

    pub fn allow_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AccessCall::Allow))
            .count()
    }

    pub fn deny_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AccessCall::Deny(_)))
            .count()
    }
}

impl AccessApi for RecordingAccess {
    fn allow(&mut self) {
        self.calls.push(AccessCall::Allow);
    }

    fn deny(&mut self, reason: &str) {
        self.calls.push(AccessCall::Deny(reason.to_string()));
    }
}
