// Common test utilities

use access_filter::{AccessApi, AccessConfig};

/// Initialize tracing once per test binary.
/// Run tests with: RUST_LOG=access_filter=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Sample allowlists: two company domains and two outside addresses
pub fn sample_config() -> AccessConfig {
    AccessConfig::new(
        vec!["yourcompany.com".to_string(), "example.com".to_string()],
        vec![
            "specialuser@gmail.com".to_string(),
            "contractor@external.com".to_string(),
        ],
    )
}

/// What the host did with the login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOutcome {
    Continued,
    Rejected { message: String },
}

/// Stand-in for the identity platform's access capability
#[derive(Debug, Default)]
pub struct HostAccess {
    pub outcome: Option<HostOutcome>,
    pub invocations: usize,
}

impl AccessApi for HostAccess {
    fn allow(&mut self) {
        self.invocations += 1;
        self.outcome = Some(HostOutcome::Continued);
    }

    fn deny(&mut self, reason: &str) {
        self.invocations += 1;
        self.outcome = Some(HostOutcome::Rejected {
            message: reason.to_string(),
        });
    }
}
