use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fmt;
use tracing::{info, warn};

use crate::domains::access::errors::HookError;

pub const ALLOWED_DOMAINS_VAR: &str = "ALLOWED_DOMAINS";
pub const ALLOWED_EMAILS_VAR: &str = "ALLOWED_EMAILS";

/// Allowlists consulted on every login
///
/// Entries are expected in lowercase and are compared exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    /// Users from these domains can log in (e.g. `yourcompany.com`)
    #[serde(default, alias = "allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Specific addresses that can log in from any domain
    #[serde(default, alias = "allowed_emails")]
    pub allowed_emails: Vec<String>,
}

impl AccessConfig {
    pub fn new(allowed_domains: Vec<String>, allowed_emails: Vec<String>) -> Self {
        Self {
            allowed_domains,
            allowed_emails,
        }
    }

    /// Load configuration from environment variables
    ///
    /// `ALLOWED_DOMAINS` and `ALLOWED_EMAILS` are comma-separated lists. At
    /// least one must hold an entry; with neither, every login would be denied.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
            .context("Failed to load access configuration from environment")
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            allowed_domains: parse_list(lookup(ALLOWED_DOMAINS_VAR).as_deref()),
            allowed_emails: parse_list(lookup(ALLOWED_EMAILS_VAR).as_deref()),
        };

        // Unset and blank both leave the lists empty
        if config.allowed_domains.is_empty() && config.allowed_emails.is_empty() {
            bail!(
                "{} or {} must be set to at least one entry",
                ALLOWED_DOMAINS_VAR,
                ALLOWED_EMAILS_VAR
            );
        }

        config.report();
        Ok(config)
    }

    /// Decode `{"allowedDomains": [...], "allowedEmails": [...]}`
    ///
    /// Snake-case keys are accepted too; a missing list is empty.
    pub fn from_json(payload: &str) -> Result<Self, HookError> {
        let config: Self = serde_json::from_str(payload).map_err(HookError::InvalidConfig)?;
        config.report();
        Ok(config)
    }

    /// Entries that can never match a normalized login email
    ///
    /// Evaluation does not act on these; they exist so operators notice.
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        lint_list(ConfigList::Domains, &self.allowed_domains, &mut warnings);
        lint_list(ConfigList::Emails, &self.allowed_emails, &mut warnings);
        warnings
    }

    fn report(&self) {
        info!(
            allowed_domains = self.allowed_domains.len(),
            allowed_emails = self.allowed_emails.len(),
            "Access configuration loaded"
        );
        for warning in self.lint() {
            warn!("Access configuration: {}", warning);
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn lint_list(list: ConfigList, entries: &[String], warnings: &mut Vec<ConfigWarning>) {
    let mut seen = HashSet::new();

    for entry in entries {
        let warn_with = |kind: WarningKind| ConfigWarning {
            list,
            entry: entry.clone(),
            kind,
        };

        if entry.trim() != entry.as_str() {
            warnings.push(warn_with(WarningKind::SurroundingWhitespace));
        }
        if entry.to_lowercase() != *entry {
            warnings.push(warn_with(WarningKind::UppercaseEntry));
        }
        match list {
            ConfigList::Domains if entry.contains('@') => {
                warnings.push(warn_with(WarningKind::DomainWithAt));
            }
            ConfigList::Emails if !entry.contains('@') => {
                warnings.push(warn_with(WarningKind::EmailWithoutAt));
            }
            _ => {}
        }
        if !seen.insert(entry.as_str()) {
            warnings.push(warn_with(WarningKind::DuplicateEntry));
        }
    }
}

/// Which allowlist an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigList {
    Domains,
    Emails,
}

impl fmt::Display for ConfigList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigList::Domains => write!(f, "allowed_domains"),
            ConfigList::Emails => write!(f, "allowed_emails"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Input is lowercased before comparison, so this entry never matches
    UppercaseEntry,
    /// Input is not trimmed, so a padded entry only matches padded input
    SurroundingWhitespace,
    DuplicateEntry,
    /// Domains are compared against the text after the first `@`
    DomainWithAt,
    EmailWithoutAt,
}

/// A configuration entry that is probably a mistake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub list: ConfigList,
    pub entry: String,
    pub kind: WarningKind,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = match self.kind {
            WarningKind::UppercaseEntry => "contains uppercase characters and will never match",
            WarningKind::SurroundingWhitespace => "has leading or trailing whitespace",
            WarningKind::DuplicateEntry => "is listed more than once",
            WarningKind::DomainWithAt => "looks like an email address, not a domain",
            WarningKind::EmailWithoutAt => "is not an email address",
        };
        write!(f, "{} entry {:?} {}", self.list, self.entry, problem)
    }
}
