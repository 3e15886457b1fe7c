//! Keeps raw email addresses out of log output.

use sha2::{Digest, Sha256};

/// Hash an email address using SHA256
///
/// Logs carry this fingerprint instead of the address. The caller passes the
/// already-normalized email so the same user always maps to one fingerprint.
pub fn email_fingerprint(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_consistency() {
        let hash1 = email_fingerprint("user@example.com");
        let hash2 = email_fingerprint("user@example.com");
        assert_eq!(hash1, hash2, "Same email should produce same fingerprint");
    }

    #[test]
    fn test_fingerprint_uniqueness() {
        let hash1 = email_fingerprint("user@example.com");
        let hash2 = email_fingerprint("other@example.com");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_fingerprint_format() {
        let hash = email_fingerprint("user@example.com");
        assert_eq!(hash.len(), 64, "SHA256 hash should be 64 hex characters");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!hash.contains("example"));
    }

    #[test]
    fn test_fingerprint_of_empty_email() {
        // Known SHA256 of the empty string
        assert_eq!(
            email_fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
