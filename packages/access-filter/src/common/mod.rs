pub mod pii;

pub use pii::email_fingerprint;
