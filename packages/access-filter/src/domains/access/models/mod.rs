pub mod allowlist;
pub mod login_event;

pub use allowlist::{email_domain, is_allowed_domain, is_allowed_email, normalize_email};
pub use login_event::{LoginEvent, LoginUser};
