//! Access domain actions
//!
//! `evaluate` is the pure decision; `on_execute_post_login` is what the host calls.

mod evaluate;
mod post_login;

pub use evaluate::{evaluate, AccessFilter};
pub use post_login::on_execute_post_login;
