pub mod auth;
pub mod header;
pub mod pages;

pub use auth::{LoginForm, UserMenu, provide_session_context, use_session_context};
pub use header::Header;
