//! Authentication UI module
//!
//! Session context plus the login form and user menu shown in the header.

mod context;
mod login_form;
mod user_menu;

pub use context::{provide_session_context, use_session_context};
pub use login_form::LoginForm;
pub use user_menu::UserMenu;
