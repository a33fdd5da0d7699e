//! Session management
//!
//! - `model`: the session record and login payloads
//! - `api`: the user API seam and its HTTP client
//! - `store`: the reactive store driving login, logout and session checks

pub mod api;
pub mod model;
pub mod store;

pub use api::{ApiError, HttpSessionApi, SessionApi};
pub use model::{Credentials, LoginReply, SecondFactor, SessionInfo};
pub use store::{CONNECTION_ERROR_MESSAGE, LoginError, SessionStore};

/// Store used by the application, backed by the HTTP user API.
pub type ClientSession = SessionStore<HttpSessionApi>;
