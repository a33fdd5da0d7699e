//! Core of the tournaments front end: routing table and session state

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod routes;
pub mod session;
#[cfg(all(test, feature = "ssr"))]
mod testing;

pub use routes::Page;
pub use session::{ClientSession, HttpSessionApi, LoginError, SessionInfo, SessionStore};
