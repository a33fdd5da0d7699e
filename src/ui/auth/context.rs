//! Session context
//!
//! The host builds one `ClientSession` and hands it to `App`, which puts it
//! in context for every component below.

use leptos::prelude::*;

use crate::core::ClientSession;

/// Provide the session store to the component tree
pub fn provide_session_context(session: ClientSession) -> ClientSession {
    provide_context(session.clone());
    session
}

/// Get the session store from the component tree
pub fn use_session_context() -> ClientSession {
    expect_context::<ClientSession>()
}
