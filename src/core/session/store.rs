//! Session store
//!
//! Holds the reactive session record and resolves every operation against
//! the user API. The store is constructed explicitly by the host
//! application and shared through Leptos context; nothing talks to the
//! network until `init` is called.
//!
//! Operations may overlap (a login submitted while the startup session
//! check is still in flight). Each operation takes a ticket when it starts
//! and its result is applied only if no newer operation has applied one
//! already, so the latest-issued operation wins regardless of the order in
//! which responses arrive.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use super::api::SessionApi;
use super::model::{Credentials, LoginReply, SecondFactor, SessionInfo};

/// Message shown when the login request could not be completed.
pub const CONNECTION_ERROR_MESSAGE: &str = "Ошибка соединения";
/// Message shown when the server rejects a login without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Неверное имя пользователя или пароль";
/// Message shown when the server rejects a second-factor code without saying why.
pub const DEFAULT_CODE_REJECTION_MESSAGE: &str = "Неверный код подтверждения";

/// Why a login attempt failed. `Display` is the message for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),

    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    Connection,
}

impl LoginError {
    fn rejected(reply: LoginReply, fallback: &str) -> Self {
        let message = reply
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        LoginError::Rejected(message)
    }
}

#[derive(Debug, Default)]
struct Tickets {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl Tickets {
    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Marks `ticket` as applied. False when a newer ticket got there first.
    fn claim(&self, ticket: u64) -> bool {
        self.applied.fetch_max(ticket, Ordering::SeqCst) < ticket
    }
}

/// Authentication state of the current user.
pub struct SessionStore<A> {
    api: Arc<A>,
    info: ArcRwSignal<SessionInfo>,
    tickets: Arc<Tickets>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            info: self.info.clone(),
            tickets: Arc::clone(&self.tickets),
        }
    }
}

impl<A: SessionApi> SessionStore<A> {
    /// Create a store in the anonymous state.
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            info: ArcRwSignal::new(SessionInfo::anonymous()),
            tickets: Arc::new(Tickets::default()),
        }
    }

    /// Read-only view of the session record. Components usually turn it
    /// into a `ReadSignal` inside their owner.
    pub fn info(&self) -> ArcReadSignal<SessionInfo> {
        self.info.read_only()
    }

    /// Current record without subscribing to changes.
    pub fn snapshot(&self) -> SessionInfo {
        self.info.get_untracked()
    }

    /// Hydrate the record from the server session. Called once by the host
    /// at startup.
    pub async fn init(&self) {
        self.check_login().await;
    }

    /// Re-read the session from the server. Any failure leaves the store
    /// anonymous.
    pub async fn check_login(&self) {
        let ticket = self.tickets.issue();
        self.refresh(ticket).await;
    }

    /// Fetch the session and apply it under `ticket`.
    async fn refresh(&self, ticket: u64) {
        let next = match self.api.user_info().await {
            Ok(info) => {
                leptos::logging::log!(
                    "Session loaded: authenticated={}, user={:?}",
                    info.is_authenticated,
                    info.username()
                );
                info
            }
            Err(e) => {
                leptos::logging::error!("Failed to load session info: {}", e);
                SessionInfo::anonymous()
            }
        };

        self.apply(ticket, next);
    }

    /// Log in with `username` and `password`.
    ///
    /// Credentials are passed through as given; the server decides. On
    /// success the record comes from the reply's `user_info`, or from a
    /// fresh session check when the reply carries none. On failure the
    /// record is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let ticket = self.tickets.issue();
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let reply = match self.api.login(&credentials).await {
            Ok(reply) => reply,
            Err(e) => {
                leptos::logging::error!("Login request failed: {}", e);
                return Err(LoginError::Connection);
            }
        };

        if !reply.success {
            return Err(LoginError::rejected(reply, DEFAULT_REJECTION_MESSAGE));
        }

        match reply.user_info.map(SessionInfo::from_value) {
            Some(Ok(info)) => self.apply(ticket, info),
            Some(Err(e)) => {
                leptos::logging::warn!("Ignoring malformed user_info in login reply: {}", e);
                self.refresh(ticket).await;
            }
            None => self.refresh(ticket).await,
        }

        Ok(())
    }

    /// Confirm the one-time code of the second login factor, then re-read
    /// the session so `second` reflects the server.
    pub async fn confirm_second_factor(&self, code: &str) -> Result<(), LoginError> {
        let ticket = self.tickets.issue();
        let factor = SecondFactor {
            key: code.trim().to_string(),
        };

        let reply = match self.api.second_login(&factor).await {
            Ok(reply) => reply,
            Err(e) => {
                leptos::logging::error!("Second-factor request failed: {}", e);
                return Err(LoginError::Connection);
            }
        };

        if !reply.success {
            return Err(LoginError::rejected(reply, DEFAULT_CODE_REJECTION_MESSAGE));
        }

        self.refresh(ticket).await;
        Ok(())
    }

    /// End the session. The record is reset whatever the server answers.
    pub async fn logout(&self) {
        let ticket = self.tickets.issue();

        if let Err(e) = self.api.logout().await {
            leptos::logging::error!("Logout request failed: {}", e);
        }

        self.apply(ticket, SessionInfo::signed_out());
    }

    /// Drop local state and ignore every response still in flight.
    pub fn teardown(&self) {
        let ticket = self.tickets.issue();
        self.apply(ticket, SessionInfo::anonymous());
    }

    fn apply(&self, ticket: u64, next: SessionInfo) {
        if self.tickets.claim(ticket) {
            self.info.set(next);
        } else {
            leptos::logging::warn!("Discarding stale session response (ticket {})", ticket);
        }
    }
}
