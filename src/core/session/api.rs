//! HTTP access to the backend user API.
//!
//! Browser (hydrate): real requests via `gloo-net`, credentials included so
//! the session cookie travels with every call.
//! Native (ssr): `reqwest` with a cookie store, used by server-side tooling
//! and tests.
//! Builds with neither feature get `ApiError::Unavailable`.

use super::model::{Credentials, LoginReply, SecondFactor, SessionInfo};

pub const USER_INFO_PATH: &str = "/api/user/info/";
pub const LOGIN_PATH: &str = "/api/user/login/";
pub const LOGOUT_PATH: &str = "/api/user/logout/";
pub const SECOND_LOGIN_PATH: &str = "/api/user/second-login/";

/// Failures talking to the user API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Session API is not available in this build")]
    Unavailable,
}

/// The user endpoints the session store depends on.
///
/// Implementations report what the server said; deciding what the session
/// becomes is up to the store.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// `GET /api/user/info/`
    async fn user_info(&self) -> Result<SessionInfo, ApiError>;

    /// `POST /api/user/login/`
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError>;

    /// `POST /api/user/logout/`
    async fn logout(&self) -> Result<(), ApiError>;

    /// `POST /api/user/second-login/`
    async fn second_login(&self, factor: &SecondFactor) -> Result<LoginReply, ApiError>;
}

/// `SessionApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSessionApi {
    base_url: String,
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    client: reqwest::Client,
}

impl HttpSessionApi {
    /// Client for an API served under `base_url`, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Client for an API on the page's own origin.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
impl SessionApi for HttpSessionApi {
    async fn user_info(&self) -> Result<SessionInfo, ApiError> {
        let resp = browser::get(&self.url(USER_INFO_PATH)).await?;
        browser::read_json(resp).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let resp = browser::post_json(&self.url(LOGIN_PATH), credentials).await?;
        browser::read_json(resp).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        browser::post_empty(&self.url(LOGOUT_PATH)).await?;
        Ok(())
    }

    async fn second_login(&self, factor: &SecondFactor) -> Result<LoginReply, ApiError> {
        let resp = browser::post_json(&self.url(SECOND_LOGIN_PATH), factor).await?;
        browser::read_json(resp).await
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::ApiError;

    pub async fn get(url: &str) -> Result<Response, ApiError> {
        Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
            .and_then(check_status)
    }

    pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ApiError> {
        Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
            .and_then(check_status)
    }

    pub async fn post_empty(url: &str) -> Result<Response, ApiError> {
        Request::post(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
            .and_then(check_status)
    }

    pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn check_status(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            Ok(resp)
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
impl SessionApi for HttpSessionApi {
    async fn user_info(&self) -> Result<SessionInfo, ApiError> {
        let resp = self.client.get(self.url(USER_INFO_PATH)).send().await;
        native::read_json(resp).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let resp = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await;
        native::read_json(resp).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let resp = self.client.post(self.url(LOGOUT_PATH)).send().await;
        native::check_status(resp)?;
        Ok(())
    }

    async fn second_login(&self, factor: &SecondFactor) -> Result<LoginReply, ApiError> {
        let resp = self
            .client
            .post(self.url(SECOND_LOGIN_PATH))
            .json(factor)
            .send()
            .await;
        native::read_json(resp).await
    }
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
mod native {
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub fn check_status(
        resp: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = resp.map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status(resp.status().as_u16()))
        }
    }

    pub async fn read_json<T: DeserializeOwned>(
        resp: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ApiError> {
        check_status(resp)?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
impl SessionApi for HttpSessionApi {
    async fn user_info(&self) -> Result<SessionInfo, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginReply, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn second_login(&self, _factor: &SecondFactor) -> Result<LoginReply, ApiError> {
        Err(ApiError::Unavailable)
    }
}
