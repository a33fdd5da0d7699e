//! Session record and the payloads exchanged with the user API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current user's authentication status as reported by the backend.
///
/// Only `is_authenticated` is required. Known optional fields are typed;
/// anything else the backend sends is kept in `extra` so a successful
/// session check stores exactly what the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    /// Whether the second login factor has been confirmed in this session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionInfo {
    /// `{"is_authenticated": false}`
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            username: None,
            is_staff: None,
            second: None,
            extra: Map::new(),
        }
    }

    /// `{"is_authenticated": false, "username": "", "is_staff": false}`
    pub fn signed_out() -> Self {
        Self {
            username: Some(String::new()),
            is_staff: Some(false),
            ..Self::anonymous()
        }
    }

    /// Authenticated record for `username`.
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            username: Some(username.into()),
            ..Self::anonymous()
        }
    }

    /// Parse a raw JSON payload. Fails when `is_authenticated` is missing
    /// or a known field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn is_anonymous(&self) -> bool {
        !self.is_authenticated
    }

    /// Username of an authenticated user. Stale names on anonymous
    /// records are ignored.
    pub fn username(&self) -> Option<&str> {
        if !self.is_authenticated {
            return None;
        }
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_staff(&self) -> bool {
        self.is_authenticated && self.is_staff.unwrap_or(false)
    }

    pub fn second_factor_passed(&self) -> bool {
        self.is_authenticated && self.second.unwrap_or(false)
    }

    /// Authenticated non-staff users whose session reports an unconfirmed
    /// second factor.
    pub fn needs_second_factor(&self) -> bool {
        self.is_authenticated && !self.is_staff() && self.second == Some(false)
    }
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Body of `POST /api/user/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/user/second-login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondFactor {
    pub key: String,
}

/// Reply of the login endpoints.
///
/// `user_info` is kept raw so a malformed record does not hide an
/// otherwise successful login.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginReply {
    pub fn accepted() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn accepted_with(user_info: Value) -> Self {
        Self {
            success: true,
            user_info: Some(user_info),
            error: None,
        }
    }

    pub fn rejected(error: Option<&str>) -> Self {
        Self {
            success: false,
            user_info: None,
            error: error.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anonymous_shape() {
        let value = serde_json::to_value(SessionInfo::anonymous()).unwrap();
        assert_eq!(value, json!({ "is_authenticated": false }));
    }

    #[test]
    fn test_signed_out_shape() {
        let value = serde_json::to_value(SessionInfo::signed_out()).unwrap();
        assert_eq!(
            value,
            json!({ "is_authenticated": false, "username": "", "is_staff": false })
        );
    }

    #[test]
    fn test_backend_payload_is_preserved() {
        let payload = json!({
            "username": "alice",
            "is_authenticated": true,
            "is_staff": false,
            "second": true,
            "team": "Red Foxes",
        });

        let info = SessionInfo::from_value(payload.clone()).unwrap();
        assert_eq!(info.username(), Some("alice"));
        assert!(info.second_factor_passed());
        assert_eq!(info.extra.get("team"), Some(&json!("Red Foxes")));
        assert_eq!(serde_json::to_value(&info).unwrap(), payload);
    }

    #[test]
    fn test_missing_flag_fails_closed() {
        assert!(SessionInfo::from_value(json!({ "username": "alice" })).is_err());
        assert!(SessionInfo::from_value(json!({ "is_authenticated": "yes" })).is_err());
        assert!(SessionInfo::from_value(json!([1, 2, 3])).is_err());
        assert!(
            SessionInfo::from_value(json!({ "is_authenticated": true, "is_staff": "no" }))
                .is_err()
        );
    }

    #[test]
    fn test_anonymous_record_ignores_stale_fields() {
        let info = SessionInfo {
            is_authenticated: false,
            username: Some("mallory".to_string()),
            is_staff: Some(true),
            second: Some(true),
            extra: Map::new(),
        };

        assert!(info.is_anonymous());
        assert_eq!(info.username(), None);
        assert!(!info.is_staff());
        assert!(!info.second_factor_passed());
        assert!(!info.needs_second_factor());
    }

    #[test]
    fn test_needs_second_factor() {
        let mut info = SessionInfo::authenticated("bob");
        assert!(!info.needs_second_factor());

        info.second = Some(false);
        assert!(info.needs_second_factor());

        info.is_staff = Some(true);
        assert!(!info.needs_second_factor());
    }

    #[test]
    fn test_login_reply_defaults() {
        let reply: LoginReply = serde_json::from_value(json!({})).unwrap();
        assert!(!reply.success);
        assert!(reply.user_info.is_none());
        assert!(reply.error.is_none());

        let reply: LoginReply =
            serde_json::from_value(json!({ "success": false, "error": "bad credentials" }))
                .unwrap();
        assert_eq!(reply, LoginReply::rejected(Some("bad credentials")));
    }
}
