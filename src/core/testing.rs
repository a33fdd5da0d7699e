//! In-process stand-in for the backend user API, used by HTTP tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

#[derive(Default)]
struct Sessions {
    next_id: u64,
    // session id -> (username, second factor confirmed)
    active: HashMap<String, (String, bool)>,
}

type SharedSessions = Arc<Mutex<Sessions>>;

/// Cookie-session user API on an ephemeral local port.
///
/// Knows one account, `alice` / `secret`. Routes under `/broken` answer
/// 500 and routes under `/garbled` answer 200 with a non-JSON body.
pub struct MockBackend {
    addr: std::net::SocketAddr,
}

impl MockBackend {
    pub const TOTP_CODE: &'static str = "123456";

    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

fn router() -> Router {
    let sessions = SharedSessions::default();

    Router::new()
        .route("/api/user/info/", get(info))
        .route("/api/user/login/", post(login))
        .route("/api/user/logout/", post(logout))
        .route("/api/user/second-login/", post(second_login))
        .route("/api/echo/{*path}", post(echo))
        .route("/broken/{*path}", get(broken).post(broken))
        .route("/garbled/{*path}", get(garbled).post(garbled))
        .with_state(sessions)
}

fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| pair.trim().strip_prefix("sessionid=").map(str::to_string))
}

async fn info(State(sessions): State<SharedSessions>, headers: HeaderMap) -> Json<Value> {
    let sessions = sessions.lock().unwrap();
    let user = session_id(&headers).and_then(|id| sessions.active.get(&id).cloned());

    match user {
        Some((username, second)) => Json(json!({
            "username": username,
            "is_authenticated": true,
            "is_staff": false,
            "second": second,
        })),
        None => Json(json!({
            "username": "",
            "is_authenticated": false,
            "is_staff": false,
        })),
    }
}

async fn login(State(sessions): State<SharedSessions>, Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if username != "alice" || password != "secret" {
        return Json(json!({ "success": false })).into_response();
    }

    let mut sessions = sessions.lock().unwrap();
    sessions.next_id += 1;
    let id = format!("sid-{}", sessions.next_id);
    sessions.active.insert(id.clone(), (username.to_string(), false));

    (
        [(header::SET_COOKIE, format!("sessionid={}; Path=/", id))],
        Json(json!({ "success": true })),
    )
        .into_response()
}

async fn logout(State(sessions): State<SharedSessions>, headers: HeaderMap) -> Response {
    if let Some(id) = session_id(&headers) {
        sessions.lock().unwrap().active.remove(&id);
    }

    (
        [(header::SET_COOKIE, "sessionid=; Path=/; Max-Age=0".to_string())],
        Json(json!({ "success": true })),
    )
        .into_response()
}

async fn second_login(
    State(sessions): State<SharedSessions>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut sessions = sessions.lock().unwrap();
    let entry = match session_id(&headers) {
        Some(id) => sessions.active.get_mut(&id),
        None => None,
    };

    match entry {
        Some(entry) if body["key"].as_str() == Some(MockBackend::TOTP_CODE) => {
            entry.1 = true;
            Json(json!({ "success": true }))
        }
        _ => Json(json!({ "success": false })),
    }
}

async fn echo(headers: HeaderMap, uri: axum::http::Uri, body: String) -> Json<Value> {
    Json(json!({
        "path": uri.path(),
        "query": uri.query(),
        "content_type": headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbled() -> &'static str {
    "<html>not json</html>"
}
