#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use configs::{AppConfig, AuthConfig, DatabaseConfig, Environment, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Test,
        server: ServerConfig::default(),
        database: DatabaseConfig::sqlite_memory(),
        auth: AuthConfig::development(),
    }
}

/// Fresh router over its own in-memory database.
pub async fn app() -> Router {
    server::build_app(&test_config()).await.expect("app builds")
}

pub struct Reply {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Reply {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&b).unwrap()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    into_reply(app.clone().oneshot(req).await.unwrap()).await
}

pub async fn into_reply(resp: axum::response::Response) -> Reply {
    let status = resp.status();
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Reply { status, set_cookie, body }
}

/// Register `username` and return `(token, user id)`.
pub async fn register(app: &Router, username: &str) -> (String, String) {
    let reply = send(
        app,
        "POST",
        "/api/users/create",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
            "firstName": "Test",
            "lastName": "User"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.body);
    (
        reply.body["token"].as_str().unwrap().to_string(),
        reply.body["user"]["id"].as_str().unwrap().to_string(),
    )
}
