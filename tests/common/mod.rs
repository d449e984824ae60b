#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use jwtgate::pipeline::ApiRequest;
use jwtgate::router::init_router;
use jwtgate::state::AppState;
use jwtgate_auth::JwtCodec;
use jwtgate_config::{CorsConfig, JwtConfig};
use jwtgate_core::{BcryptHasher, PasswordHasher, Role};
use jwtgate_db::{MemoryUserStore, UserStore};
use jwtgate_models::{NewUser, UserRecord};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryUserStore>,
}

/// State over an empty in-memory store, with the cheapest bcrypt cost.
pub fn test_state() -> (AppState, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let state = AppState::new(
        store.clone(),
        Arc::new(BcryptHasher::new(4)),
        JwtCodec::new(&get_test_jwt_config()),
        CorsConfig::default(),
    );
    (state, store)
}

pub fn setup_test_app() -> TestApp {
    let (state, store) = test_state();
    TestApp {
        router: init_router(state.clone()),
        state,
        store,
    }
}

/// Inserts a user directly into the store.
pub async fn seed_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: Option<&str>,
    role: Role,
) -> UserRecord {
    let password_hash = password.map(|p| BcryptHasher::new(4).hash(p).unwrap());
    state
        .store
        .insert_user(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role,
        })
        .await
        .unwrap()
}

pub fn token_for(state: &AppState, user: &UserRecord) -> String {
    state.jwt.issue(user.id, &user.name, user.role).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// Asserts the standard error body and returns its detail.
    pub fn assert_error(&self, status: StatusCode, code: &str) -> String {
        assert_eq!(self.status, status, "body: {:?}", self.body);
        let body = self.json();
        assert_eq!(body["code"], code);
        assert!(body["message"].is_string());
        body["detail"].as_str().unwrap().to_string()
    }
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    send_request(router, builder.body(body).unwrap()).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// Builds an `ApiRequest` the way the adapter would.
pub fn api_request(
    state: &AppState,
    authorization: Option<&str>,
    body: &str,
    params: &[(&str, &str)],
) -> ApiRequest {
    let mut builder = Request::builder().uri("/test");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();

    ApiRequest::new(
        parts,
        Bytes::from(body.to_string()),
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        state.clone(),
    )
}
