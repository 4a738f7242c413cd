//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use pethub_api::AppState;
use pethub_auth::{Claims, JwtEncoder};
use pethub_core::UserId;
use pethub_core::config::AppConfig;
use pethub_database::memory::{MemoryActionLogStore, MemoryMonitoredUserStore};
use pethub_database::{ActionLogStore, StoreManager};
use pethub_entity::action_log::NewActionLogEntry;
use pethub_entity::user::UserRole;
use pethub_worker::{ActionRecorder, ActivityMonitor};

const JWT_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Action log behind the router
    pub log: Arc<MemoryActionLogStore>,
    /// Monitored set behind the router
    pub monitored: Arc<MemoryMonitoredUserStore>,
    /// Monitor wired to the same stores
    pub monitor: Arc<ActivityMonitor>,
    /// Recorder taken from the router's state
    pub recorder: ActionRecorder,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = JWT_SECRET.to_string();

        let log = Arc::new(MemoryActionLogStore::new());
        let monitored = Arc::new(MemoryMonitoredUserStore::new());
        let stores = StoreManager::from_stores(log.clone(), monitored.clone());
        let monitor = ActivityMonitor::from_config(&config.monitor, &stores);
        let encoder = JwtEncoder::new(&config.auth);
        let state = AppState::new(config, stores);
        let recorder = state.recorder.clone();
        let router = pethub_api::build_app(state);

        Self {
            router,
            log,
            monitored,
            monitor,
            recorder,
            encoder,
        }
    }

    /// Issue a valid access token
    pub fn token(&self, user_id: i64, role: UserRole) -> String {
        self.encoder
            .generate_access_token(UserId(user_id), role)
            .expect("Failed to issue token")
            .0
    }

    /// Issue a token that expired an hour ago
    pub fn expired_token(&self, user_id: i64, role: UserRole) -> String {
        let now = Utc::now().timestamp();
        self.encoder
            .encode_claims(&Claims {
                sub: UserId(user_id),
                role,
                iat: now - 7200,
                exp: now - 3600,
            })
            .expect("Failed to encode claims")
    }

    /// Sign a token in the legacy login service's shape: `{ userId, role }`
    /// with an hour of validity
    pub fn legacy_token(&self, user_id: i64, role: &str) -> String {
        let now = Utc::now().timestamp();
        let payload = serde_json::json!({
            "userId": user_id,
            "role": role,
            "iat": now,
            "exp": now + 3600,
        });
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &payload,
            &jsonwebtoken::EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .expect("Failed to sign legacy token")
    }

    /// Append `count` entries for a user, one second apart, ending just before `now`
    pub async fn seed_actions(&self, user_id: i64, count: i64, now: DateTime<Utc>) {
        for i in 0..count {
            self.log
                .append(NewActionLogEntry::at(
                    UserId(user_id),
                    format!("UPDATE_PET {i}"),
                    now - chrono::TimeDelta::seconds(1 + i),
                ))
                .await
                .expect("Failed to seed action");
        }
    }

    /// Make a GET request with an optional raw Authorization header
    pub async fn get(&self, path: &str, authorization: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// GET with a Bearer token
    pub async fn get_as(&self, path: &str, token: &str) -> TestResponse {
        self.get(path, Some(&format!("Bearer {token}"))).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
