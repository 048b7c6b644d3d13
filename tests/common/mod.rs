//! Shared test helpers for integration tests.
//!
//! These tests need a real PostgreSQL instance. Set
//! `TASKBOARD_TEST_DATABASE_URL` to run them; without it every test
//! returns early and reports itself as skipped.

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower::ServiceExt;
use uuid::Uuid;

use taskboard_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, SessionConfig,
};

/// Serializes tests within one binary: they share the database, and the
/// cleanup in `new` would otherwise race concurrent tests.
static DB_LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    _guard: OwnedMutexGuard<()>,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("TASKBOARD_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping: TASKBOARD_TEST_DATABASE_URL not set");
                return None;
            }
        };

        let guard = Arc::clone(DB_LOCK.get_or_init(|| Arc::new(Mutex::new(()))))
            .lock_owned()
            .await;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db = taskboard_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        taskboard_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = taskboard_api::build_state(config, db_pool.clone());
        let router = taskboard_api::build_app(state);

        Some(Self {
            router,
            db_pool,
            _guard: guard,
        })
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "activity_logs",
            "attachments",
            "comments",
            "card_members",
            "card_labels",
            "labels",
            "cards",
            "lists",
            "board_members",
            "boards",
            "workspace_members",
            "workspaces",
            "sessions",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a user directly in the database and return their ID.
    pub async fn create_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = taskboard_auth::password::PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, email, name, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5::user_role)",
        )
        .bind(id)
        .bind(email)
        .bind(email.split('@').next().unwrap_or(email))
        .bind(&hash)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Register through the API and return the issued token.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                    "name": name,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Login and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

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
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `token` field of an auth response.
    pub fn token(&self) -> String {
        self.body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in response")
            .to_string()
    }

    /// A string field at the top level of the body.
    pub fn str_field<'a>(&'a self, field: &str) -> Option<&'a str> {
        self.body.get(field).and_then(|v| v.as_str())
    }
}
