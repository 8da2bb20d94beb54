//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Email service posting to the configured email API
//! - Setup code service for the first-admin bootstrap
//! - Storage backend for uploaded files
//! - Rate limiters for the API and for login attempts
//! - The loaded configuration

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    middleware::rate_limit::RateLimiter,
    service::{
        email::EmailService, file::storage::Storage, setup::code::SetupCodeService,
        workflow::WorkflowService,
    },
};

/// Login attempts allowed per email and client address within [`LOGIN_WINDOW_SECONDS`].
pub const LOGIN_MAX_ATTEMPTS: u32 = 10;
pub const LOGIN_WINDOW_SECONDS: u64 = 15 * 60;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `EmailService` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `SetupCodeService` and the limiters share their state through `Arc`
/// - `Storage` holds a path or an S3 client, which is itself reference counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// One-time code allowing the creation of the first admin.
    pub setup_codes: SetupCodeService,

    /// Backend holding uploaded files.
    pub storage: Storage,

    /// Outgoing email, logged only when no email API is configured.
    pub email: EmailService,

    /// Limiter applied to every `/api` request.
    pub api_limiter: RateLimiter,

    /// Limiter applied to login attempts.
    pub login_limiter: RateLimiter,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the application state from the configuration and its dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the email API
    /// - `setup_codes` - Service holding the setup code generated at startup
    /// - `storage` - Upload backend selected by the configuration
    /// - `config` - Loaded configuration
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        setup_codes: SetupCodeService,
        storage: Storage,
        config: Config,
    ) -> Self {
        let email = EmailService::from_config(http_client, &config);
        let api_limiter = RateLimiter::new(
            "api",
            config.rate_limit_max_requests,
            config.rate_limit_window_seconds,
        );
        let login_limiter = RateLimiter::new("login", LOGIN_MAX_ATTEMPTS, LOGIN_WINDOW_SECONDS);

        Self {
            db,
            setup_codes,
            storage,
            email,
            api_limiter,
            login_limiter,
            config: Arc::new(config),
        }
    }

    /// Workflow service purging rate limit rows once every limiter considers them stale.
    pub fn workflow(&self) -> WorkflowService<'_> {
        let retention = self
            .api_limiter
            .window()
            .stale_after()
            .max(self.login_limiter.window().stale_after());

        WorkflowService::new(&self.db, &self.email, retention)
    }
}
