//! Sliding-window request limiter.
//!
//! Counters live in the `rate_limit_token` table so limits hold across restarts.
//! When the table can't be read or written the limiter logs a warning and keeps
//! counting in an in-process map instead.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::Mutex;
use tower_sessions::Session;

use crate::server::{
    data::rate_limit::RateLimitRepository,
    error::AppError,
    middleware::session::AuthSession,
    model::rate_limit::{Decision, SlidingWindow, WindowState},
    state::AppState,
};

/// Limiter for one scope (`api`, `login`...).
///
/// Cloning shares the fallback map.
#[derive(Clone)]
pub struct RateLimiter {
    scope: &'static str,
    window: SlidingWindow,
    fallback: Arc<Mutex<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    /// Creates a limiter admitting `limit` hits per `window_seconds` for each identity.
    pub fn new(scope: &'static str, limit: u32, window_seconds: u64) -> Self {
        Self {
            scope,
            window: SlidingWindow::new(limit, window_seconds),
            fallback: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn window(&self) -> SlidingWindow {
        self.window
    }

    /// Storage key for an identity within this limiter's scope.
    pub fn key(&self, identity: &str) -> String {
        format!("{}:{}", self.scope, identity)
    }

    /// Registers a hit for `identity` at the current time.
    pub async fn check(&self, db: &DatabaseConnection, identity: &str) -> Decision {
        self.check_at(db, identity, Utc::now()).await
    }

    /// Registers a hit for `identity` at `now`.
    ///
    /// Uses the database store and falls back to memory on any database error.
    pub async fn check_at(
        &self,
        db: &DatabaseConnection,
        identity: &str,
        now: DateTime<Utc>,
    ) -> Decision {
        let key = self.key(identity);

        match self.check_in_database(db, &key, now).await {
            Ok(decision) => decision,
            Err(err) => {
                tracing::warn!(
                    "Rate limit store unavailable for {}, using in-memory counters: {}",
                    key,
                    err
                );
                self.check_in_memory(key, now).await
            }
        }
    }

    /// Registers a hit and converts a denial into `AppError::RateLimited`.
    pub async fn enforce(&self, db: &DatabaseConnection, identity: &str) -> Result<(), AppError> {
        match self.check(db, identity).await {
            Decision::Allowed => Ok(()),
            Decision::Denied { retry_after } => {
                tracing::debug!("Rate limit exceeded for {}", self.key(identity));
                Err(AppError::RateLimited { retry_after })
            }
        }
    }

    async fn check_in_database(
        &self,
        db: &DatabaseConnection,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Decision, DbErr> {
        let repo = RateLimitRepository::new(db);

        let state = repo.get(key).await?;
        let (state, decision) = self.window.hit(state, now);
        repo.save(key, state).await?;

        Ok(decision)
    }

    async fn check_in_memory(&self, key: String, now: DateTime<Utc>) -> Decision {
        let mut counters = self.fallback.lock().await;

        let (state, decision) = self.window.hit(counters.get(&key).copied(), now);
        counters.insert(key, state);

        // Keep the map bounded to live windows.
        let stale_after = self.window.stale_after();
        counters.retain(|_, s| now - s.window_start < stale_after);

        decision
    }
}

/// Client address from proxy headers.
///
/// Prefers the first `X-Forwarded-For` entry, then `X-Real-IP`, then `anonymous`.
pub fn client_address(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or(real_ip)
        .unwrap_or("anonymous")
        .to_string()
}

/// Identity the api limiter counts against: the session user or the client address.
async fn request_identity(session: &Session, headers: &HeaderMap) -> String {
    match AuthSession::new(session).get_user_id().await {
        Ok(Some(user_id)) => format!("user-{}", user_id),
        _ => client_address(headers),
    }
}

/// Axum middleware applying the `api` limiter to every request it wraps.
pub async fn limit_api_requests(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = request_identity(&session, request.headers()).await;

    state.api_limiter.enforce(&state.db, &identity).await?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn prefers_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(client_address(&headers), "203.0.113.7");
    }

    #[test]
    fn falls_back_to_real_ip_then_anonymous() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_address(&headers), "anonymous");

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_address(&headers), "10.0.0.2");
    }
}
