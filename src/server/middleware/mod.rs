//! Request guards and middleware.
//!
//! - `auth` - `AuthGuard` loading the session user and checking permissions
//! - `session` - typed wrappers around `tower_sessions::Session`
//! - `rate_limit` - sliding-window request limiter and its axum middleware

pub mod auth;
pub mod rate_limit;
pub mod session;

#[cfg(test)]
mod test;
