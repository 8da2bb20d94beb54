mod auth;
mod rate_limit;
