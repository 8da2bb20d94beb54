use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_WORKFLOW_CRON: &str = "0 0 6 * * *";
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 300;
const DEFAULT_RATE_LIMIT_WINDOW_SECONDS: u64 = 60;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_EMAIL_FROM: &str = "no-reply@localhost";

/// Where uploaded files are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// Files written below `upload_dir` and served under `/uploads`.
    Local,
    /// Files put into `bucket`, linked through `public_url`.
    S3 { bucket: String, public_url: String },
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    /// Shared secret for `POST /api/cron/workflows`; the endpoint is disabled when unset.
    pub cron_secret: Option<String>,
    pub workflow_cron: String,

    pub rate_limit_max_requests: u32,
    pub rate_limit_window_seconds: u64,

    pub storage_backend: StorageBackend,
    pub upload_dir: String,

    /// Email API endpoint; emails are only logged when unset.
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from: String,

    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let storage_backend = match optional("STORAGE_BACKEND").as_deref() {
            None | Some("local") => StorageBackend::Local,
            Some("s3") => StorageBackend::S3 {
                bucket: required("S3_BUCKET")?,
                public_url: http_url("S3_PUBLIC_URL", required("S3_PUBLIC_URL")?)?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "STORAGE_BACKEND".to_string(),
                    value: other.to_string(),
                    reason: "expected 'local' or 's3'".to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: http_url("APP_URL", required("APP_URL")?)?,
            cron_secret: optional("CRON_SECRET"),
            workflow_cron: optional("WORKFLOW_CRON")
                .unwrap_or_else(|| DEFAULT_WORKFLOW_CRON.to_string()),
            rate_limit_max_requests: parsed(
                "RATE_LIMIT_MAX_REQUESTS",
                DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            )?,
            rate_limit_window_seconds: parsed(
                "RATE_LIMIT_WINDOW_SECONDS",
                DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
            )?,
            storage_backend,
            upload_dir: optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            email_api_url: optional("EMAIL_API_URL")
                .map(|value| http_url("EMAIL_API_URL", value))
                .transpose()?,
            email_api_key: optional("EMAIL_API_KEY"),
            email_from: optional("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            secure_cookies: parsed("SECURE_COOKIES", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}

/// Checks that `value` is an absolute http(s) URL and strips its trailing slash.
fn http_url(name: &str, value: String) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason,
    };

    let parsed = Url::parse(&value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL".to_string()));
    }

    Ok(value.trim_end_matches('/').to_string())
}
