//! Outgoing email through an HTTP email API.

use dioxus_logger::tracing;
use serde::Serialize;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
};

#[derive(Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Sends plain text emails.
///
/// Without an API URL the service runs in dry-run mode: emails are logged at info
/// level and reported as sent, which keeps development setups and tests free of
/// any mail provider.
#[derive(Clone)]
pub struct EmailService {
    http_client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
}

impl EmailService {
    pub fn new(
        http_client: reqwest::Client,
        api_url: Option<String>,
        api_key: Option<String>,
        from: String,
    ) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
            from,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http_client,
            config.email_api_url.clone(),
            config.email_api_key.clone(),
            config.email_from.clone(),
        )
    }

    /// Service that only logs emails.
    pub fn dry_run(from: impl Into<String>) -> Self {
        Self::new(reqwest::Client::new(), None, None, from.into())
    }

    pub fn is_dry_run(&self) -> bool {
        self.api_url.is_none()
    }

    /// Sends one email.
    ///
    /// # Returns
    /// - `Ok(())` - Accepted by the API, or logged in dry-run mode
    /// - `Err(AppError::ReqwestErr)` - The API could not be reached
    /// - `Err(AppError::InternalErr(EmailRejected))` - The API answered with an error status
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AppError> {
        let Some(api_url) = &self.api_url else {
            tracing::info!("Email (dry run) to {}: {}\n{}", to, subject, text);
            return Ok(());
        };

        let mut request = self.http_client.post(api_url).json(&EmailPayload {
            from: &self.from,
            to,
            subject,
            text,
        });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::EmailRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::debug!("Sent email to {}: {}", to, subject);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that dry-run mode reports emails as sent without any network access.
    #[tokio::test]
    async fn dry_run_succeeds() {
        let email = EmailService::dry_run("no-reply@localhost");

        assert!(email.is_dry_run());
        assert!(email
            .send("tenant@example.com", "Rent due", "Please pay")
            .await
            .is_ok());
    }
}
