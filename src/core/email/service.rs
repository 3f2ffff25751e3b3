//! Email service using Resend

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Resend endpoint for sending a single email
const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Failed to send email: {0}")]
    SendError(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Email service not configured - RESEND_API_KEY not set")]
    NotConfigured,
}

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email-sending capability
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendEmailResponse {
    id: String,
}

/// Resend client
#[derive(Clone)]
pub struct EmailService {
    api_key: Option<String>,
    client: Client,
    from_email: String,
    endpoint: String,
}

impl EmailService {
    pub fn new(api_key: Option<String>, from_email: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            client: Client::new(),
            from_email: from_email.into(),
            endpoint: RESEND_API_URL.to_string(),
        }
    }

    /// Point the client at a different Resend-compatible endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Check if email service is properly configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn request_body<'a>(&'a self, email: &'a OutgoingEmail) -> ResendEmailRequest<'a> {
        ResendEmailRequest {
            from: &self.from_email,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        }
    }
}

#[async_trait]
impl Notifier for EmailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let api_key = self.api_key.as_ref().ok_or(EmailError::NotConfigured)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(email))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmailError::SendError(format!("{}: {}", status, error_text)));
        }

        let result: ResendEmailResponse = response.json().await?;
        tracing::debug!(email_id = %result.id, to = %email.to, "Email sent successfully");
        Ok(())
    }
}
