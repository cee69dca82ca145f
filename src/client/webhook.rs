//! n8n webhook trigger
//!
//! One `GET` to the configured webhook with the article URL as a query
//! parameter. The workflow behind it scrapes and summarizes the page and
//! writes a new database row; this side only cares about the status code.

use eyre::{Context, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// Client for the n8n automation webhook.
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
}

impl WebhookClient {
    /// Create a new webhook client for the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Forward an article URL to the automation workflow.
    ///
    /// Success is exactly HTTP 200. No retry, no idempotency key, and the
    /// response body is not interpreted.
    ///
    /// # Errors
    /// Any transport error or non-200 status is surfaced to the caller with
    /// the status and body for diagnostics.
    pub async fn trigger(&self, article_url: &str) -> Result<()> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("url", article_url)])
            .send()
            .await
            .with_context(|| "Failed to reach the n8n webhook")?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("n8n webhook returned an error ({}): {}", status, body);
        }

        log::debug!("Webhook accepted {}", article_url);

        Ok(())
    }
}
