//! Notion API client
//!
//! Queries the notes database via `POST /v1/databases/{id}/query`, pinned
//! to the `2022-06-28` API version.

use crate::config::Config;
use crate::notion::{PageDocument, QueryResponse};
use eyre::{Context, Result};
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

/// Notion API version sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Client for the Notion REST API, scoped to one database.
///
/// Carries the bearer token, API version and content type as default
/// headers, so call sites only deal with paths and bodies.
///
/// # Example
/// ```no_run
/// use food_radar::{Config, NotionClient};
///
/// # async fn example() -> eyre::Result<()> {
/// let config = Config::from_env()?;
/// let client = NotionClient::try_new(&config)?;
/// let pages = client.query_database().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct NotionClient {
    client: Client,
    api_url: Url,
    database_id: String,
}

impl NotionClient {
    /// Create a new client from the process configuration.
    ///
    /// # Errors
    /// Returns an error if the token does not form a valid header value or
    /// the HTTP client cannot be built.
    pub fn try_new(config: &Config) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", config.notion_token).parse()?,
        );
        headers.insert("Notion-Version", NOTION_VERSION.parse()?);
        headers.insert(reqwest::header::CONTENT_TYPE, "application/json".parse()?);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            database_id: config.database_id.clone(),
        })
    }

    /// The database id this client is scoped to.
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// Fetch every page of the database, in the order Notion returns them.
    ///
    /// The query body carries no filter or sort. Notion caps one response at
    /// 100 results, so the client follows `has_more`/`next_cursor` until the
    /// collection is exhausted.
    ///
    /// # Errors
    /// A non-success status ends the cycle: the error carries the status
    /// code and response body for diagnostics and is never retried.
    pub async fn query_database(&self) -> Result<Vec<PageDocument>> {
        let url = self.query_url()?;
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = match &cursor {
                Some(cursor) => json!({ "start_cursor": cursor }),
                None => json!({}),
            };

            log::debug!("Querying database '{}'", self.database_id);

            let response = self
                .client
                .post(url.clone())
                .json(&body)
                .send()
                .await
                .with_context(|| "Failed to query Notion database")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                eyre::bail!("Notion query failed ({}): {}", status, body);
            }

            let page: QueryResponse = response
                .json()
                .await
                .with_context(|| "Failed to parse Notion query response")?;

            pages.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        log::info!("Fetched {} page(s) from Notion", pages.len());

        Ok(pages)
    }

    /// Fetch the database object itself via `GET /v1/databases/{id}`.
    ///
    /// Used by the `auth` command to verify the token and database id
    /// without pulling any rows.
    pub async fn retrieve_database(&self) -> Result<Value> {
        let url = self
            .api_url
            .join(&format!("v1/databases/{}", self.database_id))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| "Failed to reach the Notion API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("Notion database lookup failed ({}): {}", status, body);
        }

        response
            .json()
            .await
            .with_context(|| "Failed to parse Notion database response")
    }

    fn query_url(&self) -> Result<Url> {
        Ok(self
            .api_url
            .join(&format!("v1/databases/{}/query", self.database_id))?)
    }
}

impl std::fmt::Display for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (database: {})", self.api_url, self.database_id)
    }
}
