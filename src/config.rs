//! Startup configuration
//!
//! Credentials and endpoint identifiers are read once from the environment
//! into an explicit [`Config`] value that gets passed to whatever issues
//! outbound calls. Missing required variables are fatal at startup.

use eyre::{Context, Result};
use url::Url;

/// Default Notion API origin. Overridable via `NOTION_API_URL`, mainly so
/// tests can point the client at a local server.
pub const NOTION_API_URL: &str = "https://api.notion.com/";

/// Process configuration, loaded once and treated as immutable.
///
/// Expected environment variables:
/// - `NOTION_TOKEN`: Notion integration token (required)
/// - `NOTION_DATABASE_ID`: id of the notes database (required)
/// - `N8N_WEBHOOK_URL`: n8n webhook endpoint for new notes (required)
/// - `NOTION_API_URL`: Notion API origin override (optional)
#[derive(Clone, Debug)]
pub struct Config {
    pub notion_token: String,
    pub database_id: String,
    pub webhook_url: Url,
    pub api_url: Url,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if a required variable is unset or a URL fails to
    /// parse. Callers treat this as fatal.
    pub fn from_env() -> Result<Self> {
        let notion_token =
            std::env::var("NOTION_TOKEN").context("NOTION_TOKEN environment variable not set")?;
        let database_id = std::env::var("NOTION_DATABASE_ID")
            .context("NOTION_DATABASE_ID environment variable not set")?;

        let webhook_str = std::env::var("N8N_WEBHOOK_URL")
            .context("N8N_WEBHOOK_URL environment variable not set")?;
        let webhook_url = Url::parse(&webhook_str)
            .with_context(|| format!("Invalid N8N_WEBHOOK_URL: {}", webhook_str))?;

        let api_url = match std::env::var("NOTION_API_URL") {
            Ok(api_str) => Url::parse(&api_str)
                .with_context(|| format!("Invalid NOTION_API_URL: {}", api_str))?,
            Err(_) => Url::parse(NOTION_API_URL)?,
        };

        Ok(Self {
            notion_token,
            database_id,
            webhook_url,
            api_url,
        })
    }
}
