//! CLI helper functions

use crate::{
    client::{NotionClient, WebhookClient},
    config::Config,
    table,
};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use url::Url;

/// Line shown when the table has nothing to display, fetch failure
/// included.
const EMPTY_STATE: &str = "目前沒有資料，或是讀取失敗。";

/// Fetch the notes database and print it as a table.
///
/// A failed query is fatal for this cycle but not for the process: the
/// error is logged with the status and body Notion returned, the empty
/// state is printed, and the command still exits cleanly.
pub async fn list_notes(config: &Config) -> Result<()> {
    let client = NotionClient::try_new(config)?;

    log::info!(
        "Querying notes database {}",
        client.database_id().bright_black()
    );

    let pages = match client.query_database().await {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("Notion query failed: {}", e);
            println!("{}", EMPTY_STATE);
            return Ok(());
        }
    };

    if pages.is_empty() {
        println!("{}", EMPTY_STATE);
        return Ok(());
    }

    let rows = table::build_rows(&pages);
    println!("{}", table::render(&rows));

    log::info!("✓ Listed {} note(s)", rows.len());

    Ok(())
}

/// Forward an article URL to the n8n workflow that writes new notes.
///
/// The URL is validated before anything goes out. Webhook failures come
/// back as an error with the status n8n returned; the currently stored
/// notes are unaffected either way.
pub async fn add_note(config: &Config, article_url: &str) -> Result<()> {
    let article = Url::parse(article_url)
        .with_context(|| format!("Invalid article URL: {}", article_url))?;

    log::info!("Forwarding {} to n8n", article.as_str().bright_black());

    let webhook = WebhookClient::new(config.webhook_url.clone());
    webhook.trigger(article.as_str()).await?;

    log::info!("✓ Sent to n8n, the note will appear after the workflow finishes");

    Ok(())
}

/// Verify the token and database id without pulling any rows.
pub async fn check_auth(config: &Config) -> Result<()> {
    let client = NotionClient::try_new(config)?;

    log::info!("Checking access to {}", client.to_string().bright_black());

    let database = client.retrieve_database().await?;
    let title = database
        .get("title")
        .and_then(|spans| spans.as_array())
        .and_then(|spans| spans.first())
        .and_then(|span| span.get("plain_text"))
        .and_then(|text| text.as_str())
        .unwrap_or("(untitled database)");

    log::info!("✓ Connected to database '{}'", title.cyan());

    Ok(())
}
