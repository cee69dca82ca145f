//! Outbound HTTP clients.
//!
//! This module provides the [`NotionClient`] for querying the notes
//! database and the [`WebhookClient`] for triggering the n8n automation.

mod notion;
mod webhook;

pub use notion::NotionClient;
pub use webhook::WebhookClient;
