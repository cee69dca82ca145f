//! Food Radar
//!
//! A CLI dashboard over a Notion database of restaurant notes, with an
//! n8n webhook hook for capturing new notes from article URLs.

pub mod cli;
pub mod client;
pub mod config;
pub mod notion;
pub mod table;

// Re-exports for convenience
pub use client::{NotionClient, WebhookClient};
pub use config::Config;
pub use notion::{PageDocument, PropertyKind, PropertyValue, extract};
