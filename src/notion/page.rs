//! Page documents and the query response envelope

use super::PropertyValue;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// One row of the Notion database: an id plus its property map.
///
/// Properties that fail to decode (malformed payloads, shapes Notion added
/// since this was written) are dropped from the map instead of failing the
/// page, so one bad cell can never take out a whole fetch cycle. The
/// extractor then renders them as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: HashMap<String, PropertyValue>,
}

/// Response body of `POST /v1/databases/{id}/query`.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<PageDocument>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Decode the property map entry by entry, skipping entries that don't
/// match any known property shape.
fn lenient_properties<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, PropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, serde_json::Value> = HashMap::deserialize(deserializer)?;
    let mut properties = HashMap::with_capacity(raw.len());

    for (name, value) in raw {
        match serde_json::from_value::<PropertyValue>(value) {
            Ok(property) => {
                properties.insert(name, property);
            }
            Err(e) => {
                log::debug!("Skipping malformed property '{}': {}", name, e);
            }
        }
    }

    Ok(properties)
}
