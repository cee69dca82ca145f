//! Notion property values and the field extractor
//!
//! Notion returns each database cell as a `{"type": "...", "<type>": ...}`
//! object. [`PropertyValue`] decodes that shape into a tagged union so the
//! extractor can match on the stored kind explicitly instead of reaching
//! into loose JSON and suppressing whatever breaks.

use serde::Deserialize;
use std::collections::HashMap;

/// Placeholder shown for a title property that exists but has no spans.
pub const UNTITLED: &str = "無標題";

/// One span of Notion rich text. Only the flattened text matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextSpan {
    pub plain_text: String,
}

/// A named option of a select or multi-select property.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// A Notion property value, tagged by the `type` field of the wire format.
///
/// Variant payloads decode strictly: a `title` object without its `title`
/// array is malformed and fails to decode, which [`PageDocument`] turns into
/// an absent property (and the extractor into an empty string). Property
/// kinds this tool does not read (dates, numbers, relations, ...) land in
/// [`Unknown`].
///
/// [`PageDocument`]: super::PageDocument
/// [`Unknown`]: PropertyValue::Unknown
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichTextSpan> },
    RichText { rich_text: Vec<RichTextSpan> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Url { url: Option<String> },
    #[serde(other)]
    Unknown,
}

/// The property kind a column expects to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Select,
    MultiSelect,
    Url,
}

/// Extract a display string for `column` from a page's property map.
///
/// Pure and total: never fails, never panics. The degradation rules are
/// part of the contract:
/// - `column` missing from the map: empty string
/// - stored value not of the requested `kind`: empty string
/// - `title` with no spans: [`UNTITLED`] (the only non-empty default)
/// - `rich_text` with no spans, `select` with no option, `url` absent or
///   empty: empty string
/// - `multi_select`: option names joined with `", "` in source order
pub fn extract(
    properties: &HashMap<String, PropertyValue>,
    column: &str,
    kind: PropertyKind,
) -> String {
    let Some(value) = properties.get(column) else {
        return String::new();
    };

    match (kind, value) {
        (PropertyKind::Title, PropertyValue::Title { title }) => title
            .first()
            .map(|span| span.plain_text.clone())
            .unwrap_or_else(|| UNTITLED.to_string()),
        (PropertyKind::RichText, PropertyValue::RichText { rich_text }) => rich_text
            .first()
            .map(|span| span.plain_text.clone())
            .unwrap_or_default(),
        (PropertyKind::Select, PropertyValue::Select { select }) => select
            .as_ref()
            .map(|option| option.name.clone())
            .unwrap_or_default(),
        (PropertyKind::MultiSelect, PropertyValue::MultiSelect { multi_select }) => multi_select
            .iter()
            .map(|option| option.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        (PropertyKind::Url, PropertyValue::Url { url }) => url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or_default()
            .to_string(),
        // Stored kind does not match the requested one. Degrade to empty,
        // not the kind-specific default: only a well-shaped but empty title
        // earns the placeholder.
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: serde_json::Value) -> HashMap<String, PropertyValue> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_column_is_empty() {
        let properties = props(json!({}));
        assert_eq!(extract(&properties, "Name", PropertyKind::Title), "");
        assert_eq!(extract(&properties, "類型", PropertyKind::Select), "");
    }

    #[test]
    fn test_title_first_span() {
        let properties = props(json!({
            "Name": {
                "type": "title",
                "title": [
                    {"plain_text": "Noodle Shop"},
                    {"plain_text": " (ignored)"}
                ]
            }
        }));
        assert_eq!(
            extract(&properties, "Name", PropertyKind::Title),
            "Noodle Shop"
        );
    }

    #[test]
    fn test_empty_title_gets_placeholder() {
        let properties = props(json!({
            "Name": {"type": "title", "title": []}
        }));
        assert_eq!(extract(&properties, "Name", PropertyKind::Title), UNTITLED);
    }

    #[test]
    fn test_kind_mismatch_is_empty_not_placeholder() {
        // A rich_text value read as a title must not earn the title default.
        let properties = props(json!({
            "Name": {"type": "rich_text", "rich_text": []}
        }));
        assert_eq!(extract(&properties, "Name", PropertyKind::Title), "");
        assert_eq!(extract(&properties, "Name", PropertyKind::Select), "");
    }

    #[test]
    fn test_rich_text_defaults_to_empty() {
        let properties = props(json!({
            "價位": {"type": "rich_text", "rich_text": []},
            "地區": {"type": "rich_text", "rich_text": [{"plain_text": "北區"}]}
        }));
        assert_eq!(extract(&properties, "價位", PropertyKind::RichText), "");
        assert_eq!(extract(&properties, "地區", PropertyKind::RichText), "北區");
    }

    #[test]
    fn test_select_option_name() {
        let properties = props(json!({
            "類型": {"type": "select", "select": {"name": "拉麵"}},
            "空的": {"type": "select", "select": null}
        }));
        assert_eq!(extract(&properties, "類型", PropertyKind::Select), "拉麵");
        assert_eq!(extract(&properties, "空的", PropertyKind::Select), "");
    }

    #[test]
    fn test_multi_select_joined_in_order() {
        let properties = props(json!({
            "標籤": {
                "type": "multi_select",
                "multi_select": [{"name": "A"}, {"name": "B"}, {"name": "C"}]
            },
            "空的": {"type": "multi_select", "multi_select": []}
        }));
        assert_eq!(
            extract(&properties, "標籤", PropertyKind::MultiSelect),
            "A, B, C"
        );
        assert_eq!(extract(&properties, "空的", PropertyKind::MultiSelect), "");
    }

    #[test]
    fn test_url_null_or_empty_is_empty() {
        let properties = props(json!({
            "連結": {"type": "url", "url": "http://x"},
            "空連結": {"type": "url", "url": null},
            "空字串": {"type": "url", "url": ""}
        }));
        assert_eq!(extract(&properties, "連結", PropertyKind::Url), "http://x");
        assert_eq!(extract(&properties, "空連結", PropertyKind::Url), "");
        assert_eq!(extract(&properties, "空字串", PropertyKind::Url), "");
    }

    #[test]
    fn test_unknown_property_kind_decodes_and_degrades() {
        let properties = props(json!({
            "建立時間": {"type": "created_time", "created_time": "2024-01-01T00:00:00Z"}
        }));
        assert_eq!(extract(&properties, "建立時間", PropertyKind::RichText), "");
    }

    #[test]
    fn test_malformed_title_fails_strict_decode() {
        // Missing the "title" payload array: malformed, rejected at decode
        // time. PageDocument drops it, so the row shows "" rather than the
        // placeholder.
        let result: Result<PropertyValue, _> =
            serde_json::from_value(json!({"type": "title"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let properties = props(json!({
            "Name": {"type": "title", "title": [{"plain_text": "牛肉麵"}]}
        }));
        let first = extract(&properties, "Name", PropertyKind::Title);
        let second = extract(&properties, "Name", PropertyKind::Title);
        assert_eq!(first, second);
        assert_eq!(first, "牛肉麵");
    }
}
