//! Notion data model and field extraction.
//!
//! This module owns the typed view of the Notion query API: [`PageDocument`]
//! for one database row, [`PropertyValue`] as the tagged union over Notion's
//! property kinds, and [`extract`] for turning a property lookup into a
//! display string.

mod page;
mod properties;

pub use page::{PageDocument, QueryResponse};
pub use properties::{PropertyKind, PropertyValue, RichTextSpan, SelectOption, UNTITLED, extract};
