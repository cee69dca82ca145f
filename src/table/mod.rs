//! Row assembly for the notes table.
//!
//! The fixed [`COLUMNS`] map decides which Notion property feeds each
//! display column and with which kind it is read. Rows are plain string
//! vectors built fresh per fetch cycle, never persisted.

mod render;

pub use render::render;

use crate::notion::{PageDocument, PropertyKind, extract};

/// One display column: header, source property name, the kind it is read
/// as, and an optional display width cap.
pub struct ColumnSpec {
    pub header: &'static str,
    pub property: &'static str,
    pub kind: PropertyKind,
    pub max_width: Option<usize>,
}

/// The display columns of the notes table, matched to the property names
/// in the Notion database.
pub const COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec {
        header: "店名",
        property: "店家名稱",
        kind: PropertyKind::RichText,
        max_width: Some(24),
    },
    ColumnSpec {
        header: "標題",
        property: "Name",
        kind: PropertyKind::Title,
        max_width: Some(32),
    },
    ColumnSpec {
        header: "類型",
        property: "類型",
        kind: PropertyKind::Select,
        max_width: Some(12),
    },
    ColumnSpec {
        header: "價位",
        property: "價位",
        kind: PropertyKind::RichText,
        max_width: Some(12),
    },
    ColumnSpec {
        header: "地區",
        property: "所在位置",
        kind: PropertyKind::RichText,
        max_width: Some(16),
    },
    ColumnSpec {
        header: "交通",
        property: "交通方式",
        kind: PropertyKind::RichText,
        max_width: Some(24),
    },
    ColumnSpec {
        header: "必點",
        property: "推薦東西",
        kind: PropertyKind::RichText,
        max_width: Some(32),
    },
];

/// Build one display row from a page, invoking the extractor once per
/// column. Never fails: missing or malformed cells come back empty.
pub fn build_row(page: &PageDocument) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|column| extract(&page.properties, column.property, column.kind))
        .collect()
}

/// Build the full row set for a fetch cycle.
pub fn build_rows(pages: &[PageDocument]) -> Vec<Vec<String>> {
    pages.iter().map(build_row).collect()
}
