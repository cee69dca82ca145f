//! Plain-text table rendering
//!
//! Sizes columns to content using display widths, where CJK characters
//! count as two terminal cells, and truncates cells that exceed a column's
//! width hint.

use super::COLUMNS;

/// Render the row set as an aligned text table with a header line.
///
/// Column widths fit the widest cell (or header), capped by each column's
/// `max_width` hint. Over-long cells are truncated with a `…`.
pub fn render(rows: &[Vec<String>]) -> String {
    let headers: Vec<&str> = COLUMNS.iter().map(|column| column.header).collect();

    // Truncate first so widths reflect what actually gets printed.
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&COLUMNS)
                .map(|(cell, column)| match column.max_width {
                    Some(max) => truncate(cell, max),
                    None => cell.clone(),
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &rows {
        out.push('\n');
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(display_width(cell));
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Terminal display width of a string, counting wide (CJK) characters as
/// two cells.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Truncate to at most `max` display cells, appending `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        // Leave one cell for the ellipsis.
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn char_width(c: char) -> usize {
    match c as u32 {
        // Hangul Jamo
        0x1100..=0x115F
        // CJK radicals, kana, ideographs, compatibility forms
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        // Hangul syllables
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        // Fullwidth forms
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        // Supplementary ideographic planes
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD => 2,
        _ => 1,
    }
}
