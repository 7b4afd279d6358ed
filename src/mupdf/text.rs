//! Plain text helpers
//!
//! Pulls the text layer out of a MuPDF page as one line of text.

use mupdf::{Page, TextPageOptions};

use crate::document::DocumentResult;

/// Extract a page's text as a single string
///
/// Each text line becomes one item; items are joined with a single space
/// and the result is trimmed. A page without a text layer yields an empty
/// string rather than an error.
pub fn extract_plain_text(page: &Page) -> DocumentResult<String> {
    let text_page = page.to_text_page(TextPageOptions::empty())?;
    let mut items = Vec::new();

    for block in text_page.blocks() {
        for line in block.lines() {
            let item: String = line.chars().filter_map(|ch| ch.char()).collect();
            if !item.trim().is_empty() {
                items.push(item);
            }
        }
    }

    Ok(join_items(&items))
}

fn join_items(items: &[String]) -> String {
    items.join(" ").trim().to_string()
}
