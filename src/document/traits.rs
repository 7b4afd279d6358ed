//! Document traits
//!
//! The PDF decoding capability the extractor depends on: open bytes as a
//! document, then pull plain text out of one page at a time.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;

use super::error::DocumentResult;

/// An opened document whose pages can be decoded to plain text
#[async_trait]
pub trait PageTextSource: Send + Sync {
    /// Document identifier (used for log correlation)
    fn id(&self) -> &str;

    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Extract plain text from the page at `page_index` (0-indexed)
    async fn extract_text(&self, page_index: usize) -> DocumentResult<String>;
}

/// Opens raw bytes as a [`PageTextSource`]
///
/// Fails with [`DocumentError::ParseError`](super::DocumentError::ParseError)
/// or a MuPDF context error when the bytes are not a readable document.
pub trait PdfLoader: Send + Sync {
    fn load(&self, data: Bytes, id: String) -> DocumentResult<Arc<dyn PageTextSource>>;
}
