//! PDF PageTextSource implementation
//!
//! Implements the `PageTextSource` and `PdfLoader` traits for PDF documents.
//! Uses MuPDF via `SafeDocument` for thread-safe access.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;

use crate::document::{DocumentResult, PageTextSource, PdfLoader};
use crate::mupdf::{extract_plain_text, SafeDocument};

/// PDF implementation of PageTextSource
pub struct PdfDocumentHandler {
    /// Thread-safe MuPDF document wrapper
    pub(super) doc: Arc<SafeDocument>,
}

impl PdfDocumentHandler {
    /// Create a new PDF handler from bytes
    pub fn from_bytes(data: Bytes, id: String) -> DocumentResult<Self> {
        let doc = SafeDocument::from_bytes(data, id)?;
        Ok(Self { doc: Arc::new(doc) })
    }
}

#[async_trait]
impl PageTextSource for PdfDocumentHandler {
    fn id(&self) -> &str {
        self.doc.id()
    }

    fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    async fn extract_text(&self, page_index: usize) -> DocumentResult<String> {
        let doc = self.doc.clone();

        // Offload to blocking task since MuPDF operations are CPU-bound
        tokio::task::spawn_blocking(move || doc.with_page(page_index, extract_plain_text)).await?
    }
}

/// Opens PDF bytes with MuPDF
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfLoader;

impl PdfLoader for MupdfLoader {
    fn load(&self, data: Bytes, id: String) -> DocumentResult<Arc<dyn PageTextSource>> {
        let handler = PdfDocumentHandler::from_bytes(data, id)?;
        Ok(Arc::new(handler))
    }
}
