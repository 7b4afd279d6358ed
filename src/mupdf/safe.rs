//! Thread-safe document wrapper for MuPDF
//!
//! Provides a safe abstraction over MuPDF documents that ensures
//! thread-safe access through serialization.
//!
//! # Design
//!
//! MuPDF documents are not thread-safe. This wrapper:
//!
//! 1. Stores the uploaded PDF bytes
//! 2. Opens a fresh document for each operation
//! 3. Uses `parking_lot::Mutex` to serialize access
//!
//! No MuPDF handle outlives a `with_doc` call, so the wrapper itself is
//! `Send + Sync` and can be moved into `spawn_blocking`.

use axum::body::Bytes;
use mupdf::{Document, Page};
use parking_lot::Mutex;

use crate::document::{DocumentError, DocumentResult};

const PDF_MIME: &str = "application/pdf";

/// Thread-safe PDF document wrapper
///
/// Serializes all access to the MuPDF document. The document is opened
/// fresh for each operation to avoid stale state.
pub struct SafeDocument {
    /// Raw PDF bytes
    data: Bytes,
    /// Document identifier
    id: String,
    /// Cached page count
    page_count: usize,
    /// Mutex for serializing access
    _lock: Mutex<()>,
}

impl SafeDocument {
    /// Open a SafeDocument from PDF bytes
    ///
    /// Validates that MuPDF can open the bytes and caches the page count.
    pub fn from_bytes(data: Bytes, id: String) -> DocumentResult<Self> {
        let page_count = {
            let doc = Document::from_bytes(&data, PDF_MIME)
                .map_err(|e| DocumentError::ParseError(e.to_string()))?;
            let count = doc.page_count()?;
            usize::try_from(count).map_err(|_| {
                DocumentError::ParseError(format!("invalid page count {}", count))
            })?
        };

        Ok(Self {
            data,
            id,
            page_count,
            _lock: Mutex::new(()),
        })
    }

    /// Get the document ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the number of pages
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn open_document(&self) -> DocumentResult<Document> {
        Document::from_bytes(&self.data, PDF_MIME).map_err(Into::into)
    }

    /// Execute a closure with access to the document
    ///
    /// Opens a fresh document, executes the closure, and drops the
    /// document afterward. Access is serialized via mutex.
    pub fn with_doc<F, R>(&self, f: F) -> DocumentResult<R>
    where
        F: FnOnce(&Document) -> DocumentResult<R>,
    {
        let _guard = self._lock.lock();
        let doc = self.open_document()?;
        f(&doc)
    }

    /// Execute a closure with one loaded page
    pub fn with_page<F, R>(&self, page_index: usize, f: F) -> DocumentResult<R>
    where
        F: FnOnce(&Page) -> DocumentResult<R>,
    {
        if page_index >= self.page_count {
            return Err(DocumentError::PageNotFound {
                index: page_index,
                count: self.page_count,
            });
        }

        self.with_doc(|doc| {
            let index = i32::try_from(page_index).map_err(|_| DocumentError::PageNotFound {
                index: page_index,
                count: self.page_count,
            })?;
            let page = doc.load_page(index)?;
            f(&page)
        })
    }
}
