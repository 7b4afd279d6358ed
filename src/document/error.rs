//! Document error types
//!
//! Errors raised while opening a PDF or decoding its pages.

use thiserror::Error;

/// Document-level error type
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to open or parse the document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Page index past the end of the document
    #[error("Page not found: index {index} (document has {count} pages)")]
    PageNotFound { index: usize, count: usize },

    /// Failed to pull text out of a page
    #[error("Text extraction error: {0}")]
    TextExtractionError(String),

    /// MuPDF context error
    #[error("MuPDF context error: {0}")]
    ContextError(String),

    /// Blocking task failed to complete
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

/// Result type alias for document operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

impl From<mupdf::Error> for DocumentError {
    fn from(err: mupdf::Error) -> Self {
        DocumentError::ContextError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for DocumentError {
    fn from(err: tokio::task::JoinError) -> Self {
        DocumentError::ThreadPoolError(err.to_string())
    }
}
