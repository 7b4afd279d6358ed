//! PDF format implementation
//!
//! Provides the `PdfLoader` and `PageTextSource` implementations for PDF
//! documents using MuPDF.
//!
//! - [`MupdfLoader`]: opens uploaded bytes
//! - [`PdfDocumentHandler`]: decodes one page's text at a time
//!
//! Both use [`SafeDocument`](crate::mupdf::SafeDocument) for thread-safe access.

mod parser;

pub use parser::{MupdfLoader, PdfDocumentHandler};
