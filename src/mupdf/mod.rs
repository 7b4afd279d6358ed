//! Low-level MuPDF Wrapper
//!
//! A thread-aware wrapper around the MuPDF library.
//!
//! # Thread Safety
//!
//! MuPDF's `fz_context` is **NOT thread-safe**. `SafeDocument` keeps only the
//! raw bytes and opens a fresh document under a mutex for every operation, so
//! it can be moved into `tokio::task::spawn_blocking`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let doc = SafeDocument::from_bytes(pdf_bytes, "doc-123".into())?;
//! let text = doc.with_page(0, extract_plain_text)?;
//! ```

mod safe;
mod text;

pub use safe::SafeDocument;
pub use text::extract_plain_text;
