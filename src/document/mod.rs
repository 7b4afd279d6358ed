//! Document abstraction
//!
//! Format-facing interfaces the rest of the server depends on. The text
//! extractor only ever sees a [`PdfLoader`] and the [`PageTextSource`] it
//! produces; MuPDF lives behind those traits in `formats::pdf`.
//!
//! ```text
//!   upload bytes ──► PdfLoader::load ──► PageTextSource
//!                                            │
//!                          extract_text(0), extract_text(1), ...
//!                                            ▼
//!                                     ordered page text
//! ```

mod error;
mod traits;

pub use error::{DocumentError, DocumentResult};
pub use traits::{PageTextSource, PdfLoader};
