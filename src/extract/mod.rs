//! PDF text extraction
//!
//! Validates an upload and decodes it into ordered page text.

mod error;
mod extractor;

pub use error::ExtractionError;
pub use extractor::{ExtractedText, TextExtractor};
