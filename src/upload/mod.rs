//! Upload handling
//!
//! Incoming file representation and the checks that gate decoding.

mod types;
mod validation;

pub use types::{SkippedPage, UploadedFile, MAX_FILE_SIZE, PDF_MIME_TYPE, PDF_SIGNATURE};
pub use validation::{has_pdf_signature, is_valid_file_type, validate_upload};
