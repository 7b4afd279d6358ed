//! Upload validation
//!
//! Checks run before any decoding is attempted: declared type, size cap,
//! then the `%PDF-` signature.

use crate::extract::ExtractionError;

use super::types::{UploadedFile, PDF_MIME_TYPE, PDF_SIGNATURE};

/// Validate an uploaded file against the size cap `max_size`
pub fn validate_upload(file: &UploadedFile, max_size: u64) -> Result<(), ExtractionError> {
    if !is_valid_file_type(file.mime_type.as_deref()) {
        return Err(ExtractionError::InvalidFileType(file.mime_type.clone()));
    }

    if file.size() > max_size {
        return Err(ExtractionError::FileTooLarge {
            size: Some(file.size()),
            max: max_size,
        });
    }

    if !has_pdf_signature(&file.data) {
        return Err(ExtractionError::InvalidFormat);
    }

    Ok(())
}

/// Only an exact `application/pdf` declaration is accepted
pub fn is_valid_file_type(mime_type: Option<&str>) -> bool {
    mime_type == Some(PDF_MIME_TYPE)
}

/// Whether the first five bytes are `%PDF-`
pub fn has_pdf_signature(data: &[u8]) -> bool {
    data.starts_with(PDF_SIGNATURE)
}
