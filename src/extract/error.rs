//! Extraction error types
//!
//! Every fatal condition of the upload → page text pipeline. Messages are
//! shown to the user as-is.

use axum::http::StatusCode;
use thiserror::Error;

/// Fatal extraction failures
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Please upload a valid PDF file.")]
    InvalidFileType(Option<String>),

    #[error("File size exceeds {}MB limit. Please upload a smaller file.", .max / (1024 * 1024))]
    FileTooLarge { size: Option<u64>, max: u64 },

    #[error("Invalid PDF file format. Please upload a valid PDF.")]
    InvalidFormat,

    #[error("Failed to process PDF file. Please ensure the file is not corrupted or password protected.")]
    Corrupted(String),

    #[error("The PDF file appears to be empty.")]
    EmptyDocument,

    #[error("No readable text found in the PDF. The file might be scanned or protected.")]
    NoReadableText,

    /// Server-side failure unrelated to the upload (e.g. a panicked decode task)
    #[error("An internal error occurred while processing the PDF.")]
    Internal(String),
}

impl ExtractionError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidFormat => StatusCode::BAD_REQUEST,
            Self::Corrupted(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NoReadableText => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFileType(_) => "INVALID_FILE_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::Corrupted(_) => "UNREADABLE_PDF",
            Self::EmptyDocument => "EMPTY_DOCUMENT",
            Self::NoReadableText => "NO_READABLE_TEXT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
