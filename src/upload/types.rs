//! Upload types

use axum::body::Bytes;
use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Maximum file size: 10MB
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// The only accepted declared MIME type
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Leading bytes of every PDF file
pub const PDF_SIGNATURE: &[u8; 5] = b"%PDF-";

// ============================================================================
// Uploaded File
// ============================================================================

/// A file received from the client, not yet validated
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original file name
    pub file_name: String,

    /// MIME type declared by the client
    pub mime_type: Option<String>,

    /// Raw file contents, shared with the decoder without copying
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            data: data.into(),
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Name the client uses when saving a snapshot of the diagram
    ///
    /// `report.pdf` becomes `report-mindmap.png`.
    pub fn export_name(&self) -> String {
        format!("{}-mindmap.png", self.file_name.replacen(".pdf", "", 1))
    }
}

// ============================================================================
// Skipped Pages
// ============================================================================

/// A page that failed to decode and was left out of the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPage {
    /// Page number (1-indexed)
    pub page: usize,

    /// Decoder error message
    pub reason: String,
}
