//! Text extraction
//!
//! Turns a validated upload into the ordered text of its pages. Pages are
//! decoded one at a time; a page that fails to decode is logged and skipped,
//! and only a document with no readable text at all is an error.

use std::sync::Arc;

use serde::Serialize;

use crate::document::PdfLoader;
use crate::formats::pdf::MupdfLoader;
use crate::upload::{validate_upload, SkippedPage, UploadedFile};

use super::error::ExtractionError;

/// Text pulled out of one document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedText {
    /// Identifier assigned to this extraction
    pub document_id: String,

    /// Pages in the document, including unreadable ones
    pub page_count: usize,

    /// Trimmed, non-empty page text in document order
    pub pages: Vec<String>,

    /// Pages that failed to decode
    pub skipped_pages: Vec<SkippedPage>,
}

/// Validates uploads and decodes their page text
#[derive(Clone)]
pub struct TextExtractor {
    loader: Arc<dyn PdfLoader>,
    max_file_size: u64,
}

impl TextExtractor {
    pub fn new(loader: Arc<dyn PdfLoader>, max_file_size: u64) -> Self {
        Self {
            loader,
            max_file_size,
        }
    }

    /// Extractor backed by MuPDF
    pub fn with_mupdf(max_file_size: u64) -> Self {
        Self::new(Arc::new(MupdfLoader), max_file_size)
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Validate `file` and extract the text of each of its pages
    #[tracing::instrument(
        skip(self, file),
        fields(file_name = %file.file_name, file_size = file.size())
    )]
    pub async fn extract(&self, file: &UploadedFile) -> Result<ExtractedText, ExtractionError> {
        validate_upload(file, self.max_file_size)?;

        let document_id = uuid::Uuid::new_v4().to_string();
        let loader = self.loader.clone();
        let data = file.data.clone();
        let id = document_id.clone();

        // Opening parses the xref table, which is CPU-bound
        let source = tokio::task::spawn_blocking(move || loader.load(data, id))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "PDF open task failed");
                ExtractionError::Internal(e.to_string())
            })?
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to open PDF");
                ExtractionError::Corrupted(e.to_string())
            })?;

        let page_count = source.page_count();
        if page_count == 0 {
            return Err(ExtractionError::EmptyDocument);
        }

        let mut pages = Vec::with_capacity(page_count);
        let mut skipped_pages = Vec::new();

        for page_index in 0..page_count {
            match source.extract_text(page_index).await {
                Ok(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        pages.push(text.to_string());
                    }
                }
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "Error processing page");
                    skipped_pages.push(SkippedPage {
                        page: page_index + 1,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if pages.is_empty() {
            return Err(ExtractionError::NoReadableText);
        }

        tracing::info!(
            document_id = %source.id(),
            page_count,
            text_pages = pages.len(),
            skipped = skipped_pages.len(),
            "PDF text extraction complete"
        );

        Ok(ExtractedText {
            document_id,
            page_count,
            pages,
            skipped_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentError, DocumentResult, PageTextSource};
    use crate::test_support::build_pdf;
    use crate::upload::{MAX_FILE_SIZE, PDF_MIME_TYPE};
    use async_trait::async_trait;
    use axum::body::Bytes;

    /// Page source whose pages are either text or a decode failure
    struct FakeDocument {
        id: String,
        pages: Vec<Result<String, String>>,
    }

    #[async_trait]
    impl PageTextSource for FakeDocument {
        fn id(&self) -> &str {
            &self.id
        }

        fn page_count(&self) -> usize {
            self.pages.len()
        }

        async fn extract_text(&self, page_index: usize) -> DocumentResult<String> {
            match &self.pages[page_index] {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(DocumentError::TextExtractionError(msg.clone())),
            }
        }
    }

    struct FakeLoader {
        pages: Option<Vec<Result<String, String>>>,
        received: parking_lot::Mutex<Option<Bytes>>,
    }

    impl PdfLoader for FakeLoader {
        fn load(&self, data: Bytes, id: String) -> DocumentResult<Arc<dyn PageTextSource>> {
            *self.received.lock() = Some(data);
            match &self.pages {
                Some(pages) => Ok(Arc::new(FakeDocument {
                    id,
                    pages: pages.clone(),
                })),
                None => Err(DocumentError::ParseError("no objects found".into())),
            }
        }
    }

    fn fake_loader(pages: Option<Vec<Result<String, String>>>) -> Arc<FakeLoader> {
        Arc::new(FakeLoader {
            pages,
            received: parking_lot::Mutex::new(None),
        })
    }

    fn extractor(pages: Option<Vec<Result<String, String>>>) -> TextExtractor {
        TextExtractor::new(fake_loader(pages), MAX_FILE_SIZE)
    }

    struct PanickingLoader;

    impl PdfLoader for PanickingLoader {
        fn load(&self, _data: Bytes, _id: String) -> DocumentResult<Arc<dyn PageTextSource>> {
            panic!("decoder crashed");
        }
    }

    fn upload() -> UploadedFile {
        UploadedFile::new("doc.pdf", Some(PDF_MIME_TYPE.into()), b"%PDF-1.7\n".to_vec())
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped() {
        let extractor = extractor(Some(vec![
            Ok("First page text".into()),
            Err("bad content stream".into()),
            Ok("Third page text".into()),
        ]));

        let result = extractor.extract(&upload()).await.unwrap();

        assert_eq!(result.page_count, 3);
        assert_eq!(result.pages, vec!["First page text", "Third page text"]);
        assert_eq!(result.skipped_pages.len(), 1);
        assert_eq!(result.skipped_pages[0].page, 2);
        assert!(result.skipped_pages[0].reason.contains("bad content stream"));
    }

    #[tokio::test]
    async fn test_blank_pages_are_dropped_and_text_trimmed() {
        let extractor = extractor(Some(vec![
            Ok("   ".into()),
            Ok("  padded text \n".into()),
        ]));

        let result = extractor.extract(&upload()).await.unwrap();

        assert_eq!(result.pages, vec!["padded text"]);
        assert!(result.skipped_pages.is_empty());
    }

    #[tokio::test]
    async fn test_all_pages_failing_is_no_readable_text() {
        let extractor = extractor(Some(vec![Err("a".into()), Err("b".into())]));

        let result = extractor.extract(&upload()).await;

        assert!(matches!(result, Err(ExtractionError::NoReadableText)));
    }

    #[tokio::test]
    async fn test_zero_pages_is_empty_document() {
        let extractor = extractor(Some(Vec::new()));

        let result = extractor.extract(&upload()).await;

        assert!(matches!(result, Err(ExtractionError::EmptyDocument)));
    }

    #[tokio::test]
    async fn test_unopenable_document_is_corrupted() {
        let extractor = extractor(None);

        let result = extractor.extract(&upload()).await;

        assert!(matches!(result, Err(ExtractionError::Corrupted(_))));
    }

    #[tokio::test]
    async fn test_panicking_loader_is_internal_error() {
        let extractor = TextExtractor::new(Arc::new(PanickingLoader), MAX_FILE_SIZE);

        let result = extractor.extract(&upload()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ExtractionError::Internal(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_loader_shares_upload_buffer() {
        let loader = fake_loader(Some(vec![Ok("Some page text".into())]));
        let extractor = TextExtractor::new(loader.clone(), MAX_FILE_SIZE);
        let file = upload();

        extractor.extract(&file).await.unwrap();

        let received = loader.received.lock().take().unwrap();
        assert_eq!(received.as_ptr(), file.data.as_ptr());
    }

    #[tokio::test]
    async fn test_validation_runs_before_loading() {
        // Loader would fail, but the declared type is rejected first
        let extractor = extractor(None);
        let file = UploadedFile::new("pic.png", Some("image/png".into()), b"%PDF-".to_vec());

        let result = extractor.extract(&file).await;

        assert!(matches!(result, Err(ExtractionError::InvalidFileType(_))));
    }

    #[tokio::test]
    async fn test_mupdf_extracts_page_text() {
        let data = build_pdf(&[
            "Introduction to mind maps. Second sentence here",
            "",
            "Closing remarks for the document",
        ]);
        let file = UploadedFile::new("doc.pdf", Some(PDF_MIME_TYPE.into()), data);

        let result = TextExtractor::with_mupdf(MAX_FILE_SIZE)
            .extract(&file)
            .await
            .unwrap();

        assert_eq!(result.page_count, 3);
        assert_eq!(result.pages.len(), 2);
        assert!(result.pages[0].contains("Introduction to mind maps"));
        assert!(result.pages[1].contains("Closing remarks"));
    }

    #[tokio::test]
    async fn test_mupdf_document_without_text() {
        let data = build_pdf(&["", ""]);
        let file = UploadedFile::new("scan.pdf", Some(PDF_MIME_TYPE.into()), data);

        let result = TextExtractor::with_mupdf(MAX_FILE_SIZE).extract(&file).await;

        assert!(matches!(result, Err(ExtractionError::NoReadableText)));
    }
}
