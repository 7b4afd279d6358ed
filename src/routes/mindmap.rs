//! Mind map routes
//!
//! Endpoints:
//! - POST /api/v1/mindmap - Upload a PDF (multipart field `file`), get its mind map
//! - POST /api/v1/mindmap/changes - Apply client edits to a mind map

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::ExtractionError;
use crate::mindmap::{apply_changes, generate_mind_map, GraphChange, MindMap, SourceInfo};
use crate::state::AppState;
use crate::upload::UploadedFile;

/// Create the mind map router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_mind_map))
        .route("/changes", post(apply_graph_changes))
}

/// A mind map sent back by the client together with its edits
#[derive(Debug, Deserialize)]
pub struct ChangesRequest {
    #[serde(flatten)]
    pub map: MindMap,
    #[serde(default)]
    pub changes: Vec<GraphChange>,
}

/// POST /api/v1/mindmap
///
/// Reads the first `file` (or `pdf`) field, extracts its page text and
/// lays out the mind map. No partial map is returned on failure.
async fn create_mind_map(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let max_size = state.extractor().max_file_size();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_size))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" && name != "pdf" {
            tracing::debug!(field = %name, "Ignoring multipart field");
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "document.pdf".to_string());
        let mime_type = field.content_type().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_size))?;

        let file = UploadedFile::new(file_name, mime_type, data);
        let extracted = state.extractor().extract(&file).await?;
        let map = generate_mind_map(&extracted.pages);

        tracing::info!(
            file_name = %file.file_name,
            document_id = %extracted.document_id,
            node_count = map.nodes.len(),
            "Mind map created"
        );

        let source = SourceInfo {
            export_name: file.export_name(),
            file_name: file.file_name,
            document_id: extracted.document_id,
            page_count: extracted.page_count,
            skipped_pages: extracted.skipped_pages,
            generated_at: Utc::now(),
        };
        return render(&state, &map, Some(&source));
    }

    tracing::warn!("No file field found in multipart upload");
    Err(AppError::BadRequest(
        "No file provided. Use field name 'file' or 'pdf'".to_string(),
    ))
}

/// POST /api/v1/mindmap/changes
async fn apply_graph_changes(
    State(state): State<AppState>,
    Json(request): Json<ChangesRequest>,
) -> Result<Response> {
    let map = apply_changes(request.map, &request.changes)?;
    render(&state, &map, None)
}

fn render(state: &AppState, map: &MindMap, source: Option<&SourceInfo>) -> Result<Response> {
    let renderer = state.renderer();
    let body = renderer.render(map, source)?;

    Ok(([(header::CONTENT_TYPE, renderer.content_type())], body).into_response())
}

fn multipart_error(err: MultipartError, max_size: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ExtractionError::FileTooLarge {
            size: None,
            max: max_size,
        }
        .into();
    }
    tracing::error!("Failed to read multipart upload: {}", err);
    AppError::BadRequest(format!("Failed to read upload: {}", err.body_text()))
}
