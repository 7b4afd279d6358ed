//! Graph rendering
//!
//! The diagram surface is an external client; the server only hands it a
//! representation it can draw and edit.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::upload::SkippedPage;

use super::types::MindMap;

/// What is known about the document a map was generated from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub file_name: String,
    pub export_name: String,
    pub document_id: String,
    pub page_count: usize,
    pub skipped_pages: Vec<SkippedPage>,
    pub generated_at: DateTime<Utc>,
}

/// Renders a mind map for a diagram client
pub trait GraphRenderer: Send + Sync {
    /// MIME type of the rendered output
    fn content_type(&self) -> &'static str;

    /// Render `map`, annotated with `source` when it came from an upload
    fn render(
        &self,
        map: &MindMap,
        source: Option<&SourceInfo>,
    ) -> Result<Vec<u8>, serde_json::Error>;
}

/// React Flow compatible `{nodes, edges}` JSON
///
/// Source fields, when present, sit next to `nodes` and `edges` at the top
/// level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactFlowJson;

#[derive(Serialize)]
struct ReactFlowBody<'a> {
    #[serde(flatten)]
    source: Option<&'a SourceInfo>,
    #[serde(flatten)]
    map: &'a MindMap,
}

impl GraphRenderer for ReactFlowJson {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(
        &self,
        map: &MindMap,
        source: Option<&SourceInfo>,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&ReactFlowBody { source, map })
    }
}
