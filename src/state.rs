//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::mindmap::{GraphRenderer, ReactFlowJson};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    extractor: TextExtractor,
    renderer: Arc<dyn GraphRenderer>,
}

impl AppState {
    /// Create application state with the MuPDF extractor and JSON renderer
    pub fn new(config: Config) -> Self {
        let extractor = TextExtractor::with_mupdf(config.upload.max_file_size);
        Self::with_parts(config, extractor, Arc::new(ReactFlowJson))
    }

    pub fn with_parts(
        config: Config,
        extractor: TextExtractor,
        renderer: Arc<dyn GraphRenderer>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                extractor,
                renderer,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the text extractor
    pub fn extractor(&self) -> &TextExtractor {
        &self.inner.extractor
    }

    /// Get the graph renderer
    pub fn renderer(&self) -> &dyn GraphRenderer {
        self.inner.renderer.as_ref()
    }
}
