//! Radial layout generator
//!
//! Places every key phrase on a circle around the document root. Phrases of
//! one page are spread evenly around the circle; each page is rotated by a
//! further π/4 so pages don't all start at the same angle.

use std::f64::consts::PI;

use super::phrases::extract_phrases;
use super::sanitize::sanitize_label;
use super::types::{Edge, MindMap, Node, NodeStyle, Position, ROOT_ID, ROOT_LABEL};

/// Distance of phrase nodes from the root
pub const LAYOUT_RADIUS: f64 = 300.0;

/// Angular offset added per page
pub const PAGE_ANGLE_OFFSET: f64 = PI / 4.0;

/// Build a mind map from ordered page text
pub fn generate_mind_map(pages: &[String]) -> MindMap {
    let mut builder = MindMapBuilder::new();
    for text in pages {
        builder.add_page(text);
    }
    builder.finish()
}

/// Running state for one generation
///
/// Owns the node counter and page index so that separate generations never
/// share state.
#[derive(Debug)]
pub struct MindMapBuilder {
    map: MindMap,
    last_id: u64,
    page_index: usize,
}

impl MindMapBuilder {
    /// Start a map containing only the root
    pub fn new() -> Self {
        let root = Node::new(ROOT_ID, Position::default(), ROOT_LABEL, NodeStyle::root());
        Self {
            map: MindMap {
                nodes: vec![root],
                edges: Vec::new(),
            },
            last_id: 0,
            page_index: 0,
        }
    }

    /// Add the key phrases of one page
    ///
    /// The page index advances even when the page yields no phrases.
    pub fn add_page(&mut self, text: &str) {
        let phrases = extract_phrases(text);
        let count = phrases.len();

        for (index, phrase) in phrases.iter().enumerate() {
            let angle = phrase_angle(index, count, self.page_index);
            self.last_id += 1;
            let id = self.last_id.to_string();

            self.map.edges.push(Edge::between(ROOT_ID, &id));
            self.map.nodes.push(Node::new(
                id,
                Position::new(LAYOUT_RADIUS * angle.cos(), LAYOUT_RADIUS * angle.sin()),
                sanitize_label(phrase),
                NodeStyle::phrase(),
            ));
        }

        self.page_index += 1;
    }

    pub fn finish(self) -> MindMap {
        tracing::debug!(
            pages = self.page_index,
            node_count = self.map.nodes.len(),
            "Mind map generated"
        );
        self.map
    }
}

impl Default for MindMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Angle of phrase `index` out of `count` on page `page_index`
///
/// Only called with `count > 0`.
fn phrase_angle(index: usize, count: usize, page_index: usize) -> f64 {
    (2.0 * PI / count as f64) * index as f64 + page_index as f64 * PAGE_ANGLE_OFFSET
}
