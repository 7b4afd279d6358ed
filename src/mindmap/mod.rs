//! Mind map generation
//!
//! Turns ordered page text into a one-level tree: a fixed root node and one
//! node per key phrase, laid out radially.
//!
//! ```text
//!   page text ──► extract_phrases ──► sanitize_label ──► MindMapBuilder
//!                                                           │
//!                                               MindMap { nodes, edges }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use mindmap_server::mindmap::generate_mind_map;
//!
//! let map = generate_mind_map(&["A sentence long enough to keep.".to_string()]);
//! assert_eq!(map.nodes.len(), 2);
//! assert_eq!(map.edges[0].id, "e0-1");
//! ```

mod edit;
mod layout;
mod phrases;
mod render;
mod sanitize;
mod types;

pub use edit::{apply_changes, EditError, GraphChange};
pub use layout::{generate_mind_map, MindMapBuilder, LAYOUT_RADIUS, PAGE_ANGLE_OFFSET};
pub use phrases::{extract_phrases, is_key_phrase, MAX_PHRASES_PER_PAGE, MAX_PHRASE_CHARS, MIN_PHRASE_CHARS};
pub use render::{GraphRenderer, ReactFlowJson, SourceInfo};
pub use sanitize::{sanitize_label, MAX_LABEL_CHARS};
pub use types::{Edge, EdgeStyle, MindMap, Node, NodeData, NodeStyle, Position, ROOT_ID, ROOT_LABEL};
