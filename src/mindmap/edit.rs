//! Graph edits
//!
//! Applies the changes a diagram client reports (drag, delete, connect) to a
//! mind map it sent back. Edits never touch a generated map in place; the
//! caller owns the copy being edited.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Edge, MindMap, Position};

/// Edit errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

/// A single client-side change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GraphChange {
    /// Node dragged to a new position
    Position { id: String, position: Position },
    /// Node deleted, together with its edges
    Remove { id: String },
    /// New edge drawn between two nodes
    Connect { source: String, target: String },
}

impl MindMap {
    /// Move node `id` to `position`
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), EditError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| EditError::NodeNotFound(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Remove node `id` and every edge touching it
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditError> {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return Err(EditError::NodeNotFound(id.to_string()));
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Connect `source` to `target`
    ///
    /// Returns `false` without adding anything if the same connection
    /// already exists.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<bool, EditError> {
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(EditError::NodeNotFound(id.to_string()));
            }
        }

        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Ok(false);
        }

        let id = format!("reactflow__edge-{}-{}", source, target);
        self.edges.push(Edge::with_id(id, source, target));
        Ok(true)
    }
}

/// Apply `changes` in order, stopping at the first invalid one
pub fn apply_changes(mut map: MindMap, changes: &[GraphChange]) -> Result<MindMap, EditError> {
    for change in changes {
        match change {
            GraphChange::Position { id, position } => map.move_node(id, *position)?,
            GraphChange::Remove { id } => map.remove_node(id)?,
            GraphChange::Connect { source, target } => {
                map.connect(source, target)?;
            }
        }
    }
    Ok(map)
}
