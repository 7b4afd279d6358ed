//! Mindmap Server Library
//!
//! Converts an uploaded PDF into a radial mind map: page text is decoded with
//! MuPDF, split into key phrases and placed around a central root node.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `upload`: Uploaded file representation and validation
//! - `extract`: Page text extraction from validated uploads
//! - `mindmap`: Phrase extraction, labels, radial layout, edits, rendering
//! - `document`: Decoding traits the extractor depends on
//! - `formats`: MuPDF-backed implementation of those traits
//! - `routes`: HTTP endpoints

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod formats;
pub mod mindmap;
pub mod routes;
pub mod state;
pub mod upload;

// MuPDF bindings are only reached through `formats`
mod mupdf;

#[cfg(test)]
mod test_support;
