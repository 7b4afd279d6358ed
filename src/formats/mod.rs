//! Format-specific document implementations
//!
//! Implementations of the `document` traits for concrete formats. These wrap
//! the lower-level MuPDF bindings.

pub mod pdf;
