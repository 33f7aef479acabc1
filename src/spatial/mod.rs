//! Grid storage for glyph patterns
//!
//! The grid owns one [`Part`](crate::algorithm::parts::Part) per cell and is the
//! only shared state between walks. Rendering consumers read it after generation.

/// Glyph grid storage and text rendering
pub mod grid;

pub use grid::GlyphGrid;
