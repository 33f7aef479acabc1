//! Maze-cat glyph generation: biased random walks laid on a grid and rendered as pixel art
//!
//! Each walk starts from a tail glyph, wanders the grid with configurable turning
//! probabilities, crosses perpendicular segments it meets, and ends in a directional
//! head. The resulting grid renders to an image through per-part sprite tiles, or to
//! text through box-drawing characters.

#![forbid(unsafe_code)]

/// Walk placement, turn selection, and generation orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid storage and text rendering
pub mod spatial;

pub use io::error::{CatwalkError, Result};
