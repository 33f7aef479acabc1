/// Configuration resolution and multi-walk generation
pub mod generator;
/// Glyph parts, facings, and the facing × turn move table
pub mod parts;
/// Seeded random selection utilities
pub mod selection;
/// Single-walk placement on the grid
pub mod walk;

pub use generator::{Generation, GeneratorConfig, GeneratorOptions, generate};
pub use parts::{Direction, Part, Turn};
pub use selection::RandomSelector;
