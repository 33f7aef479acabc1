/// Command-line interface and batch orchestration
pub mod cli;
/// Generation defaults and tuning constants
pub mod configuration;
/// Error types for generation and rendering
pub mod error;
/// Sprite loading, grid compositing, and PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Caption text generation
pub mod status;
