//! Generation defaults and runtime tuning constants

// Generation defaults
/// Percent chance of attempting another walk after a successful one
pub const DEFAULT_CAT_CHANCE: u32 = 50;
/// Default relative weight for each turn candidate
pub const DEFAULT_TURN_CHANCE: u32 = 50;
/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 16;
/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 9;
/// Half-open range the default minimum step count is drawn from
pub const DEFAULT_MIN_STEPS_RANGE: (u32, u32) = (2, 20);
/// Half-open range the default maximum step count is drawn from
pub const DEFAULT_MAX_STEPS_RANGE: (u32, u32) = (30, 60);

// Walk placement
/// Attempts to find a free seed cell before abandoning a walk
pub const SEED_ATTEMPTS: usize = 5;

// Bonus sprite easter egg
/// Chance that a run searches for a bonus sprite position at all
pub const BONUS_SEARCH_CHANCE: f64 = 0.005;
/// Per-candidate chance of accepting a free cell pair for the bonus sprite
pub const BONUS_CELL_CHANCE: f64 = 0.0001;

// Rendering
/// Maximum absolute silhouette shadow offset in pixels
pub const SILHOUETTE_OFFSET: i32 = 3;
/// Chance of applying random color transforms to the composited image
pub const COLOR_TRANSFORM_CHANCE: f64 = 0.9;

// Output settings
/// Prefix for numbered output filenames
pub const OUTPUT_PREFIX: &str = "catwalk_";
