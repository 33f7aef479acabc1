//! Configuration resolution and multi-walk generation
//!
//! Callers hand in a partial [`GeneratorOptions`]; unset fields fall back to
//! defaults, two of which (the step bounds) are themselves drawn at random.
//! Resolution fails fast on configurations that could never produce a walk, so
//! the grid is never touched by an invalid run.

use std::mem;

use crate::algorithm::parts::Turn;
use crate::algorithm::selection::RandomSelector;
use crate::algorithm::walk::place_walk;
use crate::io::configuration::{
    DEFAULT_CAT_CHANCE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MAX_STEPS_RANGE,
    DEFAULT_MIN_STEPS_RANGE, DEFAULT_TURN_CHANCE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::GlyphGrid;

/// Caller-facing partial configuration; every field is optional
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratorOptions {
    /// Percent chance of attempting another walk after a successful one
    pub cat_chance: Option<u32>,
    /// Relative weight of left turns; zero removes the candidate
    pub left_chance: Option<u32>,
    /// Relative weight of right turns; zero removes the candidate
    pub right_chance: Option<u32>,
    /// Relative weight of continuing straight; zero removes the candidate
    pub straight_chance: Option<u32>,
    /// Minimum steps per walk
    pub min_steps: Option<u32>,
    /// Maximum steps per walk
    pub max_steps: Option<u32>,
    /// Grid width in cells
    pub grid_width: Option<usize>,
    /// Grid height in cells, at least two
    pub grid_height: Option<usize>,
}

impl GeneratorOptions {
    /// Merge over defaults and validate into a runnable configuration
    ///
    /// Inverted step bounds are swapped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when every turn weight is zero, the grid is
    /// degenerate, or `cat_chance` is not a percentage.
    pub fn resolve(self, selector: &mut RandomSelector) -> Result<GeneratorConfig> {
        let cat_chance = self.cat_chance.unwrap_or(DEFAULT_CAT_CHANCE);
        if cat_chance > 100 {
            return Err(invalid_parameter(
                "cat_chance",
                &cat_chance,
                &"must be a percentage in [0, 100]",
            ));
        }

        let left_chance = self.left_chance.unwrap_or(DEFAULT_TURN_CHANCE);
        let right_chance = self.right_chance.unwrap_or(DEFAULT_TURN_CHANCE);
        let straight_chance = self.straight_chance.unwrap_or(DEFAULT_TURN_CHANCE);
        if left_chance == 0 && right_chance == 0 && straight_chance == 0 {
            return Err(invalid_parameter(
                "turn chances",
                &"0/0/0",
                &"at least one of left, right, or straight must be positive",
            ));
        }

        let (min_low, min_high) = DEFAULT_MIN_STEPS_RANGE;
        let (max_low, max_high) = DEFAULT_MAX_STEPS_RANGE;
        let mut min_steps = self
            .min_steps
            .unwrap_or_else(|| selector.range(min_low, min_high));
        let mut max_steps = self
            .max_steps
            .unwrap_or_else(|| selector.range(max_low, max_high));
        if min_steps > max_steps {
            mem::swap(&mut min_steps, &mut max_steps);
        }

        let grid_width = self.grid_width.unwrap_or(DEFAULT_GRID_WIDTH);
        if grid_width == 0 {
            return Err(invalid_parameter(
                "grid_width",
                &grid_width,
                &"needs at least one column",
            ));
        }
        let grid_height = self.grid_height.unwrap_or(DEFAULT_GRID_HEIGHT);
        if grid_height < 2 {
            return Err(invalid_parameter(
                "grid_height",
                &grid_height,
                &"needs at least two rows to fit a head above the tail",
            ));
        }

        Ok(GeneratorConfig {
            cat_chance,
            left_chance,
            right_chance,
            straight_chance,
            min_steps,
            max_steps,
            grid_width,
            grid_height,
        })
    }
}

/// Fully resolved configuration for one generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Percent chance of attempting another walk after a successful one
    pub cat_chance: u32,
    /// Relative weight of left turns
    pub left_chance: u32,
    /// Relative weight of right turns
    pub right_chance: u32,
    /// Relative weight of continuing straight
    pub straight_chance: u32,
    /// Minimum steps per walk (inclusive)
    pub min_steps: u32,
    /// Maximum steps per walk (inclusive)
    pub max_steps: u32,
    /// Grid width in cells
    pub grid_width: usize,
    /// Grid height in cells
    pub grid_height: usize,
}

impl GeneratorConfig {
    /// Turn candidates with positive weight, in evaluation order
    pub fn turn_weights(&self) -> Vec<(Turn, u32)> {
        let mut weights = Vec::with_capacity(3);
        if self.straight_chance > 0 {
            weights.push((Turn::Forward, self.straight_chance));
        }
        if self.left_chance > 0 {
            weights.push((Turn::Left, self.left_chance));
        }
        if self.right_chance > 0 {
            weights.push((Turn::Right, self.right_chance));
        }
        weights
    }
}

/// Artifacts of one generation run
#[derive(Debug)]
pub struct Generation {
    /// Final glyph grid, ready for rendering
    pub grid: GlyphGrid,
    /// Number of walks counted; the first walk counts even when seeding failed
    pub walks_made: usize,
    /// The configuration the run actually used
    pub config: GeneratorConfig,
}

/// Generate a glyph grid: one walk, then more while the coin and the grid allow
///
/// # Errors
///
/// Returns `InvalidParameter` when the options resolve to a configuration
/// that could never produce a walk; see [`GeneratorOptions::resolve`].
pub fn generate(options: GeneratorOptions, selector: &mut RandomSelector) -> Result<Generation> {
    let config = options.resolve(selector)?;
    let turn_weights = config.turn_weights();
    let mut grid = GlyphGrid::new(config.grid_width, config.grid_height);

    let mut last_succeeded = place_walk(&mut grid, &turn_weights, &config, selector);
    let mut walks_made = 1;

    while selector.percent(config.cat_chance) && last_succeeded {
        last_succeeded = place_walk(&mut grid, &turn_weights, &config, selector);
        if last_succeeded {
            walks_made += 1;
        }
    }

    Ok(Generation {
        grid,
        walks_made,
        config,
    })
}
