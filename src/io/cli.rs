//! Command-line interface for generating maze-cat images
//!
//! With a sprite directory the processor writes numbered PNGs and prints a
//! caption per image; without one it prints the grid as box-drawing text, which
//! needs no assets at all.

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::generator::{GeneratorOptions, generate};
use crate::algorithm::parts::Part;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{BONUS_CELL_CHANCE, BONUS_SEARCH_CHANCE, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::{SpriteSheet, export_png};
use crate::io::progress::ProgressManager;
use crate::io::status::make_status;
use crate::spatial::GlyphGrid;

#[derive(Parser)]
#[command(name = "catwalk")]
#[command(author, version, about = "Generate maze-cat glyph patterns")]
/// Command-line arguments for the generation tool
pub struct Cli {
    /// Directory of sprite tiles; omit to print grids as text
    #[arg(short = 'd', long, value_name = "DIR")]
    pub sprites: Option<PathBuf>,

    /// Output directory for rendered images (defaults to the system temp dir)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of images to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Roll production-style random parameters for every image
    #[arg(short, long)]
    pub randomize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Percent chance of adding another walk after a successful one
    #[arg(long, value_name = "PCT")]
    pub cat_chance: Option<u32>,

    /// Relative weight of left turns
    #[arg(long, value_name = "WEIGHT")]
    pub left: Option<u32>,

    /// Relative weight of right turns
    #[arg(long, value_name = "WEIGHT")]
    pub right: Option<u32>,

    /// Relative weight of continuing straight
    #[arg(long, value_name = "WEIGHT")]
    pub straight: Option<u32>,

    /// Minimum steps per walk
    #[arg(long, value_name = "N")]
    pub min_steps: Option<u32>,

    /// Maximum steps per walk
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u32>,

    /// Grid width in cells
    #[arg(long, value_name = "CELLS")]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(long, value_name = "CELLS")]
    pub height: Option<usize>,
}

/// Orchestrates batch generation with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = (!cli.quiet).then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate all requested images
    ///
    /// # Errors
    ///
    /// Returns an error if the sprite sheet fails to load, the configured
    /// parameters are invalid, or an image cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let sheet = self.cli.sprites.as_deref().map(SpriteSheet::load).transpose()?;
        let output_dir = self.cli.output.clone().unwrap_or_else(std::env::temp_dir);
        let mut selector = match self.cli.seed {
            Some(seed) => RandomSelector::new(seed),
            None => RandomSelector::from_os_entropy(),
        };

        if let Some(ref mut pm) = self.progress {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_one(index, sheet.as_ref(), &output_dir, &mut selector)?;
            if let Some(ref pm) = self.progress {
                pm.complete_image();
            }
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn options(&self, selector: &mut RandomSelector) -> GeneratorOptions {
        if self.cli.randomize {
            randomized_options(selector)
        } else {
            GeneratorOptions {
                cat_chance: self.cli.cat_chance,
                left_chance: self.cli.left,
                right_chance: self.cli.right,
                straight_chance: self.cli.straight,
                min_steps: self.cli.min_steps,
                max_steps: self.cli.max_steps,
                grid_width: self.cli.width,
                grid_height: self.cli.height,
            }
        }
    }

    #[allow(clippy::print_stdout)]
    fn generate_one(
        &self,
        index: usize,
        sheet: Option<&SpriteSheet>,
        output_dir: &std::path::Path,
        selector: &mut RandomSelector,
    ) -> Result<()> {
        let options = self.options(selector);
        let generation = generate(options, selector)?;

        match sheet {
            Some(sheet) => {
                let bonus = if sheet.has_bonus() {
                    find_bonus_position(&generation.grid, selector)
                } else {
                    None
                };
                let image = sheet.render(&generation.grid, bonus, selector);
                let path = output_dir.join(format!("{OUTPUT_PREFIX}{index}.png"));
                export_png(&image, &path)?;

                let count = generation.walks_made + usize::from(bonus.is_some());
                let status = make_status(count, selector);
                println!("{status} {}", path.display());
            }
            None => {
                let status = make_status(generation.walks_made, selector);
                println!("{status}");
                print!("{}", generation.grid);
            }
        }

        Ok(())
    }
}

/// Rarely, pick a pair of horizontally adjacent empty cells for a bonus sprite
///
/// Returns screen-space coordinates (x, row-from-top). Most runs skip the
/// search entirely; most searches come up empty.
fn find_bonus_position(grid: &GlyphGrid, selector: &mut RandomSelector) -> Option<(usize, usize)> {
    if selector.unit() >= BONUS_SEARCH_CHANCE {
        return None;
    }
    let height = grid.height();
    for screen_y in 0..height {
        for x in 0..grid.width().saturating_sub(1) {
            let row = height - screen_y - 1;
            if grid.part(x, row) == Part::Empty
                && grid.part(x + 1, row) == Part::Empty
                && selector.unit() < BONUS_CELL_CHANCE
            {
                return Some((x, screen_y));
            }
        }
    }
    None
}

/// Production-style parameter rolls with occasional oversized grids
fn randomized_options(selector: &mut RandomSelector) -> GeneratorOptions {
    let size = multiplier_roll(selector, 0.008, 0.02);
    let wide = multiplier_roll(selector, 0.015, 0.045);
    let tall = multiplier_roll(selector, 0.015, 0.045);

    let cat_chance = selector
        .weighted_pick(&[(80, 10), (90, 5), (100, 10)])
        .copied()
        .unwrap_or(80);

    let min_mid = selector.range(5, 15);
    let min_steps = selector
        .weighted_pick(&[(1, 1), (min_mid, 20), (50, 1)])
        .copied()
        .unwrap_or(min_mid);

    let max_mid = selector.range(30, 60);
    let max_steps = selector
        .weighted_pick(&[(1, 1), (max_mid, 20), (100, 1)])
        .copied()
        .unwrap_or(max_mid);

    let left_chance = turn_roll(selector);
    let right_chance = turn_roll(selector);
    let mut straight_chance = turn_roll(selector);
    // A 0/0/0 roll cannot walk at all; keep one candidate alive
    if left_chance == 0 && right_chance == 0 && straight_chance == 0 {
        straight_chance = 50;
    }

    GeneratorOptions {
        cat_chance: Some(cat_chance),
        left_chance: Some(left_chance),
        right_chance: Some(right_chance),
        straight_chance: Some(straight_chance),
        min_steps: Some(min_steps),
        max_steps: Some(max_steps),
        grid_width: Some(16 * size * wide),
        grid_height: Some(9 * size * tall),
    }
}

/// One turn-weight roll: usually balanced, rarely absent or wild
fn turn_roll(selector: &mut RandomSelector) -> u32 {
    let wild = selector.range(50, 100);
    selector
        .weighted_pick(&[(0, 1), (50, 20), (wild, 10)])
        .copied()
        .unwrap_or(50)
}

fn multiplier_roll(selector: &mut RandomSelector, triple: f64, double: f64) -> usize {
    let roll = selector.unit();
    if roll < triple {
        3
    } else if roll < double {
        2
    } else {
        1
    }
}
