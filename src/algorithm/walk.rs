//! Single-walk placement: seed search, constrained stepping, and termination
//!
//! A walk seeds in the lower half of the grid, faces up, and steps until its
//! step budget runs out or no legal turn remains, then caps itself with a head
//! glyph facing its final direction. The top grid row is never entered by a
//! step so the head always has room.

use crate::algorithm::generator::GeneratorConfig;
use crate::algorithm::parts::{Direction, Part, Turn};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::SEED_ATTEMPTS;
use crate::spatial::GlyphGrid;

/// Place one walk on the grid
///
/// Returns false when no free seed cell is found within the bounded attempt
/// budget; the grid is untouched in that case. A walk that seeds but finds no
/// legal first step still terminates normally with a head above its tail.
pub fn place_walk(
    grid: &mut GlyphGrid,
    turn_weights: &[(Turn, u32)],
    config: &GeneratorConfig,
    selector: &mut RandomSelector,
) -> bool {
    let mut seed = None;
    for _ in 0..SEED_ATTEMPTS {
        let x = selector.below(grid.width()) as i32;
        let y = selector.below(grid.height() / 2) as i32;
        // The tail needs its first live cell directly above it
        if grid.is_empty_at(x, y) && grid.is_empty_at(x, y + 1) {
            seed = Some((x, y));
            break;
        }
    }
    let Some((mut x, mut y)) = seed else {
        return false;
    };

    grid.set(x, y, Part::Start);
    y += 1;
    let mut facing = Direction::Up;

    let mut steps_left = selector.range_inclusive(config.min_steps, config.max_steps);

    loop {
        let candidates: Vec<(Turn, u32)> = turn_weights
            .iter()
            .copied()
            .filter(|&(turn, _)| step_is_open(grid, x, y, facing, turn))
            .collect();
        if candidates.is_empty() {
            break;
        }

        let weights: Vec<u32> = candidates.iter().map(|&(_, weight)| weight).collect();
        let Some(&(turn, _)) = candidates.get(selector.weighted_choice(&weights)) else {
            break;
        };

        let step = facing.candidate(turn);
        grid.set(x, y, step.part);
        x += step.dx;
        y += step.dy;
        facing = facing.turned(turn);

        // A non-empty landing cell can only be a perpendicular straight the
        // filter already approved; convert it and keep moving forward until
        // empty space. Anything else is an invariant violation: warn and end
        // the step rather than abort the whole generation.
        loop {
            match grid.at(x, y) {
                Some(Part::Empty) => break,
                Some(part) if part == facing.crossable() => {
                    grid.set(x, y, Part::Cross);
                    let forward = facing.candidate(Turn::Forward);
                    x += forward.dx;
                    y += forward.dy;
                }
                found => {
                    warn_unexpected_cell(x, y, found);
                    break;
                }
            }
        }

        steps_left = steps_left.saturating_sub(1);
        if steps_left == 0 {
            break;
        }
    }

    grid.set(x, y, facing.head());
    true
}

/// Whether taking `turn` from `(x, y)` leads somewhere legal
///
/// A destination is filtered out when it leaves the grid or touches the
/// reserved top row, when it is occupied and the move is not straight on, or
/// when scanning onward along the move's own direction hits anything other
/// than perpendicular straights before reaching an empty cell.
fn step_is_open(grid: &GlyphGrid, x: i32, y: i32, facing: Direction, turn: Turn) -> bool {
    let step = facing.candidate(turn);
    let nx = x + step.dx;
    let ny = y + step.dy;

    let width = grid.width() as i32;
    let height = grid.height() as i32;
    if nx < 0 || nx >= width || ny < 0 || ny >= height - 1 {
        return false;
    }

    if !grid.is_empty_at(nx, ny) && turn != Turn::Forward {
        return false;
    }

    let crossable = facing.turned(turn).crossable();
    let mut cx = x;
    let mut cy = y;
    loop {
        cx += step.dx;
        cy += step.dy;
        match grid.at(cx, cy) {
            Some(Part::Empty) => return true,
            Some(part) if part == crossable => {}
            _ => return false,
        }
    }
}

#[allow(clippy::print_stderr)]
fn warn_unexpected_cell(x: i32, y: i32, found: Option<Part>) {
    match found {
        Some(part) => eprintln!("Warning: expected an empty cell at ({x}, {y}), found {part:?}"),
        None => eprintln!("Warning: walk left the grid at ({x}, {y}) while crossing"),
    }
}
