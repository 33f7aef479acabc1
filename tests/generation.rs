//! Validates walk generation scenarios, grid invariants, and configuration handling

use catwalk::algorithm::generator::{Generation, GeneratorConfig, GeneratorOptions, generate};
use catwalk::algorithm::parts::Part;
use catwalk::algorithm::selection::RandomSelector;
use catwalk::algorithm::walk::place_walk;
use catwalk::spatial::GlyphGrid;

fn run(options: GeneratorOptions, seed: u64) -> Generation {
    let mut selector = RandomSelector::new(seed);
    match generate(options, &mut selector) {
        Ok(generation) => generation,
        Err(error) => unreachable!("generation failed: {error}"),
    }
}

fn find_parts(grid: &GlyphGrid, part: Part) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|&(_, cell)| cell == part)
        .map(|(position, _)| position)
        .collect()
}

fn head_count(grid: &GlyphGrid) -> usize {
    grid.cells().filter(|&(_, cell)| cell.is_head()).count()
}

#[test]
fn test_single_forced_step_caps_with_up_head() {
    // A 4x3 grid reserves its top row, so a forced-straight walk advances into
    // row 1 and must terminate there immediately
    for seed in 0..50 {
        let generation = run(
            GeneratorOptions {
                cat_chance: Some(0),
                left_chance: Some(0),
                right_chance: Some(0),
                straight_chance: Some(100),
                min_steps: Some(1),
                max_steps: Some(1),
                grid_width: Some(4),
                grid_height: Some(3),
            },
            seed,
        );

        let starts = find_parts(&generation.grid, Part::Start);
        assert_eq!(starts.len(), 1);
        let Some(&(x, y)) = starts.first() else {
            unreachable!("start position missing");
        };
        assert_eq!(y, 0);
        assert_eq!(generation.grid.at(x as i32, 1), Some(Part::HeadUp));
        assert_eq!(generation.grid.count(Part::Empty), 10);
    }
}

#[test]
fn test_zero_cat_chance_makes_exactly_one_walk() {
    for seed in 0..100 {
        let generation = run(
            GeneratorOptions {
                cat_chance: Some(0),
                ..Default::default()
            },
            seed,
        );
        assert_eq!(generation.walks_made, 1);
    }
}

#[test]
fn test_single_column_grid_degenerates_to_vertical_walks() {
    for seed in 0..100 {
        let generation = run(
            GeneratorOptions {
                grid_width: Some(1),
                grid_height: Some(9),
                ..Default::default()
            },
            seed,
        );
        for (_, cell) in generation.grid.cells() {
            assert!(
                matches!(
                    cell,
                    Part::Empty | Part::Start | Part::Vertical | Part::HeadUp | Part::HeadDown
                ),
                "unexpected part in single-column grid: {cell:?}"
            );
        }
    }
}

#[test]
fn test_walk_crosses_perpendicular_straight_run() {
    let config = GeneratorConfig {
        cat_chance: 0,
        left_chance: 0,
        right_chance: 0,
        straight_chance: 100,
        min_steps: 10,
        max_steps: 10,
        grid_width: 5,
        grid_height: 7,
    };

    let mut grid = GlyphGrid::new(config.grid_width, config.grid_height);
    for x in 0..5 {
        grid.set(x, 4, Part::Horizontal);
    }

    let mut selector = RandomSelector::new(11);
    let turn_weights = config.turn_weights();
    assert!(place_walk(&mut grid, &turn_weights, &config, &mut selector));

    let starts = find_parts(&grid, Part::Start);
    assert_eq!(starts.len(), 1);
    let Some(&(x, _)) = starts.first() else {
        unreachable!("start position missing");
    };
    let column = x as i32;

    // The intersecting cell became a junction and the walk kept going past it
    // to the next empty row within the same step
    assert_eq!(grid.at(column, 4), Some(Part::Cross));
    assert_eq!(grid.at(column, 5), Some(Part::HeadUp));
    assert_eq!(grid.count(Part::Cross), 1);
    assert_eq!(grid.count(Part::Horizontal), 4);
}

#[test]
fn test_occupied_cells_stay_in_bounds_and_below_top_row() {
    for seed in 0..200 {
        let generation = run(GeneratorOptions::default(), seed);
        let top = generation.grid.height() - 1;
        for ((_, y), cell) in generation.grid.cells() {
            if y == top {
                assert!(
                    cell == Part::Empty || cell.is_head(),
                    "non-head part in reserved top row: {cell:?}"
                );
            }
        }
    }
}

#[test]
fn test_each_walk_writes_one_start_and_one_head() {
    for seed in 0..200 {
        let generation = run(GeneratorOptions::default(), seed);
        let starts = generation.grid.count(Part::Start);
        let heads = head_count(&generation.grid);
        assert_eq!(starts, heads);
        if starts == 0 {
            // The first walk is counted even when seeding fails
            assert_eq!(generation.walks_made, 1);
        } else {
            assert_eq!(starts, generation.walks_made);
        }
    }
}

#[test]
fn test_generation_terminates_across_wild_configurations() {
    let mut selector = RandomSelector::new(99);
    for seed in 0..300 {
        let options = GeneratorOptions {
            cat_chance: Some(selector.range_inclusive(0, 100)),
            left_chance: Some(selector.range_inclusive(0, 80)),
            right_chance: Some(selector.range_inclusive(0, 80)),
            // Keeps at least one candidate positive so resolution succeeds
            straight_chance: Some(selector.range_inclusive(1, 80)),
            min_steps: Some(selector.range_inclusive(0, 50)),
            max_steps: Some(selector.range_inclusive(0, 120)),
            grid_width: Some(selector.range_inclusive(1, 30) as usize),
            grid_height: Some(selector.range_inclusive(2, 30) as usize),
        };
        let generation = run(options, seed);
        assert!(generation.walks_made >= 1);
    }
}

#[test]
fn test_weighted_choice_tracks_weight_ratios() {
    let weights = [1, 3, 6];
    let mut tallies = [0_u32; 3];
    let mut selector = RandomSelector::new(4242);

    let trials = 60_000;
    for _ in 0..trials {
        let index = selector.weighted_choice(&weights);
        if let Some(tally) = tallies.get_mut(index) {
            *tally += 1;
        }
    }

    let expected = [0.1, 0.3, 0.6];
    for (tally, share) in tallies.iter().zip(expected) {
        let observed = f64::from(*tally) / f64::from(trials);
        assert!(
            (observed - share).abs() < 0.015,
            "observed {observed}, expected {share}"
        );
    }
}

#[test]
fn test_all_zero_turn_weights_fail_resolution() {
    let mut selector = RandomSelector::new(1);
    let result = GeneratorOptions {
        left_chance: Some(0),
        right_chance: Some(0),
        straight_chance: Some(0),
        ..Default::default()
    }
    .resolve(&mut selector);
    let Err(error) = result else {
        unreachable!("all-zero turn weights must be rejected");
    };
    assert!(error.to_string().contains("turn chances"));
}

#[test]
fn test_degenerate_grid_and_chance_fail_resolution() {
    let mut selector = RandomSelector::new(1);
    assert!(
        GeneratorOptions {
            grid_height: Some(1),
            ..Default::default()
        }
        .resolve(&mut selector)
        .is_err()
    );
    assert!(
        GeneratorOptions {
            grid_width: Some(0),
            ..Default::default()
        }
        .resolve(&mut selector)
        .is_err()
    );
    assert!(
        GeneratorOptions {
            cat_chance: Some(101),
            ..Default::default()
        }
        .resolve(&mut selector)
        .is_err()
    );
}

#[test]
fn test_inverted_step_bounds_are_swapped() {
    let mut selector = RandomSelector::new(1);
    let config = match (GeneratorOptions {
        min_steps: Some(40),
        max_steps: Some(5),
        ..Default::default()
    }
    .resolve(&mut selector))
    {
        Ok(config) => config,
        Err(error) => unreachable!("resolution failed: {error}"),
    };
    assert_eq!(config.min_steps, 5);
    assert_eq!(config.max_steps, 40);
}

#[test]
fn test_default_resolution_draws_step_bounds() {
    for seed in 0..50 {
        let mut selector = RandomSelector::new(seed);
        let config = match GeneratorOptions::default().resolve(&mut selector) {
            Ok(config) => config,
            Err(error) => unreachable!("resolution failed: {error}"),
        };
        assert!((2..20).contains(&config.min_steps));
        assert!((30..60).contains(&config.max_steps));
        assert_eq!(config.grid_width, 16);
        assert_eq!(config.grid_height, 9);
        assert_eq!(config.cat_chance, 50);
    }
}

#[test]
fn test_walk_failure_leaves_grid_untouched() {
    // A fully occupied lower half leaves no legal seed, so placement fails
    let config = GeneratorConfig {
        cat_chance: 0,
        left_chance: 50,
        right_chance: 50,
        straight_chance: 50,
        min_steps: 3,
        max_steps: 6,
        grid_width: 4,
        grid_height: 6,
    };
    let mut grid = GlyphGrid::new(4, 6);
    for x in 0..4 {
        for y in 0..3 {
            grid.set(x, y, Part::Cross);
        }
    }
    let snapshot = grid.to_string();

    let mut selector = RandomSelector::new(5);
    let turn_weights = config.turn_weights();
    assert!(!place_walk(&mut grid, &turn_weights, &config, &mut selector));
    assert_eq!(grid.to_string(), snapshot);
}
