use std::collections::HashSet;

use duo_life::duolife::Board;
use duo_life::{DuoLife, DuoLifeConfig};
use rand::Rng;
use rand::SeedableRng;

fn life(width: usize, height: usize, dual: bool) -> DuoLife {
    DuoLife::with_config(
        DuoLifeConfig::default()
            .width(width)
            .height(height)
            .dual_unit(dual),
    )
}

fn collect_live(engine: &DuoLife) -> HashSet<(usize, usize)> {
    let mut out = HashSet::new();
    engine.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn assert_alive(engine: &DuoLife, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(engine.get_cell(x, y), "expected alive at ({x},{y})");
    }
}

fn assert_dead(engine: &DuoLife, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(!engine.get_cell(x, y), "expected dead at ({x},{y})");
    }
}

/// Per-cell reference with the engine's edge rules: rows 0 and
/// `height - 1` are not recomputed, columns 0 and `width - 1` die.
fn step_naive(board: &Board) -> Vec<Vec<bool>> {
    let (width, height) = (board.width(), board.height());
    let mut next = vec![vec![false; width]; height];
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut neighbors = 0;
            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    if (nx, ny) != (x, y) && board.get(nx, ny) {
                        neighbors += 1;
                    }
                }
            }
            let alive = board.get(x, y);
            next[y][x] = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
        }
    }
    next
}

fn assert_interior_matches(engine: &DuoLife, expected: &[Vec<bool>]) {
    let board = engine.board();
    for y in 1..board.height() - 1 {
        for x in 0..board.width() {
            assert_eq!(
                board.get(x, y),
                expected[y][x],
                "cell ({x},{y}) at generation {}",
                engine.generation()
            );
        }
    }
}

fn seed_sparse(engine: &mut DuoLife, rng: &mut rand::rngs::StdRng, density: f64) {
    let (width, height) = (engine.width(), engine.height());
    for y in 1..height - 1 {
        for x in 0..width {
            if rng.random::<f64>() < density {
                engine.set_cell(x, y, true);
            }
        }
    }
}

#[test]
fn block_is_stable() {
    for dual in [false, true] {
        let mut engine = life(64, 16, dual);
        engine.load_rle(2, 2, "2o$2o!", None).unwrap();
        let before = engine.board().clone();

        engine.step();

        assert_eq!(engine.board(), &before);
        assert_eq!(engine.generation(), 1);
    }
}

#[test]
fn blinker_alternates_for_several_generations() {
    let mut engine = life(64, 16, true);
    engine.load_rle(3, 1, "3o!", Some(1)).unwrap();
    // Row (16 - 1) / 2 = 7, columns 32..=34.
    let horizontal = [(32, 7), (33, 7), (34, 7)];
    let vertical = [(33, 6), (33, 7), (33, 8)];
    assert_alive(&engine, &horizontal);

    for generation in 1..=6 {
        engine.step();
        if generation % 2 == 1 {
            assert_alive(&engine, &vertical);
            assert_dead(&engine, &[(32, 7), (34, 7)]);
        } else {
            assert_alive(&engine, &horizontal);
            assert_dead(&engine, &[(33, 6), (33, 8)]);
        }
        assert_eq!(engine.population(), 3);
    }
}

#[test]
fn glider_moves_down_right_every_four_steps() {
    let mut engine = life(96, 40, true);
    engine.load_rle(3, 3, "bo$2bo$3o!", Some(1)).unwrap();
    // Top row (40 - 3) / 2 = 18, left edge column 32.
    let glider: Vec<(usize, usize)> = vec![(33, 18), (34, 19), (32, 20), (33, 20), (34, 20)];
    assert_eq!(collect_live(&engine), glider.iter().copied().collect());

    engine.step_n(4);

    let shifted: HashSet<(usize, usize)> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(collect_live(&engine), shifted);
}

#[test]
fn glider_crosses_the_unit_split() {
    // Split row is 16; the glider starts in unit A's band and ends in B's.
    let mut engine = life(64, 32, true);
    for &(x, y) in &[(11, 10), (12, 11), (10, 12), (11, 12), (12, 12)] {
        engine.set_cell(x, y, true);
    }
    engine.step_n(40);
    let expected: HashSet<(usize, usize)> = [(21, 20), (22, 21), (20, 22), (21, 22), (22, 22)]
        .into_iter()
        .collect();
    assert_eq!(collect_live(&engine), expected);
}

#[test]
fn matches_naive_on_random_sparse_boards() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xBADC0FFEE);
    for &(width, height, density) in &[
        (32usize, 12usize, 0.05),
        (64, 20, 0.08),
        (96, 33, 0.03),
        (160, 40, 0.15),
        (64, 17, 0.42),
    ] {
        let mut engine = life(width, height, true);
        seed_sparse(&mut engine, &mut rng, density);
        for _ in 0..8 {
            let expected = step_naive(engine.board());
            engine.step();
            assert_interior_matches(&engine, &expected);
        }
    }
}

#[test]
fn dual_unit_matches_single_unit() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xD37E_A515);
    for &(width, height) in &[(32usize, 3usize), (64, 4), (96, 31), (320, 240)] {
        let mut dual = life(width, height, true);
        let mut single = life(width, height, false);
        for y in 0..height {
            for x in 0..width {
                if rng.random::<f64>() < 0.3 {
                    dual.set_cell(x, y, true);
                    single.set_cell(x, y, true);
                }
            }
        }

        for _ in 0..12 {
            dual.step();
            single.step();
            assert_eq!(dual.board(), single.board());
            assert_eq!(dual.dirty_rows(), single.dirty_rows());
        }
    }
}

#[test]
fn boundary_rows_never_change() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x0B0D_E55E);
    let mut engine = life(64, 24, true);
    seed_sparse(&mut engine, &mut rng, 0.45);
    let width_in_words = engine.width_in_words();
    for _ in 0..30 {
        engine.step();
        let board = engine.board();
        assert!(board.row(0).iter().all(|&w| w == 0));
        assert!(board.row(23).iter().all(|&w| w == 0));
        assert_eq!(board.row(0).len(), width_in_words);
        assert!(!engine.dirty_rows()[0]);
        assert!(!engine.dirty_rows()[23]);
    }
}

#[test]
fn edge_columns_die_after_one_generation() {
    let mut engine = life(32, 8, true);
    // Vertical bars on both edges would survive on an unbounded grid.
    for y in 2..6 {
        engine.set_cell(0, y, true);
        engine.set_cell(1, y, true);
        engine.set_cell(31, y, true);
        engine.set_cell(30, y, true);
    }
    engine.step();
    for y in 0..8 {
        assert!(!engine.get_cell(0, y));
        assert!(!engine.get_cell(31, y));
    }
}

#[test]
fn static_rows_are_clean_from_second_generation() {
    let mut engine = life(64, 16, true);
    engine.load_rle(2, 2, "2o$2o!", None).unwrap();
    engine.step();
    // The destination started empty, so the block rows differ once.
    assert!(engine.dirty_rows()[7]);
    assert!(engine.dirty_rows()[8]);
    assert!(!engine.dirty_rows()[3]);

    for _ in 2..=8 {
        engine.step();
        assert!(engine.dirty_rows().iter().all(|&d| !d));
    }
}

/// Dirty flags compare against the board from two generations back, so a
/// period-2 oscillator looks unchanged once both buffers hold one phase each.
/// This pins that behavior: the blinker flips every generation, yet no row is
/// flagged after generation 1.
#[test]
fn period_two_oscillator_is_not_flagged_after_first_generation() {
    let mut engine = life(64, 16, true);
    engine.load_rle(3, 1, "3o!", Some(1)).unwrap();

    engine.step();
    assert_eq!(
        (6..=8).map(|y| engine.dirty_rows()[y]).collect::<Vec<_>>(),
        vec![true, true, true]
    );

    let mut previous = engine.board().clone();
    for _ in 2..=8 {
        engine.step();
        assert_ne!(engine.board(), &previous, "blinker must change every generation");
        assert!(
            engine.dirty_rows().iter().all(|&d| !d),
            "generation {} flagged a row",
            engine.generation()
        );
        previous = engine.board().clone();
    }
}

#[test]
fn empty_board_stays_empty() {
    let mut engine = life(128, 32, true);
    engine.step_n(10);
    assert!(engine.is_empty());
    assert_eq!(engine.population(), 0);
    assert!(engine.dirty_rows().iter().all(|&d| !d));
}
