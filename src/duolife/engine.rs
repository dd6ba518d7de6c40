use log::debug;
use rand::Rng;

use super::board::{Board, BoardPair};
use super::kernel::advance_interior;
use super::pattern::{self, PatternError};
use super::patterns::Pattern;
use super::rules::RuleTable;
use super::scheduler::DualUnit;

pub const DEFAULT_WIDTH: usize = 640;
pub const DEFAULT_HEIGHT: usize = 480;
/// Inset of the random region used by [`DuoLife::seed_soup`].
pub const DEFAULT_SOUP_MARGIN: usize = 100;

/// `1`/`true` and `0`/`false`, case-insensitive. Anything else, or no value,
/// means two units.
fn parse_dual_unit(value: Option<&str>) -> bool {
    value
        .and_then(|v| {
            let v = v.trim();
            if v == "1" || v.eq_ignore_ascii_case("true") {
                Some(true)
            } else if v == "0" || v.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
        .unwrap_or(true)
}

#[inline]
fn dual_unit_from_env() -> bool {
    parse_dual_unit(std::env::var("DUOLIFE_DUAL_UNIT").ok().as_deref())
}

/// Configuration for a DuoLife simulation.
///
/// Use `DuoLifeConfig::default()` for a 640x480 board computed on two
/// units, or adjust individual knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct DuoLifeConfig {
    /// Board width in cells, rounded up to a multiple of 32.
    /// `None` means 640.
    pub width: Option<usize>,
    /// Board height in cells, at least 3. `None` means 480.
    pub height: Option<usize>,
    /// Split each generation across two units.
    /// `None` reads `DUOLIFE_DUAL_UNIT` (`1`/`true`/`0`/`false`) and
    /// defaults to two units.
    pub dual_unit: Option<bool>,
}

impl DuoLifeConfig {
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn dual_unit(mut self, enabled: bool) -> Self {
        self.dual_unit = Some(enabled);
        self
    }
}

/// Simulation state owned by the main loop.
pub struct DuoLife {
    boards: BoardPair,
    /// One flag per row, rewritten for interior rows every generation.
    dirty: Vec<bool>,
    generation: u64,
    rules: &'static RuleTable,
    /// `None` computes every row on the calling thread.
    unit_b: Option<DualUnit>,
}

impl Default for DuoLife {
    fn default() -> Self {
        Self::new()
    }
}

impl DuoLife {
    pub fn new() -> Self {
        Self::with_config(DuoLifeConfig::default())
    }

    pub fn with_config(config: DuoLifeConfig) -> Self {
        let width = config.width.unwrap_or(DEFAULT_WIDTH);
        let height = config.height.unwrap_or(DEFAULT_HEIGHT);
        let dual = config.dual_unit.unwrap_or_else(dual_unit_from_env);
        let boards = BoardPair::new(width, height);
        debug!(
            "board {}x{} ({} words per row), {} unit(s)",
            boards.current().width(),
            height,
            boards.current().width_in_words(),
            if dual { 2 } else { 1 }
        );

        Self {
            boards,
            dirty: vec![false; height],
            generation: 0,
            rules: RuleTable::shared(),
            unit_b: dual.then(|| DualUnit::new(height)),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.boards.current().width()
    }

    #[inline]
    pub fn width_in_words(&self) -> usize {
        self.boards.current().width_in_words()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.boards.current().height()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_dual_unit(&self) -> bool {
        self.unit_b.is_some()
    }

    /// The board produced by the latest generation.
    #[inline]
    pub fn board(&self) -> &Board {
        self.boards.current()
    }

    /// Per-row change flags from the latest generation. Rows `0` and
    /// `height - 1` are never computed and never flagged.
    #[inline]
    pub fn dirty_rows(&self) -> &[bool] {
        &self.dirty
    }

    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        self.boards.current().get(x, y)
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.boards.current_mut().set(x, y, alive);
    }

    pub fn population(&self) -> u64 {
        self.boards.current().population()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.current().is_empty()
    }

    pub fn for_each_live<F: FnMut(usize, usize)>(&self, f: F) {
        self.boards.current().for_each_live(f);
    }

    /// Replace the board with an RLE pattern and restart the count.
    pub fn load_rle(
        &mut self,
        width: usize,
        height: usize,
        rle: &str,
        column_word: Option<usize>,
    ) -> Result<(), PatternError> {
        self.generation = 0;
        pattern::load_rle(self.boards.current_mut(), width, height, rle, column_word)
    }

    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), PatternError> {
        debug!("loading pattern {}", pattern.name);
        self.load_rle(
            pattern.width,
            pattern.height,
            pattern.rle,
            pattern.column_word,
        )
    }

    /// Replace the board with a random soup and restart the count.
    pub fn seed_soup<R: Rng>(&mut self, rng: &mut R, margin: usize) {
        self.generation = 0;
        pattern::seed_soup(self.boards.current_mut(), rng, margin);
    }

    /// Advance one generation: compute both bands, swap, count.
    pub fn step(&mut self) {
        match &self.unit_b {
            Some(unit) => unit.advance(self.rules, &mut self.boards, &mut self.dirty),
            None => {
                let (current, next) = self.boards.split();
                advance_interior(self.rules, current, next, &mut self.dirty);
            }
        }
        self.boards.swap();
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}
