//! Bit-packed boards.
//!
//! Bit `b` of word `y * width_in_words + w` is cell `(w * 32 + b, y)`.
//! The layout is pinned to explicit shifts on `u32` words, so it does not
//! depend on host endianness.
//!
//! `BoardPair` keeps two equally sized boards and a phase bit:
//! `bufs[phase]` is current (read), `bufs[1 - phase]` is next (write).

pub const WORD_BITS: usize = 32;
/// Fewest rows that still leave one interior row to compute.
pub const MIN_HEIGHT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    words: Vec<u32>,
    width_in_words: usize,
    height: usize,
}

impl Board {
    /// Allocate a dead board. `width` is rounded up to a multiple of 32.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0, "board width must be non-zero");
        assert!(height > 0, "board height must be non-zero");
        let width_in_words = width.div_ceil(WORD_BITS);
        Self {
            words: vec![0; width_in_words * height],
            width_in_words,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width_in_words * WORD_BITS
    }

    #[inline]
    pub fn width_in_words(&self) -> usize {
        self.width_in_words
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[inline]
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    #[inline(always)]
    pub fn row(&self, y: usize) -> &[u32] {
        let start = y * self.width_in_words;
        &self.words[start..start + self.width_in_words]
    }

    #[inline(always)]
    pub fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.width_in_words;
        &mut self.words[start..start + self.width_in_words]
    }

    /// Cells outside the board read as dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width() || y >= self.height {
            return false;
        }
        (self.row(y)[x / WORD_BITS] >> (x % WORD_BITS)) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(
            x < self.width() && y < self.height,
            "cell ({x},{y}) outside {}x{} board",
            self.width(),
            self.height
        );
        let mask = 1u32 << (x % WORD_BITS);
        let word = &mut self.row_mut(y)[x / WORD_BITS];
        if alive {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    pub fn population(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Visit live cells in row-major order.
    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for y in 0..self.height {
            for (w, &word) in self.row(y).iter().enumerate() {
                let mut bits = word;
                while bits != 0 {
                    let b = bits.trailing_zeros() as usize;
                    f(w * WORD_BITS + b, y);
                    bits &= bits - 1;
                }
            }
        }
    }
}

pub struct BoardPair {
    bufs: [Board; 2],
    phase: usize,
}

impl BoardPair {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            height >= MIN_HEIGHT,
            "board height {height} leaves no interior rows"
        );
        let board = Board::new(width, height);
        Self {
            bufs: [board.clone(), board],
            phase: 0,
        }
    }

    #[inline(always)]
    pub fn current(&self) -> &Board {
        &self.bufs[self.phase]
    }

    #[inline(always)]
    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.bufs[self.phase]
    }

    /// Destination of the next generation. Holds the state from two
    /// generations back until that generation overwrites it.
    #[inline(always)]
    pub fn next(&self) -> &Board {
        &self.bufs[1 - self.phase]
    }

    /// Borrow current for reading and next for writing at the same time.
    #[inline(always)]
    pub fn split(&mut self) -> (&Board, &mut Board) {
        let [first, second] = &mut self.bufs;
        if self.phase == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    /// Exchange current and next. O(1), no cell data moves.
    #[inline(always)]
    pub fn swap(&mut self) {
        self.phase = 1 - self.phase;
    }
}
