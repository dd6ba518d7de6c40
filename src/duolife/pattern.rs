//! RLE pattern loading and random soup seeding.
//!
//! Tokens are `<count>?` followed by `b` (dead run), `o` (live run) or `$`
//! (row break, count = rows to advance), terminated by `!`. Whitespace is
//! skipped. Cells are packed straight into board words through a bit cursor;
//! `$` and `!` flush the partial word.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::debug;
use rand::Rng;

use super::board::{Board, WORD_BITS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// Input ended before `!`.
    MissingTerminator,
    /// A run count does not fit in `usize`.
    CountOverflow { offset: usize },
    /// A run count with no tag after it.
    DanglingCount { offset: usize },
    UnexpectedToken { token: char, offset: usize },
    /// Live cells would land outside the board.
    OutOfBounds { row: usize, word: usize },
}

impl Display for PatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::MissingTerminator => write!(f, "pattern ends without '!'"),
            PatternError::CountOverflow { offset } => {
                write!(f, "run count at byte {offset} overflows")
            }
            PatternError::DanglingCount { offset } => {
                write!(f, "run count at byte {offset} has no tag")
            }
            PatternError::UnexpectedToken { token, offset } => {
                write!(f, "unexpected {token:?} at byte {offset}")
            }
            PatternError::OutOfBounds { row, word } => {
                write!(f, "live cells at row {row}, word {word} fall outside the board")
            }
        }
    }
}

impl Error for PatternError {}

/// Default first column word: the pattern centered, rounded up to a word.
#[inline]
pub fn centered_column_word(board_width: usize, pattern_width: usize) -> usize {
    (board_width.saturating_sub(pattern_width) / 2 + WORD_BITS - 1) / WORD_BITS
}

/// Where cells go while decoding. Out-of-board stores of a dead word are
/// dropped; a live word out of bounds is an error.
struct Cursor<'a> {
    board: &'a mut Board,
    start_word: usize,
    word: usize,
    row: usize,
    bits: u32,
    bit: usize,
}

impl Cursor<'_> {
    fn flush(&mut self) -> Result<(), PatternError> {
        let (row, word, bits) = (self.row, self.word, self.bits);
        self.bits = 0;
        if bits == 0 {
            return Ok(());
        }
        if row >= self.board.height() || word >= self.board.width_in_words() {
            return Err(PatternError::OutOfBounds { row, word });
        }
        self.board.row_mut(row)[word] = bits;
        Ok(())
    }

    fn live(&mut self, count: usize) -> Result<(), PatternError> {
        for _ in 0..count {
            self.bits |= 1 << self.bit;
            self.bit += 1;
            if self.bit == WORD_BITS {
                self.flush()?;
                self.word += 1;
                self.bit = 0;
            }
        }
        Ok(())
    }

    /// `offset` is the byte offset of the run, reported on overflow.
    fn dead(&mut self, count: usize, offset: usize) -> Result<(), PatternError> {
        let bit = self
            .bit
            .checked_add(count)
            .ok_or(PatternError::CountOverflow { offset })?;
        if bit < WORD_BITS {
            self.bit = bit;
            return Ok(());
        }
        // Words skipped after the partial one are all dead.
        self.flush()?;
        self.word = self
            .word
            .checked_add(bit / WORD_BITS)
            .ok_or(PatternError::CountOverflow { offset })?;
        self.bit = bit % WORD_BITS;
        Ok(())
    }

    fn next_row(&mut self, count: usize, offset: usize) -> Result<(), PatternError> {
        self.flush()?;
        self.word = self.start_word;
        self.row = self
            .row
            .checked_add(count)
            .ok_or(PatternError::CountOverflow { offset })?;
        self.bit = 0;
        Ok(())
    }
}

/// Clear `board` and decode `rle` into it.
///
/// The pattern's top row lands on `(board.height() - height) / 2`. Its left
/// edge lands on word `column_word`, or on [`centered_column_word`] when
/// `None`.
pub fn load_rle(
    board: &mut Board,
    width: usize,
    height: usize,
    rle: &str,
    column_word: Option<usize>,
) -> Result<(), PatternError> {
    board.clear();
    let start_word = column_word.unwrap_or_else(|| centered_column_word(board.width(), width));
    let start_row = board.height().saturating_sub(height) / 2;
    debug!(
        "loading {width}x{height} pattern at row {start_row}, word {start_word}"
    );

    let mut cursor = Cursor {
        board,
        start_word,
        word: start_word,
        row: start_row,
        bits: 0,
        bit: 0,
    };

    let bytes = rle.as_bytes();
    let mut i = 0;
    loop {
        let Some(&c) = bytes.get(i) else {
            return Err(PatternError::MissingTerminator);
        };
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        if c == b'!' {
            return cursor.flush();
        }

        let count_offset = i;
        let mut count: Option<usize> = None;
        while let Some(&d) = bytes.get(i).filter(|d| d.is_ascii_digit()) {
            let digit = (d - b'0') as usize;
            count = Some(
                count
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit))
                    .ok_or(PatternError::CountOverflow {
                        offset: count_offset,
                    })?,
            );
            i += 1;
        }

        let tag = match bytes.get(i) {
            Some(&t) => t,
            None if count.is_some() => {
                return Err(PatternError::DanglingCount {
                    offset: count_offset,
                });
            }
            None => return Err(PatternError::MissingTerminator),
        };
        let run = count.unwrap_or(1);
        match tag {
            b'o' => cursor.live(run)?,
            b'b' => cursor.dead(run, count_offset)?,
            b'$' => cursor.next_row(run, count_offset)?,
            b'!' => {
                return Err(PatternError::DanglingCount {
                    offset: count_offset,
                });
            }
            other => {
                return Err(PatternError::UnexpectedToken {
                    token: rle[i..].chars().next().unwrap_or(other as char),
                    offset: i,
                });
            }
        }
        i += 1;
    }
}

/// Fill `board` with a random soup plus a few fixed probes near the top.
///
/// Each cell of `[margin, width - margin) x [margin, height - margin)` is
/// live with probability 5/16. `margin` shrinks on small boards so the
/// region keeps at least one cell. The probes are a block on rows 1-2, and
/// a blinker and a glider on rows 5-7, when the board is tall enough.
pub fn seed_soup<R: Rng>(board: &mut Board, rng: &mut R, margin: usize) {
    board.clear();
    let width = board.width();
    let height = board.height();

    if height > 8 {
        board.row_mut(1)[0] = 0x30;
        board.row_mut(2)[0] = 0x30;
        board.row_mut(5)[0] = 0x0002_0100;
        board.row_mut(6)[0] = 0x0004_0100;
        board.row_mut(7)[0] = 0x0007_0100;
    }

    let margin = margin
        .min((width - 1) / 2)
        .min((height - 1) / 2);
    let mut live = 0u64;
    for y in margin..height - margin {
        for x in margin..width - margin {
            if rng.random_ratio(5, 16) {
                board.set(x, y, true);
                live += 1;
            }
        }
    }
    debug!("seeded soup with {live} random cells, margin {margin}");
}
