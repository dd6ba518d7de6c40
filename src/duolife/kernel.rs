//! Scalar sliding-window kernel for DuoLife.
//!
//! Each pair of adjacent output cells comes from one rule-table lookup on a
//! 12-bit window cut from three 32-bit registers holding the rows above, at
//! and below the target. Registers shift right 2 bits per pair and take 16
//! fresh bits whenever half of them has drained. When a freshly refilled
//! register triple is all zero the kernel jumps over the span it covers.
//!
//! Column 0 and column `width - 1` of every computed row come out dead.

use super::board::{Board, WORD_BITS};
use super::rules::RuleTable;

#[derive(Clone, Copy, Debug, Default)]
struct Windows {
    above: u32,
    this: u32,
    below: u32,
}

impl Windows {
    #[inline(always)]
    fn index(&self) -> u32 {
        ((self.above & 0xf) << 8) | ((self.this & 0xf) << 4) | (self.below & 0xf)
    }

    #[inline(always)]
    fn shift_pair(&mut self) {
        self.above >>= 2;
        self.this >>= 2;
        self.below >>= 2;
    }

    #[inline(always)]
    fn fill(&mut self, above: u32, this: u32, below: u32) {
        self.above |= above;
        self.this |= this;
        self.below |= below;
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        (self.above | self.this | self.below) == 0
    }
}

/// Words past the end of a row read as dead.
#[inline(always)]
fn word_at(row: &[u32], index: usize) -> u32 {
    row.get(index).copied().unwrap_or(0)
}

/// Overwrite `out[index]`, reporting whether the old word differed.
#[inline(always)]
fn store(out: &mut [u32], index: usize, value: u32) -> bool {
    let slot = &mut out[index];
    let changed = *slot != value;
    *slot = value;
    changed
}

/// Compute one row of the next generation into `out`.
///
/// Returns true if any word written differs from what `out` held before
/// the call, which for a double-buffered pair is the row from two
/// generations back, not the row currently displayed.
#[inline]
pub fn advance_row(
    rules: &RuleTable,
    above: &[u32],
    this: &[u32],
    below: &[u32],
    out: &mut [u32],
) -> bool {
    let words = out.len();
    debug_assert!(words > 0);
    debug_assert_eq!(above.len(), words);
    debug_assert_eq!(this.len(), words);
    debug_assert_eq!(below.len(), words);

    let width = words * WORD_BITS;
    let mut win = Windows {
        above: above[0],
        this: this[0],
        below: below[0],
    };
    let mut src = 1usize;
    let mut dst = 0usize;
    let mut acc = 0u32;
    let mut changed = false;
    // `x` is the west target of the next pair, `bit` its offset within `acc`.
    let mut x = 1usize;
    let mut bit = 1u32;

    while x < width - 1 {
        let pair = rules.lookup(win.index());
        acc |= pair << bit;
        win.shift_pair();
        x += 2;
        bit += 2;

        if bit == 33 {
            changed |= store(out, dst, acc);
            dst += 1;
            acc = pair >> 1;
            bit = 1;
        }

        if bit == 17 {
            win.fill(
                word_at(above, src) << 16,
                word_at(this, src) << 16,
                word_at(below, src) << 16,
            );
            if win.is_empty() {
                if dst + 1 == words {
                    break;
                }
                changed |= store(out, dst, acc);
                dst += 1;
                acc = 0;
                bit = 1;
                x += 16;
            }
        }

        if bit == 1 {
            win.fill(
                above[src] & 0xffff_0000,
                this[src] & 0xffff_0000,
                below[src] & 0xffff_0000,
            );
            src += 1;
            if win.is_empty() {
                x += 14;
                bit = 15;
            }
        }
    }

    changed |= store(out, dst, acc);
    changed
}

/// Advance rows `first_row..first_row + dirty.len()` of `current`.
///
/// `next_band` holds exactly those rows of the destination board and
/// `dirty` receives one flag per row. The band must stay clear of the first
/// and last board rows.
pub fn advance_band(
    rules: &RuleTable,
    current: &Board,
    first_row: usize,
    next_band: &mut [u32],
    dirty: &mut [bool],
) {
    let rows = dirty.len();
    if rows == 0 {
        return;
    }
    let width_in_words = current.width_in_words();
    assert!(
        first_row > 0 && first_row + rows < current.height(),
        "rows {first_row}..{} outside interior of {}-row board",
        first_row + rows,
        current.height()
    );
    assert_eq!(
        next_band.len(),
        rows * width_in_words,
        "destination band does not match row count"
    );

    for (i, (out, flag)) in next_band
        .chunks_exact_mut(width_in_words)
        .zip(dirty.iter_mut())
        .enumerate()
    {
        let y = first_row + i;
        *flag = advance_row(
            rules,
            current.row(y - 1),
            current.row(y),
            current.row(y + 1),
            out,
        );
    }
}

/// Advance every interior row in one pass on the calling thread.
pub fn advance_interior(rules: &RuleTable, current: &Board, next: &mut Board, dirty: &mut [bool]) {
    let height = current.height();
    let width_in_words = current.width_in_words();
    assert_eq!(dirty.len(), height, "one dirty flag per row");
    advance_band(
        rules,
        current,
        1,
        &mut next.words_mut()[width_in_words..(height - 1) * width_in_words],
        &mut dirty[1..height - 1],
    );
}
