//! Rule table generation for B3/S23.
//!
//! A window is 12 bits: three 4-bit row slices (above in bits 8..12, the
//! target row in bits 4..8, below in bits 0..4). Nibble bit `k` holds
//! column `x - 1 + k`, where `x` is the west target. The two targets are
//! nibble bits 1 and 2 of the middle slice.
//!
//! The table packs one 2-bit result per window, 16 results per `u32`:
//! the result for window `w` lives at bits `2 * (w & 15)` of entry `w >> 4`.
//! Result bit 0 is the west target, bit 1 the east target.

use std::sync::OnceLock;

pub const WINDOW_BITS: u32 = 12;
pub const TABLE_LEN: usize = 1 << (WINDOW_BITS - 4);

const WEST_TARGET: u32 = 1 << 5;
const EAST_TARGET: u32 = 1 << 6;
/// West target plus its 3x3 neighborhood (nibble bits 0..3).
const WEST_WINDOW: u32 = 0x777;
/// East target plus its 3x3 neighborhood (nibble bits 1..4).
const EAST_WINDOW: u32 = 0xeee;

static SHARED: OnceLock<RuleTable> = OnceLock::new();

pub struct RuleTable {
    table: [u32; TABLE_LEN],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub fn new() -> Self {
        let mut table = [0u32; TABLE_LEN];
        for window in 0u32..(1 << WINDOW_BITS) {
            table[(window >> 4) as usize] |= output_for(window) << ((window & 0xf) << 1);
        }
        Self { table }
    }

    /// Process-wide table, built on first use and never mutated afterwards.
    pub fn shared() -> &'static RuleTable {
        SHARED.get_or_init(RuleTable::new)
    }

    /// Next state of the two targets of `window`, packed west-in-bit-0.
    #[inline(always)]
    pub fn lookup(&self, window: u32) -> u32 {
        (self.table[(window >> 4) as usize] >> ((window << 1) & 0x1e)) & 3
    }

    pub fn entries(&self) -> &[u32; TABLE_LEN] {
        &self.table
    }
}

/// Population counts here include the target itself, so survival is 3 or 4.
#[inline]
fn next_alive(window: u32, target: u32, mask: u32) -> bool {
    let population = (window & mask).count_ones();
    if window & target != 0 {
        population == 3 || population == 4
    } else {
        population == 3
    }
}

fn output_for(window: u32) -> u32 {
    let west = next_alive(window, WEST_TARGET, WEST_WINDOW) as u32;
    let east = next_alive(window, EAST_TARGET, EAST_WINDOW) as u32;
    west | (east << 1)
}

#[cfg(test)]
mod tests {
    use super::{RuleTable, WINDOW_BITS};

    fn cell_at(window: u32, row: u32, col: u32) -> u32 {
        (window >> ((2 - row) * 4 + col)) & 1
    }

    fn neighbors(window: u32, col: u32) -> u32 {
        let mut count = 0;
        for row in 0..3 {
            for c in (col - 1)..=(col + 1) {
                if row == 1 && c == col {
                    continue;
                }
                count += cell_at(window, row, c);
            }
        }
        count
    }

    #[test]
    fn survival_and_birth_bits_follow_b3s23() {
        let table = RuleTable::new();
        for window in 0u32..(1 << WINDOW_BITS) {
            let got = table.lookup(window);
            for (slot, col) in [(0u32, 1u32), (1, 2)] {
                let n = neighbors(window, col);
                let alive = cell_at(window, 1, col) == 1;
                let survive = alive && (n == 2 || n == 3);
                let birth = !alive && n == 3;
                let bit = (got >> slot) & 1 == 1;
                assert_eq!(
                    bit,
                    survive || birth,
                    "window {window:03x} slot {slot} neighbors {n} alive {alive}"
                );
            }
        }
    }

    #[test]
    fn block_rows_reproduce_themselves() {
        // A 2x2 block sitting on both targets: every cell has 3 neighbors.
        let window = (0b0110 << 8) | (0b0110 << 4);
        assert_eq!(RuleTable::new().lookup(window), 0b11);
    }

    #[test]
    fn blinker_center_survives_and_ends_die() {
        // Horizontal blinker on the middle row, columns x-1..=x+1.
        let window = 0b0111 << 4;
        // West target is the blinker center, east target is its east end.
        assert_eq!(RuleTable::new().lookup(window), 0b01);
    }

    #[test]
    fn shared_table_matches_fresh_build() {
        assert_eq!(RuleTable::shared().entries(), RuleTable::new().entries());
    }
}
