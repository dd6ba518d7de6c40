//! Renderer bridge and frame loop.
//!
//! Rows are uploaded only when the engine flagged them, except during the
//! first two generations when every row goes out.

use std::time::{Duration, Instant};

use log::trace;

use super::board::{Board, WORD_BITS};
use super::display::Display;
use super::engine::DuoLife;

/// Generations that upload every row regardless of dirty flags.
pub const WARMUP_GENERATIONS: u64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dead: u8,
    pub live: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self { dead: 0, live: 4 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FrameStats {
    pub generation: u64,
    pub compute: Duration,
    pub draw: Duration,
    pub rows_drawn: usize,
}

pub struct Renderer {
    row_buf: Vec<u8>,
    palette: Palette,
}

impl Renderer {
    pub fn new(frame_width: usize, palette: Palette) -> Self {
        Self {
            row_buf: vec![palette.dead; frame_width],
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    fn expand_row(&mut self, board: &Board, y: usize) {
        let row = board.row(y);
        let cells = self.row_buf.len().min(board.width());
        let Palette { dead, live } = self.palette;
        for (x, pixel) in self.row_buf[..cells].iter_mut().enumerate() {
            let alive = (row[x / WORD_BITS] >> (x % WORD_BITS)) & 1 != 0;
            *pixel = if alive { live } else { dead };
        }
    }

    /// Upload the rows of the current board that need it. Returns the number
    /// of rows written.
    pub fn draw<D: Display>(&mut self, life: &DuoLife, display: &mut D) -> usize {
        let board = life.board();
        let rows = display.height().min(board.height());
        let warmup = life.generation() < WARMUP_GENERATIONS;
        let dirty = life.dirty_rows();
        let mut drawn = 0;
        for y in 0..rows {
            if warmup || dirty[y] {
                self.expand_row(board, y);
                display.write_row(y, &self.row_buf);
                drawn += 1;
            }
        }
        trace!("generation {}: uploaded {drawn} of {rows} rows", life.generation());
        drawn
    }

    /// Draw the loaded board and present it synchronously.
    pub fn present_initial<D: Display>(&mut self, life: &DuoLife, display: &mut D) -> usize {
        let drawn = self.draw(life, display);
        display.flip();
        drawn
    }

    /// One pass of the main loop: compute, wait for the previous flip, draw,
    /// request the next flip.
    pub fn advance_frame<D: Display>(&mut self, life: &mut DuoLife, display: &mut D) -> FrameStats {
        let start = Instant::now();
        life.step();
        let computed = Instant::now();
        display.wait_for_flip();
        let rows_drawn = self.draw(life, display);
        let drawn = Instant::now();
        display.flip_async();
        FrameStats {
            generation: life.generation(),
            compute: computed - start,
            draw: drawn - computed,
            rows_drawn,
        }
    }

    /// Run `generations` frames, or forever when `None`.
    pub fn run<D, F>(
        &mut self,
        life: &mut DuoLife,
        display: &mut D,
        generations: Option<u64>,
        mut on_frame: F,
    ) where
        D: Display,
        F: FnMut(&FrameStats),
    {
        let mut done = 0u64;
        while generations.is_none_or(|limit| done < limit) {
            let stats = self.advance_frame(life, display);
            on_frame(&stats);
            done += 1;
        }
        display.wait_for_flip();
    }
}
