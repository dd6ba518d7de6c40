//! Display collaborator interface and an in-memory double-buffered display.

use std::io::{self, Write};

/// What the renderer needs from a palette-mode display.
///
/// Rows are written into the frame that is not being shown. `flip` presents
/// it and blocks; `flip_async` requests the same without waiting, and
/// `wait_for_flip` blocks until that request has completed and the hidden
/// frame may be written again. At most one asynchronous flip may be
/// outstanding.
pub trait Display {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn write_row(&mut self, y: usize, pixels: &[u8]);
    fn flip(&mut self);
    fn flip_async(&mut self);
    fn wait_for_flip(&mut self);
}

/// Two palette-index planes that exchange roles on every flip.
///
/// Nothing is copied on a flip, so after it the hidden plane still holds
/// the frame presented two flips ago.
#[derive(Clone, Debug)]
pub struct FrameBuffers {
    width: usize,
    height: usize,
    planes: [Vec<u8>; 2],
    /// Index of the presented plane.
    front: usize,
    flip_pending: bool,
    flips: u64,
    rows_written: u64,
}

impl FrameBuffers {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            planes: [vec![0; width * height], vec![0; width * height]],
            front: 0,
            flip_pending: false,
            flips: 0,
            rows_written: 0,
        }
    }

    /// The presented frame, row-major.
    pub fn front(&self) -> &[u8] {
        &self.planes[self.front]
    }

    pub fn front_row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.planes[self.front][start..start + self.width]
    }

    pub fn flips(&self) -> u64 {
        self.flips
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn is_flip_pending(&self) -> bool {
        self.flip_pending
    }

    /// Dump the presented frame as a binary PGM, scaling palette indices so
    /// that `max_index` maps to white.
    pub fn write_pgm<W: Write>(&self, mut out: W, max_index: u8) -> io::Result<()> {
        write!(out, "P5\n{} {}\n255\n", self.width, self.height)?;
        let max = max_index.max(1) as u32;
        let pixels: Vec<u8> = self
            .front()
            .iter()
            .map(|&p| ((p as u32).min(max) * 255 / max) as u8)
            .collect();
        out.write_all(&pixels)?;
        out.flush()
    }

    fn present(&mut self) {
        self.front = 1 - self.front;
        self.flips += 1;
    }
}

impl Display for FrameBuffers {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn write_row(&mut self, y: usize, pixels: &[u8]) {
        debug_assert!(!self.flip_pending, "row written while a flip is outstanding");
        let width = self.width.min(pixels.len());
        let start = y * self.width;
        let back = 1 - self.front;
        self.planes[back][start..start + width].copy_from_slice(&pixels[..width]);
        self.rows_written += 1;
    }

    fn flip(&mut self) {
        self.wait_for_flip();
        self.present();
    }

    fn flip_async(&mut self) {
        debug_assert!(!self.flip_pending, "flip requested while one is outstanding");
        self.present();
        self.flip_pending = true;
    }

    fn wait_for_flip(&mut self) {
        self.flip_pending = false;
    }
}
