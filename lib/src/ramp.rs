//! Character ramp and brightness quantization.
//!
//! The ramp is a fixed 69-character sequence ordered dark to light.
//! Quantization is min-max normalized: indices are scaled by the brightness
//! range observed in the current grid, not by an assumed 0-255 range. The
//! fixed-range policy (`floor(len * v / 256)`) produces different output and
//! is deliberately not implemented.

use crate::brightness::BrightnessGrid;

/// Dark-to-light character ramp, 69 characters.
pub const RAMP: &str = ".'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Grid of ramp characters, same dimensions as the brightness grid it
/// was quantized from.
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    pub width: u32,
    pub height: u32,
    cells: Vec<char>,
}

impl AsciiGrid {
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[(y * self.width + x) as usize]
    }

    /// One row of cells, top row is `y == 0`.
    pub fn row(&self, y: u32) -> &[char] {
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }
}

/// Quantize a brightness grid onto the ramp.
///
/// Each cell becomes `floor((v - min) / (max - min) * (len - 1))`, clamped
/// to a valid ramp index. A flat grid (`max == min`) maps every cell to
/// index 0 rather than dividing by zero.
pub fn quantize(grid: &BrightnessGrid) -> AsciiGrid {
    let ramp: Vec<char> = RAMP.chars().collect();
    let last = (ramp.len() - 1) as f64;

    let (min, max) = grid.range().unwrap_or((0.0, 0.0));
    let span = max - min;

    let cells = grid
        .values()
        .iter()
        .map(|&v| {
            let index = if span == 0.0 {
                0
            } else {
                let ratio = (v - min) / span;
                (ratio * last).floor() as usize
            };
            ramp[index.min(ramp.len() - 1)]
        })
        .collect();

    AsciiGrid {
        width: grid.width,
        height: grid.height,
        cells,
    }
}
