use image::RgbImage;
use rayon::prelude::*;

/// Formula used to collapse a pixel's RGB channels into one scalar.
///
/// A closed enumeration: each variant is a pure function of (R, G, B).
/// The luminosity variant is the linear-weighted formula
/// `0.21*R + 0.72*G + 0.07*B`; the quadratic-weighted alternative
/// (`sqrt(0.299R² + 0.587G² + 0.114B²)`) is a distinct formula and is
/// deliberately not implemented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessStrategy {
    /// Plain channel mean: `(R + G + B) / 3`
    Average,
    /// HSL lightness: `(max(R,G,B) + min(R,G,B)) / 2`
    Lightness,
    /// Perceptual linear weighting: `0.21*R + 0.72*G + 0.07*B`
    #[default]
    Luminosity,
}

impl BrightnessStrategy {
    /// Map a selector string to a strategy.
    ///
    /// Recognizes `"avg"` and `"hsl"`; anything else (including absence)
    /// falls through to luminosity. Unrecognized selectors are not errors.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("avg") => Self::Average,
            Some("hsl") => Self::Lightness,
            _ => Self::Luminosity,
        }
    }

    /// Brightness of a single pixel under this strategy.
    pub fn of_pixel(self, r: u8, g: u8, b: u8) -> f64 {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        match self {
            Self::Average => (r + g + b) / 3.0,
            Self::Lightness => (r.max(g).max(b) + r.min(g).min(b)) / 2.0,
            Self::Luminosity => 0.21 * r + 0.72 * g + 0.07 * b,
        }
    }
}

/// Per-pixel brightness scalars for one bitmap, row-major.
#[derive(Debug, Clone)]
pub struct BrightnessGrid {
    pub width: u32,
    pub height: u32,
    values: Vec<f64>,
}

impl BrightnessGrid {
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[(y * self.width + x) as usize]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest brightness in the grid, or `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        let (min, max) = self
            .values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some((min, max))
    }
}

/// Compute one brightness scalar per pixel of `input`.
///
/// The output grid always has the same dimensions as the bitmap.
pub fn extract(input: &RgbImage, strategy: BrightnessStrategy) -> BrightnessGrid {
    let (width, height) = input.dimensions();
    let values = (0..(width as usize * height as usize))
        .into_par_iter()
        .map(|idx| {
            let x = (idx as u32) % width;
            let y = (idx as u32) / width;
            let px = input.get_pixel(x, y);
            strategy.of_pixel(px[0], px[1], px[2])
        })
        .collect();

    BrightnessGrid {
        width,
        height,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(
            BrightnessStrategy::from_selector(Some("avg")),
            BrightnessStrategy::Average
        );
        assert_eq!(
            BrightnessStrategy::from_selector(Some("hsl")),
            BrightnessStrategy::Lightness
        );
        assert_eq!(
            BrightnessStrategy::from_selector(Some("anything")),
            BrightnessStrategy::Luminosity
        );
        assert_eq!(
            BrightnessStrategy::from_selector(None),
            BrightnessStrategy::Luminosity
        );
    }

    #[test]
    fn test_grayscale_pixel_is_invariant_under_average_and_lightness() {
        for v in [0u8, 17, 128, 255] {
            let expected = v as f64;
            assert_eq!(BrightnessStrategy::Average.of_pixel(v, v, v), expected);
            assert_eq!(BrightnessStrategy::Lightness.of_pixel(v, v, v), expected);
        }
    }

    #[test]
    fn test_grayscale_pixel_luminosity_weights_sum_to_one() {
        // 0.21 + 0.72 + 0.07 == 1.0, so gray maps to itself up to float error
        for v in [0u8, 17, 128, 255] {
            let got = BrightnessStrategy::Luminosity.of_pixel(v, v, v);
            assert!((got - v as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_luminosity_weighting() {
        let got = BrightnessStrategy::Luminosity.of_pixel(100, 50, 200);
        assert!((got - (0.21 * 100.0 + 0.72 * 50.0 + 0.07 * 200.0)).abs() < 1e-12);
    }

    #[test]
    fn test_lightness_uses_channel_extremes() {
        // max=200, min=10 regardless of which channel holds them
        assert_eq!(BrightnessStrategy::Lightness.of_pixel(10, 200, 90), 105.0);
        assert_eq!(BrightnessStrategy::Lightness.of_pixel(200, 90, 10), 105.0);
    }

    #[test]
    fn test_grid_matches_bitmap_dimensions() {
        let img = RgbImage::from_pixel(7, 5, Rgb([10, 20, 30]));
        let grid = extract(&img, BrightnessStrategy::Average);
        assert_eq!((grid.width, grid.height), (7, 5));
        assert_eq!(grid.values().len(), 35);
    }

    #[test]
    fn test_grid_indexing_is_row_major() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([90, 90, 90]));
        let grid = extract(&img, BrightnessStrategy::Average);
        assert_eq!(grid.get(2, 1), 90.0);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn test_range_over_mixed_grid() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([30, 30, 30]));
        img.put_pixel(1, 0, Rgb([210, 210, 210]));
        let grid = extract(&img, BrightnessStrategy::Average);
        assert_eq!(grid.range(), Some((30.0, 210.0)));
    }
}
