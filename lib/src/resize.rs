use image::{imageops, RgbImage};
use log::debug;

/// Bound a bitmap so that its larger side does not exceed `max_dimension`.
///
/// Images already within bounds are returned unchanged. Otherwise the longer
/// side becomes `max_dimension` and the shorter side is scaled with integer
/// truncation, so the aspect ratio may drift by up to one pixel.
///
/// Resampling uses Lanczos3; only the output dimensions are contractual.
pub fn bound_to_max(input: RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = input.dimensions();
    if width <= max_dimension && height <= max_dimension {
        return input;
    }

    let (new_width, new_height) = bounded_dimensions(width, height, max_dimension);
    debug!("resizing {width}x{height} -> {new_width}x{new_height}");
    imageops::resize(&input, new_width, new_height, imageops::FilterType::Lanczos3)
}

/// Compute the bounded dimensions without touching pixel data.
///
/// Callers must only pass dimensions where at least one side exceeds
/// `max_dimension`; the scaled-down short side is floored to 1 so extreme
/// aspect ratios never produce a zero-sized bitmap.
fn bounded_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width > height {
        let new_height = ((height as u64 * max_dimension as u64) / width as u64) as u32;
        (max_dimension, new_height.max(1))
    } else {
        let new_width = ((width as u64 * max_dimension as u64) / height as u64) as u32;
        (new_width.max(1), max_dimension)
    }
}
