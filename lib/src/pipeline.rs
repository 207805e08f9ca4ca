use image::RgbImage;
use log::info;

use crate::brightness;
use crate::config::EtchConfig;
use crate::error::EtchError;
use crate::loader;
use crate::ramp;
use crate::render;
use crate::resize;

/// Run the full conversion: embedded resource in, `output.txt` out.
///
/// Stages execute strictly in order and the first failure aborts the run:
/// 1. Decode the embedded image
/// 2. Bound it to `config.max_dimension`
/// 3. Extract per-pixel brightness under `config.strategy`
/// 4. Quantize brightness onto the character ramp
/// 5. Emit the widened text grid to `config.output_path`
pub fn run(config: &EtchConfig) -> Result<(), EtchError> {
    config.validate()?;

    let bitmap = loader::load_embedded()?;
    info!(
        "converting {}x{} image with {:?} brightness",
        bitmap.width(),
        bitmap.height(),
        config.strategy
    );

    let text = render_to_string(bitmap, config);
    render::write_text(&text, &config.output_path)
}

/// The decode-free tail of the pipeline: bitmap in, rendered text out.
///
/// Infallible by construction; every bitmap quantizes onto the ramp.
pub fn render_to_string(bitmap: RgbImage, config: &EtchConfig) -> String {
    let bounded = resize::bound_to_max(bitmap, config.max_dimension);
    let grid = brightness::extract(&bounded, config.strategy);
    let ascii = ramp::quantize(&grid);
    render::to_text(&ascii, config.repeat)
}
