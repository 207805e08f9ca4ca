use std::path::Path;

use image::RgbImage;
use log::debug;

use crate::error::EtchError;

/// The image bundled into the binary at compile time.
///
/// This mirrors a classpath resource: the bytes ship inside the executable
/// and decoding them can still fail if the file is not a valid raster image.
pub const EMBEDDED_IMAGE: &[u8] = include_bytes!("../assets/ealing-common-station.png");

/// Decode the embedded image resource into an RGB bitmap.
pub fn load_embedded() -> Result<RgbImage, EtchError> {
    load_from_bytes(EMBEDDED_IMAGE)
}

/// Decode raw image bytes into an RGB bitmap.
///
/// The format is sniffed from the bytes; any format the `image` crate
/// understands is accepted. Undecodable input yields [`EtchError::Load`].
pub fn load_from_bytes(bytes: &[u8]) -> Result<RgbImage, EtchError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    debug!("decoded {}x{} bitmap", rgb.width(), rgb.height());
    Ok(rgb)
}

/// Decode an image file from disk into an RGB bitmap.
pub fn load_from_path(path: &Path) -> Result<RgbImage, EtchError> {
    let decoded = image::open(path)?;
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_resource_decodes() {
        let img = load_embedded().unwrap();
        assert!(img.width() > 0 && img.height() > 0);
    }

    #[test]
    fn test_garbage_bytes_fail_with_load_error() {
        let err = load_from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EtchError::Load(_)));
    }

    #[test]
    fn test_missing_path_fails_with_load_error() {
        let err = load_from_path(Path::new("/no/such/image.png")).unwrap_err();
        assert!(matches!(err, EtchError::Load(_)));
    }
}
