use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Every variant is fatal: the run aborts on the first failure and the
/// error propagates untouched to the caller.
#[derive(Debug, Error)]
pub enum EtchError {
    /// The image resource was missing or not a decodable raster format.
    #[error("failed to decode image resource: {0}")]
    Load(#[from] image::ImageError),

    /// The output destination could not be opened or written.
    #[error("failed to write output to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration field was outside its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),
}
