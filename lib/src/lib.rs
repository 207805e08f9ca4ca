//! ASCII Etch - grayscale image to ASCII art converter
//!
//! Converts a raster image into a newline-delimited text rendering: the
//! bitmap is bounded to a maximum dimension, each pixel's brightness is
//! computed under a selectable formula, and brightness is min-max
//! normalized onto a fixed 69-character dark-to-light ramp. Each character
//! is doubled horizontally to correct for terminal cell aspect ratio.
//!
//! # Example
//! ```no_run
//! use ascii_etch::{pipeline, EtchConfig};
//!
//! let config = EtchConfig::default();
//! pipeline::run(&config).expect("conversion failed");
//! ```

pub mod brightness;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod ramp;
pub mod render;
pub mod resize;

// Re-export main types for convenience
pub use brightness::BrightnessStrategy;
pub use config::EtchConfig;
pub use error::EtchError;
pub use ramp::RAMP;
