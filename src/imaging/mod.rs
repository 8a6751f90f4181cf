//! # Imaging Module
//!
//! Pixel buffers and the imaging operations behind the compositor: decode to
//! RGBA, resample, alpha-composite and encode.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use backdrop_compositor::imaging::{Canvas, ImageCrateBackend, ImagingBackend, OutputFormat, ResampleFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = ImageCrateBackend::new();
//! let bytes = std::fs::read("photo.jpg")?;
//!
//! let source = backend.decode_to_rgba(&bytes)?;
//! let overlay = backend.resize(&source, 400, 300, ResampleFilter::Lanczos3)?;
//!
//! let mut canvas = Canvas::new_filled(800, 600, [89, 156, 170]);
//! backend.composite_over(&mut canvas, &overlay, 200, 150);
//!
//! std::fs::write("photo.png", backend.encode(&canvas, OutputFormat::Png)?)?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod types;

pub use backend::{ImageCrateBackend, ImageResult, ImagingBackend};
pub use types::{Canvas, OutputFormat, ResampleFilter, SourceImage};
