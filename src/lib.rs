//! # Backdrop-Compositor
//!
//! Center every image in a folder on a fixed-size, solid-color backdrop.
//!
//! Each input is scaled to a fixed height (aspect ratio preserved), pasted in
//! the middle of the backdrop with alpha blending, and written out as PNG.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use backdrop_compositor::{composition::{Compositor, RunOutcome}, config::Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let compositor = Compositor::new(Config::default())?;
//!
//! match compositor.run()? {
//!     RunOutcome::Completed { written } => println!("wrote {} images", written.len()),
//!     RunOutcome::InputDirCreated { path } => println!("drop images into {:?}", path),
//!     RunOutcome::NoInputs { path } => println!("nothing to do in {:?}", path),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`composition`] - Batch driver, input discovery and placement geometry
//! - [`imaging`] - Pixel buffers and the [`ImagingBackend`](imaging::ImagingBackend) seam
//! - [`config`] - Compiled-in configuration
//! - [`error`] - Error types

pub mod composition;
pub mod config;
pub mod error;
pub mod imaging;

// Re-export commonly used types for convenience
pub use crate::{
    composition::{Compositor, RunOutcome},
    config::Config,
    error::{CompositorError, Result},
    imaging::{ImageCrateBackend, ImagingBackend},
};
