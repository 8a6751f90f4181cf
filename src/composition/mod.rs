//! # Composition Engine
//!
//! The compositor walks the input folder and centers every accepted image on
//! a fixed-size backdrop, writing one PNG per input.

pub mod engine;
pub mod inputs;
pub mod layout;

// Re-exports for convenience
pub use engine::{Compositor, RunOutcome};
pub use inputs::{discover_inputs, InputImage};
pub use layout::Placement;
