use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    composition::inputs::{discover_inputs, output_file_name},
    composition::layout::Placement,
    config::Config,
    error::{CompositorError, Result},
    imaging::{Canvas, ImageCrateBackend, ImageResult, ImagingBackend, SourceImage},
};

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input folder did not exist and has been created empty
    InputDirCreated { path: PathBuf },

    /// The input folder holds no accepted image files
    NoInputs { path: PathBuf },

    /// Every accepted file was composed; paths written, in processing order
    Completed { written: Vec<PathBuf> },
}

/// Batch compositor: centers every input image on a solid backdrop
///
/// Each file goes through the same straight pipeline:
/// 1. Canvas - allocate the backdrop in the configured size and color
/// 2. Decode - read the file and convert it to RGBA
/// 3. Resize - scale to the target height, keeping the aspect ratio
/// 4. Composite - alpha-blend the overlay centered on the canvas
/// 5. Export - encode and write `<stem>.png` to the output folder
///
/// Files are handled one at a time in file name order. The first failure
/// aborts the batch.
pub struct Compositor {
    config: Config,
    backend: Box<dyn ImagingBackend>,
}

impl Compositor {
    /// Create a compositor backed by the `image` crate
    pub fn new(config: Config) -> Result<Self> {
        Self::with_backend(config, Box::new(ImageCrateBackend::new()))
    }

    /// Create a compositor with a custom imaging backend
    pub fn with_backend(config: Config, backend: Box<dyn ImagingBackend>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every accepted image in the input folder
    pub fn run(&self) -> Result<RunOutcome> {
        let input_dir = &self.config.io.input_dir;
        let output_dir = &self.config.io.output_dir;

        info!("🖼️  Starting Backdrop-Compositor batch");
        info!("   Input: {:?}", input_dir);
        info!("   Output: {:?}", output_dir);
        debug!("   Backend: {}", self.backend.name());

        if !input_dir.exists() {
            fs::create_dir_all(input_dir)?;
            info!(
                "📁 Created folder '{}'. Put the PNG or JPEG images to process in it.",
                input_dir.display()
            );
            return Ok(RunOutcome::InputDirCreated {
                path: input_dir.clone(),
            });
        }

        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
            info!(
                "📁 Created folder '{}'. Processed images will be saved here.",
                output_dir.display()
            );
        }

        let inputs = discover_inputs(input_dir, &self.config.io.extensions)?;
        if inputs.is_empty() {
            warn!(
                "No image files to process were found in '{}'",
                input_dir.display()
            );
            return Ok(RunOutcome::NoInputs {
                path: input_dir.clone(),
            });
        }

        info!("Processing {} image files...", inputs.len());

        let mut written = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let output_path = self.compose_file(&input.path)?;
            info!(" ✓ '{}' -> '{}'", input.file_name, output_path.display());
            written.push(output_path);
        }

        info!("🎉 All images processed.");
        Ok(RunOutcome::Completed { written })
    }

    /// Compose a single file and write the result; returns the output path
    pub fn compose_file(&self, path: &Path) -> Result<PathBuf> {
        let bytes = fs::read(path)?;
        let encoded = self
            .render(&bytes)
            .map_err(|source| CompositorError::Input {
                path: path.to_path_buf(),
                source,
            })?;

        let output_path = self.output_path_for(path);
        fs::write(&output_path, encoded).map_err(|source| CompositorError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(output_path)
    }

    /// Decode, compose and encode one image held in memory
    fn render(&self, bytes: &[u8]) -> ImageResult<Vec<u8>> {
        let source = self.backend.decode_to_rgba(bytes)?;
        let canvas = self.compose(&source)?;
        self.backend.encode(&canvas, self.config.io.format)
    }

    /// Center `source` on a fresh canvas
    pub fn compose(&self, source: &SourceImage) -> ImageResult<Canvas> {
        let canvas_config = &self.config.canvas;
        let mut canvas = Canvas::new_filled(
            canvas_config.width,
            canvas_config.height,
            canvas_config.color,
        );

        let placement = self.placement_for(source)?;
        debug!(
            "{}x{} -> {}x{} at ({}, {})",
            source.width(),
            source.height(),
            placement.overlay_width,
            placement.overlay_height,
            placement.x,
            placement.y
        );
        if placement.is_clipped((canvas.width(), canvas.height())) {
            debug!("Overlay exceeds the canvas and will be cropped");
        }

        let overlay = self.backend.resize(
            source,
            placement.overlay_width,
            placement.overlay_height,
            self.config.overlay.filter,
        )?;
        self.backend
            .composite_over(&mut canvas, &overlay, placement.x, placement.y);

        Ok(canvas)
    }

    /// Size and offset `source` would get on the canvas
    pub fn placement_for(&self, source: &SourceImage) -> ImageResult<Placement> {
        Placement::compute(
            source.dimensions(),
            (self.config.canvas.width, self.config.canvas.height),
            self.config.overlay.target_height,
        )
    }

    /// Where the composite of `input` is written
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        self.config
            .io
            .output_dir
            .join(output_file_name(input, self.config.io.format))
    }
}
