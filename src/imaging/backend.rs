use image::codecs::png::PngEncoder;
use image::{ColorType, GenericImageView, ImageEncoder};
use tracing::debug;

use crate::error::ImageError;
use crate::imaging::types::{Canvas, OutputFormat, ResampleFilter, SourceImage};

/// Result type for backend operations
pub type ImageResult<T> = std::result::Result<T, ImageError>;

/// The imaging operations the compositor needs from an image library
///
/// Keeps the pipeline independent of which decoder/resampler/encoder is
/// linked in. [`ImageCrateBackend`] is the default implementation.
pub trait ImagingBackend: Send + Sync {
    /// Returns the unique name of this backend
    fn name(&self) -> &str;

    /// Decode an encoded image (format sniffed from the bytes) into RGBA.
    ///
    /// Sources without alpha get a fully opaque alpha channel.
    fn decode_to_rgba(&self, bytes: &[u8]) -> ImageResult<SourceImage>;

    /// Resample `image` to exactly `width` x `height`
    fn resize(
        &self,
        image: &SourceImage,
        width: u32,
        height: u32,
        filter: ResampleFilter,
    ) -> ImageResult<SourceImage>;

    /// Alpha-blend `overlay` onto `canvas` with its top-left corner at `(x, y)`,
    /// clipping to the canvas bounds.
    fn composite_over(&self, canvas: &mut Canvas, overlay: &SourceImage, x: i64, y: i64) {
        canvas.paste_with_alpha(overlay, x, y);
    }

    /// Serialize the canvas in the given format
    fn encode(&self, canvas: &Canvas, format: OutputFormat) -> ImageResult<Vec<u8>>;
}

/// Backend built on the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateBackend;

impl ImageCrateBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ImagingBackend for ImageCrateBackend {
    fn name(&self) -> &str {
        "image"
    }

    fn decode_to_rgba(&self, bytes: &[u8]) -> ImageResult<SourceImage> {
        let decoded = image::load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed {
            reason: e.to_string(),
        })?;

        let (width, height) = decoded.dimensions();
        debug!("Decoded {}x{} image ({:?})", width, height, decoded.color());

        let rgba = match decoded {
            image::DynamicImage::ImageRgba8(img) => img,
            other => other.to_rgba8(),
        };

        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(ImageError::InvalidDimensions {
                width: u64::from(rgba.width()),
                height: u64::from(rgba.height()),
            });
        }

        Ok(SourceImage::new(rgba))
    }

    fn resize(
        &self,
        image: &SourceImage,
        width: u32,
        height: u32,
        filter: ResampleFilter,
    ) -> ImageResult<SourceImage> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions {
                width: u64::from(width),
                height: u64::from(height),
            });
        }

        if image.dimensions() == (width, height) {
            return Ok(image.clone());
        }

        let resized =
            image::imageops::resize(image.as_image(), width, height, filter.to_filter_type());

        Ok(SourceImage::new(resized))
    }

    fn encode(&self, canvas: &Canvas, format: OutputFormat) -> ImageResult<Vec<u8>> {
        let mut bytes = Vec::new();

        match format {
            OutputFormat::Png => {
                let rgb = canvas.to_rgb8();
                PngEncoder::new(&mut bytes)
                    .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
                    .map_err(|e| ImageError::EncodeFailed {
                        reason: format!("Failed to encode PNG: {}", e),
                    })?;
            }
        }

        Ok(bytes)
    }
}
