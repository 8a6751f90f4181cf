use image::buffer::ConvertBuffer;
use image::imageops::FilterType;
use image::{ImageBuffer, RgbImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Opaque backdrop that every output image is painted on
///
/// Stored as RGBA so overlays blend onto it directly; every pixel stays fully
/// opaque and the alpha channel is dropped on export.
#[derive(Clone, Debug)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a new canvas with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let [r, g, b] = color;
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([r, g, b, 255]));
        Self { buffer }
    }

    /// Get the width of the canvas
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the canvas
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Flatten to RGB for encoding
    pub fn to_rgb8(&self) -> RgbImage {
        self.buffer.convert()
    }

    /// Paste `overlay` with its top-left corner at `(x, y)`, using the overlay's
    /// own alpha channel as the mask.
    ///
    /// Offsets may be negative or push the overlay past the right/bottom edge;
    /// only the part that intersects the canvas is painted.
    pub fn paste_with_alpha(&mut self, overlay: &SourceImage, x: i64, y: i64) {
        image::imageops::overlay(&mut self.buffer, overlay.as_image(), x, y);
    }
}

/// Decoded input image, always RGBA
#[derive(Clone, Debug)]
pub struct SourceImage {
    buffer: RgbaImage,
}

impl SourceImage {
    pub fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }
}

/// Resampling filter used when scaling the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Lanczos3,
}

impl ResampleFilter {
    pub fn to_filter_type(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for ResampleFilter {
    fn default() -> Self {
        Self::Lanczos3
    }
}

/// Encoding used for every written canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
}

impl OutputFormat {
    /// File extension (without the dot) written for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Png
    }
}
