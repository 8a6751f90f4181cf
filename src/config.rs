use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    imaging::{OutputFormat, ResampleFilter},
};

/// Backdrop width in pixels
pub const BACKGROUND_WIDTH: u32 = 5000;
/// Backdrop height in pixels
pub const BACKGROUND_HEIGHT: u32 = 3750;
/// Backdrop fill color
pub const BACKGROUND_COLOR: [u8; 3] = [89, 156, 170];
/// Height every overlay is scaled to
pub const TARGET_HEIGHT: u32 = 2500;
pub const INPUT_FOLDER: &str = "input_images";
pub const OUTPUT_FOLDER: &str = "output_images";
/// Accepted input extensions, matched case-insensitively
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpeg", "jpg"];

/// Main configuration for the Backdrop-Compositor
///
/// Built once at startup from the compiled-in constants and handed to the
/// [`Compositor`](crate::composition::Compositor); nothing reads these values
/// from process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backdrop settings
    pub canvas: CanvasConfig,

    /// Overlay scaling settings
    pub overlay: OverlayConfig,

    /// Input/output folder settings
    pub io: IoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            overlay: OverlayConfig::default(),
            io: IoConfig::default(),
        }
    }
}

impl Config {
    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed {
            reason: e.to_string(),
        })?;
        Ok(content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.overlay.validate()?;
        self.io.validate()?;
        Ok(())
    }
}

/// Backdrop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width (px)
    pub width: u32,

    /// Canvas height (px)
    pub height: u32,

    /// Fill color (RGB)
    pub color: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: BACKGROUND_WIDTH,
            height: BACKGROUND_HEIGHT,
            color: BACKGROUND_COLOR,
        }
    }
}

impl CanvasConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.size".to_string(),
                value: format!("{}x{}", self.width, self.height),
            }
            .into());
        }

        Ok(())
    }
}

/// Overlay scaling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Height of the overlay after resizing (px)
    pub target_height: u32,

    /// Resampling filter
    pub filter: ResampleFilter,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            target_height: TARGET_HEIGHT,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl OverlayConfig {
    fn validate(&self) -> Result<()> {
        if self.target_height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "overlay.target_height".to_string(),
                value: self.target_height.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Folder and file-type configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoConfig {
    /// Folder scanned for source images
    pub input_dir: PathBuf,

    /// Folder the composites are written to
    pub output_dir: PathBuf,

    /// Accepted extensions, lowercase and without the dot
    pub extensions: Vec<String>,

    /// Format every composite is encoded in
    pub format: OutputFormat,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_FOLDER),
            output_dir: PathBuf::from(OUTPUT_FOLDER),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            format: OutputFormat::Png,
        }
    }
}

impl IoConfig {
    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "io.extensions".to_string(),
                value: "[]".to_string(),
            }
            .into());
        }

        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.') || **e != e.to_ascii_lowercase())
        {
            return Err(ConfigError::InvalidValue {
                key: "io.extensions".to_string(),
                value: bad.clone(),
            }
            .into());
        }

        if self.input_dir == self.output_dir {
            return Err(ConfigError::InvalidValue {
                key: "io.output_dir".to_string(),
                value: self.output_dir.display().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
