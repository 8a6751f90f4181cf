use crate::error::ImageError;

/// Largest resized overlay accepted, in pixels (about 400 MB as RGBA)
pub const MAX_OVERLAY_PIXELS: u64 = 100_000_000;

/// Where and how large the overlay lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Overlay width after resizing
    pub overlay_width: u32,

    /// Overlay height after resizing (always the target height)
    pub overlay_height: u32,

    /// Left edge on the canvas; negative when the overlay is wider than the canvas
    pub x: i64,

    /// Top edge on the canvas; negative when the overlay is taller than the canvas
    pub y: i64,
}

impl Placement {
    /// Scale a `source` (width, height) to `target_height` keeping its aspect
    /// ratio, and center it on a `canvas` (width, height).
    ///
    /// The new width is `floor(target_height * (width / height))` in f64 and
    /// both offsets use floor division, so an odd leftover pixel goes
    /// right/bottom. Overlays above [`MAX_OVERLAY_PIXELS`] are rejected.
    pub fn compute(
        source: (u32, u32),
        canvas: (u32, u32),
        target_height: u32,
    ) -> Result<Self, ImageError> {
        let (source_width, source_height) = source;
        if source_width == 0 || source_height == 0 || target_height == 0 {
            return Err(ImageError::InvalidDimensions {
                width: u64::from(source_width),
                height: u64::from(source_height),
            });
        }

        let aspect_ratio = f64::from(source_width) / f64::from(source_height);
        let scaled_width = (f64::from(target_height) * aspect_ratio).floor();

        let overlay_pixels = scaled_width * f64::from(target_height);
        if scaled_width < 1.0 || overlay_pixels > MAX_OVERLAY_PIXELS as f64 {
            return Err(ImageError::InvalidDimensions {
                width: scaled_width as u64,
                height: u64::from(target_height),
            });
        }
        let overlay_width = scaled_width as u32;

        let x = (i64::from(canvas.0) - i64::from(overlay_width)).div_euclid(2);
        let y = (i64::from(canvas.1) - i64::from(target_height)).div_euclid(2);

        Ok(Self {
            overlay_width,
            overlay_height: target_height,
            x,
            y,
        })
    }

    /// Whether any part of the overlay falls outside the canvas
    pub fn is_clipped(&self, canvas: (u32, u32)) -> bool {
        self.x < 0
            || self.y < 0
            || self.x + i64::from(self.overlay_width) > i64::from(canvas.0)
            || self.y + i64::from(self.overlay_height) > i64::from(canvas.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (u32, u32) = (5000, 3750);
    const TARGET: u32 = 2500;

    #[test]
    fn test_wide_source_fills_canvas_width() {
        let placement = Placement::compute((1000, 500), CANVAS, TARGET).unwrap();

        assert_eq!(placement.overlay_width, 5000);
        assert_eq!(placement.overlay_height, 2500);
        assert_eq!((placement.x, placement.y), (0, 625));
        assert!(!placement.is_clipped(CANVAS));
    }

    #[test]
    fn test_tall_source_is_centered() {
        let placement = Placement::compute((500, 1000), CANVAS, TARGET).unwrap();

        assert_eq!(placement.overlay_width, 1250);
        assert_eq!(placement.overlay_height, 2500);
        assert_eq!((placement.x, placement.y), (1875, 625));
    }

    #[test]
    fn test_width_is_truncated_not_rounded() {
        // 2500 * 2/3 = 1666.67
        let placement = Placement::compute((2, 3), CANVAS, TARGET).unwrap();
        assert_eq!(placement.overlay_width, 1666);
        // (5000 - 1666) / 2 = 1667
        assert_eq!(placement.x, 1667);
    }

    #[test]
    fn test_aspect_ratio_preserved_within_a_pixel() {
        let sources = [
            (1, 1),
            (640, 480),
            (1920, 1080),
            (1080, 1920),
            (333, 777),
            (4032, 3024),
            (12, 5000),
            (7, 3),
        ];

        for source in sources {
            let placement = Placement::compute(source, CANVAS, TARGET).unwrap();
            assert_eq!(placement.overlay_height, TARGET);

            let exact = f64::from(TARGET) * f64::from(source.0) / f64::from(source.1);
            let diff = (exact - f64::from(placement.overlay_width)).abs();
            assert!(diff <= 1.0, "{:?} -> {} (exact {})", source, placement.overlay_width, exact);

            assert_eq!(
                placement.x,
                (i64::from(CANVAS.0) - i64::from(placement.overlay_width)).div_euclid(2)
            );
            assert_eq!(placement.y, 625);
        }
    }

    #[test]
    fn test_overlay_wider_than_canvas_gets_negative_offset() {
        let placement = Placement::compute((3000, 1000), CANVAS, TARGET).unwrap();

        assert_eq!(placement.overlay_width, 7500);
        assert_eq!(placement.x, -1250);
        assert!(placement.is_clipped(CANVAS));
    }

    #[test]
    fn test_width_follows_float_truncation() {
        // 12 / 5000 * 2500 = 5.999... in f64
        let placement = Placement::compute((12, 5000), CANVAS, TARGET).unwrap();
        assert_eq!(placement.overlay_width, 5);

        // 201 / 100 * 100 = 200.999... in f64
        let placement = Placement::compute((201, 100), (200, 150), 100).unwrap();
        assert_eq!(placement.overlay_width, 200);
        assert_eq!(placement.x, 0);
    }

    #[test]
    fn test_negative_offset_uses_floor_division() {
        // 200 - 202 = -2 -> -1
        let placement = Placement::compute((202, 100), (200, 150), 100).unwrap();
        assert_eq!(placement.overlay_width, 202);
        assert_eq!(placement.x, -1);

        // 201 - 202 = -1 -> floor(-0.5) = -1, not 0
        let placement = Placement::compute((202, 100), (201, 150), 100).unwrap();
        assert_eq!(placement.x, -1);

        // taller than the canvas
        let placement = Placement::compute((10, 10), (200, 150), 151).unwrap();
        assert_eq!(placement.y, -1);
    }

    #[test]
    fn test_degenerate_width_is_rejected() {
        // 2500 / 10000 = 0.25 px
        let result = Placement::compute((1, 10_000), CANVAS, TARGET);
        assert!(matches!(
            result,
            Err(ImageError::InvalidDimensions { width: 0, height: 2500 })
        ));
    }

    #[test]
    fn test_oversized_overlay_is_rejected() {
        // 2500 * 10000 = 25,000,000 px wide
        let result = Placement::compute((100_000, 10), CANVAS, TARGET);
        assert!(matches!(
            result,
            Err(ImageError::InvalidDimensions { width: 25_000_000, height: 2500 })
        ));

        // 40000 x 2500 sits exactly on the limit
        let placement = Placement::compute((16, 1), CANVAS, TARGET).unwrap();
        assert_eq!(
            u64::from(placement.overlay_width) * u64::from(TARGET),
            MAX_OVERLAY_PIXELS
        );
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert!(Placement::compute((0, 10), CANVAS, TARGET).is_err());
        assert!(Placement::compute((10, 0), CANVAS, TARGET).is_err());
    }
}
