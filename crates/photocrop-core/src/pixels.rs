use serde::{Deserialize, Serialize};

use crate::error::{CropError, Result};
use crate::geometry::RelativeRect;

/// A rectangle in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Check the rect is non-empty and fits within `src_w` x `src_h`.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(CropError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        let right = u64::from(self.x) + u64::from(self.width);
        let bottom = u64::from(self.y) + u64::from(self.height);
        if right > u64::from(src_w) || bottom > u64::from(src_h) {
            return Err(CropError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(*self)
    }
}

impl RelativeRect {
    /// Project the region onto an image of `width` x `height` pixels.
    ///
    /// Edges are rounded to the nearest pixel; the result is at least 1x1
    /// and never extends past the image.
    pub fn to_pixels(&self, width: u32, height: u32) -> Result<CropRect> {
        if width == 0 || height == 0 {
            return Err(CropError::InvalidDimensions { width, height });
        }

        let rel = self.sanitized(0.0);
        let (x, w) = pixel_span(rel.x1, rel.x2, width);
        let (y, h) = pixel_span(rel.y1, rel.y2, height);

        CropRect {
            x,
            y,
            width: w,
            height: h,
        }
        .validated(width, height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f64, hi: f64, size: u32) -> (u32, u32) {
    let size_f = f64::from(size);
    let start = ((lo * size_f).round() as u32).min(size - 1);
    let end = ((hi * size_f).round() as u32).clamp(start + 1, size);
    (start, end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_span_rounds() {
        assert_eq!(pixel_span(0.25, 0.75, 400), (100, 200));
        assert_eq!(pixel_span(0.3334, 0.6666, 3), (1, 1));
    }

    #[test]
    fn test_pixel_span_minimum_one() {
        assert_eq!(pixel_span(0.5, 0.5, 10), (5, 1));
        assert_eq!(pixel_span(1.0, 1.0, 10), (9, 1));
    }
}
