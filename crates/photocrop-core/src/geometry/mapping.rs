use super::{unit, DeviceRect, PhotoFrame, RelativeRect};

/// Map a relative region onto the frame. Linear per axis, no clamping.
pub fn to_device(rel: RelativeRect, frame: PhotoFrame) -> DeviceRect {
    DeviceRect {
        x1: frame.x + rel.x1 * frame.width,
        y1: frame.y + rel.y1 * frame.height,
        x2: frame.x + rel.x2 * frame.width,
        y2: frame.y + rel.y2 * frame.height,
    }
}

/// Inverse of [`to_device`].
///
/// The result is clamped into `[0, 1]` because drag geometry can briefly
/// lie outside the frame. `frame` must be valid; a degenerate frame
/// collapses every coordinate to 0.
pub fn to_relative(dev: DeviceRect, frame: PhotoFrame) -> RelativeRect {
    let rel_x = |v: f64| unit((v - frame.x) / frame.width);
    let rel_y = |v: f64| unit((v - frame.y) / frame.height);

    RelativeRect {
        x1: rel_x(dev.x1),
        y1: rel_y(dev.y1),
        x2: rel_x(dev.x2),
        y2: rel_y(dev.y2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_relative_clamps_outside_values() {
        let frame = PhotoFrame::new(10.0, 10.0, 100.0, 50.0);
        let rel = to_relative(DeviceRect::new(-20.0, 0.0, 500.0, 30.0), frame);
        assert_eq!(rel, RelativeRect::new(0.0, 0.0, 1.0, 0.4));
    }

    #[test]
    fn test_to_relative_degenerate_frame_collapses() {
        let frame = PhotoFrame::new(0.0, 0.0, 0.0, 0.0);
        let rel = to_relative(DeviceRect::new(1.0, 2.0, 3.0, 4.0), frame);
        assert_eq!(rel, RelativeRect::default());
    }
}
