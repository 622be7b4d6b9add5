use super::{Corner, DeviceRect, PhotoFrame, Point};

/// Swap components so that `x1 <= x2` and `y1 <= y2`.
pub fn normalize(rect: DeviceRect) -> DeviceRect {
    DeviceRect {
        x1: rect.x1.min(rect.x2),
        y1: rect.y1.min(rect.y2),
        x2: rect.x1.max(rect.x2),
        y2: rect.y1.max(rect.y2),
    }
}

/// Clip every coordinate into the frame.
pub fn clamp_to_frame(rect: DeviceRect, frame: PhotoFrame) -> DeviceRect {
    let cx = |v: f64| v.max(frame.x).min(frame.right());
    let cy = |v: f64| v.max(frame.y).min(frame.bottom());

    DeviceRect {
        x1: cx(rect.x1),
        y1: cy(rect.y1),
        x2: cx(rect.x2),
        y2: cy(rect.y2),
    }
}

pub fn clamp_point(p: Point, frame: PhotoFrame) -> Point {
    Point {
        x: p.x.max(frame.x).min(frame.right()),
        y: p.y.max(frame.y).min(frame.bottom()),
    }
}

/// Grow `rect` to at least `min_fraction` of the frame on both axes.
///
/// The `anchor` corner stays fixed and the opposite side moves outward. If
/// that would cross the frame boundary the rectangle is pushed back inside,
/// so the result is always contained in `frame`.
pub fn enforce_min_size(
    rect: DeviceRect,
    min_fraction: f64,
    frame: PhotoFrame,
    anchor: Corner,
) -> DeviceRect {
    let min = min_fraction.clamp(0.0, 1.0);

    let (x1, x2) = widen_axis(
        rect.x1,
        rect.x2,
        min * frame.width,
        anchor.is_left(),
        frame.x,
        frame.right(),
    );
    let (y1, y2) = widen_axis(
        rect.y1,
        rect.y2,
        min * frame.height,
        anchor.is_top(),
        frame.y,
        frame.bottom(),
    );

    DeviceRect { x1, y1, x2, y2 }
}

/// Widen `[lo, hi]` to `min_len`. With `pin_low` the low end stays and the
/// high end grows, otherwise the reverse; either way the span is kept
/// inside `[start, end]`.
pub(crate) fn widen_axis(
    lo: f64,
    hi: f64,
    min_len: f64,
    pin_low: bool,
    start: f64,
    end: f64,
) -> (f64, f64) {
    if hi - lo >= min_len {
        return (lo, hi);
    }

    if pin_low {
        let hi = lo + min_len;
        if hi > end {
            (end - min_len, end)
        } else {
            (lo, hi)
        }
    } else {
        let lo = hi - min_len;
        if lo < start {
            (start, start + min_len)
        } else {
            (lo, hi)
        }
    }
}

/// Widen `[lo, hi]` inside `[0, 1]` until `hi - lo >= min` holds as
/// computed, stepping the moving end by one ulp where rounding fell short.
pub(crate) fn widen_unit(lo: f64, hi: f64, min: f64, pin_low: bool) -> (f64, f64) {
    let min = min.clamp(0.0, 1.0);
    let (mut lo, mut hi) = widen_axis(lo, hi, min, pin_low, 0.0, 1.0);

    while hi - lo < min {
        if (pin_low && hi < 1.0) || lo <= 0.0 {
            hi = next_up(hi).min(1.0);
        } else {
            lo = next_down(lo).max(0.0);
        }
    }
    (lo, hi)
}

// Both helpers expect finite, non-negative input.
fn next_up(v: f64) -> f64 {
    if v == 0.0 {
        f64::from_bits(1)
    } else {
        f64::from_bits(v.to_bits() + 1)
    }
}

fn next_down(v: f64) -> f64 {
    if v <= 0.0 {
        0.0
    } else {
        f64::from_bits(v.to_bits() - 1)
    }
}

/// Clamp into `[0, 1]`; NaN and infinities map to 0.
pub(crate) fn unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_axis_keeps_pinned_end() {
        assert_eq!(widen_axis(10.0, 12.0, 8.0, true, 0.0, 100.0), (10.0, 18.0));
        assert_eq!(widen_axis(10.0, 12.0, 8.0, false, 0.0, 100.0), (4.0, 12.0));
    }

    #[test]
    fn test_widen_axis_pushes_back_inside() {
        assert_eq!(widen_axis(97.0, 99.0, 8.0, true, 0.0, 100.0), (92.0, 100.0));
        assert_eq!(widen_axis(1.0, 3.0, 8.0, false, 0.0, 100.0), (0.0, 8.0));
    }

    #[test]
    fn test_widen_axis_leaves_large_spans() {
        assert_eq!(widen_axis(10.0, 50.0, 8.0, true, 0.0, 100.0), (10.0, 50.0));
    }

    #[test]
    fn test_widen_unit_meets_min_exactly() {
        for i in 0..=1000 {
            let v = f64::from(i) / 1000.0;
            for pin_low in [true, false] {
                let (lo, hi) = widen_unit(v, v, 0.02, pin_low);
                assert!(hi - lo >= 0.02, "{v} {pin_low}: {lo}..{hi}");
                assert!(lo >= 0.0 && hi <= 1.0);
            }
        }
    }

    #[test]
    fn test_widen_unit_keeps_pinned_end() {
        assert_eq!(widen_unit(0.5, 0.5, 0.25, true), (0.5, 0.75));
        assert_eq!(widen_unit(0.5, 0.5, 0.25, false), (0.25, 0.5));
        assert_eq!(widen_unit(0.0, 1.0, 1.0, true), (0.0, 1.0));
    }

    #[test]
    fn test_unit_non_finite() {
        assert_eq!(unit(f64::NAN), 0.0);
        assert_eq!(unit(f64::INFINITY), 0.0);
        assert_eq!(unit(-0.5), 0.0);
        assert_eq!(unit(1.5), 1.0);
    }
}
