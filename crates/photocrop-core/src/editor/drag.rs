//! Geometry of a single drag step. The device rectangle is authoritative
//! here; callers derive the relative rectangle from the result.

use crate::geometry::{
    clamp_point, clamp_to_frame, enforce_min_size, Corner, DeviceRect, PhotoFrame, Point,
};
use crate::handles::{CursorHint, Side, Zone};

/// Move the edge(s) grabbed by `zone` to the pointer while `fixed` (the
/// `corner` position) stays put. Dragged edges stop `min_fraction` of the
/// frame short of the fixed ones and never cross them.
pub(crate) fn resized(
    current: DeviceRect,
    zone: Zone,
    corner: Corner,
    fixed: Point,
    pointer: Point,
    frame: PhotoFrame,
    min_fraction: f64,
) -> DeviceRect {
    let p = clamp_point(pointer, frame);
    let min_w = min_fraction * frame.width;
    let min_h = min_fraction * frame.height;

    let (x1, x2) = match zone.horizontal() {
        Some(Side::Low) => (p.x.min(fixed.x - min_w).max(frame.x), fixed.x),
        Some(Side::High) => (fixed.x, p.x.max(fixed.x + min_w).min(frame.right())),
        None => (current.x1, current.x2),
    };
    let (y1, y2) = match zone.vertical() {
        Some(Side::Low) => (p.y.min(fixed.y - min_h).max(frame.y), fixed.y),
        Some(Side::High) => (fixed.y, p.y.max(fixed.y + min_h).min(frame.bottom())),
        None => (current.y1, current.y2),
    };

    enforce_min_size(DeviceRect::new(x1, y1, x2, y2), min_fraction, frame, corner)
}

/// Translate a rect of fixed `size` so its origin sits at `pointer - offset`,
/// held inside the frame.
pub(crate) fn moved(pointer: Point, offset: Point, size: Point, frame: PhotoFrame) -> DeviceRect {
    let x = (pointer.x - offset.x)
        .min(frame.right() - size.x)
        .max(frame.x);
    let y = (pointer.y - offset.y)
        .min(frame.bottom() - size.y)
        .max(frame.y);

    DeviceRect::from_origin_size(Point::new(x, y), size.x, size.y)
}

/// Rubber band from the press point to the pointer.
pub(crate) fn spanned(down: Point, pointer: Point, frame: PhotoFrame) -> DeviceRect {
    let start = clamp_point(down, frame);
    let end = clamp_point(pointer, frame);

    clamp_to_frame(DeviceRect::from_corners(start, end), frame)
}

/// Diagonal cursor following the direction the rubber band is pulled.
pub(crate) fn span_cursor(down: Point, pointer: Point) -> CursorHint {
    let right = pointer.x >= down.x;
    let below = pointer.y >= down.y;
    if right == below {
        CursorHint::ResizeDiagonalDown
    } else {
        CursorHint::ResizeDiagonalUp
    }
}
