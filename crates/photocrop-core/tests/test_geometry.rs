mod common;

use approx::assert_abs_diff_eq;
use common::*;

use photocrop_core::geometry::{
    clamp_point, clamp_to_frame, enforce_min_size, normalize, to_device, to_relative, Corner,
    DeviceRect, PhotoFrame, RelativeRect,
};

#[test]
fn test_to_device_scales_and_offsets() {
    let frame = PhotoFrame::new(10.0, 20.0, 200.0, 100.0);
    let dev = to_device(RelativeRect::new(0.5, 0.0, 1.0, 0.5), frame);
    assert_device_eq(dev, DeviceRect::new(110.0, 20.0, 210.0, 70.0));
}

#[test]
fn test_round_trip_within_tolerance() {
    let mut rng = XorShift::new(7);

    for _ in 0..500 {
        let frame = PhotoFrame::new(
            rng.range(-500.0, 500.0),
            rng.range(-500.0, 500.0),
            rng.range(1.0, 4000.0),
            rng.range(1.0, 4000.0),
        );
        let a = rng.range(0.0, 1.0);
        let b = rng.range(0.0, 1.0);
        let rel = RelativeRect::new(a.min(b), 0.1, a.max(b), 0.9);

        let back = to_relative(to_device(rel, frame), frame);
        assert_relative_eq(back, rel, 1e-9);
    }
}

#[test]
fn test_to_relative_of_full_frame() {
    let frame = PhotoFrame::new(30.0, 40.0, 640.0, 480.0);
    let rel = to_relative(frame.bounds(), frame);
    assert_eq!(rel, RelativeRect::FULL);
}

#[test]
fn test_normalize_swaps_inverted_axes() {
    let rect = normalize(DeviceRect::new(300.0, 50.0, 100.0, 250.0));
    assert_eq!(rect, DeviceRect::new(100.0, 50.0, 300.0, 250.0));

    let ordered = DeviceRect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(normalize(ordered), ordered);
}

#[test]
fn test_clamp_to_frame() {
    let rect = clamp_to_frame(DeviceRect::new(-20.0, 50.0, 450.0, 500.0), FRAME);
    assert_eq!(rect, DeviceRect::new(0.0, 50.0, 400.0, 300.0));
}

#[test]
fn test_clamp_point() {
    let p = clamp_point(pt(-5.0, 1000.0), FRAME);
    assert_abs_diff_eq!(p.x, 0.0);
    assert_abs_diff_eq!(p.y, 300.0);
}

#[test]
fn test_enforce_min_size_grows_away_from_anchor() {
    let rect = DeviceRect::new(100.0, 100.0, 102.0, 101.0);

    let grown = enforce_min_size(rect, 0.02, FRAME, Corner::TopLeft);
    assert_device_eq(grown, DeviceRect::new(100.0, 100.0, 108.0, 106.0));

    let grown = enforce_min_size(rect, 0.02, FRAME, Corner::BottomRight);
    assert_device_eq(grown, DeviceRect::new(94.0, 95.0, 102.0, 101.0));
}

#[test]
fn test_enforce_min_size_stays_inside_frame() {
    let rect = DeviceRect::new(398.0, 0.0, 400.0, 2.0);
    let grown = enforce_min_size(rect, 0.02, FRAME, Corner::TopLeft);
    assert_device_eq(grown, DeviceRect::new(392.0, 0.0, 400.0, 6.0));
}

#[test]
fn test_enforce_min_size_keeps_large_rect() {
    let rect = DeviceRect::new(10.0, 10.0, 200.0, 200.0);
    assert_eq!(enforce_min_size(rect, 0.02, FRAME, Corner::TopLeft), rect);
}

#[test]
fn test_corner_opposites() {
    for corner in [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ] {
        let opposite = corner.opposite();
        assert_ne!(corner, opposite);
        assert_eq!(opposite.opposite(), corner);
        assert_ne!(corner.is_left(), opposite.is_left());
        assert_ne!(corner.is_top(), opposite.is_top());
    }
}

#[test]
fn test_frame_validity() {
    assert!(FRAME.is_valid());
    assert!(!PhotoFrame::default().is_valid());
    assert!(!PhotoFrame::new(0.0, 0.0, -10.0, 10.0).is_valid());
    assert!(!PhotoFrame::new(0.0, 0.0, f64::INFINITY, 10.0).is_valid());
}
