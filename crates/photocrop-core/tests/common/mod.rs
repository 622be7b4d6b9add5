#![allow(dead_code)]

use approx::assert_abs_diff_eq;

use photocrop_core::config::{EditorConfig, InitialRegion};
use photocrop_core::editor::CropEditor;
use photocrop_core::geometry::{DeviceRect, PhotoFrame, Point, RelativeRect};

pub const EPS: f64 = 1e-9;

pub const FRAME: PhotoFrame = PhotoFrame::new(0.0, 0.0, 400.0, 300.0);

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Editor on `frame` holding `region`, with the redraw flag cleared.
pub fn editor_with(frame: PhotoFrame, region: RelativeRect) -> CropEditor {
    let mut editor = CropEditor::with_region(EditorConfig::default(), region).unwrap();
    editor.set_frame(frame);
    editor.consume_redraw_flag();
    editor
}

/// Editor on `frame` with no region yet.
pub fn empty_editor(frame: PhotoFrame) -> CropEditor {
    let config = EditorConfig {
        initial_region: InitialRegion::Empty,
        ..EditorConfig::default()
    };
    let mut editor = CropEditor::new(config).unwrap();
    editor.set_frame(frame);
    editor.consume_redraw_flag();
    editor
}

pub fn assert_device_eq(actual: DeviceRect, expected: DeviceRect) {
    assert_abs_diff_eq!(actual.x1, expected.x1, epsilon = EPS);
    assert_abs_diff_eq!(actual.y1, expected.y1, epsilon = EPS);
    assert_abs_diff_eq!(actual.x2, expected.x2, epsilon = EPS);
    assert_abs_diff_eq!(actual.y2, expected.y2, epsilon = EPS);
}

pub fn assert_relative_eq(actual: RelativeRect, expected: RelativeRect, eps: f64) {
    assert_abs_diff_eq!(actual.x1, expected.x1, epsilon = eps);
    assert_abs_diff_eq!(actual.y1, expected.y1, epsilon = eps);
    assert_abs_diff_eq!(actual.x2, expected.x2, epsilon = eps);
    assert_abs_diff_eq!(actual.y2, expected.y2, epsilon = eps);
}

/// Check the structural guarantees that must hold after every event.
pub fn assert_invariants(editor: &CropEditor) {
    let min = editor.config().min_fraction;

    if let Some(rel) = editor.relative_rect() {
        for v in [rel.x1, rel.y1, rel.x2, rel.y2] {
            assert!((0.0..=1.0).contains(&v), "relative value out of range: {rel:?}");
        }
        assert!(rel.x1 <= rel.x2 && rel.y1 <= rel.y2, "inverted: {rel:?}");
        assert!(rel.meets_min_size(min), "too small: {rel:?}");
    }

    if let Some(dev) = editor.device_rect() {
        let frame = editor.frame();
        assert!(dev.x1 >= frame.x - EPS && dev.y1 >= frame.y - EPS, "outside: {dev:?}");
        assert!(
            dev.x2 <= frame.right() + EPS && dev.y2 <= frame.bottom() + EPS,
            "outside: {dev:?}"
        );
        assert!(dev.x1 <= dev.x2 && dev.y1 <= dev.y2, "inverted: {dev:?}");
    }
}

/// Deterministic xorshift generator for event sequences.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}
