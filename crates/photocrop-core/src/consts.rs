/// Distance (device pixels) around a crop edge that still grabs that edge.
pub const DEFAULT_HOVER_MARGIN: f64 = 5.0;

/// Smallest crop width/height as a fraction of the photo frame.
pub const DEFAULT_MIN_FRACTION: f64 = 0.02;

/// Inset on every side of the initial centred crop region (0.35 => 30% box).
pub const DEFAULT_CROP_INSET: f64 = 0.35;
