//! Device-space and relative-space rectangles and the pure functions that
//! map between them.
//!
//! Device space is the pixel grid of the canvas the photo is painted on.
//! Relative space normalises the photo frame to `[0, 1]` on both axes, which
//! makes a region independent of the canvas size and is what gets persisted.

mod bounds;
mod mapping;

use serde::{Deserialize, Serialize};

pub use bounds::{clamp_point, clamp_to_frame, enforce_min_size, normalize};
pub use mapping::{to_device, to_relative};

pub(crate) use bounds::{unit, widen_unit};

/// A position in device space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the photo is currently drawn on the canvas, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PhotoFrame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A frame with zero, negative or non-finite extent cannot host a crop
    /// region; the editor is disabled while such a frame is current.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn bounds(&self) -> DeviceRect {
        DeviceRect::new(self.x, self.y, self.right(), self.bottom())
    }
}

/// Crop region normalised to the photo frame. This is the persisted value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RelativeRect {
    /// The whole photo.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Square-inset region centred on the photo.
    pub fn centered(inset: f64) -> Self {
        let inset = unit(inset).min(0.5);
        Self::new(inset, inset, 1.0 - inset, 1.0 - inset)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x1, self.y1),
            Corner::TopRight => Point::new(self.x2, self.y1),
            Corner::BottomLeft => Point::new(self.x1, self.y2),
            Corner::BottomRight => Point::new(self.x2, self.y2),
        }
    }

    pub fn meets_min_size(&self, min_fraction: f64) -> bool {
        self.width() >= min_fraction && self.height() >= min_fraction
    }

    /// Repair a region from an untrusted source: non-finite values become 0,
    /// everything is clamped into `[0, 1]`, inverted axes are swapped and an
    /// undersized axis is widened to `min_fraction`.
    pub fn sanitized(&self, min_fraction: f64) -> Self {
        let (x1, x2) = ordered(unit(self.x1), unit(self.x2));
        let (y1, y2) = ordered(unit(self.y1), unit(self.y2));

        Self::new(x1, y1, x2, y2).with_min_size(min_fraction, Corner::TopLeft)
    }

    /// Widen an undersized axis to `min_fraction`, keeping the `anchor`
    /// corner's sides in place unless that would leave `[0, 1]`. The result
    /// passes [`meets_min_size`](Self::meets_min_size) without tolerance.
    pub fn with_min_size(&self, min_fraction: f64, anchor: Corner) -> Self {
        let (x1, x2) = widen_unit(self.x1, self.x2, min_fraction, anchor.is_left());
        let (y1, y2) = widen_unit(self.y1, self.y2, min_fraction, anchor.is_top());
        Self::new(x1, y1, x2, y2)
    }
}

/// Crop region in device space. Derived from [`RelativeRect`] and the
/// current [`PhotoFrame`] except while a drag is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl DeviceRect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle spanned by two arbitrary corner points.
    pub fn from_corners(a: Point, b: Point) -> Self {
        normalize(Self::new(a.x, a.y, b.x, b.y))
    }

    /// Rectangle of `width` x `height` whose top-left corner is `origin`.
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x1, self.y1),
            Corner::TopRight => Point::new(self.x2, self.y1),
            Corner::BottomLeft => Point::new(self.x1, self.y2),
            Corner::BottomRight => Point::new(self.x2, self.y2),
        }
    }

    /// Square of `2 * margin` centred on `p`.
    pub(crate) fn around(p: Point, margin: f64) -> Self {
        Self::new(p.x - margin, p.y - margin, p.x + margin, p.y + margin)
    }
}

/// A rectangle corner. During a resize it names the corner that stays put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// True when the corner sits on the left (low x) side.
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// True when the corner sits on the top (low y) side.
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
