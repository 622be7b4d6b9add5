//! Hit-testing of the nine interaction zones around a crop rectangle.

use crate::geometry::{Corner, DeviceRect, Point};

/// What a pointer position grabs on the crop rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Interior,
    #[default]
    None,
}

/// Side of an axis: `Low` is left/top, `High` is right/bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Low,
    High,
}

impl Zone {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Self::TopEdge | Self::BottomEdge | Self::LeftEdge | Self::RightEdge
        )
    }

    /// Edges and corners start a resize.
    pub fn is_resize(self) -> bool {
        self.is_corner() || self.is_edge()
    }

    /// Which vertical edge this zone drags, if any.
    pub(crate) fn horizontal(self) -> Option<Side> {
        match self {
            Self::LeftEdge | Self::TopLeft | Self::BottomLeft => Some(Side::Low),
            Self::RightEdge | Self::TopRight | Self::BottomRight => Some(Side::High),
            _ => None,
        }
    }

    /// Which horizontal edge this zone drags, if any.
    pub(crate) fn vertical(self) -> Option<Side> {
        match self {
            Self::TopEdge | Self::TopLeft | Self::TopRight => Some(Side::Low),
            Self::BottomEdge | Self::BottomLeft | Self::BottomRight => Some(Side::High),
            _ => None,
        }
    }

    /// The corner that must stay in place while this zone is dragged.
    ///
    /// For an edge the fixed corner lies on the opposite edge; the axis the
    /// edge does not move is pinned at its top/left side.
    pub fn fixed_corner(self) -> Option<Corner> {
        if !self.is_resize() {
            return None;
        }
        let left = self.horizontal() != Some(Side::Low);
        let top = self.vertical() != Some(Side::Low);
        Some(match (left, top) {
            (true, true) => Corner::TopLeft,
            (false, true) => Corner::TopRight,
            (true, false) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
        })
    }

    pub fn cursor(self) -> CursorHint {
        match self {
            Self::TopEdge | Self::BottomEdge => CursorHint::ResizeVertical,
            Self::LeftEdge | Self::RightEdge => CursorHint::ResizeHorizontal,
            Self::TopLeft | Self::BottomRight => CursorHint::ResizeDiagonalDown,
            Self::TopRight | Self::BottomLeft => CursorHint::ResizeDiagonalUp,
            Self::Interior => CursorHint::Move,
            Self::None => CursorHint::Default,
        }
    }
}

/// Cursor the host should show. Applying it is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    #[default]
    Default,
    /// West-east arrows.
    ResizeHorizontal,
    /// North-south arrows.
    ResizeVertical,
    /// North-west to south-east arrows.
    ResizeDiagonalDown,
    /// North-east to south-west arrows.
    ResizeDiagonalUp,
    Move,
}

/// The nine hit rectangles derived from a crop rectangle and a hover margin.
///
/// Edge zones span the edge length and extend `margin` to either side of
/// it; corner zones are `2 * margin` squares centred on each corner and
/// overlap the ends of the edge zones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleZones {
    pub top: DeviceRect,
    pub bottom: DeviceRect,
    pub left: DeviceRect,
    pub right: DeviceRect,
    pub top_left: DeviceRect,
    pub top_right: DeviceRect,
    pub bottom_left: DeviceRect,
    pub bottom_right: DeviceRect,
    pub interior: DeviceRect,
}

impl HandleZones {
    pub fn new(rect: DeviceRect, margin: f64) -> Self {
        let m = margin.max(0.0);
        Self {
            top: DeviceRect::new(rect.x1, rect.y1 - m, rect.x2, rect.y1 + m),
            bottom: DeviceRect::new(rect.x1, rect.y2 - m, rect.x2, rect.y2 + m),
            left: DeviceRect::new(rect.x1 - m, rect.y1, rect.x1 + m, rect.y2),
            right: DeviceRect::new(rect.x2 - m, rect.y1, rect.x2 + m, rect.y2),
            top_left: DeviceRect::around(rect.corner(Corner::TopLeft), m),
            top_right: DeviceRect::around(rect.corner(Corner::TopRight), m),
            bottom_left: DeviceRect::around(rect.corner(Corner::BottomLeft), m),
            bottom_right: DeviceRect::around(rect.corner(Corner::BottomRight), m),
            interior: rect,
        }
    }

    /// Corners are tested before edges so the small corner targets are not
    /// shadowed by the edge zones they overlap.
    pub fn classify(&self, p: Point) -> Zone {
        let ordered = [
            (self.top_left, Zone::TopLeft),
            (self.top_right, Zone::TopRight),
            (self.bottom_left, Zone::BottomLeft),
            (self.bottom_right, Zone::BottomRight),
            (self.top, Zone::TopEdge),
            (self.bottom, Zone::BottomEdge),
            (self.left, Zone::LeftEdge),
            (self.right, Zone::RightEdge),
            (self.interior, Zone::Interior),
        ];

        ordered
            .iter()
            .find(|(rect, _)| rect.contains(p))
            .map_or(Zone::None, |&(_, zone)| zone)
    }

    /// Hit rectangle of a zone, for highlighting.
    pub fn rect(&self, zone: Zone) -> Option<DeviceRect> {
        match zone {
            Zone::TopEdge => Some(self.top),
            Zone::BottomEdge => Some(self.bottom),
            Zone::LeftEdge => Some(self.left),
            Zone::RightEdge => Some(self.right),
            Zone::TopLeft => Some(self.top_left),
            Zone::TopRight => Some(self.top_right),
            Zone::BottomLeft => Some(self.bottom_left),
            Zone::BottomRight => Some(self.bottom_right),
            Zone::Interior => Some(self.interior),
            Zone::None => None,
        }
    }
}

/// Classify `pointer` against the zones of `rect`.
pub fn classify(pointer: Point, rect: DeviceRect, margin: f64) -> Zone {
    HandleZones::new(rect, margin).classify(pointer)
}
