use crate::geometry::{Corner, DeviceRect, PhotoFrame, Point, RelativeRect};
use crate::handles::Zone;

/// Interaction mode. Exactly one is current; only pointer events move
/// between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Hover(Zone),
    Active(Drag),
}

impl InteractionState {
    /// Zone to highlight: the hovered zone, or the zone being dragged.
    pub fn zone(&self) -> Zone {
        match self {
            Self::Idle => Zone::None,
            Self::Hover(zone) => *zone,
            Self::Active(drag) => match drag.anchor {
                Anchor::Resize { zone, .. } => zone,
                Anchor::Move { .. } => Zone::Interior,
                Anchor::CreateNew { .. } => Zone::None,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Resize(Zone),
    Move,
    CreateNew,
}

/// A drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub anchor: Anchor,
    /// Frame the anchor's device values were captured against.
    pub frame: PhotoFrame,
}

impl Drag {
    pub fn operation(&self) -> Operation {
        match self.anchor {
            Anchor::Resize { zone, .. } => Operation::Resize(zone),
            Anchor::Move { .. } => Operation::Move,
            Anchor::CreateNew { .. } => Operation::CreateNew,
        }
    }
}

/// Data captured at pointer-down that later drag steps are computed from.
///
/// Device values are authoritative for the frame in [`Drag::frame`];
/// relative values let a drag be re-based onto a new frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Resize {
        zone: Zone,
        /// Corner that stays in place.
        corner: Corner,
        device: Point,
        relative: Point,
    },
    Move {
        /// Pointer offset from the rect's top-left corner.
        offset: Point,
        offset_relative: Point,
        /// Rect width/height.
        size: Point,
        size_relative: Point,
    },
    CreateNew {
        down: Point,
        down_relative: Point,
        /// Region to restore if the new one ends up too small.
        previous: Option<RelativeRect>,
        /// Rubber band, present after the first move.
        working: Option<DeviceRect>,
    },
}

impl Anchor {
    /// Recompute device values from the relative ones for `frame`.
    pub(crate) fn rebase(&mut self, frame: PhotoFrame) {
        let to_device =
            |p: Point| Point::new(frame.x + p.x * frame.width, frame.y + p.y * frame.height);
        let scale = |p: Point| Point::new(p.x * frame.width, p.y * frame.height);

        match self {
            Self::Resize {
                device, relative, ..
            } => *device = to_device(*relative),
            Self::Move {
                offset,
                offset_relative,
                size,
                size_relative,
            } => {
                *offset = scale(*offset_relative);
                *size = scale(*size_relative);
            }
            Self::CreateNew {
                down,
                down_relative,
                working,
                ..
            } => {
                *down = to_device(*down_relative);
                *working = None;
            }
        }
    }
}
