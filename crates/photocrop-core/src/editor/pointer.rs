use tracing::{debug, trace};

use super::drag::{moved, resized, span_cursor, spanned};
use super::{Anchor, CropEditor, Drag, InteractionState};
use crate::geometry::{to_device, to_relative, Corner, DeviceRect, Point};
use crate::handles::{classify, CursorHint, Zone};

impl CropEditor {
    /// Zone of the current region under `pos`, or [`Zone::None`] when there
    /// is no region.
    pub fn zone_at(&self, pos: Point) -> Zone {
        self.device
            .map_or(Zone::None, |rect| classify(pos, rect, self.config.hover_margin))
    }

    pub fn pointer_down(&mut self, pos: Point) {
        if !self.is_enabled() {
            return;
        }
        if self.state.is_active() {
            debug!("Pointer pressed during a drag, finishing the previous one");
            self.end_drag();
        }

        let zone = self.zone_at(pos);
        let anchor = match (zone, self.device) {
            (Zone::Interior, Some(rect)) => {
                let origin = rect.origin();
                let offset = Point::new(pos.x - origin.x, pos.y - origin.y);
                let size = Point::new(rect.width(), rect.height());
                Anchor::Move {
                    offset,
                    offset_relative: self.scale_to_unit(offset),
                    size,
                    size_relative: self.scale_to_unit(size),
                }
            }
            (zone, Some(rect)) if zone.is_resize() => {
                let Some(corner) = zone.fixed_corner() else {
                    return;
                };
                let device = rect.corner(corner);
                Anchor::Resize {
                    zone,
                    corner,
                    device,
                    relative: self.point_to_unit(device),
                }
            }
            _ if self.frame.contains(pos) => {
                let previous = self.relative.take();
                self.device = None;
                Anchor::CreateNew {
                    down: pos,
                    down_relative: self.point_to_unit(pos),
                    previous,
                    working: None,
                }
            }
            _ => return,
        };

        let drag = Drag {
            anchor,
            frame: self.frame,
        };
        debug!(operation = ?drag.operation(), x = pos.x, y = pos.y, "Drag started");

        self.cursor = match anchor {
            Anchor::CreateNew { .. } => CursorHint::ResizeDiagonalDown,
            _ => zone.cursor(),
        };
        self.state = InteractionState::Active(drag);
        self.redraw = true;
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if !self.is_enabled() {
            return;
        }

        match self.state {
            InteractionState::Active(mut drag) => {
                self.step(&mut drag, pos);
                self.state = InteractionState::Active(drag);
            }
            previous => self.hover(previous.zone(), pos),
        }
    }

    /// Release: apply the last step at `pos`, commit, then hover whatever
    /// lies under the pointer.
    pub fn pointer_up(&mut self, pos: Point) {
        if !self.is_enabled() {
            return;
        }
        let InteractionState::Active(mut drag) = self.state else {
            return;
        };

        self.step(&mut drag, pos);
        self.finish(drag);
        self.hover(Zone::None, pos);
        self.redraw = true;
    }

    /// The pointer left the tracked surface. A running drag keeps going and
    /// resumes with the next event.
    pub fn pointer_leave(&mut self) {
        if !self.is_enabled() {
            return;
        }

        self.cursor = CursorHint::Default;
        if let InteractionState::Hover(_) = self.state {
            self.state = InteractionState::Idle;
            self.redraw = true;
        }
    }

    /// Finish a running drag as a release would, without a final step.
    pub(super) fn end_drag(&mut self) {
        if let InteractionState::Active(drag) = self.state {
            self.finish(drag);
            self.state = InteractionState::Idle;
        }
    }

    fn hover(&mut self, previous: Zone, pos: Point) {
        let zone = self.zone_at(pos);
        self.state = match zone {
            Zone::None => InteractionState::Idle,
            zone => InteractionState::Hover(zone),
        };
        self.cursor = zone.cursor();

        if zone != previous {
            trace!(?zone, "Hover zone changed");
            self.redraw = true;
        }
    }

    fn step(&mut self, drag: &mut Drag, pos: Point) {
        if drag.frame != self.frame {
            drag.anchor.rebase(self.frame);
            drag.frame = self.frame;
            self.sync_device();
        }

        let frame = self.frame;
        let min_fraction = self.config.min_fraction;

        match &mut drag.anchor {
            Anchor::Resize {
                zone,
                corner,
                device,
                ..
            } => {
                let Some(current) = self.device else {
                    return;
                };
                let rect = resized(current, *zone, *corner, *device, pos, frame, min_fraction);
                self.store_step(rect, *corner);
                self.cursor = zone.cursor();
            }
            Anchor::Move { offset, size, .. } => {
                let rect = moved(pos, *offset, *size, frame);
                self.store_step(rect, Corner::TopLeft);
                self.cursor = CursorHint::Move;
            }
            Anchor::CreateNew { down, working, .. } => {
                let rect = spanned(*down, pos, frame);
                let rel = to_relative(rect, frame);
                *working = Some(rect);

                if rel.meets_min_size(min_fraction) {
                    self.device = Some(rect);
                    self.relative = Some(rel);
                } else {
                    self.device = None;
                    self.relative = None;
                }
                self.cursor = span_cursor(*down, pos);
            }
        }

        trace!(x = pos.x, y = pos.y, rect = ?self.device, "Drag step");
        self.redraw = true;
    }

    /// Keep a resized or moved rect. The minimum size is applied again in
    /// relative space, where `to_relative` may have rounded it away; the
    /// device rect only follows when that changed anything.
    fn store_step(&mut self, rect: DeviceRect, anchor: Corner) {
        let rel = to_relative(rect, self.frame);
        let kept = rel.with_min_size(self.config.min_fraction, anchor);

        self.device = Some(if kept == rel {
            rect
        } else {
            to_device(kept, self.frame)
        });
        self.relative = Some(kept);
    }

    fn finish(&mut self, drag: Drag) {
        match (drag.anchor, self.relative) {
            (Anchor::CreateNew { previous, .. }, None) => {
                debug!("New crop region below minimum size, discarded");
                self.relative = previous;
            }
            (_, Some(rel)) => {
                debug!(operation = ?drag.operation(), ?rel, "Crop region committed");
                self.commit = Some(rel);
            }
            (_, None) => {}
        }

        self.sync_device();
        self.redraw = true;
    }

    fn point_to_unit(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.frame.x) / self.frame.width,
            (p.y - self.frame.y) / self.frame.height,
        )
    }

    fn scale_to_unit(&self, p: Point) -> Point {
        Point::new(p.x / self.frame.width, p.y / self.frame.height)
    }
}
