use tracing::debug;

use super::{CropEditor, InteractionState};
use crate::geometry::PhotoFrame;
use crate::handles::CursorHint;

impl CropEditor {
    /// Feed the photo's current on-screen rectangle.
    ///
    /// While idle or hovering, the device rect is rescaled at once so the
    /// region keeps its relative position. A running drag keeps its captured
    /// anchor and is re-based on its next step. A frame without positive
    /// size disables the editor until a valid one arrives.
    pub fn set_frame(&mut self, frame: PhotoFrame) {
        if frame == self.frame {
            return;
        }
        debug!(
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "Photo frame changed"
        );

        if !frame.is_valid() {
            self.end_drag();
            self.frame = frame;
            self.state = InteractionState::Idle;
            self.device = None;
            self.cursor = CursorHint::Default;
            self.redraw = true;
            return;
        }

        self.frame = frame;
        if self.state.is_active() {
            return;
        }
        self.sync_device();
        self.redraw = true;
    }
}
