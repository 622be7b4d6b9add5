//! The crop-region editor: a pointer-driven state machine over a crop
//! rectangle held in relative space (authoritative, persisted) and in
//! device space (derived, and the working copy during a drag).
//!
//! The host feeds it the photo frame and pointer events, then reads back
//! the region, a cursor hint and a read-and-clear redraw flag. Drawing,
//! applying the cursor and persisting the region stay with the host.

mod drag;
mod frame;
mod pointer;
mod state;

use tracing::debug;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::geometry::{to_device, DeviceRect, PhotoFrame, RelativeRect};
use crate::handles::{CursorHint, HandleZones};

pub use state::{Anchor, Drag, InteractionState, Operation};

/// Interactive crop-region editor. Single-threaded; drive it from the UI
/// event loop.
#[derive(Clone, Debug)]
pub struct CropEditor {
    config: EditorConfig,
    enabled: bool,
    frame: PhotoFrame,
    relative: Option<RelativeRect>,
    device: Option<DeviceRect>,
    state: InteractionState,
    cursor: CursorHint,
    redraw: bool,
    commit: Option<RelativeRect>,
}

impl CropEditor {
    /// Create an editor with the configured initial region. No frame is set
    /// yet, so the editor starts disabled.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;

        let relative = config
            .initial_region
            .rect()
            .map(|rel| rel.sanitized(config.min_fraction));
        Ok(Self {
            config,
            enabled: true,
            frame: PhotoFrame::default(),
            relative,
            device: None,
            state: InteractionState::Idle,
            cursor: CursorHint::Default,
            redraw: false,
            commit: None,
        })
    }

    /// Create an editor around a previously persisted region.
    pub fn with_region(config: EditorConfig, region: RelativeRect) -> Result<Self> {
        let mut editor = Self::new(config)?;
        editor.load_relative_rect(region);
        Ok(editor)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn frame(&self) -> PhotoFrame {
        self.frame
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn operation(&self) -> Option<Operation> {
        match &self.state {
            InteractionState::Active(drag) => Some(drag.operation()),
            _ => None,
        }
    }

    /// True when crop editing is switched on and the frame has a positive
    /// size. Pointer events are ignored otherwise.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.frame.is_valid()
    }

    /// Switch editing on or off. Turning it off ends a running drag as a
    /// release would, without a final step.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        debug!(enabled, "Crop editing toggled");

        if !enabled {
            self.end_drag();
            self.state = InteractionState::Idle;
            self.cursor = CursorHint::Default;
        }
        self.enabled = enabled;
        self.redraw = true;
    }

    /// The region in device space, if one exists and a valid frame is set.
    pub fn device_rect(&self) -> Option<DeviceRect> {
        self.device
    }

    /// The region in relative space. `None` when there is no region, and
    /// while a new region is being dragged out but is still undersized.
    pub fn relative_rect(&self) -> Option<RelativeRect> {
        self.relative
    }

    /// Rectangle to draw: the rubber band while a new region is dragged
    /// out, otherwise the device rect.
    pub fn working_rect(&self) -> Option<DeviceRect> {
        match &self.state {
            InteractionState::Active(Drag {
                anchor: Anchor::CreateNew { working, .. },
                ..
            }) => *working,
            _ => self.device,
        }
    }

    /// Hit zones of the current region, for drawing handles and highlights.
    pub fn handle_zones(&self) -> Option<HandleZones> {
        self.device
            .map(|rect| HandleZones::new(rect, self.config.hover_margin))
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor
    }

    /// Return whether a repaint was requested since the last call, and
    /// clear the request.
    pub fn consume_redraw_flag(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Region committed by the last finished drag, if not yet consumed.
    /// This is the value to persist.
    pub fn consume_commit(&mut self) -> Option<RelativeRect> {
        self.commit.take()
    }

    /// Replace the region with one from storage. Out-of-range, inverted or
    /// undersized values are repaired rather than rejected. A running drag
    /// is abandoned.
    pub fn load_relative_rect(&mut self, rect: RelativeRect) {
        let rel = rect.sanitized(self.config.min_fraction);
        if rel != rect {
            debug!(?rect, repaired = ?rel, "Loaded crop region repaired");
        }

        if self.state.is_active() {
            self.state = InteractionState::Idle;
            self.cursor = CursorHint::Default;
        }
        self.relative = Some(rel);
        self.sync_device();
        self.redraw = true;
    }

    /// Re-derive the device rect from the relative rect and current frame.
    fn sync_device(&mut self) {
        self.device = if self.frame.is_valid() {
            self.relative.map(|rel| to_device(rel, self.frame))
        } else {
            None
        };
    }
}
