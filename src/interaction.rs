//! The pointer/wheel state machine at the center of the editor.
//!
//! A single pointer-down/move/up sequence is routed to exactly one of
//! several mutually exclusive behaviors depending on what was under the
//! pointer and whether a placement tool is armed:
//!
//! ```text
//!                      ┌──────────────┐
//!          tool armed, │              │ release: commit by extent,
//!        ┌─────────────►   Drawing    ├──────── or place fixed size,
//!        │  background │              │         or discard
//!        │             └──────────────┘
//! ┌──────┴───┐         ┌──────────────┐         ┌──────────┐
//! │          │ down on │              │ release │          │
//! │   Idle   ├─────────►DraggingShape ├─────────►   Idle   │
//! │          │ a shape │              │ move or │          │
//! └──────┬───┘         └──────────────┘ select  └──────────┘
//!        │             ┌──────────────┐
//!        │ no tool,    │              │ release: maybe clear
//!        └─────────────►   Panning    ├──────── selection
//!           background │              │
//!                      └──────────────┘
//! ```
//!
//! Wheel zoom is orthogonal: it is applied in any state and never changes
//! the interaction state.
//!
//! Click-versus-drag disambiguation uses one uniform rule: a press-and-
//! release whose total screen movement stays under [`CLICK_DRAG_THRESHOLD`]
//! resolves as a click, anything larger commits to the drag behavior of the
//! current state.

use egui::{Pos2, Vec2, vec2};
use log::{debug, info};

use crate::document::{Document, DocumentError};
use crate::selection::Selection;
use crate::shape::{Shape, ShapeId, ShapeKind};
use crate::tool::ToolState;
use crate::viewport::{Viewport, WHEEL_ZOOM_STEP};

/// Edge length, in world units, of a shape placed by a plain click.
/// A circle uses twice this as its diameter so its radius matches, and a
/// triangle's box height approximates an equilateral triangle.
pub const INITIAL_SIZE: f32 = 50.0;

/// Smallest |width| and |height|, in world units, a drag-drawn shape may
/// have; anything smaller is discarded at release.
pub const MIN_EXTENT: f32 = 5.0;

/// Total screen movement, in pixels, below which a press-and-release
/// resolves as a click instead of a drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 4.0;

/// The narrow input contract the controller consumes. Positions are
/// screen-space; the controller converts through its viewport and performs
/// its own hit-testing against the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// One wheel notch; `scroll` only matters by sign (positive zooms in).
    Wheel { screen: Pos2, scroll: f32 },
    PointerDown { screen: Pos2 },
    PointerMove { screen: Pos2 },
    PointerUp { screen: Pos2 },
    /// Pointer capture was lost mid-gesture (pointer left the window while
    /// a button was down). Treated as a release at the last known position
    /// so no gesture is left stuck.
    PointerLost,
}

#[derive(Debug, Clone)]
enum InteractionState {
    Idle,
    /// Background drag: the viewport translation follows the pointer.
    Panning { press: Pos2, last: Pos2 },
    /// A tool is armed and a new shape is being dragged out. The transient
    /// shape is anchored at the press's world position; its extents may be
    /// zero or negative until commit.
    Drawing { shape: Shape, press: Pos2 },
    /// An existing shape is being dragged. Only the preview position moves;
    /// the store is untouched until release.
    DraggingShape {
        id: ShapeId,
        /// World-space offset from the shape origin to the grab point, so
        /// the shape does not jump under the cursor.
        grab: Vec2,
        press: Pos2,
        preview: Pos2,
    },
}

/// Owns the viewport, tool and selection state and routes input events into
/// viewport updates, shape creation, shape moves and selection changes.
///
/// The document is threaded through event handling as `&mut` rather than
/// owned, so the renderer and panels can read it between events.
pub struct InteractionController {
    viewport: Viewport,
    tools: ToolState,
    selection: Selection,
    state: InteractionState,
    last_pointer: Pos2,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    /// Constructor injection of the initial viewport keeps the state
    /// machine testable without a rendering host.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            tools: ToolState::default(),
            selection: Selection::default(),
            state: InteractionState::Idle,
            last_pointer: Pos2::ZERO,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The uncommitted shape being dragged out, if a draw gesture is in
    /// progress. Rendered as a live preview; not part of the document.
    pub fn drawing_preview(&self) -> Option<&Shape> {
        match &self.state {
            InteractionState::Drawing { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// The shape id being dragged and its current preview position, if a
    /// move gesture is in progress.
    pub fn drag_preview(&self) -> Option<(ShapeId, Pos2)> {
        match &self.state {
            InteractionState::DraggingShape { id, preview, .. } => Some((*id, *preview)),
            _ => None,
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        !matches!(self.state, InteractionState::Idle)
    }

    pub fn state_name(&self) -> &'static str {
        match self.state {
            InteractionState::Idle => "Idle",
            InteractionState::Panning { .. } => "Panning",
            InteractionState::Drawing { .. } => "Drawing",
            InteractionState::DraggingShape { .. } => "DraggingShape",
        }
    }

    /// Routes one input event. Store errors bubble up; they indicate a bug
    /// (id collision or stale id), not a user-facing failure.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        doc: &mut Document,
    ) -> Result<(), DocumentError> {
        match event {
            InputEvent::Wheel { screen, scroll } => {
                self.last_pointer = screen;
                self.on_wheel(screen, scroll);
                Ok(())
            }
            InputEvent::PointerDown { screen } => {
                self.last_pointer = screen;
                self.on_pointer_down(screen, doc);
                Ok(())
            }
            InputEvent::PointerMove { screen } => {
                self.last_pointer = screen;
                self.on_pointer_move(screen);
                Ok(())
            }
            InputEvent::PointerUp { screen } => {
                self.last_pointer = screen;
                self.on_pointer_up(screen, doc)
            }
            InputEvent::PointerLost => {
                if self.is_gesture_active() {
                    debug!("pointer capture lost, treating as release");
                    self.on_pointer_up(self.last_pointer, doc)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Zoom happens in any state and leaves the interaction state alone.
    fn on_wheel(&mut self, screen: Pos2, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let factor = if scroll > 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.viewport.zoom_around(screen, factor);
    }

    fn on_pointer_down(&mut self, screen: Pos2, doc: &Document) {
        let world = self.viewport.screen_to_world(screen);
        if let Some(shape) = doc.shape_at(world) {
            // Hitting a shape always starts a drag gesture; whether it ends
            // up selecting or moving is decided at release.
            self.state = InteractionState::DraggingShape {
                id: shape.id,
                grab: world - shape.pos,
                press: screen,
                preview: shape.pos,
            };
        } else if let Some(kind) = self.tools.armed() {
            let d = self.tools.defaults;
            self.state = InteractionState::Drawing {
                shape: Shape::new(kind, world, 0.0, 0.0, d.fill, d.stroke, d.stroke_width),
                press: screen,
            };
        } else {
            self.state = InteractionState::Panning {
                press: screen,
                last: screen,
            };
        }
        debug!("pointer down -> {}", self.state_name());
    }

    fn on_pointer_move(&mut self, screen: Pos2) {
        match &mut self.state {
            InteractionState::Idle => {}
            InteractionState::Panning { last, .. } => {
                self.viewport.pan_by(screen - *last);
                *last = screen;
            }
            InteractionState::Drawing { shape, .. } => {
                // Extents stay signed while dragging; a drag up-left of the
                // anchor is resolved by normalization at commit.
                let world = self.viewport.screen_to_world(screen);
                shape.width = world.x - shape.pos.x;
                shape.height = world.y - shape.pos.y;
            }
            InteractionState::DraggingShape { grab, preview, .. } => {
                let world = self.viewport.screen_to_world(screen);
                *preview = world - *grab;
            }
        }
    }

    fn on_pointer_up(&mut self, screen: Pos2, doc: &mut Document) -> Result<(), DocumentError> {
        let finished = std::mem::replace(&mut self.state, InteractionState::Idle);
        match finished {
            InteractionState::Idle => {}
            InteractionState::Panning { press, .. } => {
                if is_click(press, screen) {
                    debug!("background click, clearing selection");
                    self.selection.clear();
                }
            }
            InteractionState::Drawing { mut shape, press } => {
                if is_click(press, screen) {
                    // A plain click places the fixed default size at the
                    // anchor and disarms the tool.
                    let size = placement_size(shape.kind);
                    shape.width = size.x;
                    shape.height = size.y;
                    info!("placed {} at {:?} by click", shape.kind.label(), shape.pos);
                    doc.insert(shape)?;
                    self.tools.disarm();
                } else if shape.width.abs() >= MIN_EXTENT && shape.height.abs() >= MIN_EXTENT {
                    let shape = shape.normalized();
                    info!(
                        "committed drag-drawn {} at {:?} ({}x{})",
                        shape.kind.label(),
                        shape.pos,
                        shape.width,
                        shape.height
                    );
                    doc.insert(shape)?;
                    // The tool stays armed so the user can keep drawing.
                } else {
                    debug!("discarding drag-drawn shape below minimum extent");
                }
            }
            InteractionState::DraggingShape {
                id, press, preview, ..
            } => {
                if is_click(press, screen) {
                    debug!("shape click, selecting {id}");
                    self.selection.select(id);
                } else {
                    doc.update(id, |s| s.pos = preview)?;
                }
            }
        }
        Ok(())
    }
}

fn is_click(press: Pos2, release: Pos2) -> bool {
    (release - press).length() < CLICK_DRAG_THRESHOLD
}

/// Fixed extents for click placement, per kind.
fn placement_size(kind: ShapeKind) -> Vec2 {
    match kind {
        ShapeKind::Rectangle => vec2(INITIAL_SIZE, INITIAL_SIZE),
        // Diameter, so the radius equals INITIAL_SIZE.
        ShapeKind::Circle => vec2(2.0 * INITIAL_SIZE, 2.0 * INITIAL_SIZE),
        // Bounding box of an equilateral triangle with INITIAL_SIZE sides.
        ShapeKind::Triangle => vec2(INITIAL_SIZE, INITIAL_SIZE * 3.0_f32.sqrt() / 2.0),
    }
}
