use egui::{Context, Event, Rect};

use crate::interaction::InputEvent;

/// Converts raw egui input into the controller's [`InputEvent`] contract.
///
/// Gestures only start inside the canvas rect (so panel interaction never
/// pans the canvas), but once a button is down the pointer is followed
/// everywhere until release, which gives the pointer-capture behavior the
/// gestures need. If the position disappears entirely mid-gesture, a
/// [`InputEvent::PointerLost`] is emitted instead of leaving the gesture
/// stuck.
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    pointer_down: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: None,
            pointer_down: false,
        }
    }

    /// Updated every frame by the central panel before polling.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Drains this frame's raw input into ordered [`InputEvent`]s.
    pub fn poll(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(canvas) = self.canvas_rect else {
            return events;
        };

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            // One zoom step per wheel event, only while hovering the canvas.
            if let Some(pos) = hover {
                if canvas.contains(pos) {
                    for event in &input.events {
                        if let Event::MouseWheel { delta, .. } = event {
                            if delta.y != 0.0 {
                                events.push(InputEvent::Wheel {
                                    screen: pos,
                                    scroll: delta.y,
                                });
                            }
                        }
                    }
                }
            }

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover {
                    if canvas.contains(pos) {
                        self.pointer_down = true;
                        events.push(InputEvent::PointerDown { screen: pos });
                    }
                }
            }

            if self.pointer_down {
                match hover {
                    Some(pos) => {
                        if input.pointer.delta() != egui::Vec2::ZERO {
                            events.push(InputEvent::PointerMove { screen: pos });
                        }
                        if input.pointer.primary_released() {
                            self.pointer_down = false;
                            events.push(InputEvent::PointerUp { screen: pos });
                        }
                    }
                    None => {
                        self.pointer_down = false;
                        events.push(InputEvent::PointerLost);
                    }
                }
            }
        });

        events
    }
}
