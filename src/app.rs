use egui::{Painter, Rect};
use log::error;

use crate::document::Document;
use crate::input::InputHandler;
use crate::interaction::InteractionController;
use crate::panels::{self, PropertiesPanel};
use crate::renderer::Renderer;

/// Top-level application state: the shape document plus the interaction
/// controller that owns viewport, tool and selection state. Everything is
/// session-scoped; nothing is persisted.
#[derive(Default)]
pub struct CanvasApp {
    document: Document,
    controller: InteractionController,
    input: InputHandler,
    renderer: Renderer,
    properties: PropertiesPanel,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    /// Routes this frame's raw input through the interaction controller.
    /// Store errors surfacing here are bugs, not user-facing conditions.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.poll(ctx) {
            if let Err(err) = self.controller.handle_event(event, &mut self.document) {
                error!("interaction rejected by the shape store: {err}");
            }
        }
    }

    pub fn paint(&self, painter: &Painter, canvas: Rect) {
        self.renderer
            .render(painter, canvas, &self.controller, &self.document);
    }

    pub fn properties_ui(&mut self, ui: &mut egui::Ui) {
        let selected = self.controller.selection().selected();
        self.properties.ui(ui, &mut self.document, selected);
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
