use egui::{Color32, Painter, Rect, Stroke};

use crate::document::Document;
use crate::interaction::InteractionController;
use crate::shape::{Shape, ShapeKind};
use crate::viewport::Viewport;

/// Stroke color overriding a shape's own stroke while it is selected.
/// Applied at paint time only, never persisted into the shape.
pub const SELECTION_HIGHLIGHT: Color32 = Color32::from_rgb(0, 255, 0);

const BACKGROUND: Color32 = Color32::from_gray(28);

/// Paints the document, the selection highlight and the controller's
/// transient previews through an egui painter, applying the viewport
/// transform. Reads everything, writes nothing.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        painter: &Painter,
        canvas: Rect,
        controller: &InteractionController,
        doc: &Document,
    ) {
        painter.rect_filled(canvas, 0.0, BACKGROUND);

        let viewport = controller.viewport();
        let dragged = controller.drag_preview();

        for shape in doc.shapes() {
            // The dragged shape follows the pointer; the stored position is
            // not updated until the gesture ends.
            let moved;
            let shape = match dragged {
                Some((id, preview)) if id == shape.id => {
                    moved = Shape {
                        pos: preview,
                        ..shape.clone()
                    };
                    &moved
                }
                _ => shape,
            };
            let selected = controller.selection().is_selected(shape.id);
            self.paint_shape(painter, viewport, shape, selected);
        }

        if let Some(preview) = controller.drawing_preview() {
            // The transient shape may have negative extents mid-drag.
            let preview = preview.clone().normalized();
            self.paint_shape(painter, viewport, &preview, false);
        }
    }

    fn paint_shape(&self, painter: &Painter, viewport: &Viewport, shape: &Shape, selected: bool) {
        let stroke_color = if selected {
            SELECTION_HIGHLIGHT
        } else {
            shape.stroke
        };
        let stroke = Stroke::new(viewport.length_to_screen(shape.stroke_width), stroke_color);

        match shape.kind {
            ShapeKind::Rectangle => {
                let rect = Rect::from_min_max(
                    viewport.world_to_screen(shape.bounding_rect().min),
                    viewport.world_to_screen(shape.bounding_rect().max),
                );
                painter.rect_filled(rect, 0.0, shape.fill);
                painter.rect_stroke(rect, 0.0, stroke);
            }
            ShapeKind::Circle => {
                let center = viewport.world_to_screen(shape.center());
                let radius = viewport.length_to_screen(shape.width / 2.0);
                painter.circle(center, radius, shape.fill, stroke);
            }
            ShapeKind::Triangle => {
                let points = shape
                    .triangle_points()
                    .iter()
                    .map(|p| viewport.world_to_screen(*p))
                    .collect();
                painter.add(egui::Shape::convex_polygon(points, shape.fill, stroke));
            }
        }
    }
}
