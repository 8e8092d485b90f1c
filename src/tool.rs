use egui::Color32;

use crate::shape::ShapeKind;

/// Style applied to newly created shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolDefaults {
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            fill: Color32::RED,
            stroke: Color32::BLACK,
            stroke_width: 2.0,
        }
    }
}

/// Which shape kind (if any) is armed for placement, plus the defaults new
/// shapes are created with. `armed == None` means the canvas is in pure
/// pan/zoom/select mode.
#[derive(Debug, Default)]
pub struct ToolState {
    armed: Option<ShapeKind>,
    pub defaults: ToolDefaults,
}

impl ToolState {
    pub fn armed(&self) -> Option<ShapeKind> {
        self.armed
    }

    pub fn is_armed(&self, kind: ShapeKind) -> bool {
        self.armed == Some(kind)
    }

    /// Toggles: arming the already-armed kind disarms, arming a different
    /// kind replaces it.
    pub fn arm(&mut self, kind: ShapeKind) {
        if self.armed == Some(kind) {
            self.armed = None;
        } else {
            self.armed = Some(kind);
        }
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }
}
