use egui::{Pos2, Vec2, pos2, vec2};

/// Zoom limits. The transform degenerates numerically as the scale
/// approaches zero, and a runaway zoom-in is unusable, so the wheel zoom is
/// clamped to this range.
pub const MIN_SCALE: f32 = 0.05;
pub const MAX_SCALE: f32 = 20.0;

/// Zoom factor applied once per wheel event, no momentum.
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

/// The affine transform between screen space (pointer pixels) and world
/// space (shape geometry): a uniform scale plus a screen-space translation
/// of the world origin. No rotation, no independent x/y scale.
///
/// Scale and translation are only ever mutated through [`Viewport::zoom_around`]
/// and [`Viewport::pan_by`]; everything else converts through
/// [`Viewport::screen_to_world`] / [`Viewport::world_to_screen`] instead of
/// touching the fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    translation: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(scale: f32, translation: Vec2) -> Self {
        Self {
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
            translation,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.translation.x) / self.scale,
            (screen.y - self.translation.y) / self.scale,
        )
    }

    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        pos2(
            world.x * self.scale + self.translation.x,
            world.y * self.scale + self.translation.y,
        )
    }

    /// Scales a world-space length into screen pixels.
    pub fn length_to_screen(&self, len: f32) -> f32 {
        len * self.scale
    }

    /// Multiplies the scale by `factor` (clamped) while keeping the world
    /// point under `pivot` fixed on screen: the point under the cursor does
    /// not move during a zoom.
    ///
    /// The translation update uses the effective ratio after clamping, so
    /// the pivot invariant also holds when the clamp bites.
    pub fn zoom_around(&mut self, pivot: Pos2, factor: f32) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return;
        }
        let ratio = new_scale / self.scale;
        self.translation = vec2(
            pivot.x - (pivot.x - self.translation.x) * ratio,
            pivot.y - (pivot.y - self.translation.y) * ratio,
        );
        self.scale = new_scale;
    }

    /// Shifts the view by a screen-space delta. Used while the background
    /// itself is being dragged.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.translation += delta;
    }
}
