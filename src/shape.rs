use egui::{Color32, Pos2, Rect, pos2, vec2};
use uuid::Uuid;

/// Unique identity of a shape. Assigned at creation, never reassigned and
/// never reused after deletion.
///
/// Backed by a random UUID so that rapid successive creation cannot collide
/// the way wall-clock ids do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The primitive kinds the editor can place. Fixed at shape creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

/// A shape as stored in the document.
///
/// All geometry is world-space. `pos` is the top-left corner of the bounding
/// box for every kind; a circle is the disc inscribed against the box center
/// with radius `width / 2`, and a triangle is a regular 3-gon centered on the
/// box with radius `max(width, height) / 2`, first vertex pointing up.
///
/// Committed shapes always have positive extents. A transient shape held by
/// the interaction controller during a drag may carry zero or negative
/// `width`/`height` until it is normalized at commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// World-space bounding-box origin (top-left).
    pub pos: Pos2,
    pub width: f32,
    pub height: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl Shape {
    pub fn new(
        kind: ShapeKind,
        pos: Pos2,
        width: f32,
        height: f32,
        fill: Color32,
        stroke: Color32,
        stroke_width: f32,
    ) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            pos,
            width,
            height,
            fill,
            stroke,
            stroke_width,
        }
    }

    /// World-space bounding box. Only meaningful for normalized extents.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_min_size(self.pos, vec2(self.width, self.height))
    }

    pub fn center(&self) -> Pos2 {
        pos2(self.pos.x + self.width / 2.0, self.pos.y + self.height / 2.0)
    }

    /// Flips negative extents so the bounding box keeps its on-screen
    /// footprint: the origin moves to the true top-left and `width`/`height`
    /// become positive.
    pub fn normalized(mut self) -> Self {
        self.pos.x += self.width.min(0.0);
        self.pos.y += self.height.min(0.0);
        self.width = self.width.abs();
        self.height = self.height.abs();
        self
    }

    /// Vertices of the triangle kind: a regular 3-gon centered on the
    /// bounding box, radius `max(width, height) / 2`, apex up.
    pub fn triangle_points(&self) -> [Pos2; 3] {
        let c = self.center();
        let r = self.width.max(self.height) / 2.0;
        // cos/sin of the 30 degree vertex angles
        let dx = r * 3.0_f32.sqrt() / 2.0;
        let dy = r / 2.0;
        [
            pos2(c.x, c.y - r),
            pos2(c.x + dx, c.y + dy),
            pos2(c.x - dx, c.y + dy),
        ]
    }

    /// Whether a world-space point falls inside the shape's geometry
    /// (not just its bounding box).
    pub fn hit_test(&self, world: Pos2) -> bool {
        match self.kind {
            ShapeKind::Rectangle => self.bounding_rect().contains(world),
            ShapeKind::Circle => {
                let r = self.width / 2.0;
                (world - self.center()).length_sq() <= r * r
            }
            ShapeKind::Triangle => point_in_triangle(world, self.triangle_points()),
        }
    }
}

fn point_in_triangle(p: Pos2, [a, b, c]: [Pos2; 3]) -> bool {
    // Point is inside iff it is on the same side of all three edges.
    let edge = |from: Pos2, to: Pos2| {
        (to.x - from.x) * (p.y - from.y) - (to.y - from.y) * (p.x - from.x)
    };
    let (d1, d2, d3) = (edge(a, b), edge(b, c), edge(c, a));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
