use egui::Pos2;
use thiserror::Error;

use crate::shape::{Shape, ShapeId};

/// Store errors indicate caller bugs (an id collision or a stale id), not
/// user-facing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("shape {0} is already in the document")]
    DuplicateId(ShapeId),
    #[error("shape {0} is not in the document")]
    NotFound(ShapeId),
}

/// The ordered collection of committed shapes. Insertion order is z-order:
/// earlier shapes render first, later ones on top.
///
/// The document performs no geometry beyond point lookup and has no side
/// effects outside the collection; all coordinate-space handling lives in
/// the interaction controller and viewport.
#[derive(Debug, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape. Rejects an id that is already present.
    pub fn insert(&mut self, shape: Shape) -> Result<(), DocumentError> {
        if self.shapes.iter().any(|s| s.id == shape.id) {
            return Err(DocumentError::DuplicateId(shape.id));
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Applies `mutate` to the shape with the given id. Identity (`id`,
    /// `kind`) is restored afterwards, so a mutator cannot change it.
    pub fn update(
        &mut self,
        id: ShapeId,
        mutate: impl FnOnce(&mut Shape),
    ) -> Result<(), DocumentError> {
        let shape = self
            .shapes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DocumentError::NotFound(id))?;
        let kind = shape.kind;
        mutate(shape);
        shape.id = id;
        shape.kind = kind;
        Ok(())
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// All shapes in insertion (= z) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Removes the shape if present; a missing id is a no-op.
    pub fn delete(&mut self, id: ShapeId) {
        self.shapes.retain(|s| s.id != id);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The topmost shape covering a world-space point, testing in reverse
    /// insertion order so the latest-rendered shape wins. A linear scan is
    /// fine at the tens-to-hundreds of shapes this editor targets.
    pub fn shape_at(&self, world: Pos2) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.hit_test(world))
    }
}
