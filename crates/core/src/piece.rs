//! Piece model - a shape instance with an anchor, cubes and rotation state.
//!
//! Cube positions of an active piece are relative to its anchor; the board
//! cell a cube covers is `anchor + cube.position`. Rotation only rewrites the
//! cube layout, the anchor stays where it is.

use arrayvec::ArrayVec;

use crate::shapes::{shape, Shape};
use crate::types::{RotationState, ShapeId, Style, Vec2, CUBE_HEIGHT, CUBE_WIDTH, SPAWN_POSITION};

/// Upper bound on cubes per piece.
pub const MAX_CUBES: usize = 4;

/// One unit block, either part of a piece or settled on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    /// Shape the cube came from.
    pub id: ShapeId,
    /// Relative to the piece anchor, or absolute once settled.
    pub position: Vec2,
    /// Render size in pixels; gameplay ignores it.
    pub width: u32,
    pub height: u32,
    pub style: Style,
}

impl Cube {
    pub fn new(id: ShapeId, position: Vec2, style: Style) -> Self {
        Self {
            id,
            position,
            width: CUBE_WIDTH,
            height: CUBE_HEIGHT,
            style,
        }
    }

    /// Copy of this cube at another position.
    pub fn at(&self, position: Vec2) -> Self {
        Self { position, ..*self }
    }
}

/// A falling (or queued) piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: &'static Shape,
    position: Vec2,
    cubes: ArrayVec<Cube, MAX_CUBES>,
    rotation: RotationState,
}

impl Piece {
    /// Build a piece of shape `id` whose anchor and cube offsets both start at `start`.
    pub fn new(id: ShapeId, start: Vec2) -> Self {
        let shape = shape(id);
        Self {
            shape,
            position: start,
            cubes: shape.layout(start),
            rotation: RotationState::Zero,
        }
    }

    /// New piece at the spawn anchor.
    pub fn spawn(id: ShapeId) -> Self {
        Self::new(id, SPAWN_POSITION)
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn id(&self) -> ShapeId {
        self.shape.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Board cells covered by this piece.
    pub fn absolute_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cubes.iter().map(move |c| self.position.add(c.position))
    }

    /// Same piece with its anchor moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            position: self.position.add(offset),
            ..self.clone()
        }
    }

    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    /// Cube layout turned 90° clockwise around the shape center.
    ///
    /// The square and shapes without a center come back unchanged. The
    /// rotation tag is left alone; callers commit it once the layout fits.
    pub fn rotated(&self) -> Self {
        let center = match self.shape.center {
            Some(center) if self.shape.id != ShapeId::O => center,
            _ => return self.clone(),
        };

        let cubes = self
            .cubes
            .iter()
            .map(|cube| cube.at(cube.position.sub(center).rotate(90.0).add(center)))
            .collect();

        Self {
            cubes,
            ..self.clone()
        }
    }
}
