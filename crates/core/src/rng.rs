//! RNG module - where new shapes come from
//!
//! Spawning takes an explicit [`ShapeSource`] so callers decide how pieces
//! are picked. [`SimpleRng`] draws uniformly (no bag); [`ScriptedShapes`]
//! replays a fixed list, which keeps tests and replays deterministic.

use crate::types::ShapeId;

/// Supplies the shape of each newly spawned piece.
pub trait ShapeSource {
    fn next_shape(&mut self) -> ShapeId;
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape(&mut self) -> ShapeId {
        (**self).next_shape()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle quickly; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current state, usable as a seed to resume the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> ShapeId {
        ShapeId::ALL[self.next_range(ShapeId::ALL.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of shapes.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    shapes: Vec<ShapeId>,
    cursor: usize,
}

impl ScriptedShapes {
    /// Panics if `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<ShapeId>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "scripted shape list must not be empty");
        Self { shapes, cursor: 0 }
    }

    /// Always the same shape.
    pub fn repeat(id: ShapeId) -> Self {
        Self::new(vec![id])
    }

    /// Shapes handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> ShapeId {
        let id = self.shapes[self.cursor % self.shapes.len()];
        self.cursor += 1;
        id
    }
}
