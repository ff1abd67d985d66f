//! Integer 2D vectors.
//!
//! Board coordinates grow to the right (x) and downwards (y), so a positive
//! 90° rotation turns a piece clockwise on screen.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Immutable pair of integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    pub const fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// `self + other * -1`.
    pub const fn sub(self, other: Vec2) -> Vec2 {
        self.add(other.scale(-1))
    }

    /// Componentwise multiply by `s`.
    pub const fn scale(self, s: i32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    /// Rotate by `degrees` around the origin, rounding both components.
    ///
    /// Only multiples of 90° are exact; the engine never uses anything else.
    ///
    /// ```
    /// use blockfall_types::Vec2;
    ///
    /// assert_eq!(Vec2::new(1, 0).rotate(90.0), Vec2::new(0, 1));
    /// assert_eq!(Vec2::new(2, -1).rotate(180.0), Vec2::new(-2, 1));
    /// ```
    pub fn rotate(self, degrees: f64) -> Vec2 {
        let rad = std::f64::consts::PI * degrees / 180.0;
        let (sin, cos) = rad.sin_cos();
        let x = self.x as f64;
        let y = self.y as f64;
        Vec2::new(
            (x * cos - y * sin).round() as i32,
            (x * sin + y * cos).round() as i32,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        self.scale(-1)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        self.scale(rhs)
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2::new(x, y)
    }
}
