//! Shape catalog - the seven piece shapes and their wall-kick tables.
//!
//! Each shape is a 0/1 matrix (row `y`, column `x`), a style tag, an optional
//! rotation center and an optional kick table. Kick offsets use board
//! coordinates, so positive y points down.
//!
//! Lookup is a direct index by [`ShapeId`]; the catalog is closed and static.

use arrayvec::ArrayVec;

use crate::piece::{Cube, MAX_CUBES};
use crate::types::{RotationState, RotationTransition, ShapeId, Style, Vec2};

/// Candidates tried per rotation transition.
pub const KICKS_PER_TRANSITION: usize = 5;

/// Wall-kick offsets keyed by `from->to` rotation transition.
#[derive(Debug, PartialEq, Eq)]
pub struct KickTable {
    entries: [(RotationTransition, [Vec2; KICKS_PER_TRANSITION]); 8],
}

impl KickTable {
    /// Ordered candidate offsets for `transition`, if the table has them.
    pub fn offsets(&self, transition: RotationTransition) -> Option<&[Vec2]> {
        self.entries
            .iter()
            .find(|(t, _)| *t == transition)
            .map(|(_, kicks)| kicks.as_slice())
    }

    /// Look up by the textual key, e.g. `"0->R"`.
    pub fn offsets_for_key(&self, key: &str) -> Option<&[Vec2]> {
        RotationTransition::from_str(key).and_then(|t| self.offsets(t))
    }

    pub fn transitions(&self) -> impl Iterator<Item = RotationTransition> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }
}

const fn v(x: i32, y: i32) -> Vec2 {
    Vec2::new(x, y)
}

const fn t(from: RotationState, to: RotationState) -> RotationTransition {
    RotationTransition::new(from, to)
}

use crate::types::RotationState::{Left as L, Right as R, Two, Zero};

/// Kicks shared by the T, J and L shapes.
pub static TJL_KICKS: KickTable = KickTable {
    entries: [
        (t(Zero, R), [v(0, 0), v(-1, 0), v(-1, 1), v(0, -2), v(-1, -2)]),
        (t(R, Zero), [v(0, 0), v(1, 0), v(1, -1), v(0, 2), v(1, 2)]),
        (t(R, Two), [v(0, 0), v(1, 0), v(1, -1), v(0, 2), v(1, 2)]),
        (t(Two, R), [v(0, 0), v(-1, 0), v(-1, 1), v(0, -2), v(-1, -2)]),
        (t(Two, L), [v(0, 0), v(1, 0), v(1, 1), v(0, -2), v(1, -2)]),
        (t(L, Two), [v(0, 0), v(-1, 0), v(-1, -1), v(0, 2), v(-1, 2)]),
        (t(L, Zero), [v(0, 0), v(-1, 0), v(-1, -1), v(0, 2), v(-1, 2)]),
        (t(Zero, L), [v(0, 0), v(1, 0), v(1, 1), v(0, -2), v(1, -2)]),
    ],
};

/// Long-bar kick data. Not attached to [`ShapeId::I`]: the bar rotates
/// around its center and is rejected when the plain rotation collides.
pub static I_KICKS: KickTable = KickTable {
    entries: [
        (t(Zero, R), [v(0, 0), v(-2, 0), v(1, 0), v(-2, -1), v(1, 2)]),
        (t(R, Zero), [v(0, 0), v(2, 0), v(-1, 0), v(2, 1), v(-1, -2)]),
        (t(R, Two), [v(0, 0), v(-1, 0), v(2, 0), v(-1, 2), v(2, -1)]),
        (t(Two, R), [v(0, 0), v(1, 0), v(-2, 0), v(1, -2), v(-2, 1)]),
        (t(Two, L), [v(0, 0), v(2, 0), v(-1, 0), v(2, 1), v(-1, -2)]),
        (t(L, Two), [v(0, 0), v(-2, 0), v(1, 0), v(-2, -1), v(1, 2)]),
        (t(L, Zero), [v(0, 0), v(1, 0), v(-2, 0), v(1, -2), v(-2, 1)]),
        (t(Zero, L), [v(0, 0), v(-1, 0), v(2, 0), v(-1, 2), v(2, -1)]),
    ],
};

/// Static catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub id: ShapeId,
    /// Occupied cells, indexed `[y][x]`.
    pub matrix: &'static [&'static [u8]],
    pub style: Style,
    /// Pivot for rotation. `None` means the shape never rotates.
    pub center: Option<Vec2>,
    pub kicks: Option<&'static KickTable>,
}

impl Shape {
    /// Cube layout for a piece starting at `start`: one cube per `1` cell,
    /// placed at `(x, y) + start`.
    pub fn layout(&self, start: Vec2) -> ArrayVec<Cube, MAX_CUBES> {
        let mut cubes = ArrayVec::new();
        for (y, row) in self.matrix.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == 1 {
                    cubes.push(Cube::new(
                        self.id,
                        Vec2::new(x as i32, y as i32).add(start),
                        self.style,
                    ));
                }
            }
        }
        cubes
    }

    /// Number of occupied matrix cells.
    pub fn cube_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&c| c == 1).count())
            .sum()
    }
}

// Kept in `ShapeId::ALL` order so `shape()` can index directly.
static SHAPES: [Shape; 7] = [
    // The square's true pivot sits between cells; it never rotates.
    Shape {
        id: ShapeId::O,
        matrix: &[&[1, 1], &[1, 1]],
        style: Style::Green,
        center: None,
        kicks: None,
    },
    Shape {
        id: ShapeId::I,
        matrix: &[&[1], &[1], &[1], &[1]],
        style: Style::Red,
        center: Some(v(0, 1)),
        kicks: None,
    },
    Shape {
        id: ShapeId::T,
        matrix: &[&[1, 1, 1], &[0, 1, 0]],
        style: Style::Blue,
        center: Some(v(1, 1)),
        kicks: Some(&TJL_KICKS),
    },
    Shape {
        id: ShapeId::S,
        matrix: &[&[0, 1, 1], &[1, 1, 0]],
        style: Style::Yellow,
        center: Some(v(1, 1)),
        kicks: None,
    },
    Shape {
        id: ShapeId::Z,
        matrix: &[&[1, 1, 0], &[0, 1, 1]],
        style: Style::Purple,
        center: Some(v(1, 1)),
        kicks: None,
    },
    Shape {
        id: ShapeId::L,
        matrix: &[&[1, 0, 0], &[1, 1, 1]],
        style: Style::Cyan,
        center: Some(v(1, 1)),
        kicks: Some(&TJL_KICKS),
    },
    Shape {
        id: ShapeId::J,
        matrix: &[&[0, 0, 1], &[1, 1, 1]],
        style: Style::Orange,
        center: Some(v(1, 1)),
        kicks: Some(&TJL_KICKS),
    },
];

/// Catalog lookup.
pub fn shape(id: ShapeId) -> &'static Shape {
    &SHAPES[id.index()]
}

/// All catalog entries, in [`ShapeId::ALL`] order.
pub fn shapes() -> &'static [Shape] {
    &SHAPES
}
