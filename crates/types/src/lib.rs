//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data: geometry, shape and rotation tags, style
//! tags and the command set fed to the transition engine. Gameplay logic
//! lives in `blockfall-core` and `blockfall-engine`.
//!
//! # Coordinates
//!
//! - **Width**: 10 columns, x grows to the right
//! - **Height**: 20 rows, y grows downwards (row 0 is the top)
//! - **Spawn anchor**: (2, 0)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, RotationState, ShapeId, Vec2, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(ShapeId::from_str("TShape"), Some(ShapeId::T));
//! assert_eq!(RotationState::Zero.clockwise(), RotationState::Right);
//! assert_eq!(Command::down(), Command::Move(Vec2::new(0, 1)));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (10, 20));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod geometry;

pub use geometry::Vec2;

/// Board width in cells.
pub const GRID_WIDTH: usize = 10;

/// Board height in cells.
pub const GRID_HEIGHT: usize = 20;

/// Canvas size the cube dimensions are derived from (pixels).
pub const CANVAS_WIDTH: u32 = 200;
pub const CANVAS_HEIGHT: u32 = 400;

/// Next-piece preview size (pixels).
pub const PREVIEW_WIDTH: u32 = 160;
pub const PREVIEW_HEIGHT: u32 = 80;

/// Rendered size of one cube. Gameplay never reads these.
pub const CUBE_WIDTH: u32 = CANVAS_WIDTH / GRID_WIDTH as u32;
pub const CUBE_HEIGHT: u32 = CANVAS_HEIGHT / GRID_HEIGHT as u32;

/// Anchor every new piece starts from.
pub const SPAWN_POSITION: Vec2 = Vec2::new(2, 0);

/// Tick interval before any speed-up (milliseconds).
pub const BASE_TICK_MS: u32 = 950;

/// Tick interval reduction per speed level (milliseconds).
pub const TICK_STEP_MS: u32 = 30;

/// Fastest tick interval (milliseconds).
pub const MIN_TICK_MS: u32 = 100;

/// Cleared rows per stored level step.
pub const ROWS_PER_LEVEL: u32 = 2;

/// Cleared rows per speed level step (the driver's tick policy).
pub const ROWS_PER_SPEED_LEVEL: u32 = 1;

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    O,
    I,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeId {
    /// Catalog order.
    pub const ALL: [ShapeId; 7] = [
        ShapeId::O,
        ShapeId::I,
        ShapeId::T,
        ShapeId::S,
        ShapeId::Z,
        ShapeId::L,
        ShapeId::J,
    ];

    /// Parse a catalog name (`"TShape"`) or bare letter (`"t"`), case-insensitive.
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("IShape"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("XShape"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "oshape" | "o" => Some(ShapeId::O),
            "ishape" | "i" => Some(ShapeId::I),
            "tshape" | "t" => Some(ShapeId::T),
            "sshape" | "s" => Some(ShapeId::S),
            "zshape" | "z" => Some(ShapeId::Z),
            "lshape" | "l" => Some(ShapeId::L),
            "jshape" | "j" => Some(ShapeId::J),
            _ => None,
        }
    }

    /// Catalog name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::O => "OShape",
            ShapeId::I => "IShape",
            ShapeId::T => "TShape",
            ShapeId::S => "SShape",
            ShapeId::Z => "ZShape",
            ShapeId::L => "LShape",
            ShapeId::J => "JShape",
        }
    }

    /// Position in [`ShapeId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn letter(&self) -> char {
        match self {
            ShapeId::O => 'O',
            ShapeId::I => 'I',
            ShapeId::T => 'T',
            ShapeId::S => 'S',
            ShapeId::Z => 'Z',
            ShapeId::L => 'L',
            ShapeId::J => 'J',
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display style tag carried by every cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Green,
    Red,
    Blue,
    Yellow,
    Purple,
    Cyan,
    Orange,
}

impl Style {
    /// SVG-style fill tag, e.g. `fill: green`.
    pub fn css(&self) -> &'static str {
        match self {
            Style::Green => "fill: green",
            Style::Red => "fill: red",
            Style::Blue => "fill: blue",
            Style::Yellow => "fill: yellow",
            Style::Purple => "fill: purple",
            Style::Cyan => "fill: cyan",
            Style::Orange => "fill: orange",
        }
    }
}

/// Orientation of a piece, 90° apart.
///
/// The clockwise cycle is `0 -> R -> 2 -> L -> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationState {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "L")]
    Left,
}

impl RotationState {
    /// Clockwise successor.
    ///
    /// ```
    /// use blockfall_types::RotationState;
    ///
    /// assert_eq!(RotationState::Zero.clockwise(), RotationState::Right);
    /// assert_eq!(RotationState::Right.clockwise(), RotationState::Two);
    /// assert_eq!(RotationState::Two.clockwise(), RotationState::Left);
    /// assert_eq!(RotationState::Left.clockwise(), RotationState::Zero);
    /// ```
    pub fn clockwise(&self) -> Self {
        match self {
            RotationState::Zero => RotationState::Right,
            RotationState::Right => RotationState::Two,
            RotationState::Two => RotationState::Left,
            RotationState::Left => RotationState::Zero,
        }
    }

    /// The transition taken by one clockwise turn from this state.
    pub fn clockwise_transition(&self) -> RotationTransition {
        RotationTransition {
            from: *self,
            to: self.clockwise(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RotationState::Zero => "0",
            RotationState::Right => "R",
            RotationState::Two => "2",
            RotationState::Left => "L",
        }
    }

    /// Parse `0`, `R`, `2` or `L`.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "0" => Some(RotationState::Zero),
            "R" | "r" => Some(RotationState::Right),
            "2" => Some(RotationState::Two),
            "L" | "l" => Some(RotationState::Left),
            _ => None,
        }
    }
}

impl fmt::Display for RotationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordered pair of rotation states, used as the wall-kick table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationTransition {
    pub from: RotationState,
    pub to: RotationState,
}

impl RotationTransition {
    pub const fn new(from: RotationState, to: RotationState) -> Self {
        Self { from, to }
    }

    /// Parse a `"<from>-><to>"` key such as `"0->R"`.
    ///
    /// ```
    /// use blockfall_types::{RotationState, RotationTransition};
    ///
    /// let t = RotationTransition::from_str("L->0").unwrap();
    /// assert_eq!(t, RotationTransition::new(RotationState::Left, RotationState::Zero));
    /// assert_eq!(t.to_string(), "L->0");
    /// assert_eq!(RotationTransition::from_str("0-R"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let (from, to) = s.split_once("->")?;
        Some(Self {
            from: RotationState::from_tag(from.trim())?,
            to: RotationState::from_tag(to.trim())?,
        })
    }
}

impl fmt::Display for RotationTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Commands the transition engine understands.
///
/// Drivers only ever send `Move` with `(-1, 0)`, `(1, 0)` or `(0, 1)`, but
/// any vector is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Translate the active piece. A blocked downward move lands it.
    Move(Vec2),
    /// Turn the active piece 90° clockwise, with wall kicks.
    Rotate,
    /// Start a fresh session, keeping only the high score.
    Restart,
}

impl Command {
    pub const fn left() -> Self {
        Command::Move(Vec2::new(-1, 0))
    }

    pub const fn right() -> Self {
        Command::Move(Vec2::new(1, 0))
    }

    /// The tick command.
    pub const fn down() -> Self {
        Command::Move(Vec2::new(0, 1))
    }

    /// Parse a command name (for scripted input), case-insensitive.
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("left"), Some(Command::left()));
    /// assert_eq!(Command::from_str("Rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::left()),
            "right" => Some(Command::right()),
            "down" | "tick" => Some(Command::down()),
            "rotate" => Some(Command::Rotate),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(v) if *v == Vec2::new(-1, 0) => "left",
            Command::Move(v) if *v == Vec2::new(1, 0) => "right",
            Command::Move(v) if *v == Vec2::new(0, 1) => "down",
            Command::Move(_) => "move",
            Command::Rotate => "rotate",
            Command::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_size_follows_viewport() {
        assert_eq!(CUBE_WIDTH, 20);
        assert_eq!(CUBE_HEIGHT, 20);
    }

    #[test]
    fn rotation_cycle_has_length_four() {
        let mut r = RotationState::Zero;
        for _ in 0..4 {
            r = r.clockwise();
        }
        assert_eq!(r, RotationState::Zero);
        assert_eq!(
            RotationState::Two.clockwise_transition().to_string(),
            "2->L"
        );
    }

    #[test]
    fn shape_names_round_trip_through_catalog_order() {
        for (i, id) in ShapeId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(ShapeId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn command_and_style_names() {
        assert_eq!(Command::right().as_str(), "right");
        assert_eq!(Command::Move(Vec2::new(0, 3)).as_str(), "move");
        assert_eq!(Style::Purple.css(), "fill: purple");
    }
}
