//! Core game model - pure, deterministic, and testable
//!
//! This crate holds the data side of the falling-block engine: the shape
//! catalog, pieces, the board, scoring, and the game state aggregate. It has
//! no dependencies on UI, timers, or I/O; the command transitions that drive
//! these types live in `blockfall-engine`.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shapes, rotation centers and wall-kick tables
//! - [`piece`]: cubes, pieces, and center rotation
//! - [`board`]: 10x20 grid with collision, settlement and row clearing
//! - [`scoring`]: row-clear points and level
//! - [`rng`]: the explicit source of new shapes
//! - [`game_state`]: the aggregate threaded through every transition
//! - [`snapshot`]: read-only view for renderers and logs
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, GameState, Piece, SimpleRng};
//! use blockfall_core::types::{ShapeId, Vec2};
//!
//! let state = GameState::new(&mut SimpleRng::new(12345));
//! assert_eq!(state.level, 1);
//!
//! let piece = Piece::spawn(ShapeId::I).translated(Vec2::new(0, 16));
//! assert!(!Board::new().collides(&piece));
//! assert!(Board::new().collides(&piece.translated(Vec2::new(0, 1))));
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, Cell, ClearedRows};
pub use game_state::GameState;
pub use piece::{Cube, Piece, MAX_CUBES};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng};
pub use scoring::{calculate_level, calculate_score};
pub use shapes::{shape, shapes, KickTable, Shape, I_KICKS, TJL_KICKS};
pub use snapshot::{CubeSnapshot, GameSnapshot};
