//! Transition engine - commands as pure state-to-state functions
//!
//! [`apply`] takes a [`GameState`], a [`Command`] and the source new pieces
//! are drawn from, and returns the next state. It never blocks, sleeps or
//! performs I/O. Drivers own the clock: they send `Command::down()` every
//! [`tick_interval`] and interleave player commands, and [`Session`] keeps
//! the state between calls.
//!
//! ```
//! use blockfall_engine::{apply, Command, GameState};
//! use blockfall_engine::core::ScriptedShapes;
//! use blockfall_engine::types::ShapeId;
//!
//! let mut source = ScriptedShapes::new([ShapeId::T, ShapeId::O]);
//! let state = GameState::new(&mut source);
//! let moved = apply(&state, Command::left(), &mut source);
//! assert_eq!(moved.active.position().x, 1);
//! ```

pub mod session;
pub mod speed;
pub mod transition;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use blockfall_core::GameState;
pub use blockfall_types::Command;

pub use session::{replay, Session};
pub use speed::{speed_level, tick_interval, tick_interval_ms};
pub use transition::{apply, land, step, wall_kick, SettleEvent, Step};
