//! Terminal input: maps `crossterm` key events to engine commands.
//!
//! Only key presses become commands; repeats and timing are the driver's
//! business.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
