//! Terminal rendering for blockfall.
//!
//! Game state is drawn into a plain [`FrameBuffer`] by [`GameView`] (no I/O,
//! unit-testable), then flushed to the terminal by [`Terminal`] using
//! crossterm. Cells are two columns wide by default so they look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{style_color, GameView, Viewport};
pub use renderer::{changed_spans, encode_diff, encode_full, Terminal};
