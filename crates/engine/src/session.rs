//! Sessions - folding a command sequence over a state.
//!
//! The engine has no clock. Drivers interleave tick commands with input
//! commands in whatever order they arrive and feed them here one at a time;
//! the same commands in the same order always give the same final state.

use std::time::Duration;

use crate::core::{GameState, ShapeSource};
use crate::speed::tick_interval;
use crate::transition::{step, SettleEvent};
use crate::types::Command;

/// Left fold of [`apply`](crate::apply) over `commands`.
pub fn replay(
    initial: GameState,
    commands: impl IntoIterator<Item = Command>,
    source: &mut impl ShapeSource,
) -> GameState {
    commands
        .into_iter()
        .fold(initial, |state, command| step(&state, command, &mut *source).state)
}

/// A running game: the current state plus the source its pieces come from.
#[derive(Debug, Clone)]
pub struct Session<S> {
    state: GameState,
    source: S,
    seq: u64,
}

impl<S: ShapeSource> Session<S> {
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        Self {
            state,
            source,
            seq: 0,
        }
    }

    /// Resume from an existing state.
    pub fn from_state(state: GameState, source: S) -> Self {
        Self {
            state,
            source,
            seq: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Commands applied so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Apply one command, returning the landing it caused if any.
    pub fn dispatch(&mut self, command: Command) -> Option<SettleEvent> {
        let next = step(&self.state, command, &mut self.source);
        self.state = next.state;
        self.seq += 1;
        next.settled
    }

    /// Whether `command` can still change anything.
    ///
    /// Once the game has ended only Restart does.
    pub fn accepts(&self, command: Command) -> bool {
        matches!(command, Command::Restart) || self.state.playable()
    }

    /// Current interval between tick commands.
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.state.total_cleared_rows)
    }

    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.source)
    }
}
