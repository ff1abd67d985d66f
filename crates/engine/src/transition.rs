//! Command transitions - Move, Rotate and Restart as state-to-state functions.
//!
//! Every transition reads the old state and builds a new one; nothing is
//! edited in place. Collisions, landings and missing kick tables are ordinary
//! branches, never errors.

use serde::Serialize;

use crate::core::{calculate_level, calculate_score, Board, GameState, Piece, ShapeSource};
use crate::types::{Command, RotationTransition, Vec2};

/// Outcome of a piece landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettleEvent {
    pub cleared_rows: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// A transition result: the new state plus the landing it caused, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: GameState,
    pub settled: Option<SettleEvent>,
}

impl Step {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            settled: None,
        }
    }
}

/// Apply one command.
pub fn apply(state: &GameState, command: Command, source: &mut impl ShapeSource) -> GameState {
    step(state, command, source).state
}

/// Apply one command and report whether a piece landed.
///
/// Move and Rotate do nothing once the game has ended; Restart always applies.
pub fn step(state: &GameState, command: Command, source: &mut impl ShapeSource) -> Step {
    match command {
        Command::Move(_) | Command::Rotate if state.game_end => Step::quiet(state.clone()),
        Command::Move(offset) => move_active(state, offset, source),
        Command::Rotate => Step::quiet(rotate_active(state)),
        Command::Restart => Step::quiet(restart(state, source)),
    }
}

fn move_active(state: &GameState, offset: Vec2, source: &mut impl ShapeSource) -> Step {
    let moved = state.active.translated(offset);

    if !state.board.collides(&moved) {
        return Step::quiet(GameState {
            active: moved,
            ..state.clone()
        });
    }

    if offset.y > 0 {
        return land(state, source);
    }

    // Sideways into a wall or a settled cube.
    Step::quiet(state.clone())
}

/// Burn the active piece into the board where it stands, clear rows, score,
/// and promote the queued piece unless the board now reaches the top row.
pub fn land(state: &GameState, source: &mut impl ShapeSource) -> Step {
    let (board, cleared) = state.board.settle(&state.active).clear_full_rows();
    let cleared_rows = cleared.len() as u32;
    let total_cleared_rows = state.total_cleared_rows + cleared_rows;
    let score_delta = calculate_score(cleared.len());
    let score = state.score + score_delta;
    let game_over = board.is_game_over();

    let (active, next) = if game_over {
        (state.active.clone(), state.next.clone())
    } else {
        (state.next.clone(), Piece::spawn(source.next_shape()))
    };

    Step {
        state: GameState {
            board,
            game_end: game_over,
            active,
            next,
            score,
            high_score: score.max(state.high_score),
            level: calculate_level(total_cleared_rows),
            total_cleared_rows,
        },
        settled: Some(SettleEvent {
            cleared_rows,
            score_delta,
            game_over,
        }),
    }
}

fn rotate_active(state: &GameState) -> GameState {
    let transition = state.active.rotation().clockwise_transition();
    let rotated = state.active.rotated();

    let placed = if state.board.collides(&rotated) {
        wall_kick(&rotated, transition, &state.board)
    } else {
        Some(rotated)
    };

    match placed {
        Some(piece) => GameState {
            active: piece.with_rotation(transition.to),
            ..state.clone()
        },
        None => state.clone(),
    }
}

/// First kick offset, in table order, that moves `rotated` clear of the board.
///
/// `None` when the shape has no kick table or every candidate collides.
pub fn wall_kick(rotated: &Piece, transition: RotationTransition, board: &Board) -> Option<Piece> {
    let offsets = rotated.shape().kicks?.offsets(transition)?;
    offsets
        .iter()
        .map(|&offset| rotated.translated(offset))
        .find(|candidate| !board.collides(candidate))
}

fn restart(state: &GameState, source: &mut impl ShapeSource) -> GameState {
    GameState::with_high_score(source, state.high_score)
}
