//! Read-only view of a game state for renderers and logs.

use serde::Serialize;

use crate::game_state::GameState;
use crate::piece::Piece;
use crate::types::{ShapeId, Style, Vec2, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CubeSnapshot {
    pub x: i32,
    pub y: i32,
    pub style: Style,
}

impl CubeSnapshot {
    fn new(pos: Vec2, style: Style) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Style of each settled cell, `[y][x]`.
    pub board: [[Option<Style>; GRID_WIDTH]; GRID_HEIGHT],
    pub active_shape: ShapeId,
    /// Absolute board positions of the falling piece.
    pub active: Vec<CubeSnapshot>,
    pub next_shape: ShapeId,
    /// Cube offsets of the queued piece, for a preview box.
    pub next: Vec<CubeSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub total_cleared_rows: u32,
    pub game_end: bool,
}

impl GameSnapshot {
    /// True when the renderer should show the game-over indicator.
    pub fn show_game_over(&self) -> bool {
        self.game_end
    }
}

fn absolute_cubes(piece: &Piece) -> Vec<CubeSnapshot> {
    piece
        .cubes()
        .iter()
        .zip(piece.absolute_positions())
        .map(|(cube, pos)| CubeSnapshot::new(pos, cube.style))
        .collect()
}

fn preview_cubes(piece: &Piece) -> Vec<CubeSnapshot> {
    piece
        .cubes()
        .iter()
        .map(|cube| CubeSnapshot::new(cube.position, cube.style))
        .collect()
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let mut board = [[None; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in state.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board[y][x] = cell.map(|cube| cube.style);
            }
        }

        Self {
            board,
            active_shape: state.active.id(),
            active: absolute_cubes(&state.active),
            next_shape: state.next.id(),
            next: preview_cubes(&state.next),
            score: state.score,
            high_score: state.high_score,
            level: state.level,
            total_cleared_rows: state.total_cleared_rows,
            game_end: state.game_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedShapes;

    #[test]
    fn test_snapshot_reports_absolute_active_cubes() {
        let state = GameState::new(&mut ScriptedShapes::new([ShapeId::O, ShapeId::I]));
        let snap = state.snapshot();

        assert_eq!(snap.active_shape, ShapeId::O);
        assert_eq!(snap.next_shape, ShapeId::I);
        let cells: Vec<(i32, i32)> = snap.active.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
        assert!(snap.board.iter().flatten().all(|c| c.is_none()));
        assert!(!snap.show_game_over());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(&mut ScriptedShapes::repeat(ShapeId::T));
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["active_shape"], "T");
        assert_eq!(json["level"], 1);
        assert_eq!(json["active"][0]["style"], "blue");
        assert_eq!(json["board"].as_array().unwrap().len(), GRID_HEIGHT);
    }
}
