//! Integration tests for full command sequences

use blockfall::core::{Board, Cube, GameState, ScriptedShapes};
use blockfall::engine::{apply, replay, step, Session};
use blockfall::types::{Command, ShapeId, Style, Vec2, GRID_WIDTH};

fn fill_rows(mut board: Board, rows: std::ops::RangeInclusive<i32>, skip: &[i32]) -> Board {
    for y in rows {
        for x in (0..GRID_WIDTH as i32).filter(|x| !skip.contains(x)) {
            board = board.with_cell(x, y, Cube::new(ShapeId::O, Vec2::new(x, y), Style::Green));
        }
    }
    board
}

fn drop_until_settled(session: &mut Session<ScriptedShapes>) -> usize {
    for moves in 1..=GRID_WIDTH * 4 {
        if session.dispatch(Command::down()).is_some() {
            return moves;
        }
    }
    panic!("piece never settled");
}

#[test]
fn test_i_piece_falls_to_floor() {
    let mut source = ScriptedShapes::new([ShapeId::I, ShapeId::T, ShapeId::O]);
    let state = GameState::new(&mut source);
    assert_eq!(state.active.position(), Vec2::new(2, 0));

    // The I piece is four cells tall, so sixteen free moves reach the floor.
    let after = replay(state, std::iter::repeat(Command::down()).take(16), &mut source);
    assert_eq!(after.active.id(), ShapeId::I);
    assert_eq!(after.active.position(), Vec2::new(2, 16));

    let landed = step(&after, Command::down(), &mut source);
    let event = landed.settled.expect("17th down move lands the piece");
    assert_eq!(event.cleared_rows, 0);
    assert_eq!(event.score_delta, 0);
    assert!(!event.game_over);

    let state = landed.state;
    for y in 16..20 {
        assert!(state.board.is_occupied(4, y));
    }
    assert_eq!(state.board.occupied_count(), 4);
    assert_eq!(state.active.id(), ShapeId::T);
    assert_eq!(state.active.position(), Vec2::new(2, 0));
    assert_eq!(state.next.id(), ShapeId::O);

    // Remaining moves of a 20-move sequence only move the promoted T piece.
    let state = replay(state, std::iter::repeat(Command::down()).take(3), &mut source);
    assert_eq!(state.active.position(), Vec2::new(2, 3));
    assert_eq!(state.score, 0);
    assert_eq!(state.total_cleared_rows, 0);
    assert_eq!(state.level, 1);
    assert!(!state.game_end);
}

#[test]
fn test_single_row_clear_scores_five() {
    let mut source = ScriptedShapes::repeat(ShapeId::O);
    let mut state = GameState::new(&mut source);
    // O covers columns 4 and 5.
    state.board = fill_rows(Board::new(), 19..=19, &[4, 5]);

    let mut session = Session::from_state(state, source);
    drop_until_settled(&mut session);

    let state = session.state();
    assert_eq!(state.score, 5);
    assert_eq!(state.high_score, 5);
    assert_eq!(state.total_cleared_rows, 1);
    assert_eq!(state.level, 1);
    // The upper half of the O dropped into the cleared row.
    assert_eq!(state.board.occupied_count(), 2);
    assert!(state.board.is_occupied(4, 19));
    assert!(state.board.is_occupied(5, 19));
}

#[test]
fn test_four_row_clear_scores_forty() {
    let mut source = ScriptedShapes::new([ShapeId::I, ShapeId::O]);
    let mut state = GameState::new(&mut source);
    state.board = fill_rows(Board::new(), 16..=19, &[4]);

    let mut session = Session::from_state(state, source);
    assert_eq!(drop_until_settled(&mut session), 17);

    let state = session.state();
    assert_eq!(state.score, 40);
    assert_eq!(state.total_cleared_rows, 4);
    assert_eq!(state.level, 3);
    assert_eq!(state.board.occupied_count(), 0);
    assert_eq!(session.tick_interval().as_millis(), 800);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut session = Session::new(ScriptedShapes::repeat(ShapeId::I));
    let mut landings = 0;
    while !session.state().game_end {
        drop_until_settled(&mut session);
        landings += 1;
    }
    // Five I pieces fill column 4 from row 19 to row 0.
    assert_eq!(landings, 5);

    let ended = session.state().clone();
    let mut source = ScriptedShapes::repeat(ShapeId::O);
    for command in [Command::left(), Command::down(), Command::Rotate] {
        assert_eq!(apply(&ended, command, &mut source), ended);
        assert!(!session.accepts(command));
    }
    assert!(session.accepts(Command::Restart));
}

#[test]
fn test_restart_keeps_high_score_only() {
    let mut source = ScriptedShapes::repeat(ShapeId::O);
    let mut state = GameState::new(&mut source);
    state.board = fill_rows(Board::new(), 19..=19, &[4, 5]);
    let mut session = Session::from_state(state, source);
    drop_until_settled(&mut session);
    assert_eq!(session.state().score, 5);

    session.dispatch(Command::Restart);
    let state = session.state();
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 5);
    assert_eq!(state.total_cleared_rows, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.board.occupied_count(), 0);
    assert!(!state.game_end);
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut source = ScriptedShapes::new([ShapeId::L, ShapeId::J]);
    let state = GameState::new(&mut source);
    let json = serde_json::to_value(state.snapshot()).unwrap();

    assert_eq!(json["active"].as_array().unwrap().len(), 4);
    assert_eq!(json["level"], 1);
    assert_eq!(json["game_end"], false);
}
