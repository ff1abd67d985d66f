use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Cube, GameState, Piece, SimpleRng};
use blockfall::engine::{apply, replay};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Command, ShapeId, Style, Vec2};

fn bench_down_move(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let state = GameState::new(&mut rng);

    c.bench_function("apply_down", |b| {
        b.iter(|| apply(black_box(&state), Command::down(), &mut rng))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            board = board.with_cell(x, y, Cube::new(ShapeId::I, Vec2::new(x, y), Style::Red));
        }
    }

    c.bench_function("clear_4_rows", |b| b.iter(|| black_box(&board).clear_full_rows()));
}

fn bench_rotate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut state = GameState::new(&mut rng);
    state.active = Piece::spawn(ShapeId::T).translated(Vec2::new(-2, 5));

    c.bench_function("rotate_with_kick", |b| {
        b.iter(|| apply(black_box(&state), Command::Rotate, &mut rng))
    });
}

fn bench_replay(c: &mut Criterion) {
    let commands: Vec<Command> = (0..500)
        .map(|i| match i % 5 {
            0 => Command::left(),
            1 => Command::Rotate,
            2 => Command::right(),
            _ => Command::down(),
        })
        .collect();

    c.bench_function("replay_500", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(7);
            let initial = GameState::new(&mut rng);
            replay(initial, commands.iter().copied(), &mut rng)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let snapshot = GameState::new(&mut rng).snapshot();
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(black_box(&snapshot), Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_down_move,
    bench_line_clear,
    bench_rotate,
    bench_replay,
    bench_render
);
criterion_main!(benches);
