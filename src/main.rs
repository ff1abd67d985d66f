//! Terminal blockfall runner (default binary).
//!
//! Feeds key presses and timed down-moves into an engine [`Session`] and
//! draws each state with the framebuffer renderer.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::Config;
use blockfall::core::SimpleRng;
use blockfall::engine::Session;
use blockfall::input::{command_for_key, should_quit};
use blockfall::session_log::{LogRecord, SessionLog};
use blockfall::term::{FrameBuffer, GameView, Terminal, Viewport};
use blockfall::types::Command;

type Log = SessionLog<BufWriter<File>>;

fn main() -> Result<()> {
    let config = Config::from_env();
    eprintln!("[blockfall] seed {}", config.seed);

    let mut log = match &config.log_path {
        Some(path) => {
            eprintln!("[blockfall] logging session to {}", path);
            Some(SessionLog::open(path)?)
        }
        None => None,
    };

    let mut session = Session::new(SimpleRng::new(config.seed));
    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            eprintln!("[blockfall] session log flush failed: {}", e);
        }
    }
    let state = session.state();
    eprintln!(
        "[blockfall] score {} high {} rows {} after {} commands",
        state.score,
        state.high_score,
        state.total_cleared_rows,
        session.seq()
    );
    result
}

fn run(
    term: &mut Terminal,
    session: &mut Session<SimpleRng>,
    config: &Config,
    mut log: Option<&mut Log>,
) -> Result<()> {
    let view = GameView::new(config.cell_width, 1);
    let mut frame = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = term.size().unwrap_or((80, 24));
        view.render_into(&session.state().snapshot(), Viewport::new(w, h), &mut frame);
        term.present(&frame)?;

        let timeout = session
            .tick_interval()
            .saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        dispatch(session, command, log.as_deref_mut())?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= session.tick_interval() {
            last_tick = Instant::now();
            dispatch(session, Command::down(), log.as_deref_mut())?;
        }
    }
}

fn dispatch(session: &mut Session<SimpleRng>, command: Command, log: Option<&mut Log>) -> Result<()> {
    if !session.accepts(command) {
        return Ok(());
    }
    let settled = session.dispatch(command);
    if let Some(log) = log {
        log.record(&LogRecord::new(session.seq(), command, session.state(), settled))?;
    }
    Ok(())
}
