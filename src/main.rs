//! Terminal falling-block game (default binary).
//!
//! Owns the timing the board itself knows nothing about: a gravity clock, a
//! held-key repeat clock and the redraw cadence. Input comes from crossterm,
//! output goes through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;

use tui_blockfall::core::Board;
use tui_blockfall::input::{handle_key_event, should_quit, InputHandler};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, FRAME_MS};
use tui_blockfall::GameConfig;

const GAME_OVER_TEXT: &str = " GAME OVER ";
const GAME_OVER_BANNER: Duration = Duration::from_millis(1500);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let _logger = init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

/// File logging only: stdout/stderr belong to the terminal UI.
fn init_logging(config: &GameConfig) -> Result<Option<LoggerHandle>> {
    let Some(dir) = &config.log_dir else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir.clone())
                .basename("tui-blockfall"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(Some(handle))
}

/// Board plus the clocks that drive it.
struct Session {
    board: Board,
    input: InputHandler,
    last_gravity: Instant,
    game_over_until: Option<Instant>,
}

impl Session {
    fn new(config: &GameConfig) -> Self {
        info!(
            "starting {}x{} board (gravity {}ms, repeat {}ms)",
            config.rows, config.cols, config.gravity_ms, config.input_repeat_ms
        );
        Self {
            board: Board::with_factory(config.rows, config.cols, config.factory()),
            input: InputHandler::with_repeat_ms(config.input_repeat_ms),
            last_gravity: Instant::now(),
            game_over_until: None,
        }
    }

    fn apply(&mut self, action: GameAction) {
        let episode = self.board.episode();
        self.board.apply_action(action);

        if action.restarts_gravity() {
            self.last_gravity = Instant::now();
        }
        if action == GameAction::Restart {
            self.input.reset();
            self.game_over_until = None;
        } else if self.board.episode() != episode {
            self.game_over();
        }
    }

    fn tick_gravity(&mut self, interval: Duration) {
        if self.last_gravity.elapsed() < interval {
            return;
        }
        self.last_gravity = Instant::now();
        if self.board.advance_gravity().is_reset() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.input.reset();
        self.game_over_until = Some(Instant::now() + GAME_OVER_BANNER);
    }

    fn banner(&self) -> Option<&'static str> {
        match self.game_over_until {
            Some(until) if Instant::now() < until => Some(GAME_OVER_TEXT),
            _ => None,
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let gravity = Duration::from_millis(config.gravity_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.board, session.banner(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit after {} cleared rows", session.board.cleared_rows());
                            return Ok(());
                        }
                        let Some(action) = handle_key_event(key) else {
                            continue;
                        };
                        let action = if InputHandler::is_repeatable(action) {
                            session.input.press(action)
                        } else if key.kind == KeyEventKind::Press {
                            Some(action)
                        } else {
                            // Terminal auto-repeat of rotate/drop/restart keys.
                            None
                        };
                        if let Some(action) = action {
                            session.apply(action);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = handle_key_event(key) {
                            session.input.release(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let since_frame = last_frame.elapsed();
        if since_frame >= frame {
            last_frame = Instant::now();
            for action in session.input.update(since_frame.as_millis() as u32) {
                session.apply(action);
            }
        }

        session.tick_gravity(gravity);
    }
}
