//! Terminal game runner (default binary)
//!
//! Fixed-tick loop: render, poll input until the next tick, advance the
//! session, then service coach events. The coach bridge is optional; with
//! no endpoint configured the panel only shows the canned strings.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use neontris::coach::{AdviceRequest, CoachBridge, GAME_OVER_ADVICE, READY_ADVICE, START_ADVICE};
use neontris::core::{GameSession, SessionEvent, UniformPieceSource};
use neontris::input::{map_key, AppCommand};
use neontris::term::{GameView, TerminalRenderer};
use neontris::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(Box::new(UniformPieceSource::from_entropy()));
    let mut coach = CoachBridge::start_from_env();
    let mut advice = READY_ADVICE.to_string();

    let view = GameView;
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let frame = view.render(&session, &advice);
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(AppCommand::Quit) => return Ok(()),
                        Some(AppCommand::Game(action)) => {
                            let applied = session.apply_action(action);
                            if applied && action == GameAction::Reset {
                                advice = START_ADVICE.to_string();
                            }
                        }
                        Some(AppCommand::RefreshAdvice) => {
                            if let Some(bridge) = coach.as_ref() {
                                bridge.request(AdviceRequest::from_snapshot(&session.snapshot()));
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        // Session events drive the coach panel; never the other way around.
        if let Some(event) = session.take_event() {
            match event {
                SessionEvent::ToppedOut => advice = GAME_OVER_ADVICE.to_string(),
                SessionEvent::LinesCleared { .. } => {
                    if let Some(bridge) = coach.as_ref() {
                        if bridge.should_fetch(&event) {
                            bridge.request(AdviceRequest::from_snapshot(&session.snapshot()));
                        }
                    }
                }
            }
        }

        if let Some(bridge) = coach.as_mut() {
            if let Some(fresh) = bridge.try_recv() {
                advice = fresh;
            }
        }
    }
}
