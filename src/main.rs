//! Terminal typefall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `typefall-term`.
//! With `TYPEFALL_ADAPTER=1` the session is also exposed over TCP.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use typefall::adapter::{apply_command, Adapter};
use typefall::config::GameConfig;
use typefall::core::{GameSession, SessionSnapshot};
use typefall::input::{frontend_command, handle_key_event, should_quit, FrontendCommand, KeyHighlights};
use typefall::term::{
    AdapterStatusView, Effects, FrameBuffer, GameView, KeyboardView, TerminalRenderer, Viewport,
};
use typefall::types::{GameAction, GameEvent};

fn main() -> Result<()> {
    typefall::logging::init_from_env()?;
    let config = GameConfig::load()?;
    let adapter = Adapter::start_from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, adapter);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, mut adapter: Option<Adapter>) -> Result<()> {
    let seed = config.seed.unwrap_or_else(time_seed);
    let mut session = GameSession::recording(config.session_settings()?, seed);
    info!(seed, mode = session.mode().as_str(), "session started");

    let mut view = GameView::new(config.accent());
    let mut highlights = KeyHighlights::new();
    let mut effects = Effects::new();
    let mut keyboard = KeyboardView {
        visible: config.show_keyboard,
        ..KeyboardView::default()
    };

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut events: Vec<GameEvent> = Vec::with_capacity(64);

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    session.on_tick(0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        keyboard.lit.clear();
        for key in highlights.lit_keys() {
            let _ = keyboard.lit.try_push(key);
        }
        keyboard.shift_lit = highlights.shift_lit();
        let adapter_view = adapter.as_ref().map(|a| AdapterStatusView {
            enabled: true,
            client_count: a.client_count().min(u16::MAX as usize) as u16,
        });
        view.render_into(
            &snap,
            &effects,
            &keyboard,
            adapter_view.as_ref(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat and releases are not keystrokes.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match frontend_command(key) {
                        Some(FrontendCommand::CycleColor) => view.set_accent(view.accent().next()),
                        Some(FrontendCommand::ToggleKeyboard) => keyboard.visible = !keyboard.visible,
                        None => {}
                    }
                    if let Some(action) = handle_key_event(key) {
                        if let GameAction::Type { ch, shift } = action {
                            highlights.handle_key_press(ch, shift);
                        }
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Bridge commands.
        if let Some(adapter) = adapter.as_mut() {
            while let Some(cmd) = adapter.try_recv() {
                if let Some(reply) = apply_command(&mut session, &cmd) {
                    adapter.reply(cmd.client_id, &reply);
                }
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.on_tick(start.elapsed().as_millis() as u64);
            highlights.update(elapsed_ms);
            effects.update(elapsed_ms);
        }

        // Events are resolved against the frame the player saw.
        events.extend(session.drain_events());
        for event in events.drain(..) {
            effects.observe(&event, &snap);
            if let Some(adapter) = adapter.as_mut() {
                adapter.broadcast_event(event);
            }
        }
        session.snapshot_into(&mut snap);
    }
}
