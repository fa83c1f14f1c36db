//! Prints how the terminal reports key events and what the game maps them to.
//!
//! Useful for checking Shift reporting on a given terminal and layout.
//! Press F10 or Ctrl+C to exit.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use typefall::core::matcher::target_char;
use typefall::input::{frontend_command, handle_key_event, should_quit};
use typefall::types::GameAction;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let result = probe(enhanced);

    if enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn probe(enhanced: bool) -> Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "keyboard enhancement: {}\r\npress keys (F10 or Ctrl+C to quit)\r\n",
        if enhanced { "on" } else { "off" }
    )?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        write!(
            out,
            "{:?} kind={:?} mods={:?}",
            key.code, key.kind, key.modifiers
        )?;
        match handle_key_event(key) {
            Some(GameAction::Type { ch, shift }) => write!(
                out,
                " -> type {ch:?} shift={shift} targets {:?}",
                target_char(ch, shift)
            )?,
            Some(action) => write!(out, " -> {action:?}")?,
            None => {}
        }
        if let Some(cmd) = frontend_command(key) {
            write!(out, " -> {cmd:?}")?;
        }
        write!(out, "\r\n")?;
        out.flush()?;

        if should_quit(key) {
            return Ok(());
        }
    }
}
