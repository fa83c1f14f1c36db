//! On-screen keyboard highlights.
//!
//! Terminals usually do not emit key release events, so a pressed key stays
//! lit for a fixed time instead of until it is released.

use arrayvec::ArrayVec;

use typefall_core::charset::base_key;

// Long enough to be seen at typing speed, short enough not to smear.
const DEFAULT_HIGHLIGHT_MS: u32 = 150;

const MAX_LIT: usize = 16;

#[derive(Debug, Clone)]
pub struct KeyHighlights {
    lit: ArrayVec<(char, u32), MAX_LIT>,
    shift_ms: u32,
    highlight_ms: u32,
}

impl KeyHighlights {
    pub fn new() -> Self {
        Self::with_duration_ms(DEFAULT_HIGHLIGHT_MS)
    }

    pub fn with_duration_ms(highlight_ms: u32) -> Self {
        Self {
            lit: ArrayVec::new(),
            shift_ms: 0,
            highlight_ms,
        }
    }

    pub fn highlight_ms(&self) -> u32 {
        self.highlight_ms
    }

    /// Light the physical key `ch` is typed on (and Shift when held).
    ///
    /// Characters that are not on the layout light nothing.
    pub fn handle_key_press(&mut self, ch: char, shift: bool) {
        if shift || ch.is_ascii_uppercase() || base_key(ch).is_some_and(|b| b != ch) {
            self.shift_ms = self.highlight_ms;
        }
        let Some(key) = base_key(ch) else {
            return;
        };

        if let Some(entry) = self.lit.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = self.highlight_ms;
            return;
        }
        if self.lit.is_full() {
            // Drop the one closest to fading out.
            if let Some(idx) = self
                .lit
                .iter()
                .enumerate()
                .min_by_key(|(_, (_, ms))| *ms)
                .map(|(i, _)| i)
            {
                self.lit.remove(idx);
            }
        }
        let _ = self.lit.try_push((key, self.highlight_ms));
    }

    /// Age every highlight by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        for entry in self.lit.iter_mut() {
            entry.1 = entry.1.saturating_sub(elapsed_ms);
        }
        self.lit.retain(|(_, ms)| *ms > 0);
        self.shift_ms = self.shift_ms.saturating_sub(elapsed_ms);
    }

    /// Whether the key labeled `key` is currently lit.
    pub fn is_lit(&self, key: char) -> bool {
        self.lit.iter().any(|(k, _)| *k == key)
    }

    pub fn shift_lit(&self) -> bool {
        self.shift_ms > 0
    }

    pub fn lit_keys(&self) -> impl Iterator<Item = char> + '_ {
        self.lit.iter().map(|(k, _)| *k)
    }

    pub fn reset(&mut self) {
        self.lit.clear();
        self.shift_ms = 0;
    }
}

impl Default for KeyHighlights {
    fn default() -> Self {
        Self::new()
    }
}
