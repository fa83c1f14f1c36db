//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use arrayvec::ArrayVec;

use crate::core::charset::keyboard_layout;
use crate::core::SessionSnapshot;
use crate::effects::Effects;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Status, MAX_HEALTH};

/// Side panel width in columns.
pub const PANEL_W: u16 = 20;
/// Keyboard panel height in rows, border included.
pub const KEYBOARD_H: u16 = 7;

const MIN_FIELD_W: u16 = 12;
const MAX_FIELD_W: u16 = 62;
const MIN_FIELD_H: u16 = 8;

const FIELD_BG: Rgb = Rgb::new(18, 18, 26);
const DANGER: Rgb = Rgb::new(230, 70, 70);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterStatusView {
    pub enabled: bool,
    pub client_count: u16,
}

/// On-screen keyboard state owned by the front end.
#[derive(Debug, Clone, Default)]
pub struct KeyboardView {
    pub visible: bool,
    pub lit: ArrayVec<char, 16>,
    pub shift_lit: bool,
}

/// Text color of falling characters and highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    White,
    Green,
    Amber,
    Cyan,
    Pink,
}

impl Accent {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" => Some(Accent::White),
            "green" => Some(Accent::Green),
            "amber" | "yellow" => Some(Accent::Amber),
            "cyan" | "blue" => Some(Accent::Cyan),
            "pink" | "magenta" => Some(Accent::Pink),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::White => "white",
            Accent::Green => "green",
            Accent::Amber => "amber",
            Accent::Cyan => "cyan",
            Accent::Pink => "pink",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Accent::White => Accent::Green,
            Accent::Green => Accent::Amber,
            Accent::Amber => Accent::Cyan,
            Accent::Cyan => Accent::Pink,
            Accent::Pink => Accent::White,
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            Accent::White => Rgb::new(235, 235, 235),
            Accent::Green => Rgb::new(110, 230, 130),
            Accent::Amber => Rgb::new(250, 190, 70),
            Accent::Cyan => Rgb::new(90, 210, 235),
            Accent::Pink => Rgb::new(240, 120, 200),
        }
    }
}

/// Where the pieces of the screen go for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub field_x: u16,
    pub field_y: u16,
    pub field_w: u16,
    pub field_h: u16,
    pub panel_x: Option<u16>,
    pub keyboard_y: Option<u16>,
}

impl Layout {
    pub fn compute(viewport: Viewport, keyboard_visible: bool) -> Self {
        let with_panel = viewport.width >= MIN_FIELD_W + 1 + PANEL_W;
        let field_w = if with_panel {
            (viewport.width - 1 - PANEL_W).clamp(MIN_FIELD_W, MAX_FIELD_W)
        } else {
            viewport.width
        };

        let with_keyboard = keyboard_visible && viewport.height >= KEYBOARD_H + MIN_FIELD_H;
        let field_h = if with_keyboard {
            viewport.height - KEYBOARD_H
        } else {
            viewport.height
        };

        let used_w = if with_panel { field_w + 1 + PANEL_W } else { field_w };
        let field_x = viewport.width.saturating_sub(used_w) / 2;

        Self {
            field_x,
            field_y: 0,
            field_w,
            field_h,
            panel_x: with_panel.then_some(field_x + field_w + 1),
            keyboard_y: with_keyboard.then_some(field_h),
        }
    }

    /// Screen cell for an entity, or `None` if the field has no interior.
    pub fn entity_cell(&self, column_permille: u16, fall_progress: f32) -> Option<(u16, u16)> {
        let inner_w = self.field_w.checked_sub(2).filter(|w| *w > 0)?;
        let inner_h = self.field_h.checked_sub(2).filter(|h| *h > 0)?;
        let dx = (column_permille.min(999) as u32 * inner_w as u32 / 1000) as u16;
        let dy = (fall_progress.clamp(0.0, 1.0) * (inner_h - 1) as f32).round() as u16;
        Some((self.field_x + 1 + dx, self.field_y + 1 + dy))
    }
}

/// A terminal renderer for the typing game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    accent: Accent,
}

impl GameView {
    pub fn new(accent: Accent) -> Self {
        Self { accent }
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn set_accent(&mut self, accent: Accent) {
        self.accent = accent;
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it only reallocates when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        fx: &Effects,
        keyboard: &KeyboardView,
        adapter: Option<&AdapterStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = Layout::compute(viewport, keyboard.visible);
        if layout.field_w < 3 || layout.field_h < 3 {
            return;
        }

        self.draw_field(fb, snap, fx, &layout);

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, adapter, &layout, panel_x);
        }
        if let Some(keyboard_y) = layout.keyboard_y {
            self.draw_keyboard(fb, keyboard, &layout, keyboard_y);
        }

        match snap.status {
            Status::Paused => {
                self.draw_overlay(fb, &layout, "PAUSED", Some("Esc to resume"), None)
            }
            Status::GameOver => {
                self.draw_overlay(fb, &layout, "GAME OVER", Some("F2 to restart"), Some(snap.score))
            }
            Status::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(
            snap,
            &Effects::default(),
            &KeyboardView::default(),
            None,
            viewport,
            &mut fb,
        );
        fb
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, fx: &Effects, layout: &Layout) {
        let bg = CellStyle::fg(Rgb::new(60, 60, 70)).on(FIELD_BG);
        fb.fill_rect(
            layout.field_x + 1,
            layout.field_y + 1,
            layout.field_w - 2,
            layout.field_h - 2,
            ' ',
            bg,
        );

        let border = if fx.damage_flash() {
            CellStyle::fg(DANGER).bold()
        } else {
            CellStyle::fg(Rgb::new(200, 200, 200))
        };
        fb.draw_box(layout.field_x, layout.field_y, layout.field_w, layout.field_h, border);

        let accent = self.accent.rgb();
        for burst in fx.bursts() {
            if let Some((x, y)) = layout.entity_cell(burst.column_permille, burst.fall_progress) {
                let fg = FIELD_BG.mix(accent, burst.strength());
                let style = CellStyle::fg(fg).on(FIELD_BG).bold();
                fb.put_char(x, y, '*', style);
                if burst.strength() > 0.5 {
                    fb.put_char(x.saturating_sub(1), y, '·', style);
                    fb.put_char(x + 1, y, '·', style);
                }
            }
        }

        for e in &snap.entities {
            let Some((x, y)) = layout.entity_cell(e.column_permille, e.fall_progress) else {
                continue;
            };
            // The last quarter of the fall turns toward red.
            let danger = ((e.fall_progress - 0.75) * 4.0).clamp(0.0, 1.0);
            let style = CellStyle::fg(accent.mix(DANGER, danger)).on(FIELD_BG).bold();
            fb.put_char(x, y, e.ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        adapter: Option<&AdapterStatusView>,
        layout: &Layout,
        panel_x: u16,
    ) {
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let dim = value.dim();
        let bottom = layout.field_y + layout.field_h;

        let mut y = layout.field_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "HEALTH", label);
        y += 1;
        let filled = (snap.health as u16 * 10).div_ceil(MAX_HEALTH as u16);
        let bar = if snap.health <= 30 {
            CellStyle::fg(DANGER)
        } else {
            CellStyle::fg(Rgb::new(110, 220, 120))
        };
        for i in 0..10 {
            let ch = if i < filled { '█' } else { '░' };
            fb.put_char(panel_x + i, y, ch, if i < filled { bar } else { dim });
        }
        fb.put_u32(panel_x + 11, y, snap.health as u32, value);
        y += 2;

        fb.put_str(panel_x, y, "MODE", label);
        y += 1;
        fb.put_str(panel_x, y, snap.mode.as_str(), value);
        y += 2;

        fb.put_str(panel_x, y, "SHIFT", label);
        y += 1;
        fb.put_str(panel_x, y, if snap.shift_mode { "ON" } else { "OFF" }, value);
        y += 2;

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        let x = fb.put_u32(panel_x, y, (snap.progress * 100.0).round() as u32, value);
        fb.put_char(x, y, '%', value);
        let x = fb.put_u32(panel_x + 6, y, snap.spawn_interval_ms, dim);
        fb.put_str(x, y, "ms", dim);
        y += 2;

        fb.put_str(panel_x, y, "ADAPTER", label);
        y += 1;
        match adapter {
            Some(st) if st.enabled => {
                let x = fb.put_str(panel_x, y, "ON ", value);
                let x = fb.put_u32(x, y, st.client_count as u32, value);
                fb.put_str(x, y, " clients", dim);
            }
            _ => {
                fb.put_str(panel_x, y, "OFF", value);
            }
        }
        y += 2;

        const HELP: [&str; 7] = [
            "Esc  pause",
            "F2   restart",
            "F3   mode",
            "F4   shift",
            "F5   color",
            "F6   keyboard",
            "F10  quit",
        ];
        if y + HELP.len() as u16 <= bottom {
            for line in HELP {
                fb.put_str(panel_x, y, line, dim);
                y += 1;
            }
        }
    }

    fn draw_keyboard(&self, fb: &mut FrameBuffer, keyboard: &KeyboardView, layout: &Layout, y0: u16) {
        let frame = CellStyle::fg(Rgb::new(120, 120, 130));
        let w = fb.width().saturating_sub(layout.field_x);
        fb.draw_box(layout.field_x, y0, w, KEYBOARD_H, frame);

        let key = CellStyle::fg(Rgb::new(190, 190, 190));
        let lit = CellStyle::fg(Rgb::new(0, 0, 0)).on(self.accent.rgb()).bold();

        for (row_idx, row) in keyboard_layout().iter().enumerate() {
            let y = y0 + 1 + row_idx as u16;
            let mut x = layout.field_x + 1 + row_idx.min(3) as u16;
            for &label in row.iter() {
                let short = short_label(label);
                let is_lit = match single_char(label) {
                    Some(c) => keyboard.lit.contains(&c),
                    None => label == "Shift" && keyboard.shift_lit,
                };
                let style = if is_lit { lit } else { key };
                fb.put_char(x, y, ' ', style);
                let end = fb.put_str(x + 1, y, short, style);
                fb.put_char(end, y, ' ', style);
                x = end + 1;
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        title: &str,
        hint: Option<&str>,
        score: Option<u32>,
    ) {
        let mid_y = layout.field_y + layout.field_h / 2;
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let inner_x = layout.field_x + 1;
        let inner_w = layout.field_w.saturating_sub(2);
        fb.put_str_centered(inner_x, mid_y.saturating_sub(1), inner_w, title, style);

        let dim = CellStyle::fg(Rgb::new(200, 200, 200)).on(FIELD_BG);
        if let Some(score) = score {
            let mut digits = ArrayVec::<u8, 16>::new();
            let _ = digits.try_extend_from_slice(b"score ");
            let mut n = score;
            let start = digits.len();
            loop {
                let _ = digits.try_push(b'0' + (n % 10) as u8);
                n /= 10;
                if n == 0 {
                    break;
                }
            }
            digits[start..].reverse();
            if let Ok(text) = std::str::from_utf8(&digits) {
                fb.put_str_centered(inner_x, mid_y, inner_w, text, dim);
            }
        }
        if let Some(hint) = hint {
            fb.put_str_centered(inner_x, mid_y + 1, inner_w, hint, dim);
        }
    }
}

fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// One-column-per-glyph label for a key.
fn short_label(label: &str) -> &str {
    match label {
        "半角/全角" => "Hz",
        "Backspace" => "BS",
        "CapsLock" => "Caps",
        "無変換" => "Mu",
        "変換" => "Hn",
        "カタカナ/ひらがな" => "Kana",
        "Space" => "      Space      ",
        other => other,
    }
}
