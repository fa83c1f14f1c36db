//! Character sets - which characters may fall for a given mode
//!
//! The modeled keyboard is a Japanese (JIS) layout. Pools are built from its
//! single-character key labels; labels such as `Backspace` or `無変換` are never
//! spawned.
//!
//! Shift mode is exclusive: when enabled, every pool character is replaced by
//! its shifted form and characters without one are dropped.

use crate::types::Mode;

/// Key labels per keyboard row, left to right.
pub const KEY_LAYOUT: [&[&str]; 5] = [
    &[
        "半角/全角", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "^", "¥",
        "Backspace",
    ],
    &[
        "Tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "@", "[", "Enter",
    ],
    &[
        "CapsLock", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", ":", "]", "Shift",
    ],
    &[
        "Shift", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "_", "無変換", "変換",
        "カタカナ/ひらがな",
    ],
    &["Space"],
];

/// Number row.
pub const TOP_ROW: [char; 13] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '^', '¥',
];

/// Keys under the right hand.
pub const RIGHT_HAND: [char; 20] = [
    'y', 'u', 'i', 'o', 'p', '@', '[', 'h', 'j', 'k', 'l', ';', ':', ']', 'n', 'm', ',', '.',
    '/', '_',
];

/// Shifted forms of the non-letter keys. `0` and `_` have none.
const SHIFT_TABLE: [(char, char); 20] = [
    ('1', '!'),
    ('2', '"'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '&'),
    ('7', '\''),
    ('8', '('),
    ('9', ')'),
    ('-', '='),
    ('^', '~'),
    ('¥', '|'),
    ('@', '`'),
    ('[', '{'),
    (';', '+'),
    (':', '*'),
    (']', '}'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];

/// The keyboard rows, for renderers that draw an on-screen keyboard.
pub fn keyboard_layout() -> &'static [&'static [&'static str]] {
    &KEY_LAYOUT
}

/// The single-character key label, if `label` is one.
fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Every single-character key of the layout, in layout order.
pub fn all_keys() -> Vec<char> {
    KEY_LAYOUT
        .iter()
        .flat_map(|row| row.iter())
        .filter_map(|label| single_char(label))
        .collect()
}

/// Whether `c` is the unshifted label of a key on the layout.
pub fn is_base_key(c: char) -> bool {
    KEY_LAYOUT
        .iter()
        .flat_map(|row| row.iter())
        .any(|label| single_char(label) == Some(c))
}

/// Shifted form of a base key, if it has one.
///
/// # Examples
///
/// ```
/// use typefall_core::charset::shifted;
///
/// assert_eq!(shifted('a'), Some('A'));
/// assert_eq!(shifted('2'), Some('"'));
/// assert_eq!(shifted('0'), None);
/// assert_eq!(shifted('!'), None);
/// ```
pub fn shifted(c: char) -> Option<char> {
    if c.is_ascii_lowercase() {
        return Some(c.to_ascii_uppercase());
    }
    SHIFT_TABLE
        .iter()
        .find(|&&(base, _)| base == c)
        .map(|&(_, s)| s)
}

/// The key a character is typed on (reverse shift lookup).
///
/// Used to highlight the physical key; matching never goes through this.
pub fn base_key(c: char) -> Option<char> {
    if c.is_ascii_uppercase() {
        return Some(c.to_ascii_lowercase());
    }
    if is_base_key(c) {
        return Some(c);
    }
    SHIFT_TABLE
        .iter()
        .find(|&&(base, s)| s == c && is_base_key(base))
        .map(|&(base, _)| base)
}

/// Resolve the candidate pool for a mode.
///
/// Empty only for `Mode::Custom` with no (shiftable) characters.
pub fn pool(mode: Mode, shift_enabled: bool, custom: &[char]) -> Vec<char> {
    let base: Vec<char> = match mode {
        Mode::All => all_keys(),
        Mode::TopRow => TOP_ROW.to_vec(),
        Mode::RightHand => RIGHT_HAND.to_vec(),
        Mode::Custom => custom.to_vec(),
    };

    if shift_enabled {
        base.into_iter().filter_map(shifted).collect()
    } else {
        base
    }
}
