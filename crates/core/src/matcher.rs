//! Keystroke matching against the live set.

use crate::charset::shifted;
use crate::entity::{Entity, LiveEntities};

/// Outcome of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The entity that was destroyed.
    Hit(Entity),
    Miss,
}

impl MatchResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, MatchResult::Hit(_))
    }
}

/// Character a keystroke targets.
///
/// With shift held the shifted form wins when one exists; terminals that
/// already deliver `!` with the shift flag set keep `!`.
pub fn target_char(ch: char, shift_pressed: bool) -> char {
    if shift_pressed {
        shifted(ch).unwrap_or(ch)
    } else {
        ch
    }
}

/// Remove the oldest live entity matching the keystroke.
///
/// A shifted symbol key with no live shifted target falls back to the key
/// itself: hosts that report the produced glyph (`:` or `@` on a JIS layout)
/// set the shift flag for it too. Letters stay strict, so a shifted `a` never
/// takes a live `a`.
pub fn resolve(live: &mut LiveEntities, ch: char, shift_pressed: bool) -> MatchResult {
    let target = target_char(ch, shift_pressed);
    let mut entity = live.take_oldest_matching(target);
    if entity.is_none() && target != ch && !ch.is_alphabetic() {
        entity = live.take_oldest_matching(ch);
    }
    match entity {
        Some(entity) => MatchResult::Hit(entity),
        None => MatchResult::Miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityId;

    fn live_with(chars: &[char]) -> LiveEntities {
        let mut live = LiveEntities::new();
        for (i, &ch) in chars.iter().enumerate() {
            live.push(Entity {
                id: EntityId(i as u32 + 1),
                ch,
                spawned_at_ms: i as u64 * 10,
                fall_duration_ms: 1000,
                column_permille: 0,
            })
            .unwrap();
        }
        live
    }

    #[test]
    fn hit_removes_oldest_match() {
        let mut live = live_with(&['a', 'b', 'a']);
        match resolve(&mut live, 'a', false) {
            MatchResult::Hit(e) => assert_eq!(e.id, EntityId(1)),
            MatchResult::Miss => panic!("expected hit"),
        }
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn miss_leaves_live_untouched() {
        let mut live = live_with(&['a', 'b']);
        assert_eq!(resolve(&mut live, 'c', false), MatchResult::Miss);
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn shift_maps_to_shifted_form() {
        let mut live = live_with(&['1', '!']);
        match resolve(&mut live, '1', true) {
            MatchResult::Hit(e) => assert_eq!(e.ch, '!'),
            MatchResult::Miss => panic!("expected hit on '!'"),
        }
        assert_eq!(live.len(), 1);
        assert!(resolve(&mut live, '1', false).is_hit());
    }

    #[test]
    fn shifted_form_wins_over_the_key_itself() {
        let mut live = live_with(&['1', '!']);
        match resolve(&mut live, '1', true) {
            MatchResult::Hit(e) => assert_eq!(e.id, EntityId(2)),
            MatchResult::Miss => panic!("expected hit on '!'"),
        }
        // Nothing shifted is left, so the key itself matches.
        match resolve(&mut live, '1', true) {
            MatchResult::Hit(e) => assert_eq!(e.id, EntityId(1)),
            MatchResult::Miss => panic!("expected hit on '1'"),
        }
    }

    #[test]
    fn produced_symbol_with_shift_flag_hits_itself() {
        let mut live = live_with(&[':', '@', '^']);
        assert!(resolve(&mut live, ':', true).is_hit());
        assert!(resolve(&mut live, '@', true).is_hit());
        assert!(resolve(&mut live, '^', true).is_hit());
        assert!(live.is_empty());
    }

    #[test]
    fn shifted_letter_does_not_take_lowercase() {
        let mut live = live_with(&['a']);
        assert_eq!(resolve(&mut live, 'a', true), MatchResult::Miss);
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn already_shifted_char_with_shift_flag() {
        let mut live = live_with(&['A', '?']);
        assert!(resolve(&mut live, 'A', true).is_hit());
        assert!(resolve(&mut live, '?', true).is_hit());
        assert!(live.is_empty());
    }

    #[test]
    fn lowercase_does_not_match_uppercase_without_shift() {
        let mut live = live_with(&['A']);
        assert_eq!(resolve(&mut live, 'a', false), MatchResult::Miss);
        assert!(resolve(&mut live, 'a', true).is_hit());
    }

    #[test]
    fn no_shifted_form_keeps_char() {
        assert_eq!(target_char('0', true), '0');
        assert_eq!(target_char('_', true), '_');
        assert_eq!(target_char('a', false), 'a');
    }
}
