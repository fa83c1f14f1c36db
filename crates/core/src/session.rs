//! Game session controller - owns all mutable game state
//!
//! A [`GameSession`] is driven entirely from the outside: the host calls
//! [`GameSession::on_tick`] with its monotonic clock and forwards keystrokes and
//! control commands. Every observable change is reported through the injected
//! [`EventSink`], in the order it happened.

use tracing::{debug, info};

use crate::charset;
use crate::difficulty::{DifficultyCurve, DifficultyPoint};
use crate::entity::LiveEntities;
use crate::health::{Health, HealthChange};
use crate::matcher::{self, MatchResult};
use crate::sink::{EventSink, NullSink};
use crate::snapshot::{EntitySnapshot, SessionSnapshot};
use crate::spawner::EntitySpawner;
use crate::types::{
    DifficultyParameters, EntityId, GameAction, GameEvent, Mode, Status, MAX_HEALTH,
    MISS_PENALTY, SCORE_PER_HIT,
};

/// Player selections and difficulty for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSettings {
    pub difficulty: DifficultyParameters,
    pub mode: Mode,
    pub custom_chars: Vec<char>,
    pub shift_mode: bool,
}

#[derive(Debug)]
pub struct GameSession<S: EventSink = NullSink> {
    spawner: EntitySpawner,
    health: Health,
    score: u32,
    status: Status,
    /// Session clock: milliseconds of unpaused play since the last restart.
    clock_ms: u64,
    /// Host time seen on the previous tick. `None` until the next tick anchors it.
    last_now_ms: Option<u64>,
    mode: Mode,
    shift_mode: bool,
    custom_chars: Vec<char>,
    pool: Vec<char>,
    live: LiveEntities,
    seed: u32,
    sink: S,
}

impl<S: EventSink> GameSession<S> {
    pub fn new(settings: SessionSettings, seed: u32, sink: S) -> Self {
        let pool = charset::pool(settings.mode, settings.shift_mode, &settings.custom_chars);
        info!(
            seed,
            mode = settings.mode.as_str(),
            shift = settings.shift_mode,
            pool = pool.len(),
            "session created"
        );
        Self {
            spawner: EntitySpawner::new(DifficultyCurve::new(settings.difficulty), seed),
            health: Health::new(),
            score: 0,
            status: Status::Running,
            clock_ms: 0,
            last_now_ms: None,
            mode: settings.mode,
            shift_mode: settings.shift_mode,
            custom_chars: settings.custom_chars,
            pool,
            live: LiveEntities::new(),
            seed,
            sink,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn health(&self) -> u8 {
        self.health.value()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn shift_mode(&self) -> bool {
        self.shift_mode
    }

    pub fn custom_chars(&self) -> &[char] {
        &self.custom_chars
    }

    /// Characters currently eligible to spawn.
    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    pub fn live(&self) -> &LiveEntities {
        &self.live
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn difficulty(&self) -> DifficultyPoint {
        self.spawner.curve().at(self.clock_ms)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Advance the session to host time `now_ms`.
    ///
    /// Only running time reaches the session clock. Due entities expire first
    /// (oldest first), then at most one entity spawns.
    pub fn on_tick(&mut self, now_ms: u64) {
        let delta = match self.last_now_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_now_ms = Some(now_ms);

        if self.status != Status::Running {
            return;
        }
        self.clock_ms = self.clock_ms.saturating_add(delta);

        while let Some(id) = self.live.first_due(self.clock_ms) {
            self.expire(id);
            if self.status != Status::Running {
                return;
            }
        }

        let pool: &[char] = if self.live.is_full() { &[] } else { &self.pool };
        if let Some(entity) = self.spawner.try_spawn(self.clock_ms, pool) {
            if self.live.push(entity).is_err() {
                return;
            }
            debug!(id = entity.id.0, ch = %entity.ch, fall_ms = entity.fall_duration_ms, "spawned");
            self.sink.emit(GameEvent::EntitySpawned {
                id: entity.id,
                ch: entity.ch,
                fall_duration_ms: entity.fall_duration_ms,
                column_permille: entity.column_permille,
            });
        }
    }

    /// Match a keystroke against the live entities.
    ///
    /// Always a miss while paused or after game over.
    pub fn on_keystroke(&mut self, ch: char, shift: bool) -> MatchResult {
        if self.status != Status::Running {
            return MatchResult::Miss;
        }
        let result = matcher::resolve(&mut self.live, ch, shift);
        if let MatchResult::Hit(entity) = result {
            self.score = self.score.saturating_add(SCORE_PER_HIT);
            debug!(id = entity.id.0, ch = %entity.ch, score = self.score, "hit");
            self.sink.emit(GameEvent::EntityHit { id: entity.id });
            self.sink.emit(GameEvent::ScoreChanged(self.score));
        }
        result
    }

    /// External fall timer for `id` fired.
    ///
    /// Ignored unless the session is running, `id` is live and its deadline
    /// has passed on the session clock. Returns whether the entity expired.
    ///
    /// [`Self::on_tick`] already expires everything due before it spawns, so
    /// for a host that keeps ticking this mostly drops stale or early timers.
    /// Only an entity spawned with a zero fall duration is still live and due
    /// when the tick returns.
    pub fn on_fall_timer_expired(&mut self, id: EntityId) -> bool {
        if self.status != Status::Running {
            return false;
        }
        match self.live.get(id) {
            Some(entity) if entity.is_due(self.clock_ms) => {}
            _ => return false,
        }
        self.expire(id);
        true
    }

    pub fn on_pause_toggle(&mut self) {
        match self.status {
            Status::Running => {
                self.status = Status::Paused;
                info!(clock_ms = self.clock_ms, "paused");
                self.sink.emit(GameEvent::Paused);
            }
            Status::Paused => {
                self.status = Status::Running;
                // Host time spent paused never reaches the session clock.
                self.last_now_ms = None;
                info!(clock_ms = self.clock_ms, "resumed");
                self.sink.emit(GameEvent::Resumed);
            }
            Status::GameOver => {}
        }
    }

    /// Switch character pool. `custom` replaces the stored custom characters.
    pub fn on_mode_changed(&mut self, mode: Mode, custom: Option<&str>) {
        self.mode = mode;
        if let Some(custom) = custom {
            self.custom_chars = custom.chars().collect();
        }
        self.rebuild_pool();
        self.clear_live();
    }

    pub fn on_shift_mode_toggled(&mut self, enabled: bool) {
        if enabled == self.shift_mode {
            return;
        }
        self.shift_mode = enabled;
        self.rebuild_pool();
        self.clear_live();
    }

    /// Start over from any state. Player selections are kept.
    pub fn on_restart_requested(&mut self) {
        self.health.reset();
        self.score = 0;
        self.status = Status::Running;
        self.clock_ms = 0;
        self.last_now_ms = None;
        self.live.clear();
        self.spawner.reset(0);

        info!(seed = self.seed, "restarted");
        self.sink.emit(GameEvent::Restarted);
        self.sink.emit(GameEvent::HealthChanged(MAX_HEALTH));
        self.sink.emit(GameEvent::ScoreChanged(0));
    }

    /// Apply an input-layer action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Type { ch, shift } => self.on_keystroke(ch, shift).is_hit(),
            GameAction::Pause => {
                let before = self.status;
                self.on_pause_toggle();
                before != self.status
            }
            GameAction::Restart => {
                self.on_restart_requested();
                true
            }
            GameAction::CycleMode => {
                self.on_mode_changed(self.mode.next(), None);
                true
            }
            GameAction::ToggleShiftMode => {
                self.on_shift_mode_toggled(!self.shift_mode);
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let point = self.difficulty();
        out.status = self.status;
        out.health = self.health.value();
        out.score = self.score;
        out.clock_ms = self.clock_ms;
        out.mode = self.mode;
        out.shift_mode = self.shift_mode;
        out.progress = point.progress;
        out.spawn_interval_ms = point.spawn_interval_ms;
        out.fall_duration_ms = point.fall_duration_ms;
        out.entities.clear();
        for e in self.live.iter() {
            out.entities.push(EntitySnapshot {
                id: e.id,
                ch: e.ch,
                column_permille: e.column_permille,
                fall_progress: e.fall_progress(self.clock_ms),
            });
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn expire(&mut self, id: EntityId) {
        let Some(entity) = self.live.remove(id) else {
            return;
        };
        debug!(id = entity.id.0, ch = %entity.ch, "expired");
        self.sink.emit(GameEvent::EntityExpired { id });

        match self.health.take_damage(MISS_PENALTY) {
            HealthChange::Damaged(value) => self.sink.emit(GameEvent::HealthChanged(value)),
            HealthChange::Depleted => {
                self.sink.emit(GameEvent::HealthChanged(0));
                self.enter_game_over();
            }
            HealthChange::Unchanged => {}
        }
    }

    fn enter_game_over(&mut self) {
        self.status = Status::GameOver;
        if self.live.clear() > 0 {
            self.sink.emit(GameEvent::EntitiesCleared);
        }
        info!(score = self.score, clock_ms = self.clock_ms, "game over");
        self.sink.emit(GameEvent::GameOver);
    }

    fn rebuild_pool(&mut self) {
        self.pool = charset::pool(self.mode, self.shift_mode, &self.custom_chars);
        info!(
            mode = self.mode.as_str(),
            shift = self.shift_mode,
            pool = self.pool.len(),
            "character pool changed"
        );
    }

    fn clear_live(&mut self) {
        let cleared = self.live.clear();
        if cleared > 0 {
            debug!(cleared, "live entities cleared");
            self.sink.emit(GameEvent::EntitiesCleared);
        }
    }
}

impl GameSession<Vec<GameEvent>> {
    /// Session collecting its events in a `Vec`, drained with [`Self::drain_events`].
    pub fn recording(settings: SessionSettings, seed: u32) -> Self {
        Self::new(settings, seed, Vec::new())
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.sink.drain(..)
    }
}

impl Default for GameSession<NullSink> {
    fn default() -> Self {
        Self::new(SessionSettings::default(), 1, NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(interval: u32, fall: u32) -> SessionSettings {
        SessionSettings {
            difficulty: DifficultyParameters {
                duration_ms: 60_000,
                start_spawn_interval_ms: interval,
                end_spawn_interval_ms: interval,
                start_fall_ms: fall,
                end_fall_ms: fall,
            },
            ..SessionSettings::default()
        }
    }

    /// Tick in 16ms steps from host time `from` to `to` (inclusive).
    fn run(session: &mut GameSession<Vec<GameEvent>>, from: u64, to: u64) {
        let mut t = from;
        while t <= to {
            session.on_tick(t);
            t += 16;
        }
    }

    fn spawned(events: &[GameEvent]) -> Vec<(EntityId, char)> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::EntitySpawned { id, ch, .. } => Some((*id, *ch)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::recording(SessionSettings::default(), 7);
        assert_eq!(s.status(), Status::Running);
        assert_eq!(s.health(), 100);
        assert_eq!(s.score(), 0);
        assert_eq!(s.clock_ms(), 0);
        assert!(s.live().is_empty());
        assert_eq!(s.pool().len(), 48);
    }

    #[test]
    fn test_first_tick_anchors_clock() {
        let mut s = GameSession::recording(flat(100, 1000), 1);
        s.on_tick(50_000);
        assert_eq!(s.clock_ms(), 0);
        s.on_tick(50_016);
        assert_eq!(s.clock_ms(), 16);
    }

    #[test]
    fn test_spawns_follow_interval() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 1000);
        let events: Vec<_> = s.drain_events().collect();
        let n = spawned(&events).len();
        assert!((9..=10).contains(&n), "spawned {n}");
        assert_eq!(s.live().len(), n);
    }

    #[test]
    fn test_hit_scores_and_removes() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 112);
        let events: Vec<_> = s.drain_events().collect();
        let (id, ch) = spawned(&events)[0];

        match s.on_keystroke(ch, false) {
            MatchResult::Hit(e) => assert_eq!(e.id, id),
            MatchResult::Miss => panic!("expected hit"),
        }
        assert_eq!(s.score(), 1);
        assert!(s.live().is_empty());
        let events: Vec<_> = s.drain_events().collect();
        assert_eq!(
            events,
            vec![GameEvent::EntityHit { id }, GameEvent::ScoreChanged(1)]
        );
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 112);
        s.drain_events().for_each(drop);
        let before = s.live().len();
        // '€' is never in the pool.
        assert_eq!(s.on_keystroke('€', false), MatchResult::Miss);
        assert_eq!(s.live().len(), before);
        assert_eq!(s.score(), 0);
        assert_eq!(s.drain_events().count(), 0);
    }

    #[test]
    fn test_tick_expires_due_entities() {
        let mut s = GameSession::recording(flat(100, 500), 1);
        // First spawn at clock 112, due at 612.
        run(&mut s, 0, 600);
        assert_eq!(s.health(), 100);
        run(&mut s, 608, 640);
        assert_eq!(s.health(), 90);
        let events: Vec<_> = s.drain_events().collect();
        let expired = events
            .iter()
            .position(|e| matches!(e, GameEvent::EntityExpired { .. }))
            .unwrap();
        assert_eq!(events[expired + 1], GameEvent::HealthChanged(90));
    }

    #[test]
    fn test_external_expiry_requires_deadline() {
        let mut s = GameSession::recording(flat(100, 500), 1);
        run(&mut s, 0, 112);
        let events: Vec<_> = s.drain_events().collect();
        let (id, _) = spawned(&events)[0];

        assert!(!s.on_fall_timer_expired(id));
        assert_eq!(s.health(), 100);
        assert!(!s.on_fall_timer_expired(EntityId(9999)));
    }

    #[test]
    fn test_external_expiry_of_due_entity() {
        let mut s = GameSession::recording(flat(100, 0), 1);
        run(&mut s, 0, 112);
        let events: Vec<_> = s.drain_events().collect();
        let (id, _) = spawned(&events)[0];
        assert!(s.live().contains(id));

        assert!(s.on_fall_timer_expired(id));
        assert!(!s.live().contains(id));
        assert_eq!(s.health(), 90);
        let events: Vec<_> = s.drain_events().collect();
        assert_eq!(
            events,
            vec![GameEvent::EntityExpired { id }, GameEvent::HealthChanged(90)]
        );

        // Second delivery of the same timer is stale.
        assert!(!s.on_fall_timer_expired(id));
        assert_eq!(s.health(), 90);
    }

    #[test]
    fn test_stale_expiry_after_hit_is_ignored() {
        let mut s = GameSession::recording(flat(100, 500), 1);
        run(&mut s, 0, 112);
        let events: Vec<_> = s.drain_events().collect();
        let (id, ch) = spawned(&events)[0];
        assert!(s.on_keystroke(ch, false).is_hit());
        assert!(!s.on_fall_timer_expired(id));
        assert_eq!(s.health(), 100);
    }

    #[test]
    fn test_ten_expiries_end_the_game_once() {
        let mut s = GameSession::recording(flat(50, 200), 3);
        run(&mut s, 0, 20_000);
        assert_eq!(s.status(), Status::GameOver);
        assert_eq!(s.health(), 0);
        assert!(s.live().is_empty());

        let events: Vec<_> = s.drain_events().collect();
        let overs = events.iter().filter(|e| **e == GameEvent::GameOver).count();
        let expired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::EntityExpired { .. }))
            .count();
        assert_eq!(overs, 1);
        assert_eq!(expired, 10);
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_game_over_ignores_input() {
        let mut s = GameSession::recording(flat(50, 200), 3);
        run(&mut s, 0, 20_000);
        s.drain_events().for_each(drop);

        s.on_pause_toggle();
        assert_eq!(s.status(), Status::GameOver);
        assert_eq!(s.on_keystroke('a', false), MatchResult::Miss);
        run(&mut s, 20_016, 25_000);
        assert_eq!(s.drain_events().count(), 0);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut s = GameSession::recording(flat(100, 1000), 1);
        run(&mut s, 0, 400);
        let live_before: Vec<EntityId> = s.live().iter().map(|e| e.id).collect();
        let clock_before = s.clock_ms();
        s.drain_events().for_each(drop);

        s.on_pause_toggle();
        run(&mut s, 416, 5_000);
        for c in charset::all_keys() {
            assert_eq!(s.on_keystroke(c, false), MatchResult::Miss);
        }
        let events: Vec<_> = s.drain_events().collect();
        assert_eq!(events, vec![GameEvent::Paused]);
        assert_eq!(s.clock_ms(), clock_before);

        s.on_pause_toggle();
        let live_after: Vec<EntityId> = s.live().iter().map(|e| e.id).collect();
        assert_eq!(live_before, live_after);
        s.on_tick(60_000);
        assert_eq!(s.clock_ms(), clock_before);
        assert_eq!(s.health(), 100);
    }

    #[test]
    fn test_restart_resets_from_game_over() {
        let mut s = GameSession::recording(flat(50, 200), 3);
        run(&mut s, 0, 20_000);
        s.drain_events().for_each(drop);

        s.on_restart_requested();
        assert_eq!(s.status(), Status::Running);
        assert_eq!(s.health(), 100);
        assert_eq!(s.score(), 0);
        assert_eq!(s.clock_ms(), 0);
        assert!(s.live().is_empty());
        let events: Vec<_> = s.drain_events().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Restarted,
                GameEvent::HealthChanged(100),
                GameEvent::ScoreChanged(0)
            ]
        );
    }

    #[test]
    fn test_restart_never_reuses_ids() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 500);
        let first: Vec<_> = s.drain_events().collect();
        let max_before = spawned(&first).iter().map(|(id, _)| *id).max().unwrap();

        s.on_restart_requested();
        run(&mut s, 1_000, 1_500);
        let second: Vec<_> = s.drain_events().collect();
        let min_after = spawned(&second).iter().map(|(id, _)| *id).min().unwrap();
        assert!(min_after > max_before);
    }

    #[test]
    fn test_mode_change_clears_live() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 500);
        s.drain_events().for_each(drop);
        assert!(!s.live().is_empty());

        s.on_mode_changed(Mode::TopRow, None);
        assert!(s.live().is_empty());
        assert_eq!(s.mode(), Mode::TopRow);
        assert_eq!(s.health(), 100);
        let events: Vec<_> = s.drain_events().collect();
        assert_eq!(events, vec![GameEvent::EntitiesCleared]);
    }

    #[test]
    fn test_custom_mode_spawns_only_custom_chars() {
        let mut s = GameSession::recording(flat(20, 100_000), 5);
        s.on_mode_changed(Mode::Custom, Some("ab"));
        // Hit everything so the live set never fills.
        let mut t = 0;
        let mut spawns = 0;
        while spawns < 100 {
            s.on_tick(t);
            t += 16;
            let batch: Vec<_> = s.drain_events().collect();
            for e in batch {
                if let GameEvent::EntitySpawned { ch, .. } = e {
                    assert!(ch == 'a' || ch == 'b');
                    spawns += 1;
                    assert!(s.on_keystroke(ch, false).is_hit());
                }
            }
        }
    }

    #[test]
    fn test_empty_custom_is_quiet() {
        let mut s = GameSession::recording(flat(20, 1000), 5);
        s.on_mode_changed(Mode::Custom, Some(""));
        run(&mut s, 0, 5_000);
        assert_eq!(s.drain_events().count(), 0);
        assert_eq!(s.status(), Status::Running);
    }

    #[test]
    fn test_shift_mode_spawns_only_shifted() {
        let mut s = GameSession::recording(flat(20, 100_000), 11);
        s.on_shift_mode_toggled(true);
        run(&mut s, 0, 1_000);
        let events: Vec<_> = s.drain_events().collect();
        let chars = spawned(&events);
        assert!(!chars.is_empty());
        for (_, ch) in chars {
            assert!(charset::base_key(ch) != Some(ch), "{ch:?} is unshifted");
        }
    }

    #[test]
    fn test_shift_toggle_same_value_is_noop() {
        let mut s = GameSession::recording(flat(100, 10_000), 1);
        run(&mut s, 0, 500);
        s.drain_events().for_each(drop);
        let n = s.live().len();
        s.on_shift_mode_toggled(false);
        assert_eq!(s.live().len(), n);
        assert_eq!(s.drain_events().count(), 0);
    }

    #[test]
    fn test_selections_survive_restart() {
        let mut s = GameSession::recording(SessionSettings::default(), 1);
        s.on_mode_changed(Mode::Custom, Some("xyz"));
        s.on_shift_mode_toggled(true);
        s.on_restart_requested();
        assert_eq!(s.mode(), Mode::Custom);
        assert!(s.shift_mode());
        assert_eq!(s.custom_chars(), &['x', 'y', 'z']);
        assert_eq!(s.pool(), &['X', 'Y', 'Z']);
    }

    #[test]
    fn test_live_set_is_bounded() {
        let mut s = GameSession::recording(flat(1, 1_000_000), 1);
        run(&mut s, 0, 10_000);
        assert_eq!(s.live().len(), crate::types::MAX_LIVE_ENTITIES);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut s = GameSession::recording(SessionSettings::default(), 1);
        assert!(s.apply_action(GameAction::Pause));
        assert!(s.paused());
        assert!(s.apply_action(GameAction::Pause));
        assert!(s.apply_action(GameAction::CycleMode));
        assert_eq!(s.mode(), Mode::TopRow);
        assert!(s.apply_action(GameAction::ToggleShiftMode));
        assert!(s.shift_mode());
        assert!(!s.apply_action(GameAction::Type { ch: 'q', shift: false }));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = GameSession::recording(flat(100, 1000), 1);
        run(&mut s, 0, 400);
        let snap = s.snapshot();
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.health, 100);
        assert_eq!(snap.entities.len(), s.live().len());
        assert_eq!(snap.spawn_interval_ms, 100);
        for e in &snap.entities {
            assert!((0.0..=1.0).contains(&e.fall_progress));
        }
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = GameSession::recording(SessionSettings::default(), 42);
        let mut b = GameSession::recording(SessionSettings::default(), 42);
        run(&mut a, 0, 30_000);
        run(&mut b, 0, 30_000);
        let ea: Vec<_> = a.drain_events().collect();
        let eb: Vec<_> = b.drain_events().collect();
        assert_eq!(ea, eb);
    }
}
