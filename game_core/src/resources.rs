use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{AsteroidSize, Intent, SpawnOrder};
use crate::config::Config;

/// Wall-clock time fed into the simulation by the host
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous step
    pub now: f64, // Seconds since the session clock started
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }

    /// Move the clock forward, ignoring negative or non-finite deltas
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.dt = dt;
        self.now += f64::from(dt);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Seedable random number source shared by every spawn and effect
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform float in `[min, max)`; a degenerate range yields `min`
    pub fn float(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.0.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform integer in `[min, max]`
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        if min < max {
            self.0.gen_range(min..=max)
        } else {
            min
        }
    }

    /// Bernoulli draw; a NaN probability never succeeds
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.0.gen_range(0..items.len())]
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Hands out [`SpawnOrder`] stamps for new world entities
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnCounter(u64);

impl SpawnCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.0);
        self.0 += 1;
        order
    }
}

/// Score, lives and difficulty for the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub tick: u64,
    pub asteroid_spawn_rate: u64,
    pub max_asteroids: usize,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            level: 1,
            tick: 0,
            asteroid_spawn_rate: config.asteroid_spawn_rate,
            max_asteroids: config.max_asteroids,
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove a life and report whether any remain
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }

    pub fn gain_life(&mut self, max_lives: u32) {
        self.lives = (self.lives + 1).min(max_lives);
    }

    /// Raise the level when the score crosses a threshold.
    ///
    /// Returns the new level when it changed. Thresholds only move in the
    /// harder direction.
    pub fn update_difficulty(&mut self, config: &Config) -> Option<u32> {
        let level = config.level_for_score(self.score);
        if level <= self.level {
            return None;
        }
        self.level = level;
        self.asteroid_spawn_rate = config.spawn_rate_for_level(level);
        self.max_asteroids = config.max_asteroids_for_level(level);
        Some(level)
    }
}

/// Session-level commands coming from buttons or keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionControl {
    Start,
    TogglePause,
    Reset,
    Restart,
}

/// One discrete input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Press(Intent),
    Release(Intent),
    Control(SessionControl),
}

/// Input events waiting for the next step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Things that happened during the last step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub destroyed: Vec<AsteroidSize>,
    pub bullet_points: u32,
    pub escaped: u32,
    pub ship_hit: bool,
    pub pickups_collected: u32,
    pub level_up: Option<u32>,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.destroyed.clear();
        self.bullet_points = 0;
        self.escaped = 0;
        self.ship_hit = false;
        self.pickups_collected = 0;
        self.level_up = None;
        self.game_over = false;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn test_session_starts_from_config() {
        let session = Session::new(&Config::new());
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.level, 1);
        assert_eq!(session.asteroid_spawn_rate, 120);
        assert_eq!(session.max_asteroids, 8);
    }

    #[test]
    fn test_lives_capped_on_gain() {
        let config = Config::new();
        let mut session = Session::new(&config);
        for _ in 0..10 {
            session.gain_life(config.max_lives);
        }
        assert_eq!(session.lives, 5, "lives never exceed the cap");
    }

    #[test]
    fn test_lose_life_reports_exhaustion() {
        let mut session = Session::new(&Config::new());
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert!(!session.lose_life(), "third loss exhausts three lives");
        assert_eq!(session.lives, 0);
        assert!(!session.lose_life());
        assert_eq!(session.lives, 0, "lives never go below zero");
    }

    #[test]
    fn test_difficulty_moves_on_level_up() {
        let config = Config::new();
        let mut session = Session::new(&config);
        session.add_points(999);
        assert_eq!(session.update_difficulty(&config), None);

        session.add_points(1);
        assert_eq!(session.update_difficulty(&config), Some(2));
        assert_eq!(session.asteroid_spawn_rate, 100);
        assert_eq!(session.max_asteroids, 10);

        assert_eq!(session.update_difficulty(&config), None, "no repeat level-up");
    }

    #[test]
    fn test_difficulty_clamps_at_high_levels() {
        let config = Config::new();
        let mut session = Session::new(&config);
        session.add_points(50_000);
        session.update_difficulty(&config);
        assert_eq!(session.asteroid_spawn_rate, 60);
        assert_eq!(session.max_asteroids, 15);
    }

    #[test]
    fn test_time_advance_ignores_bad_deltas() {
        let mut time = Time::new(0.0, 1.0);
        time.advance(-1.0);
        assert_eq!(time.now, 1.0);
        time.advance(f32::NAN);
        assert_eq!(time.now, 1.0);
        time.advance(0.5);
        assert_eq!(time.now, 1.5);
        assert_eq!(time.dt, 0.5);
    }

    #[test]
    fn test_time_keeps_exact_tick_sums() {
        let mut time = Time::default();
        let mut last = time.now;
        for tick in 1..=216_000u32 {
            time.advance(Params::FIXED_DT);
            if tick % 15 == 0 {
                assert!(time.now - last >= 0.25, "15 ticks short of 250ms at tick {tick}");
                last = time.now;
            }
        }
    }

    #[test]
    fn test_chance_survives_bad_probabilities() {
        let mut rng = GameRng::new(7);
        assert!(!rng.chance(f64::NAN));
        assert!(rng.chance(2.0));
        assert!(!rng.chance(-1.0));
        assert!(!rng.chance(0.0));
    }

    #[test]
    fn test_rng_ranges() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let f = rng.float(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&f));
            let i = rng.int(8, 12);
            assert!((8..=12).contains(&i));
        }
        assert_eq!(rng.float(2.0, 2.0), 2.0);
        assert_eq!(rng.int(5, 5), 5);
    }

    #[test]
    fn test_spawn_counter_increases() {
        let mut counter = SpawnCounter::new();
        let first = counter.next();
        let second = counter.next();
        assert!(second > first);
        assert_eq!(first, SpawnOrder(0));
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Press(Intent::Fire));
        queue.push(InputEvent::Control(SessionControl::Start));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], InputEvent::Press(Intent::Fire));
        assert!(queue.events.is_empty());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.destroyed.push(AsteroidSize::Large);
        events.ship_hit = true;
        events.level_up = Some(3);
        events.game_over = true;

        events.clear();

        assert!(events.is_empty());
    }
}
