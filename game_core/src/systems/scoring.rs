use crate::config::Config;
use crate::resources::{Events, Session};

/// Award survival points for asteroids that made it past the ship
pub fn award_escapes(session: &mut Session, config: &Config, escaped: u32, events: &mut Events) {
    if escaped == 0 {
        return;
    }
    session.add_points(escaped.saturating_mul(config.survival_points));
    events.escaped += escaped;
}

/// Re-derive the level from the score and tighten difficulty on a level-up
pub fn check_difficulty(session: &mut Session, config: &Config, events: &mut Events) {
    if let Some(level) = session.update_difficulty(config) {
        tracing::info!(
            level,
            spawn_rate = session.asteroid_spawn_rate,
            max_asteroids = session.max_asteroids,
            "level up"
        );
        events.level_up = Some(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_award_ten_each() {
        let config = Config::new();
        let mut session = Session::new(&config);
        let mut events = Events::new();

        award_escapes(&mut session, &config, 3, &mut events);

        assert_eq!(session.score, 30);
        assert_eq!(events.escaped, 3);
    }

    #[test]
    fn test_no_escapes_no_points() {
        let config = Config::new();
        let mut session = Session::new(&config);
        let mut events = Events::new();

        award_escapes(&mut session, &config, 0, &mut events);

        assert_eq!(session.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_level_up_recorded() {
        let config = Config::new();
        let mut session = Session::new(&config);
        let mut events = Events::new();
        session.add_points(2000);

        check_difficulty(&mut session, &config, &mut events);

        assert_eq!(events.level_up, Some(3));
        assert_eq!(session.level, 3);
        assert_eq!(session.asteroid_spawn_rate, 90);
        assert_eq!(session.max_asteroids, 11);
    }

    #[test]
    fn test_level_never_drops() {
        let config = Config::new();
        let mut session = Session::new(&config);
        let mut events = Events::new();
        session.add_points(5000);
        check_difficulty(&mut session, &config, &mut events);
        events.clear();

        check_difficulty(&mut session, &config, &mut events);

        assert_eq!(events.level_up, None);
        assert_eq!(session.level, 6);
    }
}
