use game_core::{Intent, ShipIntent, Snapshot};
use proto::C2S;

/// Dead zone around the ship's centre line, in pixels
const AIM_SLACK: f32 = 10.0;

/// Scripted player: keeps the trigger held and slides under the lowest rock.
///
/// Talks to the game the way a real host does, by emitting key transitions
/// rather than setting flags directly.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: ShipIntent,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key messages needed to move from the currently held keys to the ones
    /// this frame wants
    pub fn next_inputs(&mut self, snapshot: &Snapshot) -> Vec<C2S> {
        let wanted = self.decide(snapshot);
        let mut messages = Vec::new();

        let pairs = [
            (Intent::Left, self.held.left, wanted.left),
            (Intent::Right, self.held.right, wanted.right),
            (Intent::Up, self.held.up, wanted.up),
            (Intent::Down, self.held.down, wanted.down),
            (Intent::Fire, self.held.fire, wanted.fire),
        ];
        for (intent, was, now) in pairs {
            if was != now {
                messages.push(C2S::Key {
                    intent,
                    pressed: now,
                });
            }
        }

        self.held = wanted;
        messages
    }

    fn decide(&self, snapshot: &Snapshot) -> ShipIntent {
        let ship_x = snapshot.ship.pos[0] + snapshot.ship.size[0] / 2.0;
        let target = snapshot
            .asteroids
            .iter()
            .filter(|a| a.pos[1] > 0.0)
            .max_by(|a, b| a.pos[1].total_cmp(&b.pos[1]))
            .map(|a| a.pos[0]);

        let mut intent = ShipIntent {
            fire: true,
            ..ShipIntent::default()
        };
        if let Some(x) = target {
            intent.left = x < ship_x - AIM_SLACK;
            intent.right = x > ship_x + AIM_SLACK;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AsteroidSize, Config, Game, Params};
    use glam::Vec2;

    #[test]
    fn test_presses_fire_once() {
        let game = Game::new(Config::default(), 1);
        let mut pilot = Autopilot::new();

        let first = pilot.next_inputs(&game.snapshot());
        assert_eq!(
            first,
            vec![C2S::Key {
                intent: Intent::Fire,
                pressed: true
            }]
        );
        assert!(pilot.next_inputs(&game.snapshot()).is_empty(), "no repeat presses");
    }

    #[test]
    fn test_steers_toward_lowest_asteroid() {
        let mut game = Game::new(Config::default(), 1);
        game.start();
        game.spawn_asteroid(Vec2::new(100.0, 200.0), AsteroidSize::Small);
        game.spawn_asteroid(Vec2::new(700.0, 50.0), AsteroidSize::Small);
        game.step(Params::FIXED_DT);

        let mut pilot = Autopilot::new();
        let inputs = pilot.next_inputs(&game.snapshot());

        assert!(inputs.contains(&C2S::Key {
            intent: Intent::Left,
            pressed: true
        }));
        assert!(!inputs.contains(&C2S::Key {
            intent: Intent::Right,
            pressed: true
        }));
    }
}
