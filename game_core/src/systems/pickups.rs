use glam::Vec2;
use hecs::World;

use crate::components::{Pickup, SpawnOrder};
use crate::config::Config;
use crate::create_pickup;
use crate::field::Field;
use crate::params::Params;
use crate::resources::*;
use crate::ship::Ship;

use super::spawn::every;

/// Roll for a life pickup on every powerup tick
pub fn pickups_spawn(
    world: &mut World,
    session: &Session,
    config: &Config,
    counter: &mut SpawnCounter,
    rng: &mut GameRng,
) {
    if !every(session.tick, config.powerup_spawn_rate) {
        return;
    }
    if !rng.chance(config.powerup_chance) {
        return;
    }

    let x = rng.int(0, (Field::WIDTH - Params::PICKUP_SIZE) as i32) as f32;
    tracing::debug!(tick = session.tick, x, "pickup spawned");
    create_pickup(
        world,
        counter,
        Pickup::new(Vec2::new(x, Params::SPAWN_Y), config.pickup_fall_speed),
    );
}

/// Collect pickups touching the ship: one life each, capped
pub fn pickups_collect(
    world: &mut World,
    ship: &Ship,
    session: &mut Session,
    config: &Config,
    events: &mut Events,
) {
    let ship_bounds = ship.bounds();

    // Deterministic: oldest pickup first
    let mut touching: Vec<_> = world
        .query::<(&Pickup, &SpawnOrder)>()
        .iter()
        .filter(|(_, (pickup, _))| pickup.bounds().overlaps(&ship_bounds))
        .map(|(entity, (_, order))| (entity, *order))
        .collect();
    touching.sort_by_key(|(_, order)| *order);

    for (entity, _) in touching {
        session.gain_life(config.max_lives);
        events.pickups_collected += 1;
        let _ = world.despawn(entity);
        tracing::debug!(lives = session.lives, "pickup collected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, Config, Session, SpawnCounter, Events, GameRng) {
        let config = Config::new();
        let session = Session::new(&config);
        (
            World::new(),
            config,
            session,
            SpawnCounter::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    fn pickup_count(world: &World) -> usize {
        world.query::<&Pickup>().iter().count()
    }

    #[test]
    fn test_certain_spawn_on_powerup_tick() {
        let (mut world, mut config, mut session, mut counter, _, mut rng) = setup();
        config.powerup_chance = 1.0;

        session.tick = 599;
        pickups_spawn(&mut world, &session, &config, &mut counter, &mut rng);
        assert_eq!(pickup_count(&world), 0);

        session.tick = 600;
        pickups_spawn(&mut world, &session, &config, &mut counter, &mut rng);
        assert_eq!(pickup_count(&world), 1);
        for (_, pickup) in world.query::<&Pickup>().iter() {
            assert_eq!(pickup.pos.y, -60.0);
            assert!((0.0..=770.0).contains(&pickup.pos.x));
        }
    }

    #[test]
    fn test_zero_chance_never_spawns() {
        let (mut world, mut config, mut session, mut counter, _, mut rng) = setup();
        config.powerup_chance = 0.0;
        for i in 1..50 {
            session.tick = 600 * i;
            pickups_spawn(&mut world, &session, &config, &mut counter, &mut rng);
        }
        assert_eq!(pickup_count(&world), 0);
    }

    #[test]
    fn test_collect_grants_life() {
        let (mut world, config, mut session, mut counter, mut events, _) = setup();
        let ship = Ship::new(Ship::start_position(), &config);
        create_pickup(
            &mut world,
            &mut counter,
            Pickup::new(ship.pos + Vec2::new(5.0, 10.0), 2.0),
        );

        pickups_collect(&mut world, &ship, &mut session, &config, &mut events);

        assert_eq!(session.lives, 4);
        assert_eq!(events.pickups_collected, 1);
        assert_eq!(pickup_count(&world), 0);
    }

    #[test]
    fn test_collect_at_max_lives_stays_capped() {
        let (mut world, config, mut session, mut counter, mut events, _) = setup();
        session.lives = config.max_lives;
        let ship = Ship::new(Ship::start_position(), &config);
        create_pickup(&mut world, &mut counter, Pickup::new(ship.pos, 2.0));

        pickups_collect(&mut world, &ship, &mut session, &config, &mut events);

        assert_eq!(session.lives, 5);
        assert_eq!(pickup_count(&world), 0, "pickup consumed even when capped");
    }

    #[test]
    fn test_touching_edges_do_not_collect() {
        let (mut world, config, mut session, mut counter, mut events, _) = setup();
        let ship = Ship::new(Ship::start_position(), &config);
        // Directly above the hull, bottom edge flush with the ship's top
        create_pickup(
            &mut world,
            &mut counter,
            Pickup::new(ship.pos - Vec2::new(0.0, Params::PICKUP_SIZE), 2.0),
        );

        pickups_collect(&mut world, &ship, &mut session, &config, &mut events);

        assert_eq!(session.lives, 3);
        assert_eq!(pickup_count(&world), 1);
    }
}
