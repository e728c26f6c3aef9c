use glam::Vec2;
use hecs::World;

use crate::components::{Asteroid, AsteroidSize};
use crate::field::Field;
use crate::params::Params;
use crate::resources::{GameRng, Session, SpawnCounter};
use crate::create_asteroid;

/// True on ticks that are a whole multiple of `period`. A zero period never fires.
pub fn every(tick: u64, period: u64) -> bool {
    period != 0 && tick % period == 0
}

/// Drop a new asteroid in from above the field on spawn ticks, while there is room
pub fn spawn_asteroids(
    world: &mut World,
    session: &Session,
    counter: &mut SpawnCounter,
    rng: &mut GameRng,
) {
    if !every(session.tick, session.asteroid_spawn_rate) {
        return;
    }

    let live = world.query::<&Asteroid>().iter().count();
    if live >= session.max_asteroids {
        return;
    }

    let x = rng.int(0, Field::WIDTH as i32) as f32;
    let size = *rng.pick(&AsteroidSize::ALL);
    let asteroid = Asteroid::new(Vec2::new(x, Params::SPAWN_Y), size, rng);
    tracing::debug!(tick = session.tick, ?size, x, "asteroid spawned");
    create_asteroid(world, counter, asteroid);
}
