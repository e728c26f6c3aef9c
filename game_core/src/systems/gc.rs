use hecs::World;

use crate::components::{Asteroid, Pickup};
use crate::particles::Particle;

/// Despawn asteroids that fell past the bottom edge; returns how many escaped
pub fn cull_asteroids(world: &mut World) -> u32 {
    let to_remove: Vec<_> = world
        .query::<&Asteroid>()
        .iter()
        .filter(|(_, asteroid)| asteroid.is_beyond_field())
        .map(|(entity, _)| entity)
        .collect();

    let escaped = to_remove.len() as u32;
    for entity in to_remove {
        let _ = world.despawn(entity);
    }
    escaped
}

pub fn cull_pickups(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Pickup>()
        .iter()
        .filter(|(_, pickup)| pickup.is_beyond_field())
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Garbage collection: despawn expired particles from every world pool
pub fn cull_particles(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Particle>()
        .iter()
        .filter(|(_, particle)| !particle.is_alive())
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
