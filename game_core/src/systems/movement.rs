use hecs::World;

use crate::components::{Asteroid, Pickup};
use crate::particles::{Ambient, Explosion, Particle};

/// Drift, spin and wrap every asteroid
pub fn move_asteroids(world: &mut World) {
    for (_entity, asteroid) in world.query_mut::<&mut Asteroid>() {
        asteroid.advance();
    }
}

pub fn move_pickups(world: &mut World) {
    for (_entity, pickup) in world.query_mut::<&mut Pickup>() {
        pickup.advance();
    }
}

/// Integrate the world particle pools; only explosions feel gravity
pub fn move_particles(world: &mut World, explosion_gravity: f32) {
    for (_entity, (particle, _)) in world.query_mut::<(&mut Particle, &Explosion)>() {
        particle.integrate(explosion_gravity);
    }
    for (_entity, (particle, _)) in world.query_mut::<(&mut Particle, &Ambient)>() {
        particle.integrate(0.0);
    }
}
