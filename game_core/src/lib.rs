pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod fsm;
pub mod game;
pub mod hud;
pub mod params;
pub mod particles;
pub mod resources;
pub mod ship;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use fsm::*;
pub use game::*;
pub use hud::*;
pub use params::*;
pub use particles::*;
pub use resources::*;
pub use ship::*;
pub use snapshot::*;

use hecs::World;

/// Helper to create an asteroid entity
pub fn create_asteroid(
    world: &mut World,
    counter: &mut SpawnCounter,
    asteroid: Asteroid,
) -> hecs::Entity {
    world.spawn((asteroid, counter.next()))
}

/// Helper to create a pickup entity
pub fn create_pickup(world: &mut World, counter: &mut SpawnCounter, pickup: Pickup) -> hecs::Entity {
    world.spawn((pickup, counter.next()))
}

/// Helper to spawn a batch of explosion particles
pub fn create_explosion(
    world: &mut World,
    counter: &mut SpawnCounter,
    particles: impl IntoIterator<Item = Particle>,
) {
    for particle in particles {
        world.spawn((particle, Explosion, counter.next()));
    }
}

/// Helper to create an ambient particle entity
pub fn create_ambient(
    world: &mut World,
    counter: &mut SpawnCounter,
    particle: Particle,
) -> hecs::Entity {
    world.spawn((particle, Ambient, counter.next()))
}
