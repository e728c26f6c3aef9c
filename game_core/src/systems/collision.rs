use std::cmp::Reverse;

use hecs::World;

use crate::components::{Asteroid, SpawnOrder};
use crate::resources::*;
use crate::ship::Ship;
use crate::{create_asteroid, create_explosion};

/// Resolve at most one bullet strike and fold its fallout into the world
pub fn check_bullet_hits(
    world: &mut World,
    ship: &mut Ship,
    session: &mut Session,
    counter: &mut SpawnCounter,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let Some(hit) = ship.resolve_bullet_hits(world, rng) else {
        return;
    };

    tracing::debug!(
        size = ?hit.size,
        points = hit.points,
        fragments = hit.fragments.len(),
        "asteroid destroyed"
    );

    session.add_points(hit.points);
    events.bullet_points += hit.points;
    events.destroyed.push(hit.size);

    for fragment in hit.fragments {
        create_asteroid(world, counter, fragment);
    }
    create_explosion(world, counter, hit.particles);
}

/// Ship against asteroids, newest first.
///
/// A registered hit costs a life, blows up the asteroid and removes it. Hits
/// absorbed by invulnerability leave the asteroid alone. Returns true when the
/// last life is gone.
pub fn check_ship_collisions(
    world: &mut World,
    ship: &mut Ship,
    session: &mut Session,
    counter: &mut SpawnCounter,
    rng: &mut GameRng,
    events: &mut Events,
) -> bool {
    let ship_bounds = ship.bounds();

    let mut touching: Vec<_> = world
        .query::<(&Asteroid, &SpawnOrder)>()
        .iter()
        .filter(|(_, (asteroid, _))| asteroid.bounds().overlaps(&ship_bounds))
        .map(|(entity, (_, order))| (entity, *order))
        .collect();
    touching.sort_by_key(|(_, order)| Reverse(*order));

    for (entity, _) in touching {
        if !ship.take_damage() {
            continue;
        }

        events.ship_hit = true;
        let lives_left = session.lose_life();
        tracing::debug!(lives = session.lives, "ship hit");

        if let Ok(asteroid) = world.remove_one::<Asteroid>(entity) {
            create_explosion(world, counter, asteroid.explode(rng));
        }
        let _ = world.despawn(entity);

        if !lives_left {
            events.game_over = true;
            return true;
        }
    }

    false
}
