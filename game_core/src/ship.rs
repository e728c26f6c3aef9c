use std::cmp::Reverse;

use glam::Vec2;
use hecs::World;

use crate::components::{Asteroid, AsteroidSize, Bullet, Intent, ShipIntent, SpawnOrder};
use crate::config::Config;
use crate::field::{Aabb, Field};
use crate::params::Params;
use crate::particles::{advance_pool, Particle};
use crate::resources::GameRng;

/// Outcome of a bullet destroying an asteroid
#[derive(Debug, Clone)]
pub struct BulletHit {
    pub size: AsteroidSize,
    pub fragments: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    pub points: u32,
}

/// The player's craft. Position is the top-left corner of its hull.
///
/// Owns its bullets and thruster particles. Invulnerability is a countdown in
/// ticks; while it is non-zero further hits are absorbed.
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    intent: ShipIntent,
    bullets: Vec<Bullet>,
    thruster: Vec<Particle>,
    last_shot: Option<f64>,
    invulnerable_ticks: u32,

    speed: f32,
    bullet_speed: f32,
    fire_cooldown: f32,
    invulnerability_window: u32,
}

impl Ship {
    pub const WIDTH: f32 = Params::SHIP_WIDTH;
    pub const HEIGHT: f32 = Params::SHIP_HEIGHT;

    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos: Self::clamp_to_field(pos),
            intent: ShipIntent::new(),
            bullets: Vec::new(),
            thruster: Vec::new(),
            last_shot: None,
            invulnerable_ticks: 0,
            speed: config.ship_speed,
            bullet_speed: config.bullet_speed,
            fire_cooldown: config.fire_cooldown,
            invulnerability_window: config.invulnerability_ticks,
        }
    }

    /// Where a new round puts the ship: centred, near the bottom
    pub fn start_position() -> Vec2 {
        Vec2::new(Params::SHIP_START_X, Params::SHIP_START_Y)
    }

    /// Keep the whole hull inside the field
    pub fn clamp_to_field(pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, Field::WIDTH - Self::WIDTH),
            pos.y.clamp(0.0, Field::HEIGHT - Self::HEIGHT),
        )
    }

    pub fn intent(&self) -> ShipIntent {
        self.intent
    }

    /// Replace every input flag at once
    pub fn apply_input(&mut self, intent: ShipIntent) {
        self.intent = intent;
    }

    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        self.intent.set(intent, active);
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn thruster_particles(&self) -> &[Particle] {
        &self.thruster
    }

    pub fn invulnerable_ticks(&self) -> u32 {
        self.invulnerable_ticks
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    pub fn is_thrusting(&self) -> bool {
        self.intent.is_moving()
    }

    /// Flash state: hidden on alternating 5-tick spans while invulnerable
    pub fn is_visible(&self) -> bool {
        !self.is_invulnerable() || (self.invulnerable_ticks / 5) % 2 == 1
    }

    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x + Self::WIDTH / 2.0, self.pos.y)
    }

    pub fn tail(&self) -> Vec2 {
        Vec2::new(self.pos.x + Self::WIDTH / 2.0, self.pos.y + Self::HEIGHT)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(Self::WIDTH, Self::HEIGHT))
    }

    /// One tick of movement, firing, bullets, invulnerability and exhaust.
    ///
    /// `now` is wall-clock seconds; only the fire cooldown reads it.
    pub fn advance(&mut self, now: f64, rng: &mut GameRng) {
        let mut pos = self.pos;
        if self.intent.left {
            pos.x -= self.speed;
        }
        if self.intent.right {
            pos.x += self.speed;
        }
        if self.intent.up {
            pos.y -= self.speed;
        }
        if self.intent.down {
            pos.y += self.speed;
        }
        self.pos = Self::clamp_to_field(pos);

        if self.intent.fire {
            self.try_fire(now);
        }

        for bullet in &mut self.bullets {
            bullet.pos.y -= self.bullet_speed;
        }
        self.bullets
            .retain(|bullet| !Field::above(bullet.pos.y + Bullet::RADIUS));

        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);

        if self.intent.is_moving() {
            let tail = self.tail();
            for _ in 0..Params::THRUSTER_PARTICLES_PER_TICK {
                let origin = Vec2::new(tail.x + rng.float(-5.0, 5.0), tail.y);
                self.thruster.push(Particle::thruster(origin, rng));
            }
        }
        advance_pool(&mut self.thruster, 0.0);
    }

    fn try_fire(&mut self, now: f64) {
        let cooldown = f64::from(self.fire_cooldown);
        let ready = self.last_shot.map_or(true, |last| now - last >= cooldown);
        if ready {
            self.bullets.push(Bullet::new(self.nose()));
            self.last_shot = Some(now);
        }
    }

    /// Find the first bullet touching an asteroid and destroy that asteroid.
    ///
    /// Bullets are scanned oldest first and asteroids newest first; the scan
    /// stops at the first hit, so at most one asteroid falls per tick.
    pub fn resolve_bullet_hits(
        &mut self,
        world: &mut World,
        rng: &mut GameRng,
    ) -> Option<BulletHit> {
        let found = {
            let mut query = world.query::<(&Asteroid, &SpawnOrder)>();
            let mut candidates: Vec<_> = query
                .iter()
                .map(|(entity, (asteroid, order))| (entity, *order, asteroid))
                .collect();
            candidates.sort_by_key(|(_, order, _)| Reverse(*order));

            let found = self.bullets.iter().enumerate().find_map(|(i, bullet)| {
                candidates
                    .iter()
                    .find(|(_, _, asteroid)| bullet.hits(asteroid))
                    .map(|(entity, _, _)| (i, *entity))
            });
            found
        };
        let (bullet_index, entity) = found?;

        self.bullets.remove(bullet_index);
        let asteroid = world.remove_one::<Asteroid>(entity).ok()?;
        let _ = world.despawn(entity);

        let particles = asteroid.explode(rng);
        let fragments = asteroid.split(rng);
        Some(BulletHit {
            size: asteroid.size(),
            fragments,
            particles,
            points: asteroid.points(),
        })
    }

    /// Register a hit. Returns false when the hit was absorbed.
    pub fn take_damage(&mut self) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.invulnerable_ticks = self.invulnerability_window;
        true
    }

    /// Prepare for a new round. Held input flags survive.
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = Self::clamp_to_field(pos);
        self.bullets.clear();
        self.thruster.clear();
        self.last_shot = None;
        self.invulnerable_ticks = 0;
    }
}
