use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::field::{Aabb, Field};
use crate::params::Params;
use crate::particles::{Particle, EXPLOSION_PALETTE};
use crate::resources::GameRng;

/// 24-bit colour handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(rgb: u32) -> Self {
        Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

pub const ROCK_PALETTE: [Rgb; 5] = [
    Rgb::hex(0x8b4513),
    Rgb::hex(0x696969),
    Rgb::hex(0xa0522d),
    Rgb::hex(0x556b2f),
    Rgb::hex(0x2f4f4f),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Inclusive integer radius range
    pub fn radius_range(self) -> (i32, i32) {
        match self {
            Self::Small => (15, 25),
            Self::Medium => (25, 40),
            Self::Large => (40, 60),
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::Small => 50,
            Self::Medium => 100,
            Self::Large => 200,
        }
    }

    /// Fragment size, fragment count range and scatter offset on destruction
    fn fragments(self) -> Option<(AsteroidSize, (i32, i32), f32)> {
        match self {
            Self::Large => Some((Self::Medium, (2, 3), 20.0)),
            Self::Medium => Some((Self::Small, (2, 4), 15.0)),
            Self::Small => None,
        }
    }

    fn explosion_particles(self) -> usize {
        match self {
            Self::Large => 20,
            Self::Medium => 15,
            Self::Small => 10,
        }
    }
}

/// Falling rock. Position is the centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    size: AsteroidSize,
    radius: f32,
    points: u32,
    outline: Vec<Vec2>,
    color: Rgb,
}

impl Asteroid {
    pub fn new(pos: Vec2, size: AsteroidSize, rng: &mut GameRng) -> Self {
        let (min_r, max_r) = size.radius_range();
        let radius = rng.int(min_r, max_r) as f32;

        let vertex_count = rng.int(8, 12) as usize;
        let outline = (0..vertex_count)
            .map(|i| {
                let angle = i as f32 / vertex_count as f32 * std::f32::consts::TAU;
                let jitter = rng.float(0.7, 1.3);
                Vec2::new(angle.cos(), angle.sin()) * radius * jitter
            })
            .collect();

        Self {
            pos,
            vel: Vec2::new(rng.float(-1.0, 1.0), rng.float(1.0, 3.0)),
            rotation: 0.0,
            rotation_speed: rng.float(-0.05, 0.05),
            size,
            radius,
            points: size.points(),
            outline,
            color: *rng.pick(&ROCK_PALETTE),
        }
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Vertex offsets from the centre, before rotation
    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
        self.pos.x = Field::wrap_x(self.pos.x, self.radius);
    }

    pub fn is_beyond_field(&self) -> bool {
        Field::below(self.pos.y, self.radius)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Smaller rocks left behind when this one is destroyed
    pub fn split(&self, rng: &mut GameRng) -> Vec<Asteroid> {
        let Some((size, (min, max), spread)) = self.size.fragments() else {
            return Vec::new();
        };
        let count = rng.int(min, max);
        (0..count)
            .map(|_| {
                let offset = Vec2::new(rng.float(-spread, spread), rng.float(-spread, spread));
                Asteroid::new(self.pos + offset, size, rng)
            })
            .collect()
    }

    /// Burst of fire-toned particles: an even ring plus half as many strays
    pub fn explode(&self, rng: &mut GameRng) -> Vec<Particle> {
        let ring = self.size.explosion_particles();
        let strays = ring.div_ceil(2);
        let mut particles = Vec::with_capacity(ring + strays);

        for i in 0..ring {
            let angle = i as f32 / ring as f32 * std::f32::consts::TAU;
            let speed = rng.float(2.0, 6.0);
            particles.push(Particle {
                pos: self.pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                decay: rng.float(0.02, 0.05),
                size: rng.float(2.0, 6.0),
                color: *rng.pick(&EXPLOSION_PALETTE),
            });
        }

        for _ in 0..strays {
            let r = self.radius;
            particles.push(Particle {
                pos: self.pos + Vec2::new(rng.float(-r, r), rng.float(-r, r)),
                vel: Vec2::new(rng.float(-4.0, 4.0), rng.float(-4.0, 4.0)),
                life: 1.0,
                decay: rng.float(0.02, 0.05),
                size: rng.float(1.0, 4.0),
                color: *rng.pick(&EXPLOSION_PALETTE),
            });
        }

        particles
    }
}

/// Insertion order for world entities; hecs ids are recycled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);

/// Life-restoring collectible. Position is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub pos: Vec2,
    pub fall_speed: f32,
}

impl Pickup {
    pub fn new(pos: Vec2, fall_speed: f32) -> Self {
        Self { pos, fall_speed }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.fall_speed;
    }

    pub fn is_beyond_field(&self) -> bool {
        self.pos.y > Field::HEIGHT
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(Params::PICKUP_SIZE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
}

impl Bullet {
    pub const RADIUS: f32 = Params::BULLET_RADIUS;

    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn hits(&self, asteroid: &Asteroid) -> bool {
        self.pos.distance(asteroid.pos) < Self::RADIUS + asteroid.radius()
    }
}

/// Background star with a slow twinkle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
}

impl Star {
    pub fn new(rng: &mut GameRng) -> Self {
        Self {
            pos: Vec2::new(
                rng.int(0, Field::WIDTH as i32) as f32,
                rng.int(0, Field::HEIGHT as i32) as f32,
            ),
            size: rng.float(0.5, 2.0),
            brightness: rng.float(Params::STAR_MIN_BRIGHTNESS, Params::STAR_MAX_BRIGHTNESS),
            twinkle_speed: rng.float(0.01, 0.03),
        }
    }

    pub fn twinkle(&mut self, tick: u64) {
        let phase = tick as f32 * self.twinkle_speed;
        self.brightness = (self.brightness + phase.sin() * Params::TWINKLE_AMPLITUDE)
            .clamp(Params::STAR_MIN_BRIGHTNESS, Params::STAR_MAX_BRIGHTNESS);
    }
}

/// One steerable input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// Current input flags for the ship
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl ShipIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, intent: Intent, active: bool) {
        match intent {
            Intent::Left => self.left = active,
            Intent::Right => self.right = active,
            Intent::Up => self.up = active,
            Intent::Down => self.down = active,
            Intent::Fire => self.fire = active,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}
