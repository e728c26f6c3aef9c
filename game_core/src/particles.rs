//! Decaying visual particles.
//!
//! Thruster particles live on the ship in a plain `Vec`; explosion and ambient
//! particles are world entities tagged with [`Explosion`] or [`Ambient`].
//! All three pools share [`Particle::integrate`] and differ only in gravity.

use glam::Vec2;

use crate::components::Rgb;
use crate::resources::GameRng;

/// Fire tones used for asteroid explosions
pub const EXPLOSION_PALETTE: [Rgb; 5] = [
    Rgb::hex(0xff6b35),
    Rgb::hex(0xff9f1c),
    Rgb::hex(0xffbf69),
    Rgb::hex(0xff4d4d),
    Rgb::hex(0xff8c42),
];

pub const SPARK_COLOR: Rgb = Rgb::hex(0xffaa00);

/// Marker for the explosion pool (falls under gravity)
#[derive(Debug, Clone, Copy, Default)]
pub struct Explosion;

/// Marker for the ambient pool (no gravity)
#[derive(Debug, Clone, Copy, Default)]
pub struct Ambient;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 1.0 when spawned, removed at <= 0
    pub decay: f32,
    pub size: f32,
    pub color: Rgb,
}

impl Particle {
    /// Exhaust puff behind the ship, warm hue
    pub fn thruster(pos: Vec2, rng: &mut GameRng) -> Self {
        let hue = rng.int(20, 60) as f32;
        Self {
            pos,
            vel: Vec2::new(rng.float(-1.0, 1.0), rng.float(1.0, 3.0)),
            life: 1.0,
            decay: rng.float(0.05, 0.1),
            size: rng.float(2.0, 4.0),
            color: hsl_to_rgb(hue, 1.0, 0.6),
        }
    }

    /// General-purpose spark flying off in any direction
    pub fn spark(pos: Vec2, color: Rgb, rng: &mut GameRng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.float(-3.0, 3.0), rng.float(-3.0, 3.0)),
            life: 1.0,
            decay: rng.float(0.02, 0.05),
            size: rng.float(2.0, 5.0),
            color,
        }
    }

    /// Move, age, then apply `gravity` to the vertical velocity
    pub fn integrate(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.life -= self.decay;
        self.vel.y += gravity;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Integrate a pool and keep only the survivors
pub fn advance_pool(pool: &mut Vec<Particle>, gravity: f32) {
    for particle in pool.iter_mut() {
        particle.integrate(gravity);
    }
    pool.retain(Particle::is_alive);
}

/// Convert HSL (hue in degrees, saturation and lightness in [0, 1]) to RGB
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb(channel(r), channel(g), channel(b))
}
