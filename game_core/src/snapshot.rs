//! Owned, serialisable render state.
//!
//! Positions are plain `[f32; 2]` arrays so the snapshot can cross the wire
//! without glam's serde support.

use serde::{Deserialize, Serialize};

use crate::components::{Asteroid, AsteroidSize, Pickup, Rgb, Star};
use crate::fsm::Phase;
use crate::particles::Particle;
use crate::ship::Ship;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: [f32; 2],
    pub size: f32,
    pub life: f32,
    pub color: Rgb,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            pos: p.pos.to_array(),
            size: p.size,
            life: p.life,
            color: p.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub visible: bool,
    pub thrusting: bool,
    pub bullets: Vec<[f32; 2]>,
    pub bullet_radius: f32,
    pub thruster: Vec<ParticleView>,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            pos: ship.pos.to_array(),
            size: [Ship::WIDTH, Ship::HEIGHT],
            visible: ship.is_visible(),
            thrusting: ship.is_thrusting(),
            bullets: ship.bullets().iter().map(|b| b.pos.to_array()).collect(),
            bullet_radius: crate::components::Bullet::RADIUS,
            thruster: ship.thruster_particles().iter().map(ParticleView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub pos: [f32; 2],
    pub radius: f32,
    pub rotation: f32,
    pub outline: Vec<[f32; 2]>,
    pub color: Rgb,
    pub size: AsteroidSize,
}

impl From<&Asteroid> for AsteroidView {
    fn from(a: &Asteroid) -> Self {
        Self {
            pos: a.pos.to_array(),
            radius: a.radius(),
            rotation: a.rotation,
            outline: a.outline().iter().map(|v| v.to_array()).collect(),
            color: a.color(),
            size: a.size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub pos: [f32; 2],
    pub size: f32,
}

impl From<&Pickup> for PickupView {
    fn from(p: &Pickup) -> Self {
        Self {
            pos: p.pos.to_array(),
            size: p.bounds().size.x,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarView {
    pub pos: [f32; 2],
    pub size: f32,
    pub brightness: f32,
}

impl From<&Star> for StarView {
    fn from(s: &Star) -> Self {
        Self {
            pos: s.pos.to_array(),
            size: s.size,
            brightness: s.brightness,
        }
    }
}

/// Everything a renderer needs for one frame, in draw order per pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub tick: u64,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub ship: ShipView,
    pub asteroids: Vec<AsteroidView>,
    pub pickups: Vec<PickupView>,
    pub explosions: Vec<ParticleView>,
    pub ambient: Vec<ParticleView>,
    pub stars: Vec<StarView>,
}
