/// Game tuning parameters for Rockfall
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const SPAWN_Y: f32 = -60.0;

    // Ship
    pub const SHIP_WIDTH: f32 = 40.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const SHIP_SPEED: f32 = 5.0;
    pub const SHIP_START_X: f32 = Self::FIELD_WIDTH / 2.0 - Self::SHIP_WIDTH / 2.0;
    pub const SHIP_START_Y: f32 = Self::FIELD_HEIGHT - 100.0;
    pub const INVULNERABILITY_TICKS: u32 = 120;
    pub const THRUSTER_PARTICLES_PER_TICK: usize = 2;

    // Bullets
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const FIRE_COOLDOWN: f32 = 0.25; // seconds, wall clock

    // Pickups
    pub const PICKUP_SIZE: f32 = 30.0;
    pub const PICKUP_FALL_SPEED: f32 = 2.0;
    pub const POWERUP_SPAWN_RATE: u64 = 600;
    pub const POWERUP_CHANCE: f64 = 0.3;

    // Session
    pub const STARTING_LIVES: u32 = 3;
    pub const MAX_LIVES: u32 = 5;
    pub const SURVIVAL_POINTS: u32 = 10;

    // Difficulty
    pub const ASTEROID_SPAWN_RATE: u64 = 120;
    pub const MIN_ASTEROID_SPAWN_RATE: u64 = 60;
    pub const SPAWN_RATE_STEP: u64 = 10;
    pub const MAX_ASTEROIDS: usize = 8;
    pub const MAX_ASTEROIDS_CAP: usize = 15;
    pub const POINTS_PER_LEVEL: u32 = 1000;

    // Effects
    pub const EXPLOSION_GRAVITY: f32 = 0.1;
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MIN_BRIGHTNESS: f32 = 0.3;
    pub const STAR_MAX_BRIGHTNESS: f32 = 1.0;
    pub const TWINKLE_AMPLITUDE: f32 = 0.01;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
}
