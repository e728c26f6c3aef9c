use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field defaults to its [`Params`] constant, so a TOML file only needs
/// the keys it wants to override. Field dimensions are not configurable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // Ship
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub fire_cooldown: f32,
    pub invulnerability_ticks: u32,

    // Session
    pub starting_lives: u32,
    pub max_lives: u32,
    pub survival_points: u32,

    // Difficulty
    pub asteroid_spawn_rate: u64,
    pub min_asteroid_spawn_rate: u64,
    pub spawn_rate_step: u64,
    pub max_asteroids: usize,
    pub max_asteroids_cap: usize,
    pub points_per_level: u32,

    // Pickups
    pub powerup_spawn_rate: u64,
    pub powerup_chance: f64,
    pub pickup_fall_speed: f32,

    // Effects
    pub explosion_gravity: f32,
    pub star_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ship_speed: Params::SHIP_SPEED,
            bullet_speed: Params::BULLET_SPEED,
            fire_cooldown: Params::FIRE_COOLDOWN,
            invulnerability_ticks: Params::INVULNERABILITY_TICKS,
            starting_lives: Params::STARTING_LIVES,
            max_lives: Params::MAX_LIVES,
            survival_points: Params::SURVIVAL_POINTS,
            asteroid_spawn_rate: Params::ASTEROID_SPAWN_RATE,
            min_asteroid_spawn_rate: Params::MIN_ASTEROID_SPAWN_RATE,
            spawn_rate_step: Params::SPAWN_RATE_STEP,
            max_asteroids: Params::MAX_ASTEROIDS,
            max_asteroids_cap: Params::MAX_ASTEROIDS_CAP,
            points_per_level: Params::POINTS_PER_LEVEL,
            powerup_spawn_rate: Params::POWERUP_SPAWN_RATE,
            powerup_chance: Params::POWERUP_CHANCE,
            pickup_fall_speed: Params::PICKUP_FALL_SPEED,
            explosion_gravity: Params::EXPLOSION_GRAVITY,
            star_count: Params::STAR_COUNT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Reject values that would stall or panic the tick loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.asteroid_spawn_rate == 0 {
            return invalid("asteroid_spawn_rate", "must be greater than zero");
        }
        if self.min_asteroid_spawn_rate == 0 {
            return invalid("min_asteroid_spawn_rate", "must be greater than zero");
        }
        if self.powerup_spawn_rate == 0 {
            return invalid("powerup_spawn_rate", "must be greater than zero");
        }
        if !(0.0..=1.0).contains(&self.powerup_chance) {
            return invalid("powerup_chance", "must be within [0, 1]");
        }
        if self.max_lives == 0 || self.max_lives > Params::MAX_LIVES {
            return invalid("max_lives", "must be within [1, 5]");
        }
        if self.starting_lives == 0 || self.starting_lives > self.max_lives {
            return invalid("starting_lives", "must be within [1, max_lives]");
        }
        if self.points_per_level == 0 {
            return invalid("points_per_level", "must be greater than zero");
        }
        if self.fire_cooldown.is_nan() || self.fire_cooldown <= 0.0 {
            return invalid("fire_cooldown", "must be positive");
        }
        Ok(())
    }

    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.points_per_level + 1
    }

    /// Ticks between asteroid spawns at `level`, never below the floor
    pub fn spawn_rate_for_level(&self, level: u32) -> u64 {
        self.asteroid_spawn_rate
            .saturating_sub(u64::from(level) * self.spawn_rate_step)
            .max(self.min_asteroid_spawn_rate)
    }

    /// Live asteroid ceiling at `level`, never above the cap
    pub fn max_asteroids_for_level(&self, level: u32) -> usize {
        (self.max_asteroids + level as usize).min(self.max_asteroids_cap)
    }
}
