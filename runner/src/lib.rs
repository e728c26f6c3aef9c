//! Headless sessions: a scripted pilot plays the simulation through the wire
//! protocol, the way a browser or native host would.

pub mod autopilot;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use game_core::{Config, Game, HudListener, HudUpdate, InputEvent, Params, Phase, SessionControl};
use proto::{C2S, S2C};

use crate::autopilot::Autopilot;

/// Summary of one autopilot session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub seed: u64,
    pub ticks: u64,
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub asteroids_destroyed: u32,
    pub ship_hits: u32,
    pub pickups_collected: u32,
    pub hud_updates: usize,
    pub frame_bytes: u64,
}

/// Load a config file when given, otherwise fall back to the defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Collects HUD updates as encoded `S2C::Hud` frames
#[derive(Clone, Default)]
struct HudRecorder {
    frames: Rc<RefCell<Vec<Vec<u8>>>>,
    errors: Rc<RefCell<Vec<postcard::Error>>>,
}

impl HudListener for HudRecorder {
    fn on_hud(&mut self, update: &HudUpdate) {
        tracing::debug!(
            score = update.score,
            lives = update.lives,
            level = update.level,
            overlay = ?update.overlay,
            "hud"
        );
        match S2C::Hud(*update).to_bytes() {
            Ok(bytes) => self.frames.borrow_mut().push(bytes),
            Err(err) => self.errors.borrow_mut().push(err),
        }
    }
}

/// Push one wire message through encode, decode and into the game's queue
fn deliver(game: &mut Game, msg: C2S) -> Result<()> {
    let bytes = msg.to_bytes().context("failed to encode input")?;
    let decoded = C2S::from_bytes(&bytes).context("failed to decode input")?;
    game.push_input(InputEvent::from(decoded));
    Ok(())
}

/// Play one session until game over or `max_ticks` simulation ticks
pub fn run_session(seed: u64, max_ticks: u64, config: &Config) -> Result<RunReport> {
    if max_ticks == 0 {
        return Err(anyhow!("max_ticks must be > 0"));
    }
    config.validate().context("invalid game config")?;

    let mut game = Game::new(config.clone(), seed);
    let recorder = HudRecorder::default();
    game.add_listener(recorder.clone());

    let mut pilot = Autopilot::new();
    let mut asteroids_destroyed = 0u32;
    let mut ship_hits = 0u32;
    let mut pickups_collected = 0u32;
    let mut frame_bytes = 0u64;

    deliver(&mut game, C2S::Control(SessionControl::Start))?;
    let mut snapshot = game.snapshot();

    while game.tick() < max_ticks {
        for msg in pilot.next_inputs(&snapshot) {
            deliver(&mut game, msg)?;
        }
        game.step(Params::FIXED_DT);

        let events = game.events();
        asteroids_destroyed += events.destroyed.len() as u32;
        ship_hits += u32::from(events.ship_hit);
        pickups_collected += events.pickups_collected;
        if let Some(level) = events.level_up {
            tracing::debug!(seed, level, tick = game.tick(), "level up");
        }

        snapshot = game.snapshot();
        let frame = S2C::Frame(snapshot.clone())
            .to_bytes()
            .context("failed to encode frame")?;
        frame_bytes += frame.len() as u64;

        if game.phase() == Phase::Over {
            break;
        }
    }

    if let Some(err) = recorder.errors.borrow().first() {
        return Err(anyhow!("failed to encode hud update: {err}"));
    }
    let hud_updates = recorder.frames.borrow().len();

    Ok(RunReport {
        seed,
        ticks: game.tick(),
        phase: game.phase(),
        score: game.score(),
        lives: game.lives(),
        level: game.level(),
        asteroids_destroyed,
        ship_hits,
        pickups_collected,
        hud_updates,
        frame_bytes,
    })
}
