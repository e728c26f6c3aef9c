//! The simulation controller.
//!
//! [`Game`] owns every entity collection, the session state and the phase
//! machine. Hosts push input, call [`Game::step`] once per frame and read
//! [`Game::snapshot`] (or the borrowing accessors) to draw.

use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::fsm::{Phase, PhaseFsm, SessionAction, TransitionResult};
use crate::hud::{HudListener, HudUpdate};
use crate::params::Params;
use crate::particles::{Ambient, Explosion, Particle};
use crate::resources::*;
use crate::ship::Ship;
use crate::snapshot::*;
use crate::systems::*;
use crate::{create_ambient, create_asteroid, create_pickup};

pub struct Game {
    world: World,
    ship: Ship,
    stars: Vec<Star>,
    session: Session,
    fsm: PhaseFsm,
    config: Config,
    time: Time,
    rng: GameRng,
    events: Events,
    input: InputQueue,
    counter: SpawnCounter,
    listeners: Vec<Box<dyn HudListener>>,
    last_hud: Option<HudUpdate>,
}

impl Game {
    /// Build a session in the menu phase. Stars come from the seeded RNG, so
    /// equal seeds give equal skies.
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let stars = (0..config.star_count).map(|_| Star::new(&mut rng)).collect();

        Self {
            world: World::new(),
            ship: Ship::new(Ship::start_position(), &config),
            stars,
            session: Session::new(&config),
            fsm: PhaseFsm::new(),
            time: Time::new(0.0, 0.0),
            rng,
            events: Events::new(),
            input: InputQueue::new(),
            counter: SpawnCounter::new(),
            listeners: Vec::new(),
            last_hud: None,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    pub fn level(&self) -> u32 {
        self.session.level
    }

    pub fn tick(&self) -> u64 {
        self.session.tick
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// What happened during the last step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Live asteroids, oldest first
    pub fn asteroids(&self) -> Vec<Asteroid> {
        ordered::<Asteroid>(&self.world)
    }

    pub fn pickups(&self) -> Vec<Pickup> {
        ordered::<Pickup>(&self.world)
    }

    pub fn explosion_particles(&self) -> Vec<Particle> {
        ordered_tagged::<Particle, Explosion>(&self.world)
    }

    pub fn ambient_particles(&self) -> Vec<Particle> {
        ordered_tagged::<Particle, Ambient>(&self.world)
    }

    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    pub fn pickup_count(&self) -> usize {
        self.world.query::<&Pickup>().iter().count()
    }

    /// Register a HUD listener; it immediately receives the current values
    pub fn add_listener(&mut self, mut listener: impl HudListener + 'static) {
        listener.on_hud(&self.hud());
        self.listeners.push(Box::new(listener));
    }

    /// Queue an input event for the next step
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn set_intent(&mut self, intent: Intent, active: bool) {
        self.ship.set_intent(intent, active);
    }

    pub fn apply_input(&mut self, intent: ShipIntent) {
        self.ship.apply_input(intent);
    }

    pub fn start(&mut self) -> TransitionResult {
        self.control(SessionControl::Start)
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        self.control(SessionControl::TogglePause)
    }

    pub fn reset(&mut self) -> TransitionResult {
        self.control(SessionControl::Reset)
    }

    pub fn restart(&mut self) -> TransitionResult {
        self.control(SessionControl::Restart)
    }

    /// Apply a session control right away
    pub fn control(&mut self, control: SessionControl) -> TransitionResult {
        let action = match control {
            SessionControl::Start => SessionAction::Start,
            SessionControl::TogglePause if self.fsm.phase() == Phase::Paused => {
                SessionAction::Resume
            }
            SessionControl::TogglePause => SessionAction::Pause,
            SessionControl::Reset => SessionAction::Reset,
            SessionControl::Restart => SessionAction::Restart,
        };
        self.transition(action)
    }

    /// Drop an asteroid into the world at `pos` (its centre)
    pub fn spawn_asteroid(&mut self, pos: Vec2, size: AsteroidSize) -> hecs::Entity {
        let asteroid = Asteroid::new(pos, size, &mut self.rng);
        create_asteroid(&mut self.world, &mut self.counter, asteroid)
    }

    /// Place a pickup with its top-left corner at `pos`
    pub fn spawn_pickup(&mut self, pos: Vec2) -> hecs::Entity {
        let pickup = Pickup::new(pos, self.config.pickup_fall_speed);
        create_pickup(&mut self.world, &mut self.counter, pickup)
    }

    /// Add one spark to the ambient pool
    pub fn emit_spark(&mut self, pos: Vec2, color: Rgb) -> hecs::Entity {
        let spark = Particle::spark(pos, color, &mut self.rng);
        create_ambient(&mut self.world, &mut self.counter, spark)
    }

    /// Advance the session clock by `dt` seconds, apply queued input and, when
    /// playing, run one simulation tick.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.min(Params::MAX_DT)
        } else {
            0.0
        };
        self.time.advance(dt);
        self.events.clear();

        for control in ingest_inputs(&mut self.input, &mut self.ship) {
            self.control(control);
        }

        if self.fsm.is_playing() {
            self.run_tick();
            self.notify_hud(false);
        }
    }

    fn run_tick(&mut self) {
        self.session.tick += 1;

        self.ship.advance(self.time.now, &mut self.rng);

        spawn_asteroids(
            &mut self.world,
            &self.session,
            &mut self.counter,
            &mut self.rng,
        );
        pickups_spawn(
            &mut self.world,
            &self.session,
            &self.config,
            &mut self.counter,
            &mut self.rng,
        );

        move_asteroids(&mut self.world);
        let escaped = cull_asteroids(&mut self.world);
        award_escapes(&mut self.session, &self.config, escaped, &mut self.events);

        move_pickups(&mut self.world);
        cull_pickups(&mut self.world);

        move_particles(&mut self.world, self.config.explosion_gravity);
        cull_particles(&mut self.world);

        check_bullet_hits(
            &mut self.world,
            &mut self.ship,
            &mut self.session,
            &mut self.counter,
            &mut self.rng,
            &mut self.events,
        );
        let lives_exhausted = check_ship_collisions(
            &mut self.world,
            &mut self.ship,
            &mut self.session,
            &mut self.counter,
            &mut self.rng,
            &mut self.events,
        );
        if lives_exhausted {
            tracing::info!(
                score = self.session.score,
                level = self.session.level,
                tick = self.session.tick,
                "game over"
            );
            self.transition(SessionAction::LivesExhausted);
            return;
        }
        pickups_collect(
            &mut self.world,
            &self.ship,
            &mut self.session,
            &self.config,
            &mut self.events,
        );

        twinkle_stars(&mut self.stars, self.session.tick);

        check_difficulty(&mut self.session, &self.config, &mut self.events);
    }

    fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if !result.success() {
            tracing::warn!(?action, phase = ?result.from_phase(), "session control rejected");
            return result;
        }

        tracing::info!(
            from = ?result.from_phase(),
            to = ?result.to_phase(),
            ?action,
            "phase transition"
        );
        if result.starts_round() || result.action() == SessionAction::Reset {
            self.reset_round();
        }
        self.notify_hud(true);
        result
    }

    /// Fresh score, lives, level and difficulty; every world entity goes.
    /// Stars and held input survive.
    fn reset_round(&mut self) {
        self.session = Session::new(&self.config);
        self.world.clear();
        self.ship.reset(Ship::start_position());
    }

    fn hud(&self) -> HudUpdate {
        HudUpdate::new(
            self.session.score,
            self.session.lives,
            self.session.level,
            self.fsm.phase(),
        )
    }

    fn notify_hud(&mut self, force: bool) {
        let update = self.hud();
        if !force && self.last_hud == Some(update) {
            return;
        }
        for listener in &mut self.listeners {
            listener.on_hud(&update);
        }
        self.last_hud = Some(update);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.fsm.phase(),
            tick: self.session.tick,
            score: self.session.score,
            lives: self.session.lives,
            level: self.session.level,
            ship: ShipView::from(&self.ship),
            asteroids: self.asteroids().iter().map(AsteroidView::from).collect(),
            pickups: self.pickups().iter().map(PickupView::from).collect(),
            explosions: self
                .explosion_particles()
                .iter()
                .map(ParticleView::from)
                .collect(),
            ambient: self
                .ambient_particles()
                .iter()
                .map(ParticleView::from)
                .collect(),
            stars: self.stars.iter().map(StarView::from).collect(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

/// Clone every `T` out of the world in spawn order
fn ordered<T: hecs::Component + Clone>(world: &World) -> Vec<T> {
    let mut items: Vec<_> = world
        .query::<(&T, &SpawnOrder)>()
        .iter()
        .map(|(_, (item, order))| (*order, item.clone()))
        .collect();
    items.sort_by_key(|(order, _)| *order);
    items.into_iter().map(|(_, item)| item).collect()
}

/// Like [`ordered`], restricted to entities carrying marker `M`
fn ordered_tagged<T: hecs::Component + Clone, M: hecs::Component>(world: &World) -> Vec<T> {
    let mut items: Vec<_> = world
        .query::<(&T, &SpawnOrder, &M)>()
        .iter()
        .map(|(_, (item, order, _))| (*order, item.clone()))
        .collect();
    items.sort_by_key(|(order, _)| *order);
    items.into_iter().map(|(_, item)| item).collect()
}
