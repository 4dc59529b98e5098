//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes player commands, runs
//! the per-tick systems, and produces `MatchSnapshot`s. Completely
//! headless (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bombard_core::commands::PlayerCommand;
use bombard_core::components::{Projectile, Tank};
use bombard_core::constants::{MUZZLE_VELOCITY_SCALE, TANK_WIDTH, WIND_MAX_INTENSITY};
use bombard_core::enums::{MatchPhase, PlayerId, WindDirection};
use bombard_core::events::MatchEvent;
use bombard_core::state::MatchSnapshot;
use bombard_core::types::{Position, SimTime, Velocity, Wind};

use crate::systems;
use crate::systems::ballistics::ShotOutcome;
use crate::world_setup;

/// Configuration for a new engine.
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed = same obstacle layout and
    /// wind rolls.
    pub seed: u64,
    /// Initial time scale for host loops (1.0 = normal). Pacing only;
    /// the simulation itself is tick-based.
    pub time_scale: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The match engine. Owns the ECS world and all turn state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    active_player: PlayerId,
    wind: Wind,
    winner: Option<PlayerId>,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create a new match engine with the given config. The world stays
    /// empty until a `NewMatch` command arrives.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            active_player: PlayerId::default(),
            wind: Wind::default(),
            winner: None,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.active_player,
            self.winner,
            &self.wind,
            events,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get the player whose turn it currently is.
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Get the current wind.
    pub fn wind(&self) -> Wind {
        self.wind
    }

    /// Get the winner, once a tank's health has reached zero.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Overwrite the wind (for ballistics tests).
    #[cfg(test)]
    pub fn set_wind(&mut self, wind: Wind) {
        self.wind = wind;
    }

    /// Set a tank's health directly (for lethal-hit tests).
    #[cfg(test)]
    pub fn set_tank_health(&mut self, player: PlayerId, health: i32) {
        for (_entity, tank) in self.world.query_mut::<&mut Tank>() {
            if tank.player == player {
                tank.health = health;
            }
        }
    }

    /// Remove every obstacle (for trajectory tests needing a clear field).
    #[cfg(test)]
    pub fn clear_obstacles(&mut self) {
        use bombard_core::components::Obstacle;

        self.despawn_buffer.clear();
        for (entity, _obstacle) in self.world.query_mut::<&Obstacle>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an obstacle with known bounds (for collision tests).
    #[cfg(test)]
    pub fn spawn_test_obstacle(&mut self, bounds: bombard_core::types::Rect) {
        use bombard_core::components::Obstacle;

        self.world.spawn((Obstacle { bounds },));
    }

    /// Place a projectile directly (for collision tests that need exact
    /// impact geometry).
    #[cfg(test)]
    pub fn launch_test_projectile(&mut self, position: Position, velocity: Velocity) {
        self.world.spawn((Projectile, position, velocity));
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::NewMatch => {
                if matches!(self.phase, MatchPhase::Idle | MatchPhase::Finished) {
                    self.world.clear();
                    world_setup::setup_match(&mut self.world, &mut self.rng);
                    self.active_player = PlayerId::One;
                    self.wind = Wind::default();
                    self.winner = None;
                    self.time = SimTime::default();
                    self.phase = MatchPhase::Active;
                }
            }
            PlayerCommand::AdjustAim { delta } => {
                if self.phase == MatchPhase::Active {
                    for (_entity, tank) in self.world.query_mut::<&mut Tank>() {
                        if tank.player == self.active_player {
                            tank.angle += delta;
                        }
                    }
                }
            }
            PlayerCommand::AdjustPower { delta } => {
                if self.phase == MatchPhase::Active {
                    for (_entity, tank) in self.world.query_mut::<&mut Tank>() {
                        if tank.player == self.active_player {
                            tank.power += delta;
                        }
                    }
                }
            }
            PlayerCommand::Fire => {
                if self.phase == MatchPhase::Active && !self.projectile_in_flight() {
                    self.fire();
                }
            }
        }
    }

    /// Whether a projectile entity currently exists.
    fn projectile_in_flight(&self) -> bool {
        let mut query = self.world.query::<&Projectile>();
        query.iter().next().is_some()
    }

    /// Spawn a projectile from the active tank's muzzle with velocity
    /// derived from its angle and power.
    fn fire(&mut self) {
        let mut launch = None;
        for (_entity, (tank, pos)) in self.world.query_mut::<(&Tank, &Position)>() {
            if tank.player != self.active_player {
                continue;
            }
            let angle_rad = tank.angle.to_radians();
            let muzzle = Position::new(pos.x + TANK_WIDTH / 2.0, pos.y);
            let velocity = Velocity::new(
                tank.power * angle_rad.cos() * MUZZLE_VELOCITY_SCALE,
                -tank.power * angle_rad.sin() * MUZZLE_VELOCITY_SCALE,
            );
            launch = Some((muzzle, velocity));
        }

        if let Some((position, velocity)) = launch {
            self.world.spawn((Projectile, position, velocity));
            self.events.push(MatchEvent::ShotFired {
                player: self.active_player,
            });
        }
    }

    /// Run the per-tick systems in order.
    fn run_systems(&mut self) {
        // 1. Clamp aim inputs before physics observes them.
        systems::controls::run(&mut self.world, self.active_player);

        // 2. Ballistics integration + ordered collision checks.
        let outcome = systems::ballistics::run(
            &mut self.world,
            &self.wind,
            self.active_player,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 3. Turn resolution or match end.
        match outcome {
            ShotOutcome::InFlight => {}
            ShotOutcome::Resolved => self.resolve_turn(),
            ShotOutcome::Lethal { winner } => {
                self.phase = MatchPhase::Finished;
                self.winner = Some(winner);
                self.events.push(MatchEvent::MatchOver { winner });
            }
        }
    }

    /// Swap active/target players and reroll the wind.
    fn resolve_turn(&mut self) {
        self.active_player = self.active_player.opponent();
        self.wind = Wind {
            direction: if self.rng.gen_bool(0.5) {
                WindDirection::Right
            } else {
                WindDirection::Left
            },
            intensity: self.rng.gen_range(0.0..WIND_MAX_INTENSITY),
        };
        self.events.push(MatchEvent::TurnChanged {
            player: self.active_player,
            wind_direction: self.wind.direction,
            wind_intensity: self.wind.intensity,
        });
    }
}
