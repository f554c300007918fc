//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the persistent game state,
//! processes player commands, runs all systems, sequences the scenes of a
//! playthrough, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skyshield_campaign::briefings;
use skyshield_campaign::economy;
use skyshield_campaign::upgrades::{self, Modifiers, PurchaseError};
use skyshield_core::commands::PlayerCommand;
use skyshield_core::components::{Aircraft, EnemyMissile};
use skyshield_core::constants::*;
use skyshield_core::enums::{AircraftKind, ExplosionSource, Scene};
use skyshield_core::events::{Alert, SimEvent};
use skyshield_core::state::{Cutscene, GameStateSnapshot, WaveSummary};
use skyshield_core::types::{Position, SimTime};

use crate::resources::{GameState, WaveStats};
use crate::scheduler::{ScheduledEvent, Scheduler};
use crate::systems;
use crate::systems::player_missiles::SecondaryBlasts;
use crate::systems::snapshot::Presentation;
use crate::systems::spawning::ActiveWave;
use crate::wave_plan;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Deploying any wave after this one wins the campaign.
    pub victory_wave: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            victory_wave: VICTORY_WAVE,
        }
    }
}

/// Why a command was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandRejection {
    #[error("{command} is not accepted during {scene:?}")]
    WrongScene { command: &'static str, scene: Scene },
    #[error("no base is able to fire")]
    NoBaseAvailable,
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
    #[error("insufficient credits: have {have}, need {need}")]
    InsufficientCredits { have: u32, need: u32 },
    #[error("nothing to rebuild")]
    NothingToRebuild,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    scene: Scene,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    rejections: Vec<CommandRejection>,

    state: GameState,
    wave: ActiveWave,
    scheduler: Scheduler,
    next_explosion_id: u32,

    alerts: Vec<Alert>,
    shake: u32,
    wave_summary: Option<WaveSummary>,
    cutscene: Option<Cutscene>,
}

impl SimulationEngine {
    /// Create a new simulation engine on the title screen.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            scene: Scene::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            rejections: Vec::new(),
            state: GameState::new(),
            wave: ActiveWave::default(),
            scheduler: Scheduler::new(),
            next_explosion_id: 0,
            alerts: Vec::new(),
            shake: 0,
            wave_summary: None,
            cutscene: None,
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

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.rejections.clear();
        systems::alerts::decay(&mut self.alerts);
        self.shake = self.shake.saturating_sub(1);

        self.process_commands();
        self.run_scheduled();

        match self.scene {
            Scene::Playing => self.run_systems(),
            Scene::WaveEnd | Scene::Cutscene | Scene::Upgrade => self.run_logistics(),
            _ => {}
        }

        systems::alerts::raise(&self.events, &mut self.alerts, self.time.tick);
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.scene,
            &self.state,
            events,
            Presentation {
                alerts: &self.alerts,
                shake: self.shake,
                wave_summary: self.wave_summary.as_ref(),
                cutscene: self.cutscene.as_ref(),
            },
        )
    }

    /// Get the current scene.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Persistent state of the playthrough.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Commands rejected during the most recent tick.
    pub fn last_rejections(&self) -> &[CommandRejection] {
        &self.rejections
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn active_wave_mut(&mut self) -> &mut ActiveWave {
        &mut self.wave
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Jump straight to a scene without its entry actions (for tests).
    #[cfg(test)]
    pub fn force_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    /// Spawn an enemy warhead directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: skyshield_core::enums::EnemyKind,
        origin: Position,
        target: Position,
    ) -> Entity {
        let speed = self.wave.speed.max(1.0);
        world_setup::spawn_enemy_missile(&mut self.world, &mut self.rng, kind, origin, target, speed)
    }

    /// Process all queued commands. Rejected commands are logged and recorded.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(rejection) = self.handle_command(command.clone()) {
                log::debug!("ignored {:?}: {}", command, rejection);
                self.rejections.push(rejection);
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandRejection> {
        match command {
            PlayerCommand::Fire { x, y } => {
                self.require_scene(Scene::Playing, "fire")?;
                let index = self
                    .state
                    .select_fire_base(x)
                    .ok_or(CommandRejection::NoBaseAvailable)?;
                let origin = self
                    .state
                    .draw_round(index)
                    .ok_or(CommandRejection::NoBaseAvailable)?;
                let modifiers = self.state.modifiers();
                world_setup::spawn_player_missile(
                    &mut self.world,
                    origin,
                    Position::new(x, y),
                    modifiers.missile_speed,
                    modifiers.blast_radius,
                    index,
                );
                self.events.push(SimEvent::MissileLaunched {
                    base_index: index,
                    automatic: false,
                });
            }
            PlayerCommand::Advance => self.advance()?,
            PlayerCommand::ShowHowTo => {
                self.require_scene(Scene::Title, "show how-to")?;
                self.set_scene(Scene::HowTo);
            }
            PlayerCommand::PurchaseUpgrade { key } => {
                self.require_scene(Scene::Upgrade, "purchase")?;
                upgrades::purchase(&mut self.state.upgrades, &mut self.state.credits, key)?;
                self.state.apply_upgrade_effect(key);
            }
            PlayerCommand::RebuildCity => {
                self.require_scene(Scene::Upgrade, "rebuild city")?;
                self.require_credits(CITY_REBUILD_COST)?;
                let index = self
                    .state
                    .rebuildable_city()
                    .ok_or(CommandRejection::NothingToRebuild)?;
                self.state.credits -= CITY_REBUILD_COST;
                self.state.rebuild_city(index);
                log::debug!("rebuilt city {}", index);
            }
            PlayerCommand::RebuildBase => {
                self.require_scene(Scene::Upgrade, "rebuild base")?;
                self.require_credits(BASE_REBUILD_COST)?;
                let index = self
                    .state
                    .rebuildable_base()
                    .ok_or(CommandRejection::NothingToRebuild)?;
                self.state.credits -= BASE_REBUILD_COST;
                self.state.rebuild_base(index);
                log::debug!("rebuilt base {}", index);
            }
            PlayerCommand::DeployNextWave => {
                self.require_scene(Scene::Upgrade, "deploy")?;
                self.deploy_next_wave();
            }
        }
        Ok(())
    }

    fn require_scene(&self, scene: Scene, command: &'static str) -> Result<(), CommandRejection> {
        if self.scene == scene {
            Ok(())
        } else {
            Err(CommandRejection::WrongScene {
                command,
                scene: self.scene,
            })
        }
    }

    fn require_credits(&self, need: u32) -> Result<(), CommandRejection> {
        if self.state.credits >= need {
            Ok(())
        } else {
            Err(CommandRejection::InsufficientCredits {
                have: self.state.credits,
                need,
            })
        }
    }

    /// The generic "continue" action of every non-playing scene.
    fn advance(&mut self) -> Result<(), CommandRejection> {
        match self.scene {
            Scene::Title => {
                self.set_scene(Scene::Story);
                self.scheduler.schedule(
                    self.time.tick + STORY_CRAWL_TICKS + STORY_EXIT_DELAY_TICKS,
                    None,
                    ScheduledEvent::StoryEnd,
                );
            }
            Scene::HowTo => self.set_scene(Scene::Title),
            Scene::Story => self.begin_campaign(),
            Scene::WaveEnd => match briefings::briefing_after(self.state.wave) {
                Some(cutscene) => {
                    self.cutscene = Some(cutscene);
                    self.set_scene(Scene::Cutscene);
                }
                None => self.set_scene(Scene::Upgrade),
            },
            Scene::Cutscene => {
                self.cutscene = None;
                self.set_scene(Scene::Upgrade);
            }
            Scene::GameOver | Scene::Victory => self.restart(),
            Scene::Playing | Scene::Upgrade => {
                return Err(CommandRejection::WrongScene {
                    command: "advance",
                    scene: self.scene,
                });
            }
        }
        Ok(())
    }

    fn set_scene(&mut self, to: Scene) {
        if self.scene == to {
            return;
        }
        log::info!("scene {:?} -> {:?}", self.scene, to);
        self.events.push(SimEvent::SceneChanged {
            from: self.scene,
            to,
        });
        self.scene = to;
    }

    /// Leave the story and start wave 1.
    fn begin_campaign(&mut self) {
        self.set_scene(Scene::Playing);
        self.start_wave();
    }

    fn deploy_next_wave(&mut self) {
        self.state.wave += 1;
        let starting_ammo = self.state.modifiers().starting_ammo;
        self.state.reset_ammo(starting_ammo);
        self.cutscene = None;
        self.set_scene(Scene::Playing);
        self.start_wave();

        if self.state.wave > self.config.victory_wave {
            log::info!("final wave {} deployed, victory pending", self.state.wave);
            self.scheduler.schedule(
                self.time.tick + VICTORY_DELAY_TICKS,
                None,
                ScheduledEvent::Victory,
            );
        }
    }

    /// Clear the field and queue up the current wave.
    fn start_wave(&mut self) {
        self.world.clear();
        self.alerts.clear();
        self.state.stats = WaveStats::default();

        let mut plan = wave_plan::generate(
            self.state.wave,
            &self.state.alive_city_xs(),
            &self.state.alive_base_xs(),
            &mut self.rng,
        );
        let aircraft = std::mem::take(&mut plan.aircraft);
        let drones = plan.drones.take();
        log::info!(
            "wave {} started: {} missiles, {} aircraft, speed x{:.2}",
            plan.wave,
            plan.missiles.len(),
            aircraft.len() + drones.as_ref().map_or(0, |d| d.count as usize),
            plan.speed
        );
        self.wave.start(plan);

        let now = self.time.tick;
        let epoch = Some(self.wave.epoch);
        for spawn in aircraft {
            self.scheduler.schedule(
                now + spawn.offset_ticks,
                epoch,
                ScheduledEvent::AircraftArrival { kind: spawn.kind },
            );
        }
        if let Some(squadron) = drones {
            self.scheduler.schedule(
                now + squadron.offset_ticks,
                epoch,
                ScheduledEvent::DroneSquadron {
                    count: squadron.count,
                },
            );
        }
    }

    /// Back to the title screen with a fresh playthrough.
    fn restart(&mut self) {
        self.world.clear();
        self.state = GameState::new();
        self.wave.active = false;
        self.wave.queue.clear();
        self.scheduler.clear();
        self.alerts.clear();
        self.shake = 0;
        self.wave_summary = None;
        self.cutscene = None;
        self.set_scene(Scene::Title);
    }

    /// Whether entities are stepped in the current scene.
    fn world_is_live(&self) -> bool {
        matches!(
            self.scene,
            Scene::Playing | Scene::WaveEnd | Scene::Cutscene | Scene::Upgrade
        )
    }

    /// Fire every deferred event that has come due.
    fn run_scheduled(&mut self) {
        while let Some(due) = self.scheduler.pop_due(self.time.tick) {
            if due.epoch.is_some_and(|epoch| epoch != self.wave.epoch) {
                continue;
            }
            match due.event {
                ScheduledEvent::AircraftArrival { kind } => {
                    if self.scene == Scene::Playing && self.wave.active {
                        world_setup::spawn_aircraft(
                            &mut self.world,
                            &mut self.rng,
                            kind,
                            self.wave.speed,
                            0.0,
                        );
                    }
                }
                ScheduledEvent::DroneSquadron { count } => {
                    if self.scene == Scene::Playing && self.wave.active {
                        for d in 0..count {
                            let y_offset = d as f32 * DRONE_ROW_SPACING - DRONE_ROW_OFFSET;
                            world_setup::spawn_aircraft(
                                &mut self.world,
                                &mut self.rng,
                                AircraftKind::Drone,
                                self.wave.speed,
                                y_offset,
                            );
                        }
                    }
                }
                ScheduledEvent::SecondaryBlast { center, radius } => {
                    if self.world_is_live() {
                        world_setup::spawn_explosion(
                            &mut self.world,
                            &mut self.rng,
                            &mut self.next_explosion_id,
                            center,
                            radius,
                            ExplosionSource::Player,
                        );
                        self.events.push(SimEvent::Detonation {
                            position: center,
                            radius,
                        });
                    }
                }
                ScheduledEvent::Victory => {
                    if self.scene != Scene::GameOver {
                        self.wave.active = false;
                        self.set_scene(Scene::Victory);
                    }
                }
                ScheduledEvent::StoryEnd => {
                    if self.scene == Scene::Story {
                        self.begin_campaign();
                    }
                }
            }
        }
    }

    /// Run all systems in order for one tick of play.
    fn run_systems(&mut self) {
        let modifiers = self.state.modifiers();

        // 1. Spawn queue
        systems::spawning::run(&mut self.world, &mut self.rng, &mut self.wave);
        // 2. Auto-turrets
        systems::auto_turret::run(&mut self.world, &mut self.state, &mut self.events);
        // 3. Trails, movement, flicker, interceptor detonations
        self.step_motion(&modifiers);
        // 4. Enemy arrivals and MIRV splits
        systems::enemy_missiles::check_arrivals(&mut self.world);
        systems::enemy_missiles::split_mirvs(
            &mut self.world,
            &mut self.rng,
            self.wave.speed,
            &mut self.events,
        );
        // 5. Ground impacts become hostile explosions
        systems::collision::ground_impacts(
            &mut self.world,
            &mut self.rng,
            &mut self.next_explosion_id,
            &mut self.shake,
            &mut self.events,
        );
        // 6. Warhead damage to cities and bases
        systems::explosions::apply_warhead_damage(
            &mut self.world,
            &mut self.state,
            modifiers.emp_lockout_ticks,
            &mut self.events,
        );
        // 7. Player blasts vs enemy missiles and aircraft
        systems::collision::intercepts(
            &mut self.world,
            &mut self.rng,
            &mut self.state,
            modifiers.chain_radius,
            &mut self.next_explosion_id,
            &mut self.events,
        );
        // 8. Aircraft drops and exits
        systems::aircraft::run(&mut self.world, &mut self.rng, self.wave.speed);
        // 9. EMP lockouts
        self.state.tick_lockouts();
        // 10. Ammo drops, trucks, explosion phases, cosmetics, cleanup
        self.step_logistics(&modifiers);
        // 11. Wave outcome
        self.evaluate_wave();
    }

    /// Between waves only the leftovers and the supply run keep moving.
    fn run_logistics(&mut self) {
        let modifiers = self.state.modifiers();
        self.step_motion(&modifiers);
        self.step_logistics(&modifiers);
    }

    fn step_motion(&mut self, modifiers: &Modifiers) {
        systems::cosmetics::emit_trails(&mut self.world);
        systems::movement::run(&mut self.world);
        systems::movement::update_flicker(&mut self.world);

        let secondary = if modifiers.dual_warhead {
            Some(SecondaryBlasts {
                scheduler: &mut self.scheduler,
                now: self.time.tick,
                epoch: self.wave.epoch,
            })
        } else {
            None
        };
        systems::player_missiles::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_explosion_id,
            secondary,
            &mut self.events,
        );
    }

    fn step_logistics(&mut self, modifiers: &Modifiers) {
        systems::ammo_drops::run(&mut self.world, &mut self.state, &mut self.events);
        systems::trucks::run(
            &mut self.world,
            &mut self.rng,
            &mut self.state,
            modifiers.truck_payload,
            &mut self.next_explosion_id,
            &mut self.events,
        );
        systems::explosions::run(&mut self.world);
        systems::cosmetics::run(&mut self.world);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Check for defeat, then for a cleared wave.
    fn evaluate_wave(&mut self) {
        if self.state.all_cities_lost() {
            self.wave.active = false;
            log::info!("all cities lost on wave {}", self.state.wave);
            self.set_scene(Scene::GameOver);
            return;
        }
        // Aircraft still on the scheduler don't hold the wave open; once the
        // wave settles their arrivals are dropped.
        if !self.wave.active || !self.wave.queue_empty() || self.hostiles_in_flight() > 0 {
            return;
        }
        self.settle_wave();
    }

    fn hostiles_in_flight(&self) -> usize {
        self.world.query::<&EnemyMissile>().iter().count()
            + self.world.query::<&Aircraft>().iter().count()
    }

    /// Pay out the cleared wave and send the supply truck.
    fn settle_wave(&mut self) {
        self.wave.active = false;
        let ammo_remaining = self.state.ammo_remaining();
        let cities_saved = self.state.cities_alive();
        let enemies_destroyed = self.state.stats.enemies_destroyed;
        let payout = economy::settle_wave(ammo_remaining, cities_saved, enemies_destroyed);
        self.state.score += payout.bonus_score as u64;
        self.state.credits += payout.credits;

        log::info!(
            "wave {} cleared: {} kills, {} cities, {} ammo, +{} score, +{} credits",
            self.state.wave,
            enemies_destroyed,
            cities_saved,
            ammo_remaining,
            payout.bonus_score,
            payout.credits
        );
        self.wave_summary = Some(WaveSummary {
            wave: self.state.wave,
            enemies_destroyed,
            cities_saved,
            ammo_remaining,
            bonus_score: payout.bonus_score,
            credits_earned: payout.credits,
        });
        world_setup::spawn_truck(&mut self.world, &self.state.modifiers());
        self.set_scene(Scene::WaveEnd);
    }
}
