//! Spawn queue system: releases queued enemy missiles as the wave clock advances.

use std::collections::VecDeque;

use hecs::World;
use rand::Rng;

use skyshield_core::constants::ENEMY_SPAWN_Y;
use skyshield_core::types::Position;

use crate::wave_plan::{MissileSpawn, SpawnPlan};
use crate::world_setup;

/// Runtime state of the wave in progress.
#[derive(Debug, Clone, Default)]
pub struct ActiveWave {
    /// Bumped on every wave start; deferred wave events from older epochs are stale.
    pub epoch: u32,
    pub number: u32,
    pub speed: f32,
    pub queue: VecDeque<MissileSpawn>,
    /// Ticks since the wave started.
    pub elapsed: u32,
    /// Cleared when the wave settles or the game is lost.
    pub active: bool,
}

impl ActiveWave {
    /// Begin a new wave from its plan.
    pub fn start(&mut self, plan: SpawnPlan) {
        self.epoch = self.epoch.wrapping_add(1);
        self.number = plan.wave;
        self.speed = plan.speed;
        self.queue = plan.missiles.into();
        self.elapsed = 0;
        self.active = true;
    }

    pub fn queue_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Advance the wave clock and launch every missile whose delay has elapsed.
/// Returns how many were launched.
pub fn run(world: &mut World, rng: &mut impl Rng, wave: &mut ActiveWave) -> usize {
    wave.elapsed += 1;
    let mut launched = 0;
    while wave
        .queue
        .front()
        .is_some_and(|next| next.delay <= wave.elapsed)
    {
        let Some(spawn) = wave.queue.pop_front() else {
            break;
        };
        world_setup::spawn_enemy_missile(
            world,
            rng,
            spawn.kind,
            Position::new(spawn.launch_x, ENEMY_SPAWN_Y),
            spawn.target,
            wave.speed,
        );
        launched += 1;
    }
    launched
}
