//! Wave plan generation: turns a wave's configuration and the surviving
//! assets into a spawn queue and an aircraft schedule.

use rand::Rng;
use serde::Serialize;

use skyshield_campaign::waves::{wave_config, WaveConfig};
use skyshield_core::constants::*;
use skyshield_core::enums::{AircraftKind, EnemyKind};
use skyshield_core::types::Position;

/// One queued enemy missile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissileSpawn {
    pub kind: EnemyKind,
    pub launch_x: f32,
    pub target: Position,
    /// Wave-elapsed ticks before launch.
    pub delay: u32,
}

/// One aircraft arrival, relative to the start of the wave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftSpawn {
    pub kind: AircraftKind,
    pub offset_ticks: u64,
}

/// Drones arrive together as one stacked squadron.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneSquadron {
    pub count: u32,
    pub offset_ticks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpawnPlan {
    pub wave: u32,
    /// Multiplier on every enemy missile's base speed.
    pub speed: f32,
    /// Sorted by delay, ascending.
    pub missiles: Vec<MissileSpawn>,
    pub aircraft: Vec<AircraftSpawn>,
    pub drones: Option<DroneSquadron>,
}

/// Build the spawn plan for `wave`.
///
/// `city_xs` and `base_xs` are the x positions of the assets still alive;
/// each missile picks its target uniformly from them. With nothing left to
/// aim at, missiles fall on random points of the ground line.
pub fn generate(wave: u32, city_xs: &[f32], base_xs: &[f32], rng: &mut impl Rng) -> SpawnPlan {
    let config = wave_config(wave);

    let pool: Vec<Position> = city_xs
        .iter()
        .map(|&x| Position::new(x, CITY_TARGET_Y))
        .chain(base_xs.iter().map(|&x| Position::new(x, BASE_Y)))
        .collect();

    let mut drafts: Vec<(EnemyKind, Position, u32)> = Vec::with_capacity(config.total_missiles() as usize);
    for kind in EnemyKind::ALL {
        for _ in 0..config.missile_count(kind) {
            let target = if pool.is_empty() {
                Position::new(rng.gen_range(0.0..WORLD_WIDTH), GROUND_Y)
            } else {
                pool[rng.gen_range(0..pool.len())]
            };
            let delay = SPAWN_DELAY_MIN + rng.gen_range(0..SPAWN_DELAY_SPAN);
            drafts.push((kind, target, delay));
        }
    }
    // Stable: equal delays keep generation order.
    drafts.sort_by_key(|&(_, _, delay)| delay);

    let missiles = drafts
        .into_iter()
        .map(|(kind, target, delay)| MissileSpawn {
            kind,
            launch_x: rng.gen_range(ENEMY_LAUNCH_MARGIN..WORLD_WIDTH - ENEMY_LAUNCH_MARGIN),
            target,
            delay,
        })
        .collect();

    SpawnPlan {
        wave,
        speed: config.speed,
        missiles,
        aircraft: aircraft_schedule(&config),
        drones: (config.drones > 0).then(|| DroneSquadron {
            count: config.drones * DRONES_PER_UNIT,
            offset_ticks: DRONE_SQUADRON_TICK,
        }),
    }
}

fn aircraft_schedule(config: &WaveConfig) -> Vec<AircraftSpawn> {
    let waves = [
        (AircraftKind::Bomber, config.bombers, BOMBER_FIRST_TICK, BOMBER_INTERVAL_TICKS),
        (AircraftKind::Stealth, config.stealth, STEALTH_FIRST_TICK, STEALTH_INTERVAL_TICKS),
        (AircraftKind::Cargo, config.cargo, CARGO_FIRST_TICK, CARGO_INTERVAL_TICKS),
    ];
    let mut schedule = Vec::new();
    for (kind, count, first, interval) in waves {
        for i in 0..count as u64 {
            schedule.push(AircraftSpawn {
                kind,
                offset_ticks: first + interval * i,
            });
        }
    }
    schedule
}
