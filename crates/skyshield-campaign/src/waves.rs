//! Wave composition table.

use serde::{Deserialize, Serialize};

use skyshield_core::enums::EnemyKind;

/// Highest wave speed multiplier reached by extrapolation.
pub const MAX_WAVE_SPEED: f32 = 2.5;
/// Speed gained per wave beyond the table.
pub const SPEED_PER_EXTRA_WAVE: f32 = 0.1;

/// Enemy counts and speed for one wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub icbm: u32,
    pub mirv: u32,
    pub fast: u32,
    pub decoy: u32,
    pub emp: u32,
    pub nuke: u32,
    pub bombers: u32,
    pub stealth: u32,
    pub cargo: u32,
    /// Drone squadrons; each squadron unit is four drones.
    pub drones: u32,
    /// Multiplier on every enemy missile's base speed.
    pub speed: f32,
}

impl WaveConfig {
    const fn row(counts: [u32; 10], speed: f32) -> Self {
        Self {
            icbm: counts[0],
            mirv: counts[1],
            fast: counts[2],
            decoy: counts[3],
            emp: counts[4],
            nuke: counts[5],
            bombers: counts[6],
            stealth: counts[7],
            cargo: counts[8],
            drones: counts[9],
            speed,
        }
    }

    pub fn missile_count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Icbm => self.icbm,
            EnemyKind::Mirv => self.mirv,
            EnemyKind::Fast => self.fast,
            EnemyKind::Decoy => self.decoy,
            EnemyKind::Emp => self.emp,
            EnemyKind::Nuke => self.nuke,
        }
    }

    /// Missiles launched from the spawn queue (MIRV children not included).
    pub fn total_missiles(&self) -> u32 {
        EnemyKind::ALL.iter().map(|&k| self.missile_count(k)).sum()
    }
}

//                         icbm mirv fast decoy emp nuke bmb stl cargo drn
const WAVE_TABLE: [WaveConfig; 12] = [
    WaveConfig::row([8, 0, 0, 0, 0, 0, 0, 0, 0, 0], 0.6),
    WaveConfig::row([10, 0, 0, 0, 0, 0, 1, 0, 0, 0], 0.7),
    WaveConfig::row([10, 2, 0, 0, 0, 0, 1, 0, 0, 0], 0.8),
    WaveConfig::row([12, 2, 0, 0, 0, 0, 1, 0, 1, 0], 0.85),
    WaveConfig::row([10, 2, 4, 0, 0, 0, 1, 0, 1, 0], 0.95),
    WaveConfig::row([12, 3, 4, 0, 0, 0, 2, 1, 1, 0], 1.0),
    WaveConfig::row([12, 3, 4, 3, 0, 0, 2, 1, 1, 0], 1.1),
    WaveConfig::row([14, 4, 5, 3, 0, 0, 2, 2, 1, 0], 1.15),
    WaveConfig::row([14, 4, 5, 3, 2, 0, 2, 2, 1, 1], 1.2),
    WaveConfig::row([15, 5, 6, 4, 2, 0, 3, 2, 1, 1], 1.3),
    WaveConfig::row([16, 5, 6, 4, 3, 0, 3, 3, 1, 2], 1.35),
    WaveConfig::row([16, 6, 7, 4, 3, 2, 3, 3, 1, 2], 1.4),
];

/// Number of tabulated waves.
pub const TABLE_WAVES: u32 = WAVE_TABLE.len() as u32;

/// Resolve the configuration for a 1-based wave number.
///
/// Wave 0 is treated as wave 1. Waves past the table reuse the last row and
/// add `2e` ICBMs, `e` MIRVs, `e` fast and `e` nukes for an overshoot of `e`,
/// with speed rising by 0.1 per wave up to the cap.
pub fn wave_config(wave: u32) -> WaveConfig {
    let index = wave.clamp(1, TABLE_WAVES) as usize - 1;
    let mut config = WAVE_TABLE[index];
    if wave > TABLE_WAVES {
        let extra = wave - TABLE_WAVES;
        config.icbm += extra * 2;
        config.mirv += extra;
        config.fast += extra;
        config.nuke += extra;
        config.speed = (config.speed + SPEED_PER_EXTRA_WAVE * extra as f32).min(MAX_WAVE_SPEED);
    }
    config
}
