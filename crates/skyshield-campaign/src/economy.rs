use serde::{Deserialize, Serialize};

use skyshield_core::constants::*;
use skyshield_core::enums::{AircraftKind, EnemyKind};

/// Score and research credits for one kill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub score: u32,
    pub credits: u32,
}

pub fn missile_reward(kind: EnemyKind) -> Reward {
    let score = match kind {
        EnemyKind::Nuke => SCORE_NUKE,
        EnemyKind::Mirv => SCORE_MIRV,
        EnemyKind::Fast => SCORE_FAST,
        EnemyKind::Icbm | EnemyKind::Decoy | EnemyKind::Emp => SCORE_MISSILE,
    };
    let credits = match kind {
        EnemyKind::Nuke => CREDITS_NUKE,
        _ => CREDITS_MISSILE,
    };
    Reward { score, credits }
}

pub fn aircraft_reward(kind: AircraftKind) -> Reward {
    let score = match kind {
        AircraftKind::Stealth => SCORE_STEALTH,
        AircraftKind::Cargo => SCORE_CARGO,
        AircraftKind::Drone => SCORE_DRONE,
        AircraftKind::Bomber => SCORE_BOMBER,
    };
    Reward {
        score,
        credits: CREDITS_AIRCRAFT,
    }
}

/// End-of-wave payout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSettlement {
    pub bonus_score: u32,
    pub credits: u32,
}

/// Calculate the bonus for a cleared wave.
/// `ammo_remaining` counts alive bases only; `cities_alive` includes decoys.
pub fn settle_wave(ammo_remaining: u32, cities_alive: u32, enemies_destroyed: u32) -> WaveSettlement {
    WaveSettlement {
        bonus_score: ammo_remaining * BONUS_PER_AMMO + cities_alive * BONUS_PER_CITY,
        credits: cities_alive * CREDITS_PER_CITY + enemies_destroyed * CREDITS_PER_KILL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_from_full_defense() {
        // 3 bases x 10 ammo, 6 cities, 8 kills
        let s = settle_wave(30, 6, 8);
        assert_eq!(s.bonus_score, 30 * 50 + 6 * 200);
        assert_eq!(s.credits, 6 * 25 + 8 * 5);
    }

    #[test]
    fn settlement_zero_when_nothing_left() {
        assert_eq!(settle_wave(0, 0, 0), WaveSettlement::default());
    }

    #[test]
    fn missile_rewards_by_kind() {
        assert_eq!(missile_reward(EnemyKind::Nuke), Reward { score: 500, credits: 50 });
        assert_eq!(missile_reward(EnemyKind::Mirv), Reward { score: 200, credits: 10 });
        assert_eq!(missile_reward(EnemyKind::Fast).score, 150);
        assert_eq!(missile_reward(EnemyKind::Decoy).score, 100);
    }

    #[test]
    fn aircraft_rewards_by_kind() {
        assert_eq!(aircraft_reward(AircraftKind::Stealth).score, 250);
        assert_eq!(aircraft_reward(AircraftKind::Cargo).score, 50);
        assert_eq!(aircraft_reward(AircraftKind::Drone).score, 75);
        assert_eq!(aircraft_reward(AircraftKind::Bomber), Reward { score: 100, credits: 15 });
    }
}
