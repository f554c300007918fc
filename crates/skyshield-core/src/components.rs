//! ECS components for hecs entities, plus the plain-data defended assets.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Removal and detonation flags shared by every entity.
///
/// `dead` makes the entity eligible for removal at the end of the tick.
/// `exploded` means it reached its aim point and detonated there; an
/// intercepted missile is dead but not exploded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub dead: bool,
    pub exploded: bool,
}

/// Player interceptor in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMissile {
    /// Detonation point.
    pub target: Position,
    /// Blast radius fixed at launch from the upgrade level.
    pub blast_radius: f32,
    /// Index of the base that launched it.
    pub base_index: usize,
}

/// Enemy warhead in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyMissile {
    pub kind: EnemyKind,
    /// Aim point on the ground line.
    pub target: Position,
    pub blast_radius: f32,
}

/// Split state carried only by MIRV warheads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MirvWarhead {
    /// Screen y at which the warhead splits.
    pub split_altitude: f32,
    pub split: bool,
}

/// Visibility duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlickerCadence {
    /// Visible for `period` ticks, hidden for `period` ticks.
    Alternating { period: u32 },
    /// Hidden one `period` out of every three.
    MostlyVisible { period: u32 },
}

/// Visibility flicker for decoys and stealth aircraft. Never affects collision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flicker {
    pub cadence: FlickerCadence,
    pub timer: u32,
    pub visible: bool,
}

/// Enemy aircraft. Loses one hit point per tick spent inside a player blast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft {
    pub kind: AircraftKind,
    pub hp: u32,
    /// Ticks until the next bomb drop.
    pub drop_timer: f32,
}

/// Ammo crate released by a downed cargo plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmmoDrop {
    pub life: u32,
}

/// Post-wave supply truck.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyTruck {
    pub hp: u32,
    /// Base indices already resupplied by this truck.
    pub served_bases: Vec<usize>,
    /// Hostile explosions that already hit this truck.
    pub hit_by: Vec<u32>,
}

/// Area-effect blast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    /// Stable id used to make each blast hit a target at most once.
    pub id: u32,
    pub radius: f32,
    pub max_radius: f32,
    pub phase: ExplosionPhase,
    pub hold_remaining: u32,
    pub source: ExplosionSource,
    /// Warhead ground damage is resolved once per explosion.
    pub damage_applied: bool,
}

/// Cosmetic fading trail dot left behind missiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Trail {
    pub life: u32,
    pub hostile: bool,
}

/// Cosmetic explosion debris.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

/// Missile base. Not an ECS entity: bases live in a fixed array for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub x: f32,
    pub ammo: u32,
    pub alive: bool,
    /// EMP lockout; a disabled base cannot fire.
    pub disabled: bool,
    pub disable_timer: u32,
    /// Armor upgrade fitted.
    pub has_armor: bool,
    /// Armor already absorbed its hit.
    pub armor_spent: bool,
    pub auto_turret: bool,
    pub auto_turret_timer: u32,
}

/// Defended city. Not an ECS entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f32,
    pub alive: bool,
    pub shielded: bool,
    /// Holographic stand-in: dies in one hit, raises no alert.
    pub is_decoy: bool,
}

/// Purchased upgrade levels. Booleans are owned/not-owned; integers are levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub blast_radius: u32,
    pub missile_speed: u32,
    pub chain_reaction: bool,
    pub dual_warhead: bool,
    pub auto_turret: bool,
    pub city_shield: u32,
    pub base_armor: bool,
    pub emp_hardening: bool,
    pub decoy_city: bool,
    pub extra_ammo: u32,
    pub truck_armor: bool,
    pub fast_trucks: bool,
    pub truck_capacity: u32,
}

impl UpgradeLevels {
    /// Current level for any key; owned booleans read as 1.
    pub fn level_for(&self, key: UpgradeKey) -> u32 {
        match key {
            UpgradeKey::BlastRadius => self.blast_radius,
            UpgradeKey::MissileSpeed => self.missile_speed,
            UpgradeKey::ChainReaction => self.chain_reaction as u32,
            UpgradeKey::DualWarhead => self.dual_warhead as u32,
            UpgradeKey::AutoTurret => self.auto_turret as u32,
            UpgradeKey::CityShield => self.city_shield,
            UpgradeKey::BaseArmor => self.base_armor as u32,
            UpgradeKey::EmpHardening => self.emp_hardening as u32,
            UpgradeKey::DecoyCity => self.decoy_city as u32,
            UpgradeKey::ExtraAmmo => self.extra_ammo,
            UpgradeKey::TruckArmor => self.truck_armor as u32,
            UpgradeKey::FastTrucks => self.fast_trucks as u32,
            UpgradeKey::TruckCapacity => self.truck_capacity,
        }
    }

    /// Set the level for a key; booleans are owned for any level above zero.
    pub fn set_level(&mut self, key: UpgradeKey, level: u32) {
        let owned = level > 0;
        match key {
            UpgradeKey::BlastRadius => self.blast_radius = level,
            UpgradeKey::MissileSpeed => self.missile_speed = level,
            UpgradeKey::ChainReaction => self.chain_reaction = owned,
            UpgradeKey::DualWarhead => self.dual_warhead = owned,
            UpgradeKey::AutoTurret => self.auto_turret = owned,
            UpgradeKey::CityShield => self.city_shield = level,
            UpgradeKey::BaseArmor => self.base_armor = owned,
            UpgradeKey::EmpHardening => self.emp_hardening = owned,
            UpgradeKey::DecoyCity => self.decoy_city = owned,
            UpgradeKey::ExtraAmmo => self.extra_ammo = level,
            UpgradeKey::TruckArmor => self.truck_armor = owned,
            UpgradeKey::FastTrucks => self.fast_trucks = owned,
            UpgradeKey::TruckCapacity => self.truck_capacity = level,
        }
    }
}
