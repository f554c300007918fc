//! Upgrade catalog, purchase rules, and the parameters derived from upgrade levels.

use serde::Serialize;
use thiserror::Error;

use skyshield_core::components::UpgradeLevels;
use skyshield_core::constants::*;
use skyshield_core::enums::UpgradeKey;

/// Upgrade terminal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpgradeCategory {
    Weapons,
    Defense,
    Logistics,
}

/// One catalog entry. `max_level` of 1 marks a one-time purchase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpgradeSpec {
    pub key: UpgradeKey,
    pub label: &'static str,
    pub description: &'static str,
    pub category: UpgradeCategory,
    pub cost: u32,
    pub max_level: u32,
}

const fn entry(
    key: UpgradeKey,
    label: &'static str,
    description: &'static str,
    category: UpgradeCategory,
    cost: u32,
    max_level: u32,
) -> UpgradeSpec {
    UpgradeSpec {
        key,
        label,
        description,
        category,
        cost,
        max_level,
    }
}

use UpgradeCategory::*;

/// Every purchasable upgrade, in terminal order.
pub const CATALOG: [UpgradeSpec; 13] = [
    entry(UpgradeKey::BlastRadius, "BLAST RADIUS+", "Larger interceptor blasts", Weapons, 500, 3),
    entry(UpgradeKey::MissileSpeed, "MISSILE SPEED+", "Interceptors travel faster", Weapons, 400, 3),
    entry(UpgradeKey::ChainReaction, "CHAIN REACTION", "25% chance of a secondary blast on a kill", Weapons, 1500, 1),
    entry(UpgradeKey::DualWarhead, "DUAL WARHEAD", "Each interceptor detonates twice", Weapons, 2000, 1),
    entry(UpgradeKey::AutoTurret, "AUTO-TURRET", "Bases fire at threats every 4s", Weapons, 3000, 1),
    entry(UpgradeKey::CityShield, "CITY SHIELD", "Shield one city against a single hit", Defense, 800, 6),
    entry(UpgradeKey::BaseArmor, "BASE ARMOR", "Bases survive one direct hit", Defense, 600, 1),
    entry(UpgradeKey::EmpHardening, "EMP HARDENING", "EMP recovery: 10s to 3s", Defense, 1000, 1),
    entry(UpgradeKey::DecoyCity, "DECOY CITY", "Holographic city draws fire", Defense, 1200, 1),
    entry(UpgradeKey::ExtraAmmo, "EXTRA AMMO", "+3 starting ammo per base", Logistics, 300, 4),
    entry(UpgradeKey::TruckArmor, "TRUCK ARMOR", "Supply trucks survive one hit", Logistics, 700, 1),
    entry(UpgradeKey::FastTrucks, "FAST TRUCKS", "Trucks move faster", Logistics, 500, 1),
    entry(UpgradeKey::TruckCapacity, "TRUCK CAPACITY+", "Trucks deliver more missiles per stop", Logistics, 600, 3),
];

/// Catalog entry for a key.
pub fn spec(key: UpgradeKey) -> &'static UpgradeSpec {
    // CATALOG is ordered like UpgradeKey::ALL.
    &CATALOG[key as usize]
}

/// Why a purchase was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("{key:?} already at max level {max_level}")]
    MaxLevel { key: UpgradeKey, max_level: u32 },
    #[error("insufficient credits: have {have}, need {need}")]
    InsufficientCredits { have: u32, need: u32 },
}

/// Buy one level of `key`, deducting its cost from `credits`.
///
/// Both checks happen before anything changes, so a refused purchase leaves
/// levels and credits untouched. Returns the new level.
pub fn purchase(
    levels: &mut UpgradeLevels,
    credits: &mut u32,
    key: UpgradeKey,
) -> Result<u32, PurchaseError> {
    let spec = spec(key);
    let current = levels.level_for(key);
    if current >= spec.max_level {
        return Err(PurchaseError::MaxLevel {
            key,
            max_level: spec.max_level,
        });
    }
    if *credits < spec.cost {
        return Err(PurchaseError::InsufficientCredits {
            have: *credits,
            need: spec.cost,
        });
    }
    *credits -= spec.cost;
    levels.set_level(key, current + 1);
    log::debug!("purchased {:?} level {} for {} credits", key, current + 1, spec.cost);
    Ok(current + 1)
}

/// Gameplay parameters that depend on upgrade levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    pub blast_radius: f32,
    pub missile_speed: f32,
    /// Ammo a base holds at the start of each wave and after a rebuild.
    pub starting_ammo: u32,
    pub emp_lockout_ticks: u32,
    /// Radius of chain-reaction blasts, when owned.
    pub chain_radius: Option<f32>,
    pub dual_warhead: bool,
    pub truck_speed: f32,
    pub truck_payload: u32,
    pub truck_hp: u32,
}

impl Modifiers {
    pub fn from_levels(levels: &UpgradeLevels) -> Self {
        let blast = levels.blast_radius as f32;
        Self {
            blast_radius: PLAYER_BLAST_RADIUS + PLAYER_BLAST_RADIUS_PER_LEVEL * blast,
            missile_speed: PLAYER_MISSILE_BASE_SPEED
                + PLAYER_MISSILE_SPEED_PER_LEVEL * levels.missile_speed as f32,
            starting_ammo: (STARTING_AMMO + EXTRA_AMMO_PER_LEVEL * levels.extra_ammo).min(MAX_AMMO),
            emp_lockout_ticks: if levels.emp_hardening {
                EMP_HARDENED_LOCKOUT_TICKS
            } else {
                EMP_LOCKOUT_TICKS
            },
            chain_radius: levels
                .chain_reaction
                .then(|| CHAIN_REACTION_RADIUS + CHAIN_REACTION_RADIUS_PER_LEVEL * blast),
            dual_warhead: levels.dual_warhead,
            truck_speed: if levels.fast_trucks {
                FAST_TRUCK_SPEED
            } else {
                TRUCK_SPEED
            },
            truck_payload: TRUCK_PAYLOAD + TRUCK_PAYLOAD_PER_LEVEL * levels.truck_capacity,
            truck_hp: if levels.truck_armor { 2 } else { 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_key_order() {
        for (i, key) in UpgradeKey::ALL.iter().enumerate() {
            assert_eq!(CATALOG[i].key, *key);
            assert_eq!(spec(*key).key, *key);
        }
    }

    #[test]
    fn purchase_deducts_and_levels_up() {
        let mut levels = UpgradeLevels::default();
        let mut credits = 1200;
        assert_eq!(purchase(&mut levels, &mut credits, UpgradeKey::BlastRadius), Ok(1));
        assert_eq!(credits, 700);
        assert_eq!(levels.blast_radius, 1);
    }

    #[test]
    fn purchase_refused_without_credits() {
        let mut levels = UpgradeLevels::default();
        let mut credits = 299;
        let err = purchase(&mut levels, &mut credits, UpgradeKey::ExtraAmmo).unwrap_err();
        assert_eq!(err, PurchaseError::InsufficientCredits { have: 299, need: 300 });
        assert_eq!(credits, 299);
        assert_eq!(levels.extra_ammo, 0);
    }

    #[test]
    fn purchase_refused_at_max_level() {
        let mut levels = UpgradeLevels::default();
        let mut credits = 10_000;
        purchase(&mut levels, &mut credits, UpgradeKey::DualWarhead).unwrap();
        let err = purchase(&mut levels, &mut credits, UpgradeKey::DualWarhead).unwrap_err();
        assert!(matches!(err, PurchaseError::MaxLevel { max_level: 1, .. }));
        assert_eq!(credits, 8000);

        for _ in 0..3 {
            purchase(&mut levels, &mut credits, UpgradeKey::MissileSpeed).unwrap();
        }
        assert!(purchase(&mut levels, &mut credits, UpgradeKey::MissileSpeed).is_err());
        assert_eq!(levels.missile_speed, 3);
    }

    #[test]
    fn default_modifiers() {
        let m = Modifiers::from_levels(&UpgradeLevels::default());
        assert_eq!(m.blast_radius, 30.0);
        assert_eq!(m.missile_speed, 5.0);
        assert_eq!(m.starting_ammo, 10);
        assert_eq!(m.emp_lockout_ticks, 600);
        assert_eq!(m.chain_radius, None);
        assert_eq!(m.truck_speed, 1.5);
        assert_eq!(m.truck_payload, 3);
        assert_eq!(m.truck_hp, 1);
    }

    #[test]
    fn upgraded_modifiers() {
        let levels = UpgradeLevels {
            blast_radius: 2,
            missile_speed: 3,
            chain_reaction: true,
            emp_hardening: true,
            extra_ammo: 4,
            truck_armor: true,
            fast_trucks: true,
            truck_capacity: 3,
            ..Default::default()
        };
        let m = Modifiers::from_levels(&levels);
        assert_eq!(m.blast_radius, 44.0);
        assert_eq!(m.missile_speed, 9.5);
        // 10 + 12 would exceed the magazine.
        assert_eq!(m.starting_ammo, MAX_AMMO);
        assert_eq!(m.emp_lockout_ticks, 180);
        assert_eq!(m.chain_radius, Some(30.0));
        assert_eq!(m.truck_speed, 2.5);
        assert_eq!(m.truck_payload, 9);
        assert_eq!(m.truck_hp, 2);
    }
}
