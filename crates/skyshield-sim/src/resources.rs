//! Defended assets and the player's economy: bases, cities, score, credits,
//! and the rules that damage, resupply, and rebuild them.

use skyshield_campaign::upgrades::Modifiers;
use skyshield_core::components::{Base, City, UpgradeLevels};
use skyshield_core::constants::*;
use skyshield_core::enums::{EnemyKind, UpgradeKey};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

/// Per-wave counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveStats {
    /// Enemy missiles and aircraft destroyed by the player this wave.
    pub enemies_destroyed: u32,
}

/// Everything that persists across waves of one playthrough.
#[derive(Debug, Clone)]
pub struct GameState {
    pub wave: u32,
    pub score: u64,
    pub credits: u32,
    pub bases: Vec<Base>,
    pub cities: Vec<City>,
    pub upgrades: UpgradeLevels,
    pub stats: WaveStats,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh playthrough: wave 1, full magazines, every city standing.
    pub fn new() -> Self {
        Self {
            wave: 1,
            score: 0,
            credits: 0,
            bases: BASE_POSITIONS.iter().map(|&x| new_base(x)).collect(),
            cities: CITY_POSITIONS
                .iter()
                .map(|&x| City {
                    x,
                    alive: true,
                    shielded: false,
                    is_decoy: false,
                })
                .collect(),
            upgrades: UpgradeLevels::default(),
            stats: WaveStats::default(),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::from_levels(&self.upgrades)
    }

    pub fn alive_city_xs(&self) -> Vec<f32> {
        self.cities.iter().filter(|c| c.alive).map(|c| c.x).collect()
    }

    pub fn alive_base_xs(&self) -> Vec<f32> {
        self.bases.iter().filter(|b| b.alive).map(|b| b.x).collect()
    }

    /// Cities still standing, decoys included.
    pub fn cities_alive(&self) -> u32 {
        self.cities.iter().filter(|c| c.alive).count() as u32
    }

    pub fn all_cities_lost(&self) -> bool {
        self.cities.iter().all(|c| !c.alive)
    }

    /// Ammo held by bases that are still standing.
    pub fn ammo_remaining(&self) -> u32 {
        self.bases.iter().filter(|b| b.alive).map(|b| b.ammo).sum()
    }

    /// Base that answers a fire order at `x`: the horizontally nearest base
    /// that is alive, not EMP'd, and has ammo. Ties go to the lower index.
    pub fn select_fire_base(&self, x: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, base) in self.bases.iter().enumerate() {
            if !can_fire(base) {
                continue;
            }
            let d = (base.x - x).abs();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Spend one round from a base. Returns the launch point.
    pub fn draw_round(&mut self, base_index: usize) -> Option<Position> {
        let base = self.bases.get_mut(base_index)?;
        if !can_fire(base) {
            return None;
        }
        base.ammo -= 1;
        Some(Position::new(base.x, BASE_Y - PLAYER_LAUNCH_OFFSET_Y))
    }

    /// Add ammo to a base, capped at the magazine size. Returns the amount actually added.
    pub fn resupply(&mut self, base_index: usize, amount: u32) -> u32 {
        match self.bases.get_mut(base_index) {
            Some(base) if base.alive => {
                let before = base.ammo;
                base.ammo = (base.ammo + amount).min(MAX_AMMO);
                base.ammo - before
            }
            _ => 0,
        }
    }

    /// Resolve one warhead ground explosion against every asset.
    ///
    /// An asset is hit when it lies within `radius` of `center` on both
    /// axes. EMP warheads lock bases out instead of destroying them.
    pub fn apply_warhead(
        &mut self,
        kind: EnemyKind,
        center: Position,
        radius: f32,
        emp_lockout_ticks: u32,
        events: &mut Vec<SimEvent>,
    ) {
        for (i, city) in self.cities.iter_mut().enumerate() {
            if !city.alive || !in_blast(city.x, GROUND_Y, center, radius) {
                continue;
            }
            if city.is_decoy {
                city.alive = false;
                events.push(SimEvent::DecoyDestroyed { city_index: i });
            } else if city.shielded {
                city.shielded = false;
                events.push(SimEvent::ShieldAbsorbed { city_index: i });
            } else {
                city.alive = false;
                events.push(SimEvent::CityDestroyed { city_index: i });
            }
        }

        for (i, base) in self.bases.iter_mut().enumerate() {
            if !base.alive || !in_blast(base.x, BASE_Y, center, radius) {
                continue;
            }
            if kind == EnemyKind::Emp {
                base.disabled = true;
                base.disable_timer = emp_lockout_ticks;
                events.push(SimEvent::BaseDisabled {
                    base_index: i,
                    ticks: emp_lockout_ticks,
                });
            } else if base.has_armor && !base.armor_spent {
                base.armor_spent = true;
                events.push(SimEvent::ArmorAbsorbed { base_index: i });
            } else {
                base.alive = false;
                events.push(SimEvent::BaseDestroyed { base_index: i });
            }
        }
    }

    /// Count down EMP lockouts.
    pub fn tick_lockouts(&mut self) {
        for base in self.bases.iter_mut().filter(|b| b.disabled) {
            base.disable_timer = base.disable_timer.saturating_sub(1);
            if base.disable_timer == 0 {
                base.disabled = false;
            }
        }
    }

    /// Refill every standing base for a new wave.
    pub fn reset_ammo(&mut self, starting_ammo: u32) {
        for base in self.bases.iter_mut().filter(|b| b.alive) {
            base.ammo = starting_ammo;
        }
    }

    /// Immediate effect of buying an upgrade. Upgrades that only change
    /// derived parameters have none.
    pub fn apply_upgrade_effect(&mut self, key: UpgradeKey) {
        match key {
            UpgradeKey::AutoTurret => {
                for base in self.bases.iter_mut().filter(|b| b.alive) {
                    base.auto_turret = true;
                }
            }
            UpgradeKey::BaseArmor => {
                for base in self.bases.iter_mut().filter(|b| b.alive) {
                    base.has_armor = true;
                    base.armor_spent = false;
                }
            }
            UpgradeKey::CityShield => {
                if let Some(city) = self.cities.iter_mut().find(|c| c.alive && !c.shielded) {
                    city.shielded = true;
                }
            }
            UpgradeKey::DecoyCity => {
                if let Some(city) = self.cities.iter_mut().find(|c| !c.alive) {
                    city.alive = true;
                    city.is_decoy = true;
                }
            }
            _ => {}
        }
    }

    /// Index of the city a rebuild would restore: the first destroyed real city.
    pub fn rebuildable_city(&self) -> Option<usize> {
        self.cities.iter().position(|c| !c.alive && !c.is_decoy)
    }

    pub fn rebuildable_base(&self) -> Option<usize> {
        self.bases.iter().position(|b| !b.alive)
    }

    /// Restore a city. Shields are not restored.
    pub fn rebuild_city(&mut self, index: usize) {
        if let Some(city) = self.cities.get_mut(index) {
            city.alive = true;
            city.shielded = false;
        }
    }

    /// Restore a base with a full magazine and the owned base upgrades refitted.
    pub fn rebuild_base(&mut self, index: usize) {
        let modifiers = self.modifiers();
        let upgrades = self.upgrades.clone();
        if let Some(base) = self.bases.get_mut(index) {
            *base = new_base(base.x);
            base.ammo = modifiers.starting_ammo;
            base.has_armor = upgrades.base_armor;
            base.auto_turret = upgrades.auto_turret;
        }
    }
}

fn new_base(x: f32) -> Base {
    Base {
        x,
        ammo: STARTING_AMMO,
        alive: true,
        disabled: false,
        disable_timer: 0,
        has_armor: false,
        armor_spent: false,
        auto_turret: false,
        auto_turret_timer: 0,
    }
}

pub fn can_fire(base: &Base) -> bool {
    base.alive && !base.disabled && base.ammo > 0
}

fn in_blast(x: f32, y: f32, center: Position, radius: f32) -> bool {
    (x - center.x).abs() < radius && (y - center.y).abs() < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact_at(state: &mut GameState, kind: EnemyKind, x: f32) -> Vec<SimEvent> {
        let mut events = Vec::new();
        state.apply_warhead(kind, Position::new(x, CITY_TARGET_Y), WARHEAD_BLAST_RADIUS, EMP_LOCKOUT_TICKS, &mut events);
        events
    }

    #[test]
    fn fire_selects_nearest_eligible_base() {
        let mut state = GameState::new();
        assert_eq!(state.select_fire_base(100.0), Some(0));
        assert_eq!(state.select_fire_base(390.0), Some(1));
        assert_eq!(state.select_fire_base(799.0), Some(2));

        state.bases[0].ammo = 0;
        assert_eq!(state.select_fire_base(100.0), Some(1));
        state.bases[1].disabled = true;
        assert_eq!(state.select_fire_base(100.0), Some(2));
        state.bases[2].alive = false;
        assert_eq!(state.select_fire_base(100.0), None);
    }

    #[test]
    fn fire_tie_goes_to_first_base() {
        let state = GameState::new();
        // Exactly halfway between base 0 (120) and base 1 (400).
        assert_eq!(state.select_fire_base(260.0), Some(0));
    }

    #[test]
    fn draw_round_decrements_and_returns_launch_point() {
        let mut state = GameState::new();
        let origin = state.draw_round(1).unwrap();
        assert_eq!(origin, Position::new(400.0, BASE_Y - 20.0));
        assert_eq!(state.bases[1].ammo, STARTING_AMMO - 1);

        state.bases[1].ammo = 0;
        assert!(state.draw_round(1).is_none());
        assert_eq!(state.bases[1].ammo, 0);
    }

    #[test]
    fn resupply_caps_at_max() {
        let mut state = GameState::new();
        state.bases[0].ammo = 18;
        assert_eq!(state.resupply(0, 5), 2);
        assert_eq!(state.bases[0].ammo, MAX_AMMO);
        state.bases[1].alive = false;
        assert_eq!(state.resupply(1, 5), 0);
    }

    #[test]
    fn shielded_city_survives_one_hit() {
        let mut state = GameState::new();
        state.cities[0].shielded = true;
        let x = state.cities[0].x;

        let events = impact_at(&mut state, EnemyKind::Icbm, x);
        assert!(state.cities[0].alive);
        assert!(!state.cities[0].shielded);
        assert_eq!(events, vec![SimEvent::ShieldAbsorbed { city_index: 0 }]);

        let events = impact_at(&mut state, EnemyKind::Icbm, x);
        assert!(!state.cities[0].alive);
        assert_eq!(events, vec![SimEvent::CityDestroyed { city_index: 0 }]);
    }

    #[test]
    fn decoy_dies_silently() {
        let mut state = GameState::new();
        state.cities[2].is_decoy = true;
        state.cities[2].shielded = true;
        let x = state.cities[2].x;
        let events = impact_at(&mut state, EnemyKind::Icbm, x);
        assert!(!state.cities[2].alive);
        assert_eq!(events, vec![SimEvent::DecoyDestroyed { city_index: 2 }]);
    }

    #[test]
    fn armored_base_survives_one_hit() {
        let mut state = GameState::new();
        state.bases[1].has_armor = true;
        let mut events = Vec::new();
        let center = Position::new(400.0, BASE_Y);
        state.apply_warhead(EnemyKind::Icbm, center, 30.0, EMP_LOCKOUT_TICKS, &mut events);
        assert!(state.bases[1].alive);
        assert!(state.bases[1].armor_spent);

        state.apply_warhead(EnemyKind::Icbm, center, 30.0, EMP_LOCKOUT_TICKS, &mut events);
        assert!(!state.bases[1].alive);
        assert_eq!(
            events,
            vec![
                SimEvent::ArmorAbsorbed { base_index: 1 },
                SimEvent::BaseDestroyed { base_index: 1 }
            ]
        );
    }

    #[test]
    fn emp_disables_base_and_recovers() {
        let mut state = GameState::new();
        let mut events = Vec::new();
        state.apply_warhead(EnemyKind::Emp, Position::new(680.0, BASE_Y), EMP_BLAST_RADIUS, 3, &mut events);
        assert!(state.bases[2].alive);
        assert!(state.bases[2].disabled);
        assert_eq!(state.select_fire_base(680.0), Some(1));

        for _ in 0..3 {
            state.tick_lockouts();
        }
        assert!(!state.bases[2].disabled);
        assert_eq!(state.select_fire_base(680.0), Some(2));
    }

    #[test]
    fn blast_misses_distant_assets() {
        let mut state = GameState::new();
        // Midway between city 2 (335) and city 3 (465).
        let events = impact_at(&mut state, EnemyKind::Icbm, 400.0);
        assert!(state.cities.iter().all(|c| c.alive));
        // The base at 400 sits inside the blast.
        assert_eq!(events, vec![SimEvent::BaseDestroyed { base_index: 1 }]);
    }

    #[test]
    fn upgrade_effects() {
        let mut state = GameState::new();
        state.bases[0].alive = false;
        state.upgrades.auto_turret = true;
        state.apply_upgrade_effect(UpgradeKey::AutoTurret);
        assert!(!state.bases[0].auto_turret);
        assert!(state.bases[1].auto_turret && state.bases[2].auto_turret);

        state.apply_upgrade_effect(UpgradeKey::CityShield);
        state.apply_upgrade_effect(UpgradeKey::CityShield);
        assert!(state.cities[0].shielded && state.cities[1].shielded);
        assert!(!state.cities[2].shielded);

        // No destroyed city: decoy purchase has nothing to revive.
        state.apply_upgrade_effect(UpgradeKey::DecoyCity);
        assert!(state.cities.iter().all(|c| !c.is_decoy));
        state.cities[4].alive = false;
        state.apply_upgrade_effect(UpgradeKey::DecoyCity);
        assert!(state.cities[4].alive && state.cities[4].is_decoy);
    }

    #[test]
    fn rebuild_base_refits_upgrades() {
        let mut state = GameState::new();
        state.upgrades.base_armor = true;
        state.upgrades.auto_turret = true;
        state.upgrades.extra_ammo = 2;
        state.bases[2].alive = false;
        state.bases[2].armor_spent = true;

        let index = state.rebuildable_base().unwrap();
        state.rebuild_base(index);
        let base = &state.bases[2];
        assert!(base.alive && base.has_armor && base.auto_turret);
        assert!(!base.armor_spent && !base.disabled);
        assert_eq!(base.ammo, 16);
        assert_eq!(base.x, 680.0);
    }

    #[test]
    fn rebuild_city_skips_decoys_and_drops_shield() {
        let mut state = GameState::new();
        state.cities[0].alive = false;
        state.cities[0].is_decoy = true;
        state.cities[3].alive = false;
        state.cities[3].shielded = true;
        assert_eq!(state.rebuildable_city(), Some(3));
        state.rebuild_city(3);
        assert!(state.cities[3].alive);
        assert!(!state.cities[3].shielded);
        assert_eq!(state.rebuildable_city(), None);
    }
}
