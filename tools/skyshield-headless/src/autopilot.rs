//! A simple scripted player: clicks through every screen, spends credits on a
//! fixed shopping list, and fires at the lowest incoming warhead.

use skyshield_campaign::upgrades;
use skyshield_sim::core::commands::PlayerCommand;
use skyshield_sim::core::constants::{BASE_REBUILD_COST, CITY_REBUILD_COST, MAX_AMMO};
use skyshield_sim::core::enums::{EnemyKind, Scene, UpgradeKey};
use skyshield_sim::core::state::GameStateSnapshot;
use skyshield_sim::core::types::Position;

/// Ticks between manual shots.
const FIRE_INTERVAL: u32 = 12;
/// How far ahead of a warhead along its flight line to aim.
const LEAD_DISTANCE: f32 = 30.0;
/// Warheads already inside a pending blast this close are left alone.
const COVERAGE_RADIUS: f32 = 35.0;

/// Purchase priority. Repeatable upgrades appear once per level wanted.
const SHOPPING_LIST: [UpgradeKey; 10] = [
    UpgradeKey::BlastRadius,
    UpgradeKey::ExtraAmmo,
    UpgradeKey::MissileSpeed,
    UpgradeKey::BaseArmor,
    UpgradeKey::BlastRadius,
    UpgradeKey::CityShield,
    UpgradeKey::ChainReaction,
    UpgradeKey::ExtraAmmo,
    UpgradeKey::EmpHardening,
    UpgradeKey::AutoTurret,
];

#[derive(Debug, Default)]
pub struct Autopilot {
    fire_cooldown: u32,
    /// Last tick on which a menu command was sent, so each screen is acted on once.
    last_menu_tick: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to queue before the next tick, given the latest snapshot.
    pub fn decide(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snap.scene {
            Scene::Playing => self.fire(snap).into_iter().collect(),
            Scene::Upgrade => self.menu(snap, shop),
            // Deploying clears the field, so let the supply run finish first.
            Scene::WaveEnd if !snap.trucks.is_empty() => Vec::new(),
            Scene::Title | Scene::HowTo | Scene::Story | Scene::WaveEnd | Scene::Cutscene => {
                self.menu(snap, |_| vec![PlayerCommand::Advance])
            }
            Scene::GameOver | Scene::Victory => Vec::new(),
        }
    }

    fn menu(
        &mut self,
        snap: &GameStateSnapshot,
        commands: impl FnOnce(&GameStateSnapshot) -> Vec<PlayerCommand>,
    ) -> Vec<PlayerCommand> {
        // Scene changes land on the next snapshot; don't double-send.
        if self.last_menu_tick == Some(snap.time.tick) {
            return Vec::new();
        }
        self.last_menu_tick = Some(snap.time.tick);
        commands(snap)
    }

    fn fire(&mut self, snap: &GameStateSnapshot) -> Option<PlayerCommand> {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
            return None;
        }

        let pending: Vec<Position> = snap
            .player_missiles
            .iter()
            .map(|m| m.target)
            .chain(
                snap.explosions
                    .iter()
                    .filter(|e| e.source.is_player())
                    .map(|e| e.position),
            )
            .collect();

        let target = snap
            .enemy_missiles
            .iter()
            .filter(|m| m.visible && m.kind != EnemyKind::Decoy)
            .filter(|m| {
                pending
                    .iter()
                    .all(|p| p.distance_to(&m.position) > COVERAGE_RADIUS)
            })
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        let heading = (target.target.as_vec2() - target.position.as_vec2()).normalize_or_zero();
        let aim = Position::from(target.position.as_vec2() + heading * LEAD_DISTANCE);
        self.fire_cooldown = FIRE_INTERVAL;
        Some(PlayerCommand::Fire { x: aim.x, y: aim.y })
    }
}

/// Rebuild what was lost, buy down the shopping list, then deploy.
fn shop(snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    let mut credits = snap.credits;

    let lost_cities = snap.cities.iter().filter(|c| !c.alive && !c.is_decoy).count() as u32;
    for _ in 0..lost_cities {
        if credits < CITY_REBUILD_COST {
            break;
        }
        credits -= CITY_REBUILD_COST;
        commands.push(PlayerCommand::RebuildCity);
    }
    let lost_bases = snap.bases.iter().filter(|b| !b.alive).count() as u32;
    for _ in 0..lost_bases {
        if credits < BASE_REBUILD_COST {
            break;
        }
        credits -= BASE_REBUILD_COST;
        commands.push(PlayerCommand::RebuildBase);
    }

    let mut levels = snap.upgrades.clone();
    for key in SHOPPING_LIST {
        let spec = upgrades::spec(key);
        let level = levels.level_for(key);
        if level >= spec.max_level || credits < spec.cost {
            continue;
        }
        if key == UpgradeKey::ExtraAmmo && snap.bases.iter().any(|b| b.ammo >= MAX_AMMO) {
            continue;
        }
        credits -= spec.cost;
        levels.set_level(key, level + 1);
        commands.push(PlayerCommand::PurchaseUpgrade { key });
    }

    commands.push(PlayerCommand::DeployNextWave);
    commands
}
