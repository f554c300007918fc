//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level scene of a playthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    #[default]
    Title,
    /// Informational overlay reachable from the title screen. No simulation effect.
    HowTo,
    /// Opening story crawl.
    Story,
    Playing,
    /// Wave settled, summary on screen.
    WaveEnd,
    /// Scripted dialogue between milestone waves.
    Cutscene,
    /// Upgrade terminal between waves.
    Upgrade,
    GameOver,
    Victory,
}

impl Scene {
    /// Terminal scenes wait for an advance command to restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, Scene::GameOver | Scene::Victory)
    }
}

/// Enemy warhead type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Standard ballistic warhead.
    Icbm,
    /// Splits into several ICBMs mid-flight.
    Mirv,
    /// Double-speed warhead.
    Fast,
    /// Harmless flickering fake.
    Decoy,
    /// Disables bases instead of destroying them.
    Emp,
    /// Slow warhead with the largest blast.
    Nuke,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 6] = [
        EnemyKind::Icbm,
        EnemyKind::Mirv,
        EnemyKind::Fast,
        EnemyKind::Decoy,
        EnemyKind::Emp,
        EnemyKind::Nuke,
    ];
}

/// Aircraft type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftKind {
    /// Drops ICBMs.
    Bomber,
    /// Flickers and drops fast warheads.
    Stealth,
    /// Never drops; releases an ammo crate when shot down.
    Cargo,
    /// Fast, fragile, flies in squadrons.
    Drone,
}

/// Explosion lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionPhase {
    #[default]
    Grow,
    Hold,
    Shrink,
}

/// What produced an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSource {
    /// Player interceptor blast (including chain reactions and secondaries). Destroys enemies.
    Player,
    /// Enemy warhead ground impact. Damages player assets.
    Warhead(EnemyKind),
    /// Burning supply truck. Cosmetic, hostile to nothing but other trucks.
    Wreck,
}

impl ExplosionSource {
    pub fn is_player(self) -> bool {
        matches!(self, ExplosionSource::Player)
    }
}

/// Purchasable upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeKey {
    BlastRadius,
    MissileSpeed,
    ChainReaction,
    DualWarhead,
    AutoTurret,
    CityShield,
    BaseArmor,
    EmpHardening,
    DecoyCity,
    ExtraAmmo,
    TruckArmor,
    FastTrucks,
    TruckCapacity,
}

impl UpgradeKey {
    pub const ALL: [UpgradeKey; 13] = [
        UpgradeKey::BlastRadius,
        UpgradeKey::MissileSpeed,
        UpgradeKey::ChainReaction,
        UpgradeKey::DualWarhead,
        UpgradeKey::AutoTurret,
        UpgradeKey::CityShield,
        UpgradeKey::BaseArmor,
        UpgradeKey::EmpHardening,
        UpgradeKey::DecoyCity,
        UpgradeKey::ExtraAmmo,
        UpgradeKey::TruckArmor,
        UpgradeKey::FastTrucks,
        UpgradeKey::TruckCapacity,
    ];
}

/// Cutscene speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Briggs,
    Pixel,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
