//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::{Base, City, UpgradeLevels};
use crate::enums::*;
use crate::events::{Alert, SimEvent};
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub scene: Scene,
    pub wave: u32,
    pub score: u64,
    pub credits: u32,
    pub bases: Vec<Base>,
    pub cities: Vec<City>,
    pub upgrades: UpgradeLevels,
    pub player_missiles: Vec<PlayerMissileView>,
    pub enemy_missiles: Vec<EnemyMissileView>,
    pub aircraft: Vec<AircraftView>,
    pub trucks: Vec<TruckView>,
    pub ammo_drops: Vec<AmmoDropView>,
    pub explosions: Vec<ExplosionView>,
    pub trails: Vec<TrailView>,
    pub particles: Vec<ParticleView>,
    /// Newest alert that has not yet expired.
    pub alert: Option<Alert>,
    /// Events raised during this tick only.
    pub events: Vec<SimEvent>,
    /// Screen shake intensity in pixels.
    pub shake: u32,
    /// Results of the last settled wave.
    pub wave_summary: Option<WaveSummary>,
    /// Dialogue shown while the scene is `Cutscene`.
    pub cutscene: Option<Cutscene>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMissileView {
    pub position: Position,
    pub target: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyMissileView {
    pub position: Position,
    pub target: Position,
    pub kind: EnemyKind,
    /// False while a decoy is in the dark half of its flicker.
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Position,
    pub kind: AircraftKind,
    pub hp: u32,
    pub visible: bool,
    /// Flying right to left.
    pub facing_left: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckView {
    pub position: Position,
    pub hp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoDropView {
    pub position: Position,
    pub life: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub radius: f32,
    pub max_radius: f32,
    pub phase: ExplosionPhase,
    pub source: ExplosionSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailView {
    pub position: Position,
    /// Remaining life as a fraction in [0, 1].
    pub alpha: f32,
    pub hostile: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub alpha: f32,
    pub size: f32,
}

/// Per-wave results shown on the wave-end screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSummary {
    pub wave: u32,
    pub enemies_destroyed: u32,
    pub cities_saved: u32,
    pub ammo_remaining: u32,
    pub bonus_score: u32,
    pub credits_earned: u32,
}

/// Scripted dialogue between waves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutscene {
    pub wave: u32,
    pub speaker: Speaker,
    /// Display name of the speaker.
    pub name: String,
    pub lines: Vec<String>,
}
