//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Per-tick feedback for the renderer and sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Interceptor launched (manually or by an auto-turret).
    MissileLaunched { base_index: usize, automatic: bool },
    /// Player blast created.
    Detonation { position: Position, radius: f32 },
    /// Enemy warhead destroyed in flight.
    Intercepted { kind: EnemyKind, position: Position },
    /// Aircraft shot down.
    AircraftDown { kind: AircraftKind, position: Position },
    /// MIRV released its children.
    MirvSplit { position: Position, children: u32 },
    /// Enemy warhead reached the ground.
    GroundImpact { kind: EnemyKind, position: Position },
    CityDestroyed { city_index: usize },
    /// Decoy hologram lost. Raises no alert.
    DecoyDestroyed { city_index: usize },
    ShieldAbsorbed { city_index: usize },
    BaseDestroyed { base_index: usize },
    ArmorAbsorbed { base_index: usize },
    BaseDisabled { base_index: usize, ticks: u32 },
    /// Ammo delivered by a truck or a cargo drop.
    AmmoDelivered { base_index: usize, amount: u32 },
    TruckDestroyed { position: Position },
    SceneChanged { from: Scene, to: Scene },
}

/// Alert for the UI alert banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    /// Tick at which the alert was raised.
    pub tick: u64,
    pub remaining_ticks: u32,
}
