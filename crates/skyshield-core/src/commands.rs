//! Player commands sent from the input/UI layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Commands that are invalid in the current state are ignored.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeKey;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Launch an interceptor from the nearest eligible base toward a point.
    Fire { x: f32, y: f32 },
    /// Generic "click to continue" for non-playing scenes.
    Advance,
    /// Open the how-to-play overlay from the title screen.
    ShowHowTo,
    /// Buy one level of an upgrade.
    PurchaseUpgrade { key: UpgradeKey },
    /// Restore the first destroyed real city.
    RebuildCity,
    /// Restore the first destroyed base.
    RebuildBase,
    /// Leave the upgrade terminal and start the next wave.
    DeployNextWave,
}
