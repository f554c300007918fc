//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; entity state lives in components and persistent
//! state lives in `GameState`.

pub mod aircraft;
pub mod alerts;
pub mod ammo_drops;
pub mod auto_turret;
pub mod cleanup;
pub mod collision;
pub mod cosmetics;
pub mod enemy_missiles;
pub mod explosions;
pub mod movement;
pub mod player_missiles;
pub mod snapshot;
pub mod spawning;
pub mod trucks;
