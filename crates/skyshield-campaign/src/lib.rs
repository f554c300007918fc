//! Campaign rules for SKYSHIELD: the wave table, the upgrade catalog,
//! between-wave economy, and the scripted briefings.
//!
//! Everything here is pure data and pure functions over core types; the
//! simulation crate applies the results.

pub mod briefings;
pub mod economy;
pub mod upgrades;
pub mod waves;
