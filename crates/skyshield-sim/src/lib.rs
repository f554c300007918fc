//! Simulation engine for SKYSHIELD.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod resources;
pub mod scheduler;
pub mod systems;
pub mod wave_plan;
pub mod world_setup;

pub use engine::{CommandRejection, SimConfig, SimulationEngine};
pub use skyshield_core as core;
