//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::enums::Scene;
use skyshield_core::events::{Alert, SimEvent};
use skyshield_core::state::*;
use skyshield_core::types::{Position, SimTime, Velocity};

use crate::resources::GameState;

/// Non-ECS presentation state the engine tracks alongside the world.
pub struct Presentation<'a> {
    pub alerts: &'a [Alert],
    pub shake: u32,
    pub wave_summary: Option<&'a WaveSummary>,
    pub cutscene: Option<&'a Cutscene>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    scene: Scene,
    state: &GameState,
    events: Vec<SimEvent>,
    presentation: Presentation<'_>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        scene,
        wave: state.wave,
        score: state.score,
        credits: state.credits,
        bases: state.bases.clone(),
        cities: state.cities.clone(),
        upgrades: state.upgrades.clone(),
        player_missiles: build_player_missiles(world),
        enemy_missiles: build_enemy_missiles(world),
        aircraft: build_aircraft(world),
        trucks: build_trucks(world),
        ammo_drops: build_ammo_drops(world),
        explosions: build_explosions(world),
        trails: build_trails(world),
        particles: build_particles(world),
        alert: presentation.alerts.last().cloned(),
        events,
        shake: presentation.shake,
        wave_summary: presentation.wave_summary.cloned(),
        cutscene: presentation.cutscene.cloned(),
    }
}

fn build_player_missiles(world: &World) -> Vec<PlayerMissileView> {
    world
        .query::<(&Position, &PlayerMissile)>()
        .iter()
        .map(|(_, (pos, missile))| PlayerMissileView {
            position: *pos,
            target: missile.target,
        })
        .collect()
}

fn build_enemy_missiles(world: &World) -> Vec<EnemyMissileView> {
    world
        .query::<(&Position, &EnemyMissile, Option<&Flicker>)>()
        .iter()
        .map(|(_, (pos, missile, flicker))| EnemyMissileView {
            position: *pos,
            target: missile.target,
            kind: missile.kind,
            visible: flicker.map_or(true, |f| f.visible),
        })
        .collect()
}

fn build_aircraft(world: &World) -> Vec<AircraftView> {
    world
        .query::<(&Position, &Velocity, &Aircraft, Option<&Flicker>)>()
        .iter()
        .map(|(_, (pos, vel, aircraft, flicker))| AircraftView {
            position: *pos,
            kind: aircraft.kind,
            hp: aircraft.hp,
            visible: flicker.map_or(true, |f| f.visible),
            facing_left: vel.x < 0.0,
        })
        .collect()
}

fn build_trucks(world: &World) -> Vec<TruckView> {
    world
        .query::<(&Position, &SupplyTruck)>()
        .iter()
        .map(|(_, (pos, truck))| TruckView {
            position: *pos,
            hp: truck.hp,
        })
        .collect()
}

fn build_ammo_drops(world: &World) -> Vec<AmmoDropView> {
    world
        .query::<(&Position, &AmmoDrop)>()
        .iter()
        .map(|(_, (pos, drop))| AmmoDropView {
            position: *pos,
            life: drop.life,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Position, &Explosion)>()
        .iter()
        .map(|(_, (pos, exp))| ExplosionView {
            position: *pos,
            radius: exp.radius,
            max_radius: exp.max_radius,
            phase: exp.phase,
            source: exp.source,
        })
        .collect()
}

fn build_trails(world: &World) -> Vec<TrailView> {
    world
        .query::<(&Position, &Trail)>()
        .iter()
        .map(|(_, (pos, trail))| TrailView {
            position: *pos,
            alpha: trail.life as f32 / skyshield_core::constants::TRAIL_LIFE_TICKS as f32,
            hostile: trail.hostile,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            alpha: particle.life as f32 / particle.max_life.max(1) as f32,
            size: particle.size,
        })
        .collect()
}
