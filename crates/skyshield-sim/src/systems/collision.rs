//! Collision resolution: warhead ground impacts and player blasts against
//! enemy missiles and aircraft.

use hecs::World;
use rand::Rng;

use skyshield_campaign::economy::{aircraft_reward, missile_reward, Reward};
use skyshield_core::components::{Aircraft, EnemyMissile, Explosion, Lifecycle};
use skyshield_core::constants::*;
use skyshield_core::enums::{AircraftKind, EnemyKind, ExplosionSource};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::resources::GameState;
use crate::world_setup;

/// Turn every warhead that reached the ground this tick into a hostile
/// explosion at its aim point and kick the screen shake. Decoys vanish
/// without a blast.
pub fn ground_impacts(
    world: &mut World,
    rng: &mut impl Rng,
    next_explosion_id: &mut u32,
    shake: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    let impacts: Vec<(EnemyKind, Position, f32)> = world
        .query::<(&EnemyMissile, &Lifecycle)>()
        .iter()
        .filter(|(_, (m, life))| life.exploded && m.kind != EnemyKind::Decoy)
        .map(|(_, (m, _))| (m.kind, m.target, m.blast_radius))
        .collect();

    for (kind, target, radius) in impacts {
        world_setup::spawn_explosion(
            world,
            rng,
            next_explosion_id,
            target,
            radius,
            ExplosionSource::Warhead(kind),
        );
        let intensity = if kind == EnemyKind::Nuke {
            SHAKE_NUKE
        } else {
            SHAKE_IMPACT
        };
        *shake = (*shake).max(intensity);
        log::trace!("{:?} impact at x={:.0}", kind, target.x);
        events.push(SimEvent::GroundImpact {
            kind,
            position: target,
        });
    }
}

/// Player blasts destroy every enemy missile they contain and take one hit
/// point per tick off every aircraft they contain.
///
/// Kills are credited to `state`. With the chain reaction upgrade each
/// missile kill may set off a smaller player blast where the missile died.
pub fn intercepts(
    world: &mut World,
    rng: &mut impl Rng,
    state: &mut GameState,
    chain_radius: Option<f32>,
    next_explosion_id: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    let blasts: Vec<(Position, f32)> = world
        .query::<(&Position, &Explosion, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, exp, life))| !life.dead && exp.source.is_player())
        .map(|(_, (pos, exp, _))| (*pos, exp.radius))
        .collect();
    if blasts.is_empty() {
        return;
    }

    let mut chain_points: Vec<Position> = Vec::new();
    let mut cargo_drops: Vec<Position> = Vec::new();

    for &(center, radius) in &blasts {
        for (_entity, (pos, missile, life)) in
            world.query_mut::<(&Position, &EnemyMissile, &mut Lifecycle)>()
        {
            if life.dead || center.distance_to(pos) > radius {
                continue;
            }
            life.dead = true;
            life.exploded = false;
            credit(state, missile_reward(missile.kind));
            events.push(SimEvent::Intercepted {
                kind: missile.kind,
                position: *pos,
            });
            if chain_radius.is_some() && rng.gen_bool(CHAIN_REACTION_CHANCE) {
                chain_points.push(*pos);
            }
        }

        for (_entity, (pos, aircraft, life)) in
            world.query_mut::<(&Position, &mut Aircraft, &mut Lifecycle)>()
        {
            if life.dead || center.distance_to(pos) > radius {
                continue;
            }
            aircraft.hp = aircraft.hp.saturating_sub(1);
            if aircraft.hp > 0 {
                continue;
            }
            life.dead = true;
            credit(state, aircraft_reward(aircraft.kind));
            events.push(SimEvent::AircraftDown {
                kind: aircraft.kind,
                position: *pos,
            });
            if aircraft.kind == AircraftKind::Cargo {
                cargo_drops.push(*pos);
            }
        }
    }

    if let Some(radius) = chain_radius {
        for point in chain_points {
            world_setup::spawn_explosion(
                world,
                rng,
                next_explosion_id,
                point,
                radius,
                ExplosionSource::Player,
            );
        }
    }
    for point in cargo_drops {
        world_setup::spawn_ammo_drop(world, point);
    }
}

fn credit(state: &mut GameState, reward: Reward) {
    state.score += reward.score as u64;
    state.credits += reward.credits;
    state.stats.enemies_destroyed += 1;
}
