//! Explosion lifecycle and warhead ground damage.

use hecs::World;

use skyshield_core::components::{Explosion, Lifecycle};
use skyshield_core::constants::*;
use skyshield_core::enums::{ExplosionPhase, ExplosionSource};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::resources::GameState;

/// Grow, hold, then shrink every explosion; mark it dead once it has
/// shrunk to nothing.
pub fn run(world: &mut World) {
    for (_entity, (exp, life)) in world.query_mut::<(&mut Explosion, &mut Lifecycle)>() {
        if life.dead {
            continue;
        }
        step(exp);
        if exp.phase == ExplosionPhase::Shrink && exp.radius <= 0.0 {
            exp.radius = 0.0;
            life.dead = true;
        }
    }
}

/// Advance one explosion by one tick.
pub fn step(exp: &mut Explosion) {
    match exp.phase {
        ExplosionPhase::Grow => {
            exp.radius += EXPLOSION_GROW_RATE;
            if exp.radius >= exp.max_radius {
                exp.radius = exp.max_radius;
                exp.phase = ExplosionPhase::Hold;
            }
        }
        ExplosionPhase::Hold => {
            exp.hold_remaining = exp.hold_remaining.saturating_sub(1);
            if exp.hold_remaining == 0 {
                exp.phase = ExplosionPhase::Shrink;
            }
        }
        ExplosionPhase::Shrink => {
            exp.radius -= EXPLOSION_SHRINK_RATE;
        }
    }
}

/// Resolve ground damage for each new warhead explosion exactly once.
pub fn apply_warhead_damage(
    world: &mut World,
    state: &mut GameState,
    emp_lockout_ticks: u32,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (pos, exp)) in world.query_mut::<(&Position, &mut Explosion)>() {
        let ExplosionSource::Warhead(kind) = exp.source else {
            continue;
        };
        if exp.damage_applied {
            continue;
        }
        exp.damage_applied = true;
        state.apply_warhead(kind, *pos, exp.max_radius, emp_lockout_ticks, events);
    }
}
