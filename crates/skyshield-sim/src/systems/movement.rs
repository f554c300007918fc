//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick (one tick is the unit of time).
//! Also advances visibility flicker.

use hecs::World;

use skyshield_core::components::{Flicker, FlickerCadence};
use skyshield_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Advance flicker timers and recompute visibility.
pub fn update_flicker(world: &mut World) {
    for (_entity, flicker) in world.query_mut::<&mut Flicker>() {
        flicker.timer += 1;
        flicker.visible = is_visible(flicker.cadence, flicker.timer);
    }
}

pub fn is_visible(cadence: FlickerCadence, timer: u32) -> bool {
    match cadence {
        FlickerCadence::Alternating { period } => (timer / period) % 2 == 0,
        FlickerCadence::MostlyVisible { period } => (timer / period) % 3 != 0,
    }
}
