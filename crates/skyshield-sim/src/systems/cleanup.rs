//! Cleanup system: removes entities flagged dead this tick.

use hecs::{Entity, World};

use skyshield_core::components::Lifecycle;

/// Despawn every entity whose lifecycle is dead.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, life) in world.query_mut::<&Lifecycle>() {
        if life.dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
