//! Trails and debris. Purely visual; nothing here affects gameplay.

use hecs::World;

use skyshield_core::components::{EnemyMissile, Lifecycle, Particle, PlayerMissile, Trail};
use skyshield_core::constants::PARTICLE_GRAVITY;
use skyshield_core::types::{Position, Velocity};

use crate::world_setup;

/// Drop a trail point behind every live missile. Runs before movement so
/// the point marks where the missile was.
pub fn emit_trails(world: &mut World) {
    let mut points: Vec<(Position, bool)> = Vec::new();
    for (_, (pos, _, life)) in world.query::<(&Position, &PlayerMissile, &Lifecycle)>().iter() {
        if !life.dead {
            points.push((*pos, false));
        }
    }
    for (_, (pos, _, life)) in world.query::<(&Position, &EnemyMissile, &Lifecycle)>().iter() {
        if !life.dead {
            points.push((*pos, true));
        }
    }
    for (position, hostile) in points {
        world_setup::spawn_trail(world, position, hostile);
    }
}

/// Fade trails and particles; particles also fall.
pub fn run(world: &mut World) {
    for (_entity, (trail, life)) in world.query_mut::<(&mut Trail, &mut Lifecycle)>() {
        trail.life = trail.life.saturating_sub(1);
        if trail.life == 0 {
            life.dead = true;
        }
    }
    for (_entity, (particle, vel, life)) in
        world.query_mut::<(&mut Particle, &mut Velocity, &mut Lifecycle)>()
    {
        vel.y += PARTICLE_GRAVITY;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            life.dead = true;
        }
    }
}
