//! Player interceptor arrival: detonate at the aim point.

use hecs::World;
use rand::Rng;

use skyshield_core::components::{Lifecycle, PlayerMissile};
use skyshield_core::constants::*;
use skyshield_core::enums::ExplosionSource;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::scheduler::{ScheduledEvent, Scheduler};
use crate::world_setup;

/// Where and how a dual-warhead secondary gets scheduled.
pub struct SecondaryBlasts<'a> {
    pub scheduler: &'a mut Scheduler,
    pub now: u64,
    pub epoch: u32,
}

/// Detonate every interceptor that came within arrival range of its target.
/// With the dual warhead upgrade a larger second blast is scheduled at the
/// same point.
pub fn run(
    world: &mut World,
    rng: &mut impl Rng,
    next_explosion_id: &mut u32,
    secondary: Option<SecondaryBlasts<'_>>,
    events: &mut Vec<SimEvent>,
) {
    let mut arrived: Vec<(Position, f32)> = Vec::new();
    for (_entity, (pos, missile, life)) in
        world.query_mut::<(&Position, &PlayerMissile, &mut Lifecycle)>()
    {
        if life.dead {
            continue;
        }
        if pos.distance_to(&missile.target) < PLAYER_ARRIVAL_EPSILON {
            life.dead = true;
            life.exploded = true;
            arrived.push((missile.target, missile.blast_radius));
        }
    }

    let mut secondary = secondary;
    for (center, radius) in arrived {
        world_setup::spawn_explosion(
            world,
            rng,
            next_explosion_id,
            center,
            radius,
            ExplosionSource::Player,
        );
        events.push(SimEvent::Detonation {
            position: center,
            radius,
        });
        if let Some(blasts) = secondary.as_mut() {
            blasts.scheduler.schedule(
                blasts.now + DUAL_WARHEAD_DELAY_TICKS,
                Some(blasts.epoch),
                ScheduledEvent::SecondaryBlast {
                    center,
                    radius: radius * DUAL_WARHEAD_RADIUS_FACTOR,
                },
            );
        }
    }
}
