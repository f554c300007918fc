//! Enemy warhead flight: ground arrival and MIRV splitting.

use hecs::World;
use rand::Rng;

use skyshield_core::components::{EnemyMissile, Lifecycle, MirvWarhead};
use skyshield_core::constants::*;
use skyshield_core::enums::EnemyKind;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::world_setup;

/// Mark warheads that reached their aim point as dead and exploded.
pub fn check_arrivals(world: &mut World) {
    for (_entity, (pos, missile, life)) in
        world.query_mut::<(&Position, &EnemyMissile, &mut Lifecycle)>()
    {
        if !life.dead && pos.distance_to(&missile.target) < ENEMY_ARRIVAL_EPSILON {
            life.dead = true;
            life.exploded = true;
        }
    }
}

/// Split every live MIRV that has descended past its split altitude.
///
/// Each split releases 2-3 ICBMs at the carrier's position, aimed around the
/// carrier's target, at the wave speed plus a bonus. The carrier keeps flying.
/// Returns the number of splits.
pub fn split_mirvs(
    world: &mut World,
    rng: &mut impl Rng,
    wave_speed: f32,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let mut to_split: Vec<(Position, Position)> = Vec::new();
    for (_entity, (pos, missile, mirv, life)) in
        world.query_mut::<(&Position, &EnemyMissile, &mut MirvWarhead, &Lifecycle)>()
    {
        if life.dead || mirv.split || pos.y < mirv.split_altitude {
            continue;
        }
        mirv.split = true;
        to_split.push((*pos, missile.target));
    }

    let splits = to_split.len() as u32;
    for (origin, target) in to_split {
        let children = rng.gen_range(MIRV_CHILDREN_MIN..=MIRV_CHILDREN_MAX);
        for _ in 0..children {
            let scatter = (rng.gen::<f32>() - 0.5) * MIRV_TARGET_SCATTER;
            let child_target = Position::new(
                (target.x + scatter).clamp(MIRV_TARGET_MARGIN, WORLD_WIDTH - MIRV_TARGET_MARGIN),
                CITY_TARGET_Y,
            );
            world_setup::spawn_enemy_missile(
                world,
                rng,
                EnemyKind::Icbm,
                origin,
                child_target,
                wave_speed * MIRV_CHILD_SPEED_BONUS,
            );
        }
        log::trace!("MIRV split at ({:.0}, {:.0}) into {}", origin.x, origin.y, children);
        events.push(SimEvent::MirvSplit {
            position: origin,
            children,
        });
    }
    splits
}
