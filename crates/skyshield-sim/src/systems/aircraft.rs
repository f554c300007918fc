//! Aircraft behavior: bomb drops and leaving the playfield.

use hecs::World;
use rand::Rng;

use skyshield_core::components::{Aircraft, Lifecycle};
use skyshield_core::constants::*;
use skyshield_core::enums::{AircraftKind, EnemyKind};
use skyshield_core::types::Position;

use crate::world_setup;

/// Warhead an aircraft drops, if it drops anything.
pub fn payload(kind: AircraftKind) -> Option<EnemyKind> {
    match kind {
        AircraftKind::Bomber => Some(EnemyKind::Icbm),
        AircraftKind::Stealth => Some(EnemyKind::Fast),
        AircraftKind::Cargo | AircraftKind::Drone => None,
    }
}

/// Count down drop timers, release warheads at random ground points, and
/// retire aircraft that flew off the field. Returns the number of drops.
pub fn run(world: &mut World, rng: &mut impl Rng, wave_speed: f32) -> usize {
    let mut drops: Vec<(Position, EnemyKind)> = Vec::new();

    for (_entity, (pos, aircraft, life)) in
        world.query_mut::<(&Position, &mut Aircraft, &mut Lifecycle)>()
    {
        if life.dead {
            continue;
        }
        if pos.x < -AIRCRAFT_EXIT_MARGIN || pos.x > WORLD_WIDTH + AIRCRAFT_EXIT_MARGIN {
            life.dead = true;
            continue;
        }
        aircraft.drop_timer -= 1.0;
        let Some(kind) = payload(aircraft.kind) else {
            continue;
        };
        if aircraft.drop_timer <= 0.0 {
            aircraft.drop_timer = FIRST_DROP_MIN_TICKS + rng.gen::<f32>() * NEXT_DROP_SPAN_TICKS;
            drops.push((*pos, kind));
        }
    }

    let count = drops.len();
    for (origin, kind) in drops {
        let target = Position::new(
            rng.gen_range(ENEMY_LAUNCH_MARGIN..WORLD_WIDTH - ENEMY_LAUNCH_MARGIN),
            CITY_TARGET_Y,
        );
        world_setup::spawn_enemy_missile(world, rng, kind, origin, target, wave_speed);
    }
    count
}
