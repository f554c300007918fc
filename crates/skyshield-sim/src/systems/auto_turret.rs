//! Auto-turret system: upgraded bases periodically fire at the nearest enemy missile.

use hecs::World;

use skyshield_core::components::{EnemyMissile, Lifecycle};
use skyshield_core::constants::{AUTO_TURRET_COOLDOWN_TICKS, BASE_Y};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::resources::{can_fire, GameState};
use crate::world_setup;

/// Count down each armed base's cooldown; on expiry fire exactly like a
/// manual shot aimed at the nearest live enemy missile, then restart the
/// cooldown whether or not anything was in the sky.
pub fn run(world: &mut World, state: &mut GameState, events: &mut Vec<SimEvent>) {
    let modifiers = state.modifiers();

    let targets: Vec<Position> = world
        .query::<(&Position, &EnemyMissile, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, life))| !life.dead)
        .map(|(_, (pos, _, _))| *pos)
        .collect();

    for index in 0..state.bases.len() {
        let base = &mut state.bases[index];
        if !base.auto_turret || !can_fire(base) {
            continue;
        }
        base.auto_turret_timer += 1;
        if base.auto_turret_timer < AUTO_TURRET_COOLDOWN_TICKS {
            continue;
        }
        base.auto_turret_timer = 0;

        let rail = Position::new(base.x, BASE_Y);
        let nearest = targets.iter().copied().min_by(|a, b| {
            rail.distance_to(a)
                .partial_cmp(&rail.distance_to(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let Some(target) = nearest else {
            continue;
        };
        let Some(origin) = state.draw_round(index) else {
            continue;
        };
        world_setup::spawn_player_missile(
            world,
            origin,
            target,
            modifiers.missile_speed,
            modifiers.blast_radius,
            index,
        );
        events.push(SimEvent::MissileLaunched {
            base_index: index,
            automatic: true,
        });
    }
}
