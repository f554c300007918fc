//! Supply truck system: resupply bases in passing, take hostile hits.

use hecs::World;
use rand::Rng;

use skyshield_core::components::{Explosion, Lifecycle, SupplyTruck};
use skyshield_core::constants::*;
use skyshield_core::enums::ExplosionSource;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::resources::GameState;
use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut impl Rng,
    state: &mut GameState,
    payload: u32,
    next_explosion_id: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    let hostile: Vec<(u32, Position, f32)> = world
        .query::<(&Position, &Explosion, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, exp, life))| !life.dead && !exp.source.is_player())
        .map(|(_, (pos, exp, _))| (exp.id, *pos, exp.radius))
        .collect();

    let mut wrecks: Vec<Position> = Vec::new();

    for (_entity, (pos, truck, life)) in
        world.query_mut::<(&Position, &mut SupplyTruck, &mut Lifecycle)>()
    {
        if life.dead {
            continue;
        }

        for index in 0..state.bases.len() {
            let base = &state.bases[index];
            if !base.alive
                || truck.served_bases.contains(&index)
                || (pos.x - base.x).abs() >= TRUCK_SERVICE_RANGE
            {
                continue;
            }
            truck.served_bases.push(index);
            let amount = state.resupply(index, payload);
            events.push(SimEvent::AmmoDelivered {
                base_index: index,
                amount,
            });
        }

        for &(id, center, radius) in &hostile {
            if truck.hit_by.contains(&id) || center.distance_to(pos) > radius {
                continue;
            }
            truck.hit_by.push(id);
            truck.hp = truck.hp.saturating_sub(1);
            if truck.hp == 0 {
                life.dead = true;
                wrecks.push(*pos);
                events.push(SimEvent::TruckDestroyed { position: *pos });
                break;
            }
        }

        if pos.x > WORLD_WIDTH + TRUCK_ENTRY_MARGIN {
            life.dead = true;
        }
    }

    for point in wrecks {
        world_setup::spawn_explosion(
            world,
            rng,
            next_explosion_id,
            point,
            WRECK_BLAST_RADIUS,
            ExplosionSource::Wreck,
        );
    }
}
