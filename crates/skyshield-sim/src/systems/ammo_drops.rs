//! Ammo crates released by downed cargo planes.

use hecs::World;

use skyshield_core::components::{AmmoDrop, Lifecycle};
use skyshield_core::constants::*;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::resources::GameState;

/// Age every crate and hand it to the first standing base that catches it.
pub fn run(world: &mut World, state: &mut GameState, events: &mut Vec<SimEvent>) {
    for (_entity, (pos, drop, life)) in
        world.query_mut::<(&Position, &mut AmmoDrop, &mut Lifecycle)>()
    {
        if life.dead {
            continue;
        }
        drop.life = drop.life.saturating_sub(1);

        let catcher = state.bases.iter().position(|b| {
            b.alive
                && (b.x - pos.x).abs() < AMMO_DROP_CATCH_X
                && (BASE_Y - pos.y).abs() < AMMO_DROP_CATCH_Y
        });
        if let Some(index) = catcher {
            let amount = state.resupply(index, AMMO_DROP_AMOUNT);
            events.push(SimEvent::AmmoDelivered {
                base_index: index,
                amount,
            });
            drop.life = 0;
        }

        if drop.life == 0 {
            life.dead = true;
        }
    }
}
