//! Entity spawn factories.
//!
//! Each factory builds the component bundle for one kind of entity. Systems
//! and the engine never assemble bundles by hand.

use std::f32::consts::TAU;

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use skyshield_campaign::upgrades::Modifiers;
use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::types::{Position, Velocity};

/// Unscaled flight speed of an enemy warhead.
pub fn enemy_base_speed(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Fast => FAST_SPEED,
        EnemyKind::Nuke => NUKE_SPEED,
        EnemyKind::Emp => EMP_SPEED,
        EnemyKind::Icbm | EnemyKind::Mirv | EnemyKind::Decoy => ICBM_SPEED,
    }
}

pub fn warhead_blast_radius(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Nuke => NUKE_BLAST_RADIUS,
        EnemyKind::Emp => EMP_BLAST_RADIUS,
        _ => WARHEAD_BLAST_RADIUS,
    }
}

/// Spawn a player interceptor flying from `origin` to `target`.
pub fn spawn_player_missile(
    world: &mut World,
    origin: Position,
    target: Position,
    speed: f32,
    blast_radius: f32,
    base_index: usize,
) -> Entity {
    world.spawn((
        origin,
        Velocity::toward(origin, target, speed),
        PlayerMissile {
            target,
            blast_radius,
            base_index,
        },
        Lifecycle::default(),
    ))
}

/// Spawn an enemy warhead. `speed_multiplier` scales the kind's base speed.
/// MIRVs draw their split altitude here; decoys start flickering.
pub fn spawn_enemy_missile(
    world: &mut World,
    rng: &mut impl Rng,
    kind: EnemyKind,
    origin: Position,
    target: Position,
    speed_multiplier: f32,
) -> Entity {
    let speed = enemy_base_speed(kind) * speed_multiplier;
    let mut builder = EntityBuilder::new();
    builder.add(origin).add(Velocity::toward(origin, target, speed)).add(EnemyMissile {
        kind,
        target,
        blast_radius: warhead_blast_radius(kind),
    });
    builder.add(Lifecycle::default());

    match kind {
        EnemyKind::Mirv => {
            builder.add(MirvWarhead {
                split_altitude: MIRV_SPLIT_Y_MIN + rng.gen::<f32>() * MIRV_SPLIT_Y_SPAN,
                split: false,
            });
        }
        EnemyKind::Decoy => {
            builder.add(Flicker {
                cadence: FlickerCadence::Alternating {
                    period: DECOY_FLICKER_PERIOD,
                },
                timer: 0,
                visible: true,
            });
        }
        _ => {}
    }
    world.spawn(builder.build())
}

/// Spawn an aircraft on a random side of the playfield.
/// `y_offset` stacks drones of one squadron.
pub fn spawn_aircraft(
    world: &mut World,
    rng: &mut impl Rng,
    kind: AircraftKind,
    wave_speed: f32,
    y_offset: f32,
) -> Entity {
    let from_left = rng.gen_bool(0.5);
    let x = if from_left {
        -AIRCRAFT_ENTRY_MARGIN
    } else {
        WORLD_WIDTH + AIRCRAFT_ENTRY_MARGIN
    };
    let y = AIRCRAFT_ALTITUDE_MIN + rng.gen::<f32>() * AIRCRAFT_ALTITUDE_SPAN + y_offset;
    let base_speed = if kind == AircraftKind::Drone {
        DRONE_SPEED
    } else {
        AIRCRAFT_SPEED
    };
    let speed = base_speed * (0.8 + 0.3 * wave_speed);
    let hp = if kind == AircraftKind::Drone {
        DRONE_HP
    } else {
        AIRCRAFT_HP
    };

    let mut builder = EntityBuilder::new();
    builder
        .add(Position::new(x, y))
        .add(Velocity::new(if from_left { speed } else { -speed }, 0.0))
        .add(Aircraft {
            kind,
            hp,
            drop_timer: FIRST_DROP_MIN_TICKS + rng.gen::<f32>() * FIRST_DROP_SPAN_TICKS,
        })
        .add(Lifecycle::default());
    if kind == AircraftKind::Stealth {
        builder.add(Flicker {
            cadence: FlickerCadence::MostlyVisible {
                period: STEALTH_FLICKER_PERIOD,
            },
            timer: 0,
            visible: true,
        });
    }
    world.spawn(builder.build())
}

/// Spawn an explosion and its debris particles.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut impl Rng,
    next_explosion_id: &mut u32,
    center: Position,
    max_radius: f32,
    source: ExplosionSource,
) -> Entity {
    let id = *next_explosion_id;
    *next_explosion_id = next_explosion_id.wrapping_add(1);

    let particle_count = (max_radius / PARTICLE_RADIUS_DIVISOR).floor() as u32;
    for _ in 0..particle_count {
        spawn_particle(world, rng, center);
    }

    world.spawn((
        center,
        Explosion {
            id,
            radius: EXPLOSION_START_RADIUS,
            max_radius,
            phase: ExplosionPhase::Grow,
            hold_remaining: EXPLOSION_HOLD_TICKS,
            source,
            damage_applied: false,
        },
        Lifecycle::default(),
    ))
}

fn spawn_particle(world: &mut World, rng: &mut impl Rng, center: Position) -> Entity {
    let angle = rng.gen::<f32>() * TAU;
    let speed = 1.0 + rng.gen::<f32>() * 3.0;
    let life = 20 + rng.gen_range(0..20);
    let size = 2.0 + rng.gen::<f32>() * 3.0;
    world.spawn((
        center,
        Velocity::new(angle.cos() * speed, angle.sin() * speed),
        Particle {
            life,
            max_life: life,
            size,
        },
        Lifecycle::default(),
    ))
}

/// Spawn the post-wave supply truck at the left edge.
pub fn spawn_truck(world: &mut World, modifiers: &Modifiers) -> Entity {
    world.spawn((
        Position::new(-TRUCK_ENTRY_MARGIN, TRUCK_Y),
        Velocity::new(modifiers.truck_speed, 0.0),
        SupplyTruck {
            hp: modifiers.truck_hp,
            served_bases: Vec::new(),
            hit_by: Vec::new(),
        },
        Lifecycle::default(),
    ))
}

pub fn spawn_ammo_drop(world: &mut World, position: Position) -> Entity {
    world.spawn((
        position,
        Velocity::new(0.0, AMMO_DROP_FALL_SPEED),
        AmmoDrop {
            life: AMMO_DROP_LIFE_TICKS,
        },
        Lifecycle::default(),
    ))
}

pub fn spawn_trail(world: &mut World, position: Position, hostile: bool) -> Entity {
    world.spawn((
        position,
        Trail {
            life: TRAIL_LIFE_TICKS,
            hostile,
        },
        Lifecycle::default(),
    ))
}
