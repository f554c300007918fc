//! Simulation constants and tuning parameters.
//!
//! Units are screen pixels and simulation ticks (one tick per rendered frame, nominally 60 Hz).

/// Nominal frame rate the tick-based timings were tuned for.
pub const NOMINAL_TICK_RATE: u32 = 60;

// --- Playfield ---

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 500.0;
pub const GROUND_Y: f32 = 440.0;
/// Launch rail height of the missile bases.
pub const BASE_Y: f32 = GROUND_Y - 10.0;
/// Aim height for warheads targeting a city.
pub const CITY_TARGET_Y: f32 = GROUND_Y - 10.0;

pub const BASE_POSITIONS: [f32; 3] = [120.0, 400.0, 680.0];
pub const CITY_POSITIONS: [f32; 6] = [195.0, 265.0, 335.0, 465.0, 535.0, 605.0];

// --- Ammo ---

pub const STARTING_AMMO: u32 = 10;
pub const MAX_AMMO: u32 = 20;
/// Extra starting ammo per Extra Ammo level.
pub const EXTRA_AMMO_PER_LEVEL: u32 = 3;

// --- Player missiles ---

pub const PLAYER_MISSILE_BASE_SPEED: f32 = 5.0;
pub const PLAYER_MISSILE_SPEED_PER_LEVEL: f32 = 1.5;
/// Player missiles leave the rail this far above the base.
pub const PLAYER_LAUNCH_OFFSET_Y: f32 = 20.0;
pub const PLAYER_ARRIVAL_EPSILON: f32 = 6.0;
pub const PLAYER_BLAST_RADIUS: f32 = 30.0;
pub const PLAYER_BLAST_RADIUS_PER_LEVEL: f32 = 7.0;
/// Dual warhead secondary blast, relative to the primary.
pub const DUAL_WARHEAD_RADIUS_FACTOR: f32 = 1.5;
pub const DUAL_WARHEAD_DELAY_TICKS: u64 = 18;
pub const CHAIN_REACTION_CHANCE: f64 = 0.25;
pub const CHAIN_REACTION_RADIUS: f32 = 20.0;
pub const CHAIN_REACTION_RADIUS_PER_LEVEL: f32 = 5.0;

// --- Enemy missiles ---

pub const ENEMY_SPAWN_Y: f32 = -10.0;
pub const ENEMY_LAUNCH_MARGIN: f32 = 50.0;
pub const ENEMY_ARRIVAL_EPSILON: f32 = 8.0;
pub const ICBM_SPEED: f32 = 0.7;
pub const FAST_SPEED: f32 = 1.4;
pub const NUKE_SPEED: f32 = 0.35;
pub const EMP_SPEED: f32 = 0.6;
pub const WARHEAD_BLAST_RADIUS: f32 = 30.0;
pub const EMP_BLAST_RADIUS: f32 = 60.0;
pub const NUKE_BLAST_RADIUS: f32 = 90.0;

/// Minimum spawn delay for a wave's missiles (ticks).
pub const SPAWN_DELAY_MIN: u32 = 60;
/// Uniform span added to the minimum spawn delay (ticks).
pub const SPAWN_DELAY_SPAN: u32 = 400;

// --- MIRV ---

pub const MIRV_SPLIT_Y_MIN: f32 = 150.0;
pub const MIRV_SPLIT_Y_SPAN: f32 = 100.0;
pub const MIRV_CHILDREN_MIN: u32 = 2;
pub const MIRV_CHILDREN_MAX: u32 = 3;
/// Horizontal scatter of child targets around the parent target (total width).
pub const MIRV_TARGET_SCATTER: f32 = 200.0;
pub const MIRV_TARGET_MARGIN: f32 = 10.0;
pub const MIRV_CHILD_SPEED_BONUS: f32 = 1.2;

// --- Flicker cadence ---

pub const DECOY_FLICKER_PERIOD: u32 = 4;
pub const STEALTH_FLICKER_PERIOD: u32 = 6;

// --- Aircraft ---

pub const AIRCRAFT_ENTRY_MARGIN: f32 = 40.0;
pub const AIRCRAFT_EXIT_MARGIN: f32 = 60.0;
pub const AIRCRAFT_ALTITUDE_MIN: f32 = 60.0;
pub const AIRCRAFT_ALTITUDE_SPAN: f32 = 100.0;
pub const AIRCRAFT_SPEED: f32 = 1.2;
pub const DRONE_SPEED: f32 = 2.0;
pub const AIRCRAFT_HP: u32 = 2;
pub const DRONE_HP: u32 = 1;
pub const FIRST_DROP_MIN_TICKS: f32 = 120.0;
pub const FIRST_DROP_SPAN_TICKS: f32 = 180.0;
pub const NEXT_DROP_SPAN_TICKS: f32 = 120.0;

pub const BOMBER_FIRST_TICK: u64 = 120;
pub const BOMBER_INTERVAL_TICKS: u64 = 180;
pub const STEALTH_FIRST_TICK: u64 = 300;
pub const STEALTH_INTERVAL_TICKS: u64 = 240;
pub const CARGO_FIRST_TICK: u64 = 180;
pub const CARGO_INTERVAL_TICKS: u64 = 300;
pub const DRONE_SQUADRON_TICK: u64 = 420;
/// Drones per configured drone count.
pub const DRONES_PER_UNIT: u32 = 4;
pub const DRONE_ROW_SPACING: f32 = 12.0;
pub const DRONE_ROW_OFFSET: f32 = 24.0;

// --- Ammo drops ---

pub const AMMO_DROP_LIFE_TICKS: u32 = 300;
pub const AMMO_DROP_FALL_SPEED: f32 = 1.5;
pub const AMMO_DROP_AMOUNT: u32 = 5;
pub const AMMO_DROP_CATCH_X: f32 = 20.0;
pub const AMMO_DROP_CATCH_Y: f32 = 30.0;

// --- Explosions ---

pub const EXPLOSION_START_RADIUS: f32 = 4.0;
pub const EXPLOSION_GROW_RATE: f32 = 3.0;
pub const EXPLOSION_HOLD_TICKS: u32 = 18;
pub const EXPLOSION_SHRINK_RATE: f32 = 2.0;
pub const WRECK_BLAST_RADIUS: f32 = 25.0;

// --- Screen shake ---

pub const SHAKE_NUKE: u32 = 12;
pub const SHAKE_IMPACT: u32 = 5;

// --- Bases ---

pub const EMP_LOCKOUT_TICKS: u32 = 600;
pub const EMP_HARDENED_LOCKOUT_TICKS: u32 = 180;
pub const AUTO_TURRET_COOLDOWN_TICKS: u32 = 240;

// --- Supply trucks ---

pub const TRUCK_ENTRY_MARGIN: f32 = 30.0;
pub const TRUCK_Y: f32 = GROUND_Y - 8.0;
pub const TRUCK_SPEED: f32 = 1.5;
pub const FAST_TRUCK_SPEED: f32 = 2.5;
pub const TRUCK_SERVICE_RANGE: f32 = 5.0;
pub const TRUCK_PAYLOAD: u32 = 3;
pub const TRUCK_PAYLOAD_PER_LEVEL: u32 = 2;

// --- Scoring ---

pub const SCORE_NUKE: u32 = 500;
pub const SCORE_MIRV: u32 = 200;
pub const SCORE_FAST: u32 = 150;
pub const SCORE_MISSILE: u32 = 100;
pub const CREDITS_NUKE: u32 = 50;
pub const CREDITS_MISSILE: u32 = 10;
pub const SCORE_STEALTH: u32 = 250;
pub const SCORE_CARGO: u32 = 50;
pub const SCORE_DRONE: u32 = 75;
pub const SCORE_BOMBER: u32 = 100;
pub const CREDITS_AIRCRAFT: u32 = 15;

pub const BONUS_PER_AMMO: u32 = 50;
pub const BONUS_PER_CITY: u32 = 200;
pub const CREDITS_PER_CITY: u32 = 25;
pub const CREDITS_PER_KILL: u32 = 5;

pub const CITY_REBUILD_COST: u32 = 1500;
pub const BASE_REBUILD_COST: u32 = 1000;

// --- Campaign ---

/// Deploying a wave beyond this number ends the campaign in victory.
pub const VICTORY_WAVE: u32 = 15;
/// Delay between deploying the final wave and the victory screen.
pub const VICTORY_DELAY_TICKS: u64 = 180;
/// Story crawl length before it ends on its own (700 px at 0.6 px/tick).
pub const STORY_CRAWL_TICKS: u64 = 1167;
pub const STORY_EXIT_DELAY_TICKS: u64 = 90;

// --- Cosmetics ---

pub const TRAIL_LIFE_TICKS: u32 = 30;
pub const PARTICLE_GRAVITY: f32 = 0.05;
/// One particle per this many pixels of blast radius.
pub const PARTICLE_RADIUS_DIVISOR: f32 = 4.0;

// --- Alerts ---

pub const ALERT_SHORT_TICKS: u32 = 90;
pub const ALERT_LONG_TICKS: u32 = 120;
