//! skyshield-headless: play SKYSHIELD without a renderer.
//!
//! Usage:
//!   skyshield-headless --seed 7 --max-ticks 200000
//!   skyshield-headless --config sim.json --report report.json
//!
//! Set RUST_LOG=info for per-wave results, debug for every rejected command.

mod autopilot;

use std::fs;
use std::path::PathBuf;
use std::process;

use skyshield_sim::core::enums::Scene;
use skyshield_sim::core::events::SimEvent;
use skyshield_sim::{SimConfig, SimulationEngine};

use autopilot::Autopilot;

const DEFAULT_MAX_TICKS: u64 = 500_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config = match parse_path(&args, "--config") {
        Some(path) => load_config(&path),
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_number(&args, "--seed") {
        config.seed = seed;
    }
    let max_ticks = parse_number(&args, "--max-ticks").unwrap_or(DEFAULT_MAX_TICKS);

    let report = run(config, max_ticks);

    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize report: {e}");
            process::exit(1);
        }
    };
    match parse_path(&args, "--report") {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Error: cannot write {}: {e}", path.display());
                process::exit(1);
            }
            log::info!("report written to {}", path.display());
        }
        None => println!("{json}"),
    }
}

fn print_usage() {
    eprintln!(
        "skyshield-headless: autopilot playthrough of SKYSHIELD\n\
         \n\
         Options:\n\
         \n\
           --seed <N>        RNG seed (overrides the config file)\n\
           --config <path>   SimConfig JSON file (seed, victory_wave)\n\
           --max-ticks <N>   Stop after N ticks (default: {DEFAULT_MAX_TICKS})\n\
           --report <path>   Write the final report here instead of stdout\n"
    );
}

/// Play until the campaign ends or the tick budget runs out.
fn run(config: SimConfig, max_ticks: u64) -> serde_json::Value {
    log::info!("starting playthrough: seed {}, victory after wave {}", config.seed, config.victory_wave);
    let seed = config.seed;
    let mut engine = SimulationEngine::new(config);
    let mut pilot = Autopilot::new();
    let mut waves = Vec::new();

    let mut snap = engine.tick();
    while snap.time.tick < max_ticks && !snap.scene.is_terminal() {
        engine.queue_commands(pilot.decide(&snap));
        snap = engine.tick();

        for event in &snap.events {
            match event {
                SimEvent::CityDestroyed { city_index } => {
                    log::info!("wave {}: city {} lost", snap.wave, city_index);
                }
                SimEvent::BaseDestroyed { base_index } => {
                    log::info!("wave {}: base {} lost", snap.wave, base_index);
                }
                _ => {}
            }
        }
        if snap.scene == Scene::WaveEnd
            && snap
                .events
                .iter()
                .any(|e| matches!(e, SimEvent::SceneChanged { to: Scene::WaveEnd, .. }))
        {
            if let Some(summary) = &snap.wave_summary {
                log::info!(
                    "wave {} cleared: {} kills, {} cities, {} ammo left, score {}",
                    summary.wave,
                    summary.enemies_destroyed,
                    summary.cities_saved,
                    summary.ammo_remaining,
                    snap.score
                );
                waves.push(summary.clone());
            }
        }
    }

    if !snap.scene.is_terminal() {
        log::warn!("tick budget of {} exhausted during {:?}", max_ticks, snap.scene);
    }
    log::info!(
        "finished in {:?} on wave {} with score {}",
        snap.scene,
        snap.wave,
        snap.score
    );

    serde_json::json!({
        "seed": seed,
        "outcome": snap.scene,
        "wave": snap.wave,
        "score": snap.score,
        "credits": snap.credits,
        "ticks": snap.time.tick,
        "upgrades": snap.upgrades,
        "waves": waves,
    })
}

fn load_config(path: &PathBuf) -> SimConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid config {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_number(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return match args[i + 1].parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    eprintln!("Error: {flag} expects a number, got {}", args[i + 1]);
                    process::exit(1);
                }
            };
        }
    }
    None
}
