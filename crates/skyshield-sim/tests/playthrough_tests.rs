use skyshield_sim::core::commands::PlayerCommand;
use skyshield_sim::core::constants::MAX_AMMO;
use skyshield_sim::core::enums::{ExplosionPhase, Scene};
use skyshield_sim::core::events::SimEvent;
use skyshield_sim::core::state::GameStateSnapshot;
use skyshield_sim::{SimConfig, SimulationEngine};

/// Fires at the lowest warhead and clicks through every menu.
fn defend(snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
    match snap.scene {
        Scene::Title | Scene::Story | Scene::Cutscene => vec![PlayerCommand::Advance],
        Scene::WaveEnd if snap.trucks.is_empty() => vec![PlayerCommand::Advance],
        Scene::Upgrade => vec![PlayerCommand::DeployNextWave],
        Scene::Playing if snap.time.tick % 10 == 0 => snap
            .enemy_missiles
            .iter()
            .filter(|m| m.visible)
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
            .map(|m| PlayerCommand::Fire {
                x: m.position.x,
                y: m.position.y + 25.0,
            })
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn invariants_hold_through_a_playthrough() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 77,
        ..Default::default()
    });
    let mut snap = engine.tick();
    let mut last_score = 0;
    let mut last_wave = snap.wave;
    let mut waves_cleared = 0;

    for _ in 0..30_000 {
        engine.queue_commands(defend(&snap));
        snap = engine.tick();
        if snap.scene.is_terminal() {
            break;
        }

        for base in &snap.bases {
            assert!(base.ammo <= MAX_AMMO);
            if base.disabled {
                assert!(base.alive);
            }
        }
        for exp in &snap.explosions {
            assert!(exp.radius >= 0.0 && exp.radius <= exp.max_radius);
            if exp.phase == ExplosionPhase::Hold {
                assert_eq!(exp.radius, exp.max_radius);
            }
        }
        assert!(snap.score >= last_score, "score went down");
        assert!(snap.wave >= last_wave, "wave went down");
        if snap.scene != Scene::Playing {
            assert!(snap.enemy_missiles.is_empty());
            assert!(snap.aircraft.is_empty());
        }
        last_score = snap.score;
        last_wave = snap.wave;
        waves_cleared += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::SceneChanged { to: Scene::WaveEnd, .. }))
            .count();
    }

    assert!(waves_cleared >= 1, "autopilot never cleared a wave");
}

#[test]
fn undefended_city_line_falls() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 3,
        ..Default::default()
    });
    engine.queue_commands([PlayerCommand::Advance, PlayerCommand::Advance]);

    let mut lost = 0;
    let mut snap = engine.tick();
    for _ in 0..20_000 {
        if snap.scene.is_terminal() {
            break;
        }
        // Never fire; only click through menus.
        if snap.scene != Scene::Playing {
            engine.queue_commands(defend(&snap));
        }
        snap = engine.tick();
        lost += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::CityDestroyed { .. }))
            .count();
    }

    assert!(lost > 0);
    assert!(engine.state().cities.iter().filter(|c| c.alive).count() < 6);
}

#[test]
fn rejected_commands_are_reported() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::DeployNextWave,
        PlayerCommand::RebuildCity,
        PlayerCommand::Fire { x: 10.0, y: 10.0 },
    ]);
    let snap = engine.tick();
    assert_eq!(snap.scene, Scene::Title);
    assert_eq!(engine.last_rejections().len(), 3);

    engine.tick();
    assert!(engine.last_rejections().is_empty());
}
