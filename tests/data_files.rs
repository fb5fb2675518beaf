//! The shipped RON data loads and builds working actors.

mod common;

use bevy::prelude::*;
use common::*;
use skirmish::actors::{spawn_actor, ActorRegistry, Hurtbox};
use skirmish::combat::Attacker;
use skirmish::core::{DamageEvent, Faction, SimConfig};
use skirmish::projectiles::Shooter;
use skirmish::respawn::{Respawner, SpawnPoint};

#[test]
fn test_shipped_definitions_load() {
    let registry = ActorRegistry::load_dir("assets/data/actors").unwrap();

    for actor_type in ["player", "slime", "archer", "brute"] {
        assert!(registry.get(actor_type).is_some(), "missing {}", actor_type);
    }

    let player = registry.get("player").unwrap();
    assert_eq!(player.faction, Faction::Player);
    assert!(player.to_attacker().is_some());
    assert!(player.to_shooter().is_none());

    let archer = registry.get("archer").unwrap();
    assert!(archer.to_shooter().is_some());
    assert!(archer.to_attacker().is_none());
}

#[test]
fn test_shipped_sim_config_loads() {
    let config = SimConfig::load("assets/data/sim.ron").unwrap();
    assert!(config.fixed_hz > 0.0);
    assert!(config.pickups.is_some());
}

#[test]
fn test_spawn_actor_from_definition() {
    let registry = ActorRegistry::load_dir("assets/data/actors").unwrap();
    let mut app = create_sim_app();
    let home = Vec3::new(-2.0, 0.0, 0.0);

    let knight = {
        let mut commands = app.world_mut().commands();
        spawn_actor(&mut commands, registry.get("player").unwrap(), home)
    };
    let brute = {
        let mut commands = app.world_mut().commands();
        spawn_actor(&mut commands, registry.get("brute").unwrap(), Vec3::new(3.0, 0.0, 0.0))
    };
    app.world_mut().flush();

    let world = app.world();
    assert!(world.get::<Attacker>(knight).is_some());
    assert!(world.get::<Shooter>(knight).is_none());
    assert_eq!(world.get::<Faction>(knight), Some(&Faction::Player));
    assert_eq!(world.get::<Hurtbox>(knight).map(|h| h.radius), Some(0.5));
    assert_eq!(
        world.get::<Respawner>(knight).map(|r| r.spawn),
        Some(SpawnPoint::Home(home))
    );
    assert_eq!(health(&app, knight).maximum(), 100.0);

    // The brute never comes back
    send(
        &mut app,
        DamageEvent {
            target: brute,
            source: Some(knight),
            amount: 1000.0,
        },
    );
    step(&mut app, 16);
    assert!(!app.world().entities().contains(brute));
}
