//! Skirmish - headless driver.
//!
//! Loads `assets/data/sim.ron` and the actor definitions, spawns a knight
//! between a few enemies and runs a scripted fight at a fixed step, logging
//! what happens.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use skirmish::actors::data::load_actor_definitions;
use skirmish::actors::{spawn_registered, ActorRegistry};
use skirmish::core::{
    step_simulation, ActorRemoved, AttackPerformed, AttackRequest, Died, FireRequest, Respawned,
    SimConfig, SimSet,
};
use skirmish::pickups::PickupCollected;

const SIM_CONFIG_PATH: &str = "assets/data/sim.ron";
const RUN_SECONDS: u32 = 30;

/// Entities the script drives.
#[derive(Resource, Default)]
struct Scene {
    player: Option<Entity>,
    melee_enemies: Vec<Entity>,
    archers: Vec<Entity>,
}

fn main() {
    let config = SimConfig::load(SIM_CONFIG_PATH).unwrap_or_else(|e| {
        eprintln!("Using default simulation config: {e}");
        SimConfig::default()
    });
    let step = config.step();
    let steps_per_second = config.fixed_hz.round() as u32;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .insert_resource(config)
        .add_plugins(skirmish::SkirmishPlugin)
        .init_resource::<Scene>()
        .add_systems(Startup, spawn_scene.after(load_actor_definitions))
        .add_systems(FixedUpdate, log_notifications.in_set(SimSet::Feedback));

    app.finish();
    app.cleanup();
    // Runs Startup: definitions and scene
    app.update();

    for tick in 0..RUN_SECONDS * steps_per_second {
        script(app.world_mut(), tick, steps_per_second);
        step_simulation(app.world_mut(), step);
    }

    info!("Simulation finished after {} steps", RUN_SECONDS * steps_per_second);
}

fn spawn_scene(mut commands: Commands, registry: Res<ActorRegistry>, mut scene: ResMut<Scene>) {
    scene.player = spawn_registered(&mut commands, &registry, "player", Vec3::ZERO);

    scene.melee_enemies = [("slime", 1.5), ("slime", -1.5), ("brute", 2.5)]
        .into_iter()
        .filter_map(|(actor_type, x)| {
            spawn_registered(&mut commands, &registry, actor_type, Vec3::new(x, 0.0, 0.0))
        })
        .collect();

    scene.archers = spawn_registered(&mut commands, &registry, "archer", Vec3::new(6.0, 0.0, 0.0))
        .into_iter()
        .collect();

    if scene.player.is_none() {
        warn!("No player definition loaded, the knight will not fight");
    }
}

/// Issue this step's scripted requests. Cooldowns reject most of them.
fn script(world: &mut World, tick: u32, steps_per_second: u32) {
    let scene = world.resource::<Scene>();
    let player = scene.player;
    let melee_enemies = scene.melee_enemies.clone();
    let archers = scene.archers.clone();

    if let Some(player) = player {
        if tick % (steps_per_second / 2).max(1) == 0 {
            world.send_event(AttackRequest { attacker: player });
        }
    }

    for attacker in melee_enemies {
        world.send_event(AttackRequest { attacker });
    }

    for shooter in archers {
        world.send_event(FireRequest {
            shooter,
            direction: None,
        });
    }
}

fn log_notifications(
    mut attacks: EventReader<AttackPerformed>,
    mut deaths: EventReader<Died>,
    mut respawns: EventReader<Respawned>,
    mut removals: EventReader<ActorRemoved>,
    mut pickups: EventReader<PickupCollected>,
) {
    for event in attacks.read() {
        debug!("{:?} swung and hit {}", event.actor, event.hit_count);
    }
    for event in deaths.read() {
        info!("{:?} died, killed by {:?}", event.actor, event.killed_by);
    }
    for event in respawns.read() {
        info!("{:?} is back at {}", event.actor, event.position);
    }
    for event in removals.read() {
        info!("{:?} is gone for good", event.actor);
    }
    for event in pickups.read() {
        info!("{:?} picked up {:?} (+{})", event.collector, event.pickup, event.healed);
    }
}
