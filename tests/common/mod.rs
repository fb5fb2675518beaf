//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::ecs::event::Event;
use bevy::prelude::*;

use skirmish::actors::Actor;
use skirmish::combat::Attacker;
use skirmish::core::{
    ActorRemoved, AttackPerformed, Died, Faction, HealthChanged, Knockback, Respawned, SimClock,
    SimConfig, SimSet,
};
use skirmish::health::Health;
use skirmish::pickups::PickupCollected;
use skirmish::respawn::{Respawner, SpawnPoint};
use skirmish::SkirmishPlugin;

/// Headless app with every simulation plugin and no periodic pickups.
pub fn create_sim_app() -> App {
    create_sim_app_with(SimConfig::default())
}

pub fn create_sim_app_with(config: SimConfig) -> App {
    let mut app = App::new();
    app.insert_resource(config).add_plugins(SkirmishPlugin);

    record::<HealthChanged>(&mut app);
    record::<Died>(&mut app);
    record::<Respawned>(&mut app);
    record::<AttackPerformed>(&mut app);
    record::<Knockback>(&mut app);
    record::<ActorRemoved>(&mut app);
    record::<PickupCollected>(&mut app);

    app
}

/// Notifications of type `E` seen since the last `drain`.
#[derive(Resource)]
pub struct Recorded<E: Event>(pub Vec<E>);

fn record_events<E: Event + Clone>(mut events: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(events.read().cloned());
}

/// Keep every `E` sent during a step, after the step's own consumers ran.
pub fn record<E: Event + Clone>(app: &mut App) {
    app.insert_resource(Recorded::<E>(Vec::new()))
        .add_systems(FixedUpdate, record_events::<E>.after(SimSet::Feedback));
}

/// Advance the clock by `ms` milliseconds and run one step.
pub fn step(app: &mut App, ms: u64) {
    skirmish::core::step_simulation(app.world_mut(), Duration::from_millis(ms));
}

pub fn now(app: &App) -> Duration {
    app.world().resource::<SimClock>().now()
}

pub fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
}

/// Take every recorded notification of type `E`.
pub fn drain<E: Event>(app: &mut App) -> Vec<E> {
    std::mem::take(&mut app.world_mut().resource_mut::<Recorded<E>>().0)
}

pub fn spawn_target(app: &mut App, faction: Faction, position: Vec3, max_health: f32) -> Entity {
    app.world_mut()
        .spawn((
            Actor {
                name: format!("{:?}", faction),
            },
            Health::new(max_health),
            faction,
            Transform::from_translation(position),
        ))
        .id()
}

pub fn spawn_attacker(
    app: &mut App,
    faction: Faction,
    position: Vec3,
    damage: f32,
    range: f32,
    cooldown_ms: u64,
) -> Entity {
    let entity = spawn_target(app, faction, position, 100.0);
    app.world_mut().entity_mut(entity).insert(Attacker::new(
        damage,
        range,
        Duration::from_millis(cooldown_ms),
        faction.hostile_targets(),
    ));
    entity
}

pub fn spawn_respawning(app: &mut App, position: Vec3, max_health: f32, delay_ms: u64) -> Entity {
    let entity = spawn_target(app, Faction::Enemy, position, max_health);
    app.world_mut().entity_mut(entity).insert(Respawner::new(
        Duration::from_millis(delay_ms),
        SpawnPoint::Home(position),
    ));
    entity
}

pub fn health(app: &App, entity: Entity) -> Health {
    app.world()
        .get::<Health>(entity)
        .cloned()
        .expect("entity has no Health")
}

pub fn position(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity has no Transform")
        .translation
}
