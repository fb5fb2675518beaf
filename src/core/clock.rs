//! Simulation clock and fixed-step driving.
//!
//! Every timing rule in the crate (attack cooldowns, respawn deadlines,
//! projectile lifetimes, pickup spawning) reads `SimClock::now()`. The clock
//! only moves forward, once per fixed simulation step.

use std::time::Duration;

use bevy::ecs::component::Tick;
use bevy::ecs::event::EventRegistry;
use bevy::prelude::*;

/// Monotonic simulation time source.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimClock {
    elapsed: Duration,
    step: Duration,
    tick: u64,
}

impl SimClock {
    /// Time since the simulation started.
    pub fn now(&self) -> Duration {
        self.elapsed
    }

    /// Length of the most recent step.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of steps taken so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Move the clock forward by one step of length `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.step = dt;
        self.tick += 1;
    }
}

/// Advance the clock from Bevy's fixed timestep.
///
/// Runs in `FixedFirst`, so every `FixedUpdate` pass sees a fresh `now()`.
pub fn advance_sim_clock(time: Res<Time<Fixed>>, mut clock: ResMut<SimClock>) {
    clock.advance(time.delta());
}

/// Drive one simulation step by hand.
///
/// Advances the clock by `dt`, runs `FixedUpdate` once and then rotates the
/// event buffers. This is the deterministic driver used by the headless
/// binary and the tests; it does not depend on wall-clock time.
///
/// Events survive one rotation, so a reader running every step sees each
/// event exactly once and nothing is kept for longer than two steps.
pub fn step_simulation(world: &mut World, dt: Duration) {
    world.resource_mut::<SimClock>().advance(dt);
    world.run_schedule(FixedUpdate);
    rotate_events(world);
}

/// Swap the double buffers of every registered event type.
///
/// `First` does this under `App::update`, which a hand-driven step never runs.
fn rotate_events(world: &mut World) {
    if !world.contains_resource::<EventRegistry>() {
        return;
    }

    world.resource_scope(|world, mut registry: Mut<EventRegistry>| {
        registry.run_updates(world, Tick::new(0));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_monotonically() {
        let mut clock = SimClock::default();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.tick(), 0);

        clock.advance(Duration::from_millis(100));
        clock.advance(Duration::from_millis(250));

        assert_eq!(clock.now(), Duration::from_millis(350));
        assert_eq!(clock.step(), Duration::from_millis(250));
        assert_eq!(clock.tick(), 2);
    }

    #[derive(Event)]
    struct Ping;

    #[test]
    fn test_step_rotates_event_buffers() {
        let mut app = App::new();
        app.init_resource::<SimClock>()
            .add_event::<Ping>()
            .add_systems(FixedUpdate, || {});

        for _ in 0..1000 {
            app.world_mut().send_event(Ping);
            step_simulation(app.world_mut(), Duration::from_millis(16));
        }

        assert!(app.world().resource::<Events<Ping>>().len() <= 2);
    }
}
