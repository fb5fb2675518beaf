//! Respawn scheduling state.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

/// Axis along which a spawn region is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SpawnAxis {
    #[default]
    X,
    Y,
}

/// A line segment of spawn positions.
///
/// The sampled coordinate is uniform in `[min, max]` on `axis`; the other
/// coordinates are taken from `anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRegion {
    pub axis: SpawnAxis,
    pub min: f32,
    pub max: f32,
    pub anchor: Vec3,
}

impl SpawnRegion {
    pub fn new(axis: SpawnAxis, min: f32, max: f32, anchor: Vec3) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Self {
            axis,
            min,
            max,
            anchor,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        // Degenerate or non-finite bounds fall back to the anchor
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return self.anchor;
        }

        let value = if self.min < self.max {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        };

        let mut position = self.anchor;
        match self.axis {
            SpawnAxis::X => position.x = value,
            SpawnAxis::Y => position.y = value,
        }
        position
    }
}

/// Where an actor reappears.
///
/// Players conventionally use `Home`, other actors a `Region`; the choice is
/// configuration only and both go through the same respawn logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnPoint {
    Home(Vec3),
    Region(SpawnRegion),
}

impl SpawnPoint {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match self {
            SpawnPoint::Home(position) => *position,
            SpawnPoint::Region(region) => region.sample(rng),
        }
    }
}

/// What `Respawner::on_death` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathResolution {
    /// A respawn is now pending at `deadline`.
    Scheduled { deadline: Duration },
    /// A respawn was already pending; nothing changed.
    AlreadyPending,
    /// This actor does not come back; remove it.
    Remove,
}

/// Respawn policy and pending timer of an actor.
///
/// At most one respawn is pending at a time. The timer is plain deadline
/// state polled every step, so it can be cancelled and inspected.
#[derive(Component, Debug, Clone)]
pub struct Respawner {
    pub can_respawn: bool,
    pub delay: Duration,
    pub spawn: SpawnPoint,
    pending: Option<Duration>,
}

impl Respawner {
    pub fn new(delay: Duration, spawn: SpawnPoint) -> Self {
        Self {
            can_respawn: true,
            delay,
            spawn,
            pending: None,
        }
    }

    /// An actor that is removed on death instead of coming back.
    pub fn never(spawn: SpawnPoint) -> Self {
        Self {
            can_respawn: false,
            ..Self::new(Duration::ZERO, spawn)
        }
    }

    pub fn pending_deadline(&self) -> Option<Duration> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// React to the owner's death at `now`.
    pub fn on_death(&mut self, now: Duration) -> DeathResolution {
        if self.pending.is_some() {
            return DeathResolution::AlreadyPending;
        }

        if !self.can_respawn {
            return DeathResolution::Remove;
        }

        let deadline = now.saturating_add(self.delay);
        self.pending = Some(deadline);
        DeathResolution::Scheduled { deadline }
    }

    /// Clear and report the pending respawn if its deadline has passed.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Make a respawn due right now, replacing any later deadline.
    pub fn force(&mut self, now: Duration) {
        self.pending = Some(now);
    }

    /// Drop the pending respawn. Returns the deadline that was cancelled.
    pub fn cancel(&mut self) -> Option<Duration> {
        self.pending.take()
    }

    pub fn pick_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        self.spawn.pick(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_single_pending_timer() {
        let mut respawner = Respawner::new(secs(3.0), SpawnPoint::Home(Vec3::ZERO));

        assert_eq!(
            respawner.on_death(secs(1.0)),
            DeathResolution::Scheduled { deadline: secs(1.0) + secs(3.0) }
        );
        assert_eq!(respawner.on_death(secs(2.0)), DeathResolution::AlreadyPending);
        assert_eq!(respawner.pending_deadline(), Some(secs(1.0) + secs(3.0)));
    }

    #[test]
    fn test_due_only_after_deadline_and_once() {
        let mut respawner = Respawner::new(Duration::from_secs(3), SpawnPoint::Home(Vec3::ZERO));
        respawner.on_death(Duration::ZERO);

        assert!(!respawner.take_due(Duration::from_millis(2999)));
        assert!(respawner.take_due(Duration::from_secs(3)));
        assert!(!respawner.take_due(Duration::from_secs(4)));
        assert!(!respawner.is_pending());
    }

    #[test]
    fn test_non_respawning_actor_is_removed() {
        let mut respawner = Respawner::never(SpawnPoint::Home(Vec3::ZERO));
        assert_eq!(respawner.on_death(Duration::ZERO), DeathResolution::Remove);
        assert!(!respawner.is_pending());
    }

    #[test]
    fn test_cancel_and_force() {
        let mut respawner = Respawner::new(Duration::from_secs(5), SpawnPoint::Home(Vec3::ZERO));
        respawner.on_death(Duration::ZERO);

        assert_eq!(respawner.cancel(), Some(Duration::from_secs(5)));
        assert!(!respawner.take_due(Duration::from_secs(10)));

        respawner.force(Duration::from_secs(1));
        assert!(respawner.take_due(Duration::from_secs(1)));
    }

    #[test]
    fn test_region_samples_on_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let region = SpawnRegion::new(SpawnAxis::X, 10.0, -10.0, Vec3::new(0.0, 2.0, 0.5));
        assert_eq!(region.min, -10.0);

        for _ in 0..100 {
            let position = region.sample(&mut rng);
            assert!((-10.0..=10.0).contains(&position.x));
            assert_eq!(position.y, 2.0);
            assert_eq!(position.z, 0.5);
        }
    }

    #[test]
    fn test_degenerate_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let anchor = Vec3::new(1.0, 1.0, 0.0);

        let point = SpawnRegion::new(SpawnAxis::Y, 4.0, 4.0, anchor);
        assert_eq!(point.sample(&mut rng), Vec3::new(1.0, 4.0, 0.0));

        let broken = SpawnRegion::new(SpawnAxis::X, f32::NAN, 3.0, anchor);
        assert_eq!(broken.sample(&mut rng), anchor);
    }
}
