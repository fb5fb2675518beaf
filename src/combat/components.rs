//! Combat-related components.

use std::collections::HashSet;
use std::time::Duration;

use bevy::prelude::*;

use super::hit_query::{HitQuery, HitShape};
use crate::actors::Facing;
use crate::core::FactionMask;

/// Minimum simulation time between two uses of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cooldown {
    duration: Duration,
    last: Option<Duration>,
}

impl Cooldown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the action last went through, `None` if never.
    pub fn last_triggered(&self) -> Option<Duration> {
        self.last
    }

    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last {
            None => true,
            Some(last) => now >= last.saturating_add(self.duration),
        }
    }

    /// Start the cooldown if it is ready. A rejected call leaves the
    /// previous timestamp untouched, so spamming cannot push it back.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last = Some(now);
        true
    }
}

/// One target damaged by a swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub target: Entity,
    pub damage: f32,
}

/// What happened when an attack was attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum AttackOutcome {
    /// Gate closed; nothing changed.
    OnCooldown,
    /// Attack geometry is unusable; nothing changed.
    Misconfigured,
    /// The swing went through. Empty when nothing was in reach.
    Swung(Vec<HitResult>),
}

impl AttackOutcome {
    pub fn hits(&self) -> &[HitResult] {
        match self {
            AttackOutcome::Swung(hits) => hits,
            _ => &[],
        }
    }

    pub fn swung(&self) -> bool {
        matches!(self, AttackOutcome::Swung(_))
    }
}

/// Melee attack capability of an actor.
#[derive(Component, Debug, Clone)]
pub struct Attacker {
    pub damage: f32,
    /// Nominal reach; only seeds the default circle shape in `new`
    range: f32,
    /// Impulse magnitude pushed onto each target hit
    pub knockback: f32,
    /// Attack point relative to the actor, for a right-facing actor
    pub offset: Vec2,
    pub targets: FactionMask,
    /// Area actually tested for hits
    pub shape: HitShape,
    cooldown: Cooldown,
}

impl Attacker {
    pub fn new(damage: f32, range: f32, cooldown: Duration, targets: FactionMask) -> Self {
        Self {
            damage,
            range,
            knockback: 0.0,
            offset: Vec2::ZERO,
            targets,
            shape: HitShape::Circle { radius: range },
            cooldown: Cooldown::new(cooldown),
        }
    }

    pub fn with_knockback(mut self, knockback: f32) -> Self {
        self.knockback = knockback;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_shape(mut self, shape: HitShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Change the reach, keeping the hit area in step with it.
    ///
    /// A circle shape is resized to the new range; a box keeps its extents.
    pub fn set_range(&mut self, range: f32) {
        self.range = range;
        if let HitShape::Circle { .. } = self.shape {
            self.shape = HitShape::Circle { radius: range };
        }
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn last_attack(&self) -> Option<Duration> {
        self.cooldown.last_triggered()
    }

    pub fn can_attack(&self, now: Duration) -> bool {
        self.cooldown.is_ready(now)
    }

    /// World-space attack point for an actor at `position`.
    pub fn attack_point(&self, position: Vec3, facing: Facing) -> Vec3 {
        position + facing.mirror(self.offset)
    }

    /// Swing at everything `hits` finds around `origin`.
    ///
    /// `apply` deals the damage to one target and returns the amount applied,
    /// or `None` when the target can no longer be hit (despawned, already
    /// dead). Each target is passed to `apply` at most once per swing, and
    /// `attacker` itself is never hit. All damage lands before this returns.
    pub fn attack<H, F>(
        &mut self,
        attacker: Entity,
        now: Duration,
        origin: Vec3,
        hits: &H,
        mut apply: F,
    ) -> AttackOutcome
    where
        H: HitQuery + ?Sized,
        F: FnMut(Entity, f32) -> Option<f32>,
    {
        if !self.cooldown.is_ready(now) {
            return AttackOutcome::OnCooldown;
        }

        if !self.shape.is_valid() {
            warn!("Attacker {:?} has no usable attack shape ({:?})", attacker, self.shape);
            return AttackOutcome::Misconfigured;
        }

        self.cooldown.trigger(now);

        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for target in hits.query_region(origin, &self.shape, self.targets) {
            if target == attacker || !seen.insert(target) {
                continue;
            }

            if let Some(damage) = apply(target, self.damage) {
                results.push(HitResult { target, damage });
            }
        }

        AttackOutcome::Swung(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Faction;

    /// Returns a fixed list of handles regardless of the region.
    struct FixedHits(Vec<Entity>);

    impl HitQuery for FixedHits {
        fn query_region(&self, _: Vec3, _: &HitShape, _: FactionMask) -> Vec<Entity> {
            self.0.clone()
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn attacker() -> Attacker {
        Attacker::new(25.0, 2.0, ms(400), FactionMask::from(Faction::Enemy))
    }

    #[test]
    fn test_cooldown_gate() {
        let mut cooldown = Cooldown::new(ms(400));
        assert!(cooldown.is_ready(ms(0)));
        assert!(cooldown.trigger(ms(0)));

        assert!(!cooldown.trigger(ms(399)));
        assert_eq!(cooldown.last_triggered(), Some(ms(0)));

        assert!(cooldown.trigger(ms(400)));
        assert_eq!(cooldown.last_triggered(), Some(ms(400)));
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let mut attacker = attacker();
        let hits = FixedHits(vec![Entity::from_raw(1)]);
        let me = Entity::from_raw(0);

        let first = attacker.attack(me, ms(0), Vec3::ZERO, &hits, |_, d| Some(d));
        assert_eq!(first.hits().len(), 1);

        let second = attacker.attack(me, ms(300), Vec3::ZERO, &hits, |_, d| Some(d));
        assert_eq!(second, AttackOutcome::OnCooldown);
        assert!(second.hits().is_empty());
        assert_eq!(attacker.last_attack(), Some(ms(0)));

        let third = attacker.attack(me, ms(400), Vec3::ZERO, &hits, |_, d| Some(d));
        assert!(third.swung());
        assert_eq!(attacker.last_attack(), Some(ms(400)));
    }

    #[test]
    fn test_range_keeps_shape_in_step() {
        let mut attacker = attacker();
        assert_eq!(attacker.range(), 2.0);
        assert_eq!(attacker.shape, HitShape::Circle { radius: 2.0 });

        attacker.set_range(3.5);
        assert_eq!(attacker.shape, HitShape::Circle { radius: 3.5 });

        let rect = HitShape::Rect {
            half_width: 1.0,
            half_height: 0.5,
        };
        let mut boxed = attacker.with_shape(rect);
        boxed.set_range(1.0);
        assert_eq!(boxed.range(), 1.0);
        assert_eq!(boxed.shape, rect);
    }

    #[test]
    fn test_duplicate_handles_hit_once() {
        let mut attacker = attacker();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let hits = FixedHits(vec![a, b, a]);

        let mut calls = Vec::new();
        let outcome = attacker.attack(Entity::from_raw(0), ms(0), Vec3::ZERO, &hits, |target, damage| {
            calls.push(target);
            Some(damage)
        });

        assert_eq!(calls, vec![a, b]);
        assert_eq!(
            outcome.hits(),
            &[
                HitResult { target: a, damage: 25.0 },
                HitResult { target: b, damage: 25.0 },
            ]
        );
    }

    #[test]
    fn test_self_and_lost_targets_are_skipped() {
        let mut attacker = attacker();
        let me = Entity::from_raw(0);
        let gone = Entity::from_raw(7);
        let hits = FixedHits(vec![me, gone, Entity::from_raw(3)]);

        let outcome = attacker.attack(me, ms(0), Vec3::ZERO, &hits, |target, damage| {
            (target != gone).then_some(damage)
        });

        assert_eq!(outcome.hits().len(), 1);
        assert_eq!(outcome.hits()[0].target, Entity::from_raw(3));
    }

    #[test]
    fn test_misconfigured_shape_keeps_cooldown() {
        let mut attacker = attacker().with_shape(HitShape::Circle { radius: 0.0 });
        let hits = FixedHits(vec![Entity::from_raw(1)]);

        let outcome = attacker.attack(Entity::from_raw(0), ms(0), Vec3::ZERO, &hits, |_, d| Some(d));
        assert_eq!(outcome, AttackOutcome::Misconfigured);
        assert_eq!(attacker.last_attack(), None);
    }

    #[test]
    fn test_attack_point_mirrors_with_facing() {
        let attacker = attacker().with_offset(Vec2::new(0.75, 0.25));
        let position = Vec3::new(2.0, 1.0, 0.0);

        assert_eq!(attacker.attack_point(position, Facing::Right), Vec3::new(2.75, 1.25, 0.0));
        assert_eq!(attacker.attack_point(position, Facing::Left), Vec3::new(1.25, 1.25, 0.0));
    }
}
