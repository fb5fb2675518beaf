//! Target discovery for attacks.
//!
//! `HitQuery` is the narrow capability combat needs from the spatial side:
//! "who overlaps this shape and belongs to one of these factions". The
//! default implementation works on a per-step snapshot of active actors;
//! a physics engine can provide its own.

use bevy::prelude::*;
use serde::Deserialize;

use crate::actors::{ActorState, Hurtbox};
use crate::core::{Faction, FactionMask};

/// Area covered by an attack, centered on the attack point (XY plane).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum HitShape {
    Circle { radius: f32 },
    Rect { half_width: f32, half_height: f32 },
}

impl HitShape {
    /// A shape with non-positive or non-finite extents cannot hit anything
    /// meaningful and is treated as missing configuration.
    pub fn is_valid(&self) -> bool {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        match *self {
            HitShape::Circle { radius } => positive(radius),
            HitShape::Rect {
                half_width,
                half_height,
            } => positive(half_width) && positive(half_height),
        }
    }

    /// Whether a body of `radius` at `point` touches this shape placed at `center`.
    pub fn overlaps(&self, center: Vec3, point: Vec3, radius: f32) -> bool {
        let delta = point.truncate() - center.truncate();
        match *self {
            HitShape::Circle { radius: reach } => delta.length() <= reach + radius,
            HitShape::Rect {
                half_width,
                half_height,
            } => {
                let outside = (delta.abs() - Vec2::new(half_width, half_height)).max(Vec2::ZERO);
                outside.length() <= radius
            }
        }
    }
}

/// Region query capability consumed by combat.
///
/// Implementations may return the same entity more than once (one entry per
/// overlapping collider, for example); callers deduplicate.
pub trait HitQuery {
    fn query_region(&self, origin: Vec3, shape: &HitShape, filter: FactionMask) -> Vec<Entity>;
}

/// A hittable body in the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HitBody {
    pub entity: Entity,
    pub position: Vec3,
    pub faction: Faction,
    pub radius: f32,
}

/// Query data for building a snapshot from the ECS.
pub type HitBodyData = (
    Entity,
    &'static Transform,
    &'static Faction,
    &'static ActorState,
    Option<&'static Hurtbox>,
);

/// Overlap tests against a snapshot of body positions.
#[derive(Debug, Clone, Default)]
pub struct ProximityHitQuery {
    bodies: Vec<HitBody>,
}

impl ProximityHitQuery {
    pub fn new(bodies: Vec<HitBody>) -> Self {
        Self { bodies }
    }

    /// Snapshot the active actors from a query over `HitBodyData`.
    pub fn from_bodies<'a>(
        items: impl IntoIterator<
            Item = (
                Entity,
                &'a Transform,
                &'a Faction,
                &'a ActorState,
                Option<&'a Hurtbox>,
            ),
        >,
    ) -> Self {
        let bodies = items
            .into_iter()
            .filter(|(_, _, _, state, _)| state.is_active())
            .map(|(entity, transform, faction, _, hurtbox)| HitBody {
                entity,
                position: transform.translation,
                faction: *faction,
                radius: hurtbox.copied().unwrap_or_default().radius,
            })
            .collect();

        Self { bodies }
    }

    pub fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.bodies
            .iter()
            .find(|body| body.entity == entity)
            .map(|body| body.position)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl HitQuery for ProximityHitQuery {
    fn query_region(&self, origin: Vec3, shape: &HitShape, filter: FactionMask) -> Vec<Entity> {
        self.bodies
            .iter()
            .filter(|body| filter.contains(body.faction))
            .filter(|body| shape.overlaps(origin, body.position, body.radius))
            .map(|body| body.entity)
            .collect()
    }
}
