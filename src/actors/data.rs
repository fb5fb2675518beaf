//! Actor definitions loaded from RON files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use super::components::Facing;
use super::error::DataLoadError;
use crate::combat::{Attacker, HitShape};
use crate::core::{Faction, FactionMask};
use crate::projectiles::Shooter;
use crate::respawn::{Respawner, SpawnAxis, SpawnPoint, SpawnRegion};

/// Directory scanned for `*.ron` actor definitions.
pub const ACTOR_DATA_DIR: &str = "assets/data/actors";

fn default_hurtbox_radius() -> f32 {
    0.5
}

fn default_lifetime() -> f32 {
    4.0
}

fn default_projectile_radius() -> f32 {
    0.2
}

fn default_true() -> bool {
    true
}

/// Melee attack block of an actor definition.
#[derive(Deserialize, Clone, Debug)]
pub struct MeleeDefinition {
    pub damage: f32,
    pub range: f32,
    /// Seconds between swings
    pub cooldown: f32,
    #[serde(default)]
    pub knockback: f32,
    #[serde(default)]
    pub offset: (f32, f32),
    /// Falls back to a circle of radius `range`
    #[serde(default)]
    pub shape: Option<HitShape>,
    /// Falls back to the faction's usual enemies
    #[serde(default)]
    pub targets: Option<Vec<Faction>>,
}

/// Ranged attack block of an actor definition.
#[derive(Deserialize, Clone, Debug)]
pub struct RangedDefinition {
    pub damage: f32,
    pub speed: f32,
    /// Seconds between shots
    pub cooldown: f32,
    #[serde(default = "default_lifetime")]
    pub lifetime: f32,
    #[serde(default = "default_projectile_radius")]
    pub radius: f32,
    #[serde(default)]
    pub muzzle_offset: (f32, f32),
    #[serde(default)]
    pub targets: Option<Vec<Faction>>,
}

/// Where a respawning actor comes back.
#[derive(Deserialize, Clone, Debug, Default)]
pub enum SpawnDefinition {
    /// The position the actor was first spawned at
    #[default]
    Home,
    /// A fixed point
    At((f32, f32, f32)),
    /// Uniform on one axis; other coordinates from `anchor` or the first spawn position
    Region {
        #[serde(default)]
        axis: SpawnAxis,
        min: f32,
        max: f32,
        #[serde(default)]
        anchor: Option<(f32, f32, f32)>,
    },
}

/// Respawn block of an actor definition.
#[derive(Deserialize, Clone, Debug)]
pub struct RespawnDefinition {
    #[serde(default = "default_true")]
    pub can_respawn: bool,
    /// Seconds between death and respawn
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub spawn: SpawnDefinition,
}

/// Actor definition loaded from a RON file.
///
/// Player and enemy variants differ only in data: health, attacks and
/// respawn policy all come from here.
#[derive(Deserialize, Clone, Debug)]
pub struct ActorDefinition {
    pub name: String,
    pub faction: Faction,
    pub max_health: f32,
    #[serde(default = "default_hurtbox_radius")]
    pub hurtbox_radius: f32,
    #[serde(default)]
    pub facing: Facing,
    #[serde(default)]
    pub melee: Option<MeleeDefinition>,
    #[serde(default)]
    pub ranged: Option<RangedDefinition>,
    #[serde(default)]
    pub respawn: Option<RespawnDefinition>,
}

/// Seconds as a `Duration`, saturating instead of panicking on values
/// `validate` would have rejected.
fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(if value > 0.0 {
        Duration::MAX
    } else {
        Duration::ZERO
    })
}

/// Non-negative and small enough to become a `Duration`.
fn is_duration(value: f32) -> bool {
    value >= 0.0 && Duration::try_from_secs_f32(value).is_ok()
}

fn vec2(value: (f32, f32)) -> Vec2 {
    Vec2::new(value.0, value.1)
}

fn vec3(value: (f32, f32, f32)) -> Vec3 {
    Vec3::new(value.0, value.1, value.2)
}

impl ActorDefinition {
    /// Parse and validate a definition from RON text.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let definition: ActorDefinition =
            ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
                path: path.to_string(),
                details: e.to_string(),
            })?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the numbers the simulation relies on.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let invalid = |reason: &str| DataLoadError::InvalidDefinition {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.max_health) {
            return Err(invalid("max_health must be positive"));
        }
        if !positive(self.hurtbox_radius) {
            return Err(invalid("hurtbox_radius must be positive"));
        }

        if let Some(melee) = &self.melee {
            if !positive(melee.damage) {
                return Err(invalid("melee damage must be positive"));
            }
            if !positive(melee.range) {
                return Err(invalid("melee range must be positive"));
            }
            if !is_duration(melee.cooldown) || !non_negative(melee.knockback) {
                return Err(invalid("melee cooldown and knockback must be non-negative"));
            }
            if melee.shape.is_some_and(|shape| !shape.is_valid()) {
                return Err(invalid("melee shape must have positive extents"));
            }
        }

        if let Some(ranged) = &self.ranged {
            if !positive(ranged.damage) || !positive(ranged.speed) || !positive(ranged.radius) {
                return Err(invalid("ranged damage, speed and radius must be positive"));
            }
            let lifetime_ok = positive(ranged.lifetime) && is_duration(ranged.lifetime);
            if !is_duration(ranged.cooldown) || !lifetime_ok {
                return Err(invalid("ranged cooldown must be non-negative and lifetime positive"));
            }
        }

        if let Some(respawn) = &self.respawn {
            if !is_duration(respawn.delay) {
                return Err(invalid("respawn delay must be a non-negative number of seconds"));
            }
            if let SpawnDefinition::Region { min, max, .. } = respawn.spawn {
                if !(min.is_finite() && max.is_finite() && min <= max) {
                    return Err(invalid("spawn region needs finite bounds with min <= max"));
                }
            }
        }

        Ok(())
    }

    fn target_mask(&self, targets: &Option<Vec<Faction>>) -> FactionMask {
        targets
            .as_deref()
            .map(FactionMask::of)
            .unwrap_or_else(|| self.faction.hostile_targets())
    }

    pub fn to_attacker(&self) -> Option<Attacker> {
        let melee = self.melee.as_ref()?;
        let mut attacker = Attacker::new(
            melee.damage,
            melee.range,
            seconds(melee.cooldown),
            self.target_mask(&melee.targets),
        )
        .with_knockback(melee.knockback)
        .with_offset(vec2(melee.offset));

        if let Some(shape) = melee.shape {
            attacker = attacker.with_shape(shape);
        }

        Some(attacker)
    }

    pub fn to_shooter(&self) -> Option<Shooter> {
        let ranged = self.ranged.as_ref()?;
        Some(
            Shooter::new(
                ranged.damage,
                ranged.speed,
                seconds(ranged.cooldown),
                self.target_mask(&ranged.targets),
            )
            .with_lifetime(seconds(ranged.lifetime))
            .with_radius(ranged.radius)
            .with_muzzle_offset(vec2(ranged.muzzle_offset)),
        )
    }

    /// Build the respawner for an actor first placed at `home`.
    pub fn to_respawner(&self, home: Vec3) -> Option<Respawner> {
        let respawn = self.respawn.as_ref()?;

        let spawn = match &respawn.spawn {
            SpawnDefinition::Home => SpawnPoint::Home(home),
            SpawnDefinition::At(point) => SpawnPoint::Home(vec3(*point)),
            SpawnDefinition::Region {
                axis,
                min,
                max,
                anchor,
            } => SpawnPoint::Region(SpawnRegion::new(
                *axis,
                *min,
                *max,
                anchor.map(vec3).unwrap_or(home),
            )),
        };

        let mut respawner = Respawner::new(seconds(respawn.delay), spawn);
        respawner.can_respawn = respawn.can_respawn;
        Some(respawner)
    }
}

/// Resource holding all loaded actor definitions, keyed by file stem.
#[derive(Resource, Default, Debug)]
pub struct ActorRegistry {
    pub definitions: HashMap<String, ActorDefinition>,
}

impl ActorRegistry {
    /// Get an actor definition by type name.
    pub fn get(&self, actor_type: &str) -> Option<&ActorDefinition> {
        self.definitions.get(actor_type)
    }

    pub fn insert(&mut self, actor_type: impl Into<String>, definition: ActorDefinition) {
        self.definitions.insert(actor_type.into(), definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Load every `*.ron` file in `dir`.
    ///
    /// A missing or unreadable directory is an error. Individual bad files
    /// are logged and skipped so one typo does not empty the registry.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let dir = dir.as_ref();
        let display = dir.display().to_string();

        if !dir.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
            path: display,
            details: e.to_string(),
        })?;

        let mut registry = Self::default();

        for entry in entries.flatten() {
            let path = entry.path();

            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let actor_type = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match load_definition(&path) {
                Ok(definition) => {
                    info!("Loaded actor definition: {} ({})", definition.name, actor_type);
                    registry.insert(actor_type, definition);
                }
                Err(e) => {
                    error!("Skipping actor definition: {}", e);
                }
            }
        }

        Ok(registry)
    }
}

fn load_definition(path: &Path) -> Result<ActorDefinition, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    ActorDefinition::from_ron_str(&display, &contents)
}

/// Load all actor definitions from `assets/data/actors/`.
pub fn load_actor_definitions(mut registry: ResMut<ActorRegistry>) {
    match ActorRegistry::load_dir(ACTOR_DATA_DIR) {
        Ok(loaded) => {
            registry.definitions.extend(loaded.definitions);
            info!("Loaded {} actor definitions", registry.len());
        }
        Err(e) => {
            warn!("Actor definitions not loaded: {}", e);
        }
    }
}
