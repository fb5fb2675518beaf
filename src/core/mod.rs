//! Core module - clock, factions, events, configuration and step ordering.
//!
//! This module provides the foundation that all other simulation systems build upon.

mod clock;
mod config;
mod events;
mod faction;
mod plugin;
mod rng;

pub use clock::{advance_sim_clock, step_simulation, SimClock};
pub use config::{PickupSpawnerConfig, SimConfig};
pub use events::*;
pub use faction::{Faction, FactionMask};
pub use plugin::{CorePlugin, SimSet};
pub use rng::SimRng;
