//! Factions decide who may hit whom.
//!
//! Categories are an explicit enum matched by equality. Nothing in the crate
//! looks at entity names to decide hostility.

use bevy::prelude::*;
use serde::Deserialize;

/// Category of an actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
    #[default]
    Neutral,
}

impl Faction {
    fn bit(self) -> u8 {
        match self {
            Faction::Player => 1 << 0,
            Faction::Enemy => 1 << 1,
            Faction::Neutral => 1 << 2,
        }
    }

    /// Factions this one attacks unless configured otherwise.
    pub fn hostile_targets(self) -> FactionMask {
        match self {
            Faction::Player => FactionMask::from(Faction::Enemy),
            Faction::Enemy => FactionMask::from(Faction::Player),
            Faction::Neutral => FactionMask::NONE,
        }
    }
}

/// A set of factions, used as a target filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FactionMask(u8);

impl FactionMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b111);

    pub fn of(factions: &[Faction]) -> Self {
        factions
            .iter()
            .fold(Self::NONE, |mask, faction| mask.with(*faction))
    }

    pub fn with(self, faction: Faction) -> Self {
        Self(self.0 | faction.bit())
    }

    pub fn without(self, faction: Faction) -> Self {
        Self(self.0 & !faction.bit())
    }

    pub fn contains(self, faction: Faction) -> bool {
        self.0 & faction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Faction> for FactionMask {
    fn from(faction: Faction) -> Self {
        Self(faction.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_membership() {
        let mask = FactionMask::of(&[Faction::Player, Faction::Neutral]);
        assert!(mask.contains(Faction::Player));
        assert!(mask.contains(Faction::Neutral));
        assert!(!mask.contains(Faction::Enemy));

        let mask = mask.without(Faction::Player);
        assert!(!mask.contains(Faction::Player));
        assert!(FactionMask::NONE.is_empty());
        assert!(FactionMask::ALL.contains(Faction::Enemy));
    }

    #[test]
    fn test_default_hostility() {
        assert!(Faction::Player.hostile_targets().contains(Faction::Enemy));
        assert!(!Faction::Player.hostile_targets().contains(Faction::Player));
        assert!(Faction::Enemy.hostile_targets().contains(Faction::Player));
        assert!(Faction::Neutral.hostile_targets().is_empty());
    }
}
