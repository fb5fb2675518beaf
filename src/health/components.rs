//! Health state and its mutation rules.

use bevy::prelude::*;

/// Life state of a health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
}

/// Result of a single `Health::damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DamageOutcome {
    /// Health actually removed (after clamping)
    pub applied: f32,
    /// True only for the call that moved the pool from Alive to Dead
    pub killed: bool,
}

/// Component for entities that can take damage.
///
/// Invariant: `0 <= current <= maximum`, and `state == Dead` exactly when
/// `current == 0`. Fields are private; the only mutations are `damage`,
/// `heal`, `reset` and `raise_max`.
///
/// Amounts that are negative, NaN or infinite are treated as zero, so a bad
/// caller input turns into a no-op instead of corrupting the pool.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    maximum: f32,
    state: LifeState,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

fn sanitize(amount: f32) -> f32 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

impl Health {
    /// Full health pool of size `max`.
    ///
    /// A non-positive or non-finite `max` would make `percentage` divide by
    /// zero, so it is replaced by 1.
    pub fn new(max: f32) -> Self {
        let maximum = if max.is_finite() && max > 0.0 {
            max
        } else {
            warn!("Invalid maximum health {}, using 1.0", max);
            1.0
        };

        Self {
            current: maximum,
            maximum,
            state: LifeState::Alive,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.state == LifeState::Dead
    }

    /// `current / maximum`, always in `[0, 1]`.
    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }

    /// Remove up to `amount` health.
    ///
    /// No-op on a dead pool. The call that brings `current` to zero flips
    /// the state to `Dead` and reports `killed`; later calls report nothing
    /// until `reset`.
    pub fn damage(&mut self, amount: f32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::default();
        }

        let applied = sanitize(amount).min(self.current);
        self.current -= applied;

        let killed = self.current <= 0.0;
        if killed {
            self.current = 0.0;
            self.state = LifeState::Dead;
        }

        DamageOutcome { applied, killed }
    }

    /// Restore up to `amount` health, clamped to the maximum.
    ///
    /// Returns the amount restored. A dead pool cannot be healed.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.is_dead() {
            return 0.0;
        }

        let actual = sanitize(amount).min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    /// Bring the pool back to life with `to` health.
    ///
    /// `to` is clamped into `(0, maximum]`; a non-positive value means a full
    /// pool. Used by respawning.
    pub fn reset(&mut self, to: f32) {
        self.current = if to.is_finite() && to > 0.0 {
            to.min(self.maximum)
        } else {
            self.maximum
        };
        self.state = LifeState::Alive;
    }

    /// Grow the maximum by `amount` without changing `current`.
    pub fn raise_max(&mut self, amount: f32) {
        self.maximum += sanitize(amount);
    }
}
