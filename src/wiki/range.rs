//! Human-readable value ranges for randomized bonuses
//!
//! Most org bonuses are rolled when the org spawns from three numbers:
//! a percent chance that the bonus exists at all, a base amount, and a
//! maximum random increase added on top of the base.

use crate::core::types::{format_number, Amount};

/// Chance at or above which a bonus is guaranteed
pub const CERTAIN: f64 = 100.0;

/// One (chance, base, increase) roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRoll {
    /// Percent chance, 0..=100
    pub chance: f64,
    pub base: f64,
    /// Largest amount that may be added to `base`; non-positive adds nothing
    pub increase: f64,
}

impl Default for StatRoll {
    fn default() -> Self {
        Self {
            chance: CERTAIN,
            base: 0.0,
            increase: 0.0,
        }
    }
}

impl StatRoll {
    /// Roll from optional template fields, absent fields take the defaults
    pub fn from_fields(
        chance: Option<Amount>,
        base: Option<Amount>,
        increase: Option<Amount>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            chance: chance.map_or(defaults.chance, Amount::value),
            base: base.map_or(defaults.base, Amount::value),
            increase: increase.map_or(defaults.increase, Amount::value),
        }
    }

    /// Lowest and highest possible outcome
    pub fn bounds(&self) -> (f64, f64) {
        // An uncertain bonus may not appear at all
        let lower = if self.chance < CERTAIN { 0.0 } else { self.base };
        let upper = if self.increase > 0.0 {
            self.base + self.increase
        } else {
            self.base
        };
        (lower, upper)
    }

    /// `"5"` for a fixed outcome, `"0-8"` for a range
    pub fn format(&self) -> String {
        let (lower, upper) = self.bounds();
        if lower == upper {
            format_number(upper)
        } else {
            format!("{}-{}", format_number(lower), format_number(upper))
        }
    }
}

/// Format a roll given as plain numbers
pub fn format_range(chance: f64, base: f64, increase: f64) -> String {
    StatRoll {
        chance,
        base,
        increase,
    }
    .format()
}
