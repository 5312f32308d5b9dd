//! Level-difference damage modifier.

use crate::config::CombatConfig;

/// Damage scaling picked from the level difference between attacker and
/// target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageModifier {
    /// Target is `level_gap` or more levels above the attacker.
    Disadvantaged,
    /// Levels are within `level_gap` of each other.
    Even,
    /// Attacker is `level_gap` or more levels above the target.
    Advantaged,
}

impl DamageModifier {
    /// Pick the modifier for an attack.
    ///
    /// ```text
    /// diff = attacker_level - target_level
    /// diff >=  gap  -> Advantaged
    /// diff <= -gap  -> Disadvantaged
    /// otherwise     -> Even
    /// ```
    pub fn for_levels(attacker_level: u32, target_level: u32, config: &CombatConfig) -> Self {
        let diff = i64::from(attacker_level) - i64::from(target_level);
        let gap = i64::from(config.level_gap);

        if diff >= gap {
            Self::Advantaged
        } else if diff <= -gap {
            Self::Disadvantaged
        } else {
            Self::Even
        }
    }

    /// Damage percentage for this modifier under `config`.
    pub const fn percent(&self, config: &CombatConfig) -> u32 {
        match self {
            Self::Disadvantaged => config.disadvantage_percent,
            Self::Even => 100,
            Self::Advantaged => config.advantage_percent,
        }
    }

    /// Scale a raw damage amount.
    pub fn apply(&self, amount: u32, config: &CombatConfig) -> u32 {
        round_percent(amount, self.percent(config))
    }
}

/// `amount * percent / 100`, rounded to the nearest integer with ties going
/// to the even neighbour. Saturates at `u32::MAX`.
pub fn round_percent(amount: u32, percent: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(percent);
    let quotient = scaled / 100;
    let remainder = scaled % 100;

    let rounded = if remainder > 50 || (remainder == 50 && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    u32::try_from(rounded).unwrap_or(u32::MAX)
}
