use crate::error::{ErrorSeverity, RuleError};

/// Tunable combat rules.
///
/// The defaults reproduce the standard table: 1000 health, level 1 start,
/// and a 5-level gap for the 150% / 50% damage modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Health cap, and the health every character starts with.
    pub max_health: u32,
    /// Level assigned at creation.
    pub starting_level: u32,
    /// Level difference at which the damage modifier kicks in.
    pub level_gap: u32,
    /// Damage percentage when the attacker out-levels the target by `level_gap`.
    pub advantage_percent: u32,
    /// Damage percentage when the target out-levels the attacker by `level_gap`.
    pub disadvantage_percent: u32,
}

impl CombatConfig {
    pub const DEFAULT_MAX_HEALTH: u32 = 1000;
    pub const DEFAULT_STARTING_LEVEL: u32 = 1;
    pub const DEFAULT_LEVEL_GAP: u32 = 5;
    pub const DEFAULT_ADVANTAGE_PERCENT: u32 = 150;
    pub const DEFAULT_DISADVANTAGE_PERCENT: u32 = 50;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            starting_level: Self::DEFAULT_STARTING_LEVEL,
            level_gap: Self::DEFAULT_LEVEL_GAP,
            advantage_percent: Self::DEFAULT_ADVANTAGE_PERCENT,
            disadvantage_percent: Self::DEFAULT_DISADVANTAGE_PERCENT,
        }
    }

    #[must_use]
    pub const fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    #[must_use]
    pub const fn with_level_gap(mut self, level_gap: u32) -> Self {
        self.level_gap = level_gap;
        self
    }

    #[must_use]
    pub const fn with_modifiers(
        mut self,
        advantage_percent: u32,
        disadvantage_percent: u32,
    ) -> Self {
        self.advantage_percent = advantage_percent;
        self.disadvantage_percent = disadvantage_percent;
        self
    }

    /// Rejects tables that would make the rules meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if self.starting_level == 0 {
            return Err(ConfigError::ZeroStartingLevel);
        }
        if self.level_gap == 0 {
            return Err(ConfigError::ZeroLevelGap);
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid combat rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_health must be greater than zero")]
    ZeroMaxHealth,

    #[error("starting_level must be greater than zero")]
    ZeroStartingLevel,

    #[error("level_gap must be greater than zero")]
    ZeroLevelGap,
}

impl RuleError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxHealth => "CONFIG_ZERO_MAX_HEALTH",
            Self::ZeroStartingLevel => "CONFIG_ZERO_STARTING_LEVEL",
            Self::ZeroLevelGap => "CONFIG_ZERO_LEVEL_GAP",
        }
    }
}
