//! Character state and the rules that gate damage and healing.
//!
//! A character owns its combat state and mutates only through validated
//! operations:
//!
//! - `can_deal_damage_to` / `can_heal` / `can_heal_self` answer with an
//!   [`Outcome`] and never fail
//! - `deal_damage_to` / `heal` / `heal_self` re-run the same check and return
//!   [`CombatError`] if the caller skipped it
//!
//! # States
//!
//! Alive is initial. A hit that drives health to 0 moves the character to
//! Dead, and nothing moves it back. Dead characters cannot be healed but may
//! still be hit, which leaves health at 0.
//!
//! # Range
//!
//! `attack_max_range` is stored but not checked; there is no position model
//! to check it against.

mod factions;
mod id;
mod kind;

pub use factions::Factions;
pub use id::CharacterId;
pub use kind::CharacterKind;

use crate::combat::{DamageModifier, DamageReport, HealReport};
use crate::config::{CombatConfig, ConfigError};
use crate::error::CombatError;
use crate::outcome::Outcome;

/// A combatant.
///
/// # Invariants
///
/// - `health <= config.max_health`
/// - alive iff `health > 0` (computed, never stored)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Character {
    id: CharacterId,
    kind: Option<CharacterKind>,
    attack_max_range: u32,
    health: u32,
    level: u32,
    factions: Factions,
    #[cfg_attr(feature = "serde", serde(skip))]
    config: CombatConfig,
}

impl Character {
    /// Create a character with the given attack range and default rules.
    pub fn new(attack_max_range: u32) -> Self {
        Self::build(attack_max_range, None, CombatConfig::default())
    }

    /// Create a character with the given attack range and rule table.
    ///
    /// Fails if `config` does not pass [`CombatConfig::validate`].
    pub fn with_config(
        attack_max_range: u32,
        config: CombatConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(attack_max_range, None, config))
    }

    pub fn from_kind(kind: CharacterKind) -> Self {
        Self::build(kind.attack_max_range(), Some(kind), CombatConfig::default())
    }

    /// Fails if `config` does not pass [`CombatConfig::validate`].
    pub fn from_kind_with_config(
        kind: CharacterKind,
        config: CombatConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(kind.attack_max_range(), Some(kind), config))
    }

    /// `config` must already be valid.
    fn build(attack_max_range: u32, kind: Option<CharacterKind>, config: CombatConfig) -> Self {
        Self {
            id: CharacterId::next(),
            kind,
            attack_max_range,
            health: config.max_health,
            level: config.starting_level,
            factions: Factions::new(),
            config,
        }
    }

    pub fn melee() -> Self {
        Self::from_kind(CharacterKind::Melee)
    }

    pub fn ranged() -> Self {
        Self::from_kind(CharacterKind::Ranged)
    }

    // ===== queries =====

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// Built-in kind, or `None` for characters created with a custom range.
    pub fn kind(&self) -> Option<CharacterKind> {
        self.kind
    }

    pub fn attack_max_range(&self) -> u32 {
        self.attack_max_range
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.config.max_health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn factions(&self) -> &Factions {
        &self.factions
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// True when both refer to the same character (same id).
    #[inline]
    pub fn is_same_as(&self, other: &Character) -> bool {
        self.id == other.id
    }

    /// Allies share at least one faction. Membership alone never makes a
    /// character its own ally.
    pub fn is_allied_with(&self, other: &Character) -> bool {
        self.factions.intersects(&other.factions)
    }

    // ===== legality checks =====

    pub fn can_deal_damage_to(&self, target: &Character) -> Outcome {
        self.damage_precondition(target).into()
    }

    pub fn can_heal(&self, target: &Character) -> Outcome {
        self.heal_precondition(target).into()
    }

    pub fn can_heal_self(&self) -> Outcome {
        self.can_heal(self)
    }

    fn damage_precondition(&self, target: &Character) -> Result<(), CombatError> {
        if self.is_same_as(target) {
            return Err(CombatError::SelfTarget);
        }
        if self.is_allied_with(target) {
            return Err(CombatError::AllyTarget);
        }
        // No range check: there is no position model yet.
        Ok(())
    }

    fn heal_precondition(&self, target: &Character) -> Result<(), CombatError> {
        if !self.is_same_as(target) && !self.is_allied_with(target) {
            return Err(CombatError::NotSelfOrAlly);
        }
        if !target.is_alive() {
            return Err(CombatError::DeadTarget);
        }
        Ok(())
    }

    // ===== mutations =====

    /// Hit `target` for `amount`, scaled by the level modifier.
    ///
    /// Check [`Self::can_deal_damage_to`] first; an `Err` here means that
    /// step was skipped.
    pub fn deal_damage_to(
        &self,
        target: &mut Character,
        amount: u32,
    ) -> Result<DamageReport, CombatError> {
        if let Err(err) = self.damage_precondition(target) {
            tracing::warn!(
                target: "combat::damage",
                attacker = %self.id,
                target_id = %target.id,
                error = err.message(),
                "damage invoked without a satisfied precondition"
            );
            return Err(err);
        }

        let modifier = DamageModifier::for_levels(self.level, target.level, &self.config);
        let scaled = modifier.apply(amount, &self.config);
        let was_alive = target.is_alive();
        let applied = target.take_damage(scaled);
        let killed = was_alive && !target.is_alive();

        tracing::debug!(
            target: "combat::damage",
            attacker = %self.id,
            target_id = %target.id,
            raw = amount,
            modifier = %modifier,
            scaled,
            applied,
            health = target.health,
            "damage applied"
        );
        if killed {
            tracing::info!(
                target: "combat::damage",
                attacker = %self.id,
                target_id = %target.id,
                "character died"
            );
        }

        Ok(DamageReport {
            attacker: self.id,
            target: target.id,
            raw: amount,
            modifier,
            scaled,
            applied,
            health: target.health,
            killed,
        })
    }

    /// Restore `amount` health to `target`, capped at its maximum.
    ///
    /// Check [`Self::can_heal`] first; an `Err` here means that step was
    /// skipped.
    pub fn heal(&self, target: &mut Character, amount: u32) -> Result<HealReport, CombatError> {
        if let Err(err) = self.heal_precondition(target) {
            tracing::warn!(
                target: "combat::heal",
                healer = %self.id,
                target_id = %target.id,
                error = err.message(),
                "heal invoked without a satisfied precondition"
            );
            return Err(err);
        }

        let applied = target.restore_health(amount);
        Ok(self.heal_report(target, amount, applied))
    }

    /// Restore `amount` health to this character.
    pub fn heal_self(&mut self, amount: u32) -> Result<HealReport, CombatError> {
        if let Err(err) = self.heal_precondition(self) {
            tracing::warn!(
                target: "combat::heal",
                healer = %self.id,
                error = err.message(),
                "self-heal invoked without a satisfied precondition"
            );
            return Err(err);
        }

        let applied = self.restore_health(amount);
        Ok(self.heal_report(self, amount, applied))
    }

    /// Returns false if already a member.
    pub fn join_faction(&mut self, name: impl Into<String>) -> bool {
        self.factions.join(name)
    }

    /// Returns false if not a member.
    pub fn leave_faction(&mut self, name: &str) -> bool {
        self.factions.leave(name)
    }

    /// Set the level directly. Lowering is allowed.
    pub fn raise_level_to(&mut self, level: u32) {
        self.level = level;
    }

    // ===== internals =====

    /// Returns health actually removed.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.health);
        self.health -= applied;
        applied
    }

    /// Returns health actually restored.
    fn restore_health(&mut self, amount: u32) -> u32 {
        let healed = self.health.saturating_add(amount).min(self.config.max_health);
        let applied = healed.saturating_sub(self.health);
        self.health = healed;
        applied
    }

    fn heal_report(&self, target: &Character, requested: u32, applied: u32) -> HealReport {
        tracing::debug!(
            target: "combat::heal",
            healer = %self.id,
            target_id = %target.id,
            requested,
            applied,
            health = target.health,
            "heal applied"
        );

        HealReport {
            healer: self.id,
            target: target.id,
            requested,
            applied,
            health: target.health,
        }
    }
}
