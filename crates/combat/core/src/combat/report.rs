//! Summaries of applied damage and healing.

use crate::character::CharacterId;

use super::damage::DamageModifier;

/// What a successful `deal_damage_to` did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    pub attacker: CharacterId,
    pub target: CharacterId,
    /// Amount requested by the caller.
    pub raw: u32,
    pub modifier: DamageModifier,
    /// Amount after the level modifier and rounding.
    pub scaled: u32,
    /// Health actually removed (`scaled` capped at the target's prior health).
    pub applied: u32,
    /// Target health afterwards.
    pub health: u32,
    /// True when this hit moved the target from alive to dead.
    pub killed: bool,
}

/// What a successful heal did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealReport {
    pub healer: CharacterId,
    pub target: CharacterId,
    pub requested: u32,
    /// Health actually restored (`requested` capped at the target's maximum).
    pub applied: u32,
    pub health: u32,
}
