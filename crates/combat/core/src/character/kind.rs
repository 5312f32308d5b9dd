/// Built-in character kinds.
///
/// Kinds differ only in attack range, which no rule reads yet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterKind {
    /// Close-quarters fighter
    Melee,
    /// Bow or spell user
    Ranged,
}

impl CharacterKind {
    pub const MELEE_RANGE: u32 = 2;
    pub const RANGED_RANGE: u32 = 20;

    pub const fn attack_max_range(&self) -> u32 {
        match self {
            Self::Melee => Self::MELEE_RANGE,
            Self::Ranged => Self::RANGED_RANGE,
        }
    }
}
