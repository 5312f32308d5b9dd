//! Character roster loader.
//!
//! Builds starting characters from RON files.

use std::collections::HashSet;
use std::path::Path;

use combat_core::{Character, CharacterKind, CombatConfig};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// One roster entry as written in the content file.
///
/// Either `kind` or `attack_max_range` must be given; `kind` wins when both
/// are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterSpec {
    pub kind: Option<CharacterKind>,
    pub attack_max_range: Option<u32>,
    pub level: Option<u32>,
    pub factions: Vec<String>,
}

impl CharacterSpec {
    /// Create the character described by this spec.
    pub fn build(&self, config: CombatConfig) -> LoadResult<Character> {
        let mut character = match (self.kind, self.attack_max_range) {
            (Some(kind), _) => Character::from_kind_with_config(kind, config)?,
            (None, Some(range)) => Character::with_config(range, config)?,
            (None, None) => anyhow::bail!("either kind or attack_max_range is required"),
        };

        if let Some(level) = self.level {
            character.raise_level_to(level);
        }
        for faction in &self.factions {
            character.join_faction(faction.as_str());
        }

        Ok(character)
    }
}

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<(String, CharacterSpec)>`
    ///
    /// Names must be unique. Order is preserved.
    pub fn load(path: &Path, config: CombatConfig) -> LoadResult<Vec<(String, Character)>> {
        let content = read_file(path)?;
        let roster = Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            "Loaded {} characters from {}",
            roster.len(),
            path.display()
        );

        Ok(roster)
    }

    /// Parse a roster from RON text.
    ///
    /// `config` is validated before any entry is built.
    pub fn parse(content: &str, config: CombatConfig) -> LoadResult<Vec<(String, Character)>> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combat config: {}", e))?;

        let raw_data: Vec<(String, CharacterSpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut roster = Vec::with_capacity(raw_data.len());
        for (name, spec) in raw_data {
            if !seen.insert(name.clone()) {
                anyhow::bail!("Duplicate character name '{}' in roster", name);
            }

            let character = spec
                .build(config)
                .map_err(|e| anyhow::anyhow!("Failed to build character '{}': {}", name, e))?;
            roster.push((name, character));
        }

        Ok(roster)
    }
}
