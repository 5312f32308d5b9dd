use std::collections::BTreeSet;

/// Faction memberships of one character.
///
/// Sorted so iteration order is deterministic; order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Factions(BTreeSet<String>);

impl Factions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a membership. Returns false if it already existed.
    pub fn join(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Drop a membership. Returns false if there was none.
    pub fn leave(&mut self, name: &str) -> bool {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// True when the two sets share at least one faction.
    pub fn intersects(&self, other: &Factions) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Factions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Factions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
