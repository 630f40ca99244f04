//! Identifier module.
//!
//! Provides the `Ident` type, an interned string identifier used for
//! items, weapons, archetypes, templates, and heroes. Uses `Arc<str>`
//! for memory efficiency and fast comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for catalog entities.
///
/// Uses `Arc<str>` for memory efficiency and fast comparison.
/// Multiple `Ident` instances with the same string content share the
/// same underlying allocation when cloned.
///
/// # Examples
///
/// ```rust
/// use buildwise::Ident;
///
/// let combo = Ident::new("scroll_merciless_combo");
///
/// // Can be created from string slices or owned strings
/// let combo2: Ident = "scroll_merciless_combo".into();
/// let combo3: Ident = String::from("scroll_merciless_combo").into();
///
/// assert_eq!(combo, combo2);
/// assert_eq!(combo, combo3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(Arc<str>);

impl Serialize for Ident {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ident::from(s))
    }
}

impl Ident {
    /// Create a new `Ident` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwise::Ident;
    ///
    /// let id = Ident::new("weapon_goshawk");
    /// assert_eq!(id.as_str(), "weapon_goshawk");
    /// ```
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `Ident`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_creation() {
        let id1 = Ident::new("scroll_glass_cannon");
        let id2 = Ident::new("scroll_glass_cannon");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "scroll_glass_cannon");
    }

    #[test]
    fn test_ident_from_string() {
        let id: Ident = String::from("asc_pyrodominance").into();
        assert_eq!(id.as_str(), "asc_pyrodominance");
    }

    #[test]
    fn test_ident_str_comparison() {
        let id = Ident::new("cp_fire_elemental");
        assert_eq!(id, "cp_fire_elemental");
        assert_ne!(id, "cp_lightning_chain");
    }
}
