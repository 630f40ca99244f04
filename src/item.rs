//! Item types: scrolls, ascensions, and the `Item` sum type.
//!
//! Scrolls (passive pickups) and ascensions (hero-specific upgrades)
//! are the units being scored. `Item` is the tagged union over both
//! with the common synergy-relevant interface: id, tags, synergy
//! partners, anti-synergy partners, archetype membership, and power.

use crate::ident::Ident;
use crate::tag::SynergyTag;
use serde::{Deserialize, Serialize};

/// Power rating assumed when an item does not declare one.
pub const DEFAULT_POWER: u8 = 5;

/// Scroll rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Rare,
    Legendary,
    Cursed,
}

/// A passive scroll picked up during a run.
///
/// # Examples
///
/// ```rust
/// use buildwise::{Rarity, Scroll, SynergyTag};
///
/// let scroll = Scroll {
///     id: "scroll_merciless_combo".into(),
///     name: "Merciless Combo".to_string(),
///     rarity: Rarity::Legendary,
///     effect: "Killing an enemy without reloading stacks weapon damage".to_string(),
///     enhanced_effect: None,
///     discardable: false,
///     tags: vec![SynergyTag::NoReload, SynergyTag::WeaponDamage],
///     synergy_with: vec!["scroll_advanced_depot".into()],
///     anti_synergy_with: vec![],
///     archetypes: vec!["no_reload".into()],
///     power: Some(9),
/// };
/// assert_eq!(scroll.power(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    /// Unique item id.
    pub id: Ident,

    /// Display name.
    pub name: String,

    /// Rarity bracket.
    pub rarity: Rarity,

    /// Effect text.
    pub effect: String,

    /// Effect text of the enhanced version, if the scroll has one.
    #[serde(default)]
    pub enhanced_effect: Option<String>,

    /// Whether the scroll can be discarded once taken.
    #[serde(default)]
    pub discardable: bool,

    /// Synergy tags.
    pub tags: Vec<SynergyTag>,

    /// Ids of items this scroll synergizes with.
    #[serde(default)]
    pub synergy_with: Vec<Ident>,

    /// Ids of items this scroll conflicts with.
    #[serde(default)]
    pub anti_synergy_with: Vec<Ident>,

    /// Ids of the build archetypes this scroll belongs to.
    #[serde(default)]
    pub archetypes: Vec<Ident>,

    /// Power rating 1-10; `None` means unrated.
    #[serde(default)]
    pub power: Option<u8>,
}

impl Scroll {
    /// Power rating, defaulting to [`DEFAULT_POWER`] when unrated.
    pub fn power(&self) -> u8 {
        self.power.unwrap_or(DEFAULT_POWER)
    }
}

/// One level of an ascension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AscensionLevel {
    /// Level number (1-based).
    pub level: u8,
    /// Effect text at this level.
    pub effect: String,
}

/// A hero-specific upgrade taken from goblets during a run.
///
/// Ascensions level up when re-taken; the level is tracked on the
/// acquired entry, not here, and is irrelevant to scoring - only
/// presence matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascension {
    /// Unique item id.
    pub id: Ident,

    /// Display name.
    pub name: String,

    /// Id of the hero this ascension belongs to.
    pub hero: Ident,

    /// Short description.
    pub description: String,

    /// Highest attainable level.
    pub max_level: u8,

    /// Per-level effect texts.
    #[serde(default)]
    pub levels: Vec<AscensionLevel>,

    /// Synergy tags.
    pub tags: Vec<SynergyTag>,

    /// Ids of items this ascension synergizes with.
    #[serde(default)]
    pub synergy_with: Vec<Ident>,

    /// Ids of items this ascension conflicts with.
    #[serde(default)]
    pub anti_synergy_with: Vec<Ident>,

    /// Ids of the build archetypes this ascension belongs to.
    #[serde(default)]
    pub archetypes: Vec<Ident>,

    /// Power rating 1-10; `None` means unrated.
    #[serde(default)]
    pub power: Option<u8>,
}

impl Ascension {
    /// Power rating, defaulting to [`DEFAULT_POWER`] when unrated.
    pub fn power(&self) -> u8 {
        self.power.unwrap_or(DEFAULT_POWER)
    }
}

/// Discriminant for the two item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Scroll,
    Ascension,
}

/// A scorable item: either a scroll or an ascension.
///
/// Both kinds share the synergy-relevant interface the engine reads;
/// the accessors below delegate to whichever variant is held.
///
/// # Examples
///
/// ```rust
/// use buildwise::{Item, ItemKind, Rarity, Scroll};
///
/// let item = Item::Scroll(Scroll {
///     id: "scroll_glass_cannon".into(),
///     name: "Glass Cannon".to_string(),
///     rarity: Rarity::Cursed,
///     effect: "Double damage dealt and taken".to_string(),
///     enhanced_effect: None,
///     discardable: false,
///     tags: vec![],
///     synergy_with: vec![],
///     anti_synergy_with: vec![],
///     archetypes: vec![],
///     power: None,
/// });
///
/// assert_eq!(item.kind(), ItemKind::Scroll);
/// assert_eq!(item.power(), 5); // unrated items default to 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Scroll(Scroll),
    Ascension(Ascension),
}

impl Item {
    /// Unique item id.
    pub fn id(&self) -> &Ident {
        match self {
            Item::Scroll(s) => &s.id,
            Item::Ascension(a) => &a.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Item::Scroll(s) => &s.name,
            Item::Ascension(a) => &a.name,
        }
    }

    /// Synergy tags.
    pub fn tags(&self) -> &[SynergyTag] {
        match self {
            Item::Scroll(s) => &s.tags,
            Item::Ascension(a) => &a.tags,
        }
    }

    /// Ids of items this item synergizes with.
    pub fn synergy_with(&self) -> &[Ident] {
        match self {
            Item::Scroll(s) => &s.synergy_with,
            Item::Ascension(a) => &a.synergy_with,
        }
    }

    /// Ids of items this item conflicts with.
    pub fn anti_synergy_with(&self) -> &[Ident] {
        match self {
            Item::Scroll(s) => &s.anti_synergy_with,
            Item::Ascension(a) => &a.anti_synergy_with,
        }
    }

    /// Ids of the build archetypes this item belongs to.
    pub fn archetypes(&self) -> &[Ident] {
        match self {
            Item::Scroll(s) => &s.archetypes,
            Item::Ascension(a) => &a.archetypes,
        }
    }

    /// Power rating, defaulting to [`DEFAULT_POWER`] when unrated.
    pub fn power(&self) -> u8 {
        match self {
            Item::Scroll(s) => s.power(),
            Item::Ascension(a) => a.power(),
        }
    }

    /// Which kind of item this is.
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Scroll(_) => ItemKind::Scroll,
            Item::Ascension(_) => ItemKind::Ascension,
        }
    }

    /// Whether this item carries the given tag.
    pub fn has_tag(&self, tag: SynergyTag) -> bool {
        self.tags().contains(&tag)
    }
}
