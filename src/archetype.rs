//! Build archetypes and their catalog.
//!
//! An archetype is a named playstyle defined by a core tag set, the
//! scrolls that enable it, and optionally the pairing inscription it
//! requires. Archetypes are static reference rows; the *detected*
//! archetype is a transient classification result produced by the
//! detector, never stored here.

use crate::error::CatalogError;
use crate::ident::Ident;
use crate::inscription::InscriptionId;
use crate::tag::SynergyTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How demanding an archetype or template is to pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A named playstyle definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Archetype id.
    pub id: Ident,

    /// Display name.
    pub name: String,

    /// Short description.
    pub description: String,

    /// Tags that define membership; the detector sums acquired-tag
    /// frequencies over this set.
    pub core_tags: Vec<SynergyTag>,

    /// Ids of the scrolls that define this build.
    #[serde(default)]
    pub core_scrolls: Vec<Ident>,

    /// Ids of ascensions commonly paired with this build.
    #[serde(default)]
    pub recommended_ascensions: Vec<Ident>,

    /// Pairing inscription this build is built around, if any.
    #[serde(default)]
    pub required_inscription: Option<InscriptionId>,

    /// Peak power on a 1-10 scale.
    pub power_level: u8,

    /// Piloting difficulty.
    pub difficulty: Difficulty,
}

/// Read-only, ordered catalog of archetypes.
///
/// Order is observable behavior: the first entry is the
/// zero-confidence detection fallback, and earlier entries win
/// tag-frequency ties.
///
/// # Examples
///
/// ```rust
/// use buildwise::ArchetypeCatalog;
///
/// let catalog = ArchetypeCatalog::builtin();
/// let no_reload = catalog.get(&"no_reload".into()).unwrap();
/// assert_eq!(no_reload.name, "No-Reload Build");
/// ```
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    entries: Vec<Archetype>,
    index: HashMap<Ident, usize>,
}

impl ArchetypeCatalog {
    /// Build a catalog from an ordered list of archetypes.
    ///
    /// Returns an error if two archetypes share an id.
    pub fn new(entries: Vec<Archetype>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Load a catalog from a JSON array of archetypes.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The built-in archetype definitions.
    pub fn builtin() -> Self {
        Self::new(builtin_archetypes()).expect("builtin archetype ids are unique")
    }

    /// Look up an archetype by id.
    pub fn get(&self, id: &Ident) -> Option<&Archetype> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// The first archetype in catalog order, if any.
    ///
    /// Used as the zero-confidence detection fallback.
    pub fn first(&self) -> Option<&Archetype> {
        self.entries.first()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of archetypes in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over archetypes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.entries.iter()
    }

    /// Archetypes built around the given pairing inscription.
    pub fn for_inscription(&self, inscription: InscriptionId) -> Vec<&Archetype> {
        self.entries
            .iter()
            .filter(|a| a.required_inscription == Some(inscription))
            .collect()
    }

    /// Archetypes at the given piloting difficulty.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Vec<&Archetype> {
        self.entries
            .iter()
            .filter(|a| a.difficulty == difficulty)
            .collect()
    }
}

fn builtin_archetypes() -> Vec<Archetype> {
    use SynergyTag::*;

    // Inscription-specific builds first: their order puts them ahead of
    // the traditional builds for frequency ties, and magazine stacking
    // is the zero-confidence fallback.
    vec![
        Archetype {
            id: "magazine_stacking".into(),
            name: "Magazine Stacking (1-Bullet Build)".to_string(),
            description: "Uses Magazine Share with 1-magazine weapons to stack infinite damage"
                .to_string(),
            core_tags: vec![MagazineStacking, AmmoCapacity, RateOfFire, WeaponDamage],
            core_scrolls: vec!["scroll_advanced_depot".into(), "scroll_against_the_flow".into()],
            recommended_ascensions: vec![],
            required_inscription: Some(InscriptionId::MagazineShare),
            power_level: 10,
            difficulty: Difficulty::Hard,
        },
        Archetype {
            id: "dual_element".into(),
            name: "Dual Element Fusion".to_string(),
            description: "Uses Element Share to apply multiple elemental effects simultaneously"
                .to_string(),
            core_tags: vec![
                DualElement,
                ElementalDamage,
                FireDamage,
                LightningDamage,
                CorrosionDamage,
                Burning,
                Shock,
                Decay,
            ],
            core_scrolls: vec!["scroll_elemental_weave".into(), "scroll_elemental_catalyst".into()],
            recommended_ascensions: vec![],
            required_inscription: Some(InscriptionId::ElementShare),
            power_level: 9,
            difficulty: Difficulty::Medium,
        },
        Archetype {
            id: "crit_multiplier".into(),
            name: "Crit Multiplier (CritX Share)".to_string(),
            description: "Uses CritX Share to combine weapon crit multipliers for massive damage"
                .to_string(),
            core_tags: vec![CritScaling, CriticalHit, WeakspotDamage, Accuracy, WeaponDamage],
            core_scrolls: vec!["scroll_concentrated_strike".into()],
            recommended_ascensions: vec![],
            required_inscription: Some(InscriptionId::CritxShare),
            power_level: 9,
            difficulty: Difficulty::Medium,
        },
        Archetype {
            id: "no_reload".into(),
            name: "No-Reload Build".to_string(),
            description: "Never reload, stack damage infinitely with continuous fire".to_string(),
            core_tags: vec![NoReload, AmmoCapacity, RateOfFire, WeaponDamage],
            core_scrolls: vec![
                "scroll_merciless_combo".into(),
                "scroll_advanced_depot".into(),
                "scroll_against_the_flow".into(),
            ],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 9,
            difficulty: Difficulty::Medium,
        },
        Archetype {
            id: "elemental_fire".into(),
            name: "Fire Elemental".to_string(),
            description: "Maximize burning damage and fire-based combos".to_string(),
            core_tags: vec![FireDamage, ElementalDamage, Burning, AreaDamage],
            core_scrolls: vec!["scroll_blazing_hoop".into(), "scroll_elemental_catalyst".into()],
            recommended_ascensions: vec!["asc_flame_enthusiasm".into(), "asc_combustion".into()],
            required_inscription: None,
            power_level: 8,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "elemental_lightning".into(),
            name: "Lightning Elemental".to_string(),
            description: "Chain lightning and shock enemies for AoE damage".to_string(),
            core_tags: vec![LightningDamage, ElementalDamage, Shock, AreaDamage],
            core_scrolls: vec!["scroll_elemental_catalyst".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 8,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "elemental_corrosion".into(),
            name: "Corrosion Elemental".to_string(),
            description: "Decay and area control through corrosive damage".to_string(),
            core_tags: vec![CorrosionDamage, ElementalDamage, Decay, AreaDamage],
            core_scrolls: vec!["scroll_elemental_catalyst".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 7,
            difficulty: Difficulty::Medium,
        },
        Archetype {
            id: "skill_damage".into(),
            name: "Skill Damage".to_string(),
            description: "Focus on abilities with cooldown reduction and skill enhancement"
                .to_string(),
            core_tags: vec![SkillDamage, CooldownReduction, SkillCapacity, SkillEnhancement],
            core_scrolls: vec!["scroll_skill_bible".into(), "scroll_magic_watch".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 8,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "critical_hit".into(),
            name: "Critical Hit Build".to_string(),
            description: "Maximize critical damage for burst potential".to_string(),
            core_tags: vec![CriticalHit, WeakspotDamage, Accuracy, WeaponDamage],
            core_scrolls: vec!["scroll_concentrated_strike".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 8,
            difficulty: Difficulty::Medium,
        },
        Archetype {
            id: "lucky_shot".into(),
            name: "Lucky Shot Build".to_string(),
            description: "Consistent damage spikes through lucky shot procs".to_string(),
            core_tags: vec![LuckyShot, WeaponDamage, RateOfFire],
            core_scrolls: vec!["scroll_lucky_shot".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 7,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "movement_speed".into(),
            name: "Movement Speed".to_string(),
            description: "High mobility with speed-scaling damage".to_string(),
            core_tags: vec![MovementSpeed, WeaponDamage],
            core_scrolls: vec![],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 6,
            difficulty: Difficulty::Hard,
        },
        Archetype {
            id: "weapon_damage".into(),
            name: "Pure Weapon Damage".to_string(),
            description: "Raw gun damage scaling without specific mechanics".to_string(),
            core_tags: vec![WeaponDamage, DamageAmplification],
            core_scrolls: vec![],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 7,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "tanky_sustain".into(),
            name: "Tanky Sustain".to_string(),
            description: "Survivability through shields, HP, and damage reduction".to_string(),
            core_tags: vec![Shields, Survivability, DamageReduction, Healing],
            core_scrolls: vec![],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 6,
            difficulty: Difficulty::Easy,
        },
        Archetype {
            id: "glass_cannon".into(),
            name: "Glass Cannon".to_string(),
            description: "Maximum damage at the cost of survivability".to_string(),
            core_tags: vec![WeaponDamage, DamageAmplification],
            core_scrolls: vec!["scroll_glass_cannon".into()],
            recommended_ascensions: vec![],
            required_inscription: None,
            power_level: 9,
            difficulty: Difficulty::Hard,
        },
    ]
}
