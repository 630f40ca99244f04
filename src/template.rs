//! Curated build templates and their catalog.
//!
//! Templates are hero-specific "known good" build lists sourced from
//! community wikis: explicit core and recommended item ids plus the
//! primary/secondary tag sets used for fit scoring. A selected template
//! represents curated authority over the raw synergy heuristics, so
//! the scorer and reasoning give it first priority.

use crate::archetype::Difficulty;
use crate::error::CatalogError;
use crate::ident::Ident;
use crate::inscription::InscriptionId;
use crate::tag::SynergyTag;
use crate::weapon::WeaponClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Game mode a template is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Normal,
    Elite,
    Reincarnation,
}

/// A curated, hero-specific build list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildTemplate {
    /// Template id.
    pub id: Ident,

    /// Display name.
    pub name: String,

    /// Id of the hero this template is written for.
    pub hero: Ident,

    /// Game mode the template targets.
    pub mode: GameMode,

    /// Short description.
    pub description: String,

    /// Where the template was sourced from.
    pub source: String,

    /// Scroll ids the build does not work without.
    #[serde(default)]
    pub core_scrolls: Vec<Ident>,

    /// Ascension ids the build does not work without.
    #[serde(default)]
    pub core_ascensions: Vec<Ident>,

    /// Scroll ids that are nice to have.
    #[serde(default)]
    pub recommended_scrolls: Vec<Ident>,

    /// Ascension ids that are nice to have.
    #[serde(default)]
    pub recommended_ascensions: Vec<Ident>,

    /// Weapon classes the template plays best with.
    #[serde(default)]
    pub recommended_weapon_classes: Vec<WeaponClass>,

    /// Pairing inscription the template plays best with.
    #[serde(default)]
    pub recommended_inscription: Option<InscriptionId>,

    /// Main build focus; heavily weighted in fit scoring.
    pub primary_tags: Vec<SynergyTag>,

    /// Supporting elements; lightly weighted in fit scoring.
    pub secondary_tags: Vec<SynergyTag>,

    /// Playstyle notes.
    pub playstyle: String,

    /// Piloting difficulty.
    pub difficulty: Difficulty,

    /// What makes the build work.
    #[serde(default)]
    pub strengths: Vec<String>,

    /// Where the build struggles.
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl BuildTemplate {
    /// Whether the given item id is core to this template.
    pub fn is_core(&self, id: &Ident) -> bool {
        self.core_scrolls.contains(id) || self.core_ascensions.contains(id)
    }

    /// Whether the given item id is recommended for this template.
    pub fn is_recommended(&self, id: &Ident) -> bool {
        self.recommended_scrolls.contains(id) || self.recommended_ascensions.contains(id)
    }

    /// Weighted tag-fit score: 3 points per primary-tag match, 1 point
    /// per secondary-tag match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwise::{SynergyTag, TemplateCatalog};
    ///
    /// let catalog = TemplateCatalog::builtin();
    /// let fire = catalog.get(&"cp_fire_elemental".into()).unwrap();
    ///
    /// // fire_damage is primary (3), area_damage is secondary (1)
    /// let fit = fire.fit_score(&[SynergyTag::FireDamage, SynergyTag::AreaDamage]);
    /// assert_eq!(fit, 4);
    /// ```
    pub fn fit_score(&self, tags: &[SynergyTag]) -> u32 {
        let mut score = 0;
        for tag in tags {
            if self.primary_tags.contains(tag) {
                score += 3;
            } else if self.secondary_tags.contains(tag) {
                score += 1;
            }
        }
        score
    }
}

/// Read-only catalog of build templates, looked up by id.
///
/// # Examples
///
/// ```rust
/// use buildwise::TemplateCatalog;
///
/// let catalog = TemplateCatalog::builtin();
/// let template = catalog.get(&"ll_no_reload".into()).unwrap();
/// assert!(template.is_core(&"scroll_merciless_combo".into()));
/// ```
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<BuildTemplate>,
    index: HashMap<Ident, usize>,
}

impl TemplateCatalog {
    /// Build a catalog from a list of templates.
    ///
    /// Returns an error if two templates share an id.
    pub fn new(entries: Vec<BuildTemplate>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Load a catalog from a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The built-in template definitions.
    pub fn builtin() -> Self {
        Self::new(builtin_templates()).expect("builtin template ids are unique")
    }

    /// Look up a template by id.
    pub fn get(&self, id: &Ident) -> Option<&BuildTemplate> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BuildTemplate> {
        self.entries.iter()
    }

    /// Templates written for the given hero.
    pub fn for_hero(&self, hero: &Ident) -> Vec<&BuildTemplate> {
        self.entries.iter().filter(|t| &t.hero == hero).collect()
    }

    /// Templates targeting the given game mode.
    pub fn for_mode(&self, mode: GameMode) -> Vec<&BuildTemplate> {
        self.entries.iter().filter(|t| t.mode == mode).collect()
    }
}

fn builtin_templates() -> Vec<BuildTemplate> {
    use SynergyTag::*;

    vec![
        BuildTemplate {
            id: "cp_fire_elemental".into(),
            name: "Fire Elemental Spam".to_string(),
            hero: "crown_prince".into(),
            mode: GameMode::Reincarnation,
            description: "Stack burning damage and elemental effects for massive AoE clear"
                .to_string(),
            source: "https://gunfirereborn.fandom.com/wiki/Crown_Prince".to_string(),
            core_scrolls: vec!["scroll_blazing_hoop".into(), "scroll_elemental_catalyst".into()],
            core_ascensions: vec!["asc_flame_enthusiasm".into(), "asc_combustion".into()],
            recommended_scrolls: vec!["scroll_elemental_weave".into()],
            recommended_ascensions: vec![],
            recommended_weapon_classes: vec![WeaponClass::Rifle, WeaponClass::SubmachineGun],
            recommended_inscription: Some(InscriptionId::ElementShare),
            primary_tags: vec![FireDamage, ElementalDamage, Burning],
            secondary_tags: vec![AreaDamage, SkillDamage],
            playstyle: "Focus on spreading burning status effects. Use smoke grenade with \
                        Combustion for massive burning damage. Stack fire damage and elemental \
                        effect chance."
                .to_string(),
            difficulty: Difficulty::Easy,
            strengths: vec![
                "Excellent AoE clear".to_string(),
                "Strong against grouped enemies".to_string(),
                "Scales well into late game".to_string(),
            ],
            weaknesses: vec![
                "Weaker single-target damage".to_string(),
                "Requires specific ascensions".to_string(),
                "Less effective against fire-resistant enemies".to_string(),
            ],
        },
        BuildTemplate {
            id: "cp_lightning_chain".into(),
            name: "Lightning Chain".to_string(),
            hero: "crown_prince".into(),
            mode: GameMode::Reincarnation,
            description: "Chain lightning damage across multiple enemies".to_string(),
            source: "https://gunfirereborn.fandom.com/wiki/Crown_Prince".to_string(),
            core_scrolls: vec!["scroll_elemental_catalyst".into()],
            core_ascensions: vec!["asc_electrodominance".into()],
            recommended_scrolls: vec!["scroll_elemental_weave".into()],
            recommended_ascensions: vec![],
            recommended_weapon_classes: vec![WeaponClass::SubmachineGun],
            recommended_inscription: Some(InscriptionId::ElementShare),
            primary_tags: vec![LightningDamage, ElementalDamage, Shock],
            secondary_tags: vec![AreaDamage, RateOfFire],
            playstyle: "Stack lightning damage and shock chance. Lightning chains to nearby \
                        enemies for excellent crowd control."
                .to_string(),
            difficulty: Difficulty::Medium,
            strengths: vec![
                "Great crowd control".to_string(),
                "Fast clear speed".to_string(),
                "Good against shielded enemies".to_string(),
            ],
            weaknesses: vec![
                "Less effective in open areas".to_string(),
                "Requires enemy grouping".to_string(),
            ],
        },
        BuildTemplate {
            id: "ll_lightning_speed".into(),
            name: "Lightning Speed".to_string(),
            hero: "lei_luo".into(),
            mode: GameMode::Reincarnation,
            description: "High mobility lightning build with fast clear".to_string(),
            source: "https://gunfirereborn.fandom.com/wiki/Lei_Luo".to_string(),
            core_scrolls: vec![],
            core_ascensions: vec!["asc_thunder_turbo".into(), "asc_fulminous_zap".into()],
            recommended_scrolls: vec!["scroll_elemental_catalyst".into()],
            recommended_ascensions: vec![],
            recommended_weapon_classes: vec![WeaponClass::SubmachineGun, WeaponClass::Pistol],
            recommended_inscription: Some(InscriptionId::CritxShare),
            primary_tags: vec![LightningDamage, MovementSpeed, CriticalHit],
            secondary_tags: vec![RateOfFire, SkillDamage],
            playstyle: "Move fast, crit often, spread lightning. Lei Luo excels at hit-and-run \
                        tactics with high mobility."
                .to_string(),
            difficulty: Difficulty::Medium,
            strengths: vec![
                "Very high mobility".to_string(),
                "Safe playstyle".to_string(),
                "Good scaling".to_string(),
            ],
            weaknesses: vec![
                "Lower HP pool".to_string(),
                "Requires accuracy".to_string(),
                "Skill-dependent".to_string(),
            ],
        },
        BuildTemplate {
            id: "ll_no_reload".into(),
            name: "No-Reload DPS".to_string(),
            hero: "lei_luo".into(),
            mode: GameMode::Reincarnation,
            description: "Never reload, stack infinite damage with Merciless Combo".to_string(),
            source: "https://gunfirereborn.fandom.com/wiki/Lei_Luo".to_string(),
            core_scrolls: vec![
                "scroll_merciless_combo".into(),
                "scroll_advanced_depot".into(),
                "scroll_against_the_flow".into(),
            ],
            core_ascensions: vec![],
            recommended_scrolls: vec![],
            recommended_ascensions: vec![],
            recommended_weapon_classes: vec![WeaponClass::SubmachineGun, WeaponClass::Rifle],
            recommended_inscription: Some(InscriptionId::MagazineShare),
            primary_tags: vec![NoReload, AmmoCapacity, WeaponDamage],
            secondary_tags: vec![RateOfFire, MagazineStacking],
            playstyle: "Never reload. Damage stacks infinitely with Merciless Combo. Use large \
                        magazine weapons and never stop firing."
                .to_string(),
            difficulty: Difficulty::Medium,
            strengths: vec![
                "Infinite damage scaling".to_string(),
                "Simple execution".to_string(),
                "Very strong late game".to_string(),
            ],
            weaknesses: vec![
                "Requires specific scrolls".to_string(),
                "Vulnerable while stacking".to_string(),
                "Poor early game".to_string(),
            ],
        },
    ]
}
