//! Pairing inscriptions ("twin inscriptions").
//!
//! A pairing inscription becomes active only when both equipped weapons
//! carry the same inscription id; that derived state unlocks the pairing
//! bonus in the scorer and short-circuits archetype detection. The
//! catalog maps each inscription to the tag sets and archetypes it
//! promotes.

use crate::error::CatalogError;
use crate::ident::Ident;
use crate::tag::SynergyTag;
use crate::weapon::{Weapon, WeaponClass};
use serde::{Deserialize, Serialize};

/// Rate-of-fire ceiling above which magazine-share cannot roll.
const MAGAZINE_SHARE_MAX_ROF: f64 = 8.0;

/// The closed set of pairing inscription ids.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InscriptionId {
    /// Both weapons share magazine capacity.
    MagazineShare,
    /// Both weapons share elemental damage types.
    ElementShare,
    /// Both weapons share a combined crit multiplier.
    CritxShare,
}

impl InscriptionId {
    /// Get the snake_case name of this inscription id.
    pub fn as_str(self) -> &'static str {
        match self {
            InscriptionId::MagazineShare => "magazine_share",
            InscriptionId::ElementShare => "element_share",
            InscriptionId::CritxShare => "critx_share",
        }
    }

    /// Whether this inscription can roll on the given weapon.
    ///
    /// Magazine-share never appears on weapons with instant refill or a
    /// rate of fire above 8; critx-share never appears on launchers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwise::{InscriptionId, Weapon, WeaponClass, WeaponStats};
    ///
    /// let rainbow = Weapon {
    ///     id: "weapon_rainbow".into(),
    ///     name: "Rainbow".to_string(),
    ///     class: WeaponClass::Pistol,
    ///     stats: WeaponStats {
    ///         damage: 50.0,
    ///         magazine: 1,
    ///         crit_multiplier: 2.0,
    ///         rate_of_fire: 1.5,
    ///         reload_time: 0.0, // refills instantly
    ///         elemental_effect_chance: None,
    ///     },
    ///     element: None,
    ///     inscription: None,
    ///     tags: vec![],
    /// };
    /// assert!(!InscriptionId::MagazineShare.can_roll_on(&rainbow));
    /// assert!(InscriptionId::CritxShare.can_roll_on(&rainbow));
    /// ```
    pub fn can_roll_on(self, weapon: &Weapon) -> bool {
        match self {
            InscriptionId::MagazineShare => {
                weapon.stats.reload_time != 0.0
                    && weapon.stats.rate_of_fire <= MAGAZINE_SHARE_MAX_ROF
            }
            InscriptionId::CritxShare => weapon.class != WeaponClass::Launcher,
            InscriptionId::ElementShare => true,
        }
    }
}

/// Combined crit multiplier of an active critx-share pair.
///
/// The two multipliers are summed, then reduced by 2.0: a 2.5x and a
/// 4.2x pair combine to 4.7x.
pub fn shared_crit_multiplier(a: f64, b: f64) -> f64 {
    a + b - 2.0
}

/// Combined magazine capacity of an active magazine-share pair.
pub fn shared_magazine_capacity(a: u32, b: u32) -> u32 {
    a + b
}

/// Definition of one pairing inscription: the tag sets it rewards and
/// punishes, and the archetypes it promotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscriptionEffect {
    /// Inscription id.
    pub id: InscriptionId,

    /// Display name.
    pub name: String,

    /// Short description.
    pub description: String,

    /// Full effect text.
    pub effect: String,

    /// Item tags that synergize with this inscription.
    pub synergy_tags: Vec<SynergyTag>,

    /// Item tags that work against this inscription.
    #[serde(default)]
    pub anti_synergy_tags: Vec<SynergyTag>,

    /// Ids of the archetypes an active pair of this inscription promotes.
    #[serde(default)]
    pub archetypes: Vec<Ident>,
}

/// Read-only catalog of pairing inscription definitions.
///
/// # Examples
///
/// ```rust
/// use buildwise::{InscriptionCatalog, InscriptionId, SynergyTag};
///
/// let catalog = InscriptionCatalog::builtin();
/// let magazine = catalog.get(InscriptionId::MagazineShare).unwrap();
/// assert!(magazine.synergy_tags.contains(&SynergyTag::NoReload));
/// assert!(magazine.anti_synergy_tags.contains(&SynergyTag::ReloadSpeed));
/// ```
#[derive(Debug, Clone)]
pub struct InscriptionCatalog {
    entries: Vec<InscriptionEffect>,
}

impl InscriptionCatalog {
    /// Build a catalog from a list of definitions.
    ///
    /// Returns an error if two definitions share an id.
    pub fn new(entries: Vec<InscriptionEffect>) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(CatalogError::DuplicateId(Ident::new(entry.id.as_str())));
            }
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The built-in inscription definitions.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_inscriptions(),
        }
    }

    /// Look up a definition by id.
    pub fn get(&self, id: InscriptionId) -> Option<&InscriptionEffect> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &InscriptionEffect> {
        self.entries.iter()
    }
}

fn builtin_inscriptions() -> Vec<InscriptionEffect> {
    use SynergyTag::*;

    vec![
        InscriptionEffect {
            id: InscriptionId::MagazineShare,
            name: "Magazine Share".to_string(),
            description: "Weapon 1 & 2 share magazine capacity".to_string(),
            effect: "Gain 10 stacks every second while firing, and 5 stacks on hitting \
                     enemies. Each stack lasts for 10s. The maximum number of stacks is \
                     equal to the shared magazine capacity. Each stack +0.75% weapon damage."
                .to_string(),
            synergy_tags: vec![MagazineStacking, AmmoCapacity, NoReload, RateOfFire, WeaponDamage],
            anti_synergy_tags: vec![ReloadSpeed],
            archetypes: vec!["magazine_stacking".into(), "no_reload".into()],
        },
        InscriptionEffect {
            id: InscriptionId::ElementShare,
            name: "Element Share".to_string(),
            description: "Weapon 1 & 2 share elemental damage types".to_string(),
            effect: "Both weapons can inflict both elemental effects. Elemental effect \
                     chance is based on the weapon that the effect comes from. When dealing \
                     damage, the highest damage bonus is chosen."
                .to_string(),
            synergy_tags: vec![
                DualElement,
                ElementalDamage,
                FireDamage,
                LightningDamage,
                CorrosionDamage,
                Burning,
                Shock,
                Decay,
            ],
            anti_synergy_tags: vec![],
            archetypes: vec![
                "elemental_fire".into(),
                "elemental_lightning".into(),
                "elemental_corrosion".into(),
                "dual_element".into(),
            ],
        },
        InscriptionEffect {
            id: InscriptionId::CritxShare,
            name: "CritX Share".to_string(),
            description: "Weapon 1 & 2 share a CritX bonus".to_string(),
            effect: "The CritX of both weapons are combined, then reduced by 2. Example: a \
                     pair with 2.5x and 4.2x will combine to get 2.5x + 4.2x - 2.0x = 4.7x. \
                     However, weapons have 50% stability."
                .to_string(),
            synergy_tags: vec![CritScaling, CriticalHit, WeakspotDamage, Accuracy],
            anti_synergy_tags: vec![LuckyShot],
            archetypes: vec!["critical_hit".into()],
        },
    ]
}
