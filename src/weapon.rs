//! Weapon types.
//!
//! Weapons are held in the run's two slots and feed two scoring terms:
//! the weapon-fit multiplier (tag and class matching) and the pairing
//! bonus (when both slots carry the same inscription).

use crate::ident::Ident;
use crate::inscription::InscriptionId;
use crate::tag::SynergyTag;
use serde::{Deserialize, Serialize};

/// Weapon category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Pistol,
    Rifle,
    SubmachineGun,
    Shotgun,
    Sniper,
    Launcher,
    Injector,
    Melee,
}

/// Elemental damage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Lightning,
    Corrosion,
}

/// Base numeric stats of a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Damage per shot.
    pub damage: f64,
    /// Magazine capacity.
    pub magazine: u32,
    /// Critical hit multiplier.
    pub crit_multiplier: f64,
    /// Shots per second.
    pub rate_of_fire: f64,
    /// Reload time in seconds; 0 means the magazine refills instantly.
    pub reload_time: f64,
    /// Chance to inflict the weapon's elemental effect, in percent.
    #[serde(default)]
    pub elemental_effect_chance: Option<f64>,
}

/// An equippable weapon.
///
/// # Examples
///
/// ```rust
/// use buildwise::{SynergyTag, Weapon, WeaponClass, WeaponStats};
///
/// let goshawk = Weapon {
///     id: "weapon_goshawk".into(),
///     name: "Goshawk".to_string(),
///     class: WeaponClass::Sniper,
///     stats: WeaponStats {
///         damage: 500.0,
///         magazine: 5,
///         crit_multiplier: 4.5,
///         rate_of_fire: 0.8,
///         reload_time: 2.5,
///         elemental_effect_chance: None,
///     },
///     element: None,
///     inscription: None,
///     tags: vec![SynergyTag::WeaponDamage, SynergyTag::CriticalHit],
/// };
/// assert!(goshawk.has_tag(SynergyTag::CriticalHit));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique weapon id.
    pub id: Ident,

    /// Display name.
    pub name: String,

    /// Weapon category.
    pub class: WeaponClass,

    /// Base numeric stats.
    pub stats: WeaponStats,

    /// Elemental type, if any.
    #[serde(default)]
    pub element: Option<Element>,

    /// Pairing inscription rolled on this weapon, if any.
    #[serde(default)]
    pub inscription: Option<InscriptionId>,

    /// Synergy tags.
    pub tags: Vec<SynergyTag>,
}

impl Weapon {
    /// Whether this weapon carries the given tag.
    pub fn has_tag(&self, tag: SynergyTag) -> bool {
        self.tags.contains(&tag)
    }
}
