//! Synergy tag vocabulary.
//!
//! Every item, weapon, archetype, and template carries a set of
//! `SynergyTag`s; all matching in the engine is built on this closed
//! vocabulary. Tags have no internal structure - membership is
//! set-based equality.

use serde::{Deserialize, Serialize};

/// Semantic label attached to items, weapons, and build definitions.
///
/// The vocabulary is closed: damage types, status effects, crit and
/// precision mechanics, weapon-handling mechanics, skill mechanics,
/// and defense categories, plus the pairing-specific labels
/// (`MagazineStacking`, `DualElement`, `CritScaling`).
///
/// Serialized with snake_case names, matching catalog data files:
///
/// ```rust
/// use buildwise::SynergyTag;
///
/// let tag: SynergyTag = serde_json::from_str("\"rate_of_fire\"").unwrap();
/// assert_eq!(tag, SynergyTag::RateOfFire);
/// assert_eq!(tag.as_str(), "rate_of_fire");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyTag {
    // Damage types
    WeaponDamage,
    SkillDamage,
    ElementalDamage,
    FireDamage,
    LightningDamage,
    CorrosionDamage,
    AreaDamage,
    ExplosionDamage,
    DamageAmplification,

    // Status effects
    Burning,
    Shock,
    Decay,

    // Crit and precision
    CriticalHit,
    CritScaling,
    WeakspotDamage,
    Accuracy,
    LuckyShot,

    // Weapon handling
    RateOfFire,
    ReloadSpeed,
    NoReload,
    AmmoCapacity,
    MagazineStacking,
    DualElement,

    // Skills
    CooldownReduction,
    SkillCapacity,
    SkillEnhancement,

    // Mobility and defense
    MovementSpeed,
    Shields,
    Survivability,
    DamageReduction,
    Healing,
}

impl SynergyTag {
    /// Get the snake_case name of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            SynergyTag::WeaponDamage => "weapon_damage",
            SynergyTag::SkillDamage => "skill_damage",
            SynergyTag::ElementalDamage => "elemental_damage",
            SynergyTag::FireDamage => "fire_damage",
            SynergyTag::LightningDamage => "lightning_damage",
            SynergyTag::CorrosionDamage => "corrosion_damage",
            SynergyTag::AreaDamage => "area_damage",
            SynergyTag::ExplosionDamage => "explosion_damage",
            SynergyTag::DamageAmplification => "damage_amplification",
            SynergyTag::Burning => "burning",
            SynergyTag::Shock => "shock",
            SynergyTag::Decay => "decay",
            SynergyTag::CriticalHit => "critical_hit",
            SynergyTag::CritScaling => "crit_scaling",
            SynergyTag::WeakspotDamage => "weakspot_damage",
            SynergyTag::Accuracy => "accuracy",
            SynergyTag::LuckyShot => "lucky_shot",
            SynergyTag::RateOfFire => "rate_of_fire",
            SynergyTag::ReloadSpeed => "reload_speed",
            SynergyTag::NoReload => "no_reload",
            SynergyTag::AmmoCapacity => "ammo_capacity",
            SynergyTag::MagazineStacking => "magazine_stacking",
            SynergyTag::DualElement => "dual_element",
            SynergyTag::CooldownReduction => "cooldown_reduction",
            SynergyTag::SkillCapacity => "skill_capacity",
            SynergyTag::SkillEnhancement => "skill_enhancement",
            SynergyTag::MovementSpeed => "movement_speed",
            SynergyTag::Shields => "shields",
            SynergyTag::Survivability => "survivability",
            SynergyTag::DamageReduction => "damage_reduction",
            SynergyTag::Healing => "healing",
        }
    }

    /// The three elemental sub-tags (fire, lightning, corrosion).
    ///
    /// Used by the element-share pairing bonus, which pays per distinct
    /// elemental sub-tag on an item.
    pub fn is_elemental_subtag(self) -> bool {
        matches!(
            self,
            SynergyTag::FireDamage | SynergyTag::LightningDamage | SynergyTag::CorrosionDamage
        )
    }
}

impl std::fmt::Display for SynergyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_names() {
        assert_eq!(SynergyTag::NoReload.as_str(), "no_reload");
        assert_eq!(SynergyTag::CritScaling.to_string(), "crit_scaling");
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for tag in [
            SynergyTag::WeaponDamage,
            SynergyTag::MagazineStacking,
            SynergyTag::DualElement,
            SynergyTag::CooldownReduction,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn test_elemental_subtags() {
        assert!(SynergyTag::FireDamage.is_elemental_subtag());
        assert!(SynergyTag::LightningDamage.is_elemental_subtag());
        assert!(SynergyTag::CorrosionDamage.is_elemental_subtag());
        assert!(!SynergyTag::ElementalDamage.is_elemental_subtag());
        assert!(!SynergyTag::Burning.is_elemental_subtag());
    }
}
