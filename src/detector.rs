//! Build archetype detection.
//!
//! Infers which archetype the player is pursuing from the run snapshot.
//! Three stages, first match wins:
//!
//! 1. An active pairing inscription maps directly to its archetype -
//!    equipping a matching pair is unambiguous intent and overrides all
//!    tag evidence.
//! 2. A signature enabler scroll maps directly to its archetype.
//! 3. Tag-frequency fallback: the archetype whose core tags are most
//!    represented among acquired items, if the sum clears a noise
//!    threshold.
//!
//! Detection never fails; with no evidence it returns the first catalog
//! archetype at confidence 0.

use crate::archetype::{Archetype, ArchetypeCatalog};
use crate::ident::Ident;
use crate::inscription::InscriptionId;
use crate::run_state::RunState;
use crate::tag::SynergyTag;
use log::debug;
use serde::{Deserialize, Serialize};

/// Confidence assigned to an active magazine-share pairing.
pub const PAIRING_CONFIDENCE_MAGAZINE: f64 = 95.0;
/// Confidence assigned to an active element-share pairing.
pub const PAIRING_CONFIDENCE_ELEMENT: f64 = 90.0;
/// Confidence assigned to an active critx-share pairing.
pub const PAIRING_CONFIDENCE_CRITX: f64 = 90.0;
/// Confidence assigned to the no-reload enabler scroll.
pub const ENABLER_CONFIDENCE_NO_RELOAD: f64 = 75.0;
/// Confidence assigned to the glass-cannon enabler scroll.
pub const ENABLER_CONFIDENCE_GLASS_CANNON: f64 = 80.0;
/// Minimum summed tag frequency for the fallback stage to accept an
/// archetype; anything below is noise.
pub const TAG_SCORE_THRESHOLD: u32 = 3;

/// Signature scroll that enables the no-reload archetype.
pub const ENABLER_MERCILESS_COMBO: &str = "scroll_merciless_combo";
/// Signature scroll that enables the glass-cannon archetype.
pub const ENABLER_GLASS_CANNON: &str = "scroll_glass_cannon";

const COMPLEMENT_ADVANCED_DEPOT: &str = "scroll_advanced_depot";
const COMPLEMENT_AGAINST_THE_FLOW: &str = "scroll_against_the_flow";

/// Result of one detection pass.
///
/// Recomputed on every call; lifetime is a single scoring pass.
/// `archetype` is `None` only when the catalog itself is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The inferred archetype, if the catalog has any entries.
    pub archetype: Option<Archetype>,

    /// Confidence in the inference, 0-100.
    pub confidence: f64,

    /// Tags supporting the inference.
    pub matching_tags: Vec<SynergyTag>,

    /// Display names of defining pieces the build still lacks.
    pub missing_elements: Vec<String>,
}

impl Detection {
    fn none(catalog: &ArchetypeCatalog) -> Self {
        Self {
            archetype: catalog.first().cloned(),
            confidence: 0.0,
            matching_tags: Vec::new(),
            missing_elements: Vec::new(),
        }
    }
}

/// Infers the pursued archetype from a run snapshot.
///
/// Deterministic and side-effect free; always returns a well-formed
/// [`Detection`].
///
/// # Examples
///
/// ```rust
/// use buildwise::{ArchetypeCatalog, ArchetypeDetector, RunState};
///
/// let catalog = ArchetypeCatalog::builtin();
/// let detector = ArchetypeDetector::new(&catalog);
///
/// let detection = detector.detect(&RunState::new());
/// assert_eq!(detection.confidence, 0.0);
/// ```
pub struct ArchetypeDetector<'a> {
    archetypes: &'a ArchetypeCatalog,
}

impl<'a> ArchetypeDetector<'a> {
    /// Create a detector over the given archetype catalog.
    pub fn new(archetypes: &'a ArchetypeCatalog) -> Self {
        Self { archetypes }
    }

    /// Run one detection pass over the snapshot.
    pub fn detect(&self, run: &RunState) -> Detection {
        if let Some(detection) = self.detect_pairing(run) {
            debug!(
                "archetype detected via pairing inscription: {} ({}%)",
                detection.archetype.as_ref().map(|a| a.id.as_str()).unwrap_or("-"),
                detection.confidence
            );
            return detection;
        }

        if let Some(detection) = self.detect_enabler(run) {
            debug!(
                "archetype detected via enabler scroll: {} ({}%)",
                detection.archetype.as_ref().map(|a| a.id.as_str()).unwrap_or("-"),
                detection.confidence
            );
            return detection;
        }

        self.detect_by_tag_frequency(run)
    }

    /// Stage 1: active pairing inscription.
    ///
    /// Falls through (returns `None`) when no pairing is active or the
    /// mapped archetype is missing from the catalog.
    fn detect_pairing(&self, run: &RunState) -> Option<Detection> {
        use SynergyTag::*;

        let (archetype_id, confidence, matching_tags): (Ident, f64, Vec<SynergyTag>) =
            match run.active_inscription()? {
                InscriptionId::MagazineShare => (
                    "magazine_stacking".into(),
                    PAIRING_CONFIDENCE_MAGAZINE,
                    vec![MagazineStacking, AmmoCapacity, RateOfFire],
                ),
                InscriptionId::ElementShare => (
                    "dual_element".into(),
                    PAIRING_CONFIDENCE_ELEMENT,
                    vec![DualElement, ElementalDamage],
                ),
                InscriptionId::CritxShare => (
                    "critical_hit".into(),
                    PAIRING_CONFIDENCE_CRITX,
                    vec![CriticalHit, CritScaling],
                ),
            };

        let archetype = self.archetypes.get(&archetype_id)?;
        Some(Detection {
            archetype: Some(archetype.clone()),
            confidence,
            matching_tags,
            missing_elements: Vec::new(),
        })
    }

    /// Stage 2: signature enabler scrolls.
    fn detect_enabler(&self, run: &RunState) -> Option<Detection> {
        use SynergyTag::*;

        if run.has_scroll(&ENABLER_MERCILESS_COMBO.into()) {
            if let Some(archetype) = self.archetypes.get(&"no_reload".into()) {
                let mut missing = Vec::new();
                if !run.has_scroll(&COMPLEMENT_ADVANCED_DEPOT.into()) {
                    missing.push("Advanced Depot".to_string());
                }
                if !run.has_scroll(&COMPLEMENT_AGAINST_THE_FLOW.into()) {
                    missing.push("Against the Flow".to_string());
                }
                return Some(Detection {
                    archetype: Some(archetype.clone()),
                    confidence: ENABLER_CONFIDENCE_NO_RELOAD,
                    matching_tags: vec![NoReload, AmmoCapacity],
                    missing_elements: missing,
                });
            }
        }

        if run.has_scroll(&ENABLER_GLASS_CANNON.into()) {
            if let Some(archetype) = self.archetypes.get(&"glass_cannon".into()) {
                return Some(Detection {
                    archetype: Some(archetype.clone()),
                    confidence: ENABLER_CONFIDENCE_GLASS_CANNON,
                    matching_tags: vec![WeaponDamage, DamageAmplification],
                    missing_elements: Vec::new(),
                });
            }
        }

        None
    }

    /// Stage 3: tag-frequency fallback.
    ///
    /// Sums acquired-tag frequencies over each archetype's core tags;
    /// the best strictly-greater sum wins (catalog order breaks ties).
    fn detect_by_tag_frequency(&self, run: &RunState) -> Detection {
        let frequencies = run.tag_frequencies();

        let mut best: Option<&Archetype> = None;
        let mut best_score = 0u32;

        for archetype in self.archetypes.iter() {
            let score: u32 = archetype
                .core_tags
                .iter()
                .map(|tag| frequencies.get(tag).copied().unwrap_or(0))
                .sum();
            if score > best_score {
                best_score = score;
                best = Some(archetype);
            }
        }

        if let Some(archetype) = best {
            if best_score >= TAG_SCORE_THRESHOLD {
                let confidence =
                    (best_score as f64 / archetype.core_tags.len() as f64 * 100.0).min(100.0);
                debug!(
                    "archetype detected via tag frequency: {} (score {}, {:.0}%)",
                    archetype.id, best_score, confidence
                );
                return Detection {
                    archetype: Some(archetype.clone()),
                    confidence,
                    matching_tags: archetype
                        .core_tags
                        .iter()
                        .copied()
                        .filter(|tag| frequencies.contains_key(tag))
                        .collect(),
                    missing_elements: Vec::new(),
                };
            }
        }

        Detection::none(self.archetypes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Rarity, Scroll};
    use crate::run_state::AcquiredScroll;
    use crate::weapon::{Weapon, WeaponClass, WeaponStats};

    fn weapon(inscription: Option<InscriptionId>) -> Weapon {
        Weapon {
            id: "weapon_test".into(),
            name: "Test".to_string(),
            class: WeaponClass::Rifle,
            stats: WeaponStats {
                damage: 80.0,
                magazine: 30,
                crit_multiplier: 1.5,
                rate_of_fire: 5.0,
                reload_time: 2.0,
                elemental_effect_chance: None,
            },
            element: None,
            inscription,
            tags: vec![],
        }
    }

    fn acquired(id: &str, tags: Vec<SynergyTag>) -> AcquiredScroll {
        AcquiredScroll {
            scroll: Scroll {
                id: id.into(),
                name: id.to_string(),
                rarity: Rarity::Normal,
                effect: String::new(),
                enhanced_effect: None,
                discardable: true,
                tags,
                synergy_with: vec![],
                anti_synergy_with: vec![],
                archetypes: vec![],
                power: None,
            },
            acquired_at: 0,
            enhanced: false,
        }
    }

    #[test]
    fn test_pairing_detection_overrides_tags() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.weapons.primary = Some(weapon(Some(InscriptionId::MagazineShare)));
        run.weapons.secondary = Some(weapon(Some(InscriptionId::MagazineShare)));
        // Heavy fire-tag evidence that stage 1 must override
        for i in 0..5 {
            run.acquired_scrolls.push(acquired(
                &format!("s{i}"),
                vec![SynergyTag::FireDamage, SynergyTag::Burning],
            ));
        }

        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "magazine_stacking");
        assert_eq!(detection.confidence, PAIRING_CONFIDENCE_MAGAZINE);
        assert!(detection.matching_tags.contains(&SynergyTag::MagazineStacking));
    }

    #[test]
    fn test_mismatched_inscriptions_do_not_pair() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.weapons.primary = Some(weapon(Some(InscriptionId::MagazineShare)));
        run.weapons.secondary = Some(weapon(Some(InscriptionId::CritxShare)));

        let detection = detector.detect(&run);
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_element_and_critx_pairings() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.weapons.primary = Some(weapon(Some(InscriptionId::ElementShare)));
        run.weapons.secondary = Some(weapon(Some(InscriptionId::ElementShare)));
        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "dual_element");
        assert_eq!(detection.confidence, PAIRING_CONFIDENCE_ELEMENT);

        run.weapons.primary = Some(weapon(Some(InscriptionId::CritxShare)));
        run.weapons.secondary = Some(weapon(Some(InscriptionId::CritxShare)));
        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "critical_hit");
        assert_eq!(detection.confidence, PAIRING_CONFIDENCE_CRITX);
    }

    #[test]
    fn test_enabler_detection_with_missing_elements() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.acquired_scrolls
            .push(acquired(ENABLER_MERCILESS_COMBO, vec![SynergyTag::NoReload]));
        run.acquired_scrolls
            .push(acquired(COMPLEMENT_ADVANCED_DEPOT, vec![SynergyTag::AmmoCapacity]));

        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "no_reload");
        assert_eq!(detection.confidence, ENABLER_CONFIDENCE_NO_RELOAD);
        // Depot is acquired, Against the Flow is not
        assert_eq!(detection.missing_elements, vec!["Against the Flow".to_string()]);
    }

    #[test]
    fn test_glass_cannon_enabler() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.acquired_scrolls
            .push(acquired(ENABLER_GLASS_CANNON, vec![SynergyTag::WeaponDamage]));

        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "glass_cannon");
        assert_eq!(detection.confidence, ENABLER_CONFIDENCE_GLASS_CANNON);
        assert!(detection.missing_elements.is_empty());
    }

    #[test]
    fn test_tag_frequency_detection() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.acquired_scrolls.push(acquired(
            "s1",
            vec![SynergyTag::FireDamage, SynergyTag::Burning],
        ));
        run.acquired_scrolls.push(acquired(
            "s2",
            vec![
                SynergyTag::FireDamage,
                SynergyTag::ElementalDamage,
                SynergyTag::AreaDamage,
            ],
        ));

        // elemental_fire core tags [fire, elemental, burning, area] sum
        // to 2+1+1+1 = 5, beating dual_element's 4
        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "elemental_fire");
        assert_eq!(detection.confidence, 100.0);
        assert_eq!(
            detection.matching_tags,
            vec![
                SynergyTag::FireDamage,
                SynergyTag::ElementalDamage,
                SynergyTag::Burning,
                SynergyTag::AreaDamage
            ]
        );
    }

    #[test]
    fn test_tag_frequency_tie_goes_to_earlier_catalog_entry() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.acquired_scrolls.push(acquired(
            "s1",
            vec![SynergyTag::FireDamage, SynergyTag::Burning],
        ));
        run.acquired_scrolls.push(acquired(
            "s2",
            vec![SynergyTag::FireDamage, SynergyTag::ElementalDamage],
        ));

        // dual_element and elemental_fire both sum to 4; dual_element
        // is earlier in catalog order and keeps the win
        let detection = detector.detect(&run);
        assert_eq!(detection.archetype.unwrap().id, "dual_element");
        assert_eq!(detection.confidence, 50.0);
    }

    #[test]
    fn test_tag_score_below_threshold_is_noise() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        run.acquired_scrolls
            .push(acquired("s1", vec![SynergyTag::FireDamage, SynergyTag::Burning]));

        // Best sum is 2, below the threshold of 3
        let detection = detector.detect(&run);
        assert_eq!(detection.confidence, 0.0);
        assert!(detection.matching_tags.is_empty());
        // Fallback still references the first catalog entry
        assert_eq!(detection.archetype.unwrap().id, "magazine_stacking");
    }

    #[test]
    fn test_empty_catalog_yields_no_archetype() {
        let catalog = ArchetypeCatalog::new(vec![]).unwrap();
        let detector = ArchetypeDetector::new(&catalog);

        let detection = detector.detect(&RunState::new());
        assert!(detection.archetype.is_none());
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_confidence_capped_at_100() {
        let catalog = ArchetypeCatalog::builtin();
        let detector = ArchetypeDetector::new(&catalog);

        let mut run = RunState::new();
        for i in 0..6 {
            run.acquired_scrolls.push(acquired(
                &format!("s{i}"),
                vec![SynergyTag::MovementSpeed, SynergyTag::WeaponDamage],
            ));
        }

        // movement_speed has 2 core tags, sum is 12: confidence clamps
        let detection = detector.detect(&run);
        assert_eq!(detection.confidence, 100.0);
    }
}
