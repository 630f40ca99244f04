//! Item scoring.
//!
//! Computes the multi-factor score of one candidate item against the
//! run snapshot and the detected archetype. The factor order and
//! coefficients are a numeric contract: identical inputs must produce
//! identical breakdowns, and downstream consumers (tiering, historical
//! comparisons) rely on the exact values.

use crate::detector::Detection;
use crate::graph::SynergyGraph;
use crate::inscription::{InscriptionCatalog, InscriptionId};
use crate::item::Item;
use crate::run_state::RunState;
use crate::tag::SynergyTag;
use crate::template::{BuildTemplate, TemplateCatalog};
use crate::weapon::WeaponClass;
use serde::{Deserialize, Serialize};

/// Base score per point of power rating.
pub const POWER_WEIGHT: f64 = 10.0;
/// Flat score per direct synergy partner already acquired.
pub const DIRECT_SYNERGY_WEIGHT: f64 = 25.0;
/// Flat score per item tag already present in the build.
pub const TAG_OVERLAP_WEIGHT: f64 = 10.0;
/// Multiplier growth per synergy-chain link.
pub const CHAIN_DEPTH_WEIGHT: f64 = 0.2;
/// Flat score removed per acquired anti-synergy partner.
pub const ANTI_SYNERGY_WEIGHT: f64 = 50.0;
/// Pairing bonus per item tag in the inscription's synergy set.
pub const PAIRING_TAG_MATCH: f64 = 0.5;
/// Pairing malus per item tag in the inscription's anti-synergy set.
pub const PAIRING_TAG_CLASH: f64 = 1.0;
/// Lower clamp of the pairing bonus.
pub const PAIRING_BONUS_MIN: f64 = -2.0;
/// Upper clamp of the pairing bonus.
pub const PAIRING_BONUS_MAX: f64 = 4.0;
/// Upper clamp of the weapon-fit multiplier.
pub const WEAPON_FIT_MAX: f64 = 2.0;
/// Template bonus for an item core to the selected template.
pub const TEMPLATE_CORE_BONUS: f64 = 4.0;
/// Template bonus for an item recommended by the selected template.
pub const TEMPLATE_RECOMMENDED_BONUS: f64 = 1.5;

/// Full breakdown of one item's score.
///
/// Read-only, copyable, serializable; produced fresh per call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Acquired items named in the candidate's synergy list.
    pub direct_synergies: u32,

    /// Candidate tags already present somewhere in the build.
    pub tag_overlap: u32,

    /// Pairing-inscription bonus, clamped to
    /// [[`PAIRING_BONUS_MIN`], [`PAIRING_BONUS_MAX`]]. Zero without an
    /// active pairing.
    pub pairing_bonus: f64,

    /// Weapon-fit multiplier in [1.0, [`WEAPON_FIT_MAX`]].
    pub weapon_fit: f64,

    /// Archetype-fit multiplier; 1.0 unless the candidate belongs to
    /// the detected archetype.
    pub archetype_fit: f64,

    /// Synergy links between candidate and build, both directions
    /// counted independently.
    pub chain_depth: u32,

    /// Acquired items named in the candidate's anti-synergy list.
    pub anti_synergy_penalty: u32,

    /// Combined score, clamped to a minimum of 0.
    pub total: f64,
}

/// Template bonus for a candidate against one template.
///
/// Core items get [`TEMPLATE_CORE_BONUS`], recommended items
/// [`TEMPLATE_RECOMMENDED_BONUS`]; otherwise the weighted tag-fit
/// score maps to a small bonus tier.
///
/// # Examples
///
/// ```rust
/// use buildwise::{template_bonus, Item, Rarity, Scroll, TemplateCatalog};
///
/// let catalog = TemplateCatalog::builtin();
/// let template = catalog.get(&"ll_no_reload".into()).unwrap();
///
/// let item = Item::Scroll(Scroll {
///     id: "scroll_merciless_combo".into(),
///     name: "Merciless Combo".to_string(),
///     rarity: Rarity::Legendary,
///     effect: String::new(),
///     enhanced_effect: None,
///     discardable: false,
///     tags: vec![],
///     synergy_with: vec![],
///     anti_synergy_with: vec![],
///     archetypes: vec![],
///     power: None,
/// });
///
/// assert_eq!(template_bonus(&item, template), 4.0);
/// ```
pub fn template_bonus(item: &Item, template: &BuildTemplate) -> f64 {
    if template.is_core(item.id()) {
        return TEMPLATE_CORE_BONUS;
    }
    if template.is_recommended(item.id()) {
        return TEMPLATE_RECOMMENDED_BONUS;
    }
    match template.fit_score(item.tags()) {
        fit if fit >= 3 => 1.0,
        2 => 0.6,
        1 => 0.3,
        _ => 0.0,
    }
}

/// Scores candidate items against a run snapshot.
///
/// Pure with respect to its inputs: never mutates the snapshot, the
/// detection, or the catalogs.
///
/// # Examples
///
/// ```rust
/// use buildwise::*;
///
/// let archetypes = ArchetypeCatalog::builtin();
/// let templates = TemplateCatalog::builtin();
/// let inscriptions = InscriptionCatalog::builtin();
///
/// let run = RunState::new();
/// let detection = ArchetypeDetector::new(&archetypes).detect(&run);
/// let scorer = ItemScorer::new(&inscriptions, &templates);
///
/// let item = Item::Scroll(Scroll {
///     id: "scroll_plain".into(),
///     name: "Plain".to_string(),
///     rarity: Rarity::Normal,
///     effect: String::new(),
///     enhanced_effect: None,
///     discardable: true,
///     tags: vec![],
///     synergy_with: vec![],
///     anti_synergy_with: vec![],
///     archetypes: vec![],
///     power: Some(5),
/// });
///
/// let score = scorer.score(&item, &run, &detection);
/// assert_eq!(score.total, 50.0); // base power only
/// ```
pub struct ItemScorer<'a> {
    inscriptions: &'a InscriptionCatalog,
    templates: &'a TemplateCatalog,
}

impl<'a> ItemScorer<'a> {
    /// Create a scorer over the given catalogs.
    pub fn new(inscriptions: &'a InscriptionCatalog, templates: &'a TemplateCatalog) -> Self {
        Self {
            inscriptions,
            templates,
        }
    }

    /// Score one candidate.
    ///
    /// The combination order is fixed: base power, flat synergy and
    /// overlap terms, then the pairing, weapon-fit, archetype-fit,
    /// template, and chain multipliers, then the anti-synergy
    /// deduction, then the zero clamp.
    pub fn score(&self, item: &Item, run: &RunState, detection: &Detection) -> ScoreBreakdown {
        let graph = SynergyGraph::build(item, run);

        let direct_synergies = graph.direct_synergies();
        let tag_overlap = self.tag_overlap(item, run);
        let pairing_bonus = self.pairing_bonus(item, run);
        let weapon_fit = self.weapon_fit(item, run);
        let archetype_fit = self.archetype_fit(item, detection);
        let chain_depth = graph.chain_depth();
        let anti_synergy_penalty = graph.conflicts();

        let mut total = f64::from(item.power()) * POWER_WEIGHT;
        total += f64::from(direct_synergies) * DIRECT_SYNERGY_WEIGHT;
        total += f64::from(tag_overlap) * TAG_OVERLAP_WEIGHT;
        total *= 1.0 + pairing_bonus;
        total *= weapon_fit;
        total *= archetype_fit;
        total *= 1.0 + self.template_term(item, run);
        total *= 1.0 + f64::from(chain_depth) * CHAIN_DEPTH_WEIGHT;
        total -= f64::from(anti_synergy_penalty) * ANTI_SYNERGY_WEIGHT;

        ScoreBreakdown {
            direct_synergies,
            tag_overlap,
            pairing_bonus,
            weapon_fit,
            archetype_fit,
            chain_depth,
            anti_synergy_penalty,
            total: total.max(0.0),
        }
    }

    /// Candidate tags already present in the union of acquired tags.
    /// Each tag counts once no matter how many acquired items carry it.
    fn tag_overlap(&self, item: &Item, run: &RunState) -> u32 {
        let acquired = run.acquired_tag_set();
        item.tags().iter().filter(|tag| acquired.contains(tag)).count() as u32
    }

    /// Pairing bonus; zero unless both weapon slots carry the same
    /// inscription and the catalog knows it.
    fn pairing_bonus(&self, item: &Item, run: &RunState) -> f64 {
        use SynergyTag::*;

        let Some(inscription) = run.active_inscription() else {
            return 0.0;
        };
        let Some(effect) = self.inscriptions.get(inscription) else {
            return 0.0;
        };

        let mut bonus = 0.0;
        for tag in item.tags() {
            if effect.synergy_tags.contains(tag) {
                bonus += PAIRING_TAG_MATCH;
            }
            if effect.anti_synergy_tags.contains(tag) {
                bonus -= PAIRING_TAG_CLASH;
            }
        }

        match inscription {
            InscriptionId::MagazineShare => {
                if item.has_tag(NoReload) {
                    bonus += 2.0;
                }
                if item.has_tag(AmmoCapacity) {
                    bonus += 1.5;
                }
                // The 1-bullet interaction: stacking and fire-rate tags
                // spike in value when either weapon holds a single round
                let single_round = run.weapons.equipped().any(|w| w.stats.magazine == 1);
                if single_round {
                    if item.has_tag(RateOfFire) {
                        bonus += 2.5;
                    }
                    if item.has_tag(MagazineStacking) {
                        bonus += 3.0;
                    }
                }
            }
            InscriptionId::ElementShare => {
                if item.has_tag(ElementalDamage) {
                    bonus += 1.0;
                }
                let elements = item.tags().iter().filter(|t| t.is_elemental_subtag()).count();
                bonus += elements as f64 * 0.8;
            }
            InscriptionId::CritxShare => {
                if item.has_tag(CriticalHit) {
                    bonus += 2.0;
                }
                if item.has_tag(WeakspotDamage) {
                    bonus += 1.0;
                }
                if item.has_tag(LuckyShot) {
                    bonus -= 2.0;
                }
            }
        }

        bonus.clamp(PAIRING_BONUS_MIN, PAIRING_BONUS_MAX)
    }

    /// Weapon-fit multiplier over the equipped slots.
    fn weapon_fit(&self, item: &Item, run: &RunState) -> f64 {
        use SynergyTag::*;

        if run.weapons.primary.is_none() && run.weapons.secondary.is_none() {
            return 1.0;
        }

        let mut fit = 1.0;
        for weapon in run.weapons.equipped() {
            let matching = item.tags().iter().filter(|tag| weapon.tags.contains(tag)).count();
            fit += matching as f64 * 0.1;

            if weapon.class == WeaponClass::Sniper && item.has_tag(CriticalHit) {
                fit += 0.3;
            }
            if weapon.class == WeaponClass::SubmachineGun && item.has_tag(RateOfFire) {
                fit += 0.2;
            }
            if weapon.element.is_some() && item.has_tag(ElementalDamage) {
                fit += 0.25;
            }
        }

        fit.min(WEAPON_FIT_MAX)
    }

    /// Archetype-fit multiplier; scales with detection confidence.
    fn archetype_fit(&self, item: &Item, detection: &Detection) -> f64 {
        let Some(archetype) = &detection.archetype else {
            return 1.0;
        };
        if !item.archetypes().contains(&archetype.id) {
            return 1.0;
        }
        1.0 + 0.5 * (detection.confidence / 100.0)
    }

    /// Template bonus for the selected template; zero when none is
    /// selected or the id is unknown to the catalog.
    fn template_term(&self, item: &Item, run: &RunState) -> f64 {
        let Some(template_id) = &run.selected_template else {
            return 0.0;
        };
        let Some(template) = self.templates.get(template_id) else {
            return 0.0;
        };
        template_bonus(item, template)
    }
}
