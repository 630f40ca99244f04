//! Reasoning generation.
//!
//! Turns a score breakdown into the ordered list of human-readable
//! justifications shown next to each recommendation. Template
//! reasoning leads because a selected template is curated authority
//! over the raw heuristics; conflict warnings always surface even when
//! positive reasons precede them.

use crate::detector::Detection;
use crate::inscription::InscriptionCatalog;
use crate::item::Item;
use crate::run_state::RunState;
use crate::scorer::ScoreBreakdown;
use crate::template::TemplateCatalog;

/// Power rating at or above which an otherwise unremarkable item is
/// called out as a strong standalone pick.
const STANDALONE_POWER_FLOOR: u8 = 8;

/// Build the ordered justification list for one scored candidate.
///
/// Every rule is independent and additive; only the template rule has
/// an internal priority chain (core beats recommended beats tag fit).
/// When no rule fires, a generic power-based fallback is emitted, so
/// the list is never empty.
pub fn generate_reasoning(
    item: &Item,
    run: &RunState,
    detection: &Detection,
    score: &ScoreBreakdown,
    templates: &TemplateCatalog,
    inscriptions: &InscriptionCatalog,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(template) = run
        .selected_template
        .as_ref()
        .and_then(|id| templates.get(id))
    {
        if template.is_core(item.id()) {
            reasons.push(format!(
                "\u{1F3AF} CORE ITEM for {} build (MUST TAKE)",
                template.name
            ));
        } else if template.is_recommended(item.id()) {
            reasons.push(format!("\u{2713} Recommended for {} build", template.name));
        } else {
            let fit = template.fit_score(item.tags());
            if fit >= 3 {
                reasons.push(format!("\u{2713} Strong synergy with {} build", template.name));
            } else if fit >= 2 {
                reasons.push(format!("\u{2713} Good fit for {} build", template.name));
            }
        }
    }

    if score.pairing_bonus > 1.0 {
        if let Some(effect) = run
            .active_inscription()
            .and_then(|id| inscriptions.get(id))
        {
            reasons.push(format!(
                "\u{2B50} PERFECT FIT for {} build (+{}% bonus)",
                effect.name,
                (score.pairing_bonus * 100.0).round() as i64
            ));
        }
    }

    if score.direct_synergies > 0 {
        reasons.push(format!(
            "\u{2713} Synergizes with {} item{} in your build",
            score.direct_synergies,
            if score.direct_synergies > 1 { "s" } else { "" }
        ));
    }

    if score.archetype_fit > 1.1 && detection.confidence > 50.0 {
        if let Some(archetype) = &detection.archetype {
            reasons.push(format!("\u{2713} Strengthens your {} build", archetype.name));
        }
    }

    if score.chain_depth >= 3 {
        reasons.push(format!(
            "\u{2713} Creates {}-item synergy chain",
            score.chain_depth
        ));
    }

    if score.anti_synergy_penalty > 0 {
        reasons.push(format!(
            "\u{26A0} Conflicts with {} item{} - not recommended",
            score.anti_synergy_penalty,
            if score.anti_synergy_penalty > 1 { "s" } else { "" }
        ));
    }

    if score.weapon_fit > 1.3 {
        reasons.push("\u{2713} Excellent synergy with your weapons".to_string());
    }

    if reasons.is_empty() {
        let power = item.power();
        if power >= STANDALONE_POWER_FLOOR {
            reasons.push(format!("Strong standalone scroll ({power}/10 power)"));
        } else {
            reasons.push("Decent option, no major synergies detected".to_string());
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeCatalog;
    use crate::detector::ArchetypeDetector;
    use crate::item::{Rarity, Scroll};
    use crate::scorer::ItemScorer;

    fn scroll(id: &str, power: Option<u8>) -> Scroll {
        Scroll {
            id: id.into(),
            name: id.to_string(),
            rarity: Rarity::Normal,
            effect: String::new(),
            enhanced_effect: None,
            discardable: true,
            tags: vec![],
            synergy_with: vec![],
            anti_synergy_with: vec![],
            archetypes: vec![],
            power,
        }
    }

    fn explain(item: &Item, run: &RunState) -> Vec<String> {
        let archetypes = ArchetypeCatalog::builtin();
        let templates = TemplateCatalog::builtin();
        let inscriptions = InscriptionCatalog::builtin();
        let detection = ArchetypeDetector::new(&archetypes).detect(run);
        let score = ItemScorer::new(&inscriptions, &templates).score(item, run, &detection);
        generate_reasoning(item, run, &detection, &score, &templates, &inscriptions)
    }

    #[test]
    fn test_fallback_for_plain_item() {
        let item = Item::Scroll(scroll("x", Some(5)));
        let reasons = explain(&item, &RunState::new());
        assert_eq!(reasons, vec!["Decent option, no major synergies detected"]);
    }

    #[test]
    fn test_fallback_for_high_power_item() {
        let item = Item::Scroll(scroll("x", Some(9)));
        let reasons = explain(&item, &RunState::new());
        assert_eq!(reasons, vec!["Strong standalone scroll (9/10 power)"]);
    }

    #[test]
    fn test_core_item_marker_leads() {
        let mut run = RunState::new();
        run.selected_template = Some("ll_no_reload".into());

        let item = Item::Scroll(scroll("scroll_merciless_combo", Some(9)));
        let reasons = explain(&item, &run);
        assert!(reasons[0].contains("CORE ITEM for No-Reload DPS build"));
        assert!(reasons[0].contains("MUST TAKE"));
    }

    #[test]
    fn test_recommended_marker() {
        let mut run = RunState::new();
        run.selected_template = Some("cp_fire_elemental".into());

        let item = Item::Scroll(scroll("scroll_elemental_weave", None));
        let reasons = explain(&item, &run);
        assert_eq!(
            reasons[0],
            "\u{2713} Recommended for Fire Elemental Spam build"
        );
    }

    #[test]
    fn test_unknown_template_id_emits_no_template_reason() {
        let mut run = RunState::new();
        run.selected_template = Some("missing".into());

        let item = Item::Scroll(scroll("x", Some(5)));
        let reasons = explain(&item, &run);
        assert_eq!(reasons, vec!["Decent option, no major synergies detected"]);
    }

    #[test]
    fn test_synergy_count_pluralization() {
        use crate::run_state::AcquiredScroll;

        let mut run = RunState::new();
        for id in ["a", "b"] {
            run.acquired_scrolls.push(AcquiredScroll {
                scroll: scroll(id, None),
                acquired_at: 0,
                enhanced: false,
            });
        }

        let one = Item::Scroll(Scroll {
            synergy_with: vec!["a".into()],
            ..scroll("x", None)
        });
        assert!(explain(&one, &run)
            .iter()
            .any(|r| r.contains("Synergizes with 1 item in your build")));

        let two = Item::Scroll(Scroll {
            synergy_with: vec!["a".into(), "b".into()],
            ..scroll("y", None)
        });
        assert!(explain(&two, &run)
            .iter()
            .any(|r| r.contains("Synergizes with 2 items in your build")));
    }

    #[test]
    fn test_conflict_warning_always_surfaces() {
        use crate::run_state::AcquiredScroll;

        let mut run = RunState::new();
        for id in ["a", "b"] {
            run.acquired_scrolls.push(AcquiredScroll {
                scroll: scroll(id, None),
                acquired_at: 0,
                enhanced: false,
            });
        }

        // Positive synergy and conflicts on the same candidate
        let item = Item::Scroll(Scroll {
            synergy_with: vec!["a".into()],
            anti_synergy_with: vec!["b".into()],
            ..scroll("x", None)
        });

        let reasons = explain(&item, &run);
        assert!(reasons.iter().any(|r| r.contains("Synergizes with 1 item")));
        assert!(reasons
            .iter()
            .any(|r| r.contains("Conflicts with 1 item - not recommended")));
    }
}
