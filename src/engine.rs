//! Recommendation engine entry point.
//!
//! Orchestrates one detection pass, per-candidate scoring and
//! reasoning, tier assignment, and the final ranking. A pure function
//! of its inputs: the snapshot and catalogs are never mutated, and
//! identical inputs produce identical output.

use crate::archetype::ArchetypeCatalog;
use crate::detector::{ArchetypeDetector, Detection};
use crate::inscription::InscriptionCatalog;
use crate::item::Item;
use crate::reason::generate_reasoning;
use crate::run_state::RunState;
use crate::scorer::{ItemScorer, ScoreBreakdown};
use crate::template::TemplateCatalog;
use log::trace;
use serde::{Deserialize, Serialize};

/// Discrete quality tier of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// Map a total score to its tier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwise::Tier;
    ///
    /// assert_eq!(Tier::from_score(500.0), Tier::S);
    /// assert_eq!(Tier::from_score(499.999), Tier::A);
    /// assert_eq!(Tier::from_score(150.0), Tier::B);
    /// assert_eq!(Tier::from_score(74.9), Tier::D);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score >= 500.0 {
            Tier::S
        } else if score >= 300.0 {
            Tier::A
        } else if score >= 150.0 {
            Tier::B
        } else if score >= 75.0 {
            Tier::C
        } else {
            Tier::D
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        };
        f.write_str(s)
    }
}

/// One scored, explained, tiered candidate.
///
/// Produced fresh per [`RecommendationEngine::recommend`] call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The candidate item.
    pub item: Item,

    /// Full score breakdown; `score.total` drives the ranking.
    pub score: ScoreBreakdown,

    /// Ordered justification strings, never empty.
    pub reasoning: Vec<String>,

    /// Quality tier derived from the total score.
    pub tier: Tier,

    /// Confidence of the batch's archetype detection, 0-100.
    pub confidence: f64,
}

/// The recommendation engine.
///
/// Borrows the three read-only catalogs; every call re-detects the
/// archetype and re-scores from scratch, so repeated and concurrent
/// invocations over consistent snapshots are safe.
///
/// # Examples
///
/// ```rust
/// use buildwise::*;
///
/// let archetypes = ArchetypeCatalog::builtin();
/// let templates = TemplateCatalog::builtin();
/// let inscriptions = InscriptionCatalog::builtin();
/// let engine = RecommendationEngine::new(&archetypes, &templates, &inscriptions);
///
/// let candidate = Item::Scroll(Scroll {
///     id: "scroll_plain".into(),
///     name: "Plain Scroll".to_string(),
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
/// let recs = engine.recommend(&[candidate], &RunState::new());
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].score.total, 50.0);
/// assert_eq!(recs[0].tier, Tier::D);
/// ```
pub struct RecommendationEngine<'a> {
    archetypes: &'a ArchetypeCatalog,
    templates: &'a TemplateCatalog,
    inscriptions: &'a InscriptionCatalog,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine over the given catalogs.
    pub fn new(
        archetypes: &'a ArchetypeCatalog,
        templates: &'a TemplateCatalog,
        inscriptions: &'a InscriptionCatalog,
    ) -> Self {
        Self {
            archetypes,
            templates,
            inscriptions,
        }
    }

    /// Detect the pursued archetype for a snapshot.
    ///
    /// Exposed for callers that want the classification without
    /// scoring a batch; `recommend` runs the same detection internally.
    pub fn detect_archetype(&self, run: &RunState) -> Detection {
        ArchetypeDetector::new(self.archetypes).detect(run)
    }

    /// Score, explain, and rank a batch of candidates.
    ///
    /// Detection runs once per batch: it depends only on the acquired
    /// items and equipped weapons, not on any candidate. The result is
    /// sorted by descending total score; equal scores keep their input
    /// order. An empty candidate list yields an empty result.
    pub fn recommend(&self, candidates: &[Item], run: &RunState) -> Vec<Recommendation> {
        let detection = self.detect_archetype(run);
        let scorer = ItemScorer::new(self.inscriptions, self.templates);

        let mut recommendations: Vec<Recommendation> = candidates
            .iter()
            .map(|item| {
                let score = scorer.score(item, run, &detection);
                trace!("scored {}: {:.1}", item.id(), score.total);
                let reasoning = generate_reasoning(
                    item,
                    run,
                    &detection,
                    &score,
                    self.templates,
                    self.inscriptions,
                );
                let tier = Tier::from_score(score.total);
                Recommendation {
                    item: item.clone(),
                    score,
                    reasoning,
                    tier,
                    confidence: detection.confidence,
                }
            })
            .collect();

        recommendations.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
        recommendations
    }
}
