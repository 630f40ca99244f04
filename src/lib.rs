//! # buildwise - Deterministic Build-Synergy Recommendation Engine
//!
//! A recommendation engine for roguelite companion tools: given the
//! items a run has already collected, it scores and explains newly
//! offered ones.
//!
//! - **Deterministic** recommendations (same snapshot → same output)
//! - **Pure** (no I/O, no shared state; snapshots in, rankings out)
//! - **Explained** (every score comes with its breakdown and ordered
//!   human-readable reasons)
//! - **Data-driven** (archetypes, templates, and pairing inscriptions
//!   are read-only catalogs, built in or loaded from JSON)
//!
//! ## Core Concepts
//!
//! ### Recommendation Pipeline
//!
//! Candidates flow through a simple pipeline:
//!
//! ```text
//! [RunState] → [ArchetypeDetector] → [ItemScorer] → [Recommendation]
//! ```
//!
//! 1. **Detection** infers the pursued archetype once per batch
//! 2. **Scoring** combines nine factors into a total per candidate
//! 3. **Reasoning + tiering** explain the score and rank the batch
//!
//! ### Key Features
//!
//! - **Synergy Graph**: id-based links between the candidate and the
//!   acquired set drive the synergy, chain, and conflict terms
//! - **Pairing Inscriptions**: a matched weapon pair unlocks bonus
//!   scoring and short-circuits detection
//! - **Templates**: curated build lists outrank raw heuristics
//! - **Graceful Degradation**: missing weapons, templates, or catalog
//!   rows become neutral terms, never errors
//!
//! ## Example
//!
//! ```rust
//! use buildwise::*;
//!
//! let archetypes = ArchetypeCatalog::builtin();
//! let templates = TemplateCatalog::builtin();
//! let inscriptions = InscriptionCatalog::builtin();
//! let engine = RecommendationEngine::new(&archetypes, &templates, &inscriptions);
//!
//! let candidate = Item::Scroll(Scroll {
//!     id: "scroll_concentrated_strike".into(),
//!     name: "Concentrated Strike".to_string(),
//!     rarity: Rarity::Rare,
//!     effect: "+40% crit damage".to_string(),
//!     enhanced_effect: None,
//!     discardable: true,
//!     tags: vec![SynergyTag::CriticalHit, SynergyTag::WeaponDamage],
//!     synergy_with: vec![],
//!     anti_synergy_with: vec![],
//!     archetypes: vec!["critical_hit".into()],
//!     power: Some(7),
//! });
//!
//! let recommendations = engine.recommend(&[candidate], &RunState::new());
//! assert_eq!(recommendations.len(), 1);
//! assert_eq!(recommendations[0].score.total, 70.0);
//! assert_eq!(recommendations[0].tier, Tier::D);
//! ```
//!
//! ## Modules
//!
//! - [`ident`] - Interned identifier type
//! - [`tag`] - Synergy tag vocabulary
//! - [`item`] - Scrolls, ascensions, and the item sum type
//! - [`weapon`] - Weapon types
//! - [`inscription`] - Pairing inscriptions and their catalog
//! - [`archetype`] - Build archetypes and their catalog
//! - [`template`] - Curated build templates and their catalog
//! - [`run_state`] - The run snapshot
//! - [`graph`] - Synergy link graph
//! - [`detector`] - Archetype detection
//! - [`scorer`] - Item scoring
//! - [`reason`] - Reasoning generation
//! - [`engine`] - The recommendation engine
//! - [`error`] - Catalog error types

pub mod archetype;
pub mod detector;
pub mod engine;
pub mod error;
pub mod graph;
pub mod ident;
pub mod inscription;
pub mod item;
pub mod reason;
pub mod run_state;
pub mod scorer;
pub mod tag;
pub mod template;
pub mod weapon;

// Re-export main types for convenience
pub use archetype::{Archetype, ArchetypeCatalog, Difficulty};
pub use detector::{ArchetypeDetector, Detection};
pub use engine::{Recommendation, RecommendationEngine, Tier};
pub use error::CatalogError;
pub use graph::{LinkKind, SynergyGraph};
pub use ident::Ident;
pub use inscription::{
    shared_crit_multiplier, shared_magazine_capacity, InscriptionCatalog, InscriptionEffect,
    InscriptionId,
};
pub use item::{Ascension, AscensionLevel, Item, ItemKind, Rarity, Scroll};
pub use reason::generate_reasoning;
pub use run_state::{AcquiredAscension, AcquiredScroll, RunState, WeaponSlots};
pub use scorer::{template_bonus, ItemScorer, ScoreBreakdown};
pub use tag::SynergyTag;
pub use template::{BuildTemplate, GameMode, TemplateCatalog};
pub use weapon::{Element, Weapon, WeaponClass, WeaponStats};
