//! Run-state snapshot.
//!
//! The surrounding application owns a mutable run container; the engine
//! consumes an immutable snapshot of it. Nothing here mutates - the
//! methods are derived queries over the snapshot (acquired ids, tag
//! set, tag frequencies, active pairing).

use crate::ident::Ident;
use crate::inscription::InscriptionId;
use crate::item::{Ascension, Scroll};
use crate::tag::SynergyTag;
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A scroll acquired during the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquiredScroll {
    /// The scroll itself.
    pub scroll: Scroll,
    /// Acquisition time, epoch milliseconds.
    pub acquired_at: u64,
    /// Whether the enhanced version was taken.
    #[serde(default)]
    pub enhanced: bool,
}

/// An ascension acquired during the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquiredAscension {
    /// The ascension itself.
    pub ascension: Ascension,
    /// Current level (1-based). Irrelevant to scoring.
    pub current_level: u8,
    /// Acquisition time, epoch milliseconds.
    pub acquired_at: u64,
}

/// The run's two weapon slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponSlots {
    /// Primary slot.
    pub primary: Option<Weapon>,
    /// Secondary slot.
    pub secondary: Option<Weapon>,
}

impl WeaponSlots {
    /// The active pairing inscription, if any.
    ///
    /// A pairing is active only when both slots are filled and both
    /// weapons carry the same inscription id. This is derived state,
    /// never stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildwise::{InscriptionId, Weapon, WeaponClass, WeaponSlots, WeaponStats};
    ///
    /// fn pistol(inscription: Option<InscriptionId>) -> Weapon {
    ///     Weapon {
    ///         id: "weapon_pupil".into(),
    ///         name: "Pupil".to_string(),
    ///         class: WeaponClass::Pistol,
    ///         stats: WeaponStats {
    ///             damage: 45.0,
    ///             magazine: 1,
    ///             crit_multiplier: 2.2,
    ///             rate_of_fire: 2.0,
    ///             reload_time: 1.0,
    ///             elemental_effect_chance: None,
    ///         },
    ///         element: None,
    ///         inscription,
    ///         tags: vec![],
    ///     }
    /// }
    ///
    /// let mut slots = WeaponSlots::default();
    /// assert_eq!(slots.active_inscription(), None);
    ///
    /// slots.primary = Some(pistol(Some(InscriptionId::MagazineShare)));
    /// slots.secondary = Some(pistol(Some(InscriptionId::MagazineShare)));
    /// assert_eq!(slots.active_inscription(), Some(InscriptionId::MagazineShare));
    ///
    /// slots.secondary = Some(pistol(Some(InscriptionId::CritxShare)));
    /// assert_eq!(slots.active_inscription(), None);
    /// ```
    pub fn active_inscription(&self) -> Option<InscriptionId> {
        let primary = self.primary.as_ref()?.inscription?;
        let secondary = self.secondary.as_ref()?.inscription?;
        (primary == secondary).then_some(primary)
    }

    /// Iterate over the equipped weapons, primary first.
    pub fn equipped(&self) -> impl Iterator<Item = &Weapon> {
        self.primary.iter().chain(self.secondary.iter())
    }
}

/// Snapshot of the current run.
///
/// The engine treats this as read-only input; all state transitions
/// happen in the caller's store. The `detected_build` /
/// `build_confidence` pair mirrors the store's cached detection and is
/// advisory only - the engine recomputes detection on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Selected hero, if any.
    #[serde(default)]
    pub hero: Option<Ident>,

    /// The two weapon slots.
    #[serde(default)]
    pub weapons: WeaponSlots,

    /// Scrolls acquired so far.
    #[serde(default)]
    pub acquired_scrolls: Vec<AcquiredScroll>,

    /// Ascensions acquired so far.
    #[serde(default)]
    pub acquired_ascensions: Vec<AcquiredAscension>,

    /// Id of the selected build template, if any.
    #[serde(default)]
    pub selected_template: Option<Ident>,

    /// Cached detected-build id from the store. Advisory only.
    #[serde(default)]
    pub detected_build: Option<Ident>,

    /// Cached detection confidence from the store. Advisory only.
    #[serde(default)]
    pub build_confidence: f64,
}

impl RunState {
    /// Create an empty run snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of all acquired items, scrolls first.
    pub fn acquired_ids(&self) -> impl Iterator<Item = &Ident> {
        self.acquired_scrolls
            .iter()
            .map(|s| &s.scroll.id)
            .chain(self.acquired_ascensions.iter().map(|a| &a.ascension.id))
    }

    /// Whether the given scroll id has been acquired.
    pub fn has_scroll(&self, id: &Ident) -> bool {
        self.acquired_scrolls.iter().any(|s| &s.scroll.id == id)
    }

    /// Union of tags across all acquired items.
    ///
    /// Duplicates across multiple acquired items collapse; tag-overlap
    /// scoring counts each tag once.
    pub fn acquired_tag_set(&self) -> BTreeSet<SynergyTag> {
        let mut tags = BTreeSet::new();
        for s in &self.acquired_scrolls {
            tags.extend(s.scroll.tags.iter().copied());
        }
        for a in &self.acquired_ascensions {
            tags.extend(a.ascension.tags.iter().copied());
        }
        tags
    }

    /// Tag frequency across all acquired items.
    ///
    /// Unlike [`acquired_tag_set`](Self::acquired_tag_set), every
    /// occurrence counts; the detector sums these per archetype.
    pub fn tag_frequencies(&self) -> BTreeMap<SynergyTag, u32> {
        let mut freq = BTreeMap::new();
        for s in &self.acquired_scrolls {
            for &tag in &s.scroll.tags {
                *freq.entry(tag).or_insert(0) += 1;
            }
        }
        for a in &self.acquired_ascensions {
            for &tag in &a.ascension.tags {
                *freq.entry(tag).or_insert(0) += 1;
            }
        }
        freq
    }

    /// The active pairing inscription, if any. See
    /// [`WeaponSlots::active_inscription`].
    pub fn active_inscription(&self) -> Option<InscriptionId> {
        self.weapons.active_inscription()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Rarity;

    fn scroll(id: &str, tags: Vec<SynergyTag>) -> AcquiredScroll {
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

    fn ascension(id: &str, tags: Vec<SynergyTag>) -> AcquiredAscension {
        AcquiredAscension {
            ascension: Ascension {
                id: id.into(),
                name: id.to_string(),
                hero: "lei_luo".into(),
                description: String::new(),
                max_level: 3,
                levels: vec![],
                tags,
                synergy_with: vec![],
                anti_synergy_with: vec![],
                archetypes: vec![],
                power: None,
            },
            current_level: 1,
            acquired_at: 0,
        }
    }

    #[test]
    fn test_acquired_ids_cover_both_kinds() {
        let mut run = RunState::new();
        run.acquired_scrolls.push(scroll("scroll_a", vec![]));
        run.acquired_ascensions
            .push(ascension("asc_b", vec![]));

        let ids: Vec<_> = run.acquired_ids().collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], &Ident::new("scroll_a"));
        assert_eq!(ids[1], &Ident::new("asc_b"));
        assert!(run.has_scroll(&"scroll_a".into()));
        assert!(!run.has_scroll(&"asc_b".into()));
    }

    #[test]
    fn test_tag_set_collapses_duplicates() {
        let mut run = RunState::new();
        run.acquired_scrolls
            .push(scroll("a", vec![SynergyTag::FireDamage, SynergyTag::Burning]));
        run.acquired_scrolls
            .push(scroll("b", vec![SynergyTag::FireDamage]));

        let tags = run.acquired_tag_set();
        assert_eq!(tags.len(), 2);

        let freq = run.tag_frequencies();
        assert_eq!(freq[&SynergyTag::FireDamage], 2);
        assert_eq!(freq[&SynergyTag::Burning], 1);
    }

    #[test]
    fn test_empty_run_queries() {
        let run = RunState::new();
        assert_eq!(run.acquired_ids().count(), 0);
        assert!(run.acquired_tag_set().is_empty());
        assert!(run.tag_frequencies().is_empty());
        assert_eq!(run.active_inscription(), None);
    }
}
