//! Synergy link graph.
//!
//! Provides the `SynergyGraph` type, a directed graph of synergy and
//! conflict links between a candidate item and the acquired set. The
//! scorer reads its link counts directly: direct synergies are the
//! candidate's outgoing synergy edges, chain depth counts both
//! directions, and the anti-synergy penalty is the candidate's
//! outgoing conflict edges.
//!
//! Links are id-based: an edge exists only when one side's partner
//! list names the other side's id, and only acquired items participate.
//! Items not yet acquired cannot contribute edges.

use crate::ident::Ident;
use crate::item::Item;
use crate::run_state::RunState;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Kind of link between two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// One item names the other in its synergy-partner list.
    Synergy,
    /// One item names the other in its anti-synergy-partner list.
    Conflict,
}

/// Directed graph of synergy/conflict links around one candidate item.
///
/// Nodes are the candidate plus one node per acquired entry (a
/// duplicated acquisition gets its own node, so its links count
/// separately, matching how the acquired list is scanned). Edge
/// direction records which side declared the link: `a -> b` means a's
/// partner list names b.
///
/// Note that a mutual synergy listing produces two edges and therefore
/// a chain depth of 2 for a single underlying relationship; this
/// double count is part of the scoring contract.
///
/// # Examples
///
/// ```rust
/// use buildwise::{Item, Rarity, RunState, Scroll, SynergyGraph};
/// use buildwise::run_state::AcquiredScroll;
///
/// fn scroll(id: &str, synergy_with: Vec<&str>) -> Scroll {
///     Scroll {
///         id: id.into(),
///         name: id.to_string(),
///         rarity: Rarity::Normal,
///         effect: String::new(),
///         enhanced_effect: None,
///         discardable: true,
///         tags: vec![],
///         synergy_with: synergy_with.into_iter().map(Into::into).collect(),
///         anti_synergy_with: vec![],
///         archetypes: vec![],
///         power: None,
///     }
/// }
///
/// let mut run = RunState::new();
/// run.acquired_scrolls.push(AcquiredScroll {
///     scroll: scroll("scroll_depot", vec!["scroll_combo"]),
///     acquired_at: 0,
///     enhanced: false,
/// });
///
/// // The candidate and the acquired scroll list each other
/// let candidate = Item::Scroll(scroll("scroll_combo", vec!["scroll_depot"]));
/// let graph = SynergyGraph::build(&candidate, &run);
///
/// assert_eq!(graph.direct_synergies(), 1); // candidate -> depot
/// assert_eq!(graph.chain_depth(), 2); // both directions count
/// assert_eq!(graph.conflicts(), 0);
/// ```
pub struct SynergyGraph {
    graph: DiGraph<Ident, LinkKind>,
    candidate: NodeIndex,
}

impl SynergyGraph {
    /// Build the link graph for one candidate against a run snapshot.
    pub fn build(item: &Item, run: &RunState) -> Self {
        let mut graph = DiGraph::new();
        let candidate = graph.add_node(item.id().clone());

        let acquired = run
            .acquired_scrolls
            .iter()
            .map(|s| (&s.scroll.id, s.scroll.synergy_with.as_slice()))
            .chain(
                run.acquired_ascensions
                    .iter()
                    .map(|a| (&a.ascension.id, a.ascension.synergy_with.as_slice())),
            );

        for (id, partner_ids) in acquired {
            let node = graph.add_node(id.clone());

            if item.synergy_with().contains(id) {
                graph.add_edge(candidate, node, LinkKind::Synergy);
            }
            if partner_ids.contains(item.id()) {
                graph.add_edge(node, candidate, LinkKind::Synergy);
            }
            if item.anti_synergy_with().contains(id) {
                graph.add_edge(candidate, node, LinkKind::Conflict);
            }
        }

        Self { graph, candidate }
    }

    /// Number of acquired items the candidate's synergy list names.
    pub fn direct_synergies(&self) -> u32 {
        self.count_edges(Direction::Outgoing, LinkKind::Synergy)
    }

    /// Synergy links in either direction between the candidate and the
    /// acquired set. Both directions count independently.
    pub fn chain_depth(&self) -> u32 {
        self.count_edges(Direction::Outgoing, LinkKind::Synergy)
            + self.count_edges(Direction::Incoming, LinkKind::Synergy)
    }

    /// Number of acquired items the candidate's anti-synergy list names.
    pub fn conflicts(&self) -> u32 {
        self.count_edges(Direction::Outgoing, LinkKind::Conflict)
    }

    /// Total number of nodes (candidate + acquired entries).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn count_edges(&self, direction: Direction, kind: LinkKind) -> u32 {
        self.graph
            .edges_directed(self.candidate, direction)
            .filter(|e| *e.weight() == kind)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Rarity, Scroll};
    use crate::run_state::AcquiredScroll;

    fn scroll(id: &str, synergy_with: Vec<&str>, anti_synergy_with: Vec<&str>) -> Scroll {
        Scroll {
            id: id.into(),
            name: id.to_string(),
            rarity: Rarity::Normal,
            effect: String::new(),
            enhanced_effect: None,
            discardable: true,
            tags: vec![],
            synergy_with: synergy_with.into_iter().map(Into::into).collect(),
            anti_synergy_with: anti_synergy_with.into_iter().map(Into::into).collect(),
            archetypes: vec![],
            power: None,
        }
    }

    fn acquired(scroll: Scroll) -> AcquiredScroll {
        AcquiredScroll {
            scroll,
            acquired_at: 0,
            enhanced: false,
        }
    }

    #[test]
    fn test_empty_run_has_no_links() {
        let run = RunState::new();
        let candidate = Item::Scroll(scroll("x", vec!["a", "b"], vec!["c"]));
        let graph = SynergyGraph::build(&candidate, &run);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.direct_synergies(), 0);
        assert_eq!(graph.chain_depth(), 0);
        assert_eq!(graph.conflicts(), 0);
    }

    #[test]
    fn test_only_acquired_items_link() {
        let mut run = RunState::new();
        run.acquired_scrolls.push(acquired(scroll("a", vec![], vec![])));

        // Candidate names "a" (acquired) and "b" (not acquired)
        let candidate = Item::Scroll(scroll("x", vec!["a", "b"], vec![]));
        let graph = SynergyGraph::build(&candidate, &run);

        assert_eq!(graph.direct_synergies(), 1);
        assert_eq!(graph.chain_depth(), 1);
    }

    #[test]
    fn test_incoming_links_count_toward_chain_only() {
        let mut run = RunState::new();
        // Acquired item names the candidate, but not vice versa
        run.acquired_scrolls.push(acquired(scroll("a", vec!["x"], vec![])));

        let candidate = Item::Scroll(scroll("x", vec![], vec![]));
        let graph = SynergyGraph::build(&candidate, &run);

        assert_eq!(graph.direct_synergies(), 0);
        assert_eq!(graph.chain_depth(), 1);
    }

    #[test]
    fn test_mutual_listing_double_counts() {
        let mut run = RunState::new();
        run.acquired_scrolls.push(acquired(scroll("a", vec!["x"], vec![])));

        let candidate = Item::Scroll(scroll("x", vec!["a"], vec![]));
        let graph = SynergyGraph::build(&candidate, &run);

        // One relationship, two directions, chain depth 2
        assert_eq!(graph.direct_synergies(), 1);
        assert_eq!(graph.chain_depth(), 2);
    }

    #[test]
    fn test_conflicts_are_one_directional() {
        let mut run = RunState::new();
        // Acquired item declares a conflict with the candidate; the
        // candidate's own list is what counts
        run.acquired_scrolls.push(acquired(scroll("a", vec![], vec!["x"])));
        run.acquired_scrolls.push(acquired(scroll("b", vec![], vec![])));

        let candidate = Item::Scroll(scroll("x", vec![], vec!["b"]));
        let graph = SynergyGraph::build(&candidate, &run);

        assert_eq!(graph.conflicts(), 1);
        assert_eq!(graph.chain_depth(), 0);
    }

    #[test]
    fn test_duplicate_acquisitions_count_separately() {
        let mut run = RunState::new();
        run.acquired_scrolls.push(acquired(scroll("a", vec![], vec![])));
        run.acquired_scrolls.push(acquired(scroll("a", vec![], vec![])));

        let candidate = Item::Scroll(scroll("x", vec!["a"], vec![]));
        let graph = SynergyGraph::build(&candidate, &run);

        assert_eq!(graph.direct_synergies(), 2);
        assert_eq!(graph.node_count(), 3);
    }
}
