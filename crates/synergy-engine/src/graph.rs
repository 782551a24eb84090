use crate::card::CardRecord;
use crate::color;
use crate::synergy::{score, ScoringPolicy};
use serde::{Deserialize, Serialize};

/// Edge tier colors, strongest first.
pub const EDGE_GOLD: &str = "#FFD700";
pub const EDGE_GREEN: &str = "#32CD32";
pub const EDGE_BLUE: &str = "#1E90FF";
pub const EDGE_PURPLE: &str = "#9370DB";
const EDGE_FLAT: &str = "#888888";

const COMMANDER_GLYPH: &str = "\u{1F451}";

/// Visual encoding knobs. Raw synergy weight is unbounded, so width is
/// scaled then capped to keep line thickness legible.
#[derive(Debug, Clone)]
pub struct RenderProfile {
    /// Node size = `node_base + mana_value * node_scale`.
    pub node_base: f64,
    pub node_scale: f64,
    /// Minimum weight for a pair to produce an edge.
    pub threshold: f64,
    pub width_scale: f64,
    pub width_cap: f64,
    /// Banded profiles tier edge color by weight; flat profiles use one
    /// color and vary only width.
    pub banded: bool,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::chromatic()
    }
}

impl RenderProfile {
    /// The full chromatic profile: thick lines, weight-tiered colors.
    pub fn chromatic() -> Self {
        Self {
            node_base: 20.0,
            node_scale: 5.0,
            threshold: 1.0,
            width_scale: 3.0,
            width_cap: 15.0,
            banded: true,
        }
    }

    /// Understated profile for dense decks: thinner lines, one edge color.
    pub fn compact() -> Self {
        Self {
            node_base: 15.0,
            node_scale: 4.0,
            threshold: 1.0,
            width_scale: 1.5,
            width_cap: 6.0,
            banded: false,
        }
    }

    pub fn node_size(&self, mana_value: f64) -> f64 {
        self.node_base + mana_value * self.node_scale
    }

    pub fn edge_width(&self, weight: f64) -> f64 {
        (weight * self.width_scale).min(self.width_cap)
    }

    pub fn edge_color(&self, weight: f64) -> &'static str {
        if !self.banded {
            return EDGE_FLAT;
        }
        if weight >= 4.0 {
            EDGE_GOLD
        } else if weight >= 3.0 {
            EDGE_GREEN
        } else if weight >= 2.0 {
            EDGE_BLUE
        } else {
            EDGE_PURPLE
        }
    }
}

/// One visual node, keyed by card name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub size: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One directed edge: `from`'s text points at `to`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub width: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Directed weighted synergy graph, rebuilt from scratch on every run.
/// Invariant: every edge endpoint exists as a node, and there are no
/// self-loops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynergyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl SynergyGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }
}

/// Assemble the graph for an already-filtered card list.
///
/// Nodes first, then an explicit O(n^2) pass over every ordered pair.
/// The quadratic pass is the dominant cost of the whole pipeline; it is
/// acceptable only because n is bounded by a practical deck size (tens to
/// low hundreds of cards). There is no pruning beyond the caller's filter.
pub fn build_graph(
    cards: &[CardRecord],
    policy: &ScoringPolicy,
    profile: &RenderProfile,
    commander: Option<&str>,
) -> SynergyGraph {
    let mut graph = SynergyGraph::default();

    // Names are node keys: duplicate input names collapse onto one node
    // (first record wins), so the pair pass below can never score a card
    // against its own copy and emit a self-loop.
    let mut seen = std::collections::HashSet::new();
    let cards: Vec<&CardRecord> = cards
        .iter()
        .filter(|c| seen.insert(c.name.as_str()))
        .collect();

    for card in &cards {
        let label = if commander == Some(card.name.as_str()) {
            format!("{COMMANDER_GLYPH} {}", card.name)
        } else {
            card.name.clone()
        };
        let title = match &card.price {
            Some(usd) => format!("{} • ${usd}", card.type_line),
            None => card.type_line.clone(),
        };
        graph.nodes.push(GraphNode {
            id: card.name.clone(),
            label,
            size: profile.node_size(card.mana_value),
            color: color::classify(&card.color_identity, &card.type_line).to_string(),
            title: Some(title),
        });
    }

    // All nodes exist before the first edge is added.
    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate() {
            if i == j {
                continue;
            }
            let result = score(a, b, policy);
            if result.weight >= profile.threshold {
                graph.edges.push(GraphEdge {
                    from: a.name.clone(),
                    to: b.name.clone(),
                    width: profile.edge_width(result.weight),
                    color: profile.edge_color(result.weight).to_string(),
                    title: (!result.reasons.is_empty())
                        .then(|| format!("{} ({:.1})", result.reasons.join(", "), result.weight)),
                });
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, type_line: &str, colors: &[char], mana: f64, text: &str) -> CardRecord {
        CardRecord {
            name: name.to_string(),
            type_line: type_line.to_string(),
            mana_value: mana,
            color_identity: colors.iter().copied().collect(),
            rules_text: text.to_lowercase(),
            price: None,
        }
    }

    #[test]
    fn no_self_loops() {
        let policy = ScoringPolicy::standard();
        // A card whose text strongly references its own type would loop if
        // self-pairs were ever scored.
        let cards = vec![card(
            "Goblin King",
            "Creature — Goblin",
            &['R'],
            3.0,
            "Other Goblins get +1/+1. Goblins you control have haste.",
        )];
        let graph = build_graph(&cards, &policy, &RenderProfile::chromatic(), None);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_names_collapse_onto_one_node() {
        let policy = ScoringPolicy::standard();
        // The same name twice: one node key, and no edge between the
        // copies even though the card's text references its own tribe.
        let lord = card(
            "Goblin Chieftain",
            "Creature — Goblin",
            &['R'],
            3.0,
            "Haste\nOther Goblins you control get +1/+1 and have haste.",
        );
        let graph = build_graph(
            &[lord.clone(), lord],
            &policy,
            &RenderProfile::chromatic(),
            None,
        );
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges.iter().all(|e| e.from != e.to));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let policy = ScoringPolicy::standard();
        // Exactly one mechanical match: weight 1.0, right on the threshold.
        let a = card("A", "Instant", &[], 1.0, "Draw a card.");
        let b = card("B", "Sorcery", &['U'], 2.0, "Draw two cards.");
        let graph = build_graph(
            &[a.clone(), b.clone()],
            &policy,
            &RenderProfile::chromatic(),
            None,
        );
        assert!(graph.edge("A", "B").is_some());

        // Color bonus alone (0.5) stays below the threshold.
        let c = card("C", "Instant", &['R'], 1.0, "");
        let d = card("D", "Sorcery", &['R'], 2.0, "");
        let graph = build_graph(&[c, d], &policy, &RenderProfile::chromatic(), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn every_edge_endpoint_is_a_node() {
        let policy = ScoringPolicy::standard();
        let cards = vec![
            card("A", "Instant", &['B'], 1.0, "Destroy target creature."),
            card("B", "Sorcery", &['B'], 3.0, "Destroy all creatures."),
            card("C", "Creature — Zombie", &['B'], 2.0, "Sacrifice a creature: draw a card."),
        ];
        let graph = build_graph(&cards, &policy, &RenderProfile::chromatic(), None);
        for edge in &graph.edges {
            assert!(graph.node(&edge.from).is_some());
            assert!(graph.node(&edge.to).is_some());
            assert_ne!(edge.from, edge.to);
        }
    }

    #[test]
    fn width_is_scaled_and_capped() {
        let profile = RenderProfile::chromatic();
        assert_eq!(profile.edge_width(2.0), 6.0);
        assert_eq!(profile.edge_width(10.0), 15.0);

        let compact = RenderProfile::compact();
        assert_eq!(compact.edge_width(2.0), 3.0);
        assert_eq!(compact.edge_width(10.0), 6.0);
    }

    #[test]
    fn edge_colors_follow_weight_bands() {
        let profile = RenderProfile::chromatic();
        assert_eq!(profile.edge_color(4.5), EDGE_GOLD);
        assert_eq!(profile.edge_color(4.0), EDGE_GOLD);
        assert_eq!(profile.edge_color(3.0), EDGE_GREEN);
        assert_eq!(profile.edge_color(2.5), EDGE_BLUE);
        assert_eq!(profile.edge_color(1.0), EDGE_PURPLE);

        let flat = RenderProfile::compact();
        assert_eq!(flat.edge_color(4.5), flat.edge_color(1.0));
    }

    #[test]
    fn node_size_scales_with_mana_value() {
        let profile = RenderProfile::chromatic();
        assert_eq!(profile.node_size(0.0), 20.0);
        assert_eq!(profile.node_size(3.0), 35.0);
    }

    #[test]
    fn commander_label_gets_the_crown() {
        let policy = ScoringPolicy::standard();
        let cards = vec![
            card("Krenko, Mob Boss", "Legendary Creature — Goblin Warrior", &['R'], 4.0, ""),
            card("Mountain", "Basic Land — Mountain", &[], 0.0, ""),
        ];
        let graph = build_graph(
            &cards,
            &policy,
            &RenderProfile::chromatic(),
            Some("Krenko, Mob Boss"),
        );
        let commander = graph.node("Krenko, Mob Boss").unwrap();
        assert!(commander.label.starts_with('\u{1F451}'));
        assert_eq!(graph.node("Mountain").unwrap().label, "Mountain");
    }
}
