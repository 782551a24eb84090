pub mod card;
pub mod color;
pub mod filter;
pub mod graph;
pub mod ingest;
pub mod render;
pub mod synergy;

pub mod pipeline {
    use crate::card::CardRecord;
    use crate::filter::FilterParams;
    use crate::graph::{build_graph, RenderProfile, SynergyGraph};
    use crate::synergy::ScoringPolicy;

    /// One full analysis pass: filter first, then score every ordered
    /// pair of the survivors and assemble the graph. Each call builds an
    /// independent graph from scratch; nothing is shared across runs.
    ///
    /// Returns `None` when nothing survives fetching and filtering —
    /// the "nothing to show" state — without attempting graph
    /// construction.
    pub fn analyze(
        cards: Vec<CardRecord>,
        params: &FilterParams,
        policy: &ScoringPolicy,
        profile: &RenderProfile,
        commander: Option<&str>,
    ) -> Option<SynergyGraph> {
        let surviving = params.apply(cards);
        if surviving.is_empty() {
            return None;
        }
        Some(build_graph(&surviving, policy, profile, commander))
    }
}
