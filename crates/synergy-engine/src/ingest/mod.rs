use crate::card::CardRecord;
use tracing::info;

pub mod scryfall;

use scryfall::ScryfallClient;

/// Split a raw decklist into clean card names: whitespace trimmed, blank
/// lines dropped. The first surviving entry is conventionally the
/// commander (a rendering hint, never a scoring input).
pub fn parse_decklist(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep only resolved lookups, preserving input order. Absent cards have
/// already been logged by the client; they simply never become nodes.
pub fn collect_resolved(results: Vec<Option<CardRecord>>) -> Vec<CardRecord> {
    results.into_iter().flatten().collect()
}

/// Look up every name sequentially against the card database. Lookup
/// failures degrade to fewer records, never to an error.
pub async fn resolve_deck(client: &ScryfallClient, names: &[String]) -> Vec<CardRecord> {
    let mut results = Vec::with_capacity(names.len());
    for name in names {
        results.push(client.lookup(name).await);
    }
    let records = collect_resolved(results);
    info!(
        requested = names.len(),
        resolved = records.len(),
        "deck resolved"
    );
    records
}
