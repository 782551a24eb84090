use crate::card::CardRecord;

/// Caller-supplied node filter, applied before any scoring so excluded
/// cards never contribute nodes or edges and the quadratic pair pass is
/// paid on the reduced set.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Closed inclusive mana value range.
    pub min_mana: f64,
    pub max_mana: f64,
    pub include_lands: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_mana: 0.0,
            max_mana: 15.0,
            include_lands: true,
        }
    }
}

impl FilterParams {
    pub fn keeps(&self, card: &CardRecord) -> bool {
        let in_range = card.mana_value >= self.min_mana && card.mana_value <= self.max_mana;
        in_range && (self.include_lands || !card.is_land())
    }

    /// Pure predicate filter; running it twice yields an identical subset.
    pub fn apply(&self, cards: Vec<CardRecord>) -> Vec<CardRecord> {
        cards.into_iter().filter(|c| self.keeps(c)).collect()
    }
}
