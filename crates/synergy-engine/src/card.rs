use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical in-memory card, normalized from a raw Scryfall payload.
/// Immutable once constructed; lives for the duration of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Display name; doubles as the graph node key, so it must be unique
    /// per input line (duplicate names collide on the node key).
    pub name: String,
    /// Human-readable category string ("Creature — Goblin"). For
    /// multi-faced cards this is the front face's type line.
    pub type_line: String,
    /// Converted mana cost. Fractional values exist in some printings.
    pub mana_value: f64,
    /// Color identity symbols from the WUBRG alphabet; empty = colorless.
    pub color_identity: BTreeSet<char>,
    /// Lowercased, newline-joined oracle text of all faces. Only ever used
    /// for keyword containment checks.
    pub rules_text: String,
    /// USD price as reported by the source, if any. Informational only,
    /// never an input to scoring.
    pub price: Option<String>,
}

impl CardRecord {
    pub fn is_land(&self) -> bool {
        self.type_line.contains("Land")
    }
}

/// Raw Scryfall `cards/named` response, as much of it as we consume.
#[derive(Debug, Deserialize)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default)]
    pub prices: Option<Prices>,
}

#[derive(Debug, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<String>,
}

impl ScryfallCard {
    /// Collapse the payload into a [`CardRecord`]. Multi-faced cards keep
    /// the front face's type line and concatenate every face's oracle text.
    pub fn normalize(self) -> CardRecord {
        let (type_line, oracle_text) = match self.card_faces {
            Some(faces) if !faces.is_empty() => {
                let type_line = faces[0].type_line.clone().unwrap_or_default();
                let text = faces
                    .into_iter()
                    .filter_map(|f| f.oracle_text)
                    .collect::<Vec<_>>()
                    .join("\n");
                (type_line, text)
            }
            _ => (
                self.type_line.unwrap_or_default(),
                self.oracle_text.unwrap_or_default(),
            ),
        };

        let color_identity = self
            .color_identity
            .iter()
            .filter_map(|s| s.chars().next())
            .collect();

        CardRecord {
            name: self.name,
            type_line,
            mana_value: self.cmc.unwrap_or(0.0),
            color_identity,
            rules_text: oracle_text.to_lowercase(),
            price: self.prices.and_then(|p| p.usd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_single_face() {
        let card: ScryfallCard = serde_json::from_value(serde_json::json!({
            "name": "Goblin Chieftain",
            "type_line": "Creature — Goblin",
            "cmc": 3.0,
            "color_identity": ["R"],
            "oracle_text": "Haste\nOther Goblins you control get +1/+1 and have haste.",
            "prices": { "usd": "1.25" }
        }))
        .unwrap();

        let record = card.normalize();
        assert_eq!(record.name, "Goblin Chieftain");
        assert_eq!(record.type_line, "Creature — Goblin");
        assert_eq!(record.mana_value, 3.0);
        assert_eq!(record.color_identity, BTreeSet::from(['R']));
        assert!(record.rules_text.contains("other goblins"));
        assert_eq!(record.price.as_deref(), Some("1.25"));
    }

    #[test]
    fn normalize_multi_faced_joins_text_and_keeps_front_type() {
        let card: ScryfallCard = serde_json::from_value(serde_json::json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "cmc": 1.0,
            "color_identity": ["U"],
            "card_faces": [
                { "type_line": "Creature — Human Wizard", "oracle_text": "Transform Delver of Secrets." },
                { "type_line": "Creature — Human Insect", "oracle_text": "Flying" }
            ]
        }))
        .unwrap();

        let record = card.normalize();
        assert_eq!(record.type_line, "Creature — Human Wizard");
        assert_eq!(record.rules_text, "transform delver of secrets.\nflying");
    }

    #[test]
    fn normalize_defaults_missing_fields() {
        let card: ScryfallCard =
            serde_json::from_value(serde_json::json!({ "name": "Unknown Thing" })).unwrap();
        let record = card.normalize();
        assert_eq!(record.mana_value, 0.0);
        assert!(record.color_identity.is_empty());
        assert!(record.rules_text.is_empty());
        assert!(record.price.is_none());
    }
}
