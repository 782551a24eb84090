use crate::card::CardRecord;

/// Tribal/type keywords: matched against A's rules text and B's type line.
const TRIBAL_KEYWORDS: [&str; 13] = [
    "goblin",
    "elf",
    "human",
    "zombie",
    "dragon",
    "angel",
    "artifact",
    "enchantment",
    "sliver",
    "eldrazi",
    "wizard",
    "warrior",
    "cleric",
];

/// Mechanical keywords: matched against both cards' rules text.
const MECH_KEYWORDS: [&str; 13] = [
    "destroy",
    "exile",
    "draw",
    "counter",
    "sacrifice",
    "graveyard",
    "token",
    "flying",
    "haste",
    "trample",
    "lifelink",
    "deathtouch",
    "flash",
];

const TRIBAL_POINTS: f64 = 2.0;
const MECH_POINTS: f64 = 1.0;
const COLOR_BONUS: f64 = 0.5;

/// Scoring policy as data: keyword lists with their point values, so the
/// policy can be tested and tuned apart from the matching engine.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    pub tribal: Vec<(String, f64)>,
    pub mechanics: Vec<(String, f64)>,
    pub color_bonus: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringPolicy {
    /// The stock keyword tables used by the analyzer.
    pub fn standard() -> Self {
        Self {
            tribal: TRIBAL_KEYWORDS
                .iter()
                .map(|k| (k.to_string(), TRIBAL_POINTS))
                .collect(),
            mechanics: MECH_KEYWORDS
                .iter()
                .map(|k| (k.to_string(), MECH_POINTS))
                .collect(),
            color_bonus: COLOR_BONUS,
        }
    }
}

/// Result of scoring one ordered pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyScore {
    /// Unbounded non-negative sum of all triggered rules. Clamping for
    /// display happens at rendering, not here.
    pub weight: f64,
    /// Human-readable contributions, one entry per triggered keyword/rule.
    pub reasons: Vec<String>,
}

/// Score the ordered pair (a, b): does A's text "point at" B?
///
/// Directional by construction — the tribal rule reads A's rules text
/// against B's type line, the mechanical rule reads both texts, and only
/// the color bonus is symmetric. All keyword checks are unanchored
/// substring containment on pre-lowercased text; a keyword inside a longer
/// word still matches, which is accepted heuristic behavior.
pub fn score(a: &CardRecord, b: &CardRecord, policy: &ScoringPolicy) -> SynergyScore {
    let mut weight = 0.0;
    let mut reasons = Vec::new();

    let type_b = b.type_line.to_lowercase();

    // Tribal: A references a tribe/type that B is.
    for (keyword, points) in &policy.tribal {
        if a.rules_text.contains(keyword.as_str()) && type_b.contains(keyword.as_str()) {
            weight += points;
            reasons.push(format!("tribal:{keyword}"));
        }
    }

    // Mechanical: both cards talk about the same mechanic.
    for (keyword, points) in &policy.mechanics {
        if a.rules_text.contains(keyword.as_str()) && b.rules_text.contains(keyword.as_str()) {
            weight += points;
            reasons.push(format!("mech:{keyword}"));
        }
    }

    // Color identity: flat bonus, at most once, never for colorless pairs.
    if !a.color_identity.is_empty() && a.color_identity == b.color_identity {
        weight += policy.color_bonus;
        reasons.push("color".to_string());
    }

    SynergyScore { weight, reasons }
}
