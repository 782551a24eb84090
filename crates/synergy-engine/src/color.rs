use std::collections::BTreeSet;

pub const LAND: &str = "#8B4513";
pub const COLORLESS: &str = "#A9A9A9";
pub const GOLD: &str = "#DAA520";
pub const NEUTRAL: &str = "#ccc";

const SINGLE: [(char, &str); 5] = [
    ('W', "#F8E7B9"),
    ('U', "#0E68AB"),
    ('B', "#150B00"),
    ('R', "#D3202A"),
    ('G', "#00733E"),
];

/// Map a color identity plus a type line to a single display color.
/// Priority order matters: land beats everything, then colorless, then
/// multicolor, then the single-color lookup.
pub fn classify(colors: &BTreeSet<char>, type_line: &str) -> &'static str {
    if type_line.contains("Land") {
        return LAND;
    }
    if colors.is_empty() {
        return COLORLESS;
    }
    if colors.len() > 1 {
        return GOLD;
    }
    let symbol = *colors.iter().next().unwrap();
    SINGLE
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|(_, hex)| *hex)
        .unwrap_or(NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(symbols: &[char]) -> BTreeSet<char> {
        symbols.iter().copied().collect()
    }

    #[test]
    fn land_wins_over_color_identity() {
        assert_eq!(classify(&set(&['R', 'G']), "Land — Mountain Forest"), LAND);
        assert_eq!(classify(&set(&[]), "Basic Land — Mountain"), LAND);
    }

    #[test]
    fn colorless_and_multicolor() {
        assert_eq!(classify(&set(&[]), "Artifact"), COLORLESS);
        assert_eq!(classify(&set(&['W', 'U']), "Creature — Bird"), GOLD);
        // Two symbols are multicolor even if one of them is unrecognized.
        assert_eq!(classify(&set(&['R', 'X']), "Creature"), GOLD);
    }

    #[test]
    fn single_color_lookup_with_fallback() {
        assert_eq!(classify(&set(&['R']), "Creature — Goblin"), "#D3202A");
        assert_eq!(classify(&set(&['G']), "Creature — Elf"), "#00733E");
        assert_eq!(classify(&set(&['X']), "Creature"), NEUTRAL);
    }

    #[test]
    fn classify_is_deterministic() {
        let colors = set(&['B']);
        assert_eq!(
            classify(&colors, "Creature — Zombie"),
            classify(&colors, "Creature — Zombie")
        );
    }
}
