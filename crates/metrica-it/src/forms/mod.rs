// Poem-form recognition.
//
// Classification is shape-driven and ordered: specific syllabic patterns
// (haiku, tanka) are tried before the hendecasyllable families, and
// verse-count fallbacks (distico, sestina, ottava, monostico) catch what
// remains. Verso libero is the universal fallback. In tolerant mode the
// syllabic patterns accept a small deviation per verse.

pub mod catalog;
pub mod validator;

use metrica_core::PoemKind;

/// Per-verse deviation allowed by the syllabic patterns in tolerant mode.
const PATTERN_BAND: usize = 1;

/// Per-verse deviation from the hendecasyllable in tolerant mode.
const HENDECASYLLABLE_BAND: usize = 2;

fn matches_counts(syllables: &[usize], pattern: &[usize], band: usize) -> bool {
    syllables.len() == pattern.len()
        && syllables
            .iter()
            .zip(pattern)
            .all(|(&actual, &expected)| actual.abs_diff(expected) <= band)
}

fn all_hendecasyllables(syllables: &[usize], band: usize) -> bool {
    syllables.iter().all(|&count| count.abs_diff(11) <= band)
}

/// Recognize the poetic form of a measured poem from its per-verse
/// syllable counts and its rhyme scheme. Total: every input maps to
/// some kind, with [`PoemKind::VersoLibero`] as the fallback.
pub fn classify(syllables: &[usize], scheme: &str, tolerance: bool) -> PoemKind {
    let verse_count = syllables.len();
    let pattern_band = if tolerance { PATTERN_BAND } else { 0 };
    let hendeca_band = if tolerance { HENDECASYLLABLE_BAND } else { 0 };

    if verse_count == 3 && matches_counts(syllables, &[5, 7, 5], pattern_band) {
        return PoemKind::Haiku;
    }
    if verse_count == 5 && matches_counts(syllables, &[5, 7, 5, 7, 7], pattern_band) {
        return PoemKind::Tanka;
    }
    if verse_count == 5 && scheme == "AABBA" {
        return PoemKind::Limerick;
    }
    if verse_count == 4 && all_hendecasyllables(syllables, hendeca_band) {
        return PoemKind::Quartina;
    }
    if verse_count == 3 && all_hendecasyllables(syllables, hendeca_band) {
        return PoemKind::Terzina {
            continua: scheme == "AAA",
        };
    }
    if verse_count == 14
        && all_hendecasyllables(syllables, hendeca_band)
        && (scheme.starts_with("ABAB") || scheme.starts_with("ABBA"))
    {
        return PoemKind::Sonetto;
    }

    match verse_count {
        2 => PoemKind::Distico {
            baciata: scheme == "AA",
        },
        6 => PoemKind::Sestina,
        8 => PoemKind::Ottava,
        1 => PoemKind::Monostico,
        _ => PoemKind::VersoLibero,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Syllabic patterns --

    #[test]
    fn haiku_exact() {
        assert_eq!(classify(&[5, 7, 5], "ABA", false), PoemKind::Haiku);
        assert_eq!(classify(&[5, 7, 5], "AAA", false), PoemKind::Haiku);
    }

    #[test]
    fn haiku_near_miss_needs_tolerance() {
        assert_eq!(classify(&[5, 8, 5], "ABA", false), PoemKind::VersoLibero);
        assert_eq!(classify(&[5, 8, 5], "ABA", true), PoemKind::Haiku);
        assert_eq!(classify(&[5, 9, 5], "ABA", true), PoemKind::VersoLibero);
    }

    #[test]
    fn tanka_before_limerick() {
        assert_eq!(classify(&[5, 7, 5, 7, 7], "AABBA", false), PoemKind::Tanka);
        assert_eq!(classify(&[8, 8, 5, 5, 8], "AABBA", false), PoemKind::Limerick);
        assert_eq!(classify(&[8, 8, 5, 5, 8], "ABCCA", false), PoemKind::VersoLibero);
    }

    // -- Hendecasyllable families --

    #[test]
    fn quartina() {
        assert_eq!(classify(&[11, 11, 11, 11], "ABAB", false), PoemKind::Quartina);
        assert_eq!(classify(&[11, 11, 11, 9], "ABAB", false), PoemKind::VersoLibero);
        assert_eq!(classify(&[11, 11, 11, 9], "ABAB", true), PoemKind::Quartina);
    }

    #[test]
    fn terzina() {
        assert_eq!(
            classify(&[11, 11, 11], "ABA", false),
            PoemKind::Terzina { continua: false }
        );
        assert_eq!(
            classify(&[11, 11, 11], "AAA", false),
            PoemKind::Terzina { continua: true }
        );
    }

    #[test]
    fn sonetto_needs_opening_quatrain() {
        let counts = [11; 14];
        assert_eq!(classify(&counts, "ABBAABBACDCDCD", false), PoemKind::Sonetto);
        assert_eq!(classify(&counts, "ABABABABCDCDCD", false), PoemKind::Sonetto);
        assert_eq!(
            classify(&counts, "AAAAAAAAAAAAAA", false),
            PoemKind::VersoLibero
        );
    }

    // -- Verse-count fallbacks --

    #[test]
    fn shape_fallbacks() {
        assert_eq!(classify(&[7, 9], "AA", false), PoemKind::Distico { baciata: true });
        assert_eq!(classify(&[7, 9], "AB", false), PoemKind::Distico { baciata: false });
        assert_eq!(classify(&[4; 6], "AABBCC", false), PoemKind::Sestina);
        assert_eq!(classify(&[10; 8], "ABABABAB", false), PoemKind::Ottava);
        assert_eq!(classify(&[11], "A", false), PoemKind::Monostico);
        assert_eq!(classify(&[3, 5, 8, 13, 21, 1, 2], "ABCDEFG", false), PoemKind::VersoLibero);
    }
}
