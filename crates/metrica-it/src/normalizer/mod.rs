// Text normalization for verse analysis.
//
// A verse goes through three steps before syllable counting:
// 1. cleaning: lowercase, keep letters/apostrophes, collapse everything
//    else into single spaces;
// 2. apostrophe resolution: elided tokens are split into independently
//    countable parts via the contraction table, with a generic fallback;
// 3. prefix marking: a hiatus marker is injected after a weak-vowel-final
//    common prefix so the syllabifier cannot fuse prefix and root into a
//    diphthong.

use metrica_core::character::{is_strong_vowel, is_vowel, is_weak_vowel, simple_lower};

use crate::italian::constants::{COMMON_PREFIXES, CONTRACTIONS};

/// Sentinel injected into the working character buffer to force a hiatus.
/// Not a letter, not a vowel; the scan steps over it without counting.
pub const HIATUS_MARKER: char = '|';

/// Accented vowels preserved by the cleaner (the forms that occur in
/// written Italian text; everything else unusual becomes a separator).
const KEPT_ACCENTED: &[char] = &['à', 'è', 'é', 'ì', 'í', 'î', 'ò', 'ó', 'ù', 'ú'];

/// Clean one verse: lowercase, keep ASCII letters, accented vowels, the
/// apostrophe and spaces; map every other character to a space and
/// collapse separator runs. Deterministic; empty input yields "".
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .map(simple_lower)
        .map(|c| {
            if c.is_ascii_alphabetic() || KEPT_ACCENTED.contains(&c) || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a verse and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    clean_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Resolve apostrophes in one token into independently countable parts.
///
/// Tries a longest-prefix match against the contraction table first; the
/// replacement parts are emitted in order, followed by any remaining
/// suffix. Tokens without a table match fall back to a generic split on
/// every apostrophe, where a single-letter fragment survives only when it
/// is vowel-initial (a lone elided article or preposition).
pub fn expand_apostrophes(word: &str) -> Vec<String> {
    if !word.contains('\'') {
        return vec![word.to_string()];
    }

    for &(contraction, replacement) in CONTRACTIONS {
        if let Some(rest) = word.strip_prefix(contraction) {
            let mut parts: Vec<String> = replacement
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_string())
                .collect();
            if !rest.is_empty() {
                parts.push(rest.to_string());
            }
            return parts;
        }
    }

    let mut parts = Vec::new();
    for fragment in word.split('\'') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let mut chars = fragment.chars();
        let first = chars.next().unwrap_or(' ');
        let single = chars.next().is_none();
        if !single || is_vowel(first) {
            parts.push(fragment.to_string());
        }
    }

    if parts.is_empty() {
        vec![word.to_string()]
    } else {
        parts
    }
}

/// Build the working character buffer for one word part, injecting the
/// hiatus marker between a weak-vowel-final common prefix and a
/// strong-vowel-initial root ("ri|aprire"). Everything else passes
/// through unchanged.
pub fn mark_prefix_hiatus(word: &str) -> Vec<char> {
    for &prefix in COMMON_PREFIXES {
        if let Some(rest) = word.strip_prefix(prefix) {
            let boundary = prefix.chars().next_back().zip(rest.chars().next());
            if let Some((last, first)) = boundary {
                if is_weak_vowel(last) && is_strong_vowel(first) {
                    let mut buf: Vec<char> = prefix.chars().collect();
                    buf.push(HIATUS_MARKER);
                    buf.extend(rest.chars());
                    return buf;
                }
            }
        }
    }
    word.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cleaning --

    #[test]
    fn clean_lowercases_and_strips() {
        assert_eq!(clean_text("Nel mezzo del cammin!"), "nel mezzo del cammin");
        assert_eq!(clean_text("  Più  luce,   più\tvita. "), "più luce più vita");
        assert_eq!(clean_text("perché?"), "perché");
    }

    #[test]
    fn clean_keeps_apostrophes() {
        assert_eq!(clean_text("L'amore dell'alba"), "l'amore dell'alba");
    }

    #[test]
    fn clean_replaces_unknown_with_separator() {
        assert_eq!(clean_text("ciao123mondo"), "ciao mondo");
        assert_eq!(clean_text("«virgolette»"), "virgolette");
    }

    #[test]
    fn clean_is_idempotent() {
        let once = clean_text("E' un  DÌ, strano...");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn clean_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t "), "");
        assert!(tokenize(" . , ! ").is_empty());
    }

    // -- Apostrophe resolution --

    #[test]
    fn contraction_table_splits() {
        assert_eq!(expand_apostrophes("dell'amore"), vec!["del", "l'", "amore"]);
        assert_eq!(expand_apostrophes("un'amica"), vec!["un", "amica"]);
        assert_eq!(expand_apostrophes("quest'anno"), vec!["quest", "anno"]);
        assert_eq!(expand_apostrophes("l'albero"), vec!["l'", "albero"]);
        assert_eq!(expand_apostrophes("sant'angelo"), vec!["sant", "angelo"]);
    }

    #[test]
    fn longest_prefix_wins() {
        // "dell'" must match before "l'" gets a chance
        assert_eq!(expand_apostrophes("dell'arte"), vec!["del", "l'", "arte"]);
    }

    #[test]
    fn generic_fallback() {
        // not in the table: split on the apostrophe
        assert_eq!(expand_apostrophes("po'di"), vec!["po", "di"]);
        // single consonant fragment is dropped, vowel-initial one kept
        assert_eq!(expand_apostrophes("d'oro"), vec!["oro"]);
        assert_eq!(expand_apostrophes("e'venne"), vec!["e", "venne"]);
    }

    #[test]
    fn no_apostrophe_passthrough() {
        assert_eq!(expand_apostrophes("sole"), vec!["sole"]);
    }

    // -- Prefix marking --

    #[test]
    fn weak_prefix_before_strong_root_is_marked() {
        assert_eq!(
            mark_prefix_hiatus("riaprire"),
            "ri|aprire".chars().collect::<Vec<_>>()
        );
        assert_eq!(
            mark_prefix_hiatus("semiaperto"),
            "semi|aperto".chars().collect::<Vec<_>>()
        );
    }

    #[test]
    fn consonant_or_weak_root_is_not_marked() {
        assert_eq!(
            mark_prefix_hiatus("riportare"),
            "riportare".chars().collect::<Vec<_>>()
        );
        // weak root vowel: the diphthong reading stands
        assert_eq!(
            mark_prefix_hiatus("multiuso"),
            "multiuso".chars().collect::<Vec<_>>()
        );
        // prefix does not end in a weak vowel
        assert_eq!(
            mark_prefix_hiatus("autoesame"),
            "autoesame".chars().collect::<Vec<_>>()
        );
    }
}
