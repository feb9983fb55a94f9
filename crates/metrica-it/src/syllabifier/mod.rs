// Syllable counting for Italian verse.
//
// The counter is a single left-to-right scan over a character buffer.
// Consonant digraphs/trigraphs are consumed whole without counting;
// every vowel starts a nucleus, which extends over a following
// triphthong or diphthong unless the hiatus rule splits it. The lexical
// exception table overrides the scan per word part.

use metrica_core::character::{is_accented_vowel, is_strong_vowel, is_vowel, is_weak_vowel};

use crate::italian::constants::{DIGRAPHS, DIPHTHONGS, EXCEPTIONS, TRIGRAPHS, TRIPHTHONGS};
use crate::normalizer::{clean_text, expand_apostrophes, mark_prefix_hiatus, tokenize};

/// Whether two adjacent vowels form a falling or rising diphthong.
pub fn is_diphthong(a: char, b: char) -> bool {
    DIPHTHONGS.contains(&[a, b])
}

/// Whether three adjacent vowels form a triphthong: either a tabulated
/// cluster or the generic weak-vowel-weak shape.
pub fn is_triphthong(a: char, b: char, c: char) -> bool {
    TRIPHTHONGS.contains(&[a, b, c]) || (is_weak_vowel(a) && is_vowel(b) && is_weak_vowel(c))
}

/// Whether two adjacent vowels are in hiatus and must be counted as two
/// nuclei: two strong vowels, two weak vowels, or a weak vowel whose
/// written accent marks it as a stressed syllable of its own.
pub fn is_hiatus(a: char, b: char) -> bool {
    let both_strong = is_strong_vowel(a) && is_strong_vowel(b);
    let both_weak = is_weak_vowel(a) && is_weak_vowel(b);
    let stressed_weak = (is_weak_vowel(a) && is_accented_vowel(a))
        || (is_weak_vowel(b) && is_accented_vowel(b));
    both_strong || both_weak || stressed_weak
}

/// Count syllables in one prepared character buffer (lowercase, possibly
/// containing the hiatus marker, which is neither a letter nor a vowel
/// and simply breaks cluster formation). A non-empty buffer always
/// counts at least one syllable.
pub fn scan(chars: &[char]) -> usize {
    let n = chars.len();
    let mut count = 0;
    let mut i = 0;

    while i < n {
        if i + 2 < n && is_consonant_trigraph(chars[i], chars[i + 1], chars[i + 2]) {
            i += 3;
            continue;
        }
        if i + 1 < n && is_consonant_digraph(chars[i], chars[i + 1]) {
            i += 2;
            continue;
        }

        let c = chars[i];
        if is_vowel(c) {
            count += 1;
            if i + 2 < n && is_triphthong(c, chars[i + 1], chars[i + 2]) {
                i += 3;
            } else if i + 1 < n && is_diphthong(c, chars[i + 1]) && !is_hiatus(c, chars[i + 1]) {
                i += 2;
            } else {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    count.max(1)
}

fn is_consonant_digraph(a: char, b: char) -> bool {
    DIGRAPHS.contains(&[a, b])
}

fn is_consonant_trigraph(a: char, b: char, c: char) -> bool {
    TRIGRAPHS.contains(&[a, b, c])
}

/// Count syllables in one cleaned word part: exception table first,
/// scan with prefix hiatus marking otherwise.
fn count_part(part: &str) -> usize {
    if let Some(&count) = EXCEPTIONS.get(part) {
        return count;
    }
    scan(&mark_prefix_hiatus(part))
}

/// Count syllables in a piece of text (a word, a verse, or anything in
/// between). Blank input counts zero; otherwise the result is the sum
/// over all word parts after apostrophe resolution. A whole-input match
/// in the exception table short-circuits everything.
pub fn count_syllables(text: &str) -> usize {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return 0;
    }
    if let Some(&count) = EXCEPTIONS.get(cleaned.as_str()) {
        return count;
    }

    tokenize(&cleaned)
        .iter()
        .flat_map(|word| expand_apostrophes(word))
        .map(|part| count_part(&part))
        .sum()
}
