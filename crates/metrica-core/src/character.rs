// Character classification for Italian phonotactics.
//
// Italian vowels split into two disjoint classes that govern diphthong and
// hiatus formation: strong (open) vowels and weak (closed) vowels. Both
// classes include the accented forms that appear in written Italian.

/// Strong vowels (lowercase): a, e, o and their accented forms.
pub const STRONG_VOWELS: &[char] = &['a', 'e', 'o', 'à', 'è', 'ò', 'á', 'é', 'ó'];

/// Weak vowels (lowercase): i, u and their accented forms.
pub const WEAK_VOWELS: &[char] = &['i', 'u', 'ì', 'ù', 'í', 'ú'];

/// Accented vowels: every vowel carrying a written accent mark.
pub const ACCENTED_VOWELS: &[char] = &['à', 'è', 'ò', 'á', 'é', 'ó', 'ì', 'ù', 'í', 'ú'];

/// Check whether a character is a strong Italian vowel (case-insensitive).
pub fn is_strong_vowel(c: char) -> bool {
    STRONG_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a weak Italian vowel (case-insensitive).
pub fn is_weak_vowel(c: char) -> bool {
    WEAK_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is any Italian vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    STRONG_VOWELS.contains(&lower) || WEAK_VOWELS.contains(&lower)
}

/// Check whether a character is a vowel with a written accent.
pub fn is_accented_vowel(c: char) -> bool {
    ACCENTED_VOWELS.contains(&simple_lower(c))
}

/// Convert a character to its simple lowercase equivalent.
///
/// Uses Rust's built-in Unicode case mapping. For characters with
/// multi-character lowercase expansions, returns only the first character
/// (a one-to-one mapping is all this engine needs).
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}
