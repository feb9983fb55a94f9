// Rhyme detection and scheme building.
//
// The final sound of a verse is extracted from its last word: from the
// second-to-last vowel to the end, with shorter fallbacks for words
// poorer in vowels. Verses are clustered greedily into lettered groups
// in input order; the first group containing any sound that rhymes
// wins, so the scheme is deterministic.

use metrica_core::RhymeAnalysis;
use metrica_core::analysis::RhymeGroup;
use metrica_core::character::{is_vowel, simple_lower};

/// Placeholder letter for a blank verse.
pub const BLANK_LETTER: char = '-';

/// Punctuation stripped out of the last word before sound extraction,
/// wherever it occurs (so "rosso-blu" reads as "rossoblu").
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '(', ')', '-', '[', ']', '{', '}', '«', '»', '“', '”', '‘',
    '’', '…',
];

/// Extract the final sound of a verse, lowercase. Blank input yields "".
///
/// Taken from the last whitespace-separated word with surrounding
/// punctuation trimmed: from the second-to-last vowel to the end when the
/// word has two or more vowels, from the only vowel when it has one, and
/// the last two characters when it has none.
pub fn final_sound(verse: &str) -> String {
    let Some(last_word) = verse.split_whitespace().next_back() else {
        return String::new();
    };
    let word: Vec<char> = last_word
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .map(simple_lower)
        .collect();

    if word.len() < 2 {
        return word.into_iter().collect();
    }

    let vowel_positions: Vec<usize> = word
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect();

    let start = match vowel_positions.len() {
        0 => word.len() - 2,
        1 => vowel_positions[0],
        n => vowel_positions[n - 2],
    };
    word[start..].iter().collect()
}

/// Whether two final sounds rhyme.
///
/// Deliberately permissive: identical sounds, a shared two-character
/// ending, or a shared final vowel all count. Assonance therefore rhymes
/// ("cuore"/"sole"), which suits informal verse better than a strict
/// phonological match would.
pub fn sounds_rhyme(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() >= 2 && b_chars.len() >= 2 && a_chars[a_chars.len() - 2..] == b_chars[b_chars.len() - 2..] {
        return true;
    }

    let last_a = a_chars[a_chars.len() - 1];
    let last_b = b_chars[b_chars.len() - 1];
    last_a == last_b && is_vowel(last_a)
}

/// Cluster verses into rhyme groups and build the scheme string.
///
/// One letter per verse, 'A' onwards in group creation order; a blank
/// verse gets [`BLANK_LETTER`] and joins no group. The scheme length
/// always equals the verse count.
pub fn analyze_rhymes<S: AsRef<str>>(verses: &[S]) -> RhymeAnalysis {
    let mut scheme = String::with_capacity(verses.len());
    let mut groups: Vec<RhymeGroup> = Vec::new();
    let mut final_sounds = Vec::with_capacity(verses.len());

    for verse in verses {
        let sound = final_sound(verse.as_ref());
        if sound.is_empty() {
            scheme.push(BLANK_LETTER);
            final_sounds.push(sound);
            continue;
        }

        let found = groups
            .iter()
            .position(|g| g.sounds.iter().any(|member| sounds_rhyme(member, &sound)));
        let index = match found {
            Some(i) => i,
            None => {
                let letter = char::from_u32('A' as u32 + groups.len() as u32).unwrap_or('?');
                groups.push(RhymeGroup {
                    letter,
                    sounds: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[index].sounds.push(sound.clone());
        scheme.push(groups[index].letter);
        final_sounds.push(sound);
    }

    RhymeAnalysis {
        scheme,
        groups,
        final_sounds,
    }
}
