// Verse public API type.

use serde::Serialize;

/// One line of a poem, with the measurements attached by the analyzer.
///
/// The text is kept as the (trimmed) input line so the presentation layer
/// can echo it back; all derived fields are computed once and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// 1-based position of this verse within the poem.
    pub position: usize,

    /// The verse text as entered, trimmed of surrounding whitespace.
    pub text: String,

    /// Metrical syllable count of this verse.
    pub syllables: usize,

    /// The rhyme-bearing tail of the final word (empty for a blank verse).
    pub final_sound: String,
}

impl Verse {
    /// Create a verse record at the given 1-based position.
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            syllables: 0,
            final_sound: String::new(),
        }
    }
}
