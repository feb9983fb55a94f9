// Analysis result records.
//
// The engine reports everything as data: a poem analysis is an immutable
// record produced per call, and failure conditions are explicit variants
// rather than panics, so batch callers can keep going item by item.

use serde::Serialize;

use crate::forms::PoemKind;
use crate::verse::Verse;

/// Error type for poem analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The input text contained no non-blank lines.
    #[error("no verses found in input text")]
    EmptyInput,
}

/// One lettered rhyme group: the scheme letter and the final sounds
/// assigned to it, in verse order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeGroup {
    pub letter: char,
    pub sounds: Vec<String>,
}

/// Result of rhyme analysis over an ordered list of verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeAnalysis {
    /// One letter per verse ('-' for a blank verse), e.g. "ABAB".
    pub scheme: String,

    /// Rhyme groups in creation order (A first).
    pub groups: Vec<RhymeGroup>,

    /// The extracted final sound of each verse, in input order.
    pub final_sounds: Vec<String>,
}

/// The schema details a metric verdict was produced against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDetails {
    /// Catalog identifier, e.g. "terzina_dantesca".
    pub id: String,

    /// Display label, e.g. "Terzina dantesca".
    pub label: String,

    /// Target syllables per verse; empty when the form leaves them free.
    pub syllables: Vec<usize>,

    /// Target rhyme groups, e.g. ["ABBA", "ABBA", "CDC", "DCD"];
    /// empty when the form has no rhyme constraint.
    pub rhyme_groups: Vec<String>,
}

/// A per-verse syllable deviation from the target pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyllableMismatch {
    /// 1-based verse position.
    pub position: usize,
    pub expected: usize,
    pub actual: usize,
}

/// Structured outcome of validating a poem against one form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricVerdict {
    /// Whether the poem satisfies the form under the requested mode.
    pub meets_metric: bool,

    /// Verse count the form requires, when it constrains syllables.
    pub expected_verses: Option<usize>,

    /// Positions where the syllable count missed the target (empty when
    /// the verse count already disagrees, since positions would not align).
    pub syllable_mismatches: Vec<SyllableMismatch>,

    /// The scheme the form expects, when the produced scheme differs.
    pub expected_scheme: Option<String>,

    /// The schema used, when the target form exists in the catalog.
    pub details: Option<FormDetails>,
}

impl MetricVerdict {
    /// Verdict for a target form absent from the catalog: strict failure.
    pub fn unknown_form() -> Self {
        Self {
            meets_metric: false,
            expected_verses: None,
            syllable_mismatches: Vec::new(),
            expected_scheme: None,
            details: None,
        }
    }
}

/// Complete analysis of one poem. Created fresh per call; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemAnalysis {
    /// The verses, in input order, with per-verse measurements.
    pub verses: Vec<Verse>,

    /// Per-verse syllable counts, parallel to `verses`.
    pub syllables_per_verse: Vec<usize>,

    /// Sum of all per-verse counts.
    pub total_syllables: usize,

    /// Rhyme analysis over the verses.
    pub rhymes: RhymeAnalysis,

    /// The letter-per-verse scheme string, duplicated out of `rhymes`
    /// for convenience of flat consumers.
    pub rhyme_scheme: String,

    /// The recognized poetic form.
    pub recognized_form: PoemKind,

    /// Whether the poem satisfies the recognized form's metric.
    pub meets_metric: bool,

    /// The verdict backing `meets_metric`, with diagnostics.
    pub verdict: MetricVerdict,
}

impl PoemAnalysis {
    /// Number of verses in the poem.
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}
