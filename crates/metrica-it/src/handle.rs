// MetricaHandle: top-level integration point for Italian verse metrics.
//
// Ties the pipeline together: normalization, syllable counting, rhyme
// clustering, form classification and metric validation. The handle is
// cheap to construct (all language data is static) and stateless apart
// from its options, so one handle can serve any number of poems.

use metrica_core::analysis::{AnalysisError, MetricVerdict, PoemAnalysis, RhymeAnalysis};
use metrica_core::verse::Verse;

use crate::forms::{catalog, classify, validator};
use crate::rhyme;
use crate::syllabifier;

/// Options controlling analysis behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Tolerant mode: classification and validation accept small
    /// per-verse deviations from each form's targets. Off by default.
    pub tolerance: bool,
}

/// Top-level handle for poem analysis.
pub struct MetricaHandle {
    options: AnalyzeOptions,
}

impl MetricaHandle {
    /// Create a handle with default (strict) options.
    pub fn new() -> Self {
        Self::with_options(AnalyzeOptions::default())
    }

    /// Create a handle with explicit options.
    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// The options this handle analyzes with.
    pub fn options(&self) -> AnalyzeOptions {
        self.options
    }

    /// Count metrical syllables in a piece of text. Blank input counts
    /// zero.
    pub fn count_syllables(&self, text: &str) -> usize {
        syllabifier::count_syllables(text)
    }

    /// Analyze the rhyme scheme of a poem, one verse per line. Blank
    /// lines stay in the scheme as '-'.
    pub fn analyze_rhymes(&self, text: &str) -> RhymeAnalysis {
        let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
        rhyme::analyze_rhymes(&lines)
    }

    /// Run the full analysis of a poem, one verse per line. Blank lines
    /// are dropped; a poem with no verses at all is an error.
    pub fn analyze_poem(&self, text: &str) -> Result<PoemAnalysis, AnalysisError> {
        let verses = self.measure_verses(text)?;

        let syllables_per_verse: Vec<usize> = verses.iter().map(|v| v.syllables).collect();
        let total_syllables = syllables_per_verse.iter().sum();

        let texts: Vec<&str> = verses.iter().map(|v| v.text.as_str()).collect();
        let rhymes = rhyme::analyze_rhymes(&texts);
        let rhyme_scheme = rhymes.scheme.clone();

        let recognized_form = classify(&syllables_per_verse, &rhyme_scheme, self.options.tolerance);
        let schema = recognized_form.catalog_id().and_then(catalog::find);
        let verdict = validator::validate(
            schema,
            &syllables_per_verse,
            &rhyme_scheme,
            self.options.tolerance,
        );

        Ok(PoemAnalysis {
            verses,
            syllables_per_verse,
            total_syllables,
            rhymes,
            rhyme_scheme,
            recognized_form,
            meets_metric: verdict.meets_metric,
            verdict,
        })
    }

    /// Validate a poem against one named form from the catalog instead
    /// of the recognized one. An unknown form identifier fails the
    /// validation rather than erroring.
    pub fn validate_as(&self, text: &str, form_id: &str) -> Result<MetricVerdict, AnalysisError> {
        let verses = self.measure_verses(text)?;
        let syllables: Vec<usize> = verses.iter().map(|v| v.syllables).collect();
        let texts: Vec<&str> = verses.iter().map(|v| v.text.as_str()).collect();
        let rhymes = rhyme::analyze_rhymes(&texts);

        Ok(validator::validate(
            catalog::find(form_id),
            &syllables,
            &rhymes.scheme,
            self.options.tolerance,
        ))
    }

    /// Split a poem into non-blank verses and attach per-verse
    /// measurements.
    fn measure_verses(&self, text: &str) -> Result<Vec<Verse>, AnalysisError> {
        let verses: Vec<Verse> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                let mut verse = Verse::new(i + 1, line);
                verse.syllables = syllabifier::count_syllables(line);
                verse.final_sound = rhyme::final_sound(line);
                verse
            })
            .collect();

        if verses.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(verses)
    }
}

impl Default for MetricaHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrica_core::PoemKind;

    #[test]
    fn empty_input_is_an_error() {
        let handle = MetricaHandle::new();
        assert_eq!(handle.analyze_poem(""), Err(AnalysisError::EmptyInput));
        assert_eq!(
            handle.analyze_poem("\n  \n\t\n"),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn blank_lines_are_dropped_and_positions_renumbered() {
        let handle = MetricaHandle::new();
        let analysis = handle
            .analyze_poem("primo verso\n\n\nsecondo verso\n")
            .unwrap();
        assert_eq!(analysis.verse_count(), 2);
        assert_eq!(analysis.verses[0].position, 1);
        assert_eq!(analysis.verses[1].position, 2);
        assert_eq!(analysis.verses[1].text, "secondo verso");
    }

    #[test]
    fn single_verse_is_a_monostico() {
        let handle = MetricaHandle::new();
        let analysis = handle.analyze_poem("un solo verso qui").unwrap();
        assert_eq!(analysis.recognized_form, PoemKind::Monostico);
        assert_eq!(analysis.rhyme_scheme, "A");
        assert!(!analysis.meets_metric);
    }

    #[test]
    fn totals_are_consistent() {
        let handle = MetricaHandle::new();
        let analysis = handle.analyze_poem("primo verso\nsecondo verso").unwrap();
        assert_eq!(
            analysis.total_syllables,
            analysis.syllables_per_verse.iter().sum::<usize>()
        );
        assert_eq!(analysis.rhyme_scheme.chars().count(), analysis.verse_count());
        assert_eq!(analysis.meets_metric, analysis.verdict.meets_metric);
    }

    #[test]
    fn validate_as_unknown_form_fails() {
        let handle = MetricaHandle::new();
        let verdict = handle.validate_as("un verso", "pantoum").unwrap();
        assert!(!verdict.meets_metric);
        assert!(verdict.details.is_none());
    }

    #[test]
    fn analyze_rhymes_keeps_blank_lines() {
        let handle = MetricaHandle::new();
        let analysis = handle.analyze_rhymes("il vento\n\nnel canto");
        assert_eq!(analysis.scheme, "A-A");
    }
}
