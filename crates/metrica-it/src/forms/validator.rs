// Validation of a measured poem against one form schema.
//
// The verdict is structured: rather than a bare boolean it records the
// expected verse count, every syllable position that missed its target,
// and the expected scheme when the rhyme constraint failed, so callers
// can explain the failure.

use metrica_core::analysis::{FormDetails, MetricVerdict, SyllableMismatch};

use crate::forms::catalog::FormSchema;

/// Alternative schemes a quartina accepts in tolerant mode: the three
/// classical quatrain arrangements besides the canonical alternata.
const QUARTINA_VARIANTS: &[&str] = &["AABB", "ABAB", "ABBA"];

/// Validate measured syllables and a produced rhyme scheme against a
/// schema. `None` means the target form has no schema in the catalog,
/// which fails by definition. A schema with no constraints (versi
/// liberi) always passes.
pub fn validate(
    schema: Option<&FormSchema>,
    syllables: &[usize],
    scheme: &str,
    tolerance: bool,
) -> MetricVerdict {
    let Some(schema) = schema else {
        return MetricVerdict::unknown_form();
    };

    let mut verdict = MetricVerdict {
        meets_metric: true,
        expected_verses: None,
        syllable_mismatches: Vec::new(),
        expected_scheme: None,
        details: Some(FormDetails {
            id: schema.id.to_string(),
            label: schema.label.to_string(),
            syllables: schema.syllables.to_vec(),
            rhyme_groups: schema.rhyme_groups.iter().map(|g| g.to_string()).collect(),
        }),
    };

    if !schema.syllables.is_empty() {
        verdict.expected_verses = Some(schema.syllables.len());
        if syllables.len() != schema.syllables.len() {
            verdict.meets_metric = false;
        } else {
            for (position, (&actual, &expected)) in
                syllables.iter().zip(schema.syllables).enumerate()
            {
                let deviation = actual.abs_diff(expected);
                let allowed = if tolerance { schema.band } else { 0 };
                if deviation > allowed {
                    verdict.syllable_mismatches.push(SyllableMismatch {
                        position: position + 1,
                        expected,
                        actual,
                    });
                }
            }
            if !verdict.syllable_mismatches.is_empty() {
                verdict.meets_metric = false;
            }
        }
    }

    if !schema.rhyme_groups.is_empty() {
        let expected = schema.expected_scheme();
        let accepted = scheme == expected
            || (tolerance && schema.id == "quartina" && QUARTINA_VARIANTS.contains(&scheme));
        if !accepted {
            verdict.expected_scheme = Some(expected);
            verdict.meets_metric = false;
        }
    }

    verdict
}
