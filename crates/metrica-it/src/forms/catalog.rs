// The form catalog: static schemas for the poetic forms the engine can
// validate against. Each schema fixes the target syllables per verse
// and/or the rhyme groups, plus the tolerance band used in tolerant
// validation. Syllable-counting forms of Japanese origin get a tight
// band; accentual Italian forms get a wider one.

/// One poetic form schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    /// Stable identifier, e.g. "terzina_dantesca".
    pub id: &'static str,

    /// Display label.
    pub label: &'static str,

    /// Target syllables per verse; empty when the form leaves them free.
    pub syllables: &'static [usize],

    /// Rhyme scheme split into groups (stanzas); empty when the form has
    /// no rhyme constraint.
    pub rhyme_groups: &'static [&'static str],

    /// Allowed per-verse deviation from the syllable target in tolerant
    /// validation. Strict validation always requires an exact match.
    pub band: usize,
}

impl FormSchema {
    /// The expected scheme string, all groups concatenated.
    pub fn expected_scheme(&self) -> String {
        self.rhyme_groups.concat()
    }
}

/// All known form schemas.
pub static CATALOG: &[FormSchema] = &[
    FormSchema {
        id: "haiku",
        label: "Haiku",
        syllables: &[5, 7, 5],
        rhyme_groups: &[],
        band: 1,
    },
    FormSchema {
        id: "tanka",
        label: "Tanka",
        syllables: &[5, 7, 5, 7, 7],
        rhyme_groups: &[],
        band: 1,
    },
    FormSchema {
        id: "katauta",
        label: "Katauta",
        syllables: &[5, 7, 7],
        rhyme_groups: &[],
        band: 1,
    },
    FormSchema {
        id: "choka",
        label: "Choka",
        syllables: &[5, 7, 5, 7, 5, 7, 5, 7, 7],
        rhyme_groups: &[],
        band: 1,
    },
    FormSchema {
        id: "sedoka",
        label: "Sedoka",
        syllables: &[5, 7, 7, 5, 7, 7],
        rhyme_groups: &[],
        band: 1,
    },
    FormSchema {
        id: "sonetto",
        label: "Sonetto",
        syllables: &[11; 14],
        rhyme_groups: &["ABBA", "ABBA", "CDC", "DCD"],
        band: 2,
    },
    FormSchema {
        id: "quartina",
        label: "Quartina",
        syllables: &[11, 11, 11, 11],
        rhyme_groups: &["ABAB"],
        band: 2,
    },
    FormSchema {
        id: "stornello",
        label: "Stornello",
        syllables: &[5, 11, 11],
        rhyme_groups: &["ABA"],
        band: 2,
    },
    FormSchema {
        id: "ottava_rima",
        label: "Ottava rima",
        syllables: &[11; 8],
        rhyme_groups: &["ABABABCC"],
        band: 2,
    },
    FormSchema {
        id: "terzina_dantesca",
        label: "Terzina dantesca",
        syllables: &[11, 11, 11],
        rhyme_groups: &["ABA"],
        band: 2,
    },
    FormSchema {
        id: "limerick",
        label: "Limerick",
        syllables: &[8, 8, 5, 5, 8],
        rhyme_groups: &["AABBA"],
        band: 2,
    },
    FormSchema {
        id: "ballad",
        label: "Ballad",
        syllables: &[8, 6, 8, 6],
        rhyme_groups: &["ABCB"],
        band: 2,
    },
    FormSchema {
        id: "clerihew",
        label: "Clerihew",
        syllables: &[8, 8, 8, 8],
        rhyme_groups: &["AABB"],
        band: 2,
    },
    FormSchema {
        id: "cinquain",
        label: "Cinquain",
        syllables: &[2, 4, 6, 8, 2],
        rhyme_groups: &[],
        band: 2,
    },
    FormSchema {
        id: "versi_liberi",
        label: "Versi liberi",
        syllables: &[],
        rhyme_groups: &[],
        band: 2,
    },
];

/// Look up a schema by identifier.
pub fn find(id: &str) -> Option<&'static FormSchema> {
    CATALOG.iter().find(|schema| schema.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(find("haiku").map(|s| s.syllables), Some(&[5, 7, 5][..]));
        assert_eq!(find("sonetto").map(|s| s.syllables.len()), Some(14));
        assert!(find("pantoum").is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn expected_scheme_concatenates_groups() {
        assert_eq!(find("sonetto").map(FormSchema::expected_scheme).as_deref(), Some("ABBAABBACDCDCD"));
        assert_eq!(find("haiku").map(FormSchema::expected_scheme).as_deref(), Some(""));
    }

    #[test]
    fn rhyme_groups_cover_verse_count() {
        for schema in CATALOG {
            if schema.syllables.is_empty() || schema.rhyme_groups.is_empty() {
                continue;
            }
            assert_eq!(
                schema.expected_scheme().len(),
                schema.syllables.len(),
                "{} scheme does not cover its verses",
                schema.id
            );
        }
    }
}
