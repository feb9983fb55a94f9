// Poem-form classification result.

use serde::{Serialize, Serializer};

/// The poetic form recognized by the classifier.
///
/// Kinds that have a schema in the form catalog map to it through
/// [`PoemKind::catalog_id`]; kinds recognized only by shape (distico,
/// sestina, ottava, monostico) have no schema and fail strict metric
/// validation by definition. Verso libero always validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoemKind {
    Haiku,
    Tanka,
    Limerick,
    Quartina,
    /// A tercet of hendecasyllables; `continua` marks an AAA scheme.
    Terzina { continua: bool },
    Sonetto,
    /// A two-verse poem; `baciata` marks an AA scheme.
    Distico { baciata: bool },
    Sestina,
    Ottava,
    Monostico,
    VersoLibero,
}

impl PoemKind {
    /// Human-facing name of the recognized form.
    pub fn name(&self) -> &'static str {
        match self {
            PoemKind::Haiku => "haiku",
            PoemKind::Tanka => "tanka",
            PoemKind::Limerick => "limerick",
            PoemKind::Quartina => "quartina",
            PoemKind::Terzina { continua: true } => "terzina (rima continua)",
            PoemKind::Terzina { continua: false } => "terzina dantesca",
            PoemKind::Sonetto => "sonetto",
            PoemKind::Distico { baciata: true } => "distico (rima baciata)",
            PoemKind::Distico { baciata: false } => "distico",
            PoemKind::Sestina => "sestina",
            PoemKind::Ottava => "ottava",
            PoemKind::Monostico => "monostico",
            PoemKind::VersoLibero => "verso libero",
        }
    }

    /// Identifier of the schema this kind is validated against, if any.
    pub fn catalog_id(&self) -> Option<&'static str> {
        match self {
            PoemKind::Haiku => Some("haiku"),
            PoemKind::Tanka => Some("tanka"),
            PoemKind::Limerick => Some("limerick"),
            PoemKind::Quartina => Some("quartina"),
            PoemKind::Terzina { .. } => Some("terzina_dantesca"),
            PoemKind::Sonetto => Some("sonetto"),
            PoemKind::VersoLibero => Some("versi_liberi"),
            PoemKind::Distico { .. }
            | PoemKind::Sestina
            | PoemKind::Ottava
            | PoemKind::Monostico => None,
        }
    }
}

impl Serialize for PoemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
