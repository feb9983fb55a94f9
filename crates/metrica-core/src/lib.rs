// metrica-core: shared types for the Italian poetry metrics engine.
//
// This crate carries everything the language engine (metrica-it) and its
// consumers need to agree on: Italian vowel classification, the Verse
// record, the analysis result records and the poem-form enum. It contains
// no analysis logic of its own.

pub mod analysis;
pub mod character;
pub mod forms;
pub mod verse;

pub use analysis::{
    AnalysisError, FormDetails, MetricVerdict, PoemAnalysis, RhymeAnalysis, RhymeGroup,
    SyllableMismatch,
};
pub use forms::PoemKind;
pub use verse::Verse;
