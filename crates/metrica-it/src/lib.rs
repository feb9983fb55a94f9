// metrica-it: the Italian metrical-analysis engine.
//
// Pipeline, bottom up:
// - normalizer: verse cleaning, tokenization, apostrophe resolution,
//   prefix hiatus marking;
// - syllabifier: the scan-based syllable counter with its lexical
//   exception table;
// - rhyme: final-sound extraction and greedy scheme clustering;
// - forms: the form catalog, the shape classifier and the validator;
// - handle: MetricaHandle, the unified entry point.
//
// Shared language data lives in italian::constants; shared result types
// come from metrica-core.

pub mod forms;
pub mod handle;
pub mod italian;
pub mod normalizer;
pub mod rhyme;
pub mod syllabifier;

pub use handle::{AnalyzeOptions, MetricaHandle};
