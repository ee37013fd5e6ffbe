// Text analysis steps: loading, filtering, normalization, frequencies,
// entities, subject classification, n-grams and trigram comparison.

pub mod compare;
pub mod document;
pub mod entities;
pub mod filter;
pub mod frequency;
pub mod loader;
pub mod ngrams;
pub mod normalize;
pub mod subject;
