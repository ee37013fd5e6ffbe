// NLP collaborators: tokenizer, stopwords, stemmer, tagger, lemmatizer,
// named-entity chunker, and the toolkit that bundles them.

pub mod chunker;
pub mod lemmatizer;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod toolkit;
pub mod traits;
pub mod types;
