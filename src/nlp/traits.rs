// Collaborator traits: the seams where an NLP engine plugs in.
//
// The pipeline only talks to these traits. The crate ships rule-based
// English implementations, and tests substitute failing doubles to
// exercise the fallback paths.

use super::types::{Chunk, TaggedToken, WordClass};
use crate::error::NlpError;

/// Splits raw text into word-like tokens (punctuation included).
pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

/// Assigns a Penn Treebank tag to every token, preserving order and length.
pub trait PosTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, NlpError>;
}

/// Reduces a word to its dictionary form for the given word class.
///
/// Lemmatization never fails: an unknown word comes back unchanged.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String;
}

/// Groups tagged tokens into named-entity spans.
pub trait EntityChunker {
    fn chunk(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>, NlpError>;
}
