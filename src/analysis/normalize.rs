// Stemming and POS-aware lemmatization of filtered tokens.

use tracing::warn;

use crate::nlp::toolkit::NlpToolkit;
use crate::nlp::traits::PosTagger;
use crate::nlp::types::{TaggedToken, WordClass};

/// Tag used for every token when the tagger fails.
pub const FALLBACK_TAG: &str = "NN";

/// Stems, lemmas and the tags the lemmas were derived from.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTokens {
    pub tagged: Vec<TaggedToken>,
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
}

/// Map a Penn Treebank tag onto the lemmatizer's word class by its first
/// letter. Anything unrecognized is treated as a noun.
pub fn word_class(tag: &str) -> WordClass {
    match tag.chars().next() {
        Some('J') => WordClass::Adjective,
        Some('V') => WordClass::Verb,
        Some('N') => WordClass::Noun,
        Some('R') => WordClass::Adverb,
        _ => WordClass::Noun,
    }
}

/// Tag tokens, tagging every token `NN` if the tagger fails.
pub fn tag_with_fallback(tagger: &dyn PosTagger, tokens: &[String]) -> Vec<TaggedToken> {
    match tagger.tag(tokens) {
        Ok(tagged) => tagged,
        Err(e) => {
            warn!(error = %e, "POS tagging failed, using default tags");
            tokens
                .iter()
                .map(|t| TaggedToken::new(t.clone(), FALLBACK_TAG))
                .collect()
        }
    }
}

pub fn normalize(toolkit: &NlpToolkit, tokens: &[String]) -> NormalizedTokens {
    let stems = toolkit.stemmer.stem_all(tokens);
    let tagged = tag_with_fallback(toolkit.tagger.as_ref(), tokens);
    let lemmas = tagged
        .iter()
        .map(|t| toolkit.lemmatizer.lemmatize(&t.text, word_class(&t.tag)))
        .collect();

    NormalizedTokens {
        tagged,
        stems,
        lemmas,
    }
}
