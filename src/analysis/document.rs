// Subject-pass analysis of a single document.

use tracing::debug;

use super::entities::extract_entities;
use super::filter::{filter_tokens, tokenize_with_fallback};
use super::frequency::{most_common, TOP_TOKENS};
use super::normalize::normalize;
use super::subject::{determine_subject, Subject};
use crate::nlp::toolkit::NlpToolkit;

#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub top_tokens: Vec<(String, usize)>,
    pub entity_count: usize,
    pub entities: Vec<String>,
    /// Snowball stems of the content tokens. Informational only.
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
    pub subject: Subject,
}

pub fn analyze_text(toolkit: &NlpToolkit, text: &str) -> DocumentAnalysis {
    let raw = tokenize_with_fallback(toolkit.tokenizer.as_ref(), text);
    let tokens = filter_tokens(raw, &toolkit.stopwords);

    let normalized = normalize(toolkit, &tokens);
    let top_tokens = most_common(tokens.iter().cloned(), TOP_TOKENS);
    let entities = extract_entities(toolkit.chunker.as_ref(), &normalized.tagged);

    let top_words: Vec<String> = top_tokens.iter().map(|(t, _)| t.clone()).collect();
    let subject = determine_subject(&entities.names, &top_words);

    debug!(
        tokens = tokens.len(),
        entities = entities.count,
        subject = %subject,
        "Analyzed document"
    );

    DocumentAnalysis {
        top_tokens,
        entity_count: entities.count,
        entities: entities.names,
        stems: normalized.stems,
        lemmas: normalized.lemmas,
        subject,
    }
}
