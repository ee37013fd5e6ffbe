// N-gram extraction and ranking over lowercased content tokens.

use super::filter::{filter_tokens_lowercase, tokenize_with_fallback};
use super::frequency::most_common;
use crate::nlp::toolkit::NlpToolkit;

/// Window size used at every call site.
pub const TRIGRAM: usize = 3;
/// How many n-grams the n-gram pass reports.
pub const TOP_NGRAMS: usize = 10;

pub type Ngram = Vec<String>;

#[derive(Debug, Clone, Default)]
pub struct NgramAnalysis {
    /// Lowercased content tokens in document order.
    pub tokens: Vec<String>,
    /// Top n-grams with their counts.
    pub top_ngrams: Vec<(Ngram, usize)>,
}

/// Overlapping windows of `n` tokens. A sequence of length `L` yields
/// `max(0, L - n + 1)` windows; `n == 0` yields none.
pub fn generate_ngrams(tokens: &[String], n: usize) -> Vec<Ngram> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.to_vec()).collect()
}

pub fn analyze_ngrams(toolkit: &NlpToolkit, text: &str, n: usize) -> NgramAnalysis {
    let raw = tokenize_with_fallback(toolkit.tokenizer.as_ref(), text);
    let tokens = filter_tokens_lowercase(raw, &toolkit.stopwords);
    let top_ngrams = most_common(generate_ngrams(&tokens, n), TOP_NGRAMS);

    NgramAnalysis { tokens, top_ngrams }
}
