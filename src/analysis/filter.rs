// Tokenization with whitespace fallback, and content-token filtering.
//
// Two filters exist on purpose. The subject pass keeps tokens in their
// own case and only lowercases for the stopword check. The n-gram
// pass keeps the lowercased token itself.

use tracing::warn;

use crate::nlp::stopwords::Stopwords;
use crate::nlp::traits::WordTokenizer;

/// Tokenize `text`, falling back to whitespace splitting if the tokenizer
/// fails for any reason.
pub fn tokenize_with_fallback(tokenizer: &dyn WordTokenizer, text: &str) -> Vec<String> {
    match tokenizer.tokenize(text) {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!(error = %e, "Tokenizer failed, using whitespace fallback");
            text.split_whitespace().map(str::to_string).collect()
        }
    }
}

/// True for non-empty, fully alphanumeric tokens whose lowercase form is
/// not a stopword.
pub fn is_content_token(token: &str, stopwords: &Stopwords) -> bool {
    !token.is_empty()
        && token.chars().all(char::is_alphanumeric)
        && !stopwords.contains(&token.to_lowercase())
}

/// Keep content tokens, preserving order and case.
pub fn filter_tokens(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| is_content_token(t, stopwords))
        .collect()
}

/// Keep content tokens, lowercased, preserving order.
pub fn filter_tokens_lowercase(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| is_content_token(t, stopwords))
        .map(|t| t.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NlpError;

    struct BrokenTokenizer;

    impl WordTokenizer for BrokenTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>, NlpError> {
            Err(NlpError::TokenizerFailure("model not loaded".to_string()))
        }
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn fallback_splits_on_whitespace() {
        let tokens = tokenize_with_fallback(&BrokenTokenizer, "the old  house\nstood");
        assert_eq!(tokens, strings(&["the", "old", "house", "stood"]));
    }

    #[test]
    fn filter_keeps_case_and_drops_stopwords() {
        let sw = Stopwords::nltk_english();
        let kept = filter_tokens(strings(&["The", "Romeo", ",", "fled", "to", "Mantua", "'s"]), &sw);
        assert_eq!(kept, strings(&["Romeo", "fled", "Mantua"]));
    }

    #[test]
    fn lowercase_filter_lowercases_kept_tokens() {
        let sw = Stopwords::nltk_english();
        let kept = filter_tokens_lowercase(strings(&["The", "Romeo", "fled", "Mantua"]), &sw);
        assert_eq!(kept, strings(&["romeo", "fled", "mantua"]));
    }

    #[test]
    fn hyphenated_and_empty_tokens_are_rejected() {
        let sw = Stopwords::nltk_english();
        assert!(!is_content_token("well-known", &sw));
        assert!(!is_content_token("", &sw));
        assert!(is_content_token("1597", &sw));
    }
}
