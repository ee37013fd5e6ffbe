// Snowball English stemmer wrapper.

use rust_stemmers::{Algorithm, Stemmer};

pub struct SnowballStemmer {
    inner: Stemmer,
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl SnowballStemmer {
    /// Stem a single word. The word is lowercased first since the
    /// Snowball rules only match lowercase input.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    pub fn stem_all(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.stem(w)).collect()
    }
}
