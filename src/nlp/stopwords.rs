// English stopword lexicons.
//
// The default list is the classic 179-word NLTK English corpus list. The
// much larger ISO list from the `stop-words` crate is available through
// configuration.

use std::collections::HashSet;
use std::str::FromStr;

use stop_words::{get, LANGUAGE};

const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Which English stopword list to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordSource {
    Nltk,
    Iso,
}

impl FromStr for StopwordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nltk" => Ok(StopwordSource::Nltk),
            "iso" => Ok(StopwordSource::Iso),
            other => Err(format!(
                "unknown stopword list '{other}' (expected 'nltk' or 'iso')"
            )),
        }
    }
}

/// A set of lowercase stopwords.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn load(source: StopwordSource) -> Self {
        match source {
            StopwordSource::Nltk => Self::nltk_english(),
            StopwordSource::Iso => Self::iso_english(),
        }
    }

    pub fn nltk_english() -> Self {
        Self::from_list(NLTK_ENGLISH)
    }

    pub fn iso_english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Membership test. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
