// NlpToolkit: the single composition point for the NLP collaborators.
//
// Built once in main and handed to every analysis step by reference.
// Tests swap individual collaborators with the `with_*` builders.

use super::chunker::GazetteerChunker;
use super::lemmatizer::MorphyLemmatizer;
use super::stemmer::SnowballStemmer;
use super::stopwords::Stopwords;
use super::tagger::RuleTagger;
use super::tokenizer::UnicodeWordTokenizer;
use super::traits::{EntityChunker, Lemmatizer, PosTagger, WordTokenizer};
use crate::error::NlpError;

pub struct NlpToolkit {
    pub tokenizer: Box<dyn WordTokenizer>,
    pub stopwords: Stopwords,
    pub stemmer: SnowballStemmer,
    pub tagger: Box<dyn PosTagger>,
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub chunker: Box<dyn EntityChunker>,
}

impl NlpToolkit {
    /// The rule-based English toolkit with the given stopword list.
    pub fn english(stopwords: Stopwords) -> Result<Self, NlpError> {
        Ok(Self {
            tokenizer: Box::new(UnicodeWordTokenizer::new()?),
            stopwords,
            stemmer: SnowballStemmer::default(),
            tagger: Box::new(RuleTagger::default()),
            lemmatizer: Box::new(MorphyLemmatizer::default()),
            chunker: Box::new(GazetteerChunker::default()),
        })
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn WordTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_chunker(mut self, chunker: Box<dyn EntityChunker>) -> Self {
        self.chunker = chunker;
        self
    }
}
