// Word tokenizer built on Unicode word boundaries.
//
// Segments text with UAX #29 word bounds, drops whitespace, keeps
// punctuation as standalone tokens, and splits English clitics off their
// host word ("Juliet's" -> "Juliet", "'s"; "don't" -> "do", "n't") the way
// Treebank-style tokenizers do.

use regex_lite::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::traits::WordTokenizer;
use crate::error::NlpError;

const CLITIC_PATTERN: &str = r"(?i)^(.+?)(n['’]t|['’]s|['’]re|['’]ve|['’]ll|['’]d|['’]m)$";

pub struct UnicodeWordTokenizer {
    clitic: Regex,
}

impl UnicodeWordTokenizer {
    pub fn new() -> Result<Self, NlpError> {
        let clitic =
            Regex::new(CLITIC_PATTERN).map_err(|e| NlpError::TokenizerFailure(e.to_string()))?;
        Ok(Self { clitic })
    }
}

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let mut tokens = Vec::new();

        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }

            match self.clitic.captures(segment) {
                Some(caps) => {
                    tokens.push(caps[1].to_string());
                    tokens.push(caps[2].to_string());
                }
                None => tokens.push(segment.to_string()),
            }
        }

        Ok(tokens)
    }
}
