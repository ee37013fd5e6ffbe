// Rule-based Penn Treebank part-of-speech tagger.
//
// Tagging order: punctuation and numbers, closed-class lexicon lookup,
// capitalization (proper nouns), then suffix heuristics with a common-noun
// default. Crude next to a trained model, but it produces tags whose first
// letter separates adjectives, verbs, nouns and adverbs, which is all the
// lemmatizer mapping needs, and it marks proper-noun runs for the chunker.

use std::collections::HashMap;

use super::traits::PosTagger;
use super::types::TaggedToken;
use crate::error::NlpError;

const LEXICON: &[(&str, &str)] = &[
    // Determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"),
    // Pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP$"),
    ("us", "PRP"), ("them", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"), ("thou", "PRP"), ("thee", "PRP"),
    ("thy", "PRP$"), ("thine", "PRP$"),
    // Prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("into", "IN"), ("through", "IN"), ("under", "IN"),
    ("over", "IN"), ("between", "IN"), ("against", "IN"), ("beneath", "IN"), ("across", "IN"),
    ("beyond", "IN"), ("among", "IN"), ("within", "IN"), ("without", "IN"), ("upon", "IN"),
    ("because", "IN"), ("if", "IN"), ("while", "IN"), ("though", "IN"), ("although", "IN"),
    ("as", "IN"), ("than", "IN"), ("until", "IN"),
    // Conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // Modals
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"),
    ("to", "TO"),
    ("there", "EX"),
    // Wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("which", "WDT"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // Auxiliaries
    ("be", "VB"), ("is", "VBZ"), ("am", "VBP"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    // Irregular past forms
    ("went", "VBD"), ("came", "VBD"), ("saw", "VBD"), ("knew", "VBD"), ("took", "VBD"),
    ("gave", "VBD"), ("found", "VBD"), ("said", "VBD"), ("told", "VBD"), ("made", "VBD"),
    ("thought", "VBD"), ("felt", "VBD"), ("left", "VBD"), ("kept", "VBD"), ("held", "VBD"),
    ("stood", "VBD"), ("heard", "VBD"), ("ran", "VBD"), ("wrote", "VBD"), ("spoke", "VBD"),
    ("fell", "VBD"), ("met", "VBD"), ("led", "VBD"), ("lost", "VBD"), ("sat", "VBD"),
    ("fought", "VBD"), ("won", "VBD"), ("hid", "VBD"), ("rose", "VBD"), ("swore", "VBD"),
    ("began", "VBD"), ("brought", "VBD"), ("became", "VBD"), ("drew", "VBD"), ("grew", "VBD"),
    ("known", "VBN"), ("taken", "VBN"), ("given", "VBN"), ("seen", "VBN"), ("written", "VBN"),
    ("hidden", "VBN"), ("spoken", "VBN"), ("forgotten", "VBN"), ("broken", "VBN"),
    // Common adjectives without telltale suffixes
    ("good", "JJ"), ("bad", "JJ"), ("old", "JJ"), ("new", "JJ"), ("young", "JJ"),
    ("great", "JJ"), ("little", "JJ"), ("small", "JJ"), ("long", "JJ"), ("high", "JJ"),
    ("dark", "JJ"), ("bright", "JJ"), ("cold", "JJ"), ("warm", "JJ"), ("true", "JJ"),
    ("fair", "JJ"), ("sweet", "JJ"), ("ancient", "JJ"), ("silent", "JJ"), ("distant", "JJ"),
    ("strange", "JJ"), ("deep", "JJ"), ("last", "JJ"), ("first", "JJ"), ("many", "JJ"),
    ("better", "JJR"), ("worse", "JJR"), ("best", "JJS"), ("worst", "JJS"),
    // Common adverbs without -ly
    ("not", "RB"), ("never", "RB"), ("always", "RB"), ("often", "RB"), ("soon", "RB"),
    ("again", "RB"), ("still", "RB"), ("already", "RB"), ("very", "RB"), ("too", "RB"),
    ("here", "RB"), ("now", "RB"), ("then", "RB"), ("once", "RB"), ("ever", "RB"),
    ("perhaps", "RB"), ("together", "RB"), ("away", "RB"), ("forever", "RB"),
    ("n't", "RB"), ("'s", "POS"), ("’s", "POS"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ic", "ant", "ent", "al",
];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "dom", "hood",
];

/// Deterministic English tagger driven by a lexicon and suffix rules.
pub struct RuleTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }
}

impl RuleTagger {
    fn tag_word(&self, word: &str) -> &'static str {
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return punctuation_tag(word);
        }
        if word.chars().all(|c| c.is_numeric()) {
            return "CD";
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return *tag;
        }

        if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
                "NNPS"
            } else {
                "NNP"
            };
        }

        suffix_tag(&lower)
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, NlpError> {
        Ok(tokens
            .iter()
            .map(|t| TaggedToken::new(t.clone(), self.tag_word(t)))
            .collect())
    }
}

fn punctuation_tag(word: &str) -> &'static str {
    match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "—" | "–" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "“" | "”" | "``" | "''" => "''",
        "$" => "$",
        "#" => "#",
        _ => "SYM",
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    let len = lower.chars().count();

    if len > 4 && lower.ends_with("ly") {
        return "RB";
    }
    if len > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if len > 4 && lower.ends_with("est") {
        return "JJS";
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "NN";
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return "JJ";
    }
    if len > 3 && lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        return "NNS";
    }
    "NN"
}
