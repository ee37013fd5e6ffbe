// WordNet-style morphological lemmatizer.
//
// Mirrors the shape of WordNet's morphy: an exception list per word class
// is consulted first, then suffix detachment rules. There is no dictionary
// to validate candidates against, so detachment is guarded by the Porter
// measure and CVC checks to restore a dropped final "e" (hoped -> hope)
// or undo consonant doubling (stopped -> stop).
//
// Words containing uppercase letters are returned unchanged, as WordNet
// has no entries for them.

use std::collections::HashMap;

use super::traits::Lemmatizer;
use super::types::WordClass;

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("people", "person"),
    ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
    ("lives", "life"), ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"),
    ("wolves", "wolf"), ("thieves", "thief"), ("halves", "half"), ("selves", "self"),
    ("shelves", "shelf"), ("oxen", "ox"), ("dice", "die"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("has", "have"), ("had", "have"), ("does", "do"), ("did", "do"), ("done", "do"),
    ("went", "go"), ("gone", "go"), ("said", "say"), ("made", "make"), ("took", "take"),
    ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"), ("knew", "know"),
    ("known", "know"), ("gave", "give"), ("given", "give"), ("found", "find"),
    ("thought", "think"), ("told", "tell"), ("became", "become"), ("left", "leave"),
    ("felt", "feel"), ("brought", "bring"), ("began", "begin"), ("begun", "begin"),
    ("kept", "keep"), ("held", "hold"), ("stood", "stand"), ("heard", "hear"), ("ran", "run"),
    ("wrote", "write"), ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
    ("fell", "fall"), ("fallen", "fall"), ("met", "meet"), ("led", "lead"), ("lost", "lose"),
    ("sat", "sit"), ("fought", "fight"), ("won", "win"), ("hid", "hide"), ("hidden", "hide"),
    ("rose", "rise"), ("risen", "rise"), ("swore", "swear"), ("sworn", "swear"),
    ("drew", "draw"), ("drawn", "draw"), ("grew", "grow"), ("grown", "grow"),
    ("forgot", "forget"), ("forgotten", "forget"), ("broke", "break"), ("broken", "break"),
    ("dying", "die"), ("lying", "lie"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("furthest", "far"), ("farthest", "far"),
    ("elder", "old"), ("eldest", "old"), ("less", "little"), ("least", "little"),
    ("more", "much"), ("most", "much"),
];

/// Rule-based lemmatizer following WordNet's morphy detachment order.
pub struct MorphyLemmatizer {
    nouns: HashMap<&'static str, &'static str>,
    verbs: HashMap<&'static str, &'static str>,
    adjectives: HashMap<&'static str, &'static str>,
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        Self {
            nouns: NOUN_EXCEPTIONS.iter().copied().collect(),
            verbs: VERB_EXCEPTIONS.iter().copied().collect(),
            adjectives: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
        }
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String {
        if word.chars().any(|c| c.is_uppercase()) || !word.is_ascii() {
            return word.to_string();
        }

        let exceptions = match class {
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
            WordClass::Adjective => &self.adjectives,
            WordClass::Adverb => return word.to_string(),
        };
        if let Some(lemma) = exceptions.get(word) {
            return lemma.to_string();
        }

        match class {
            WordClass::Noun => noun_base(word),
            WordClass::Verb => verb_base(word),
            WordClass::Adjective => adjective_base(word),
            WordClass::Adverb => word.to_string(),
        }
    }
}

fn noun_base(word: &str) -> String {
    if word.len() <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    for (suffix, replacement) in [
        ("ches", "ch"),
        ("shes", "sh"),
        ("sses", "ss"),
        ("xes", "x"),
        ("zes", "z"),
        ("ies", "y"),
        ("men", "man"),
    ] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn verb_base(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem);
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn adjective_base(word: &str) -> String {
    if word.len() <= 4 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("iest") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ier") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("est") {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("er") {
        return restore_stem(stem);
    }
    word.to_string()
}

/// Repair a stem left behind by removing -ed/-ing/-er/-est.
fn restore_stem(stem: &str) -> String {
    if stem.len() < 2 || !has_vowel(stem) {
        return stem.to_string();
    }
    if ends_with_double_consonant(stem) && !stem.ends_with(['l', 's', 'z']) {
        return stem[..stem.len() - 1].to_string();
    }
    if measure(stem) == 1 && ends_with_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

fn has_vowel(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

/// Porter measure: the number of vowel-consonant sequences.
fn measure(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let vowel = !is_consonant(&chars, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn ends_with_double_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(&chars, n - 1)
}

fn ends_with_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    n >= 3
        && is_consonant(&chars, n - 3)
        && !is_consonant(&chars, n - 2)
        && is_consonant(&chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}
