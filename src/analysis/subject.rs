// Keyword heuristic that guesses a document's subject.
//
// The rules are fixed and evaluated in priority order; the first rule with
// any keyword present wins. Membership is exact: a multi-word entity such
// as "house aldric" matches neither "house" nor "aldric".

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    RomeoAndJuliet,
    MedievalIntrigue,
    VeronaMysteries,
    Unknown,
}

const RULES: &[(&[&str], Subject)] = &[
    (&["romeo", "juliet", "verona"], Subject::RomeoAndJuliet),
    (&["aldric", "torran", "house"], Subject::MedievalIntrigue),
    (&["mystery", "ancient", "secrets"], Subject::VeronaMysteries),
];

impl Subject {
    pub fn label(&self) -> &'static str {
        match self {
            Subject::RomeoAndJuliet => "A cosmic retelling of Romeo and Juliet",
            Subject::MedievalIntrigue => "A medieval tale of intrigue and power",
            Subject::VeronaMysteries => "A tale of Verona's mysteries",
            Subject::Unknown => "Unknown subject",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify from the top tokens and entity names of one document.
pub fn determine_subject(entities: &[String], tokens: &[String]) -> Subject {
    let combined: HashSet<String> = tokens
        .iter()
        .chain(entities)
        .map(|s| s.to_lowercase())
        .collect();

    if combined.is_empty() {
        return Subject::Unknown;
    }

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| combined.contains(*k)))
        .map(|(_, subject)| *subject)
        .unwrap_or(Subject::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(determine_subject(&[], &[]), Subject::Unknown);
    }

    #[test]
    fn verona_alone_fires_first_rule() {
        assert_eq!(
            determine_subject(&[], &strings(&["verona"])),
            Subject::RomeoAndJuliet
        );
    }

    #[test]
    fn earlier_rule_wins() {
        let tokens = strings(&["secrets", "House", "Juliet"]);
        assert_eq!(determine_subject(&[], &tokens), Subject::RomeoAndJuliet);
    }

    #[test]
    fn entity_names_take_part() {
        let entities = strings(&["Torran"]);
        assert_eq!(
            determine_subject(&entities, &strings(&["sword"])),
            Subject::MedievalIntrigue
        );
    }

    #[test]
    fn multi_word_entity_does_not_match_parts() {
        let entities = strings(&["House Aldric"]);
        assert_eq!(determine_subject(&entities, &[]), Subject::Unknown);
    }

    #[test]
    fn third_rule_and_default() {
        assert_eq!(
            determine_subject(&[], &strings(&["Ancient", "ruins"])),
            Subject::VeronaMysteries
        );
        assert_eq!(
            determine_subject(&[], &strings(&["starship"])),
            Subject::Unknown
        );
    }

    #[test]
    fn labels_are_exact() {
        assert_eq!(
            Subject::VeronaMysteries.to_string(),
            "A tale of Verona's mysteries"
        );
        assert_eq!(Subject::Unknown.label(), "Unknown subject");
    }
}
