// Composition tests: the passes running over real files on disk.
//
// Each test writes its documents into a fresh directory under the system
// temp dir, then runs the same pass functions the binary uses.

use std::fs;
use std::path::PathBuf;

use textprobe::analysis::compare::Verdict;
use textprobe::analysis::document::analyze_text;
use textprobe::analysis::ngrams::analyze_ngrams;
use textprobe::analysis::subject::Subject;
use textprobe::error::NlpError;
use textprobe::nlp::stopwords::Stopwords;
use textprobe::nlp::toolkit::NlpToolkit;
use textprobe::nlp::traits::{EntityChunker, PosTagger, WordTokenizer};
use textprobe::nlp::types::{Chunk, TaggedToken};
use textprobe::pipeline::passes::{compare_reports, ngram_pass, subject_pass};

const ROMEO: &str = "Romeo stood beneath the balcony in Verona. Juliet answered Romeo \
                     from the balcony while the stars burned over Verona.";
const ALDRIC: &str = "House Aldric gathered its banners. Lord Torran rode north with \
                      the banners of House Aldric and the house guard followed.";
const MYSTERY: &str = "Beneath the old library lay ancient secrets. The ancient secrets \
                       waited for a scholar patient enough to read the ancient scrolls.";
const QUERY: &str = "The ancient secrets waited in the dark. Scholars read the ancient \
                     scrolls at night.";
const ECHO: &str = "The ancient secrets waited in the dark. Ancient secrets waited for \
                    nobody, and the ancient secrets waited still.";

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("textprobe-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, index: usize, text: &str) {
        fs::write(self.0.join(format!("Text_{index}.txt")), text).unwrap();
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn toolkit() -> NlpToolkit {
    NlpToolkit::english(Stopwords::nltk_english()).unwrap()
}

struct BrokenTokenizer;

impl WordTokenizer for BrokenTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<String>, NlpError> {
        Err(NlpError::TokenizerFailure("punkt resource unavailable".to_string()))
    }
}

struct BrokenTagger;

impl PosTagger for BrokenTagger {
    fn tag(&self, _tokens: &[String]) -> Result<Vec<TaggedToken>, NlpError> {
        Err(NlpError::TaggerFailure("tagger resource unavailable".to_string()))
    }
}

struct BrokenChunker;

impl EntityChunker for BrokenChunker {
    fn chunk(&self, _tagged: &[TaggedToken]) -> Result<Vec<Chunk>, NlpError> {
        Err(NlpError::ChunkerFailure("chunker resource unavailable".to_string()))
    }
}

// ============================================================
// Subject pass
// ============================================================

#[test]
fn subject_pass_classifies_each_document() {
    let dir = ScratchDir::new("subjects");
    dir.write(1, ROMEO);
    dir.write(2, ALDRIC);
    dir.write(3, MYSTERY);

    let reports = subject_pass(&toolkit(), &dir.0);
    assert_eq!(reports.len(), 3);

    let subjects: Vec<Subject> = reports
        .iter()
        .map(|r| r.outcome.as_ref().unwrap().subject)
        .collect();
    assert_eq!(
        subjects,
        vec![
            Subject::RomeoAndJuliet,
            Subject::MedievalIntrigue,
            Subject::VeronaMysteries,
        ]
    );
}

#[test]
fn subject_pass_reports_entities() {
    let dir = ScratchDir::new("entities");
    dir.write(1, ALDRIC);

    let reports = subject_pass(&toolkit(), &dir.0);
    let analysis = reports[0].outcome.as_ref().unwrap();
    assert!(analysis.entities.contains(&"House Aldric".to_string()));
    assert_eq!(analysis.entity_count, analysis.entities.len());
}

#[test]
fn missing_file_is_skipped_without_halting() {
    let dir = ScratchDir::new("missing");
    dir.write(1, ROMEO);
    dir.write(3, MYSTERY);

    let reports = subject_pass(&toolkit(), &dir.0);
    assert_eq!(reports.len(), 3);
    assert!(reports[0].outcome.is_ok());
    assert!(matches!(
        reports[1].outcome,
        Err(NlpError::FileMissing { .. })
    ));
    assert!(reports[2].outcome.is_ok());

    let message = reports[1].outcome.as_ref().unwrap_err().to_string();
    assert!(message.contains("Text_2.txt"));
    assert!(message.contains("not found"));
}

// ============================================================
// N-gram pass and comparison
// ============================================================

#[test]
fn ngram_pass_and_comparison_find_shared_trigrams() {
    let dir = ScratchDir::new("ngrams");
    dir.write(1, ROMEO);
    dir.write(2, ALDRIC);
    dir.write(3, MYSTERY);
    dir.write(4, QUERY);

    let reports = ngram_pass(&toolkit(), &dir.0);
    assert_eq!(reports.len(), 4);

    let comparison = compare_reports(&reports).unwrap();
    let counts: Vec<Option<usize>> = comparison.similarities.iter().map(|s| s.shared).collect();
    assert_eq!(counts, vec![Some(0), Some(0), Some(1)]);
    assert!(matches!(
        comparison.verdict,
        Verdict::SharedTrigrams { ref reference, .. } if reference.ends_with("Text_3.txt")
    ));
}

#[test]
fn unrelated_query_shares_nothing() {
    let dir = ScratchDir::new("unrelated");
    dir.write(1, ROMEO);
    dir.write(2, ALDRIC);
    dir.write(3, MYSTERY);
    dir.write(4, "Starships drifted past silent moons while engineers repaired hull plating.");

    let comparison = compare_reports(&ngram_pass(&toolkit(), &dir.0)).unwrap();
    assert!(comparison.similarities.iter().all(|s| s.shared == Some(0)));
    assert_eq!(comparison.verdict, Verdict::NoSharedTrigrams);
}

#[test]
fn repeated_trigram_with_different_count_does_not_match() {
    let dir = ScratchDir::new("echo");
    dir.write(1, ROMEO);
    dir.write(2, ALDRIC);
    dir.write(3, MYSTERY);
    dir.write(4, ECHO);

    let reports = ngram_pass(&toolkit(), &dir.0);

    // "ancient secrets waited" appears three times here and once in Text_3
    let shared = vec!["ancient", "secrets", "waited"];
    let query_top = &reports[3].outcome.as_ref().unwrap().top_ngrams;
    assert_eq!(query_top[0], (shared.iter().map(|w| w.to_string()).collect(), 3));

    let comparison = compare_reports(&reports).unwrap();
    assert_eq!(comparison.similarities[2].shared, Some(0));
    assert_eq!(comparison.verdict, Verdict::NoSharedTrigrams);
}

#[test]
fn missing_query_skips_comparison() {
    let dir = ScratchDir::new("noquery");
    dir.write(1, ROMEO);
    dir.write(2, ALDRIC);
    dir.write(3, MYSTERY);

    let reports = ngram_pass(&toolkit(), &dir.0);
    assert!(reports[3].outcome.is_err());
    assert!(compare_reports(&reports).is_none());
}

#[test]
fn missing_reference_is_excluded_from_comparison() {
    let dir = ScratchDir::new("noref");
    dir.write(1, ROMEO);
    dir.write(3, MYSTERY);
    dir.write(4, QUERY);

    let comparison = compare_reports(&ngram_pass(&toolkit(), &dir.0)).unwrap();
    assert_eq!(comparison.similarities.len(), 3);
    assert_eq!(comparison.similarities[1].shared, None);
    assert_eq!(comparison.similarities[2].shared, Some(1));
}

// ============================================================
// Degraded collaborators
// ============================================================

#[test]
fn tokenizer_failure_falls_back_to_whitespace() {
    let toolkit = toolkit().with_tokenizer(Box::new(BrokenTokenizer));

    let ngrams = analyze_ngrams(&toolkit, "ancient secrets waited in silence", 3);
    assert_eq!(ngrams.tokens, vec!["ancient", "secrets", "waited", "silence"]);
    assert_eq!(ngrams.top_ngrams.len(), 2);

    // Punctuation stays glued to words and those tokens fail the filter
    let analysis = analyze_text(&toolkit, "Romeo, Romeo wept");
    assert_eq!(analysis.top_tokens, vec![("Romeo".to_string(), 1), ("wept".to_string(), 1)]);
}

#[test]
fn tagger_failure_keeps_processing() {
    let toolkit = toolkit().with_tagger(Box::new(BrokenTagger));
    let analysis = analyze_text(&toolkit, "Juliet dreamed of ancient stars");

    // Default NN tags: no proper nouns, so no entities
    assert_eq!(analysis.entity_count, 0);
    assert_eq!(analysis.lemmas.len(), 4);
    assert_eq!(analysis.lemmas[3], "star");
    assert_eq!(analysis.subject, Subject::RomeoAndJuliet);
}

#[test]
fn chunker_failure_yields_no_entities() {
    let toolkit = toolkit().with_chunker(Box::new(BrokenChunker));
    let analysis = analyze_text(&toolkit, ALDRIC);
    assert_eq!(analysis.entity_count, 0);
    assert!(analysis.entities.is_empty());
    assert_eq!(analysis.subject, Subject::MedievalIntrigue);
}

#[test]
fn paths_keep_their_own_case_rules() {
    let toolkit = toolkit();
    let analysis = analyze_text(&toolkit, "Verona verona VERONA");
    let ngrams = analyze_ngrams(&toolkit, "Verona verona VERONA", 3);

    assert_eq!(analysis.top_tokens.len(), 3);
    assert_eq!(ngrams.tokens, vec!["verona", "verona", "verona"]);
    assert_eq!(ngrams.top_ngrams[0].1, 1);
}
