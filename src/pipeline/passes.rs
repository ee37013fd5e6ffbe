// The two document passes and the trigram comparison that follows them.
//
// Each pass loads its documents in order and returns one report per path.
// A document that cannot be loaded stays in the report list with its error
// so the caller can print the skip, and later steps simply ignore it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::analysis::compare::{authorship_verdict, compare_trigrams, Similarity, Verdict};
use crate::analysis::document::{analyze_text, DocumentAnalysis};
use crate::analysis::loader::{document_paths, load_document, ALL_DOCUMENTS, REFERENCE_DOCUMENTS};
use crate::analysis::ngrams::{analyze_ngrams, NgramAnalysis, TRIGRAM};
use crate::error::NlpError;
use crate::nlp::toolkit::NlpToolkit;

/// Outcome of the subject pass for one document.
#[derive(Debug)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub outcome: Result<DocumentAnalysis, NlpError>,
}

/// Outcome of the n-gram pass for one document.
#[derive(Debug)]
pub struct NgramReport {
    pub path: PathBuf,
    pub outcome: Result<NgramAnalysis, NlpError>,
}

/// Similarities of the query document against each reference, plus the
/// verdict drawn from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub query: PathBuf,
    pub similarities: Vec<Similarity>,
    pub verdict: Verdict,
}

/// Run the subject pass over documents 1..=3.
pub fn subject_pass(toolkit: &NlpToolkit, base_dir: &Path) -> Vec<DocumentReport> {
    document_paths(base_dir, REFERENCE_DOCUMENTS)
        .into_iter()
        .map(|path| {
            info!(path = %path.display(), "Analyzing document");
            let outcome = load_document(&path).map(|text| analyze_text(toolkit, &text));
            if let Err(e) = &outcome {
                warn!(error = %e, "Skipping document");
            }
            DocumentReport { path, outcome }
        })
        .collect()
}

/// Run the trigram pass over documents 1..=4.
pub fn ngram_pass(toolkit: &NlpToolkit, base_dir: &Path) -> Vec<NgramReport> {
    document_paths(base_dir, ALL_DOCUMENTS)
        .into_iter()
        .map(|path| {
            info!(path = %path.display(), "Analyzing document for n-grams");
            let outcome =
                load_document(&path).map(|text| analyze_ngrams(toolkit, &text, TRIGRAM));
            if let Err(e) = &outcome {
                warn!(error = %e, "Skipping document");
            }
            NgramReport { path, outcome }
        })
        .collect()
}

/// Compare the last document of the n-gram pass against the others.
///
/// Returns `None` when the pass did not cover all four documents or the
/// fourth could not be analyzed.
pub fn compare_reports(reports: &[NgramReport]) -> Option<Comparison> {
    if reports.len() != ALL_DOCUMENTS {
        return None;
    }

    let results: HashMap<PathBuf, NgramAnalysis> = reports
        .iter()
        .filter_map(|r| {
            r.outcome
                .as_ref()
                .ok()
                .map(|analysis| (r.path.clone(), analysis.clone()))
        })
        .collect();

    let (query, references) = reports.split_last()?;
    let reference_paths: Vec<PathBuf> = references.iter().map(|r| r.path.clone()).collect();

    let similarities = compare_trigrams(&results, &query.path, &reference_paths)?;
    let verdict = authorship_verdict(&similarities);
    info!(?verdict, "Compared trigrams");

    Some(Comparison {
        query: query.path.clone(),
        similarities,
        verdict,
    })
}
