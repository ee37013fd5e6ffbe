// Trigram overlap between a query document and reference documents,
// and the authorship verdict derived from it.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::ngrams::{Ngram, NgramAnalysis};

/// Shared top n-grams between the query and one reference.
/// `shared` is `None` when the reference could not be analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Similarity {
    pub reference: PathBuf,
    pub shared: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No reference shares any top trigram with the query.
    NoSharedTrigrams,
    /// The reference sharing the most top trigrams (first wins on ties).
    SharedTrigrams { reference: PathBuf, count: usize },
}

/// Size of the intersection of two top n-gram sets. Entries are
/// `(n-gram, count)` pairs, so an n-gram only matches with the same count.
pub fn shared_count(a: &[(Ngram, usize)], b: &[(Ngram, usize)]) -> usize {
    let set_a: HashSet<&(Ngram, usize)> = a.iter().collect();
    let set_b: HashSet<&(Ngram, usize)> = b.iter().collect();
    set_a.intersection(&set_b).count()
}

/// Compare the query document against each reference in order.
///
/// Returns `None` when the query itself has no analysis: the comparison is
/// skipped entirely rather than reported partially.
pub fn compare_trigrams(
    results: &HashMap<PathBuf, NgramAnalysis>,
    query: &Path,
    references: &[PathBuf],
) -> Option<Vec<Similarity>> {
    let query_ngrams = &results.get(query)?.top_ngrams;

    Some(
        references
            .iter()
            .map(|reference| Similarity {
                reference: reference.clone(),
                shared: results
                    .get(reference)
                    .map(|r| shared_count(query_ngrams, &r.top_ngrams)),
            })
            .collect(),
    )
}

pub fn authorship_verdict(similarities: &[Similarity]) -> Verdict {
    let mut best: Option<(&PathBuf, usize)> = None;
    for s in similarities {
        if let Some(count) = s.shared {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((&s.reference, count));
            }
        }
    }

    match best {
        Some((reference, count)) => Verdict::SharedTrigrams {
            reference: reference.clone(),
            count,
        },
        None => Verdict::NoSharedTrigrams,
    }
}
