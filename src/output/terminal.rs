// Colored terminal rendering of the pass reports.
//
// Layout follows the order the passes run in: every subject-pass document,
// then every n-gram document, then the comparison and verdict.

use colored::Colorize;

use super::{file_label, join_ngram, truncate_chars};
use crate::analysis::compare::Verdict;
use crate::pipeline::passes::{Comparison, DocumentReport, NgramReport};

const FORMS_PREVIEW_CHARS: usize = 160;

/// Display one subject-pass document.
pub fn display_document_report(report: &DocumentReport, show_forms: bool) {
    println!("\nAnalyzing {}...", report.path.display());

    let analysis = match &report.outcome {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("{} {e}.", "Error:".red());
            println!(
                "Skipping analysis for {} due to errors.",
                report.path.display()
            );
            return;
        }
    };

    println!("{}", "Most Common Tokens:".bold());
    for (token, count) in &analysis.top_tokens {
        println!("  {token}: {count}");
    }

    println!("Number of Named Entities: {}", analysis.entity_count);
    println!("{}", "Named Entities:".bold());
    for entity in &analysis.entities {
        println!("  {}", entity.cyan());
    }

    if show_forms {
        let stems = truncate_chars(&analysis.stems.join(", "), FORMS_PREVIEW_CHARS);
        let lemmas = truncate_chars(&analysis.lemmas.join(", "), FORMS_PREVIEW_CHARS);
        println!("Stems: {}", stems.dimmed());
        println!("Lemmas: {}", lemmas.dimmed());
    }

    println!("Subject: {}", analysis.subject.label().green().bold());
}

/// Display one n-gram-pass document.
pub fn display_ngram_report(report: &NgramReport) {
    println!("\nAnalyzing {} for n-grams...", report.path.display());

    match &report.outcome {
        Ok(analysis) => {
            println!("{}", "Most Common Trigrams:".bold());
            for (ngram, count) in &analysis.top_ngrams {
                println!("  {}: {count}", join_ngram(ngram));
            }
        }
        Err(e) => {
            println!("{} {e}.", "Error:".red());
            println!(
                "Skipping analysis for {} due to errors.",
                report.path.display()
            );
        }
    }
}

/// Display the trigram comparison and the authorship verdict.
///
/// `None` means the comparison was skipped because the query document was
/// not analyzed.
pub fn display_comparison(comparison: Option<&Comparison>, query_label: &str) {
    let Some(comparison) = comparison else {
        println!(
            "\n{}",
            format!("Trigram comparison skipped: {query_label} was not analyzed.").yellow()
        );
        return;
    };

    let query = file_label(&comparison.query);
    println!(
        "\n{}",
        format!("Comparing trigrams in {query} with the first three texts...").bold()
    );
    for similarity in &comparison.similarities {
        match similarity.shared {
            Some(count) => println!(
                "Common trigrams with {}: {count}",
                similarity.reference.display()
            ),
            None => println!(
                "Common trigrams with {}: {}",
                similarity.reference.display(),
                "unavailable (document skipped)".dimmed()
            ),
        }
    }

    println!();
    match &comparison.verdict {
        Verdict::NoSharedTrigrams => println!(
            "{}",
            format!(
                "Based on the analysis, there are no common trigrams between {query} and the \
                 first three texts, which suggests they were not written by the same author."
            )
            .bold()
        ),
        Verdict::SharedTrigrams { reference, count } => println!(
            "{}",
            format!(
                "{query} shares {count} of its most common trigrams with {}, so a common \
                 author cannot be ruled out.",
                file_label(reference)
            )
            .bold()
        ),
    }
}
