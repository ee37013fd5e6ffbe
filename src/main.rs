use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use textprobe::analysis::loader::{document_path, ALL_DOCUMENTS};
use textprobe::config::Config;
use textprobe::nlp::stopwords::Stopwords;
use textprobe::nlp::toolkit::NlpToolkit;
use textprobe::output::{file_label, terminal};
use textprobe::pipeline::passes;

/// textprobe: exploratory text analysis and trigram authorship comparison.
///
/// Reads Text_1.txt .. Text_4.txt from a directory, reports frequent
/// tokens, named entities and a guessed subject for the first three, then
/// compares the fourth against them by shared trigrams.
#[derive(Parser)]
#[command(name = "textprobe", version, about)]
struct Cli {
    /// Directory containing the Text_N.txt files (overrides TEXTPROBE_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Also print stems and lemmas for each document
    #[arg(long, global = true)]
    show_forms: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the subject pass, the n-gram pass and the comparison (default)
    Run,

    /// Token frequencies, named entities and subject for Text_1..Text_3
    Subjects,

    /// Top trigrams for Text_1..Text_4 and the Text_4 comparison
    Ngrams,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textprobe=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.with_base_dir(cli.dir);

    let stopwords = Stopwords::load(config.stopwords);
    if stopwords.is_empty() {
        warn!(source = ?config.stopwords, "Stopword list is empty, no tokens will be filtered");
    }
    info!(
        source = ?config.stopwords,
        words = stopwords.len(),
        dir = %config.base_dir.display(),
        "Loaded stopwords"
    );
    let toolkit = NlpToolkit::english(stopwords)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            run_subjects(&toolkit, &config, cli.show_forms);
            run_ngrams(&toolkit, &config);
        }
        Commands::Subjects => run_subjects(&toolkit, &config, cli.show_forms),
        Commands::Ngrams => run_ngrams(&toolkit, &config),
    }

    Ok(())
}

fn run_subjects(toolkit: &NlpToolkit, config: &Config, show_forms: bool) {
    for report in passes::subject_pass(toolkit, &config.base_dir) {
        terminal::display_document_report(&report, show_forms);
    }
}

fn run_ngrams(toolkit: &NlpToolkit, config: &Config) {
    let reports = passes::ngram_pass(toolkit, &config.base_dir);
    for report in &reports {
        terminal::display_ngram_report(report);
    }

    let query = file_label(&document_path(&config.base_dir, ALL_DOCUMENTS));
    terminal::display_comparison(passes::compare_reports(&reports).as_ref(), &query);
}
