// Failure taxonomy for the analysis pipeline.
//
// None of these abort a run. Each is caught where it happens and turned
// into a degraded result: whitespace tokens, default tags, no entities,
// or a skipped document.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("File {} not found", .path.display())]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tokenizer failed: {0}")]
    TokenizerFailure(String),

    #[error("POS tagging failed: {0}")]
    TaggerFailure(String),

    #[error("NER failed: {0}")]
    ChunkerFailure(String),
}
