// textprobe: exploratory text analysis and trigram authorship comparison.
//
// This is the library root. The binary in main.rs wires configuration,
// the NLP toolkit, the two document passes and terminal output together.

pub mod analysis;
pub mod config;
pub mod error;
pub mod nlp;
pub mod output;
pub mod pipeline;
