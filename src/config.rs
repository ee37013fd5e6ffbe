use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::nlp::stopwords::StopwordSource;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command
/// line flags override what is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding Text_1.txt .. Text_4.txt (TEXTPROBE_DIR, default:
    /// the directory containing the executable)
    pub base_dir: PathBuf,
    /// Stopword list to filter with (TEXTPROBE_STOPWORDS, default "nltk")
    pub stopwords: StopwordSource,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let base_dir = match env::var("TEXTPROBE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => executable_dir()?,
        };

        let stopwords = match env::var("TEXTPROBE_STOPWORDS") {
            Ok(value) => value
                .parse::<StopwordSource>()
                .map_err(|e| anyhow::anyhow!("TEXTPROBE_STOPWORDS: {e}"))?,
            Err(_) => StopwordSource::Nltk,
        };

        Ok(Self {
            base_dir,
            stopwords,
        })
    }

    /// Apply a `--dir` override from the command line.
    pub fn with_base_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.base_dir = dir;
        }
        self
    }
}

/// The directory the running executable lives in.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .with_context(|| format!("Executable path {} has no parent", exe.display()))
}
