// Document loading by fixed naming convention.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::NlpError;

/// Number of documents the subject pass covers (Text_1 .. Text_3).
pub const REFERENCE_DOCUMENTS: usize = 3;
/// Number of documents the n-gram pass covers (Text_1 .. Text_4).
pub const ALL_DOCUMENTS: usize = 4;

/// Path of the `index`-th document (1-based) inside `base_dir`.
pub fn document_path(base_dir: &Path, index: usize) -> PathBuf {
    base_dir.join(format!("Text_{index}.txt"))
}

/// Paths for documents `1..=count`.
pub fn document_paths(base_dir: &Path, count: usize) -> Vec<PathBuf> {
    (1..=count).map(|i| document_path(base_dir, i)).collect()
}

/// Read a whole document into memory.
///
/// Any read failure (absent file, permissions, invalid UTF-8) comes back
/// as `FileMissing` so the caller can skip the document.
pub fn load_document(path: &Path) -> Result<String, NlpError> {
    let text = std::fs::read_to_string(path).map_err(|source| NlpError::FileMissing {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Loaded document");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_naming_convention() {
        let paths = document_paths(Path::new("/data"), 4);
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0], Path::new("/data/Text_1.txt"));
        assert_eq!(paths[3], Path::new("/data/Text_4.txt"));
    }

    #[test]
    fn missing_file_is_typed_error() {
        let path = Path::new("/definitely/not/here/Text_9.txt");
        match load_document(path) {
            Err(NlpError::FileMissing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileMissing, got {other:?}"),
        }
    }
}
