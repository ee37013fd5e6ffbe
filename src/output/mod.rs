// Output formatting for the terminal report.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so it never panics on multi-byte
/// characters like accented letters or curly quotes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render an n-gram the way the report shows it: words joined by spaces.
pub fn join_ngram(ngram: &[String]) -> String {
    ngram.join(" ")
}

/// File name of a path for compact display, falling back to the full path.
pub fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Verona’s walls", 8), "Verona’s...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn ngram_joined_with_spaces() {
        let gram = vec!["star".to_string(), "crossed".to_string(), "lovers".to_string()];
        assert_eq!(join_ngram(&gram), "star crossed lovers");
    }

    #[test]
    fn file_label_uses_name() {
        assert_eq!(file_label(Path::new("/tmp/docs/Text_4.txt")), "Text_4.txt");
    }
}
