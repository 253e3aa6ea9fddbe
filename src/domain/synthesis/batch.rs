use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read batch input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable lines found in {0}")]
    NoUsableLines(PathBuf),
}

/// One retained line of a batch input file.
///
/// `index` is 1-based and counts retained lines only; blank lines and
/// `#` comments consume no index.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub index: usize,
    pub text: String,
}

/// Read a batch input file, one utterance per line.
pub fn read_batch_file(path: &Path) -> Result<Vec<BatchItem>, BatchError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = filter_lines(&contents);
    if items.is_empty() {
        return Err(BatchError::NoUsableLines(path.to_path_buf()));
    }
    Ok(items)
}

/// Trim every line, drop empty and `#`-prefixed lines, then index the
/// survivors from 1.
pub fn filter_lines(contents: &str) -> Vec<BatchItem> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .enumerate()
        .map(|(position, line)| BatchItem {
            index: position + 1,
            text: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn it_should_skip_blank_and_comment_lines_without_consuming_indices() {
        let items = filter_lines("\n# note\nHello\n  \nWorld\n");
        assert_eq!(
            items,
            vec![
                BatchItem {
                    index: 1,
                    text: "Hello".to_string()
                },
                BatchItem {
                    index: 2,
                    text: "World".to_string()
                },
            ]
        );
    }

    #[test]
    fn it_should_trim_surrounding_whitespace_from_utterances() {
        let items = filter_lines("  padded line  \n");
        assert_eq!(items[0].text, "padded line");
    }

    #[test]
    fn it_should_treat_indented_comments_as_comments() {
        let items = filter_lines("   # still a comment\nreal line\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "real line");
    }

    #[test]
    fn it_should_fail_when_a_file_has_no_usable_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# only comments\n\n").unwrap();
        let err = read_batch_file(file.path()).unwrap_err();
        assert!(matches!(err, BatchError::NoUsableLines(_)));
    }

    #[test]
    fn it_should_read_items_from_a_file_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first\n# skip\nsecond").unwrap();
        let items = read_batch_file(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, 1);
        assert_eq!(items[1].text, "second");
    }

    #[test]
    fn it_should_fail_for_a_missing_file() {
        let err = read_batch_file(Path::new("/nonexistent/batch.txt")).unwrap_err();
        assert!(matches!(err, BatchError::Io { .. }));
    }
}
