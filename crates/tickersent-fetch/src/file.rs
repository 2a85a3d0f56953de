//! Local-file document source for offline analysis.

use std::path::Path;

use tickersent_core::Document;

use crate::FetchError;

/// Read posts from a text file, one per line. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when the file cannot be read.
pub fn read_posts(path: &Path) -> Result<Vec<Document>, FetchError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Document::post)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tickersent-fetch-{name}.txt"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_one_post_per_line() {
        let path = write_fixture("posts", "$AAPL to the moon\nAAPL crash incoming\n");
        let documents = read_posts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].body, "$AAPL to the moon");
        assert!(documents[0].title.is_none());
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        let path = write_fixture("blank-lines", "  first post  \n\n   \nsecond post\n");
        let documents = read_posts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].body, "first post");
        assert_eq!(documents[1].body, "second post");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_posts(Path::new("/nonexistent/posts.txt"));
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
