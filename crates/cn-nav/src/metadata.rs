//! Page metadata extraction from content files.
//!
//! A page file may start with a frontmatter block delimited by `---` lines
//! carrying a quoted `title` and a numeric `order`. When no frontmatter title
//! is present, the first level-1 heading in the body is used instead.
//!
//! Extraction never fails: missing files, unreadable files and malformed
//! frontmatter all collapse to empty metadata, and each field is recovered
//! independently (a title can survive a bad order and vice versa).

use std::path::Path;

use regex::Regex;

use cn_storage::ContentStore;

/// Title and ordering metadata extracted from a single page file.
///
/// Transient: consumed by the scanner while building an item, then discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Display title override.
    pub title: Option<String>,
    /// Explicit sort key.
    pub order: Option<i64>,
}

/// Extracts [`PageMetadata`] from page file content.
///
/// Holds the compiled patterns so a single reader can be reused across a
/// whole scan.
pub struct MetadataReader {
    frontmatter: Regex,
    title_field: Regex,
    order_field: Regex,
    heading: Regex,
}

impl MetadataReader {
    /// Create a new metadata reader.
    ///
    /// # Panics
    ///
    /// Panics if the internal patterns fail to compile. This should never
    /// happen as the patterns are compile-time constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frontmatter: Regex::new(r"(?s)\A---[ \t]*\n(.*?)\n---").unwrap(),
            title_field: Regex::new(r#"title:\s*["'](.+)["']"#).unwrap(),
            order_field: Regex::new(r"order:\s*(\d+)").unwrap(),
            heading: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
        }
    }

    /// Read and parse metadata for a page file.
    ///
    /// Read failures are absorbed: the result is empty metadata, never an
    /// error.
    #[must_use]
    pub fn read(&self, store: &dyn ContentStore, path: &Path) -> PageMetadata {
        match store.read(path) {
            Ok(content) => self.parse(&content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Failed to read page metadata");
                PageMetadata::default()
            }
        }
    }

    /// Parse metadata out of page file content.
    #[must_use]
    pub fn parse(&self, content: &str) -> PageMetadata {
        let mut metadata = PageMetadata::default();

        if let Some(caps) = self.frontmatter.captures(content) {
            let block = &caps[1];
            metadata.title = self
                .title_field
                .captures(block)
                .map(|c| c[1].trim().to_owned());
            metadata.order = self
                .order_field
                .captures(block)
                .and_then(|c| c[1].parse().ok());
        }

        // No frontmatter title: fall back to the first H1 in the body
        if metadata.title.is_none() {
            metadata.title = self
                .heading
                .captures(content)
                .map(|c| c[1].trim().to_owned());
        }

        metadata
    }
}

impl Default for MetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use cn_storage::MockStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_frontmatter_title_and_order() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("---\ntitle: \"Getting Started\"\norder: 2\n---\n\nBody.");

        assert_eq!(metadata.title, Some("Getting Started".to_owned()));
        assert_eq!(metadata.order, Some(2));
    }

    #[test]
    fn test_parse_single_quoted_title() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("---\ntitle: 'Quiz App'\n---\n");

        assert_eq!(metadata.title, Some("Quiz App".to_owned()));
    }

    #[test]
    fn test_parse_order_without_title_uses_h1() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("---\norder: 3\n---\n\n# My Page\n\nContent.");

        assert_eq!(metadata.title, Some("My Page".to_owned()));
        assert_eq!(metadata.order, Some(3));
    }

    #[test]
    fn test_parse_h1_fallback_without_frontmatter() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("# Browser APIs\n\nContent.");

        assert_eq!(metadata.title, Some("Browser APIs".to_owned()));
        assert_eq!(metadata.order, None);
    }

    #[test]
    fn test_parse_no_title_anywhere() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("Plain body with no heading.");

        assert_eq!(metadata, PageMetadata::default());
    }

    #[test]
    fn test_parse_frontmatter_not_at_start_ignored() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("# Heading\n\n---\ntitle: \"Nope\"\n---\n");

        assert_eq!(metadata.title, Some("Heading".to_owned()));
        assert_eq!(metadata.order, None);
    }

    #[test]
    fn test_parse_unquoted_title_falls_through_to_h1() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("---\ntitle: Unquoted\n---\n\n# Body Title\n");

        assert_eq!(metadata.title, Some("Body Title".to_owned()));
    }

    #[test]
    fn test_parse_malformed_order_absorbed() {
        let reader = MetadataReader::new();

        let metadata = reader.parse("---\ntitle: \"Kept\"\norder: soon\n---\n");

        assert_eq!(metadata.title, Some("Kept".to_owned()));
        assert_eq!(metadata.order, None);
    }

    #[test]
    fn test_read_missing_file_returns_empty() {
        let reader = MetadataReader::new();
        let store = MockStore::new();

        let metadata = reader.read(&store, Path::new("missing/index.md"));

        assert_eq!(metadata, PageMetadata::default());
    }

    #[test]
    fn test_read_parses_stored_content() {
        let reader = MetadataReader::new();
        let store = MockStore::new().with_file("guide/index.md", "---\norder: 7\n---\n# Guide\n");

        let metadata = reader.read(&store, Path::new("guide/index.md"));

        assert_eq!(metadata.title, Some("Guide".to_owned()));
        assert_eq!(metadata.order, Some(7));
    }
}
