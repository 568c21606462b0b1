//! Corpus loader for per-category article directories.
//!
//! Each article becomes one document whose text is a headline-plus-lead
//! excerpt: the first two non-empty lines joined by a space.
//!
//! ```text
//! bbc/
//! ├── business/001.txt
//! ├── sport/001.txt
//! └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::document::category::Category;
use crate::document::document::Document;
use crate::error::{ClassifierError, Result};

/// Reads labeled documents from `<base>/<category>/*`.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    base: PathBuf,
}

impl CorpusLoader {
    /// Create a loader rooted at the corpus directory.
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        CorpusLoader { base: base.into() }
    }

    /// Corpus root directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Load every document of one category, in file name order.
    pub fn load_category(&self, category: Category) -> Result<Vec<Document>> {
        let dir = self.base.join(category.as_str());
        let entries = fs::read_dir(&dir)
            .map_err(|e| ClassifierError::corpus(&dir, format!("cannot read directory: {e}")))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| ClassifierError::corpus(&dir, format!("cannot list: {e}")))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            documents.push(load_file(&path, category)?);
        }

        debug!(
            "Loaded {} documents for category '{}' from {}",
            documents.len(),
            category,
            dir.display()
        );
        Ok(documents)
    }

    /// Load all categories, concatenated in the given order.
    pub fn load(&self, categories: &[Category]) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for &category in categories {
            documents.extend(self.load_category(category)?);
        }
        info!(
            "Loaded {} documents across {} categories from {}",
            documents.len(),
            categories.len(),
            self.base.display()
        );
        Ok(documents)
    }
}

fn load_file(path: &Path, category: Category) -> Result<Document> {
    let bytes =
        fs::read(path).map_err(|e| ClassifierError::corpus(path, format!("cannot read: {e}")))?;
    let content = String::from_utf8_lossy(&bytes);

    let text = extract_excerpt(&content)
        .ok_or_else(|| ClassifierError::corpus(path, "fewer than two non-empty lines"))?;

    Ok(Document::labeled(text, category))
}

/// Build the excerpt for one article, or `None` if it has fewer than two
/// non-empty lines.
///
/// Lines are split on `\n` only and only zero-length lines are dropped, so a
/// line holding a lone `\r` still counts. Line breaks left in the excerpt are
/// turned into spaces and the literal three-space sequence is replaced by a
/// single space; other whitespace runs are left alone.
pub fn extract_excerpt(content: &str) -> Option<String> {
    let mut lines = content.split('\n').filter(|line| !line.is_empty());
    let first = lines.next()?;
    let second = lines.next()?;

    let text = format!("{first} {second}")
        .replace("\r\n", " ")
        .replace('\n', " ")
        .replace('\r', " ")
        .replace("   ", " ");

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_takes_first_two_lines() {
        let content = "Ad sales boost Time Warner profit\n\nQuarterly profits at US media giant rose.\n\nMore text here.\n";
        assert_eq!(
            extract_excerpt(content).unwrap(),
            "Ad sales boost Time Warner profit Quarterly profits at US media giant rose."
        );
    }

    #[test]
    fn test_excerpt_requires_two_lines() {
        assert!(extract_excerpt("").is_none());
        assert!(extract_excerpt("\n\n\n").is_none());
        assert!(extract_excerpt("only headline\n\n").is_none());
    }

    #[test]
    fn test_excerpt_carriage_returns() {
        // "\r" lines survive the empty-line filter and become spaces
        let content = "Headline\r\n\r\nLead sentence\r\n";
        assert_eq!(extract_excerpt(content).unwrap(), "Headline ");

        let content = "Headline\nLead sentence\r\n";
        assert_eq!(extract_excerpt(content).unwrap(), "Headline Lead sentence ");
    }

    #[test]
    fn test_excerpt_three_space_rule_is_literal() {
        let content = "A   B\nC    D\n";
        // three spaces collapse once; four spaces leave two
        assert_eq!(extract_excerpt(content).unwrap(), "A B C  D");
    }

    #[test]
    fn test_load_category() {
        let dir = tempfile::tempdir().unwrap();
        let sport = dir.path().join("sport");
        fs::create_dir(&sport).unwrap();
        fs::write(sport.join("002.txt"), "Second\n\nbody two\n").unwrap();
        fs::write(sport.join("001.txt"), "First\n\nbody one\n").unwrap();

        let loader = CorpusLoader::new(dir.path());
        let docs = loader.load_category(Category::Sport).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text, "First body one");
        assert_eq!(docs[1].text, "Second body two");
        assert!(docs.iter().all(|d| d.label == Some(Category::Sport)));
    }

    #[test]
    fn test_missing_category_directory_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CorpusLoader::new(dir.path());

        let err = loader.load(&[Category::Tech]).unwrap_err();
        match err {
            ClassifierError::Corpus { path, .. } => assert!(path.ends_with("tech")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let tech = dir.path().join("tech");
        fs::create_dir(&tech).unwrap();
        fs::write(tech.join("bad.txt"), "just a headline\n").unwrap();

        let err = CorpusLoader::new(dir.path())
            .load_category(Category::Tech)
            .unwrap_err();
        assert!(err.to_string().contains("bad.txt"));
    }
}
