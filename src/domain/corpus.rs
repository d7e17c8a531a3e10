//! Corpus aggregate: corpus-wide invariants over loaded articles

use crate::domain::Article;
use crate::error::{Result, TipcheckError};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// An article together with the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub path: PathBuf,
    pub article: Article,
}

impl CorpusEntry {
    pub fn new(path: PathBuf, article: Article) -> Self {
        CorpusEntry { path, article }
    }
}

/// Every successfully parsed article of a content repository
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf, article: Article) {
        self.entries.push(CorpusEntry::new(path, article));
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `permalink` and `order` collisions, in load order.
    ///
    /// Orders collide by numeric value, so `"07"`, `"7"` and `"7.0"` are duplicates.
    pub fn duplicates(&self) -> Vec<TipcheckError> {
        let mut permalinks: HashMap<&str, &Path> = HashMap::new();
        let mut orders: HashMap<String, &Path> = HashMap::new();
        let mut errors = Vec::new();

        for entry in &self.entries {
            let article = &entry.article;

            if let Some(first) = permalinks.get(article.permalink.as_str()) {
                errors.push(duplicate("permalink", &article.permalink, first, &entry.path));
            } else {
                permalinks.insert(&article.permalink, &entry.path);
            }

            let order = article.order.normalized();
            if let Some(first) = orders.get(&order) {
                errors.push(duplicate("order", article.order.as_str(), first, &entry.path));
            } else {
                orders.insert(order, &entry.path);
            }
        }

        errors
    }

    /// Fail with the first duplicate key, if any
    pub fn validate(&self) -> Result<()> {
        match self.duplicates().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Articles sorted by order key; unpublished ones only when asked
    pub fn listing(&self, include_unpublished: bool) -> Vec<&CorpusEntry> {
        let mut listed: Vec<&CorpusEntry> = self
            .entries
            .iter()
            .filter(|e| include_unpublished || e.article.published)
            .collect();
        listed.sort_by(|a, b| a.article.order.cmp(&b.article.order));
        listed
    }

    /// Inclusive ranges of whole numbers missing between the lowest and
    /// highest whole-number order. Fractional orders are ignored.
    pub fn order_gaps(&self) -> Vec<(i64, i64)> {
        let values: BTreeSet<i64> = self
            .entries
            .iter()
            .filter_map(|e| e.article.order.integer())
            .collect();

        let mut gaps = Vec::new();
        let mut previous: Option<i64> = None;
        for value in values {
            if let Some(prev) = previous {
                if value > prev + 1 {
                    gaps.push((prev + 1, value - 1));
                }
            }
            previous = Some(value);
        }
        gaps
    }
}

fn duplicate(key: &str, value: &str, first: &Path, second: &Path) -> TipcheckError {
    TipcheckError::DuplicateKey {
        key: key.to_string(),
        value: value.to_string(),
        first: first.to_path_buf(),
        second: second.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(permalink: &str, order: &str, published: bool) -> Article {
        let text = format!(
            "---\ntitle: \"T\"\nlayout: tips\npublished: {}\npermalink: {}\ntype: markdown\norder: \"{}\"\n---\n",
            published, permalink, order
        );
        Article::parse(&text).unwrap()
    }

    fn corpus(items: &[(&str, &str, &str, bool)]) -> Corpus {
        let mut corpus = Corpus::new();
        for (path, permalink, order, published) in items {
            corpus.push(PathBuf::from(path), article(permalink, order, *published));
        }
        corpus
    }

    #[test]
    fn test_clean_corpus_validates() {
        let c = corpus(&[
            ("1.md", "tips/1", "1", true),
            ("2.md", "tips/2", "2", true),
        ]);
        assert!(c.validate().is_ok());
        assert!(c.duplicates().is_empty());
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_duplicate_permalink() {
        let c = corpus(&[
            ("a.md", "tips/1", "1", true),
            ("b.md", "tips/1", "2", true),
        ]);
        match c.validate() {
            Err(TipcheckError::DuplicateKey {
                key,
                value,
                first,
                second,
            }) => {
                assert_eq!(key, "permalink");
                assert_eq!(value, "tips/1");
                assert_eq!(first, PathBuf::from("a.md"));
                assert_eq!(second, PathBuf::from("b.md"));
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_order_compares_numerically() {
        let c = corpus(&[
            ("a.md", "tips/1", "07", true),
            ("b.md", "tips/2", "7", true),
        ]);
        let dups = c.duplicates();
        assert_eq!(dups.len(), 1);
        assert!(matches!(
            &dups[0],
            TipcheckError::DuplicateKey { key, value, .. } if key == "order" && value == "7"
        ));
    }

    #[test]
    fn test_duplicate_order_decimal_spellings() {
        let c = corpus(&[
            ("a.md", "tips/1", "7", true),
            ("b.md", "tips/2", "7.0", true),
            ("c.md", "tips/3", "7.5", true),
        ]);
        let dups = c.duplicates();
        assert_eq!(dups.len(), 1);
        assert!(matches!(
            &dups[0],
            TipcheckError::DuplicateKey { key, value, second, .. }
                if key == "order" && value == "7.0" && second == &PathBuf::from("b.md")
        ));
    }

    #[test]
    fn test_all_duplicates_reported() {
        let c = corpus(&[
            ("a.md", "tips/1", "1", true),
            ("b.md", "tips/1", "1", true),
            ("c.md", "tips/1", "3", true),
        ]);
        // b: permalink + order, c: permalink
        assert_eq!(c.duplicates().len(), 3);
    }

    #[test]
    fn test_listing_sorted_and_filtered() {
        let c = corpus(&[
            ("10.md", "tips/10", "10", true),
            ("9.md", "tips/9", "9", true),
            ("draft.md", "tips/draft", "11", false),
        ]);

        let public: Vec<&str> = c
            .listing(false)
            .iter()
            .map(|e| e.article.permalink.as_str())
            .collect();
        assert_eq!(public, vec!["tips/9", "tips/10"]);

        let all: Vec<&str> = c
            .listing(true)
            .iter()
            .map(|e| e.article.permalink.as_str())
            .collect();
        assert_eq!(all, vec!["tips/9", "tips/10", "tips/draft"]);
    }

    #[test]
    fn test_order_gaps() {
        let c = corpus(&[
            ("a.md", "a", "1", true),
            ("b.md", "b", "2", true),
            ("c.md", "c", "5", true),
            ("d.md", "d", "7", true),
        ]);
        assert_eq!(c.order_gaps(), vec![(3, 4), (6, 6)]);
        assert!(Corpus::new().order_gaps().is_empty());
    }

    #[test]
    fn test_order_gaps_skip_fractions_and_span_negatives() {
        let c = corpus(&[
            ("a.md", "a", "-2", true),
            ("b.md", "b", "1.5", true),
            ("c.md", "c", "2", true),
        ]);
        assert_eq!(c.order_gaps(), vec![(-1, 1)]);
    }

    #[test]
    fn test_listing_mixed_numbers() {
        let c = corpus(&[
            ("a.md", "a", "2", true),
            ("b.md", "b", "1.5", true),
            ("c.md", "c", "-3", true),
        ]);
        let order: Vec<&str> = c
            .listing(false)
            .iter()
            .map(|e| e.article.order.as_str())
            .collect();
        assert_eq!(order, vec!["-3", "1.5", "2"]);
    }
}
