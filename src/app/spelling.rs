//! Word-list spelling check.
//!
//! Words are whitespace-delimited tokens compared byte-for-byte against the
//! word list. There is no case folding, punctuation stripping or stemming,
//! so `"The"` and `"cat,"` are unknown even when `the` and `cat` are listed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Static set of correctly spelled words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Load a word list with one word per line.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AppError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&contents);
        log::info!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Build a word list from file contents; blank lines are skipped.
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Word list loaded from `path` on first use and kept afterwards.
///
/// A failed load leaves the cache empty, so the next check tries again.
#[derive(Debug)]
pub struct WordListCache {
    path: PathBuf,
    list: Option<WordList>,
    loads: usize,
}

impl WordListCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            list: None,
            loads: 0,
        }
    }

    pub fn get(&mut self) -> Result<&WordList> {
        let list = match self.list.take() {
            Some(list) => list,
            None => {
                let list = WordList::load(&self.path)?;
                self.loads += 1;
                list
            }
        };
        let list: &WordList = self.list.insert(list);
        Ok(list)
    }

    /// Number of successful loads from disk.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

/// Outcome of checking a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellingReport {
    /// Document text with unknown words wrapped in asterisks.
    pub marked: String,
    pub words_checked: usize,
    /// Unknown words in document order, duplicates kept.
    pub unknown: Vec<String>,
}

impl SpellingReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }

    pub fn summary(&self) -> String {
        match self.unknown.len() {
            0 => format!("Checked {} words. No unknown words found.", self.words_checked),
            1 => format!("Checked {} words. 1 word not in the word list.", self.words_checked),
            n => format!("Checked {} words. {} words not in the word list.", self.words_checked, n),
        }
    }
}

/// Check every word of `text` and build the marked-up replacement text.
///
/// Known words are emitted followed by a single space, unknown words as
/// `" *word* "`. Line breaks are not preserved.
pub fn check_text(text: &str, words: &WordList) -> SpellingReport {
    let mut report = SpellingReport::default();

    for word in text.split_whitespace() {
        report.words_checked += 1;
        if words.contains(word) {
            report.marked.push_str(word);
            report.marked.push(' ');
        } else {
            report.marked.push_str(" *");
            report.marked.push_str(word);
            report.marked.push_str("* ");
            report.unknown.push(word.to_string());
        }
    }

    report
}
