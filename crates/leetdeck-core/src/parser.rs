// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use log::debug;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// Separates the problem URL from its title on each line.
pub const DELIMITER: &str = ", ";

/// One line of the problem list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemEntry {
    pub slug: String,
    pub title: String,
}

/// Problems keyed by slug, in the order they first appear in the file.
#[derive(Debug, Default)]
pub struct ProblemIndex {
    entries: Vec<ProblemEntry>,
    positions: HashMap<String, usize>,
}

impl ProblemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a problem. If the slug is already present, its title is
    /// replaced and the entry keeps its original position.
    pub fn insert(&mut self, slug: String, title: String) {
        match self.positions.get(&slug) {
            Some(&idx) => {
                debug!("Replacing title of {slug}");
                self.entries[idx].title = title;
            }
            None => {
                self.positions.insert(slug.clone(), self.entries.len());
                self.entries.push(ProblemEntry { slug, title });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProblemEntry> {
        self.entries.iter()
    }
}

/// Read the problem list at `path`.
pub fn parse_problem_file(path: &Path) -> Fallible<ProblemIndex> {
    let text = read_to_string(path).map_err(|e| {
        ErrorReport::new(format!("failed to read '{}': {e}", path.display()))
    })?;
    Ok(parse_problem_list(&text))
}

/// Parse the text of a problem list. Each line looks like
/// `<slug>, <title>`; lines without the delimiter are skipped.
///
/// The delimiter is searched for before any trimming, so every line that
/// contains it yields an entry, even when the title is empty.
pub fn parse_problem_list(text: &str) -> ProblemIndex {
    let mut index = ProblemIndex::new();
    for line in text.lines() {
        if let Some((slug, title)) = line.split_once(DELIMITER) {
            index.insert(slug.trim().to_string(), title.trim().to_string());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    fn entries(index: &ProblemIndex) -> Vec<(&str, &str)> {
        index
            .iter()
            .map(|e| (e.slug.as_str(), e.title.as_str()))
            .collect()
    }

    fn delimited_lines(text: &str) -> usize {
        text.lines().filter(|line| line.contains(DELIMITER)).count()
    }

    #[test]
    fn test_empty_string() {
        let index = parse_problem_list("");
        assert!(index.is_empty());
    }

    #[test]
    fn test_basic() {
        let index = parse_problem_list(
            "leetcode.com/two-sum, Two Sum\nleetcode.com/add-two-numbers, Add Two Numbers\n",
        );
        assert_eq!(
            entries(&index),
            vec![
                ("leetcode.com/two-sum", "Two Sum"),
                ("leetcode.com/add-two-numbers", "Add Two Numbers"),
            ]
        );
    }

    #[test]
    fn test_lines_without_delimiter_are_skipped() {
        let index = parse_problem_list("header\n\nleetcode.com/two-sum, Two Sum\nno,space\n");
        assert_eq!(entries(&index), vec![("leetcode.com/two-sum", "Two Sum")]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let index = parse_problem_list(
            "leetcode.com/two-sum, Two Sum\nleetcode.com/two-sum, Two Sum (updated)\n",
        );
        assert_eq!(
            entries(&index),
            vec![("leetcode.com/two-sum", "Two Sum (updated)")]
        );
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let index = parse_problem_list("a, 1\nb, 2\na, 3\n");
        assert_eq!(entries(&index), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_split_on_first_delimiter() {
        let index = parse_problem_list("leetcode.com/x, Foo, Bar\n");
        assert_eq!(entries(&index), vec![("leetcode.com/x", "Foo, Bar")]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let index = parse_problem_list("  leetcode.com/two-sum ,  Two Sum  \r\n");
        assert_eq!(entries(&index), vec![("leetcode.com/two-sum", "Two Sum")]);
    }

    #[test]
    fn test_trailing_delimiter_only() {
        let index = parse_problem_list("leetcode.com/two-sum, \n");
        assert_eq!(entries(&index), vec![("leetcode.com/two-sum", "")]);
    }

    #[test]
    fn test_every_delimited_line_counts() {
        let text = "leetcode.com/two-sum, \nleetcode.com/3sum, 3Sum\nskip me\n, Untitled\n";
        let index = parse_problem_list(text);
        assert_eq!(index.len(), delimited_lines(text));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_parse_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("files.txt");
        write(&path, "leetcode.com/two-sum, Two Sum\n")?;
        let index = parse_problem_file(&path)?;
        assert_eq!(entries(&index), vec![("leetcode.com/two-sum", "Two Sum")]);
        Ok(())
    }

    #[test]
    fn test_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        let result = parse_problem_file(&dir.path().join("missing.txt"));
        assert!(result.is_err());
        Ok(())
    }
}
