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

use std::path::Path;

use serde_json::Value;
use serde_json::json;

use crate::types::note::Note;
use crate::types::timestamp::Timestamp;

pub const LEETCODE_DECK_ID: i64 = 8589798175;

/// Used when the output path has no usable file stem.
pub const DEFAULT_DECK_NAME: &str = "leetcode";

/// Derive the deck's display name from the path of the package it is
/// written to: `out/leetcode.apkg` gives `leetcode`.
pub fn deck_name_for(output_path: &Path) -> String {
    output_path
        .file_stem()
        .and_then(|os_str| os_str.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_DECK_NAME)
        .to_string()
}

/// A named collection of notes.
#[derive(Debug)]
pub struct Deck {
    id: i64,
    name: String,
    description: String,
    notes: Vec<Note>,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Deck {
            id,
            name: name.into(),
            description: String::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a note. Notes sharing a guid are not rejected here.
    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The JSON object Anki stores for this deck in `col.decks`.
    pub fn to_json(&self, timestamp: Timestamp) -> Value {
        json!({
            "collapsed": false,
            "conf": 1,
            "desc": self.description,
            "dyn": 0,
            "extendNew": 0,
            "extendRev": 50,
            "id": self.id,
            "lrnToday": [0, 0],
            "mod": timestamp.as_secs(),
            "name": self.name,
            "newToday": [0, 0],
            "revToday": [0, 0],
            "timeToday": [0, 0],
            "usn": -1,
        })
    }
}

impl Extend<Note> for Deck {
    fn extend<T: IntoIterator<Item = Note>>(&mut self, iter: T) {
        for note in iter {
            self.add_note(note);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::Fallible;
    use crate::types::model::Model;

    #[test]
    fn test_deck_name_for() {
        assert_eq!(deck_name_for(&PathBuf::from("leetcode.apkg")), "leetcode");
        assert_eq!(deck_name_for(&PathBuf::from("out/blind75.apkg")), "blind75");
        assert_eq!(deck_name_for(&PathBuf::from("noext")), "noext");
        assert_eq!(deck_name_for(&PathBuf::from("")), DEFAULT_DECK_NAME);
    }

    #[test]
    fn test_duplicates_are_kept() -> Fallible<()> {
        let model = Model::leetcode();
        let mut deck = Deck::new(LEETCODE_DECK_ID, "leetcode");
        assert!(deck.notes().is_empty());
        for _ in 0..2 {
            deck.add_note(Note::new(
                &model,
                vec!["leetcode.com/two-sum".to_string(), "Two Sum".to_string()],
            )?);
        }
        assert_eq!(deck.notes().len(), 2);
        Ok(())
    }

    #[test]
    fn test_to_json() -> Fallible<()> {
        let deck = Deck::new(LEETCODE_DECK_ID, "leetcode").with_description("Problems");
        let value = deck.to_json(Timestamp::from_millis(1_700_000_000_000)?);
        assert_eq!(value["id"], json!(LEETCODE_DECK_ID));
        assert_eq!(value["name"], json!("leetcode"));
        assert_eq!(value["desc"], json!("Problems"));
        assert_eq!(value["mod"], json!(1_700_000_000i64));
        Ok(())
    }
}
