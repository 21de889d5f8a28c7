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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::guid::NoteGuid;
use crate::types::model::Model;

/// Separator between fields in the `flds` column.
pub const FIELD_SEPARATOR: &str = "\x1f";

/// A note: one set of field values, rendered into one card per template of
/// its model.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    model_id: i64,
    fields: Vec<String>,
    guid: NoteGuid,
}

impl Note {
    /// Create a note whose guid is derived from its first field.
    pub fn new(model: &Model, fields: Vec<String>) -> Fallible<Self> {
        if fields.len() != model.fields.len() {
            return fail(format!(
                "model '{}' has {} fields, but the note has {}.",
                model.name,
                model.fields.len(),
                fields.len()
            ));
        }
        let guid = match fields.first() {
            Some(first) => NoteGuid::for_value(first),
            None => return fail(format!("model '{}' has no fields.", model.name)),
        };
        Ok(Note {
            model_id: model.id,
            fields,
            guid,
        })
    }

    pub fn model_id(&self) -> i64 {
        self.model_id
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn guid(&self) -> &NoteGuid {
        &self.guid
    }

    /// The value Anki sorts the browser by.
    pub fn sort_field(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// Fields as stored in the `flds` column.
    pub fn joined_fields(&self) -> String {
        self.fields.join(FIELD_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sum() -> Fallible<Note> {
        Note::new(
            &Model::leetcode(),
            vec!["leetcode.com/two-sum".to_string(), "Two Sum".to_string()],
        )
    }

    #[test]
    fn test_guid_from_first_field() -> Fallible<()> {
        let note = two_sum()?;
        assert_eq!(note.guid(), &NoteGuid::for_value("leetcode.com/two-sum"));
        assert_eq!(note.model_id(), Model::leetcode().id);
        Ok(())
    }

    #[test]
    fn test_guid_ignores_title() -> Fallible<()> {
        let renamed = Note::new(
            &Model::leetcode(),
            vec![
                "leetcode.com/two-sum".to_string(),
                "Two Sum (updated)".to_string(),
            ],
        )?;
        assert_eq!(renamed.guid(), two_sum()?.guid());
        Ok(())
    }

    #[test]
    fn test_field_count_mismatch() {
        let result = Note::new(&Model::leetcode(), vec!["only one".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_storage_format() -> Fallible<()> {
        let note = two_sum()?;
        assert_eq!(note.joined_fields(), "leetcode.com/two-sum\x1fTwo Sum");
        assert_eq!(note.sort_field(), "leetcode.com/two-sum");
        Ok(())
    }
}
