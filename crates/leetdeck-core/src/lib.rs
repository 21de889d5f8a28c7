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

//! leetdeck-core: Core library for leetdeck.
//!
//! This library turns a list of LeetCode problems into Anki notes:
//! - Parsing the `<slug>, <title>` problem list
//! - The note model (fields and card template)
//! - Note guids compatible with genanki
//! - The deck that collects the notes

pub mod error;
pub mod generator;
pub mod parser;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use generator::generate_notes;
pub use parser::{ProblemEntry, ProblemIndex, parse_problem_file, parse_problem_list};
pub use types::deck::{DEFAULT_DECK_NAME, Deck, LEETCODE_DECK_ID, deck_name_for};
pub use types::guid::NoteGuid;
pub use types::model::{Field, LEETCODE_MODEL_ID, Model, Template};
pub use types::note::Note;
pub use types::timestamp::Timestamp;
