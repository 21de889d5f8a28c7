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

use log::debug;
use log::info;

use crate::error::Fallible;
use crate::parser::ProblemIndex;
use crate::types::model::Model;
use crate::types::note::Note;

/// Build one note per problem, in index order.
pub fn generate_notes(model: &Model, index: &ProblemIndex) -> Fallible<Vec<Note>> {
    info!("Generating flashcards");
    let mut notes = Vec::with_capacity(index.len());
    for entry in index.iter() {
        let note = Note::new(model, vec![entry.slug.clone(), entry.title.clone()])?;
        debug!("{} -> {}", entry.slug, note.guid());
        notes.push(note);
    }
    info!("Generated {} flashcards", notes.len());
    Ok(notes)
}
