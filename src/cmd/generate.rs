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

use leetdeck_core::Deck;
use leetdeck_core::Model;
use leetdeck_core::Timestamp;
use leetdeck_core::deck_name_for;
use leetdeck_core::generate_notes;
use leetdeck_core::parse_problem_file;
use log::info;

use crate::config::Config;
use crate::error::Fallible;
use crate::package::Package;

/// Read the problem list and write a deck with one note per problem to
/// `output_file`. Returns the number of notes written.
///
/// The input is fully read before the output is touched, so a missing input
/// file leaves no output behind.
pub fn generate_deck(config: &Config, output_file: &Path, timestamp: Timestamp) -> Fallible<usize> {
    let index = parse_problem_file(&config.input_file)?;
    info!(
        "Read {} problems from {}",
        index.len(),
        config.input_file.display()
    );

    let model = Model::leetcode()
        .with_id(config.model_id)
        .with_css(config.css.as_str());
    let notes = generate_notes(&model, &index)?;

    let mut deck = Deck::new(config.deck_id, deck_name_for(output_file))
        .with_description(config.description.as_str());
    deck.extend(notes);

    Package::new(&deck, &model).write_to_file(output_file, timestamp)?;
    info!(
        "Wrote deck '{}' with {} notes to {} at {timestamp}",
        deck.name(),
        deck.notes().len(),
        output_file.display()
    );
    Ok(deck.notes().len())
}
