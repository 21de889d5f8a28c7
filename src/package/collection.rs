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
use log::debug;
use rusqlite::Connection;
use rusqlite::Transaction;
use rusqlite::params;
use serde_json::Map;
use serde_json::Value;

use crate::error::Fallible;
use crate::error::fail;
use crate::package::schema::COLLECTION_CREATED;
use crate::package::schema::COLLECTION_MODIFIED;
use crate::package::schema::SCHEMA;
use crate::package::schema::SCHEMA_MODIFIED;
use crate::package::schema::SCHEMA_VERSION;
use crate::package::schema::default_conf;
use crate::package::schema::default_dconf;
use crate::package::schema::default_decks;

/// Hands out note and card ids. Anki ids are millisecond timestamps, so the
/// counter starts at the write time and counts up.
struct IdGenerator {
    next: i64,
}

impl IdGenerator {
    fn starting_at(timestamp: Timestamp) -> Self {
        Self {
            next: timestamp.as_millis(),
        }
    }

    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Write a new collection database at `path` containing `deck`.
pub fn write_collection(
    path: &Path,
    deck: &Deck,
    model: &Model,
    timestamp: Timestamp,
) -> Fallible<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    insert_col(&conn, deck, model, timestamp)?;

    let tx = conn.transaction()?;
    insert_notes(&tx, deck, model, timestamp)?;
    tx.commit()?;

    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

fn insert_col(
    conn: &Connection,
    deck: &Deck,
    model: &Model,
    timestamp: Timestamp,
) -> Fallible<()> {
    let mut models = Map::new();
    models.insert(model.id.to_string(), model.to_json(timestamp, deck.id())?);

    let mut decks = default_decks();
    if let Value::Object(map) = &mut decks {
        map.insert(deck.id().to_string(), deck.to_json(timestamp));
    }

    let sql = "
        insert into col (id, crt, mod, scm, ver, dty, usn, ls, conf, models, decks, dconf, tags)
        values (null, ?, ?, ?, ?, 0, 0, 0, ?, ?, ?, ?, '{}');";
    conn.execute(
        sql,
        params![
            COLLECTION_CREATED,
            COLLECTION_MODIFIED,
            SCHEMA_MODIFIED,
            SCHEMA_VERSION,
            default_conf().to_string(),
            Value::Object(models).to_string(),
            decks.to_string(),
            default_dconf().to_string(),
        ],
    )?;
    Ok(())
}

fn insert_notes(
    tx: &Transaction,
    deck: &Deck,
    model: &Model,
    timestamp: Timestamp,
) -> Fallible<()> {
    let mut ids = IdGenerator::starting_at(timestamp);
    let modified = timestamp.as_secs();
    let mut insert_note = tx.prepare(
        "
        insert into notes (id, guid, mid, mod, usn, tags, flds, sfld, csum, flags, data)
        values (?, ?, ?, ?, -1, '', ?, ?, 0, 0, '');",
    )?;
    // New cards: every scheduling column is zero.
    let mut insert_card = tx.prepare(
        "
        insert into cards (id, nid, did, ord, mod, usn, type, queue, due, ivl, factor, reps,
                           lapses, left, odue, odid, flags, data)
        values (?, ?, ?, ?, ?, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, '');",
    )?;
    for note in deck.notes() {
        if note.model_id() != model.id {
            return fail(format!(
                "note {} uses model {}, but the package only contains model {}.",
                note.guid(),
                note.model_id(),
                model.id
            ));
        }
        let note_id = ids.next_id();
        insert_note.execute(params![
            note_id,
            note.guid().as_str(),
            model.id,
            modified,
            note.joined_fields(),
            note.sort_field(),
        ])?;
        for ord in model.card_ordinals(note.fields())? {
            insert_card.execute(params![
                ids.next_id(),
                note_id,
                deck.id(),
                ord as i64,
                modified
            ])?;
        }
    }
    debug!("Inserted {} notes", deck.notes().len());
    Ok(())
}
