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

//! Anki package (`.apkg`) output.
//!
//! A package is a zip archive holding the collection database and a JSON
//! map of media files. We never ship media, so the map is always empty.

mod collection;
mod schema;

use std::fs::File;
use std::io::Write;
use std::io::copy;
use std::path::Path;

use leetdeck_core::Deck;
use leetdeck_core::Model;
use leetdeck_core::Timestamp;
use log::debug;
use tempfile::tempdir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::package::collection::write_collection;

/// Name of the collection database inside the archive.
pub const COLLECTION_FILE: &str = "collection.anki2";

/// Name of the media map inside the archive.
pub const MEDIA_FILE: &str = "media";

pub struct Package<'a> {
    deck: &'a Deck,
    model: &'a Model,
}

impl<'a> Package<'a> {
    pub fn new(deck: &'a Deck, model: &'a Model) -> Self {
        Self { deck, model }
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn write_to_file(&self, path: &Path, timestamp: Timestamp) -> Fallible<()> {
        let scratch = tempdir()?;
        let db_path = scratch.path().join(COLLECTION_FILE);
        write_collection(&db_path, self.deck, self.model, timestamp)?;
        debug!("Wrote collection to {}", db_path.display());
        write_archive(path, &db_path).map_err(|e| {
            ErrorReport::new(format!("failed to write '{}': {}", path.display(), e.message()))
        })
    }
}

fn write_archive(path: &Path, db_path: &Path) -> Fallible<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(File::create(path)?);

    zip.start_file(COLLECTION_FILE, options)?;
    let mut db = File::open(db_path)?;
    copy(&mut db, &mut zip)?;

    zip.start_file(MEDIA_FILE, options)?;
    zip.write_all(b"{}")?;

    zip.finish()?;
    Ok(())
}
