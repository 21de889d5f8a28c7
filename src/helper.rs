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

//! Test helpers.

use std::fs::File;
use std::io::copy;
use std::path::Path;

use rusqlite::Connection;
use tempfile::TempDir;
use tempfile::tempdir;
use zip::ZipArchive;

use crate::error::Fallible;
use crate::package::COLLECTION_FILE;

pub fn create_tmp_directory() -> Fallible<TempDir> {
    Ok(tempdir()?)
}

/// Extract the collection database from a package and open it. The
/// directory must outlive the connection.
pub fn open_package(path: &Path) -> Fallible<(TempDir, Connection)> {
    let dir = create_tmp_directory()?;
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut entry = archive.by_name(COLLECTION_FILE)?;
    let db_path = dir.path().join(COLLECTION_FILE);
    let mut out = File::create(&db_path)?;
    copy(&mut entry, &mut out)?;
    drop(out);
    let conn = Connection::open(&db_path)?;
    Ok((dir, conn))
}

/// Count the rows of a table.
pub fn count_rows(conn: &Connection, table: &str) -> Fallible<i64> {
    let sql = format!("select count(*) from {table}");
    Ok(conn.query_row(&sql, [], |row| row.get(0))?)
}
