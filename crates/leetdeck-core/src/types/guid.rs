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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

/// The alphabet Anki uses to render note guids.
const BASE91_TABLE: &[u8; 91] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

/// The globally unique identifier of an Anki note.
///
/// Anki uses the guid to recognize a note it has already imported, so the
/// guid must only depend on the values it is derived from. Guids produced
/// here are identical to those of genanki's `guid_for`, which means decks
/// built by either tool update each other's notes on import.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteGuid(String);

impl NoteGuid {
    /// Derive a guid from a single value.
    pub fn for_value(value: &str) -> Self {
        Self::for_values(&[value])
    }

    /// Derive a guid from several values, joined with `__`.
    pub fn for_values(values: &[&str]) -> Self {
        let joined = values.join("__");
        let digest = Sha256::digest(joined.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(base91(u64::from_be_bytes(prefix)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn base91(mut n: u64) -> String {
    let base = BASE91_TABLE.len() as u64;
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE91_TABLE[(n % base) as usize]);
        n /= base;
    }
    digits.reverse();
    // The table is pure ASCII.
    digits.into_iter().map(char::from).collect()
}

impl Display for NoteGuid {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
