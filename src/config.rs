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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use leetdeck_core::LEETCODE_DECK_ID;
use leetdeck_core::LEETCODE_MODEL_ID;
use log::debug;
use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// The problem list, relative to the working directory. Not configurable.
pub const INPUT_FILE: &str = "files.txt";

/// Keys that can be set in the optional TOML config file. Anything left out
/// keeps its built-in value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    deck_id: Option<i64>,
    model_id: Option<i64>,
    description: Option<String>,
    css: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub input_file: PathBuf,
    pub deck_id: i64,
    pub model_id: i64,
    /// Shown in Anki's deck overview.
    pub description: String,
    /// Card styling.
    pub css: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: PathBuf::from(INPUT_FILE),
            deck_id: LEETCODE_DECK_ID,
            model_id: LEETCODE_MODEL_ID,
            description: String::new(),
            css: String::new(),
        }
    }
}

impl Config {
    /// Build the config, applying the overrides in `path` if given.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            None => Ok(Config::default()),
            Some(path) => {
                debug!("Loading config from {}", path.display());
                let text = read_to_string(path).map_err(|e| {
                    ErrorReport::new(format!("failed to read config '{}': {e}", path.display()))
                })?;
                Config::from_toml(&text)
            }
        }
    }

    fn from_toml(text: &str) -> Fallible<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = Config::default();
        Ok(Config {
            input_file: defaults.input_file,
            deck_id: file.deck_id.unwrap_or(defaults.deck_id),
            model_id: file.model_id.unwrap_or(defaults.model_id),
            description: file.description.unwrap_or(defaults.description),
            css: file.css.unwrap_or(defaults.css),
        })
    }
}
