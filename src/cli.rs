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

use clap::Parser;
use leetdeck_core::Timestamp;
use log::warn;

use crate::cmd::generate::generate_deck;
use crate::config::Config;
use crate::error::Fallible;

pub const OUTPUT_FILE: &str = "leetcode.apkg";

const DEFAULT_PAGE_SIZE: u64 = 500;

/// Generate Anki cards for leetcode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start generation from this problem.
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// Stop generation on this problem.
    #[arg(long, default_value_t = u64::MAX)]
    stop: u64,
    /// Get at most this many problems (decrease if leetcode API times out).
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u64,
    /// Get all questions from a specific leetcode list id.
    #[arg(long, default_value = "")]
    list_id: String,
    /// Output filename.
    #[arg(long, default_value = OUTPUT_FILE)]
    output_file: String,
    /// Optional TOML file overriding the deck and model settings.
    #[arg(long)]
    config: Option<String>,
}

impl Args {
    /// Names of the problem-selection flags that were set. They are accepted
    /// for compatibility but the problem list always comes from the input
    /// file.
    fn ignored_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.start != 0 {
            flags.push("--start");
        }
        if self.stop != u64::MAX {
            flags.push("--stop");
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            flags.push("--page-size");
        }
        if !self.list_id.is_empty() {
            flags.push("--list-id");
        }
        flags
    }
}

pub fn entrypoint() -> Fallible<()> {
    let args = Args::parse();
    for flag in args.ignored_flags() {
        warn!("{flag} has no effect: problems are read from the input file");
    }
    let config = Config::load(args.config.as_deref().map(Path::new))?;
    generate_deck(&config, Path::new(&args.output_file), Timestamp::now())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["leetdeck"]).unwrap();
        assert_eq!(args.start, 0);
        assert_eq!(args.stop, u64::MAX);
        assert_eq!(args.page_size, 500);
        assert_eq!(args.list_id, "");
        assert_eq!(args.output_file, "leetcode.apkg");
        assert!(args.config.is_none());
        assert!(args.ignored_flags().is_empty());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "leetdeck",
            "--start",
            "10",
            "--stop",
            "20",
            "--page-size",
            "50",
            "--list-id",
            "abc",
            "--output-file",
            "out.apkg",
            "--config",
            "leetdeck.toml",
        ])
        .unwrap();
        assert_eq!(args.output_file, "out.apkg");
        assert_eq!(args.config.as_deref(), Some("leetdeck.toml"));
        assert_eq!(
            args.ignored_flags(),
            vec!["--start", "--stop", "--page-size", "--list-id"]
        );
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(Args::try_parse_from(["leetdeck", "--start", "abc"]).is_err());
    }
}
