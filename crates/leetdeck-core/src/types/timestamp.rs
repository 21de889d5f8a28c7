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

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;

use crate::error::ErrorReport;

/// A UTC timestamp with millisecond precision.
///
/// Anki stores modification times as Unix seconds and derives row ids from
/// Unix milliseconds, so both views are exposed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }

    /// The current time.
    #[cfg(feature = "clock")]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn from_millis(millis: i64) -> Result<Self, ErrorReport> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ErrorReport::new(format!("timestamp out of range: {millis}")))
    }

    /// Seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.timestamp()
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        let ts = Timestamp::from_millis(1_425_279_151_694).unwrap();
        assert_eq!(ts.as_millis(), 1_425_279_151_694);
        assert_eq!(ts.as_secs(), 1_425_279_151);
    }

    #[test]
    fn test_display() {
        let ts = Timestamp::from_millis(1_425_279_151_694).unwrap();
        assert_eq!(ts.to_string(), "2015-03-02T06:52:31.694Z");
    }

    #[test]
    fn test_new_truncates_to_millis() {
        let dt = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let ts = Timestamp::new(dt);
        assert_eq!(ts.as_millis(), 1_700_000_000_123);
    }
}
