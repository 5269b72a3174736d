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

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::Fallible;

/// Named counters reported as a JSON object after a tool's main output.
///
/// A counter only appears once it has been touched.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Stats(BTreeMap<&'static str, usize>);

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr(&mut self, key: &'static str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &'static str, n: usize) {
        *self.0.entry(key).or_insert(0) += n;
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the stats as indented JSON followed by a newline.
    pub fn write_json(&self, out: &mut impl Write) -> Fallible<()> {
        let json = serde_json::to_string_pretty(self)?;
        writeln!(out, "{json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Stats::new();
        assert!(stats.is_empty());
        stats.incr("units");
        stats.incr("units");
        stats.add("errors", 0);
        assert_eq!(stats.get("units"), Some(2));
        assert_eq!(stats.get("errors"), Some(0));
        assert_eq!(stats.get("records"), None);
    }

    #[test]
    fn test_write_json() -> Fallible<()> {
        let mut stats = Stats::new();
        stats.incr("units");
        stats.add("records", 3);
        stats.add("errors", 0);
        let mut out = Vec::new();
        stats.write_json(&mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "{\n  \"errors\": 0,\n  \"records\": 3,\n  \"units\": 1\n}\n"
        );
        Ok(())
    }
}
