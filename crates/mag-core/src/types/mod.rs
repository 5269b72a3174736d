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

pub mod principal_parts;
pub mod vocab;

use serde::Deserialize;
use serde::Deserializer;

/// Read a string field, treating YAML `null` as the empty string.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read an integer field, treating YAML `null` as 0.
pub(crate) fn nullable_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wrap a dataset value in double quotes for messages, escaping only `"` and
/// `\` so decomposed diacritics stay readable.
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Everything before the first comma of a headword, e.g. `λόγος` for
/// `λόγος, λόγου, ὁ`.
pub fn headword_stem(headword: &str) -> &str {
    match headword.split_once(',') {
        Some((stem, _)) => stem,
        None => headword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headword_stem() {
        assert_eq!(headword_stem("λόγος, λόγου, ὁ"), "λόγος");
        assert_eq!(headword_stem("καί"), "καί");
        assert_eq!(headword_stem(""), "");
    }

    #[test]
    fn test_quoted_keeps_combining_marks() {
        assert_eq!(quoted("λυ\u{301}ω x"), "\"λυ\u{301}ω x\"");
        assert_eq!(quoted("a \"b\" \\"), "\"a \\\"b\\\" \\\\\"");
    }
}
