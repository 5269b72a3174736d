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

use crate::types::nullable_int;
use crate::types::nullable_string;

/// A vocabulary entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Word {
    /// Greek headword, e.g. `λόγος, λόγου, ὁ`.
    #[serde(deserialize_with = "nullable_string")]
    pub gr: String,
    /// Separate middle/passive headword.
    #[serde(deserialize_with = "nullable_string")]
    pub gr_mp: String,
    /// Separate plural headword.
    #[serde(deserialize_with = "nullable_string")]
    pub gr_pl: String,
    /// Extra Greek text shown after the headword.
    #[serde(deserialize_with = "nullable_string")]
    pub gr_ext: String,
    /// Explicit card id. Defaults to the headword stem.
    #[serde(deserialize_with = "nullable_string")]
    pub id: String,
    /// English gloss.
    #[serde(deserialize_with = "nullable_string")]
    pub en: String,
    /// Extra English text, e.g. usage notes.
    #[serde(deserialize_with = "nullable_string")]
    pub en_ext: String,
    /// English cognates.
    #[serde(deserialize_with = "nullable_string")]
    pub cog: String,
    /// Part of speech abbreviation.
    #[serde(deserialize_with = "nullable_string")]
    pub pos: String,
}

/// The vocabulary introduced in one unit.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitVocab {
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_int")]
    pub unit: i64,
    pub vocab: Vec<Word>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOfSpeech {
    Adjective,
    Adverb,
    Conjunction,
    Noun,
    Particle,
    Preposition,
    Pronoun,
    Verb,
}

impl PartOfSpeech {
    /// Parse the abbreviation used in the dataset's `pos` field.
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "adj" => Some(PartOfSpeech::Adjective),
            "adv" => Some(PartOfSpeech::Adverb),
            "conj" => Some(PartOfSpeech::Conjunction),
            "n" => Some(PartOfSpeech::Noun),
            "part" => Some(PartOfSpeech::Particle),
            "prep" => Some(PartOfSpeech::Preposition),
            "pron" => Some(PartOfSpeech::Pronoun),
            "v" => Some(PartOfSpeech::Verb),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
        }
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
