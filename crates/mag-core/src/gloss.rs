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

//! Splitting English glosses into per-case, per-voice or per-number
//! sub-entries.
//!
//! A gloss is a list of clauses separated by semicolons. Some clauses open
//! with a marker, e.g. `(+ gen.) from`, `(mid.) ransom` or `(pl.) walls`.
//! Segmentation starts a new [`Segment`] at each marker and appends the
//! unmarked clauses that follow it to that segment.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::LazyLock;

use regex::Regex;

static CLAUSE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\pZ*;\pZ*").expect("Invalid clause separator regex"));

static CASE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\+\pZ*(acc|gen|dat)\.?\)").expect("Invalid case marker regex")
});

static VOICE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([^(]*(mid|pass)\.[^)]*\)").expect("Invalid voice marker regex")
});

static PLURAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(pl\.\)").expect("Invalid plural marker regex"));

static PARENTHESISED_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\pZ*;\pZ*\(").expect("Invalid parenthesised clause regex")
});

/// The case governed by a preposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Accusative,
    Genitive,
    Dative,
}

impl Case {
    fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "acc" => Some(Case::Accusative),
            "gen" => Some(Case::Genitive),
            "dat" => Some(Case::Dative),
            _ => None,
        }
    }

    /// The short form used in markers and card ids.
    pub fn abbrev(self) -> &'static str {
        match self {
            Case::Accusative => "acc",
            Case::Genitive => "gen",
            Case::Dative => "dat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Voice {
    Middle,
    Passive,
}

impl Voice {
    fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "mid" => Some(Voice::Middle),
            "pass" => Some(Voice::Passive),
            _ => None,
        }
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Voice::Middle => "mid",
            Voice::Passive => "pass",
        }
    }
}

/// The marker that opened a segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Leading clauses before any marker. Only produced in voice and plural
    /// modes.
    None,
    /// A case marker, along with the marker text as written in the gloss
    /// (e.g. `(+ gen.)`).
    Case { case: Case, text: String },
    Voice(Voice),
    Plural,
}

/// One sub-entry of a gloss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub marker: Marker,
    pub text: String,
}

impl Segment {
    fn new(marker: Marker, text: impl Into<String>) -> Self {
        Segment {
            marker,
            text: text.into(),
        }
    }

    /// Case mode always separates clauses. Voice and plural modes let an
    /// empty segment take the clause as is.
    fn append(&mut self, clause: &str, mode: SegmentMode) {
        if self.text.is_empty() && mode != SegmentMode::Case {
            self.text = clause.to_string();
        } else {
            self.text.push_str("; ");
            self.text.push_str(clause);
        }
    }
}

/// Which kind of marker to segment on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentMode {
    /// Split on `(+ acc.)`, `(+ gen.)` and `(+ dat.)`. The first clause must
    /// carry a marker, and markers are stripped from the segment text.
    Case,
    /// Split on markers naming the middle or passive voice. Consecutive
    /// markers of the same voice share a segment.
    Voice,
    /// Split on `(pl.)`.
    Plural,
}

impl SegmentMode {
    /// Try to read a marker at the start of the clause.
    fn read_marker(self, clause: &str) -> Option<Marker> {
        match self {
            SegmentMode::Case => {
                let captures = CASE_MARKER.captures(clause)?;
                let case = Case::from_abbrev(&captures[1])?;
                Some(Marker::Case {
                    case,
                    text: captures[0].to_string(),
                })
            }
            SegmentMode::Voice => {
                let captures = VOICE_MARKER.captures(clause)?;
                Voice::from_abbrev(&captures[1]).map(Marker::Voice)
            }
            SegmentMode::Plural => PLURAL_MARKER.is_match(clause).then_some(Marker::Plural),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum GlossError {
    /// Case mode was requested but the first clause has no case marker.
    MissingCaseMarker { gloss: String },
}

impl Display for GlossError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GlossError::MissingCaseMarker { gloss } => {
                write!(f, "preposition entry without initial case marker: {gloss}")
            }
        }
    }
}

impl Error for GlossError {}

/// Split a gloss into its marked segments, in input order.
pub fn segment_gloss(gloss: &str, mode: SegmentMode) -> Result<Vec<Segment>, GlossError> {
    let mut segments = Vec::new();
    let mut open: Option<Segment> = None;
    let close = |segment: Segment, segments: &mut Vec<Segment>| {
        // Voice and plural modes drop segments that never received text.
        if mode == SegmentMode::Case || !segment.text.is_empty() {
            segments.push(segment);
        }
    };

    for clause in CLAUSE_SEPARATOR.split(gloss) {
        let Some(marker) = mode.read_marker(clause) else {
            match open.as_mut() {
                Some(segment) => segment.append(clause, mode),
                None if mode == SegmentMode::Case => {
                    return Err(GlossError::MissingCaseMarker {
                        gloss: gloss.to_string(),
                    });
                }
                None => open = Some(Segment::new(Marker::None, clause)),
            }
            continue;
        };

        if let Some(segment) = open.as_mut() {
            if matches!(marker, Marker::Voice(_)) && segment.marker == marker {
                segment.append(clause, mode);
                continue;
            }
        }

        let text = match &marker {
            Marker::Case { text, .. } => clause.replacen(text.as_str(), "", 1).trim().to_string(),
            _ => clause.to_string(),
        };
        if let Some(previous) = open.replace(Segment::new(marker, text)) {
            close(previous, &mut segments);
        }
    }
    if let Some(last) = open {
        close(last, &mut segments);
    }
    Ok(segments)
}

/// Put each parenthesised clause of a gloss on its own line, e.g.
/// `release; (mid.) ransom` becomes `release<br>(mid.) ransom`.
pub fn break_parenthesised_clauses(gloss: &str) -> String {
    PARENTHESISED_CLAUSE.replace_all(gloss, "<br>(").into_owned()
}
