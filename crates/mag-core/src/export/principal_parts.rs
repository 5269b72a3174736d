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

//! Principal parts deck.
//!
//! Each of principal parts 2-6 becomes a card keyed on the present. A part
//! listing two alternates (`A or B`, `A and B`) becomes two numbered cards.

use std::collections::HashSet;
use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::anki::AnkiWriter;
use crate::anki::DeckHeader;
use crate::anki::Row;
use crate::anki::deck_path;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::principal_parts::PrincipalPart;
use crate::types::principal_parts::UnitPP;

pub const DECK_NAME: &str = "Mastronarde AtticGreek Principal Parts";

const INCREMENTAL_LABEL: &str = "Incr";

static ALTERNATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\()?(\p{Greek}+)\pZ+(or|and)\pZ+(\p{Greek}+)(\))?")
        .expect("Invalid alternates regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\pZ+").expect("Invalid whitespace regex"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Greek on the front.
    #[default]
    GreekToEnglish,
    /// Description on the front, Greek on the back.
    EnglishToGreek,
}

impl Direction {
    fn abbrev(self) -> &'static str {
        match self {
            Direction::GreekToEnglish => "GrEn",
            Direction::EnglishToGreek => "EnGr",
        }
    }

    fn notetype(self) -> String {
        format!("MAG PP {}", self.abbrev())
    }
}

#[derive(Clone, Debug, Default)]
pub struct PpExportOptions {
    /// Only export this unit.
    pub unit: Option<i64>,
    /// Only export this principal part.
    pub part: Option<PrincipalPart>,
    pub direction: Direction,
    /// Split into the incremental subdecks: parts 1-3, 6, then 4-5.
    pub incremental: bool,
}

/// The top-level deck name for the given options.
pub fn deck_name(options: &PpExportOptions) -> String {
    let direction = options.direction.abbrev();
    if options.incremental {
        format!("{DECK_NAME} ({INCREMENTAL_LABEL},{direction})")
    } else {
        format!("{DECK_NAME} ({direction})")
    }
}

/// The incremental subdeck a part is learned in.
fn incremental_subdeck(part: PrincipalPart) -> &'static str {
    match part {
        PrincipalPart::Present | PrincipalPart::Future | PrincipalPart::Aorist => "PPA",
        PrincipalPart::AoristPassive => "PPB",
        PrincipalPart::Perfect | PrincipalPart::PerfectMiddle => "PPC",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conjunction {
    /// Both forms share a meaning.
    Or,
    /// The forms differ in meaning.
    And,
}

impl Conjunction {
    fn meaning(self) -> &'static str {
        match self {
            Conjunction::Or => " (same meaning)",
            Conjunction::And => " (diff. meaning)",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Alternates {
    first: String,
    second: String,
    conjunction: Conjunction,
}

/// Find a pair of alternate forms in a principal part entry.
fn split_alternates(form: &str) -> Fallible<Option<Alternates>> {
    let Some(captures) = ALTERNATES.captures(form) else {
        return Ok(None);
    };
    let conjunction = match &captures[3] {
        "or" => Conjunction::Or,
        _ => Conjunction::And,
    };
    let (first, second) = (&captures[2], &captures[4]);
    let alternates = match (captures.get(1), captures.get(5)) {
        (Some(_), None) => {
            return fail(format!("missing closing parenthesis in alternate: {form}"));
        }
        (Some(_), Some(_)) => Alternates {
            first: format!("({first})"),
            second: format!("({second})"),
            conjunction,
        },
        (None, _) => Alternates {
            first: first.to_string(),
            second: second.to_string(),
            conjunction,
        },
    };
    Ok(Some(alternates))
}

struct Card<'a> {
    deck: &'a str,
    id: &'a str,
    part: PrincipalPart,
    form: &'a str,
    number: Option<u8>,
    conjunction: Option<Conjunction>,
}

impl Card<'_> {
    fn to_row(&self, direction: Direction) -> Row {
        let label = self.part.label();
        let tags = format!(
            "pp::{}",
            WHITESPACE.replace_all(&label.to_lowercase(), "_")
        );
        let number = self.number.map(|n| format!(" #{n}")).unwrap_or_default();
        let meaning = self.conjunction.map(Conjunction::meaning).unwrap_or("");
        let description = format!("{label}{number} of {}{meaning}", self.id);
        let (front, back) = match direction {
            Direction::GreekToEnglish => (self.form.to_string(), description),
            Direction::EnglishToGreek => (description, self.form.to_string()),
        };
        Row {
            id: self.form.to_string(),
            front,
            back,
            tags,
            deck: self.deck.to_string(),
        }
    }
}

fn part_rows(
    deck: &str,
    id: &str,
    part: PrincipalPart,
    form: &str,
    direction: Direction,
) -> Fallible<Vec<Row>> {
    let card = |form: &str, number: Option<u8>, conjunction: Option<Conjunction>| {
        Card {
            deck,
            id,
            part,
            form,
            number,
            conjunction,
        }
        .to_row(direction)
    };
    let rows = match split_alternates(form)? {
        None => vec![card(form, None, None)],
        Some(alt) => vec![
            card(alt.first.as_str(), Some(1), Some(alt.conjunction)),
            card(alt.second.as_str(), Some(2), Some(alt.conjunction)),
        ],
    };
    Ok(rows)
}

/// Write the principal parts deck to `out`, returning the writer.
pub fn export_principal_parts<W: Write>(
    out: W,
    units: &[UnitPP],
    options: &PpExportOptions,
) -> Fallible<W> {
    let name = deck_name(options);
    let header = DeckHeader {
        comment: format!("{name} Anki CSV export"),
        notetype: Some(options.direction.notetype()),
        html: false,
    };
    let mut writer = AnkiWriter::new(out, &header)?;
    let mut ids: HashSet<&str> = HashSet::new();

    for unit in units {
        if options.unit.is_some_and(|n| n != unit.unit) {
            continue;
        }
        log::debug!("Exporting unit {} ({} verbs)", unit.unit, unit.pp.len());

        for parts in &unit.pp {
            let id = parts.pr.as_str();
            if !ids.insert(id) {
                return fail(format!("duplicate ids found: {id}"));
            }
            for (part, form) in parts.present_parts() {
                if part == PrincipalPart::Present {
                    continue;
                }
                if options.part.is_some_and(|only| only != part) {
                    continue;
                }
                let deck = if options.incremental {
                    deck_path(&[name.as_str(), incremental_subdeck(part), unit.name.as_str()])
                } else {
                    deck_path(&[name.as_str(), unit.name.as_str()])
                };
                for row in part_rows(&deck, id, part, form, options.direction)? {
                    writer.write_row(&row)?;
                }
            }
        }
    }

    log::debug!("Exported {} cards", writer.rows());
    writer.finish()
}
