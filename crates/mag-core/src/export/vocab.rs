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

//! Greek-to-English vocabulary deck.
//!
//! Most words become a single card. Prepositions are split into one card per
//! governed case, and words with a separate middle/passive or plural headword
//! are split into one card per headword.

use std::collections::HashSet;
use std::io::Write;

use crate::anki::AnkiWriter;
use crate::anki::DeckHeader;
use crate::anki::Row;
use crate::anki::deck_path;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::gloss::Marker;
use crate::gloss::SegmentMode;
use crate::gloss::break_parenthesised_clauses;
use crate::gloss::segment_gloss;
use crate::stats::Stats;
use crate::types::headword_stem;
use crate::types::quoted;
use crate::types::vocab::PartOfSpeech;
use crate::types::vocab::UnitVocab;
use crate::types::vocab::Word;

pub const DECK_NAME: &str = "Mastronarde Attic Greek Vocab (Greek-to-English)";

const COMMENT: &str =
    "This is an export of the MAG vocab dataset in Anki CSV format (Greek-to-English)";

#[derive(Clone, Debug, Default)]
pub struct VocabExportOptions {
    /// Only export this unit.
    pub unit: Option<i64>,
    /// Stop after this many words.
    pub count: Option<usize>,
}

/// Write the vocab deck to `out`, returning the writer once the deck and any
/// trailing stats have been written.
pub fn export_vocab<W: Write>(
    out: W,
    units: &[UnitVocab],
    options: &VocabExportOptions,
) -> Fallible<W> {
    let header = DeckHeader {
        comment: COMMENT.to_string(),
        notetype: None,
        html: true,
    };
    let mut writer = AnkiWriter::new(out, &header)?;
    let mut stats = Stats::new();
    let mut ids: HashSet<&str> = HashSet::new();
    let mut exported: usize = 0;

    'units: for unit in units {
        if options.unit.is_some_and(|n| n != unit.unit) {
            continue;
        }
        log::debug!("Exporting unit {} ({} words)", unit.unit, unit.vocab.len());
        let deck = deck_path(&[DECK_NAME, unit.name.as_str()]);

        for word in &unit.vocab {
            if options.count.is_some_and(|max| exported >= max) {
                break 'units;
            }
            let id = card_id(word);
            if !ids.insert(id) {
                return fail(format!("duplicate ids found: {id}"));
            }
            let pos = PartOfSpeech::from_abbrev(&word.pos).ok_or_else(|| {
                ErrorReport::new(format!(
                    "bad POS {} found on word {}/{}",
                    quoted(&word.pos),
                    quoted(&word.gr),
                    quoted(&word.en)
                ))
            })?;
            for row in word_rows(word, id, pos, &deck, &mut stats)? {
                writer.write_row(&row)?;
            }
            exported += 1;
        }
    }

    log::debug!("Exported {exported} words as {} cards", writer.rows());
    let mut out = writer.finish()?;
    if !stats.is_empty() {
        stats.write_json(&mut out)?;
    }
    Ok(out)
}

/// The explicit id if there is one, else the headword up to the first comma.
fn card_id(word: &Word) -> &str {
    if word.id.is_empty() {
        headword_stem(&word.gr)
    } else {
        &word.id
    }
}

fn with_ext(front: &str, ext: &str) -> String {
    if ext.is_empty() {
        front.to_string()
    } else {
        format!("{front} {ext}")
    }
}

fn word_rows(
    word: &Word,
    id: &str,
    pos: PartOfSpeech,
    deck: &str,
    stats: &mut Stats,
) -> Fallible<Vec<Row>> {
    let front = with_ext(&word.gr, &word.gr_ext);
    let tags = format!("pos::{pos}");

    let segments = if pos == PartOfSpeech::Preposition {
        if !word.en_ext.is_empty() {
            log::warn!(
                "en_ext is unsupported with prepositions - skipping for {}",
                quoted(&front)
            );
            stats.incr("warnings");
        }
        segment_gloss(&word.en, SegmentMode::Case)?
    } else if !word.gr_mp.is_empty() {
        segment_gloss(&word.en, SegmentMode::Voice)?
    } else if !word.gr_pl.is_empty() {
        segment_gloss(&word.en, SegmentMode::Plural)?
    } else {
        Vec::new()
    };

    if segments.len() <= 1 {
        let mut back = break_parenthesised_clauses(&word.en);
        if !word.en_ext.is_empty() {
            back.push_str(&format!("<br><i>{}</i>", word.en_ext));
        }
        if !word.cog.is_empty() {
            back.push_str(&format!("<br>[{}]", word.cog));
        }
        return Ok(vec![Row {
            id: id.to_string(),
            front,
            back,
            tags,
            deck: deck.to_string(),
        }]);
    }

    let rows = segments
        .into_iter()
        .map(|segment| {
            let (id, front) = match &segment.marker {
                Marker::Case { case, text } => (
                    format!("{id}-{}", case.abbrev()),
                    with_ext(&format!("{} {text}", word.gr), &word.gr_ext),
                ),
                Marker::Voice(_) if !word.gr_mp.is_empty() => {
                    (word.gr_mp.clone(), word.gr_mp.clone())
                }
                Marker::Plural if !word.gr_pl.is_empty() => {
                    (headword_stem(&word.gr_pl).to_string(), word.gr_pl.clone())
                }
                _ => (id.to_string(), front.clone()),
            };
            Row {
                id,
                front,
                back: break_parenthesised_clauses(&segment.text),
                tags: tags.clone(),
                deck: deck.to_string(),
            }
        })
        .collect();
    Ok(rows)
}
