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

//! Writing Anki's CSV import format.
//!
//! Anki reads `#key:value` header lines before the first record to pick the
//! separator, column names, note type and deck column.

use std::io::Write;

use crate::error::ErrorReport;
use crate::error::Fallible;

pub const COLUMNS: &str = "ID,Front,Back,Tags,DeckName";

/// 1-based position of the `DeckName` column.
pub const DECK_COLUMN: usize = 5;

/// Separator between deck name components.
pub const DECK_SEPARATOR: &str = "::";

/// The header lines written before the first record.
#[derive(Debug)]
pub struct DeckHeader {
    /// Free text for the leading comment line.
    pub comment: String,
    pub notetype: Option<String>,
    /// Whether Anki should treat fields as HTML.
    pub html: bool,
}

impl DeckHeader {
    fn write(&self, out: &mut impl Write) -> Fallible<()> {
        writeln!(out, "# {}", self.comment)?;
        writeln!(out, "#separator:Comma")?;
        writeln!(out, "#columns:{COLUMNS}")?;
        if let Some(notetype) = &self.notetype {
            writeln!(out, "#notetype:{notetype}")?;
        }
        writeln!(out, "#deck column:{DECK_COLUMN}")?;
        writeln!(out, "#html:{}", self.html)?;
        Ok(())
    }
}

/// One CSV record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub front: String,
    pub back: String,
    pub tags: String,
    pub deck: String,
}

/// Writes the header, then one record per [`Row`].
pub struct AnkiWriter<W: Write> {
    csv: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> AnkiWriter<W> {
    pub fn new(mut out: W, header: &DeckHeader) -> Fallible<Self> {
        header.write(&mut out)?;
        let csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        Ok(AnkiWriter { csv, rows: 0 })
    }

    pub fn write_row(&mut self, row: &Row) -> Fallible<()> {
        self.csv
            .write_record([&row.id, &row.front, &row.back, &row.tags, &row.deck])?;
        self.rows += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered records and hand back the underlying writer.
    pub fn finish(self) -> Fallible<W> {
        self.csv
            .into_inner()
            .map_err(|e| ErrorReport::new(format!("CSV error: {}", e.error())))
    }
}

/// Join deck name components into an Anki deck path.
pub fn deck_path<S: AsRef<str>>(components: &[S]) -> String {
    components
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(DECK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(front: &str, back: &str) -> Row {
        Row {
            id: "λόγος".to_string(),
            front: front.to_string(),
            back: back.to_string(),
            tags: "pos::noun".to_string(),
            deck: deck_path(&["Vocab", "Unit 5"]),
        }
    }

    #[test]
    fn test_header_and_rows() -> Fallible<()> {
        let header = DeckHeader {
            comment: "Test deck".to_string(),
            notetype: Some("Basic".to_string()),
            html: false,
        };
        let mut writer = AnkiWriter::new(Vec::new(), &header)?;
        writer.write_row(&row("λόγος", "word"))?;
        writer.write_row(&row("λόγος, λόγου, ὁ", "word, \"speech\""))?;
        assert_eq!(writer.rows(), 2);
        let out = String::from_utf8(writer.finish()?)?;
        assert_eq!(
            out,
            "# Test deck\n\
             #separator:Comma\n\
             #columns:ID,Front,Back,Tags,DeckName\n\
             #notetype:Basic\n\
             #deck column:5\n\
             #html:false\n\
             λόγος,λόγος,word,pos::noun,Vocab::Unit 5\n\
             λόγος,\"λόγος, λόγου, ὁ\",\"word, \"\"speech\"\"\",pos::noun,Vocab::Unit 5\n"
        );
        Ok(())
    }

    #[test]
    fn test_header_without_notetype() -> Fallible<()> {
        let header = DeckHeader {
            comment: "Vocab".to_string(),
            notetype: None,
            html: true,
        };
        let out = String::from_utf8(AnkiWriter::new(Vec::new(), &header)?.finish()?)?;
        assert!(!out.contains("#notetype"));
        assert!(out.ends_with("#deck column:5\n#html:true\n"));
        Ok(())
    }
}
