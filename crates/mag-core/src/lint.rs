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

//! Formatting checks for the principal parts dataset.

use std::io::Write;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Fallible;
use crate::stats::Stats;
use crate::types::principal_parts::Parts;
use crate::types::principal_parts::UnitPP;
use crate::types::quoted;

/// A form, optionally an alternate pair, optionally with a stem note, e.g.
/// `ἔλυσα`, `(ἤγγειλα or ἤγγελα)`, `-βήσομαι (stem βη-)`.
static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?-?\p{Greek}+( (or|and) \p{Greek}+)?(\pZ+\(stem \p{Greek}+-\))?\)?$")
        .expect("Invalid principal part entry regex")
});

/// Units that introduce principal parts.
pub const UNITS: RangeInclusive<i64> = 5..=42;

/// Below this, a unit number alone doesn't identify a unit in messages.
const MIN_LABELLED_UNIT: i64 = 3;

#[derive(Clone, Debug, Default)]
pub struct LintOptions {
    /// Only lint this unit.
    pub unit: Option<i64>,
}

/// Check the dataset, writing one line per problem to `out`.
///
/// Returns the `units`, `records` and `errors` counters.
pub fn lint_principal_parts(
    out: &mut impl Write,
    units: &[UnitPP],
    options: &LintOptions,
) -> Fallible<Stats> {
    let mut stats = Stats::new();
    let mut errors: usize = 0;

    if units.is_empty() {
        writeln!(out, "Empty pp list!")?;
        stats.add("errors", 1);
        return Ok(stats);
    }

    for unit in units {
        if options.unit.is_some_and(|n| n != unit.unit) {
            continue;
        }
        stats.incr("units");

        let label = if !unit.name.is_empty() {
            format!(" for unit {}", quoted(&unit.name))
        } else if unit.unit >= MIN_LABELLED_UNIT {
            format!(" for unit {}", unit.unit)
        } else {
            String::new()
        };

        if unit.name.is_empty() {
            writeln!(out, "Empty unit 'name' field found{label}")?;
            errors += 1;
        }
        if unit.unit == 0 {
            writeln!(out, "Empty unit 'unit' field found{label}")?;
            errors += 1;
        } else if !UNITS.contains(&unit.unit) {
            writeln!(out, "Invalid unit 'unit' field found{label}: {}", unit.unit)?;
            errors += 1;
        }
        if unit.pp.is_empty() {
            writeln!(out, "Empty unit 'pp' list found{label}")?;
            errors += 1;
            continue;
        }
        // Without a label the problems couldn't be located.
        if label.is_empty() {
            continue;
        }

        for parts in &unit.pp {
            stats.incr("records");
            errors += lint_record(out, parts, &label)?;
        }
    }

    stats.add("errors", errors);
    Ok(stats)
}

/// Check each non-empty part of a record, returning the number of problems.
fn lint_record(out: &mut impl Write, parts: &Parts, label: &str) -> Fallible<usize> {
    let mut errors = 0;
    for (part, form) in parts.present_parts() {
        if !ENTRY.is_match(form) {
            writeln!(out, "Bad \"{}\" entry found{label}: {}", part.key(), quoted(form))?;
            errors += 1;
        }
    }
    Ok(errors)
}
