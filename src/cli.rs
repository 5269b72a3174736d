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

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use mag_core::Fallible;

use crate::cmd::export_pp::ExportPpArgs;
use crate::cmd::export_pp::export_pp;
use crate::cmd::export_vocab::ExportVocabArgs;
use crate::cmd::export_vocab::export_vocab;
use crate::cmd::lint_pp::LintPpArgs;
use crate::cmd::lint_pp::lint_pp;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Export the vocab dataset as a Greek-to-English Anki CSV deck.
    ExportVocab {
        /// Vocab YAML dataset to read.
        #[arg(default_value = "vocab.yml")]
        filename: PathBuf,
        /// Export only this unit number.
        #[arg(short, long)]
        unit: Option<i64>,
        /// Export only this many entries.
        #[arg(short, long)]
        count: Option<usize>,
        /// Path to the output file. By default, the output is printed to stdout.
        #[arg(short, long)]
        outfile: Option<PathBuf>,
        /// Display verbose output.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Export the principal parts dataset as an Anki CSV deck.
    ExportPp {
        /// Principal parts YAML dataset to read.
        #[arg(default_value = "pp.yml")]
        filename: PathBuf,
        /// Export only this unit number.
        #[arg(short, long)]
        unit: Option<i64>,
        /// Export only this principal part (2-6).
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=6))]
        num: Option<u8>,
        /// Export in reverse format, i.e. English-to-Greek.
        #[arg(short, long)]
        rev: bool,
        /// Split into incremental subdecks of principal parts 1-3, 6, 4-5.
        #[arg(short, long)]
        incr: bool,
        /// Path to the output file. By default, the output is printed to stdout.
        #[arg(short, long)]
        outfile: Option<PathBuf>,
        /// Display verbose output.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check the principal parts dataset for formatting problems.
    LintPp {
        /// Principal parts YAML dataset to read.
        #[arg(default_value = "pp.yml")]
        filename: PathBuf,
        /// Lint only this unit number.
        #[arg(short, long)]
        unit: Option<i64>,
        /// Display verbose output.
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Command {
    fn verbose(&self) -> bool {
        match self {
            Command::ExportVocab { verbose, .. }
            | Command::ExportPp { verbose, .. }
            | Command::LintPp { verbose, .. } => *verbose,
        }
    }
}

/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

/// A zero unit or count means no filter.
fn nonzero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    init_logging(cli.verbose());
    match cli {
        Command::ExportVocab {
            filename,
            unit,
            count,
            outfile,
            verbose: _,
        } => export_vocab(ExportVocabArgs {
            filename,
            unit: nonzero(unit),
            count: nonzero(count),
            outfile,
        }),
        Command::ExportPp {
            filename,
            unit,
            num,
            rev,
            incr,
            outfile,
            verbose: _,
        } => export_pp(ExportPpArgs {
            filename,
            unit: nonzero(unit),
            num,
            reverse: rev,
            incremental: incr,
            outfile,
        }),
        Command::LintPp {
            filename,
            unit,
            verbose: _,
        } => lint_pp(LintPpArgs {
            filename,
            unit: nonzero(unit),
        }),
    }
}
