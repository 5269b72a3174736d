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

use std::io::Write;
use std::path::PathBuf;

use mag_core::Fallible;
use mag_core::UnitVocab;
use mag_core::VocabExportOptions;
use mag_core::load_dataset;

use crate::utils::open_output;

pub struct ExportVocabArgs {
    pub filename: PathBuf,
    pub unit: Option<i64>,
    pub count: Option<usize>,
    pub outfile: Option<PathBuf>,
}

pub fn export_vocab(args: ExportVocabArgs) -> Fallible<()> {
    let units: Vec<UnitVocab> = load_dataset(&args.filename)?;
    let options = VocabExportOptions {
        unit: args.unit,
        count: args.count,
    };
    let out = open_output(args.outfile.as_deref())?;
    let mut out = mag_core::export_vocab(out, &units, &options)?;
    out.flush()?;
    Ok(())
}
