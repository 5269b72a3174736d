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

use mag_core::Direction;
use mag_core::ErrorReport;
use mag_core::Fallible;
use mag_core::PpExportOptions;
use mag_core::PrincipalPart;
use mag_core::UnitPP;
use mag_core::export_principal_parts;
use mag_core::load_dataset;

use crate::utils::open_output;

pub struct ExportPpArgs {
    pub filename: PathBuf,
    pub unit: Option<i64>,
    /// Principal part number.
    pub num: Option<u8>,
    pub reverse: bool,
    pub incremental: bool,
    pub outfile: Option<PathBuf>,
}

pub fn export_pp(args: ExportPpArgs) -> Fallible<()> {
    let part = args
        .num
        .map(|n| {
            PrincipalPart::from_number(n)
                .ok_or_else(|| ErrorReport::new(format!("no principal part number {n}")))
        })
        .transpose()?;
    let units: Vec<UnitPP> = load_dataset(&args.filename)?;
    let options = PpExportOptions {
        unit: args.unit,
        part,
        direction: if args.reverse {
            Direction::EnglishToGreek
        } else {
            Direction::GreekToEnglish
        },
        incremental: args.incremental,
    };
    let out = open_output(args.outfile.as_deref())?;
    let mut out = export_principal_parts(out, &units, &options)?;
    out.flush()?;
    Ok(())
}
