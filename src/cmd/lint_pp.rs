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
use std::io::stdout;
use std::path::PathBuf;

use mag_core::Fallible;
use mag_core::LintOptions;
use mag_core::UnitPP;
use mag_core::lint_principal_parts;
use mag_core::load_dataset;

pub struct LintPpArgs {
    pub filename: PathBuf,
    pub unit: Option<i64>,
}

/// Print lint findings and stats to stdout. Findings don't fail the command.
pub fn lint_pp(args: LintPpArgs) -> Fallible<()> {
    let units: Vec<UnitPP> = load_dataset(&args.filename)?;
    let options = LintOptions { unit: args.unit };
    let mut out = stdout().lock();
    let stats = lint_principal_parts(&mut out, &units, &options)?;
    if let Some(errors) = stats.get("errors").filter(|n| *n > 0) {
        log::info!("{errors} problems found in {}", args.filename.display());
    }
    stats.write_json(&mut out)?;
    out.flush()?;
    Ok(())
}
