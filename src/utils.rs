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

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::io::stdout;
use std::path::Path;

use mag_core::ErrorReport;
use mag_core::Fallible;

/// Open the output file, or stdout when no path is given.
pub fn open_output(outfile: Option<&Path>) -> Fallible<Box<dyn Write>> {
    match outfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ErrorReport::new(format!("opening outfile {}: {e}", path.display()))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_open_output_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.csv");
        let mut out = open_output(Some(path.as_path()))?;
        writeln!(out, "#html:true")?;
        out.flush()?;
        drop(out);
        assert_eq!(std::fs::read_to_string(&path)?, "#html:true\n");
        Ok(())
    }

    #[test]
    fn test_open_output_missing_directory() {
        let result = open_output(Some(Path::new("./no/such/dir/deck.csv")));
        assert!(result.is_err());
    }
}
