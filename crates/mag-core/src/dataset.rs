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

use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// Parse a dataset: a YAML sequence of units. An empty document is an empty
/// dataset.
pub fn parse_dataset<T: DeserializeOwned>(text: &str) -> Fallible<Vec<T>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let units: Option<Vec<T>> = serde_yaml::from_str(text)?;
    Ok(units.unwrap_or_default())
}

/// Read and parse the dataset at the given path.
pub fn load_dataset<T: DeserializeOwned>(path: &Path) -> Fallible<Vec<T>> {
    log::debug!("Loading dataset from {}", path.display());
    let text = read_to_string(path).map_err(|e| {
        ErrorReport::new(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_dataset(&text)
        .map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e.message())))
}
