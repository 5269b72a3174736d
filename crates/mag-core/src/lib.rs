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

//! mag-core: Core library for the mag-anki tools.
//!
//! This library provides:
//! - Typed access to the MAG vocab and principal parts YAML datasets
//! - Gloss segmentation by case, voice and number markers
//! - Anki CSV deck export for vocab and principal parts
//! - Formatting checks for the principal parts dataset

pub mod anki;
pub mod dataset;
pub mod error;
pub mod export;
pub mod gloss;
pub mod lint;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use dataset::{load_dataset, parse_dataset};
pub use error::{ErrorReport, Fallible, fail};
pub use export::principal_parts::{Direction, PpExportOptions, export_principal_parts};
pub use export::vocab::{VocabExportOptions, export_vocab};
pub use gloss::{Marker, Segment, SegmentMode, segment_gloss};
pub use lint::{LintOptions, lint_principal_parts};
pub use stats::Stats;
pub use types::principal_parts::{Parts, PrincipalPart, UnitPP};
pub use types::vocab::{PartOfSpeech, UnitVocab, Word};
