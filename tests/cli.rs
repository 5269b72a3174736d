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

//! Integration tests for the `mag` command line tools.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn mag() -> Command {
    Command::cargo_bin("mag").unwrap()
}

/// Run a successful command and return the CSV records, skipping Anki
/// header lines.
fn records(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_export_vocab() {
    let rows = records(mag().arg("export-vocab").arg(fixture_path("vocab.yml")));
    assert_eq!(rows.len(), 9);
    assert_eq!(
        rows[1],
        "λόγος,\"λόγος, λόγου, ὁ\",word; speech<br>(in pl.) stories<br>[logic],pos::noun,Mastronarde Attic Greek Vocab (Greek-to-English)::Unit 5"
    );
    let ids: Vec<&str> = rows.iter().map(|r| r.split(',').next().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["καί", "λόγος", "ἐκ", "διά-gen", "διά-acc", "λύω", "λύομαι", "τεῖχος", "τείχη"]
    );
}

#[test]
fn test_export_vocab_header() {
    mag()
        .arg("export-vocab")
        .arg(fixture_path("vocab.yml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# This is an export of the MAG vocab dataset in Anki CSV format (Greek-to-English)\n#separator:Comma\n",
        ))
        .stdout(predicate::str::contains("#html:true\n"));
}

#[test]
fn test_export_vocab_unit_and_count() {
    let rows = records(
        mag()
            .arg("export-vocab")
            .arg(fixture_path("vocab.yml"))
            .args(["-u", "6"]),
    );
    assert_eq!(rows.len(), 6);

    let rows = records(
        mag()
            .arg("export-vocab")
            .arg(fixture_path("vocab.yml"))
            .args(["--count", "2"]),
    );
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_export_vocab_outfile() {
    let dir = TempDir::new().unwrap();
    let outfile = dir.path().join("vocab.csv");
    mag()
        .arg("export-vocab")
        .arg(fixture_path("vocab.yml"))
        .arg("-o")
        .arg(&outfile)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let written = fs::read_to_string(&outfile).unwrap();
    assert!(written.starts_with("# This is an export of the MAG vocab dataset"));
    assert_eq!(written.lines().filter(|l| !l.starts_with('#')).count(), 9);
}

#[test]
fn test_export_vocab_missing_file() {
    mag()
        .arg("export-vocab")
        .arg(fixture_path("does-not-exist.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("mag: error: failed to read"));
}

#[test]
fn test_export_vocab_missing_case_marker() {
    mag()
        .arg("export-vocab")
        .arg(fixture_path("bad_prep.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "preposition entry without initial case marker: in; among",
        ));
}

#[test]
fn test_export_vocab_bad_yaml() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("vocab.yml");
    fs::write(&dataset, "- name: [unclosed\n").unwrap();
    mag()
        .arg("export-vocab")
        .arg(&dataset)
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}

#[test]
fn test_export_pp() {
    let rows = records(mag().arg("export-pp").arg(fixture_path("pp.yml")));
    assert_eq!(rows.len(), 12);
    assert!(rows.contains(
        &"ἤγγελα,ἤγγελα,Aorist #2 of ἀγγέλλω (same meaning),pp::aorist,Mastronarde AtticGreek Principal Parts (GrEn)::Unit 10".to_string()
    ));
}

#[test]
fn test_export_pp_reverse() {
    mag()
        .arg("export-pp")
        .arg(fixture_path("pp.yml"))
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::contains("#notetype:MAG PP EnGr\n"))
        .stdout(predicate::str::contains(
            "ἔσομαι,Future of εἰμί,ἔσομαι,pp::future,Mastronarde AtticGreek Principal Parts (EnGr)::Unit 11\n",
        ));
}

#[test]
fn test_export_pp_incremental() {
    mag()
        .arg("export-pp")
        .arg(fixture_path("pp.yml"))
        .arg("--incr")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ἐλύθην,ἐλύθην,Aorist Passive of λύω,pp::aorist_passive,\"Mastronarde AtticGreek Principal Parts (Incr,GrEn)::PPB::Unit 10\"\n",
        ));
}

#[test]
fn test_export_pp_num() {
    let rows = records(
        mag()
            .arg("export-pp")
            .arg(fixture_path("pp.yml"))
            .args(["-n", "3"]),
    );
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.contains(",pp::aorist,")));
}

#[test]
fn test_export_pp_num_out_of_range() {
    mag()
        .arg("export-pp")
        .arg(fixture_path("pp.yml"))
        .args(["-n", "7"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_lint_pp_clean() {
    mag()
        .arg("lint-pp")
        .arg(fixture_path("pp.yml"))
        .assert()
        .success()
        .stdout("{\n  \"errors\": 0,\n  \"records\": 3,\n  \"units\": 2\n}\n");
}

#[test]
fn test_lint_pp_problems() {
    mag()
        .arg("lint-pp")
        .arg(fixture_path("pp_lint.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bad \"fu\" entry found for unit \"Unit 10\": \"λύσω, λύσομαι\"\n",
        ))
        .stdout(predicate::str::contains(
            "Empty unit 'name' field found for unit 50\n",
        ))
        .stdout(predicate::str::contains(
            "Invalid unit 'unit' field found for unit 50: 50\n",
        ))
        .stdout(predicate::str::contains(
            "Bad \"fu\" entry found for unit 50: \"paideuso\"\n",
        ))
        .stdout(predicate::str::contains("\"errors\": 4"));
}

#[test]
fn test_lint_pp_unit_filter() {
    mag()
        .arg("lint-pp")
        .arg(fixture_path("pp_lint.yml"))
        .args(["--unit", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit 10").not())
        .stdout(predicate::str::contains("\"units\": 1"));
}
