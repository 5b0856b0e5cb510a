//! End-to-end checks of the adtx binary's terminal states.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use predicates::prelude::*;

/// Build a one-page PDF carrying `text` as native page content.
fn filing_pdf(dir: &Path, text: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let path = dir.join("filing.pdf");
    doc.save(&path).unwrap();
    path
}

const RECORD_KEYS: [&str; 8] = [
    "company_name",
    "cin",
    "registered_office",
    "appointment_date",
    "auditor_name",
    "auditor_address",
    "auditor_frn_or_membership",
    "appointment_type",
];

#[test]
fn missing_input_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("adtx")
        .unwrap()
        .current_dir(dir.path())
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn unreadable_document_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.pdf");
    std::fs::write(&input, b"this is not a document").unwrap();

    Command::cargo_bin("adtx")
        .unwrap()
        .current_dir(dir.path())
        .args(["process", "broken.pdf", "--no-summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("document unreadable"));

    assert!(!dir.path().join("output.json").exists());
}

#[test]
fn completed_run_writes_all_record_fields() {
    let dir = tempfile::tempdir().unwrap();
    filing_pdf(dir.path(), "Auditor SHARMA & ASSOCIATES appointed on 29/09/2023");

    Command::cargo_bin("adtx")
        .unwrap()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["process", "filing.pdf", "--no-summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));

    let json = std::fs::read_to_string(dir.path().join("output.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&json).unwrap();
    let fields = record.as_object().unwrap();
    assert_eq!(fields.len(), RECORD_KEYS.len());
    for key in RECORD_KEYS {
        assert!(fields.contains_key(key), "key {} missing from output", key);
    }
    assert_eq!(record["appointment_date"], "29/09/2023");
}

#[test]
fn missing_summary_backend_does_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    filing_pdf(dir.path(), "GLOBAL EXPORTS LIMITED notice dated 01/04/2024");

    // An empty PATH makes the ollama probe fail; the run must still
    // succeed with the record written and the summary omitted.
    Command::cargo_bin("adtx")
        .unwrap()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("PATH", "")
        .args(["process", "filing.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary skipped"))
        .stdout(predicate::str::contains("Extraction complete"));

    assert!(dir.path().join("output.json").exists());
    assert!(!dir.path().join("summary.txt").exists());
}

#[test]
fn config_set_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("adtx")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "summary.model", "mistral"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set summary.model"));

    Command::cargo_bin("adtx")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "summary.model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mistral"));
}

#[test]
fn config_get_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("adtx")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "summary.no_such_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn config_path_reports_location() {
    Command::cargo_bin("adtx")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file"));
}
