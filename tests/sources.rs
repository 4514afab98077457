//! File loading tests for rule sets and vocabulary lists

use std::path::PathBuf;

use tempfile::TempDir;
use transcript_normalizer::sources::{load_all_rule_sets, load_rule_sets, load_vocabulary};

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_and_json_rule_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let toml_file = write(
        &dir,
        "speakers.toml",
        r#"
[[rule_sets]]
category = "Speakers"

[[rule_sets.rules]]
target = "John Smith"
search = ["John"]
"#,
    );
    let json_file = write(
        &dir,
        "products.json",
        r#"[{"category": "Products", "rules": [{"target": "NOVA", "search": ["/nova.?14/"]}]}]"#,
    );

    let rule_sets = load_all_rule_sets(&[toml_file, json_file]).unwrap();

    let categories: Vec<&str> = rule_sets.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["Speakers", "Products"]);
    assert_eq!(rule_sets[1].rules[0].search_terms, vec!["/nova.?14/"]);
}

#[test]
fn test_rule_file_needs_known_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "rules.txt", "John -> John Smith");

    let err = load_rule_sets(&path).unwrap_err();
    assert!(err.to_string().contains("rules.txt"));
}

#[test]
fn test_invalid_rule_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.json", "{\"category\": ");

    let err = load_rule_sets(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
}

#[test]
fn test_vocabulary_formats_are_merged_without_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let text = write(&dir, "terms.txt", "# products\nTPG+\n\nNextGen\n");
    let json = write(&dir, "terms.json", r#"["Hafas", "TPG+"]"#);
    let toml = write(&dir, "terms.toml", "terms = [\" Covariance \", \"NextGen\"]\n");

    let vocabulary = load_vocabulary(&[text, json, toml]).unwrap();

    assert_eq!(vocabulary, vec!["TPG+", "NextGen", "Hafas", "Covariance"]);
}

#[test]
fn test_vocabulary_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "terms.json", r#"{"terms": ["Hafas"]}"#);

    assert_eq!(load_vocabulary(&[path]).unwrap(), vec!["Hafas"]);
}

#[test]
fn test_missing_vocabulary_file() {
    let err = load_vocabulary(&[PathBuf::from("/nonexistent/terms.txt")]).unwrap_err();
    assert!(err.to_string().contains("terms.txt"));
}
