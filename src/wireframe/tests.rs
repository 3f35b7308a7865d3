//! Tests for wireframe catalog loading.

use super::*;
use tempfile::TempDir;

const CATALOG: &str = r#"
interface:
  question: What is the interface name?
spec_count:
  question: How many specifications define it?
  default: "1"
  pattern: ^\d+$
  help: Enter a whole number.
examples:
  question: Include an examples section?
  action:
    name: include
copyright: Don't ask.
"#;

#[test]
fn test_parse_catalog() {
    let catalog = WireframeCatalog::from_yaml(CATALOG).unwrap();

    assert_eq!(catalog.len(), 4);
    assert!(catalog.is_dont_ask("copyright"));
    assert!(!catalog.is_dont_ask("interface"));

    match catalog.get("spec_count") {
        Some(Wireframe::Ask(entry)) => {
            assert_eq!(entry.question, "How many specifications define it?");
            assert_eq!(entry.default.as_deref(), Some("1"));
            assert_eq!(entry.pattern.as_deref(), Some(r"^\d+$"));
            assert_eq!(entry.help.as_deref(), Some("Enter a whole number."));
            assert!(entry.action.is_none());
        }
        other => panic!("unexpected wireframe: {:?}", other),
    }
}

#[test]
fn test_parse_json_catalog() {
    let json = r#"{"name": {"question": "Name?"}, "fixed": "Don't ask."}"#;
    let catalog = WireframeCatalog::from_yaml(json).unwrap();

    assert!(catalog.contains("name"));
    assert!(catalog.is_dont_ask("fixed"));
}

#[test]
fn test_action_names() {
    let catalog = WireframeCatalog::from_yaml(CATALOG).unwrap();
    let names: Vec<&str> = catalog.action_names().into_iter().collect();
    assert_eq!(names, vec!["include"]);
}

#[test]
fn test_rejects_unknown_sentinel_string() {
    let err = WireframeCatalog::from_yaml("name: Ask later.").unwrap_err();
    assert!(err.to_string().contains("Don't ask."));
}

#[test]
fn test_rejects_invalid_pattern() {
    let yaml = r#"
count:
  question: How many?
  pattern: "(unclosed"
"#;
    let err = WireframeCatalog::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid pattern"));
}

#[test]
fn test_rejects_empty_question() {
    let err = WireframeCatalog::from_yaml("name:\n  question: \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("empty question"));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = WireframeCatalog::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read wireframe catalog"));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wireframes.yaml");
    std::fs::write(&path, CATALOG).unwrap();

    let catalog = WireframeCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 4);
}

#[test]
fn test_builder_entries() {
    let entry = WireframeEntry::new("Pick one")
        .with_default("a")
        .with_pattern("^[ab]$")
        .with_help("a or b")
        .with_action("include");

    let catalog = WireframeCatalog::new().insert("choice", Wireframe::Ask(entry.clone()));
    assert_eq!(catalog.get("choice"), Some(&Wireframe::Ask(entry)));
    assert!(catalog.validate().is_ok());
}
