//! Tests for token scanning and template stores.

use super::*;
use crate::error::PageError;
use tempfile::TempDir;

#[test]
fn test_scan_local_and_shared_tokens() {
    let text = "<h1>[[shared:interface]]</h1><p>[[summary]]</p>";
    let tokens = scan_tokens(text);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name, "interface");
    assert_eq!(tokens[0].scope, TokenScope::Shared);
    assert_eq!(&text[tokens[0].span.clone()], "[[shared:interface]]");
    assert_eq!(tokens[1].name, "summary");
    assert!(!tokens[1].is_shared());
}

#[test]
fn test_scan_repeated_tokens_reports_each_occurrence() {
    let tokens = scan_tokens("[[a]] and [[a]] and [[b]]");
    let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "a", "b"]);
}

#[test]
fn test_scan_ignores_malformed_tokens() {
    let tokens = scan_tokens("[[]] [single] [[has space]] [[ok]] [[unclosed");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name, "ok");
}

#[test]
fn test_scan_no_tokens() {
    assert!(scan_tokens("plain <b>html</b>").is_empty());
    assert!(scan_tokens("").is_empty());
}

#[test]
fn test_find_token_from_offset() {
    let text = "[[a]] [[b]]";
    let token = find_token_from(text, 1).unwrap();
    assert_eq!(token.name, "b");
    assert_eq!(token.span, 6..11);
    assert!(find_token_from(text, text.len()).is_none());
    assert!(find_token_from(text, text.len() + 5).is_none());
}

#[test]
fn test_token_literals() {
    assert_eq!(local_token("summary"), "[[summary]]");
    assert_eq!(shared_token("interface"), "[[shared:interface]]");

    let token = scan_tokens("[[shared:x]]").remove(0);
    assert_eq!(token.literal(), "[[shared:x]]");
}

#[test]
fn test_dir_store_lowercases_page_type() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("interface.html"), "<p>[[summary]]</p>").unwrap();

    let store = DirTemplateStore::new(temp_dir.path(), "html");
    assert_eq!(store.template("Interface").unwrap(), "<p>[[summary]]</p>");
}

#[test]
fn test_dir_store_missing_template() {
    let temp_dir = TempDir::new().unwrap();
    let store = DirTemplateStore::new(temp_dir.path(), "html");

    match store.template("method") {
        Err(PageError::TemplateNotFound { page_type, path }) => {
            assert_eq!(page_type, "method");
            assert!(path.ends_with("method.html"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_memory_store() {
    let store = MemoryTemplateStore::new().with("Landing", "hello");
    assert_eq!(store.template("landing").unwrap(), "hello");
    assert!(store.template("other").is_err());
}
