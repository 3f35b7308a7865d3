//! Tests for the terminal prompter.

use super::*;
use std::io::Cursor;

fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_reads_one_line_per_answer() {
    let mut p = prompter("first\nsecond\n");
    assert_eq!(p.ask("Q1?", None).unwrap(), "first");
    assert_eq!(p.ask("Q2?", None).unwrap(), "second");
}

#[test]
fn test_strips_crlf() {
    let mut p = prompter("windows\r\n");
    assert_eq!(p.ask("Q?", None).unwrap(), "windows");
}

#[test]
fn test_empty_line_uses_default() {
    let mut p = prompter("\n");
    assert_eq!(p.ask("Q?", Some("fallback")).unwrap(), "fallback");
}

#[test]
fn test_empty_line_without_default_is_empty() {
    let mut p = prompter("\n");
    assert_eq!(p.ask("Q?", None).unwrap(), "");
}

#[test]
fn test_closed_input_is_unexpected_eof() {
    let mut p = prompter("");
    let err = p.ask("Q?", None).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_writes_prompt_and_lines() {
    let mut p = prompter("x\n");
    p.say("Intro").unwrap();
    p.ask("\nName?\n", None).unwrap();

    let out = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(out, "Intro\n\nName?\n> ");
}

struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_say_reports_write_errors() {
    let mut p = TerminalPrompter::new(Cursor::new(Vec::new()), ClosedOutput);
    let err = p.say("Intro").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
