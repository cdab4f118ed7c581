//! Report output format tests.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use focus_qa_adapters::{JsonReport, TextReport};
use focus_qa_core::{ClassificationResult, VerdictReport};
use focus_qa_test_support::SharedBuffer;
use serde_json::Value;

fn blurry() -> ClassificationResult {
    ClassificationResult::from_metric(120.25, 3000.0)
}

fn sharp() -> ClassificationResult {
    ClassificationResult::from_metric(4500.0, 3000.0)
}

// === Text ===

#[test]
fn test_text_lines() {
    let buffer = SharedBuffer::new();
    let report = TextReport::new(Box::new(buffer.clone()));

    report.report(&blurry()).unwrap();
    report.report(&sharp()).unwrap();
    report.flush().unwrap();

    assert_eq!(buffer.contents(), "blurry/dark: YES\nblurry/dark: NO\n");
}

#[test]
fn test_text_with_metric() {
    let buffer = SharedBuffer::new();
    let report = TextReport::new(Box::new(buffer.clone())).with_metric(true);

    report.report(&blurry()).unwrap();

    assert_eq!(
        buffer.contents(),
        "blurry/dark: YES (focus metric 120.25, threshold 3000)\n"
    );
}

// === JSON Lines ===

#[test]
fn test_jsonl_one_object_per_line() {
    let buffer = SharedBuffer::new();
    let report = JsonReport::new(Box::new(buffer.clone()));

    report.report(&blurry()).unwrap();
    report.report(&sharp()).unwrap();
    report.flush().unwrap();

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["focus_metric"], 120.25);
    assert_eq!(first["is_blurry"], true);

    let second: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["is_blurry"], false);
}

#[test]
fn test_jsonl_round_trips_result() {
    let buffer = SharedBuffer::new();
    let report = JsonReport::new(Box::new(buffer.clone()));

    report.report(&sharp()).unwrap();

    let parsed: ClassificationResult = serde_json::from_str(buffer.contents().trim()).unwrap();
    assert_eq!(parsed, sharp());
}

// === JSON Array ===

#[test]
fn test_json_array_compact() {
    let buffer = SharedBuffer::new();
    let report = JsonReport::new(Box::new(buffer.clone()));

    report.write_array(&[blurry(), sharp()], false).unwrap();

    let contents = buffer.contents();
    assert_eq!(contents.lines().count(), 1);
    let parsed: Value = serde_json::from_str(&contents).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[1]["focus_metric"], 4500.0);
}

#[test]
fn test_json_array_pretty() {
    let buffer = SharedBuffer::new();
    let report = JsonReport::new(Box::new(buffer.clone()));

    report.write_array(&[blurry()], true).unwrap();

    let contents = buffer.contents();
    assert!(contents.lines().count() > 1);
    assert!(contents.contains("  \"is_blurry\": true"));
}

#[test]
fn test_json_array_empty() {
    let buffer = SharedBuffer::new();
    let report = JsonReport::new(Box::new(buffer.clone()));

    report.write_array(&[], false).unwrap();

    assert_eq!(buffer.contents(), "[]\n");
}
