use std::{io::Cursor, process::Command};

use stars_hh::{
    AmountConverter, ConverterConfig, HandConverter, HandHistoryReader, RunSummary,
};

const EXPORT: &str = include_str!("testdata/export.txt");
const EXPECTED: &str = include_str!("testdata/expected.txt");

fn convert(input: &str) -> (RunSummary, String, String) {
    let converter = HandConverter::new(ConverterConfig::default()).unwrap();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = converter
        .convert_reader(Cursor::new(input), &mut out, &mut diag)
        .unwrap();
    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn test_convert_export() {
    let (summary, out, diag) = convert(EXPORT);

    assert_eq!(summary, RunSummary { hands: 4, errors: 2 });
    assert_eq!(out, EXPECTED);
    assert_eq!(
        diag,
        "Unknown play money table header: Table 'Ariadne II' 6-max (Real Money) Seat #3 is the button -> id: 230002\n\
         Unknown network: Full Tilt Poker Game #99: Table Zeta - 10/20 - Limit Hold'em - 14:07:00 ET\n"
    );
}

#[test]
fn test_emitted_plus_rejected_equals_read() {
    let (summary, out, diag) = convert(EXPORT);

    let emitted = out.matches("PokerStars Hand #").count();
    let rejected = diag.lines().count();
    assert_eq!(emitted + rejected, summary.hands);
    assert_eq!(emitted, summary.converted());

    let read = HandHistoryReader::new(Cursor::new(EXPORT)).count();
    assert_eq!(read, summary.hands);
}

#[test]
fn test_crlf_export_matches_lf_export() {
    let crlf = EXPORT.replace('\n', "\r\n");
    let (summary, out, _) = convert(&crlf);
    assert_eq!(summary, RunSummary { hands: 4, errors: 2 });
    assert_eq!(out, EXPECTED);
}

#[test]
fn test_last_hand_without_trailing_blank_line() {
    let trimmed = EXPORT.trim_end();
    let (summary, out, _) = convert(trimmed);
    assert_eq!(summary.hands, 4);
    assert_eq!(out, EXPECTED);
}

#[test]
fn test_converted_body_is_stable() {
    let config = ConverterConfig::default();
    let converter = AmountConverter::pokerstars(&config);
    for line in EXPECTED.lines().filter(|l| !l.starts_with("PokerStars Hand #")) {
        assert_eq!(converter.convert_line(line), line);
    }
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.txt");
    std::fs::write(&path, EXPORT).unwrap();

    let converter = HandConverter::new(ConverterConfig::default()).unwrap();
    let mut out = Vec::new();
    let mut diag = Vec::<u8>::new();
    let summary = converter.convert_file(&path, &mut out, &mut diag).unwrap();

    assert_eq!(summary.to_string(), "4 hands, 2 errors");
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_cli_converts_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.txt");
    std::fs::write(&path, EXPORT).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_stars-hh"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 3);
    assert_eq!(stderr.lines().last(), Some("4 hands, 2 errors"));
}

#[test]
fn test_cli_without_file_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_stars-hh"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.trim_end().ends_with("<filename>"));
}

#[test]
fn test_cli_missing_file_has_no_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_stars-hh"))
        .arg(dir.path().join("nope.txt"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("nope.txt"));
    assert!(!stderr.contains("hands,"));
}
