#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate stars_hh;

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use stars_hh::{AmountConverter, ConverterConfig, HandConverter};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub export: String,
    pub line: String,
}

fuzz_target!(|input: Input| {
    let config = ConverterConfig::default();
    let converter = HandConverter::new(config.clone()).unwrap();

    let mut out = Vec::<u8>::new();
    let mut diag = Vec::new();
    let summary = converter
        .convert_reader(Cursor::new(input.export.as_bytes()), &mut out, &mut diag)
        .unwrap();
    assert!(summary.errors <= summary.hands);
    assert_eq!(
        String::from_utf8(diag).unwrap().lines().count(),
        summary.errors
    );

    let converted = AmountConverter::pokerstars(&config).convert_line(&input.line);
    assert_eq!(converted.trim(), converted);
});
