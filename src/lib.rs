//! # stars_hh
//!
//! Reads PokerStars play money hand history exports and rewrites them with
//! chip counts shown as dollar amounts.
//!
//! Processing happens one hand at a time:
//!
//! 1. [`HandHistoryReader`] splits the export on blank lines.
//! 2. [`RawHand`] detects the network from the first line.
//! 3. [`PokerStarsHand`] parses the hand and table headers.
//! 4. [`AmountConverter`] rewrites the amounts in every other line.
//! 5. The hand is written back out with a canonical header.
//!
//! A hand that cannot be parsed is reported and skipped; the rest of the
//! export is still converted.
//!
//! ```
//! use std::io::Cursor;
//! use stars_hh::{ConverterConfig, HandConverter};
//!
//! let export = "PokerStars Hand #100:  Hold'em No Limit (100/200) - 2024/01/01 10:00:00 ET\n\
//!               Table 'Alpha' 6-max (Play Money) Seat #3 is the button\n\
//!               alice: posts small blind 100\n";
//!
//! let converter = HandConverter::new(ConverterConfig::default()).unwrap();
//! let mut out = Vec::new();
//! let mut diag = Vec::<u8>::new();
//! let summary = converter
//!     .convert_reader(Cursor::new(export), &mut out, &mut diag)
//!     .unwrap();
//!
//! assert_eq!(summary.to_string(), "1 hands, 0 errors");
//! assert!(String::from_utf8(out).unwrap().contains("alice: posts small blind $0.001"));
//! ```

/// Turning chip counts into currency strings.
pub mod amount;
/// Converter configuration.
pub mod config;
/// Running the conversion over a whole export.
pub mod driver;
/// Error types.
pub mod errors;
/// Network detection and header parsing.
pub mod hand;
/// Splitting an export into hand blocks.
pub mod segment;

pub use amount::{AmountConverter, ChipFormatter, ConversionRule, RuleKind};
pub use config::ConverterConfig;
pub use driver::{HandConverter, RunSummary};
pub use errors::{ConvertError, HandError, HandErrorKind};
pub use hand::{GameVariant, Network, ParsedHand, PokerStarsHand, RawHand};
pub use segment::{HandHistoryReader, RawBlock};
