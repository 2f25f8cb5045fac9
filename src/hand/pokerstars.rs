use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::{
    amount::{AmountConverter, ChipFormatter},
    config::ConverterConfig,
    errors::{HandError, HandErrorKind},
    segment::RawBlock,
};

static HAND_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Hand #([0-9]+):").expect("Invalid hand id regex"));

static HAND_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Hold'em (.*) \(([0-9]+)/([0-9]+).*\) - (.*)").expect("Invalid hand header regex")
});

static TABLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Table '(.*)' (.*) \((.*)\) Seat #([0-9]+) is the button")
        .expect("Invalid table header regex")
});

/// The betting structures a Hold'em hand can be played with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameVariant {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl GameVariant {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "No Limit" => Some(GameVariant::NoLimit),
            "Pot Limit" => Some(GameVariant::PotLimit),
            "Fixed Limit" => Some(GameVariant::FixedLimit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::NoLimit => "No Limit",
            GameVariant::PotLimit => "Pot Limit",
            GameVariant::FixedLimit => "Fixed Limit",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A PokerStars play money Hold'em hand with its header parsed.
///
/// Blinds are already scaled to decimal strings without the currency
/// marker. The body holds every line after the two header lines, still
/// in raw chips.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokerStarsHand {
    pub id: String,
    pub timestamp: String,
    pub game: GameVariant,
    pub small_blind: String,
    pub big_blind: String,
    pub table_name: String,
    pub table_size: String,
    pub button: String,
    pub play_money: bool,
    pub body: Vec<String>,
}

struct TableHeader {
    name: String,
    size: String,
    button: String,
}

struct HandHeader {
    game: GameVariant,
    small_blind: String,
    big_blind: String,
    timestamp: String,
}

impl PokerStarsHand {
    /// Parse the two header lines of a PokerStars hand.
    ///
    /// The id is read first, so any later failure names the hand it
    /// happened in.
    pub fn parse(block: RawBlock, config: &ConverterConfig) -> Result<Self, HandError> {
        let header = block.first_line();
        let id = parse_id(header)?;

        let table = parse_table_header(block.line(1).unwrap_or_default(), config)
            .map_err(|kind| HandError::with_id(kind, id.as_str()))?;
        let stakes = parse_hand_header(header, &ChipFormatter::new(config))
            .map_err(|kind| HandError::with_id(kind, id.as_str()))?;

        debug!(%id, game = %stakes.game, table = %table.name, "Parsed PokerStars header");

        let body = block.into_lines().into_iter().skip(2).collect();
        Ok(Self {
            id,
            timestamp: stakes.timestamp,
            game: stakes.game,
            small_blind: stakes.small_blind,
            big_blind: stakes.big_blind,
            table_name: table.name,
            table_size: table.size,
            button: table.button,
            play_money: true,
            body,
        })
    }

    /// Rebuild the two header lines from the parsed fields.
    pub fn header_lines(&self, config: &ConverterConfig) -> [String; 2] {
        let symbol = &config.currency_symbol;
        [
            format!(
                "PokerStars Hand #{}:  Hold'em {} ({symbol}{}/{symbol}{} {}) - {}",
                self.id,
                self.game,
                self.small_blind,
                self.big_blind,
                config.currency_code,
                self.timestamp
            ),
            format!(
                "Table '{}' {} Seat #{} is the button",
                self.table_name, self.table_size, self.button
            ),
        ]
    }

    /// The canonical header, the converted body and a closing blank line.
    pub fn render(&self, config: &ConverterConfig) -> String {
        let converter = AmountConverter::pokerstars(config);

        let mut out = String::new();
        for line in self.header_lines(config) {
            out.push_str(&line);
            out.push('\n');
        }
        for line in &self.body {
            out.push_str(&converter.convert_line(line));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

fn parse_id(line: &str) -> Result<String, HandError> {
    HAND_ID
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| HandError::new(HandErrorKind::MalformedIdentifier(line.to_string())))
}

fn parse_table_header(
    line: &str,
    config: &ConverterConfig,
) -> Result<TableHeader, HandErrorKind> {
    let caps = TABLE_HEADER
        .captures(line)
        .ok_or_else(|| HandErrorKind::MalformedTableHeader(line.to_string()))?;

    if caps[3] != config.play_money_marker {
        return Err(HandErrorKind::NonPlayMoneyTable(line.to_string()));
    }

    Ok(TableHeader {
        name: caps[1].to_string(),
        size: caps[2].trim().to_string(),
        button: caps[4].to_string(),
    })
}

fn parse_hand_header(
    line: &str,
    formatter: &ChipFormatter<'_>,
) -> Result<HandHeader, HandErrorKind> {
    let caps = HAND_HEADER
        .captures(line)
        .ok_or_else(|| HandErrorKind::MalformedHeaderLine(line.to_string()))?;

    let game = GameVariant::from_token(&caps[1])
        .ok_or_else(|| HandErrorKind::UnrecognizedGameType(line.to_string()))?;

    Ok(HandHeader {
        game,
        small_blind: formatter.decimal(&caps[2]),
        big_blind: formatter.decimal(&caps[3]),
        timestamp: caps[4].trim().to_string(),
    })
}
