//! Classifying hand blocks by network and parsing them.
//!
//! A [`RawHand`] wraps a block whose network is not known yet. Once the
//! network has been detected the block is turned into the matching
//! [`ParsedHand`] variant.
use std::cell::OnceCell;

use tracing::debug;

use crate::{
    config::ConverterConfig,
    errors::{HandError, HandErrorKind},
    segment::RawBlock,
};

/// Module with the PokerStars header parser and record formatter.
mod pokerstars;
/// Export `PokerStarsHand` and `GameVariant`
pub use self::pokerstars::{GameVariant, PokerStarsHand};

/// The poker networks a hand can come from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Unknown,
    PokerStars,
}

impl Network {
    /// Markers looked for in the first line of a hand.
    const MARKERS: [(&'static str, Network); 1] = [("PokerStars", Network::PokerStars)];

    /// Classify a hand by the first line of its text.
    pub fn detect(first_line: &str) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| first_line.contains(marker))
            .map_or(Network::Unknown, |(_, network)| *network)
    }

    pub fn marker(&self) -> Option<&'static str> {
        Self::MARKERS
            .iter()
            .find(|(_, network)| network == self)
            .map(|(marker, _)| *marker)
    }
}

/// A hand block that has not been parsed yet.
///
/// The network is detected at most once and remembered.
#[derive(Debug, Clone)]
pub struct RawHand {
    block: RawBlock,
    network: OnceCell<Network>,
}

impl RawHand {
    pub fn new(block: RawBlock) -> Self {
        Self {
            block,
            network: OnceCell::new(),
        }
    }

    pub fn block(&self) -> &RawBlock {
        &self.block
    }

    pub fn into_block(self) -> RawBlock {
        self.block
    }

    pub fn network(&self) -> Network {
        *self
            .network
            .get_or_init(|| Network::detect(self.block.first_line()))
    }

    pub fn is_classified(&self) -> bool {
        self.network.get().is_some()
    }
}

impl From<RawBlock> for RawHand {
    fn from(block: RawBlock) -> Self {
        Self::new(block)
    }
}

/// A fully parsed hand, one variant per supported network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedHand {
    PokerStars(PokerStarsHand),
}

impl ParsedHand {
    /// Detect the network of `raw` and parse it with that network's rules.
    pub fn from_raw(raw: RawHand, config: &ConverterConfig) -> Result<Self, HandError> {
        match raw.network() {
            Network::PokerStars => {
                PokerStarsHand::parse(raw.into_block(), config).map(ParsedHand::PokerStars)
            }
            Network::Unknown => {
                let line = raw.block().first_line().to_string();
                debug!(%line, "No network marker found");
                Err(HandError::new(HandErrorKind::UnrecognizedFormat(line)))
            }
        }
    }

    pub fn network(&self) -> Network {
        match self {
            ParsedHand::PokerStars(_) => Network::PokerStars,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ParsedHand::PokerStars(hand) => &hand.id,
        }
    }

    /// The canonical header followed by the converted body, ending with a
    /// blank line.
    pub fn render(&self, config: &ConverterConfig) -> String {
        match self {
            ParsedHand::PokerStars(hand) => hand.render(config),
        }
    }
}
